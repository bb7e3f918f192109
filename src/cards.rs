//! The 5-day forecast cards and their width-dependent layout rules.

use std::ops::RangeInclusive;

use egui::text::{LayoutJob, TextFormat};
use egui::{Align, Color32, FontId, Layout, Margin, RichText, Rounding, Stroke};

use crate::accuweather::CITY;
use crate::forecast::DailyForecast;

/// Below this width the cards stack vertically; at or above it they sit in
/// one row.
pub const STACK_BELOW: f32 = 1028.0;

/// The row layout is cramped in this band, so the condition line shrinks.
const NARROW_BAND: RangeInclusive<f32> = 1028.0..=1300.0;

/// Card width in the row layout. Stacked cards take 2/3 of the panel.
const CARD_WIDTH: f32 = 180.0;
const CARD_MARGIN: f32 = 16.0;
const CARD_FILL: Color32 = Color32::from_rgb(120, 160, 210);

const DAY_GLYPH: &str = "☀";
const NIGHT_GLYPH: &str = "🌙";
const PRECIPITATION_GLYPH: &str = "💧";
const CONDITION_GLYPH: &str = "☁";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    Stacked,
    Row,
}

/// An unknown width (nothing measured yet) lays out as stacked.
pub fn layout_for(viewport_width: Option<f32>) -> CardLayout {
    match viewport_width {
        Some(width) if width >= STACK_BELOW => CardLayout::Row,
        _ => CardLayout::Stacked,
    }
}

pub fn condition_text_size(viewport_width: Option<f32>) -> f32 {
    match viewport_width {
        Some(width) if NARROW_BAND.contains(&width) => 6.0,
        _ => 12.0,
    }
}

pub fn ui(ui: &mut egui::Ui, days: &[DailyForecast], viewport_width: Option<f32>) {
    if days.is_empty() {
        return;
    }

    let condition_size = condition_text_size(viewport_width);
    match layout_for(viewport_width) {
        CardLayout::Stacked => {
            let width = ui.available_width() * 2.0 / 3.0;
            ui.vertical_centered(|ui| {
                for day in days {
                    card(ui, day, width, condition_size);
                    ui.add_space(10.0);
                }
            });
        }
        CardLayout::Row => {
            // Center the group by hand; egui has no horizontal_centered.
            let spacing = ui.spacing().item_spacing.x;
            let group = days.len() as f32 * (CARD_WIDTH + spacing) - spacing;
            let lead = ((ui.available_width() - group) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(lead);
                for day in days {
                    card(ui, day, CARD_WIDTH, condition_size);
                }
            });
        }
    }
}

fn card(ui: &mut egui::Ui, day: &DailyForecast, width: f32, condition_size: f32) {
    egui::Frame::none()
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, Color32::from_gray(90)))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(CARD_MARGIN))
        .show(ui, |ui| {
            ui.set_width(width - 2.0 * CARD_MARGIN);

            ui.horizontal(|ui| {
                ui.label(header_text(&day.date_label()));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(header_text(CITY));
                });
            });

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(temperature_text(day));
                ui.label(RichText::new(day.day_condition()).color(Color32::WHITE));
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(PRECIPITATION_GLYPH).size(14.0));
                        ui.label(
                            RichText::new(day.precipitation_label())
                                .size(12.0)
                                .strong()
                                .color(Color32::BLACK),
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(CONDITION_GLYPH).size(14.0));
                        ui.label(
                            RichText::new(day.active_condition())
                                .size(condition_size)
                                .strong()
                                .color(Color32::BLACK),
                        );
                    });
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(period_glyph(day)).size(28.0));
                });
            });
        });
}

fn header_text(text: &str) -> RichText {
    RichText::new(text).size(18.0).strong().color(Color32::WHITE)
}

/// The degrees run bigger than their unit, like on the AccuWeather site.
fn temperature_text(day: &DailyForecast) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        &day.max_celsius().to_string(),
        0.0,
        TextFormat {
            font_id: FontId::proportional(30.0),
            color: Color32::WHITE,
            ..Default::default()
        },
    );
    job.append(
        "°C",
        2.0,
        TextFormat {
            font_id: FontId::proportional(24.0),
            color: Color32::WHITE,
            ..Default::default()
        },
    );
    job
}

fn period_glyph(day: &DailyForecast) -> &'static str {
    if day.is_day_time {
        DAY_GLYPH
    } else {
        NIGHT_GLYPH
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn some_day(is_day_time: bool) -> DailyForecast {
        DailyForecast {
            date: date!(2024 - 03 - 05),
            max_fahrenheit: 71.0,
            day_phrase: "Partly sunny".to_owned(),
            night_phrase: "Clear".to_owned(),
            has_precipitation: false,
            is_day_time,
        }
    }

    #[test]
    fn narrow_viewports_stack() {
        assert_eq!(layout_for(None), CardLayout::Stacked);
        assert_eq!(layout_for(Some(320.0)), CardLayout::Stacked);
        assert_eq!(layout_for(Some(1027.9)), CardLayout::Stacked);
    }

    #[test]
    fn wide_viewports_use_a_row() {
        assert_eq!(layout_for(Some(1028.0)), CardLayout::Row);
        assert_eq!(layout_for(Some(1400.0)), CardLayout::Row);
    }

    #[test]
    fn condition_shrinks_only_in_the_band() {
        assert_eq!(condition_text_size(None), 12.0);
        assert_eq!(condition_text_size(Some(800.0)), 12.0);
        assert_eq!(condition_text_size(Some(1028.0)), 6.0);
        assert_eq!(condition_text_size(Some(1200.0)), 6.0);
        assert_eq!(condition_text_size(Some(1300.0)), 6.0);
        assert_eq!(condition_text_size(Some(1300.1)), 12.0);
        assert_eq!(condition_text_size(Some(1400.0)), 12.0);
    }

    #[test]
    fn glyph_follows_the_reported_period() {
        assert_eq!(period_glyph(&some_day(true)), DAY_GLYPH);
        assert_eq!(period_glyph(&some_day(false)), NIGHT_GLYPH);
    }
}
