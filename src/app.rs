use std::sync::mpsc::{self, Receiver};

use crate::accuweather::ForecastClient;
use crate::config::Config;
use crate::forecast::DailyForecast;
use crate::{cards, fetch};

pub struct ForecastApp {
    forecast: Vec<DailyForecast>,
    viewport_width: Option<f32>,
    incoming: Receiver<fetch::FetchResult>,
}

impl ForecastApp {
    /// Build the app and kick off the single forecast request.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        if !config.has_api_key() {
            log::warn!("no AccuWeather API key configured; the forecast request will be rejected");
        }

        let (tx, rx) = mpsc::channel();
        fetch::spawn(cc.egui_ctx.clone(), ForecastClient::new(&config), tx);
        Self::with_channel(rx)
    }

    fn with_channel(incoming: Receiver<fetch::FetchResult>) -> Self {
        ForecastApp {
            forecast: Vec::new(),
            viewport_width: None,
            incoming,
        }
    }

    /// A failed fetch is logged and otherwise invisible: whatever list was
    /// on screen stays on screen.
    fn apply_fetch(&mut self, result: fetch::FetchResult) {
        match result {
            Ok(days) => self.forecast = days,
            Err(err) => log::error!("forecast fetch failed: {err}"),
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            // The top panel is often a good place for a menu bar:

            egui::menu::bar(ui, |ui| {
                // NOTE: no File->Quit on web pages!
                let is_web = cfg!(target_arch = "wasm32");
                if !is_web {
                    ui.menu_button("File", |ui| {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.add_space(16.0);
                }

                egui::widgets::global_dark_light_mode_buttons(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                cards::ui(ui, &self.forecast, self.viewport_width);
            });
        });
    }
}

impl eframe::App for ForecastApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        while let Ok(result) = self.incoming.try_recv() {
            self.apply_fetch(result);
        }
        self.viewport_width = Some(ctx.screen_rect().width());
        self.ui(ctx, frame);
    }
}
