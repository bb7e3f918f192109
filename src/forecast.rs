use time::{Date, Month};

/// One day of the 5-day forecast, as the cards consume it.
///
/// The whole `Vec<DailyForecast>` is replaced in one go whenever a fetch
/// succeeds; entries are never patched individually.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: Date,
    /// Maximum temperature as reported by the API, in Fahrenheit.
    pub max_fahrenheit: f64,
    pub day_phrase: String,
    pub night_phrase: String,
    pub has_precipitation: bool,
    pub is_day_time: bool,
}

impl DailyForecast {
    /// Card header label, e.g. `March 5`.
    pub fn date_label(&self) -> String {
        format!("{} {}", month_name(self.date.month()), self.date.day())
    }

    pub fn max_celsius(&self) -> i32 {
        to_celsius(self.max_fahrenheit)
    }

    /// Main condition line: the first two words of the day phrase.
    pub fn day_condition(&self) -> String {
        short_phrase(&self.day_phrase)
    }

    /// Secondary condition label: day or night phrase depending on the
    /// entry's time of day, shortened to two words.
    pub fn active_condition(&self) -> String {
        if self.is_day_time {
            short_phrase(&self.day_phrase)
        } else {
            short_phrase(&self.night_phrase)
        }
    }

    /// The API only reports *whether* it will rain, so the indicator is all
    /// or nothing.
    pub fn precipitation_label(&self) -> &'static str {
        if self.has_precipitation {
            "100%"
        } else {
            "0%"
        }
    }
}

/// `round((F - 32) * 5 / 9)` as displayed on the cards. Ties round toward
/// positive infinity: `-22.5` becomes `-22`.
pub fn to_celsius(fahrenheit: f64) -> i32 {
    ((fahrenheit - 32.0) * 5.0 / 9.0 + 0.5).floor() as i32
}

fn short_phrase(phrase: &str) -> String {
    phrase.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}
