#![warn(clippy::all, rust_2018_idioms)]

mod accuweather;
mod app;
mod cards;
mod config;
mod fetch;
mod forecast;

pub use accuweather::{ForecastClient, ForecastError};
pub use app::ForecastApp;
pub use config::Config;
pub use forecast::DailyForecast;
