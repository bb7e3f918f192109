use std::sync::mpsc::Sender;

use crate::accuweather::{ForecastClient, ForecastError};
use crate::forecast::DailyForecast;

pub type FetchResult = Result<Vec<DailyForecast>, ForecastError>;

/// Start the one-shot forecast request in the background and hand the
/// outcome back over `tx`. Called exactly once, when the app is built.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn(ctx: egui::Context, client: ForecastClient, tx: Sender<FetchResult>) {
    let worker = std::thread::Builder::new()
        .name("forecast-fetch".to_owned())
        .spawn({
            let ctx = ctx.clone();
            let tx = tx.clone();
            move || {
                let result = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|err| ForecastError::Worker(err.to_string()))
                    .and_then(|runtime| runtime.block_on(client.five_day()));
                deliver(&ctx, &tx, result);
            }
        });

    // Failing to start the thread takes the same path as a failed request.
    if let Err(err) = worker {
        deliver(&ctx, &tx, Err(ForecastError::Worker(err.to_string())));
    }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn(ctx: egui::Context, client: ForecastClient, tx: Sender<FetchResult>) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = client.five_day().await;
        deliver(&ctx, &tx, result);
    });
}

/// Push the result to the UI and wake it up. If the receiving end is gone
/// the app has already shut down, so the response is simply dropped.
fn deliver(ctx: &egui::Context, tx: &Sender<FetchResult>, result: FetchResult) -> bool {
    match tx.send(result) {
        Ok(()) => {
            ctx.request_repaint();
            true
        }
        Err(_) => {
            log::debug!("forecast response arrived after shutdown; discarded");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn deliver_wakes_a_live_receiver() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::channel();

        assert!(deliver(&ctx, &tx, Ok(Vec::new())));
        assert!(matches!(rx.try_recv(), Ok(Ok(days)) if days.is_empty()));
    }

    #[test]
    fn deliver_after_shutdown_is_a_quiet_no_op() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::channel::<FetchResult>();
        drop(rx);

        assert!(!deliver(&ctx, &tx, Ok(Vec::new())));
    }
}
