use glide_ratio::{
    error, info, log,
    sensor_feed::{SensorFeed, SimulatedFeed},
    session_control::{SessionConfig, SessionController},
};
use std::{env, sync::Arc, time::Duration};

/// Sweep from a steep takeoff attitude through flat to a steep landing attitude.
const SWEEP_FROM_DEG: f64 = 60.0;
const SWEEP_TO_DEG: f64 = 120.0;
const SWEEP_STEPS: usize = 25;
const DEFAULT_RUN_SECS: u64 = 8;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = SessionConfig::from_env();
    let run_for = env::var("GLIDE_DEMO_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map_or(Duration::from_secs(DEFAULT_RUN_SECS), Duration::from_secs);

    let feed: Arc<dyn SensorFeed> =
        Arc::new(SimulatedFeed::inclination_sweep(SWEEP_FROM_DEG, SWEEP_TO_DEG, SWEEP_STEPS));
    let session = Arc::new(SessionController::new(feed, config));
    let mut rx = session.observe();

    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let readout = rx.borrow_and_update().readout(config.readout());
            log!(
                "{:<18} | {:<12} | {:<18} | {}",
                readout.calibration_text(),
                readout.regime_label(),
                readout.icon_name(),
                readout.ratio_text()
            );
        }
    });

    session.start().await;
    tokio::time::sleep(config.settle_delay() + run_for).await;
    session.stop().await;
    drop(session);
    if let Err(e) = printer.await {
        error!("Snapshot printer ended abnormally: {e}");
    }
    info!("Demo finished.");
}
