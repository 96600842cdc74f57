use super::{GlideSnapshot, SessionConfig, SessionPhase};
use crate::glide_control::{
    CalibrationState, GlideEngine, GlideError, GlideResult, Loadable, OrientationRegime,
};
use crate::sensor_feed::{SampleDelivery, SampleInbox, SensorFeed, SubscriptionHandle, sample_slot};
use crate::{event, info, log, warn};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tokio_util::sync::CancellationToken;

/// Mutable session state. Only ever touched while holding the controller lock.
struct SessionState {
    phase: SessionPhase,
    /// Bumped on every `start()` and `stop()`; tasks of an older epoch must not publish.
    epoch: u64,
    c_tok: CancellationToken,
    subscription: Option<SubscriptionHandle>,
    calibration: CalibrationState,
    glide: GlideResult,
    regime: Option<OrientationRegime>,
}

impl SessionState {
    fn idle() -> Self {
        Self {
            phase: SessionPhase::Idle,
            epoch: 0,
            c_tok: CancellationToken::new(),
            subscription: None,
            calibration: Loadable::NotRequested,
            glide: Loadable::NotRequested,
            regime: None,
        }
    }

    fn snapshot(&self) -> GlideSnapshot {
        GlideSnapshot::new(self.calibration.clone(), self.glide.clone(), self.regime)
    }
}

/// The [`SessionController`] owns the published `(calibration, glide, regime)`
/// triple. It starts and stops the [`SensorFeed`], routes every delivered
/// sample through the [`GlideEngine`] and pushes a fresh [`GlideSnapshot`] to
/// all observers after each step.
///
/// Lifecycle: `Idle` -> `Starting` -> `Active` -> `Idle`.
/// - `start()` is a no-op unless the session is `Idle` (or dead after a failed
///   calibration) and the feed is inactive.
/// - An unavailable feed leaves the session in `Starting` with a failed
///   calibration; a fresh `start()` retries.
/// - No snapshot derived from a sample is published after `stop()` returns.
pub struct SessionController {
    feed: Arc<dyn SensorFeed>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    snapshot_tx: watch::Sender<GlideSnapshot>,
}

impl SessionController {
    /// Calibration message shown while the sensors settle.
    pub const CALIBRATION_PENDING_MSG: &'static str = "Calibration";
    /// Calibration message once the feed delivers.
    pub const CALIBRATION_DONE_MSG: &'static str = "Calibration done.";
    /// Failure reason for devices without motion sensing.
    pub const SENSOR_UNAVAILABLE_MSG: &'static str = "Motion service not supported - make sure accelerometer and magnetometer (compass) installed on your device.";

    /// Creates an idle controller.
    ///
    /// # Arguments
    /// * `feed` – The sensor source to subscribe to on `start()`.
    /// * `config` – Settle delay, sample interval and readout settings.
    pub fn new(feed: Arc<dyn SensorFeed>, config: SessionConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(GlideSnapshot::not_requested());
        Self { feed, config, state: Mutex::new(SessionState::idle()), snapshot_tx }
    }

    pub fn config(&self) -> &SessionConfig { &self.config }

    /// Registers a new observer. The receiver immediately holds the current snapshot.
    pub fn observe(&self) -> watch::Receiver<GlideSnapshot> { self.snapshot_tx.subscribe() }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GlideSnapshot { self.snapshot_tx.borrow().clone() }

    pub async fn phase(&self) -> SessionPhase { self.state.lock().await.phase }

    fn publish(&self, state: &SessionState) { self.snapshot_tx.send_replace(state.snapshot()); }

    /// Starts a session: publishes the loading state and spawns the settle and
    /// sample routing task.
    pub async fn start(self: &Arc<Self>) {
        let mut state = self.state.lock().await;
        let dead = state.phase == SessionPhase::Starting && state.calibration.is_failed();
        if !(state.phase == SessionPhase::Idle || dead) || self.feed.is_active().await {
            warn!("Session is {}, ignoring start request.", state.phase);
            return;
        }
        if dead {
            log!("Retrying glide session {} after failed calibration.", state.epoch);
        }
        state.epoch += 1;
        state.c_tok.cancel();
        state.c_tok = CancellationToken::new();
        state.phase = SessionPhase::Starting;
        state.calibration = Loadable::Loading(Some(Self::CALIBRATION_PENDING_MSG.to_string()));
        state.glide = Loadable::Loading(None);
        state.regime = None;
        self.publish(&state);

        let epoch = state.epoch;
        let c_tok = state.c_tok.clone();
        drop(state);

        info!(
            "Starting glide session {epoch}, settling for {}ms.",
            self.config.settle_delay().as_millis()
        );
        let this = Arc::clone(self);
        tokio::spawn(async move {
            this.run(epoch, c_tok).await;
        });
    }

    /// Stops the session, unsubscribes from the feed and resets all published
    /// values. Calling it on an idle session does nothing.
    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        if state.phase == SessionPhase::Idle {
            return;
        }
        state.epoch += 1;
        state.c_tok.cancel();
        if let Some(handle) = state.subscription.take() {
            self.feed.unsubscribe(handle).await;
        }
        state.phase = SessionPhase::Idle;
        state.calibration = Loadable::NotRequested;
        state.glide = Loadable::NotRequested;
        state.regime = None;
        self.publish(&state);
        info!("Glide session stopped.");
    }

    /// Settles, checks the feed and, if available, routes samples until the
    /// session is cancelled.
    async fn run(self: Arc<Self>, epoch: u64, c_tok: CancellationToken) {
        tokio::select! {
            () = c_tok.cancelled() => return,
            () = tokio::time::sleep(self.config.settle_delay()) => {}
        }
        if let Some(inbox) = self.activate(epoch, &c_tok).await {
            self.route_samples(epoch, &c_tok, inbox).await;
        }
    }

    async fn activate(&self, epoch: u64, c_tok: &CancellationToken) -> Option<SampleInbox> {
        let mut state = self.state.lock().await;
        if state.epoch != epoch || c_tok.is_cancelled() {
            return None;
        }
        if !self.feed.is_available().await {
            let err = GlideError::SensorUnavailable(Self::SENSOR_UNAVAILABLE_MSG.to_string());
            warn!("Glide session {epoch} failed: {err}");
            state.calibration = Loadable::Failed(err.to_string());
            self.publish(&state);
            return None;
        }
        let (slot, inbox) = sample_slot();
        let handle = self.feed.subscribe(self.config.sample_interval(), slot).await;
        info!("Glide session {epoch} subscribed with {handle}.");
        state.subscription = Some(handle);
        state.phase = SessionPhase::Active;
        state.calibration = Loadable::Loaded(Self::CALIBRATION_DONE_MSG.to_string());
        self.publish(&state);
        Some(inbox)
    }

    async fn route_samples(&self, epoch: u64, c_tok: &CancellationToken, mut inbox: SampleInbox) {
        loop {
            let delivery = tokio::select! {
                () = c_tok.cancelled() => break,
                next = inbox.next() => match next {
                    Some(delivery) => delivery,
                    None => break,
                },
            };
            let mut state = self.state.lock().await;
            if state.epoch != epoch || state.phase != SessionPhase::Active {
                break;
            }
            Self::apply(&mut state, delivery);
            self.publish(&state);
        }
        event!("Sample routing of session {epoch} ended.");
    }

    fn apply(state: &mut SessionState, delivery: SampleDelivery) {
        match delivery {
            Ok(sample) => {
                let (regime, glide) = GlideEngine::compute(&sample);
                event!("Sample {sample} -> {glide:?} ({regime:?})");
                state.regime = regime;
                state.glide = glide;
            }
            Err(e) => {
                let err = GlideError::from(e);
                warn!("{err}");
                state.glide = Loadable::Failed(err.to_string());
                state.regime = None;
            }
        }
    }
}
