use super::{SampleDelivery, SampleSlot, SensorFeed, SubscriptionHandle};
use crate::glide_control::GravitySample;
use crate::{event, log};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
    },
    time::Duration,
};
use tokio::{
    sync::Mutex,
    time::{MissedTickBehavior, interval},
};
use tokio_util::sync::CancellationToken;

/// A [`SensorFeed`] replaying a fixed script of deliveries at the requested
/// interval.
///
/// Used by the demo binary and as a stand-in for device hardware in tests.
pub struct SimulatedFeed {
    /// Whether the simulated device reports motion sensing support.
    available: AtomicBool,
    /// Deliveries handed out in order, one per tick.
    script: Arc<[SampleDelivery]>,
    /// Restart from the beginning once the script is exhausted.
    repeat: bool,
    /// Cancellation tokens of all running producers, by subscription id.
    producers: Mutex<HashMap<u64, CancellationToken>>,
    next_id: AtomicU64,
    subscribe_calls: AtomicUsize,
    delivered: Arc<AtomicUsize>,
}

impl SimulatedFeed {
    /// Creates an available feed replaying `script`.
    pub fn new(script: Vec<SampleDelivery>, repeat: bool) -> Self {
        Self {
            available: AtomicBool::new(true),
            script: script.into(),
            repeat,
            producers: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            subscribe_calls: AtomicUsize::new(0),
            delivered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a feed on a device without motion sensing.
    pub fn unavailable() -> Self {
        Self { available: AtomicBool::new(false), ..Self::new(Vec::new(), false) }
    }

    /// Creates a repeating feed sweeping the inclination linearly from
    /// `from_deg` to `to_deg` in `steps` samples.
    pub fn inclination_sweep(from_deg: f64, to_deg: f64, steps: usize) -> Self {
        let steps = steps.max(2);
        #[allow(clippy::cast_precision_loss)]
        let script = (0..steps)
            .map(|i| {
                let inclination = from_deg + (to_deg - from_deg) * i as f64 / (steps - 1) as f64;
                Ok(GravitySample::from_tilt_deg(180.0 - inclination))
            })
            .collect();
        Self::new(script, true)
    }

    /// Switches the reported motion sensing support, e.g. after a permission grant.
    pub fn set_available(&self, available: bool) { self.available.store(available, Ordering::SeqCst); }

    /// Number of times [`SensorFeed::subscribe`] was called.
    pub fn subscribe_calls(&self) -> usize { self.subscribe_calls.load(Ordering::SeqCst) }

    /// Number of deliveries pushed into any slot so far.
    pub fn delivered(&self) -> usize { self.delivered.load(Ordering::SeqCst) }

    /// Number of producers still running.
    pub async fn active_subscriptions(&self) -> usize { self.producers.lock().await.len() }

    async fn produce(
        script: Arc<[SampleDelivery]>,
        repeat: bool,
        period: Duration,
        slot: SampleSlot,
        delivered: Arc<AtomicUsize>,
        c_tok: CancellationToken,
    ) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut idx = 0;
        loop {
            tokio::select! {
                () = c_tok.cancelled() => break,
                _ = ticker.tick() => {
                    if idx >= script.len() {
                        if !repeat || script.is_empty() {
                            break;
                        }
                        idx = 0;
                    }
                    let delivery = script[idx].clone();
                    idx += 1;
                    delivered.fetch_add(1, Ordering::SeqCst);
                    if !slot.deliver(delivery) {
                        event!("Sample consumer gone, stopping simulated producer.");
                        break;
                    }
                }
            }
        }
    }
}

#[async_trait]
impl SensorFeed for SimulatedFeed {
    async fn is_available(&self) -> bool { self.available.load(Ordering::SeqCst) }

    async fn is_active(&self) -> bool { !self.producers.lock().await.is_empty() }

    async fn subscribe(&self, interval: Duration, slot: SampleSlot) -> SubscriptionHandle {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let c_tok = CancellationToken::new();
        self.producers.lock().await.insert(id, c_tok.clone());
        tokio::spawn(Self::produce(
            Arc::clone(&self.script),
            self.repeat,
            interval,
            slot,
            Arc::clone(&self.delivered),
            c_tok,
        ));
        log!("Simulated feed delivering every {}ms.", interval.as_millis());
        SubscriptionHandle::new(id)
    }

    async fn unsubscribe(&self, handle: SubscriptionHandle) {
        if let Some(c_tok) = self.producers.lock().await.remove(&handle.id()) {
            c_tok.cancel();
            log!("Simulated feed {handle} cancelled.");
        }
    }
}
