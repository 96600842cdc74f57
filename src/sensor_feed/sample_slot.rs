use crate::glide_control::{GlideError, GravitySample};
use std::fmt::Display;
use tokio::sync::watch;

/// Error reported by the sensor source for a single delivery tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleError {
    message: String,
}

impl SampleError {
    pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }
    pub fn message(&self) -> &str { &self.message }
}

impl Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SampleError {}

impl From<SampleError> for GlideError {
    fn from(value: SampleError) -> Self { GlideError::SampleDelivery(value.message) }
}

/// One tick of the sensor source.
pub type SampleDelivery = Result<GravitySample, SampleError>;

/// Creates a single-slot, latest-wins hand-off between a sensor producer and
/// the session consumer.
///
/// # Returns
/// A tuple `(SampleSlot, SampleInbox)` for the producer and consumer side.
pub fn sample_slot() -> (SampleSlot, SampleInbox) {
    let (tx, rx) = watch::channel(None);
    (SampleSlot { tx }, SampleInbox { rx })
}

/// Producer side of [`sample_slot`].
#[derive(Debug)]
pub struct SampleSlot {
    tx: watch::Sender<Option<SampleDelivery>>,
}

impl SampleSlot {
    /// Overwrites whatever delivery is still pending.
    ///
    /// # Returns
    /// `false` once the consumer is gone and producing can stop.
    pub fn deliver(&self, delivery: SampleDelivery) -> bool {
        self.tx.send_replace(Some(delivery));
        !self.tx.is_closed()
    }

    pub fn is_closed(&self) -> bool { self.tx.is_closed() }
}

/// Consumer side of [`sample_slot`].
#[derive(Debug)]
pub struct SampleInbox {
    rx: watch::Receiver<Option<SampleDelivery>>,
}

impl SampleInbox {
    /// Waits for a delivery newer than the last one taken.
    ///
    /// # Returns
    /// `None` once the producer side has been dropped.
    pub async fn next(&mut self) -> Option<SampleDelivery> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(delivery) = self.rx.borrow_and_update().clone() {
                return Some(delivery);
            }
        }
    }
}
