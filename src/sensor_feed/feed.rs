use super::SampleSlot;
use async_trait::async_trait;
use std::{fmt::Display, time::Duration};

/// Opaque token identifying one active subscription of a [`SensorFeed`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    id: u64,
}

impl SubscriptionHandle {
    pub fn new(id: u64) -> Self { Self { id } }
    pub fn id(&self) -> u64 { self.id }
}

impl Display for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subscription#{}", self.id)
    }
}

/// Source of periodic gravity samples.
///
/// Implementations deliver into the given [`SampleSlot`] from a single
/// background context. The slot only ever holds the latest delivery, so a
/// slow consumer never builds up a backlog.
#[async_trait]
pub trait SensorFeed: Send + Sync {
    /// Whether the device can provide motion samples at all.
    async fn is_available(&self) -> bool;

    /// Whether any subscription is currently delivering.
    async fn is_active(&self) -> bool;

    /// Starts delivering one sample (or delivery error) per `interval` into `slot`.
    async fn subscribe(&self, interval: Duration, slot: SampleSlot) -> SubscriptionHandle;

    /// Stops the subscription. No further delivery happens for `handle` once
    /// this returns.
    async fn unsubscribe(&self, handle: SubscriptionHandle);
}
