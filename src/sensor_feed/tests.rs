use super::{SampleError, SensorFeed, SimulatedFeed, sample_slot};
use crate::glide_control::GravitySample;
use std::time::Duration;
use tokio::time::timeout;

fn sample(z: f64) -> GravitySample { GravitySample::new(0.0, 0.0, z) }

#[tokio::test]
async fn test_slot_keeps_only_latest_delivery() {
    let (slot, mut inbox) = sample_slot();
    assert!(slot.deliver(Ok(sample(-1.0))));
    assert!(slot.deliver(Err(SampleError::new("dropped tick"))));
    assert!(slot.deliver(Ok(sample(0.5))));

    assert_eq!(inbox.next().await, Some(Ok(sample(0.5))));

    // nothing newer is pending, so the next read has to wait
    let pending = timeout(Duration::from_millis(50), inbox.next()).await;
    assert!(pending.is_err());

    assert!(slot.deliver(Err(SampleError::new("gyro"))));
    assert_eq!(inbox.next().await, Some(Err(SampleError::new("gyro"))));
}

#[tokio::test]
async fn test_inbox_ends_when_slot_dropped() {
    let (slot, mut inbox) = sample_slot();
    drop(slot);
    assert_eq!(inbox.next().await, None);

    let (slot, mut inbox) = sample_slot();
    assert!(slot.deliver(Ok(sample(1.0))));
    drop(slot);
    assert_eq!(inbox.next().await, Some(Ok(sample(1.0))));
    assert_eq!(inbox.next().await, None);
}

#[tokio::test]
async fn test_deliver_reports_missing_consumer() {
    let (slot, inbox) = sample_slot();
    assert!(!slot.is_closed());
    drop(inbox);
    assert!(slot.is_closed());
    assert!(!slot.deliver(Ok(sample(-1.0))));
}

#[tokio::test(start_paused = true)]
async fn test_simulated_feed_stops_on_unsubscribe() {
    let feed = SimulatedFeed::new(vec![Ok(sample(-1.0)), Ok(sample(0.5))], true);
    let (slot, mut inbox) = sample_slot();
    let handle = feed.subscribe(Duration::from_millis(100), slot).await;
    assert!(feed.is_active().await);

    assert_eq!(inbox.next().await, Some(Ok(sample(-1.0))));
    assert_eq!(inbox.next().await, Some(Ok(sample(0.5))));
    assert_eq!(inbox.next().await, Some(Ok(sample(-1.0))));

    feed.unsubscribe(handle).await;
    assert!(!feed.is_active().await);
    // the producer drops its slot once cancelled
    assert!(timeout(Duration::from_secs(1), inbox.next()).await.is_ok_and(|d| d.is_none()));
    let delivered = feed.delivered();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(feed.delivered(), delivered);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_feed_without_repeat_runs_once() {
    let feed = SimulatedFeed::new(vec![Ok(sample(1.0))], false);
    let (slot, mut inbox) = sample_slot();
    let _handle = feed.subscribe(Duration::from_millis(100), slot).await;
    assert_eq!(inbox.next().await, Some(Ok(sample(1.0))));
    assert_eq!(inbox.next().await, None);
    assert_eq!(feed.delivered(), 1);
}
