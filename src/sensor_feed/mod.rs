//! Contract of the motion sensor source and a scripted implementation of it.

mod feed;
mod sample_slot;
mod simulated_feed;
#[cfg(test)]
mod tests;

pub use feed::{SensorFeed, SubscriptionHandle};
pub use sample_slot::{SampleDelivery, SampleError, SampleInbox, SampleSlot, sample_slot};
pub use simulated_feed::SimulatedFeed;
