use strum_macros::Display;

/// Lifecycle phase of a [`SessionController`](super::SessionController).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum SessionPhase {
    /// No session running. `start()` is only honored here.
    Idle,
    /// Settle delay running or the feed failed to come up.
    Starting,
    /// Subscribed and publishing a snapshot per sample.
    Active,
}
