//! Session lifecycle: settling, subscribing, routing samples through the
//! engine and publishing snapshots to observers.

mod glide_snapshot;
mod session_config;
mod session_controller;
mod session_phase;

pub use glide_snapshot::GlideSnapshot;
pub use session_config::SessionConfig;
pub use session_controller::SessionController;
pub use session_phase::SessionPhase;
