//! Glide ratio estimation from a phone's gravity vector.
//!
//! A [`SessionController`](session_control::SessionController) waits for the
//! motion sensors to settle, subscribes to a
//! [`SensorFeed`](sensor_feed::SensorFeed) and runs every delivered sample
//! through the stateless [`GlideEngine`](glide_control::GlideEngine). Observers
//! receive immutable [`GlideSnapshot`](session_control::GlideSnapshot)s through
//! a watch channel.
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
#![allow(clippy::module_name_repetitions)]

pub mod logger;

pub mod glide_control;
pub mod sensor_feed;
pub mod session_control;
