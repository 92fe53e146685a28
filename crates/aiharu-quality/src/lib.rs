//! Quality scoring core for the aiharu platform.
//!
//! The crate carries the deterministic prompt/answer scoring engine together with the
//! submission history service that persists scored submissions per owner, plus the
//! configuration, telemetry, and error plumbing the HTTP binary builds on.

pub mod config;
pub mod error;
pub mod history;
pub mod quality;
pub mod telemetry;
