//! Slidecue Core - slide-timing engine for audio-narrated slideshows
//!
//! This crate contains all timing and editing logic with zero UI
//! dependencies. The presentation layer (image display, playback
//! widgets) lives elsewhere and drives this crate through the
//! [`session::Session`] command surface.
//!
//! # Components
//!
//! - **timecode**: conversions between canonical seconds and textual forms
//! - **subtitles**: SRT parsing and export
//! - **timeline**: the ordered slide collection and active-slide lookup
//! - **timeline::autoshift**: cascading end-boundary edits with two-phase commit
//! - **session**: the owning structure tying the above together
//! - **config**: TOML settings with atomic section updates
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod session;
pub mod subtitles;
pub mod timecode;
pub mod timeline;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
