//! `peerfeedback` - Anonymous peer feedback over an in-memory roster
//!
//! This library keeps a roster of peers and an append-only log of anonymous
//! comments about them, and renders per-peer summaries. Everything lives in
//! process memory; nothing is persisted.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod roster;
pub mod seed;
pub mod session;
pub mod store;
pub mod summary;

pub use board::FeedbackBoard;
pub use config::Config;
pub use error::{Error, Result};
pub use feedback::FeedbackEntry;
pub use logging::init_logging;
pub use roster::Roster;
pub use session::Session;
pub use store::FeedbackStore;
pub use summary::Summary;
