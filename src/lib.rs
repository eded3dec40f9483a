//! # SOLID Principles & Classic Design Patterns
//!
//! Small, self-contained demonstrations, one module per pattern:
//!
//! ## Behavioral
//! - [`strategy`]: swappable algorithm behind a context
//! - [`state`]: context delegating requests to its current state
//! - [`command`]: requests wrapped as objects against a receiver
//!
//! ## Creational
//! - [`factory`]: factory method with a fixed template operation
//! - [`singleton`]: process-wide logger (`OnceLock`)
//!
//! ## SOLID
//! - [`payment`]: processors, discounts and receipts as separate capabilities
//! - [`violation`]: the same domain with a broad contract and string-tag dispatch
//!
//! Every variant writes through a [`Sink`], so demos can be run against the
//! console or recorded in a [`Transcript`].
//!
//! Run a demo with: `cargo run --bin <name>`

pub mod amount;
pub mod command;
pub mod config;
pub mod error;
pub mod factory;
pub mod payment;
pub mod runner;
pub mod singleton;
pub mod sink;
pub mod state;
pub mod strategy;
pub mod violation;

pub use amount::Amount;
pub use error::PatternError;
pub use sink::{ConsoleSink, Sink, Transcript};
