//! Type-safe strategy callback adapter for the V5 robot soccer simulator.
//!
//! The simulator's RPC runtime calls a strategy server once per request with
//! loosely-typed payloads. This crate turns those payloads into strict
//! snapshot types before any strategy code sees them, and guarantees that a
//! malformed payload never takes the server down.
//!
//! # Features
//!
//! - **Normalization**: absent optional scalars default to `0.0`, absent
//!   required references fail with a precise attribute path
//! - **Typed events**: integer event, team and version codes decode to enums
//! - **Catch-all barrier**: every entry point logs and suppresses failures
//! - **Diagnostics**: bounded in-memory log mirrored to `tracing`
//!
//! ## Example
//!
//! ```rust
//! use v5strategy::{HostConfig, StrategyHost};
//! use v5strategy::payload::{RawEventArguments, RawField};
//!
//! let mut host = StrategyHost::demo(HostConfig::default());
//!
//! assert_eq!(host.on_event(1, &RawEventArguments::default()), Some(()));
//! assert_eq!(host.get_team_info(1).unwrap().team_name, "Rust Strategy Server");
//!
//! let field = RawField::from_yaml(
//!     "SelfRobots: []\nOpponentRobots: []\nBall: { Position: { x: 0, y: 0 } }\nTick: 30\n",
//! )?;
//! let instruction = host.get_instruction(&field).unwrap();
//! assert_eq!(instruction.wheels.len(), 5);
//!
//! // A payload without a ball is caught, not propagated
//! let broken = RawField::from_yaml("SelfRobots: []\nOpponentRobots: []\nTick: 31\n")?;
//! assert!(host.get_instruction(&broken).is_none());
//! assert!(host.last_error().is_some());
//! # Ok::<(), v5strategy::StrategyError>(())
//! ```

// Core types and error handling
mod error;
pub mod types;

// Boundary decoding and normalization
pub mod normalize;
pub mod payload;

// Callback surface
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod strategy;

#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Core exports
pub use error::*;
pub use types::*;

// Main API exports
pub use config::HostConfig;
pub use diagnostics::{DiagnosticLog, LogEntry, Severity};
pub use host::StrategyHost;
pub use normalize::{NormalizeReport, Normalizer};
pub use strategy::{DemoStrategy, Strategy};
