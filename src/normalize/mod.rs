//! Payload normalization: raw RPC payloads to strict snapshot types.
//!
//! Every callback that reads the field runs the payload through this layer
//! first, so strategy code never has to check for missing attributes.
//!
//! # Contract
//!
//! - Optional scalars (`x`, `y`, `LeftSpeed`, `RightSpeed`, `Rotation`) that are
//!   absent become `0.0`, each one independently
//! - Present attributes are copied as they are
//! - Required references (`Position`, `Wheel`, `SelfRobots`, `OpponentRobots`,
//!   `Ball`, `Tick`) that are absent fail with
//!   [`StrategyError::MissingAttribute`](crate::StrategyError::MissingAttribute);
//!   the error is propagated, never recovered here
//! - Roster order and length are preserved and `Tick` is copied verbatim
//!
//! The transform is pure: it reads the payload and builds a new value.
//!
//! # Example
//!
//! ```rust
//! use v5strategy::normalize::Normalizer;
//! use v5strategy::payload::RawField;
//!
//! let raw = RawField::from_yaml(
//!     "SelfRobots:\n  - { Position: { x: 4.0 }, Wheel: {} }\nOpponentRobots: []\nBall: { Position: {} }\nTick: 42\n",
//! )?;
//!
//! let mut normalizer = Normalizer::new();
//! let field = normalizer.field(&raw)?;
//! let report = normalizer.finish();
//!
//! assert_eq!(field.tick, 42);
//! assert_eq!(field.self_robots[0].position.x, 4.0);
//! assert_eq!(field.self_robots[0].position.y, 0.0);
//! assert!(report.contains("SelfRobots[0].Position.y"));
//! assert!(report.contains("Ball.Position.x"));
//! # Ok::<(), v5strategy::StrategyError>(())
//! ```

mod normalizer;
mod report;

pub use normalizer::{
    Normalizer, normalize_ball, normalize_event_arguments, normalize_field, normalize_robot,
    normalize_vector2, normalize_wheel,
};
pub use report::{NormalizeReport, SCALAR_DEFAULT};
