//! Strictly-typed snapshot and command types.
//!
//! These are the structures strategy code reads and returns. They never come
//! straight off the wire: incoming payloads arrive as the loosely-typed
//! [`payload`](crate::payload) structures and pass through the
//! [`normalize`](crate::normalize) layer first, so every numeric field here is
//! always populated.
//!
//! ## Architecture
//!
//! - [`Vector2`], [`Wheel`], [`Robot`], [`Ball`], [`Field`] describe one simulation step
//! - [`EventType`], [`JudgeResultEvent`], [`EventArguments`] describe match events
//! - [`Version`] is the protocol version announced by the simulator
//! - [`Instruction`], [`Placement`], [`TeamInfo`] flow back to the simulator
//!
//! ## Usage Example
//!
//! ```rust
//! use v5strategy::types::{Ball, Field, Robot, Vector2};
//!
//! let field = Field {
//!     self_robots: vec![Robot { position: Vector2::new(10.0, -5.0), rotation: 90.0, ..Default::default() }],
//!     opponent_robots: Vec::new(),
//!     ball: Ball { position: Vector2::new(0.0, 0.0) },
//!     tick: 42,
//! };
//!
//! let mirrored = field.reversed();
//! assert_eq!(mirrored.self_robots[0].position, Vector2::new(-10.0, 5.0));
//! assert_eq!(mirrored.self_robots[0].rotation, -90.0);
//! assert_eq!(mirrored.tick, 42);
//! ```

mod command;
mod event;
mod field;
mod geometry;
mod version;

// Re-export all public types
pub use command::{Instruction, PLACEMENT_SLOTS, Placement, Pose, TEAM_SIZE, TeamInfo};
pub use event::{EventArguments, EventType, JudgeResultEvent, ResultType, Team};
pub use field::{Ball, Field, Robot};
pub use geometry::{Vector2, Wheel, reverse_rotation};
pub use version::Version;
