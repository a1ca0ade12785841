//! Strategy callbacks invoked once per simulator request.
//!
//! A [`Strategy`] receives already normalized input (except for placement,
//! which gets the raw payload) and returns a [`Result`]. Errors are never
//! swallowed here; [`StrategyHost`](crate::StrategyHost) decides what to do
//! with them.

mod demo;

pub use demo::{DEFAULT_WHEEL, DemoStrategy, PLACEMENT_RANGE};

use crate::Result;
use crate::diagnostics::DiagnosticLog;
use crate::payload::RawField;
use crate::types::{EventArguments, EventType, Field, Instruction, Placement, TeamInfo, Version};

/// Callback surface of a strategy server.
///
/// All calls are synchronous and independent; no snapshot outlives the call
/// that received it.
pub trait Strategy {
    /// React to a match event.
    fn on_event(
        &mut self,
        event: EventType,
        args: &EventArguments,
        log: &mut DiagnosticLog,
    ) -> Result<()>;

    /// Identify this strategy to a server speaking `version`.
    fn team_info(&mut self, version: Version, log: &mut DiagnosticLog) -> Result<TeamInfo>;

    /// Wheel commands for the current tick.
    fn instruction(&mut self, field: &Field, log: &mut DiagnosticLog) -> Result<Instruction>;

    /// Poses for a restart. The field is passed through without normalization.
    fn placement(&mut self, field: &RawField, log: &mut DiagnosticLog) -> Result<Placement>;
}
