//! Callback entry points invoked by the RPC runtime.
//!
//! [`StrategyHost`] is the outermost call boundary. It decodes enumeration
//! codes, normalizes payloads, applies the configured coordinate mirroring and
//! forwards to the [`Strategy`]. Whatever fails on the way is caught by the
//! barrier: the error is logged, kept as [`StrategyHost::last_error`], and the
//! entry point returns `None`. No error reaches the runtime.

use tracing::{debug, error};

use crate::config::HostConfig;
use crate::diagnostics::{DiagnosticLog, LogEntry};
use crate::normalize::Normalizer;
use crate::payload::{RawEventArguments, RawField};
use crate::strategy::{DemoStrategy, Strategy};
use crate::types::{EventArguments, EventType, Field, Instruction, Placement, TeamInfo, Version};
use crate::{Result, StrategyError};

const CATCHALL_TAG: &str = "catchall";

pub struct StrategyHost<S> {
    strategy: S,
    config: HostConfig,
    log: DiagnosticLog,
    last_error: Option<StrategyError>,
}

impl StrategyHost<DemoStrategy> {
    /// Host the demonstration strategy under the configured team name.
    pub fn demo(config: HostConfig) -> Self {
        let strategy = DemoStrategy::new(config.team_name.clone());
        Self::new(strategy, config)
    }
}

impl<S: Strategy> StrategyHost<S> {
    pub fn new(strategy: S, config: HostConfig) -> Self {
        let log = DiagnosticLog::with_capacity(config.log_capacity);
        Self { strategy, config, log, last_error: None }
    }

    /// Deliver a match event. Unknown event codes are caught by the barrier.
    pub fn on_event(&mut self, event_code: i32, args: &RawEventArguments) -> Option<()> {
        let outcome = self.try_on_event(event_code, args);
        self.barrier("on_event", outcome)
    }

    /// Report the team name. Unknown version codes are treated as V1.0.
    pub fn get_team_info(&mut self, server_version: i32) -> Option<TeamInfo> {
        let version = Version::from_code(server_version);
        let outcome = self.strategy.team_info(version, &mut self.log);
        self.barrier("get_team_info", outcome)
    }

    /// Normalize the field and ask the strategy for wheel commands.
    pub fn get_instruction(&mut self, raw: &RawField) -> Option<Instruction> {
        let outcome = self.try_instruction(raw);
        self.barrier("get_instruction", outcome)
    }

    /// Ask the strategy for restart poses. The field is not normalized.
    pub fn get_placement(&mut self, raw: &RawField) -> Option<Placement> {
        let outcome = self.strategy.placement(raw, &mut self.log).map(|placement| {
            if self.config.reverse_coordinates { placement.reversed() } else { placement }
        });
        self.barrier("get_placement", outcome)
    }

    fn try_on_event(&mut self, event_code: i32, raw: &RawEventArguments) -> Result<()> {
        let event = EventType::try_from(event_code)?;
        // Arguments only mean something for judge results; anything else attached is ignored
        let args = match event {
            EventType::JudgeResult => Normalizer::new().event_arguments(raw)?,
            _ => EventArguments::default(),
        };
        self.strategy.on_event(event, &args, &mut self.log)
    }

    fn try_instruction(&mut self, raw: &RawField) -> Result<Instruction> {
        let field = self.normalize(raw)?;
        self.strategy.instruction(&field, &mut self.log)
    }

    fn normalize(&mut self, raw: &RawField) -> Result<Field> {
        let mut normalizer = Normalizer::new();
        let field = normalizer.field(raw)?;
        let report = normalizer.finish();
        if !report.is_complete() {
            debug!(
                tick = field.tick,
                defaulted = ?report.defaulted(),
                "Filled absent attributes with defaults"
            );
        }

        if self.config.reverse_coordinates { Ok(field.reversed()) } else { Ok(field) }
    }

    fn barrier<T>(&mut self, entry_point: &'static str, outcome: Result<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                error!(entry_point, error = %err, "Callback failed; returning no result");
                self.log.error(
                    CATCHALL_TAG,
                    format!("An error is caught by catchall in {entry_point}: {err}"),
                );
                self.last_error = Some(err);
                None
            }
        }
    }

    /// Error caught by the most recent failing entry point.
    pub fn last_error(&self) -> Option<&StrategyError> {
        self.last_error.as_ref()
    }

    pub fn take_last_error(&mut self) -> Option<StrategyError> {
        self.last_error.take()
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    /// Log entries at or above the configured `log_level`.
    pub fn visible_log(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.filtered(self.config.log_level, None)
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }
}
