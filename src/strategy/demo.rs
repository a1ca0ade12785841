//! Placeholder strategy: fixed spin commands and random placements

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::trace;

use super::Strategy;
use crate::diagnostics::DiagnosticLog;
use crate::payload::RawField;
use crate::types::{
    EventArguments, EventType, Field, Instruction, PLACEMENT_SLOTS, Placement, Pose, TEAM_SIZE,
    TeamInfo, Version, Wheel,
};
use crate::{Result, StrategyError};

/// Wheel command sent to every robot: spin in place.
pub const DEFAULT_WHEEL: Wheel = Wheel { left_speed: 125.0, right_speed: -125.0 };

/// Bound of the random placement coordinates, inclusive on both ends.
pub const PLACEMENT_RANGE: i32 = 50;

const TAG: &str = "strategy";

/// Demonstration strategy used to exercise the adapter end to end.
#[derive(Debug)]
pub struct DemoStrategy<R = StdRng> {
    team_name: String,
    rng: R,
}

impl DemoStrategy<StdRng> {
    /// Create a strategy seeded from system entropy.
    pub fn new(team_name: impl Into<String>) -> Self {
        Self::with_rng(team_name, StdRng::from_entropy())
    }
}

impl<R: Rng> DemoStrategy<R> {
    /// Create a strategy drawing placements from `rng`.
    pub fn with_rng(team_name: impl Into<String>, rng: R) -> Self {
        Self { team_name: team_name.into(), rng }
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }
}

impl<R: Rng> Strategy for DemoStrategy<R> {
    fn on_event(
        &mut self,
        event: EventType,
        args: &EventArguments,
        log: &mut DiagnosticLog,
    ) -> Result<()> {
        match event.description() {
            Some(text) => log.info(TAG, text),
            None => {
                let judge = args
                    .judge_result
                    .as_ref()
                    .ok_or_else(|| StrategyError::missing_attribute("JudgeResult"))?;
                log.info(TAG, judge.reason.clone());
            }
        }
        Ok(())
    }

    fn team_info(&mut self, version: Version, log: &mut DiagnosticLog) -> Result<TeamInfo> {
        log.info(TAG, format!("server rpc version: {}", version.label()));
        Ok(TeamInfo { team_name: self.team_name.clone() })
    }

    fn instruction(&mut self, field: &Field, log: &mut DiagnosticLog) -> Result<Instruction> {
        if field.tick.rem_euclid(10) == 0 {
            log.info(TAG, format!("tick = {}", field.tick));
        }
        Ok(Instruction { wheels: vec![DEFAULT_WHEEL; TEAM_SIZE], control_info: 0 })
    }

    fn placement(&mut self, field: &RawField, _log: &mut DiagnosticLog) -> Result<Placement> {
        trace!(tick = ?field.tick, "Generating random placement");
        let poses = (0..PLACEMENT_SLOTS)
            .map(|_| {
                let x = self.rng.gen_range(-PLACEMENT_RANGE..=PLACEMENT_RANGE);
                let y = self.rng.gen_range(-PLACEMENT_RANGE..=PLACEMENT_RANGE);
                Pose::new(x as f32, y as f32, 0.0)
            })
            .collect();
        Ok(Placement { poses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ball, JudgeResultEvent, ResultType, Team};
    use proptest::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn strategy(seed: u64) -> DemoStrategy<ChaCha8Rng> {
        DemoStrategy::with_rng("Test Team", ChaCha8Rng::seed_from_u64(seed))
    }

    fn field_at(tick: i32) -> Field {
        Field { self_robots: Vec::new(), opponent_robots: Vec::new(), ball: Ball::default(), tick }
    }

    proptest! {
        #[test]
        fn prop_instruction_is_five_spin_commands(tick in any::<i32>()) {
            let mut log = DiagnosticLog::new();
            let instruction = strategy(0).instruction(&field_at(tick), &mut log).unwrap();

            prop_assert_eq!(instruction.pairs(), vec![(125.0, -125.0); 5]);
            prop_assert_eq!(instruction.control_info, 0);

            let tick_line = format!("tick = {tick}");
            prop_assert_eq!(log.messages().contains(&tick_line.as_str()), tick % 10 == 0);
        }

        #[test]
        fn prop_placement_is_six_poses_within_range(seed in any::<u64>()) {
            let mut log = DiagnosticLog::new();
            let placement = strategy(seed).placement(&RawField::default(), &mut log).unwrap();

            prop_assert_eq!(placement.poses.len(), 6);
            for (x, y, rotation) in placement.triples() {
                prop_assert!((-50.0..=50.0).contains(&x));
                prop_assert!((-50.0..=50.0).contains(&y));
                prop_assert_eq!(x.fract(), 0.0);
                prop_assert_eq!(y.fract(), 0.0);
                prop_assert_eq!(rotation, 0.0);
            }
        }
    }

    #[test]
    fn match_events_log_their_description() {
        let mut log = DiagnosticLog::new();
        let mut strategy = strategy(1);

        strategy.on_event(EventType::MatchStart, &EventArguments::default(), &mut log).unwrap();
        strategy.on_event(EventType::OvertimeStart, &EventArguments::default(), &mut log).unwrap();

        assert_eq!(log.messages(), vec!["Match Start", "Overtime Start"]);
    }

    #[test]
    fn judge_result_logs_reason() {
        let mut log = DiagnosticLog::new();
        let args = EventArguments {
            judge_result: Some(JudgeResultEvent {
                result_type: Some(ResultType::GoalKick),
                offensive_team: Some(Team::Own),
                reason: "ball out over goal line".to_string(),
            }),
        };

        strategy(1).on_event(EventType::JudgeResult, &args, &mut log).unwrap();
        assert_eq!(log.messages(), vec!["ball out over goal line"]);
    }

    #[test]
    fn judge_result_without_arguments_fails() {
        let mut log = DiagnosticLog::new();
        let err = strategy(1)
            .on_event(EventType::JudgeResult, &EventArguments::default(), &mut log)
            .unwrap_err();
        assert!(matches!(err, StrategyError::MissingAttribute { ref path } if path == "JudgeResult"));
        assert!(log.is_empty());
    }

    #[test]
    fn team_info_reports_version_label() {
        let mut log = DiagnosticLog::new();
        let info = strategy(1).team_info(Version::V1_1, &mut log).unwrap();

        assert_eq!(info.team_name, "Test Team");
        assert_eq!(log.messages(), vec!["server rpc version: V1.1"]);
    }

    #[test]
    fn placement_is_reproducible_for_a_seed() {
        let mut log = DiagnosticLog::new();
        let first = strategy(7).placement(&RawField::default(), &mut log).unwrap();
        let second = strategy(7).placement(&RawField::default(), &mut log).unwrap();
        assert_eq!(first, second);
    }
}
