//! Match events and referee decisions
//!
//! All enumerations carry fixed integer codes that are stable across protocol
//! versions. Decoding an out-of-range code fails with
//! [`StrategyError::UnknownCode`](crate::StrategyError::UnknownCode).

use serde::{Deserialize, Serialize};

use crate::{Result, StrategyError};

/// Team attribution for referee decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// The team this strategy plays for
    Own = 0,
    Opponent = 1,
    Nobody = 2,
}

impl Team {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Team {
    type Error = StrategyError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Team::Own),
            1 => Ok(Team::Opponent),
            2 => Ok(Team::Nobody),
            other => Err(StrategyError::unknown_code("team", other)),
        }
    }
}

/// Kind of match event delivered to `on_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    JudgeResult = 0,
    MatchStart = 1,
    MatchStop = 2,
    FirstHalfStart = 3,
    SecondHalfStart = 4,
    OvertimeStart = 5,
    PenaltyShootoutStart = 6,
}

impl EventType {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Diagnostic text for the event.
    ///
    /// Judge results are described by their own reason, so this returns `None` for them.
    pub fn description(self) -> Option<&'static str> {
        match self {
            EventType::JudgeResult => None,
            EventType::MatchStart => Some("Match Start"),
            EventType::MatchStop => Some("Match Stop"),
            EventType::FirstHalfStart => Some("First Half Start"),
            EventType::SecondHalfStart => Some("Second Half Start"),
            EventType::OvertimeStart => Some("Overtime Start"),
            EventType::PenaltyShootoutStart => Some("Penalty Shootout Start"),
        }
    }
}

impl TryFrom<i32> for EventType {
    type Error = StrategyError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(EventType::JudgeResult),
            1 => Ok(EventType::MatchStart),
            2 => Ok(EventType::MatchStop),
            3 => Ok(EventType::FirstHalfStart),
            4 => Ok(EventType::SecondHalfStart),
            5 => Ok(EventType::OvertimeStart),
            6 => Ok(EventType::PenaltyShootoutStart),
            other => Err(StrategyError::unknown_code("event type", other)),
        }
    }
}

/// Restart awarded by a referee decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultType {
    PlaceKick = 0,
    GoalKick = 1,
    PenaltyKick = 2,
    FreeKickRightTop = 3,
    FreeKickRightBot = 4,
    FreeKickLeftTop = 5,
    FreeKickLeftBot = 6,
}

impl ResultType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ResultType {
    type Error = StrategyError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(ResultType::PlaceKick),
            1 => Ok(ResultType::GoalKick),
            2 => Ok(ResultType::PenaltyKick),
            3 => Ok(ResultType::FreeKickRightTop),
            4 => Ok(ResultType::FreeKickRightBot),
            5 => Ok(ResultType::FreeKickLeftTop),
            6 => Ok(ResultType::FreeKickLeftBot),
            other => Err(StrategyError::unknown_code("judge result type", other)),
        }
    }
}

/// A refereeing decision.
///
/// Only the reason is guaranteed; the restart kind and the offending side are
/// absent when the referee did not send them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeResultEvent {
    pub result_type: Option<ResultType>,
    pub offensive_team: Option<Team>,
    pub reason: String,
}

/// Event-specific payload; only populated for events that carry one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventArguments {
    pub judge_result: Option<JudgeResultEvent>,
}
