//! Conversion from raw payloads to strict snapshot types

use crate::payload::{
    RawBall, RawEventArguments, RawField, RawJudgeResult, RawRobot, RawVector2, RawWheel,
};
use crate::types::{
    Ball, EventArguments, Field, JudgeResultEvent, ResultType, Robot, Team, Vector2, Wheel,
};
use crate::{Result, StrategyError};

use super::{NormalizeReport, SCALAR_DEFAULT};

/// Walks a raw payload, tracking the current attribute path.
///
/// Optional scalars that are absent are replaced by [`SCALAR_DEFAULT`] and
/// recorded in the report. Absent required references fail with
/// [`StrategyError::MissingAttribute`] naming the full path.
#[derive(Debug, Default)]
pub struct Normalizer {
    path: Vec<String>,
    report: NormalizeReport,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the normalizer and return the defaults it applied.
    pub fn finish(self) -> NormalizeReport {
        self.report
    }

    pub fn vector2(&mut self, raw: &RawVector2) -> Vector2 {
        Vector2 { x: self.scalar("x", raw.x), y: self.scalar("y", raw.y) }
    }

    pub fn wheel(&mut self, raw: &RawWheel) -> Wheel {
        Wheel {
            left_speed: self.scalar("LeftSpeed", raw.left_speed),
            right_speed: self.scalar("RightSpeed", raw.right_speed),
        }
    }

    pub fn robot(&mut self, raw: &RawRobot) -> Result<Robot> {
        let position = self.required("Position", raw.position.as_ref())?;
        let position = self.scoped("Position", |n| n.vector2(position));
        let rotation = self.scalar("Rotation", raw.rotation);
        let wheel = self.required("Wheel", raw.wheel.as_ref())?;
        let wheel = self.scoped("Wheel", |n| n.wheel(wheel));

        Ok(Robot { position, rotation, wheel })
    }

    pub fn ball(&mut self, raw: &RawBall) -> Result<Ball> {
        let position = self.required("Position", raw.position.as_ref())?;
        Ok(Ball { position: self.scoped("Position", |n| n.vector2(position)) })
    }

    pub fn field(&mut self, raw: &RawField) -> Result<Field> {
        let self_robots = self.roster("SelfRobots", raw.self_robots.as_deref())?;
        let opponent_robots = self.roster("OpponentRobots", raw.opponent_robots.as_deref())?;
        let ball = self.required("Ball", raw.ball.as_ref())?;
        let ball = self.scoped("Ball", |n| n.ball(ball))?;
        let tick = *self.required("Tick", raw.tick.as_ref())?;

        Ok(Field { self_robots, opponent_robots, ball, tick })
    }

    /// Only `Reason` is required. `Type` and `OffensiveTeam` stay `None` when
    /// absent but are range-checked when present.
    pub fn judge_result(&mut self, raw: &RawJudgeResult) -> Result<JudgeResultEvent> {
        let reason = self.required("Reason", raw.reason.as_ref())?;
        let result_type = raw.result_type.map(ResultType::try_from).transpose()?;
        let offensive_team = raw.offensive_team.map(Team::try_from).transpose()?;

        Ok(JudgeResultEvent { result_type, offensive_team, reason: reason.clone() })
    }

    pub fn event_arguments(&mut self, raw: &RawEventArguments) -> Result<EventArguments> {
        let judge_result = match raw.judge_result.as_ref() {
            Some(judge) => Some(self.scoped("JudgeResult", |n| n.judge_result(judge))?),
            None => None,
        };
        Ok(EventArguments { judge_result })
    }

    fn roster(&mut self, name: &str, raw: Option<&[RawRobot]>) -> Result<Vec<Robot>> {
        let robots = self.required(name, raw)?;
        robots
            .iter()
            .enumerate()
            .map(|(index, robot)| self.scoped(&format!("{name}[{index}]"), |n| n.robot(robot)))
            .collect()
    }

    fn scalar(&mut self, name: &str, value: Option<f32>) -> f32 {
        match value {
            Some(value) => value,
            None => {
                let path = self.path_to(name);
                self.report.record(path);
                SCALAR_DEFAULT
            }
        }
    }

    fn required<'a, T: ?Sized>(&self, name: &str, value: Option<&'a T>) -> Result<&'a T> {
        value.ok_or_else(|| StrategyError::missing_attribute(self.path_to(name)))
    }

    fn scoped<T>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.to_string());
        let out = f(self);
        self.path.pop();
        out
    }

    fn path_to(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path.join("."), name)
        }
    }
}

/// Normalize a position, defaulting each absent axis to 0.0 independently.
pub fn normalize_vector2(raw: &RawVector2) -> Vector2 {
    Normalizer::new().vector2(raw)
}

/// Normalize wheel speeds, defaulting each absent speed to 0.0 independently.
pub fn normalize_wheel(raw: &RawWheel) -> Wheel {
    Normalizer::new().wheel(raw)
}

/// Normalize a robot. `Position` and `Wheel` must be present; `Rotation` defaults to 0.0.
pub fn normalize_robot(raw: &RawRobot) -> Result<Robot> {
    Normalizer::new().robot(raw)
}

/// Normalize a ball. `Position` must be present.
pub fn normalize_ball(raw: &RawBall) -> Result<Ball> {
    Normalizer::new().ball(raw)
}

/// Normalize a field snapshot, preserving roster order and copying `Tick` verbatim.
pub fn normalize_field(raw: &RawField) -> Result<Field> {
    Normalizer::new().field(raw)
}

/// Normalize event arguments, decoding the judge result when one is attached.
pub fn normalize_event_arguments(raw: &RawEventArguments) -> Result<EventArguments> {
    Normalizer::new().event_arguments(raw)
}
