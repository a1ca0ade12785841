//! Loosely-typed payloads as delivered by the RPC runtime.
//!
//! The runtime does not guarantee that every attribute is present, so each
//! attribute here is an `Option`. Absence is decided once, while decoding, and
//! the [`normalize`](crate::normalize) layer later turns these structures into
//! the strict [`types`](crate::types).
//!
//! Attribute names follow the wire format: `x`/`y` for vectors, PascalCase for
//! everything else. Unknown attributes are ignored. Payload text is YAML, which
//! also accepts JSON documents.
//!
//! ```rust
//! use v5strategy::payload::RawField;
//!
//! let raw = RawField::from_yaml(r#"{"Ball": {"Position": {"x": 1.5}}, "Tick": 3}"#)?;
//! let position = raw.ball.unwrap().position.unwrap();
//! assert_eq!(position.x, Some(1.5));
//! assert_eq!(position.y, None);
//! assert!(raw.self_robots.is_none());
//! # Ok::<(), v5strategy::StrategyError>(())
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Result, StrategyError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVector2 {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawWheel {
    pub left_speed: Option<f32>,
    pub right_speed: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawRobot {
    pub position: Option<RawVector2>,
    pub rotation: Option<f32>,
    pub wheel: Option<RawWheel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawBall {
    pub position: Option<RawVector2>,
}

/// Field snapshot exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawField {
    pub self_robots: Option<Vec<RawRobot>>,
    pub opponent_robots: Option<Vec<RawRobot>>,
    pub ball: Option<RawBall>,
    pub tick: Option<i32>,
}

impl RawField {
    /// Decode a field payload from YAML or JSON text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        decode_text(text, "field payload")
    }

    /// Decode a field payload from an already parsed document.
    pub fn from_value(value: serde_yaml_ng::Value) -> Result<Self> {
        decode_value(value, "field payload")
    }
}

/// Referee decision as received; enum codes are still plain integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawJudgeResult {
    #[serde(rename = "Type")]
    pub result_type: Option<i32>,
    pub offensive_team: Option<i32>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawEventArguments {
    pub judge_result: Option<RawJudgeResult>,
}

impl RawEventArguments {
    /// Decode event arguments from YAML or JSON text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        decode_text(text, "event arguments")
    }

    pub fn from_value(value: serde_yaml_ng::Value) -> Result<Self> {
        decode_value(value, "event arguments")
    }
}

fn decode_text<T: DeserializeOwned + Default>(text: &str, context: &str) -> Result<T> {
    // An empty document is an object without attributes
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml_ng::from_str(text).map_err(|e| StrategyError::decode(context, e.to_string()))
}

fn decode_value<T: DeserializeOwned + Default>(
    value: serde_yaml_ng::Value,
    context: &str,
) -> Result<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_yaml_ng::from_value(value).map_err(|e| StrategyError::decode(context, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_complete_field() {
        let yaml = r#"
SelfRobots:
  - Position: { x: 1.0, y: 2.0 }
    Rotation: 45.0
    Wheel: { LeftSpeed: 10.0, RightSpeed: -10.0 }
OpponentRobots: []
Ball:
  Position: { x: -3.5, y: 4.25 }
Tick: 120
"#;
        let raw = RawField::from_yaml(yaml).unwrap();

        let robots = raw.self_robots.as_ref().unwrap();
        assert_eq!(robots.len(), 1);
        assert_eq!(robots[0].rotation, Some(45.0));
        assert_eq!(robots[0].wheel.as_ref().unwrap().right_speed, Some(-10.0));
        assert_eq!(raw.opponent_robots, Some(Vec::new()));
        assert_eq!(raw.ball.unwrap().position.unwrap().y, Some(4.25));
        assert_eq!(raw.tick, Some(120));
    }

    #[test]
    fn absent_attributes_decode_to_none() {
        let raw = RawField::from_yaml("SelfRobots:\n  - Position: { y: 7.0 }\n").unwrap();
        let robot = &raw.self_robots.unwrap()[0];
        assert_eq!(robot.position.as_ref().unwrap().x, None);
        assert_eq!(robot.position.as_ref().unwrap().y, Some(7.0));
        assert_eq!(robot.rotation, None);
        assert!(robot.wheel.is_none());
        assert!(raw.ball.is_none());
        assert!(raw.tick.is_none());
    }

    #[test]
    fn json_payloads_are_accepted() {
        let raw = RawField::from_yaml(r#"{"Tick": 42, "Ball": {"Position": {"x": 0, "y": 1}}}"#)
            .unwrap();
        assert_eq!(raw.tick, Some(42));
        assert_eq!(raw.ball.unwrap().position.unwrap().x, Some(0.0));
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let raw = RawField::from_yaml("Tick: 1\nWeather: sunny\n").unwrap();
        assert_eq!(raw.tick, Some(1));
    }

    #[test]
    fn wrongly_typed_attribute_is_a_decode_error() {
        let err = RawField::from_yaml("Tick: soon\n").unwrap_err();
        assert!(matches!(err, StrategyError::Decode { .. }));
        assert!(err.to_string().contains("field payload"));
    }

    #[test]
    fn empty_documents_decode_to_empty_payloads() {
        assert_eq!(RawField::from_yaml("  \n").unwrap(), RawField::default());
        assert_eq!(
            RawEventArguments::from_value(serde_yaml_ng::Value::Null).unwrap(),
            RawEventArguments::default()
        );
    }

    #[test]
    fn decodes_judge_result_arguments() {
        let args = RawEventArguments::from_yaml(
            "JudgeResult:\n  Type: 2\n  OffensiveTeam: 1\n  Reason: foul in box\n",
        )
        .unwrap();
        let judge = args.judge_result.unwrap();
        assert_eq!(judge.result_type, Some(2));
        assert_eq!(judge.offensive_team, Some(1));
        assert_eq!(judge.reason.as_deref(), Some("foul in box"));
    }

    #[test]
    fn decodes_from_parsed_value() {
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str("Tick: 9").unwrap();
        assert_eq!(RawField::from_value(value).unwrap().tick, Some(9));
    }
}
