//! Test utilities for payload construction and fixture access
//!
//! Shared by the unit tests and the benchmarks.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use crate::payload::{RawBall, RawField, RawRobot, RawVector2, RawWheel};

/// A payload file under `test-data/payloads` could not be read.
#[derive(Debug, thiserror::Error)]
#[error("payload fixture {} is unavailable: {source}", path.display())]
pub struct FixtureError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Directory holding the YAML payload fixtures.
pub fn payload_fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data").join("payloads")
}

/// Require a payload fixture by file name and return its contents.
pub fn require_payload_fixture(file_name: &str) -> Result<String, FixtureError> {
    let path = payload_fixture_dir().join(file_name);
    std::fs::read_to_string(&path).map_err(|source| FixtureError { path, source })
}

/// A robot with every attribute present.
pub fn raw_robot(x: f32, y: f32, rotation: f32) -> RawRobot {
    RawRobot {
        position: Some(RawVector2 { x: Some(x), y: Some(y) }),
        rotation: Some(rotation),
        wheel: Some(RawWheel { left_speed: Some(0.0), right_speed: Some(0.0) }),
    }
}

/// A complete field with `robots_per_side` robots on each team lined up along the x axis.
pub fn raw_field(tick: i32, robots_per_side: usize) -> RawField {
    let line_up = |side: f32| -> Vec<RawRobot> {
        (0..robots_per_side).map(|i| raw_robot(side * (10.0 + 15.0 * i as f32), 0.0, 0.0)).collect()
    };

    RawField {
        self_robots: Some(line_up(-1.0)),
        opponent_robots: Some(line_up(1.0)),
        ball: Some(RawBall { position: Some(RawVector2 { x: Some(0.0), y: Some(0.0) }) }),
        tick: Some(tick),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_field_lines_up_both_teams() {
        let field = raw_field(3, 5);
        assert_eq!(field.self_robots.as_ref().unwrap().len(), 5);
        assert_eq!(field.opponent_robots.as_ref().unwrap()[0].position.as_ref().unwrap().x, Some(10.0));
        assert_eq!(field.tick, Some(3));
    }

    #[test]
    fn payload_fixtures_are_present() {
        let text = require_payload_fixture("field_complete.yaml").unwrap();
        assert!(text.contains("SelfRobots"));
        let err = require_payload_fixture("does_not_exist.yaml").unwrap_err();
        assert!(err.path.ends_with("payloads/does_not_exist.yaml"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("does_not_exist.yaml"));
    }
}
