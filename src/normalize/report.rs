//! Record of defaults applied during normalization

/// Value substituted for every absent optional scalar.
pub const SCALAR_DEFAULT: f32 = 0.0;

/// Attribute paths that were absent and replaced by [`SCALAR_DEFAULT`].
///
/// Paths use the wire attribute names, e.g. `SelfRobots[1].Wheel.LeftSpeed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    defaulted: Vec<String>,
}

impl NormalizeReport {
    pub(crate) fn record(&mut self, path: String) {
        self.defaulted.push(path);
    }

    /// Paths of every defaulted attribute, in visiting order.
    pub fn defaulted(&self) -> &[String] {
        &self.defaulted
    }

    pub fn contains(&self, path: &str) -> bool {
        self.defaulted.iter().any(|entry| entry == path)
    }

    /// True when the payload carried every optional attribute.
    pub fn is_complete(&self) -> bool {
        self.defaulted.is_empty()
    }
}
