//! Language feature levels reported by the host build.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `major.minor` language feature level.
///
/// Levels serialise as strings (`"8.0"`). Deserialisation also accepts bare
/// integers and floats, which is what environment variables turn into once
/// figment has parsed them. A float is read as a decimal, so `7.10` and `7.1`
/// are the same level; only a string keeps `7.10` as minor version 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureLevel {
    /// Major component.
    pub major: u16,
    /// Minor component.
    pub minor: u16,
}

impl FeatureLevel {
    /// Creates a feature level.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Whether this level is at least `minimum`.
    #[must_use]
    pub fn satisfies(self, minimum: Self) -> bool {
        self >= minimum
    }
}

impl Default for FeatureLevel {
    fn default() -> Self {
        Self::new(8, 0)
    }
}

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error returned when a feature level string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid feature level '{0}'; expected 'major' or 'major.minor'")]
pub struct ParseFeatureLevelError(String);

impl FromStr for FeatureLevel {
    type Err = ParseFeatureLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseFeatureLevelError(s.to_owned());
        let trimmed = s.trim();
        let (major_text, minor_text) = trimmed.split_once('.').unwrap_or((trimmed, "0"));
        let major = major_text.parse::<u16>().map_err(|_| invalid())?;
        let minor = minor_text.parse::<u16>().map_err(|_| invalid())?;
        Ok(Self::new(major, minor))
    }
}

impl Serialize for FeatureLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct FeatureLevelVisitor;

impl Visitor<'_> for FeatureLevelVisitor {
    type Value = FeatureLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a feature level such as \"8.0\" or 8")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u16::try_from(v)
            .map(|major| FeatureLevel::new(major, 0))
            .map_err(|_| E::custom(format!("feature level {v} is out of range")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u16::try_from(v)
            .map(|major| FeatureLevel::new(major, 0))
            .map_err(|_| E::custom(format!("feature level {v} is out of range")))
    }

    // Shortest round-trip formatting: 7.10 prints as "7.1", 9.0 as "9".
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }
}

impl<'de> Deserialize<'de> for FeatureLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FeatureLevelVisitor)
    }
}
