//! Configuration errors
//!
//! The simulation itself never fails; only loading and validating a
//! `Tuning` can.

use std::fmt;

#[derive(Debug)]
pub enum TuningError {
    /// A quantity that must be strictly positive was zero or negative
    NonPositive { field: &'static str },
    /// A quantity fell outside its allowed range
    OutOfRange { field: &'static str, value: f32 },
    /// A duration too short to last a single tick
    ZeroTicks { field: &'static str, secs: f32 },
    /// The safe zone around the ship would cover the whole field
    SpawnExclusionTooLarge { exclusion: f32, half_diagonal: f32 },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field } => write!(f, "tuning value `{field}` must be positive"),
            Self::OutOfRange { field, value } => {
                write!(f, "tuning value `{field}` out of range: {value}")
            }
            Self::ZeroTicks { field, secs } => {
                write!(f, "tuning value `{field}` ({secs}s) is shorter than one tick")
            }
            Self::SpawnExclusionTooLarge {
                exclusion,
                half_diagonal,
            } => write!(
                f,
                "spawn exclusion radius {exclusion} leaves no room in a field with half-diagonal {half_diagonal}"
            ),
            Self::Io(err) => write!(f, "failed to read tuning file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse tuning file: {err}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
