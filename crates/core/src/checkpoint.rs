//! Checkpoint model: one stage of a parcel's journey

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Location kind of a checkpoint.
///
/// Unrecognised wire names are kept as [`CheckpointName::Unknown`] so the
/// renderer can fall back to the generic icon instead of rejecting the journey.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CheckpointName {
    Nsc,
    LocalHub,
    Truck,
    Store,
    Unknown(String),
}

impl CheckpointName {
    /// Parse a wire name; never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "nsc" => Self::Nsc,
            "local-hub" => Self::LocalHub,
            "truck" => Self::Truck,
            "store" => Self::Store,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire name as it appears in journey data
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Nsc => "nsc",
            Self::LocalHub => "local-hub",
            Self::Truck => "truck",
            Self::Store => "store",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for CheckpointName {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<CheckpointName> for String {
    fn from(name: CheckpointName) -> Self {
        match name {
            CheckpointName::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CheckpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual status of a checkpoint as reported by the data source.
///
/// Anything other than `green` or `grey` is treated as an error when resolved;
/// [`VisualStatus::Unrecognized`] keeps the raw value for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisualStatus {
    Green,
    Grey,
    Error,
    Unrecognized(String),
}

impl VisualStatus {
    /// Parse a wire status; never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "green" => Self::Green,
            "grey" => Self::Grey,
            "error" => Self::Error,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Green => "green",
            Self::Grey => "grey",
            Self::Error => "error",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for VisualStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<VisualStatus> for String {
    fn from(status: VisualStatus) -> Self {
        match status {
            VisualStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for VisualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One stage in a parcel's journey. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    name: CheckpointName,
    description: String,
    visual_status: VisualStatus,
}

impl Checkpoint {
    pub fn new(
        name: CheckpointName,
        description: impl Into<String>,
        visual_status: VisualStatus,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            visual_status,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &CheckpointName {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn visual_status(&self) -> &VisualStatus {
        &self.visual_status
    }
}

/// Parse a journey from its JSON wire form (an array of checkpoint objects).
///
/// # Errors
///
/// Returns [`Error::JsonParseFailed`] if the text is not a JSON array of
/// objects with `name`, `description` and `visualStatus` string fields.
pub fn parse_journey(json: &str) -> Result<Vec<Checkpoint>> {
    serde_json::from_str(json).map_err(|e| Error::json_parse_failed(e.to_string()))
}

/// Serialise a journey to pretty JSON.
///
/// # Errors
///
/// Returns [`Error::JsonParseFailed`] if serialisation fails.
pub fn journey_to_json(journey: &[Checkpoint]) -> Result<String> {
    serde_json::to_string_pretty(journey).map_err(|e| Error::json_parse_failed(e.to_string()))
}
