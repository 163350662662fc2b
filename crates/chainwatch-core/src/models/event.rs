use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{DEFAULT_INTENSITY, GENERAL_CATEGORY, MAX_INTENSITY, MIN_INTENSITY};
use crate::errors::EventError;

/// Expected business impact of a disruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Impact {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("Low"),
            Self::Medium => f.write_str("Medium"),
            Self::High => f.write_str("High"),
        }
    }
}

/// A disruption occurrence produced by the event simulator.
///
/// Read-only input to the engines. `id` and `confidence` are required;
/// everything else is optional and defaulted where it is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Event {
    pub id: String,
    /// Human-readable category, e.g. "Weather Disruption".
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub confidence: f64,
    #[serde(default)]
    pub intensity: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub impact: Option<Impact>,
}

impl Event {
    /// Create an event with the required fields and the current time.
    pub fn new(id: impl Into<String>, event_type: impl Into<String>, confidence: f64) -> Self {
        Self {
            id: id.into(),
            event_type: Some(event_type.into()),
            description: String::new(),
            timestamp: Utc::now(),
            confidence,
            intensity: None,
            location: None,
            impact: None,
        }
    }

    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = Some(impact);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Parse an event at the boundary and check its required fields.
    ///
    /// A missing `id` or a non-numeric `confidence` fails here rather than
    /// being defaulted.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        let event: Self = serde_json::from_str(json).map_err(|e| EventError::Malformed {
            reason: e.to_string(),
        })?;
        event.validate()?;
        Ok(event)
    }

    /// Check the caller contract on required fields and bounded optionals.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.id.trim().is_empty() {
            return Err(EventError::MissingId);
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(EventError::ConfidenceOutOfRange {
                event_id: self.id.clone(),
                confidence: self.confidence,
            });
        }
        if let Some(intensity) = self.intensity {
            if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
                return Err(EventError::IntensityOutOfRange {
                    event_id: self.id.clone(),
                    intensity,
                    min: MIN_INTENSITY,
                    max: MAX_INTENSITY,
                });
            }
        }
        Ok(())
    }

    /// The event type, or "General" when the simulator did not set one.
    pub fn category(&self) -> &str {
        match self.event_type.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => GENERAL_CATEGORY,
        }
    }

    pub fn effective_intensity(&self) -> u8 {
        self.intensity.unwrap_or(DEFAULT_INTENSITY)
    }

    pub fn effective_impact(&self) -> Impact {
        self.impact.unwrap_or_default()
    }
}
