//! The per-request input: anthropometrics plus boolean fact maps.

use crate::error::ProfileError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A user's anthropometric data and health/preference facts.
///
/// Health facts and preference facts are disjoint mappings from fact name to
/// bool. A fact that is absent from its map never matches any rule; absence
/// is not the same as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub health_facts: AHashMap<String, bool>,
    #[serde(default)]
    pub preference_facts: AHashMap<String, bool>,
}

impl UserProfile {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
            ..Self::default()
        }
    }

    /// Sets a health fact, builder style.
    pub fn with_health_fact(mut self, name: impl Into<String>, value: bool) -> Self {
        self.health_facts.insert(name.into(), value);
        self
    }

    /// Sets a preference fact, builder style.
    pub fn with_preference_fact(mut self, name: impl Into<String>, value: bool) -> Self {
        self.preference_facts.insert(name.into(), value);
        self
    }

    /// Boundary validation for the height precondition.
    ///
    /// The pure math in [`crate::anthropometry`] divides by height squared
    /// and does not guard; this is the single place the precondition is
    /// enforced.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.height_cm <= 0.0 {
            return Err(ProfileError::NonPositiveHeight {
                height_cm: self.height_cm,
            });
        }
        Ok(())
    }

    /// Reads a preference fact, treating absence as `false`.
    pub fn preference(&self, name: &str) -> bool {
        self.preference_facts.get(name).copied().unwrap_or(false)
    }
}
