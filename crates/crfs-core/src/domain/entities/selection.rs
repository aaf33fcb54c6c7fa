//! The answers collected by the prompt sequence.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Feature, Stack};

/// Everything the user chose in one run.
///
/// Exactly one stack; the feature flags are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub stack: Stack,
    pub wants_database: bool,
    pub wants_testing: bool,
}

impl Selection {
    /// A selection with both features declined.
    pub fn new(stack: Stack) -> Self {
        Self {
            stack,
            wants_database: false,
            wants_testing: false,
        }
    }

    pub fn with_feature(mut self, feature: Feature, wanted: bool) -> Self {
        match feature {
            Feature::Database => self.wants_database = wanted,
            Feature::Testing => self.wants_testing = wanted,
        }
        self
    }

    pub fn wants(&self, feature: Feature) -> bool {
        match feature {
            Feature::Database => self.wants_database,
            Feature::Testing => self.wants_testing,
        }
    }
}
