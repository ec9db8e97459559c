//! Configuration for the gradebook.

use std::path::Path;

use serde::Deserialize;

use crate::error::util::safe_read_to_string;
use crate::error::{GradebookError, Result};
use crate::models::grade::{Gpa, GradeScale};

/// Configuration for an [`EnrollmentSession`](crate::session::EnrollmentSession)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradebookConfig {
    /// Grade bands used for grade points and letters
    pub scale: GradeScale,
    /// Decimal places shown for the GPA
    pub gpa_decimals: usize,
    /// Label shown for a course without a grade
    pub ungraded_label: String,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            scale: GradeScale::default(),
            gpa_decimals: Gpa::DEFAULT_DECIMALS,
            ungraded_label: "No grade yet".to_string(),
        }
    }
}

impl GradebookConfig {
    /// Parse and validate a JSON configuration; missing keys keep defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "gradebook configuration")?;
        let config = Self::from_json_str(&content)
            .map_err(|e| e.context(format!("in {}", path.display())))?;
        log::info!("Loaded gradebook configuration from {}", path.display());
        Ok(config)
    }

    /// Check the grade scale and display settings
    pub fn validate(&self) -> Result<()> {
        self.scale.validate()?;

        if self.gpa_decimals > Gpa::MAX_DECIMALS {
            return Err(GradebookError::InvalidConfig(format!(
                "gpa_decimals must be at most {}, got {}",
                Gpa::MAX_DECIMALS,
                self.gpa_decimals
            )));
        }

        Ok(())
    }
}
