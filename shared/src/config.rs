use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Presentation constants for the booking widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Length of one booked session. Display copy only, never derived from intervals.
    pub session_minutes: u32,
    pub heading: String,
    pub slots_heading: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub enable_logging: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            session_minutes: 30,
            heading: "Pick a date".to_string(),
            slots_heading: "Available time slots".to_string(),
            confirm_label: "Book".to_string(),
            cancel_label: "Cancel".to_string(),
            enable_logging: false, // Disable by default for production
        }
    }
}

impl WidgetConfig {
    /// Parse a partial JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        if config.session_minutes == 0 {
            return Err(ConfigError::ZeroSessionLength);
        }
        Ok(config)
    }

    pub fn session_info(&self) -> String {
        format!("Each session lasts for {} minutes", self.session_minutes)
    }
}
