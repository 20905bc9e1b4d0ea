//! Application settings and configuration

use crate::formatter::DateZone;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// UI colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

/// Application settings
///
/// Settings are stored in JSON format. Missing fields take their defaults so
/// a partial file is valid.
///
/// # Example
/// ```rust,no_run
/// use chatshell::settings::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// settings.initial_tab = "Status".to_string();
/// settings.save("settings.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Title shown in the root header
    pub app_title: String,
    /// Tab shown at startup
    pub initial_tab: String,
    /// Colour scheme for the palette
    pub color_scheme: ColorScheme,
    /// User id treated as "me" when resolving conversation peers
    pub local_user_id: String,
    /// Optional JSON file with chat rooms (mock data when unset)
    pub data_path: Option<String>,
    /// Off-screen rows kept formatted on each side of the visible window
    pub list_buffer_rows: usize,
    /// Log file path (no logging when unset)
    pub log_path: Option<String>,
    /// Calendar used for date labels
    pub date_zone: DateZone,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a JSON file, creating the parent directory if needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Settings(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_title: "WhatsApp".to_string(),
            initial_tab: "Chats".to_string(),
            color_scheme: ColorScheme::Light,
            local_user_id: crate::data::mock::LOCAL_USER_ID.to_string(),
            data_path: None,
            list_buffer_rows: 5,
            log_path: Some("chatshell.log".to_string()),
            date_zone: DateZone::Local,
        }
    }
}
