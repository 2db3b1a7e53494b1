//! Client configuration.
//!
//! The frontend embeds an optional JSON block in `index.html`; every field
//! has a default so an empty object (or no block at all) is a valid config.

use serde::Deserialize;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every REST call, without trailing slash.
    pub api_base: String,
    /// Delay between the "session expired" toast and the page reload.
    pub session_reload_delay_ms: u32,
    /// How long a toast stays on screen.
    pub toast_duration_ms: u32,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// First hour shown by the class calendar (inclusive).
    pub calendar_start_hour: u32,
    /// Last hour shown by the class calendar (exclusive).
    pub calendar_end_hour: u32,
    /// Length of one calendar row.
    pub slot_minutes: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            session_reload_delay_ms: 2000,
            toast_duration_ms: 3000,
            log_level: "info".to_string(),
            calendar_start_hour: 8,
            calendar_end_hour: 20,
            slot_minutes: 60,
        }
    }
}

impl ClientConfig {
    /// Parses a JSON config block, normalising the API base.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: ClientConfig = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        if config.slot_minutes == 0 {
            config.slot_minutes = ClientConfig::default().slot_minutes;
        }
        config.slot_minutes = config.slot_minutes.min(MINUTES_PER_DAY);
        config.calendar_start_hour = config.calendar_start_hour.min(23);
        config.calendar_end_hour = config.calendar_end_hour.min(24);
        Ok(config)
    }
}
