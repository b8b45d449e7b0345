//! Showcase preferences persisted in `localStorage`.

use design_tokens::ThemeMode;
use serde::{Deserialize, Serialize};

/// Storage key for [`ShowcasePreferences`].
pub const PREFERENCES_KEY: &str = "harbor.showcase.preferences.v1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Viewer settings restored across visits.
pub struct ShowcasePreferences {
    pub theme: ThemeMode,
    /// Slug of the story shown last.
    pub last_story: Option<String>,
}

impl ShowcasePreferences {
    /// Decodes a stored payload; absent or malformed payloads yield defaults.
    pub fn decode(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads the raw preference payload.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Writes the raw preference payload.
///
/// # Errors
///
/// Returns an error when localStorage is unavailable or the write fails.
pub fn save_raw(key: &str, raw_json: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, raw_json)
            .map_err(|e| format!("localStorage set_item failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, raw_json);
        Ok(())
    }
}

/// Loads preferences, falling back to defaults.
pub fn load_preferences() -> ShowcasePreferences {
    ShowcasePreferences::decode(load_raw(PREFERENCES_KEY).as_deref())
}

/// Persists preferences.
///
/// # Errors
///
/// Returns an error when serialization or the storage write fails.
pub fn save_preferences(preferences: &ShowcasePreferences) -> Result<(), String> {
    let raw = preferences.encode().map_err(|e| e.to_string())?;
    save_raw(PREFERENCES_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_or_malformed_payloads_fall_back_to_defaults() {
        assert_eq!(ShowcasePreferences::decode(None), ShowcasePreferences::default());
        assert_eq!(
            ShowcasePreferences::decode(Some("{not json")),
            ShowcasePreferences::default()
        );
        assert_eq!(
            ShowcasePreferences::decode(Some(r#"{"theme":"sepia"}"#)),
            ShowcasePreferences::default()
        );
    }

    #[test]
    fn partial_payloads_keep_known_fields() {
        let decoded = ShowcasePreferences::decode(Some(r#"{"theme":"dark"}"#));
        assert_eq!(decoded.theme, ThemeMode::Dark);
        assert_eq!(decoded.last_story, None);
    }

    #[test]
    fn encoded_preferences_decode_to_the_same_value() {
        let preferences = ShowcasePreferences {
            theme: ThemeMode::Dark,
            last_story: Some("metric-card".to_string()),
        };
        let raw = preferences.encode().unwrap();
        assert_eq!(raw, r#"{"theme":"dark","last_story":"metric-card"}"#);
        assert_eq!(ShowcasePreferences::decode(Some(&raw)), preferences);
    }
}
