use std::env;
use std::path::PathBuf;

use anyhow::Result;
use secrecy::SecretString;

use crate::badge::url::BadgeStyle;

/// Google Scholar author profile the badge is built for, when
/// SCHOLAR_AUTHOR_ID isn't set.
pub const DEFAULT_AUTHOR_ID: &str = "yuiXa5EAAAAJ";

pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com";
pub const DEFAULT_PUSHPLUS_URL: &str = "http://www.pushplus.plus/send";
pub const DEFAULT_SHIELDS_URL: &str = "https://img.shields.io";

/// Fixed output filenames, written inside `out_dir`.
pub const SVG_FILE_NAME: &str = "scholar_badge.svg";
pub const PNG_FILE_NAME: &str = "scholar_badge.png";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug)]
pub struct Config {
    pub author_id: String,
    /// SerpApi key. `None` when unset or empty.
    pub serpapi_key: Option<SecretString>,
    pub serpapi_url: String,
    /// `hl` parameter passed to the Scholar author engine.
    pub language: String,
    /// PushPlus token. Notifications are skipped when this is `None`.
    pub pushplus_token: Option<SecretString>,
    pub pushplus_url: String,
    pub notify_title: String,
    pub shields_url: String,
    pub badge_style: BadgeStyle,
    /// Multiplier applied when rasterizing the SVG badge to PNG.
    pub png_scale: f32,
    pub out_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the SerpApi key has a default. The key is only
    /// checked by `require_serpapi`, so `badge` and `status` work without it.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values are treated the same as unset ones
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = BadgeStyle::default();
        let badge_style = BadgeStyle {
            label: var("BADGE_LABEL").unwrap_or(defaults.label),
            logo: var("BADGE_LOGO").unwrap_or(defaults.logo),
            label_color: var("BADGE_LABEL_COLOR").unwrap_or(defaults.label_color),
            color: var("BADGE_COLOR").unwrap_or(defaults.color),
            style: var("BADGE_STYLE").unwrap_or(defaults.style),
        };

        let png_scale = match var("BADGE_PNG_SCALE") {
            Some(raw) => {
                let scale: f32 = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("BADGE_PNG_SCALE must be a number, got {raw:?}"))?;
                if !scale.is_finite() || scale <= 0.0 {
                    anyhow::bail!("BADGE_PNG_SCALE must be greater than zero, got {raw:?}");
                }
                scale
            }
            None => crate::badge::raster::DEFAULT_SCALE,
        };

        Ok(Self {
            author_id: var("SCHOLAR_AUTHOR_ID").unwrap_or_else(|| DEFAULT_AUTHOR_ID.to_string()),
            serpapi_key: var("SERPAPI_API_KEY").map(SecretString::from),
            serpapi_url: var("SERPAPI_URL").unwrap_or_else(|| DEFAULT_SERPAPI_URL.to_string()),
            language: var("SCHOLAR_LANGUAGE").unwrap_or_else(|| "en".to_string()),
            pushplus_token: var("PUSHPLUS_TOKEN").map(SecretString::from),
            pushplus_url: var("PUSHPLUS_URL").unwrap_or_else(|| DEFAULT_PUSHPLUS_URL.to_string()),
            notify_title: var("NOTIFY_TITLE").unwrap_or_else(|| "Google Citations".to_string()),
            shields_url: var("SHIELDS_URL").unwrap_or_else(|| DEFAULT_SHIELDS_URL.to_string()),
            badge_style,
            png_scale,
            out_dir: var("BADGE_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    /// Check that the SerpApi key is configured.
    /// Call this before any operation that queries Google Scholar.
    pub fn require_serpapi(&self) -> Result<&SecretString> {
        match &self.serpapi_key {
            Some(key) => Ok(key),
            None => anyhow::bail!(
                "SERPAPI_API_KEY not set. Add it to your environment or .env file.\n\
                 Get a key at https://serpapi.com/manage-api-key"
            ),
        }
    }

    pub fn svg_path(&self) -> PathBuf {
        self.out_dir.join(SVG_FILE_NAME)
    }

    pub fn png_path(&self) -> PathBuf {
        self.out_dir.join(PNG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.author_id, DEFAULT_AUTHOR_ID);
        assert_eq!(config.serpapi_url, DEFAULT_SERPAPI_URL);
        assert_eq!(config.language, "en");
        assert_eq!(config.notify_title, "Google Citations");
        assert_eq!(config.png_scale, 4.0);
        assert_eq!(config.badge_style, BadgeStyle::default());
        assert!(config.pushplus_token.is_none());
        assert_eq!(config.svg_path(), PathBuf::from(".").join("scholar_badge.svg"));
    }

    #[test]
    fn test_missing_key_fails_require() {
        let config = config_from(&[]).unwrap();
        let err = config.require_serpapi().unwrap_err();
        assert!(err.to_string().contains("SERPAPI_API_KEY"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = config_from(&[("SERPAPI_API_KEY", "   ")]).unwrap();
        assert!(config.serpapi_key.is_none());
        assert!(config.require_serpapi().is_err());
    }

    #[test]
    fn test_key_and_overrides_are_read() {
        let config = config_from(&[
            ("SERPAPI_API_KEY", "abc123"),
            ("SCHOLAR_AUTHOR_ID", "XYZ"),
            ("BADGE_COLOR", "blue"),
            ("BADGE_PNG_SCALE", "2.5"),
            ("BADGE_OUT_DIR", "out"),
        ])
        .unwrap();
        assert_eq!(config.require_serpapi().unwrap().expose_secret(), "abc123");
        assert_eq!(config.author_id, "XYZ");
        assert_eq!(config.badge_style.color, "blue");
        assert_eq!(config.badge_style.label, "Citations");
        assert_eq!(config.png_scale, 2.5);
        assert_eq!(config.png_path(), PathBuf::from("out").join("scholar_badge.png"));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        assert!(config_from(&[("BADGE_PNG_SCALE", "big")]).is_err());
        assert!(config_from(&[("BADGE_PNG_SCALE", "0")]).is_err());
        assert!(config_from(&[("BADGE_PNG_SCALE", "-2")]).is_err());
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = config_from(&[("SERPAPI_API_KEY", "supersecret")]).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecret"));
    }
}
