// shields.io static badge URLs.
//
// Path form is `/badge/{label}-{message}-{color}.svg`. The colour slot is
// left as `_` and the real colours go in the query string, which lets the
// label and message halves be coloured independently.

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Serialize;

/// Look of the generated badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStyle {
    pub label: String,
    /// simple-icons slug shown left of the label
    pub logo: String,
    pub label_color: String,
    pub color: String,
    /// flat, flat-square, plastic, for-the-badge or social
    pub style: String,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: "Citations".to_string(),
            logo: "google-scholar".to_string(),
            label_color: "4f4f4f".to_string(),
            color: "brightgreen".to_string(),
            style: "social".to_string(),
        }
    }
}

/// Build the badge URL for `count` under `base_url`
/// (normally `https://img.shields.io`).
pub fn badge_url(base_url: &str, style: &BadgeStyle, count: u64) -> Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Invalid badge service URL: {base_url}"))?;

    let segment = format!("{}-{}-_.svg", escape_segment(&style.label), count);
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("Badge service URL cannot have a path: {base_url}"))?
        .pop_if_empty()
        .push("badge")
        .push(&segment);

    let params: Vec<(&str, &str)> = [
        ("logo", style.logo.as_str()),
        ("labelColor", style.label_color.as_str()),
        ("color", style.color.as_str()),
        ("style", style.style.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect();

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }

    Ok(url)
}

/// Escape text for one dash-separated part of a shields path.
/// `_` → `__`, `-` → `--`, space → `_`.
pub fn escape_segment(text: &str) -> String {
    text.replace('_', "__").replace('-', "--").replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_url() {
        let url = badge_url("https://img.shields.io", &BadgeStyle::default(), 21934).unwrap();
        assert_eq!(
            url.as_str(),
            "https://img.shields.io/badge/Citations-21934-_.svg\
             ?logo=google-scholar&labelColor=4f4f4f&color=brightgreen&style=social"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = badge_url("http://127.0.0.1:9000/", &BadgeStyle::default(), 1).unwrap();
        assert!(url.as_str().starts_with("http://127.0.0.1:9000/badge/Citations-1-_.svg?"));
    }

    #[test]
    fn test_label_is_escaped() {
        let style = BadgeStyle {
            label: "Cited by-all_time".to_string(),
            ..BadgeStyle::default()
        };
        let url = badge_url("https://img.shields.io", &style, 5).unwrap();
        assert_eq!(url.path(), "/badge/Cited_by--all__time-5-_.svg");
    }

    #[test]
    fn test_empty_style_fields_are_omitted() {
        let style = BadgeStyle {
            label: "Citations".to_string(),
            logo: String::new(),
            label_color: String::new(),
            color: "blue".to_string(),
            style: String::new(),
        };
        let url = badge_url("https://img.shields.io", &style, 3).unwrap();
        assert_eq!(url.query(), Some("color=blue"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(badge_url("not a url", &BadgeStyle::default(), 1).is_err());
    }
}
