//! Shareable-state codec: pattern state to and from URL-safe tokens
//!
//! The structured form is compact JSON carrying the kind tag, the config,
//! and an optional name; the opaque form is unpadded URL-safe base64.
//! Decoding is total: any malformed, truncated, or inconsistent token yields
//! `None`, never a panic and never a partially populated state.

use crate::io::configuration::{SHARE_NAME_FALLBACK, SHARE_QUERY_PARAM};
use crate::io::error::{PatternError, Result};
use crate::model::config::{PatternConfig, PatternKind, PatternState};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Wire form of a shared pattern
#[derive(Debug, Serialize, Deserialize)]
struct ShareData {
    #[serde(rename = "type")]
    kind: PatternKind,
    config: PatternConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Encode a pattern into an opaque URL-safe token
///
/// A missing name is embedded as the share fallback name so decoded links
/// always carry something displayable.
///
/// # Errors
///
/// Returns [`PatternError::TokenEncode`] if the config cannot be serialized;
/// this does not happen for any config representable by the model.
pub fn encode(config: &PatternConfig, name: Option<&str>) -> Result<String> {
    let data = ShareData {
        kind: config.kind(),
        config: config.clone(),
        name: Some(name.unwrap_or(SHARE_NAME_FALLBACK).to_string()),
    };
    let json = serde_json::to_string(&data).map_err(|e| PatternError::TokenEncode { source: e })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token back into a pattern state
///
/// Returns `None` when the token is empty, not valid base64, not valid
/// JSON, missing the kind or config fields, or carries a kind tag that
/// disagrees with the config shape.
pub fn decode(token: &str) -> Option<PatternState> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(trimmed).ok()?;
    let data: ShareData = serde_json::from_slice(&bytes).ok()?;
    if data.kind != data.config.kind() {
        return None;
    }
    Some(PatternState::new(
        data.config,
        data.name.as_deref().unwrap_or_default(),
    ))
}

/// Build a full shareable URL for a pattern
///
/// # Errors
///
/// Propagates token encoding failures from [`encode`].
pub fn share_url(base_url: &str, config: &PatternConfig, name: Option<&str>) -> Result<String> {
    let token = encode(config, name)?;
    Ok(format!("{base_url}?{SHARE_QUERY_PARAM}={token}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presets::{DEFAULT_GEOMETRIC, default_config};

    #[test]
    fn test_round_trip_keeps_name_and_config() {
        let config = PatternConfig::Geometric(DEFAULT_GEOMETRIC);
        let token = encode(&config, Some("Blueprint")).unwrap();
        let state = decode(&token).unwrap();
        assert_eq!(state.config, config);
        assert_eq!(state.name, "Blueprint");
    }

    #[test]
    fn test_unnamed_pattern_gets_fallback_name() {
        let config = default_config(PatternKind::Noise);
        let token = encode(&config, None).unwrap();
        let state = decode(&token).unwrap();
        assert_eq!(state.name, SHARE_NAME_FALLBACK);
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        // A dots tag over a geometric config body
        let json = serde_json::json!({
            "type": "dots",
            "config": {
                "shape": "circle",
                "size": 40.0,
                "spacing": 20.0,
                "rotation": 0.0,
                "shapeColor": "#3b82f6",
                "backgroundColor": "#ffffff"
            }
        });
        let token = URL_SAFE_NO_PAD.encode(json.to_string());
        assert!(decode(&token).is_none());
    }

    #[test]
    fn test_share_url_shape() {
        let config = default_config(PatternKind::Dots);
        let url = share_url("https://example.com", &config, None).unwrap();
        assert!(url.starts_with("https://example.com?pattern="));
        // The token itself must be URL-safe
        let token = url.split('=').next_back().unwrap_or_default();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
