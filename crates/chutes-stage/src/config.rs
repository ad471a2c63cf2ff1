//! Configuration for a stage instance.

use serde_json::Value;

use crate::error::StageResult;

/// Board artwork used when the host does not override it.
pub const DEFAULT_BOARD_IMAGE: &str = "https://i.imgur.com/jUxnE9a.png";

/// Token sprite sheet used when the host does not override it.
pub const DEFAULT_TOKEN_IMAGE: &str = "https://i.imgur.com/L1MLIuJ.png";

/// Configuration for a stage instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageConfig {
    /// Board width as a percentage of the message column (1-100).
    pub board_scale: u32,
    /// Background image of the board.
    pub board_image_url: String,
    /// Sprite sheet for player tokens.
    pub token_image_url: String,
    /// RNG seed for reproducible dice. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Replace `{{user}}`/`{{char}}` in notes before handing them over.
    pub fill_names: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            board_scale: 75,
            board_image_url: DEFAULT_BOARD_IMAGE.to_string(),
            token_image_url: DEFAULT_TOKEN_IMAGE.to_string(),
            seed: None,
            fill_names: false,
        }
    }
}

impl StageConfig {
    /// Set the board scale (clamped to 1-100).
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.board_scale = scale.clamp(1, 100);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fill display names into director notes.
    pub fn with_fill_names(mut self, fill: bool) -> Self {
        self.fill_names = fill;
        self
    }

    /// Set the board background image.
    pub fn with_board_image(mut self, url: impl Into<String>) -> Self {
        self.board_image_url = url.into();
        self
    }

    /// Set the token sprite sheet.
    pub fn with_token_image(mut self, url: impl Into<String>) -> Self {
        self.token_image_url = url.into();
        self
    }

    /// Read the host's config object. Missing or malformed fields keep
    /// their defaults.
    pub fn from_value(value: Option<&Value>) -> Self {
        let mut cfg = Self::default();
        let Some(obj) = value.and_then(Value::as_object) else {
            return cfg;
        };

        if let Some(scale) = obj.get("boardScale").and_then(number_as_u32) {
            cfg = cfg.with_scale(scale);
        }
        if let Some(url) = obj.get("boardImage").and_then(Value::as_str) {
            cfg = cfg.with_board_image(url);
        }
        if let Some(url) = obj.get("tokenImage").and_then(Value::as_str) {
            cfg = cfg.with_token_image(url);
        }
        if let Some(seed) = obj.get("seed").and_then(Value::as_u64) {
            cfg = cfg.with_seed(seed);
        }
        if let Some(fill) = obj.get("fillNames").and_then(Value::as_bool) {
            cfg = cfg.with_fill_names(fill);
        }
        cfg
    }

    /// Parse the host's config object from JSON text.
    pub fn from_json(json: &str) -> StageResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(Some(&value)))
    }
}

fn number_as_u32(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return Some(n.min(u64::from(u32::MAX)) as u32);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.round().min(f64::from(u32::MAX)) as u32)
}
