//! Header configuration.
//!
//! Every field has a default, so a partial JSON document is enough to
//! override just the shop owner or the truncation constants.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};
use crate::shared::layout::TruncationPolicy;

/// localStorage key holding a JSON [`HeaderConfig`]
pub const CONFIG_STORAGE_KEY: &str = "storefront_header_config";

/// Shop owner shown in the header, drawer and account menu
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopProfile {
    pub username: String,
    pub role: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl Default for ShopProfile {
    fn default() -> Self {
        Self {
            username: "username".to_string(),
            role: "Role".to_string(),
            email: None,
            avatar_url: None,
        }
    }
}

impl ShopProfile {
    pub fn shop_title(&self) -> String {
        format!("{}'s shop", self.username)
    }

    /// Configured email, or `{username}@example.com`
    pub fn display_email(&self) -> String {
        self.email
            .clone()
            .unwrap_or_else(|| format!("{}@example.com", self.username))
    }
}

/// Max widths applied to the shop name once it is truncated
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampWidths {
    pub mobile: u32,
    /// From the `sm` breakpoint up
    pub wide: u32,
}

impl Default for ClampWidths {
    fn default() -> Self {
        Self { mobile: 120, wide: 160 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub profile: ShopProfile,
    pub truncation: TruncationPolicy,
    pub clamp: ClampWidths,
}

impl HeaderConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: HeaderConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.username.trim().is_empty() {
            return Err(AppError::ConfigError("username must not be empty".to_string()));
        }

        let policy = &self.truncation;
        let constants = [
            ("buffer", policy.buffer),
            ("brand_estimate", policy.brand_estimate),
            ("menu_estimate", policy.menu_estimate),
        ];
        for (name, value) in constants {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::ConfigError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.clamp.mobile == 0 || self.clamp.wide < self.clamp.mobile {
            return Err(AppError::ConfigError(
                "clamp widths must be positive and wide >= mobile".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read the configuration from localStorage
#[cfg(target_arch = "wasm32")]
pub fn load_stored_config() -> Result<Option<HeaderConfig>> {
    let window = web_sys::window().ok_or(AppError::WindowUnavailable)?;
    let storage = window
        .local_storage()
        .map_err(|e| AppError::StorageError(format!("{:?}", e)))?
        .ok_or_else(|| AppError::StorageError("localStorage disabled".to_string()))?;

    match storage
        .get_item(CONFIG_STORAGE_KEY)
        .map_err(|e| AppError::StorageError(format!("{:?}", e)))?
    {
        Some(raw) => HeaderConfig::from_json(&raw).map(Some),
        None => Ok(None),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_stored_config() -> Result<Option<HeaderConfig>> {
    // No browser storage on the server
    Ok(None)
}
