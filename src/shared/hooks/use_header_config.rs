use dioxus::prelude::*;

use crate::shared::config::{load_stored_config, HeaderConfig};
use crate::shared::logging::{log_config_fallback, log_config_loaded};

/// Header configuration, overridden from localStorage after mount
pub fn use_header_config() -> Signal<HeaderConfig> {
    let mut config = use_signal(HeaderConfig::default);

    use_effect(move || match load_stored_config() {
        Ok(Some(stored)) => {
            log_config_loaded(&stored.profile.username, &stored.profile.role);
            config.set(stored);
        }
        Ok(None) => {}
        Err(e) => log_config_fallback(&e.to_string()),
    });

    config
}
