//! Structured logging module for the storefront header
//!
//! Provides consistent, contextual logging across the application.
//! Uses tracing structured fields so layout decisions can be filtered by operation.

use crate::shared::layout::{HeaderGeometry, TruncationDecision};

/// Log categories for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Measurement,
    ResizeSubscription,
    Config,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Measurement => "measurement",
            LogOperation::ResizeSubscription => "resize_subscription",
            LogOperation::Config => "config",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log a truncation flip
pub fn log_decision_changed(
    previous: TruncationDecision,
    current: TruncationDecision,
    geometry: &HeaderGeometry,
) {
    tracing::debug!(
        operation = LogOperation::Measurement.as_str(),
        previous = previous.as_str(),
        current = current.as_str(),
        container_width = ?geometry.container,
        label_width = ?geometry.label,
        right_section_width = ?geometry.right_section,
        "Shop name truncation changed"
    );
}

/// Log a measurement skipped because the header is not laid out yet
pub fn log_measurement_skipped(geometry: &HeaderGeometry) {
    tracing::trace!(
        operation = LogOperation::Measurement.as_str(),
        has_container = geometry.container.is_some(),
        has_label = geometry.label.is_some(),
        has_right_section = geometry.right_section.is_some(),
        "Header not measurable yet, keeping previous decision"
    );
}

/// Log listener registration
pub fn log_listener_attached(source: &str) {
    tracing::debug!(
        operation = LogOperation::ResizeSubscription.as_str(),
        source = source,
        "Layout listener attached"
    );
}

/// Log listener removal
pub fn log_listener_detached(source: &str) {
    tracing::debug!(
        operation = LogOperation::ResizeSubscription.as_str(),
        source = source,
        "Layout listener detached"
    );
}

/// Log a failed listener registration (header keeps its last decision)
pub fn log_listener_failed(source: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ResizeSubscription.as_str(),
        source = source,
        error = error,
        "Failed to attach layout listener"
    );
}

pub fn log_listener_detach_failed(source: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ResizeSubscription.as_str(),
        source = source,
        error = error,
        "Failed to detach layout listener"
    );
}

/// Log a configuration fallback to defaults
pub fn log_config_fallback(reason: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        reason = reason,
        "Using default header configuration"
    );
}

/// Log a loaded configuration
pub fn log_config_loaded(username: &str, role: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        username = username,
        role = role,
        "Header configuration loaded"
    );
}

/// Log a placeholder navigation action
pub fn log_nav_action(action: &str, surface: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        action = action,
        surface = surface,
        "Navigation action selected"
    );
}
