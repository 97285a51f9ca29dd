//! Layout measurement and the shop-name truncation decision.
//!
//! Geometry is read from the host (see [`dom`]) into a [`HeaderGeometry`],
//! turned into a [`LayoutMeasurement`] by a [`TruncationPolicy`], and
//! finally reduced to a [`TruncationDecision`]. Only the last step keeps
//! state, in [`AdaptiveLabelTruncator`].

pub mod binding;
pub mod dom;
pub mod subscription;
pub mod truncator;

pub use binding::bind_truncator;
pub use subscription::{default_layout_source, LayoutChangeSource, LayoutSubscription, ResizeHub};
pub use truncator::AdaptiveLabelTruncator;

use serde::{Deserialize, Serialize};

/// Whether the label renders with its full text or clamped with an ellipsis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TruncationDecision {
    #[default]
    Expanded,
    Truncated,
}

impl TruncationDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruncationDecision::Expanded => "expanded",
            TruncationDecision::Truncated => "truncated",
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, TruncationDecision::Truncated)
    }
}

/// Pixel snapshot taken after layout. Never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMeasurement {
    pub container_width: f64,
    /// Fixed siblings plus the safety buffer
    pub reserved_width: f64,
    pub label_natural_width: f64,
}

impl LayoutMeasurement {
    pub fn available_width(&self) -> f64 {
        self.container_width - self.reserved_width
    }

    /// Strict comparison: a label that exactly fits stays expanded.
    pub fn decide(&self) -> TruncationDecision {
        if self.label_natural_width > self.available_width() {
            TruncationDecision::Truncated
        } else {
            TruncationDecision::Expanded
        }
    }
}

/// Widths of the elements sharing the header row with the label
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SiblingWidths {
    /// Logo link plus the "/" divider and its margins
    pub brand: f64,
    pub menu_button: f64,
    pub role_badge: f64,
    pub right_section: f64,
}

impl SiblingWidths {
    pub fn total(&self) -> f64 {
        self.brand + self.menu_button + self.role_badge + self.right_section
    }
}

/// Raw readings from the host. `None` means the element is not laid out yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderGeometry {
    pub container: Option<f64>,
    pub label: Option<f64>,
    pub right_section: Option<f64>,
    pub brand: Option<f64>,
    pub menu_button: Option<f64>,
    pub role_badge: Option<f64>,
}

impl HeaderGeometry {
    /// Geometry where every element is present and the role badge is hidden
    pub fn complete(container: f64, label: f64, right_section: f64, brand: f64, menu_button: f64) -> Self {
        Self {
            container: Some(container),
            label: Some(label),
            right_section: Some(right_section),
            brand: Some(brand),
            menu_button: Some(menu_button),
            role_badge: Some(0.0),
        }
    }
}

#[cfg(test)]
impl HeaderGeometry {
    pub fn with_container(mut self, width: f64) -> Self {
        self.container = Some(width);
        self
    }

    pub fn with_label(mut self, width: f64) -> Self {
        self.label = Some(width);
        self
    }

    pub fn with_role_badge(mut self, width: f64) -> Self {
        self.role_badge = Some(width);
        self
    }
}

fn usable(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite())
}

/// Tunable constants of the truncation heuristic
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncationPolicy {
    /// Absorbs sub-pixel rounding across rendering engines
    pub buffer: f64,
    /// Used when the brand (logo + divider) cannot be measured
    pub brand_estimate: f64,
    /// Used when the menu button cannot be measured
    pub menu_estimate: f64,
}

impl Default for TruncationPolicy {
    fn default() -> Self {
        Self {
            buffer: 20.0,
            brand_estimate: 40.0,
            menu_estimate: 32.0,
        }
    }
}

impl TruncationPolicy {
    /// Resolve sibling widths, falling back to estimates for the optional ones.
    /// A missing role badge reserves nothing.
    /// Returns `None` when the right section is not measurable.
    pub fn siblings(&self, geometry: &HeaderGeometry) -> Option<SiblingWidths> {
        Some(SiblingWidths {
            brand: usable(geometry.brand).unwrap_or(self.brand_estimate),
            menu_button: usable(geometry.menu_button).unwrap_or(self.menu_estimate),
            role_badge: usable(geometry.role_badge).unwrap_or(0.0),
            right_section: usable(geometry.right_section)?,
        })
    }

    pub fn reserved_width(&self, siblings: &SiblingWidths) -> f64 {
        siblings.total() + self.buffer
    }

    /// Build a snapshot, or `None` if a required element is missing.
    pub fn snapshot(&self, geometry: &HeaderGeometry) -> Option<LayoutMeasurement> {
        let container_width = usable(geometry.container)?;
        let label_natural_width = usable(geometry.label)?;
        let siblings = self.siblings(geometry)?;

        Some(LayoutMeasurement {
            container_width,
            reserved_width: self.reserved_width(&siblings),
            label_natural_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(container: f64, label: f64) -> HeaderGeometry {
        HeaderGeometry::complete(container, label, 150.0, 40.0, 32.0)
    }

    #[test]
    fn test_available_width_scenario() {
        let policy = TruncationPolicy::default();
        let measurement = policy.snapshot(&scenario(400.0, 180.0)).unwrap();

        assert_eq!(measurement.reserved_width, 242.0);
        assert_eq!(measurement.available_width(), 158.0);
    }

    #[test]
    fn test_wide_label_is_truncated() {
        let policy = TruncationPolicy::default();
        let measurement = policy.snapshot(&scenario(400.0, 180.0)).unwrap();
        assert_eq!(measurement.decide(), TruncationDecision::Truncated);
    }

    #[test]
    fn test_narrow_label_is_expanded() {
        let policy = TruncationPolicy::default();
        let measurement = policy.snapshot(&scenario(400.0, 140.0)).unwrap();
        assert_eq!(measurement.decide(), TruncationDecision::Expanded);
    }

    #[test]
    fn test_exact_fit_is_expanded() {
        let measurement = LayoutMeasurement {
            container_width: 400.0,
            reserved_width: 242.0,
            label_natural_width: 158.0,
        };
        assert_eq!(measurement.decide(), TruncationDecision::Expanded);

        let over = LayoutMeasurement {
            label_natural_width: 158.5,
            ..measurement
        };
        assert_eq!(over.decide(), TruncationDecision::Truncated);
    }

    #[test]
    fn test_decision_matches_threshold_over_a_range() {
        let policy = TruncationPolicy::default();
        for container in (200..=800).step_by(50) {
            for label in (0..=600).step_by(25) {
                let geometry = scenario(container as f64, label as f64);
                let decision = policy.snapshot(&geometry).unwrap().decide();
                let available = container as f64 - 40.0 - 32.0 - 150.0 - 20.0;
                assert_eq!(decision.is_truncated(), (label as f64) > available);
            }
        }
    }

    #[test]
    fn test_estimates_used_when_optional_siblings_missing() {
        let policy = TruncationPolicy::default();
        let geometry = HeaderGeometry {
            container: Some(400.0),
            label: Some(100.0),
            right_section: Some(150.0),
            brand: None,
            menu_button: None,
            role_badge: None,
        };

        let siblings = policy.siblings(&geometry).unwrap();
        assert_eq!(siblings.brand, 40.0);
        assert_eq!(siblings.menu_button, 32.0);
        assert_eq!(siblings.role_badge, 0.0);
    }

    #[test]
    fn test_measured_siblings_override_estimates() {
        let policy = TruncationPolicy::default();
        // Menu button hidden at desktop widths measures as zero
        let geometry = HeaderGeometry::complete(400.0, 210.0, 150.0, 24.0, 0.0);
        let measurement = policy.snapshot(&geometry).unwrap();

        assert_eq!(measurement.reserved_width, 194.0);
        assert_eq!(measurement.available_width(), 206.0);
        assert_eq!(measurement.decide(), TruncationDecision::Truncated);

        let fits = policy.snapshot(&geometry.with_label(180.0)).unwrap();
        assert_eq!(fits.decide(), TruncationDecision::Expanded);
    }

    #[test]
    fn test_measured_brand_matches_estimate_decisions() {
        let policy = TruncationPolicy::default();
        for container in (200..=800).step_by(50) {
            for label in (0..=600).step_by(25) {
                let measured = HeaderGeometry::complete(container as f64, label as f64, 150.0, 40.0, 32.0);
                let estimated = HeaderGeometry {
                    brand: None,
                    menu_button: None,
                    role_badge: None,
                    ..measured
                };

                let measured = policy.snapshot(&measured).unwrap();
                let estimated = policy.snapshot(&estimated).unwrap();
                assert_eq!(measured.reserved_width, estimated.reserved_width);
                assert_eq!(measured.decide(), estimated.decide());
            }
        }
    }

    #[test]
    fn test_desktop_layout_reserves_brand_and_badge() {
        let policy = TruncationPolicy::default();
        // Menu hidden, brand wrapper 48px, role badge 52px
        let geometry = HeaderGeometry::complete(800.0, 430.0, 300.0, 48.0, 0.0).with_role_badge(52.0);
        let measurement = policy.snapshot(&geometry).unwrap();

        assert_eq!(measurement.reserved_width, 420.0);
        assert_eq!(measurement.decide(), TruncationDecision::Truncated);
    }

    #[test]
    fn test_snapshot_requires_core_elements() {
        let policy = TruncationPolicy::default();
        let full = scenario(400.0, 180.0);

        assert!(policy.snapshot(&HeaderGeometry { container: None, ..full }).is_none());
        assert!(policy.snapshot(&HeaderGeometry { label: None, ..full }).is_none());
        assert!(policy.snapshot(&HeaderGeometry { right_section: None, ..full }).is_none());
        assert!(policy.snapshot(&HeaderGeometry { container: Some(f64::NAN), ..full }).is_none());
    }

    #[test]
    fn test_decision_as_str() {
        assert_eq!(TruncationDecision::Expanded.as_str(), "expanded");
        assert_eq!(TruncationDecision::Truncated.as_str(), "truncated");
        assert_eq!(TruncationDecision::default(), TruncationDecision::Expanded);
    }
}
