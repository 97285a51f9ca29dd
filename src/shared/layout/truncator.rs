use super::{HeaderGeometry, TruncationDecision, TruncationPolicy};
use crate::shared::logging::{log_decision_changed, log_measurement_skipped};

/// Keeps the truncation decision for one label current.
///
/// Starts `Expanded` and only ever changes through [`measure`](Self::measure).
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptiveLabelTruncator {
    policy: TruncationPolicy,
    decision: TruncationDecision,
}

impl AdaptiveLabelTruncator {
    pub fn new(policy: TruncationPolicy) -> Self {
        Self {
            policy,
            decision: TruncationDecision::Expanded,
        }
    }

    /// Swap the constants. The retained decision is kept until the next measurement.
    pub fn set_policy(&mut self, policy: TruncationPolicy) {
        self.policy = policy;
    }

    pub fn decision(&self) -> TruncationDecision {
        self.decision
    }

    /// Re-evaluate against the given geometry and return the retained decision.
    /// Incomplete geometry leaves the previous decision untouched.
    pub fn measure(&mut self, geometry: &HeaderGeometry) -> TruncationDecision {
        match self.policy.snapshot(geometry) {
            Some(measurement) => self.decision = measurement.decide(),
            None => log_measurement_skipped(geometry),
        }
        self.decision
    }

    /// Handle a layout invalidation. Returns the new decision only when it flipped,
    /// so callers republish (and re-render) on changes alone.
    pub fn on_layout_change(&mut self, geometry: &HeaderGeometry) -> Option<TruncationDecision> {
        let previous = self.decision;
        let current = self.measure(geometry);

        if current == previous {
            return None;
        }

        log_decision_changed(previous, current, geometry);
        Some(current)
    }
}

impl Default for AdaptiveLabelTruncator {
    fn default() -> Self {
        Self::new(TruncationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(container: f64, label: f64) -> HeaderGeometry {
        HeaderGeometry::complete(container, label, 150.0, 40.0, 32.0)
    }

    #[test]
    fn test_initial_state_is_expanded() {
        let truncator = AdaptiveLabelTruncator::default();
        assert_eq!(truncator.decision(), TruncationDecision::Expanded);
    }

    #[test]
    fn test_measure_is_idempotent() {
        let mut truncator = AdaptiveLabelTruncator::default();
        let first = truncator.measure(&geometry(400.0, 180.0));
        let second = truncator.measure(&geometry(400.0, 180.0));

        assert_eq!(first, TruncationDecision::Truncated);
        assert_eq!(first, second);
    }

    #[test]
    fn test_measure_without_elements_keeps_previous_decision() {
        let mut truncator = AdaptiveLabelTruncator::default();
        truncator.measure(&geometry(400.0, 180.0));

        let decision = truncator.measure(&HeaderGeometry::default());
        assert_eq!(decision, TruncationDecision::Truncated);

        let missing_label = HeaderGeometry { label: None, ..geometry(600.0, 0.0) };
        assert_eq!(truncator.measure(&missing_label), TruncationDecision::Truncated);
    }

    #[test]
    fn test_measure_before_mount_stays_expanded() {
        let mut truncator = AdaptiveLabelTruncator::default();
        assert_eq!(truncator.measure(&HeaderGeometry::default()), TruncationDecision::Expanded);
    }

    #[test]
    fn test_resize_flips_truncated_to_expanded() {
        let mut truncator = AdaptiveLabelTruncator::default();

        assert_eq!(
            truncator.on_layout_change(&geometry(400.0, 180.0)),
            Some(TruncationDecision::Truncated)
        );
        assert_eq!(
            truncator.on_layout_change(&geometry(600.0, 180.0)),
            Some(TruncationDecision::Expanded)
        );
    }

    #[test]
    fn test_layout_change_without_flip_publishes_nothing() {
        let mut truncator = AdaptiveLabelTruncator::default();

        assert_eq!(truncator.on_layout_change(&geometry(400.0, 140.0)), None);
        assert_eq!(truncator.on_layout_change(&geometry(450.0, 140.0)), None);
        assert_eq!(truncator.on_layout_change(&HeaderGeometry::default()), None);
        assert_eq!(truncator.decision(), TruncationDecision::Expanded);
    }

    #[test]
    fn test_set_policy_applies_on_next_measure() {
        let mut truncator = AdaptiveLabelTruncator::default();
        truncator.measure(&geometry(400.0, 170.0));
        assert_eq!(truncator.decision(), TruncationDecision::Truncated);

        truncator.set_policy(TruncationPolicy {
            buffer: 0.0,
            ..TruncationPolicy::default()
        });
        assert_eq!(truncator.decision(), TruncationDecision::Truncated);
        assert_eq!(
            truncator.on_layout_change(&geometry(400.0, 170.0)),
            Some(TruncationDecision::Expanded)
        );
    }

    #[test]
    fn test_custom_buffer_changes_threshold() {
        let policy = TruncationPolicy {
            buffer: 0.0,
            ..TruncationPolicy::default()
        };
        let mut truncator = AdaptiveLabelTruncator::new(policy);

        // available = 400 - 222 = 178
        assert_eq!(truncator.measure(&geometry(400.0, 178.0)), TruncationDecision::Expanded);
        assert_eq!(truncator.measure(&geometry(400.0, 179.0)), TruncationDecision::Truncated);
    }
}
