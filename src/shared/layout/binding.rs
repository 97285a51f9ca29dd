use std::cell::RefCell;
use std::rc::Rc;

use super::{AdaptiveLabelTruncator, HeaderGeometry, LayoutChangeSource, LayoutSubscription, TruncationDecision};
use crate::shared::errors::Result;

/// Re-measure on every layout change and hand flips to `publish`.
///
/// The returned subscription owns the wiring; dropping it stops all updates.
pub fn bind_truncator<R, P>(
    source: &dyn LayoutChangeSource,
    truncator: Rc<RefCell<AdaptiveLabelTruncator>>,
    read_geometry: R,
    mut publish: P,
) -> Result<LayoutSubscription>
where
    R: Fn() -> HeaderGeometry + 'static,
    P: FnMut(TruncationDecision) + 'static,
{
    source.subscribe(Box::new(move || {
        let geometry = read_geometry();
        let changed = truncator.borrow_mut().on_layout_change(&geometry);
        if let Some(decision) = changed {
            publish(decision);
        }
    }))
}
