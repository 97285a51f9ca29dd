use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::shared::config::HeaderConfig;
use crate::shared::layout::dom::{read_header_geometry, HeaderElementIds};
use crate::shared::layout::{
    bind_truncator, default_layout_source, AdaptiveLabelTruncator, LayoutSubscription, TruncationDecision,
};
use crate::shared::logging::log_listener_failed;

/// Keeps the shop name's truncation decision in sync with the header layout.
///
/// Measures once after mount (and again whenever the config changes), listens
/// to resizes while mounted, and detaches the listener on unmount.
pub fn use_adaptive_truncation(config: Signal<HeaderConfig>, ids: HeaderElementIds) -> Signal<TruncationDecision> {
    let mut decision = use_signal(TruncationDecision::default);
    let truncator = use_hook(|| Rc::new(RefCell::new(AdaptiveLabelTruncator::default())));
    let subscription = use_hook(|| Rc::new(RefCell::new(None::<LayoutSubscription>)));

    {
        let truncator = truncator.clone();
        let subscription = subscription.clone();

        use_effect(move || {
            let policy = config.read().truncation;
            truncator.borrow_mut().set_policy(policy);

            let changed = truncator
                .borrow_mut()
                .on_layout_change(&read_header_geometry(&ids));
            if let Some(next) = changed {
                decision.set(next);
            }

            if subscription.borrow().is_some() {
                return;
            }

            let source = default_layout_source();
            match bind_truncator(
                source.as_ref(),
                truncator.clone(),
                move || read_header_geometry(&ids),
                move |next| decision.set(next),
            ) {
                Ok(bound) => *subscription.borrow_mut() = Some(bound),
                Err(e) => log_listener_failed("window_resize", &e.to_string()),
            }
        });
    }

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    decision
}
