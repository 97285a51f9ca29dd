//! Layout-change subscriptions with deterministic teardown.
//!
//! A [`LayoutSubscription`] detaches its listener when dropped or when
//! [`unsubscribe`](LayoutSubscription::unsubscribe) is called, whichever
//! comes first.

use std::cell::RefCell;
use std::rc::Rc;

use crate::shared::errors::Result;
use crate::shared::logging::{log_listener_attached, log_listener_detach_failed, log_listener_detached};

pub type LayoutListener = Box<dyn FnMut()>;

/// Host signal that fires when the observed root may have changed size
pub trait LayoutChangeSource {
    fn subscribe(&self, listener: LayoutListener) -> Result<LayoutSubscription>;
}

/// Handle to a registered listener
pub struct LayoutSubscription {
    source: &'static str,
    detach: Option<Box<dyn FnOnce()>>,
}

impl LayoutSubscription {
    pub fn new(source: &'static str, detach: impl FnOnce() + 'static) -> Self {
        log_listener_attached(source);
        Self {
            source,
            detach: Some(Box::new(detach)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
            log_listener_detached(self.source);
        }
    }
}

impl Drop for LayoutSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for LayoutSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSubscription")
            .field("source", &self.source)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Report a failed host-side detach. Returns whether the detach succeeded.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn finish_detach<E: std::fmt::Debug>(source: &str, result: std::result::Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log_listener_detach_failed(source, &format!("{:?}", e));
            false
        }
    }
}

#[derive(Default)]
struct HubState {
    next_id: u64,
    listeners: Vec<(u64, Rc<RefCell<LayoutListener>>)>,
}

impl HubState {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// In-memory layout signal. Used off the browser and in tests.
#[derive(Clone, Default)]
pub struct ResizeHub {
    state: Rc<RefCell<HubState>>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Notify the listeners registered when the call starts.
    ///
    /// Listeners may subscribe, unsubscribe or emit again while being notified.
    /// A listener removed mid-emit is skipped, and a listener already running
    /// is not re-entered by a nested emit.
    pub fn emit(&self) {
        let snapshot = self.state.borrow().listeners.clone();

        for (id, listener) in snapshot {
            if !self.state.borrow().contains(id) {
                continue;
            }
            if let Ok(mut running) = listener.try_borrow_mut() {
                (*running)();
            }
        }
    }

    fn remove(state: &Rc<RefCell<HubState>>, id: u64) {
        state.borrow_mut().listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

impl LayoutChangeSource for ResizeHub {
    fn subscribe(&self, listener: LayoutListener) -> Result<LayoutSubscription> {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };

        let state = Rc::downgrade(&self.state);
        Ok(LayoutSubscription::new("resize_hub", move || {
            if let Some(state) = state.upgrade() {
                ResizeHub::remove(&state, id);
            }
        }))
    }
}

/// `resize` events on the browser window
#[cfg(target_arch = "wasm32")]
pub struct WindowResizeSource;

#[cfg(target_arch = "wasm32")]
impl LayoutChangeSource for WindowResizeSource {
    fn subscribe(&self, listener: LayoutListener) -> Result<LayoutSubscription> {
        use crate::shared::errors::AppError;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let window = web_sys::window().ok_or(AppError::WindowUnavailable)?;
        let callback = Closure::wrap(listener);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref::<js_sys::Function>())?;

        Ok(LayoutSubscription::new("window_resize", move || {
            let removed = window.remove_event_listener_with_callback(
                "resize",
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            );
            finish_detach("window_resize", removed);
            drop(callback);
        }))
    }
}

/// Window resize events in the browser, an idle hub elsewhere
pub fn default_layout_source() -> Rc<dyn LayoutChangeSource> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(WindowResizeSource)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(ResizeHub::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_listener(counter: &Rc<Cell<usize>>) -> LayoutListener {
        let counter = counter.clone();
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn test_emit_reaches_subscribers() {
        let hub = ResizeHub::new();
        let hits = Rc::new(Cell::new(0));
        let _subscription = hub.subscribe(counting_listener(&hits)).unwrap();

        hub.emit();
        hub.emit();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let hub = ResizeHub::new();
        let hits = Rc::new(Cell::new(0));
        let subscription = hub.subscribe(counting_listener(&hits)).unwrap();
        hub.emit();

        drop(subscription);
        hub.emit();

        assert_eq!(hits.get(), 1);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_is_explicit_teardown() {
        let hub = ResizeHub::new();
        let hits = Rc::new(Cell::new(0));
        let subscription = hub.subscribe(counting_listener(&hits)).unwrap();
        assert!(subscription.is_active());

        subscription.unsubscribe();
        hub.emit();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_repeated_mount_cycles_do_not_leak() {
        let hub = ResizeHub::new();
        let hits = Rc::new(Cell::new(0));

        for _ in 0..5 {
            let subscription = hub.subscribe(counting_listener(&hits)).unwrap();
            assert_eq!(hub.listener_count(), 1);
            drop(subscription);
        }

        hub.emit();
        assert_eq!(hits.get(), 0);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_unsubscribe_during_emit() {
        let hub = ResizeHub::new();
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<LayoutSubscription>>> = Rc::new(RefCell::new(None));

        let slot_inner = slot.clone();
        let hits_inner = hits.clone();
        let subscription = hub
            .subscribe(Box::new(move || {
                hits_inner.set(hits_inner.get() + 1);
                slot_inner.borrow_mut().take();
            }))
            .unwrap();
        *slot.borrow_mut() = Some(subscription);

        hub.emit();
        hub.emit();
        assert_eq!(hits.get(), 1);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_nested_emit_then_unsubscribe_stays_detached() {
        let hub = ResizeHub::new();
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<LayoutSubscription>>> = Rc::new(RefCell::new(None));

        let slot_inner = slot.clone();
        let hits_inner = hits.clone();
        let hub_inner = hub.clone();
        let subscription = hub
            .subscribe(Box::new(move || {
                hits_inner.set(hits_inner.get() + 1);
                hub_inner.emit();
                slot_inner.borrow_mut().take();
            }))
            .unwrap();
        *slot.borrow_mut() = Some(subscription);

        hub.emit();
        assert_eq!(hits.get(), 1);
        assert_eq!(hub.listener_count(), 0);

        hub.emit();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_nested_emit_reaches_other_listeners() {
        let hub = ResizeHub::new();
        let outer_hits = Rc::new(Cell::new(0));
        let other_hits = Rc::new(Cell::new(0));

        let hub_inner = hub.clone();
        let outer_inner = outer_hits.clone();
        let _outer = hub
            .subscribe(Box::new(move || {
                outer_inner.set(outer_inner.get() + 1);
                if outer_inner.get() == 1 {
                    hub_inner.emit();
                }
            }))
            .unwrap();
        let _other = hub.subscribe(counting_listener(&other_hits)).unwrap();

        hub.emit();
        assert_eq!(outer_hits.get(), 1);
        assert_eq!(other_hits.get(), 2);
        assert_eq!(hub.listener_count(), 2);
    }

    #[test]
    fn test_failed_detach_is_reported() {
        assert!(finish_detach::<String>("window_resize", Ok(())));
        assert!(!finish_detach("window_resize", Err("listener not registered")));
    }

    #[test]
    fn test_subscription_outliving_hub_is_harmless() {
        let hub = ResizeHub::new();
        let subscription = hub.subscribe(Box::new(|| {})).unwrap();
        drop(hub);
        drop(subscription);
    }
}
