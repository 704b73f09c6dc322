// File: src/toast.rs
// Purpose: Toast overlay with explicit, cancellable dismiss timers

use adw_dom::Element;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub type ToastId = u64;

pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_secs(3);

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    /// Zero disables automatic dismissal
    pub timeout: Duration,
    pub action_label: Option<String>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timeout: DEFAULT_TOAST_TIMEOUT,
            action_label: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    fn render(&self, id: ToastId) -> Element {
        let mut toast = Element::new("div")
            .with_class("adw-toast")
            .with_attr("role", "status")
            .with_attr("data-toast-id", id.to_string())
            .with_child(
                Element::new("span")
                    .with_class("adw-toast-title")
                    .with_text(self.title.as_str()),
            );
        if let Some(label) = &self.action_label {
            toast.children.push(
                Element::new("button")
                    .with_attr("type", "button")
                    .with_class("adw-toast-action flat")
                    .with_attr("data-action", "toast-action")
                    .with_attr("data-toast-id", id.to_string())
                    .with_text(label.as_str())
                    .into(),
            );
        }
        toast.with_child(
            Element::new("button")
                .with_attr("type", "button")
                .with_class("adw-toast-close flat circular")
                .with_attr("aria-label", "Dismiss")
                .with_attr("data-action", "dismiss-toast")
                .with_attr("data-toast-id", id.to_string()),
        )
    }
}

/// Handle to a scheduled task; cancelling an already-run task is a no-op
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a task that cannot be cancelled
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Fire-once deferred execution
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

struct ActiveToast {
    id: ToastId,
    toast: Toast,
    timer: Option<TaskHandle>,
}

type ChangeListener = Rc<dyn Fn(&Element)>;

#[derive(Default)]
struct OverlayState {
    next_id: ToastId,
    toasts: Vec<ActiveToast>,
    listener: Option<ChangeListener>,
}

/// Stack of active toasts
///
/// Cloning yields another handle to the same overlay.
pub struct ToastOverlay<S: Scheduler> {
    state: Rc<RefCell<OverlayState>>,
    scheduler: S,
}

impl<S: Scheduler + Clone> Clone for ToastOverlay<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<S: Scheduler> ToastOverlay<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(OverlayState::default())),
            scheduler,
        }
    }

    /// Called with the re-rendered overlay after every change
    pub fn on_change(&self, listener: impl Fn(&Element) + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn add(&self, toast: Toast) -> ToastId {
        let timeout = toast.timeout;
        let id = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            state.toasts.push(ActiveToast {
                id,
                toast,
                timer: None,
            });
            id
        };

        if !timeout.is_zero() {
            let weak: Weak<RefCell<OverlayState>> = Rc::downgrade(&self.state);
            let handle = self.scheduler.schedule(
                timeout,
                Box::new(move || {
                    if let Some(state) = weak.upgrade() {
                        tracing::debug!("Toast {} timed out", id);
                        remove(&state, id, false);
                    }
                }),
            );
            let orphan = {
                let mut state = self.state.borrow_mut();
                match state.toasts.iter_mut().find(|t| t.id == id) {
                    Some(active) => {
                        active.timer = Some(handle);
                        None
                    }
                    None => Some(handle),
                }
            };
            if let Some(handle) = orphan {
                handle.cancel();
            }
        }

        notify(&self.state);
        id
    }

    /// Removes a toast and cancels its timer; false if it was already gone
    pub fn dismiss(&self, id: ToastId) -> bool {
        remove(&self.state, id, true)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn titles(&self) -> Vec<String> {
        self.state
            .borrow()
            .toasts
            .iter()
            .map(|t| t.toast.title.clone())
            .collect()
    }

    pub fn render(&self) -> Element {
        render(&self.state.borrow())
    }
}

fn render(state: &OverlayState) -> Element {
    Element::new("div")
        .with_class("adw-toast-overlay")
        .with_attr("aria-live", "polite")
        .with_children(state.toasts.iter().map(|t| t.toast.render(t.id)))
}

fn remove(state: &Rc<RefCell<OverlayState>>, id: ToastId, cancel_timer: bool) -> bool {
    let removed = {
        let mut inner = state.borrow_mut();
        let index = inner.toasts.iter().position(|t| t.id == id);
        index.map(|i| inner.toasts.remove(i))
    };

    let Some(active) = removed else {
        return false;
    };
    if cancel_timer {
        if let Some(timer) = active.timer {
            timer.cancel();
        }
    }
    notify(state);
    true
}

fn notify(state: &Rc<RefCell<OverlayState>>) {
    let (listener, markup) = {
        let inner = state.borrow();
        match &inner.listener {
            Some(listener) => (Rc::clone(listener), render(&inner)),
            None => return,
        }
    };
    listener(&markup);
}

// ============================================================================
// Manual scheduler
// ============================================================================

struct PendingTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by a virtual clock
///
/// Nothing runs until [`ManualScheduler::advance`] moves the clock past a
/// task's deadline. Used wherever timers must be deterministic.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward, running due tasks in deadline order
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let task = clock.pending.remove(index);
                        clock.now = task.due;
                        Some(task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(pending) => (pending.task)(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let id = {
            let mut clock = self.clock.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let due = clock.now + delay;
            clock.pending.push(PendingTask { id, due, task });
            id
        };
        let weak = Rc::downgrade(&self.clock);
        TaskHandle::new(move || {
            if let Some(clock) = weak.upgrade() {
                clock.borrow_mut().pending.retain(|t| t.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn overlay() -> (ToastOverlay<ManualScheduler>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        (ToastOverlay::new(scheduler.clone()), scheduler)
    }

    #[test]
    fn test_toast_auto_dismisses() {
        let (overlay, clock) = overlay();
        overlay.add(Toast::new("Post published"));
        assert_eq!(overlay.len(), 1);
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_secs(2));
        assert_eq!(overlay.len(), 1);

        clock.advance(Duration::from_secs(1));
        assert!(overlay.is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_manual_dismiss_cancels_timer() {
        let (overlay, clock) = overlay();
        let id = overlay.add(Toast::new("Saved"));

        assert!(overlay.dismiss(id));
        assert_eq!(clock.pending(), 0);
        assert!(!overlay.dismiss(id));

        clock.advance(Duration::from_secs(10));
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_zero_timeout_stays() {
        let (overlay, clock) = overlay();
        overlay.add(Toast::new("Offline").with_timeout(Duration::ZERO));
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(60));
        assert_eq!(overlay.titles(), vec!["Offline".to_string()]);
    }

    #[test]
    fn test_timers_fire_in_order() {
        let (overlay, clock) = overlay();
        overlay.add(Toast::new("slow").with_timeout(Duration::from_secs(5)));
        overlay.add(Toast::new("fast").with_timeout(Duration::from_secs(1)));

        clock.advance(Duration::from_secs(1));
        assert_eq!(overlay.titles(), vec!["slow".to_string()]);
        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_listener_sees_rendered_overlay() {
        let (overlay, clock) = overlay();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        overlay.on_change(move |el| sink.borrow_mut().push(el.child_elements().count()));

        overlay.add(Toast::new("Liked").with_action("Undo"));
        clock.advance(DEFAULT_TOAST_TIMEOUT);

        assert_eq!(*seen.borrow(), vec![1, 0]);
    }

    #[test]
    fn test_render_markup() {
        let (overlay, _clock) = overlay();
        overlay.add(Toast::new("Saved").with_action("Undo"));
        assert_eq!(
            overlay.render().to_html(),
            concat!(
                r#"<div class="adw-toast-overlay" aria-live="polite">"#,
                r#"<div class="adw-toast" role="status" data-toast-id="1">"#,
                r#"<span class="adw-toast-title">Saved</span>"#,
                r#"<button type="button" class="adw-toast-action flat" data-action="toast-action" data-toast-id="1">Undo</button>"#,
                r#"<button type="button" class="adw-toast-close flat circular" aria-label="Dismiss" data-action="dismiss-toast" data-toast-id="1"></button>"#,
                r#"</div></div>"#
            )
        );
    }
}
