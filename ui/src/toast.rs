//! Process-wide toast notifications.
//!
//! Components only publish; the [`Toaster`](crate::components::toaster::Toaster)
//! mounted by the app shell is the single reader.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing;

/// How long a toast stays on screen unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// A published toast, tagged so it can be dismissed individually.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedToast {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Default)]
pub(crate) struct ToastQueue {
    next_id: u64,
    pub(crate) entries: Vec<QueuedToast>,
}

pub(crate) static TOASTS: GlobalSignal<ToastQueue> = GlobalSignal::new(ToastQueue::default);

/// Publishes a toast. Must be called from within the Dioxus runtime.
pub fn publish(toast: Toast) {
    tracing::info!("toast ({}): {}", toast.severity, toast.message);

    let id = {
        let mut queue = TOASTS.write();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.entries.push(QueuedToast { id, toast });
        id
    };

    // Not tied to the publishing component, which may unmount first.
    spawn_forever(async move {
        crate::compat::sleep(TOAST_LIFETIME).await;
        dismiss(id);
    });
}

pub(crate) fn dismiss(id: u64) {
    TOASTS.write().entries.retain(|queued| queued.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::VirtualDom;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Seen = Rc<RefCell<Vec<QueuedToast>>>;

    fn publisher(seen: Seen) -> Element {
        use_hook(|| {
            publish(Toast::success("UPI ID copied to clipboard!"));
            publish(Toast::error("Phone number not available"));
        });
        *seen.borrow_mut() = TOASTS.peek().entries.clone();
        rsx! {}
    }

    fn dismisser(seen: Seen) -> Element {
        use_hook(|| {
            publish(Toast::success("first"));
            publish(Toast::success("second"));
            dismiss(0);
        });
        *seen.borrow_mut() = TOASTS.peek().entries.clone();
        rsx! {}
    }

    #[tokio::test]
    async fn test_publish_queues_in_order() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(publisher, seen.clone());
        dom.rebuild_in_place();

        let entries = seen.borrow().clone();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].toast, Toast::success("UPI ID copied to clipboard!"));
        assert!(entries[1].toast.severity.is_error());
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[tokio::test]
    async fn test_dismiss_removes_only_that_toast() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(dismisser, seen.clone());
        dom.rebuild_in_place();

        let entries = seen.borrow().clone();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].toast.message, "second");
    }

    #[test]
    fn test_severity_class_names() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
