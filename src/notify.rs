//! Toast Notifications
//!
//! Transient, auto-dismissing feedback. Each toast runs its own lifecycle
//! task: mount, show, hide, unmount.

use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::NotifyTimings;
use crate::runtime::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier, e.g. `notification-warning`
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Fire-and-forget user feedback
pub trait Notify {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notify + ?Sized> Notify for Rc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

/// Where toast elements live (the document body in a browser)
pub trait ToastLayer {
    type Handle: 'static;

    /// Attaches a hidden toast and returns its handle.
    fn mount(&self, message: &str, severity: Severity) -> Self::Handle;

    fn set_visible(&self, toast: &Self::Handle, visible: bool);

    /// Detaches the toast from the view tree.
    fn unmount(&self, toast: Self::Handle);
}

pub struct Notifier<L, S> {
    layer: Rc<L>,
    scheduler: S,
    timings: NotifyTimings,
}

impl<L, S: Clone> Clone for Notifier<L, S> {
    fn clone(&self) -> Self {
        Self {
            layer: Rc::clone(&self.layer),
            scheduler: self.scheduler.clone(),
            timings: self.timings,
        }
    }
}

impl<L, S> Notifier<L, S>
where
    L: ToastLayer + 'static,
    S: Scheduler + Clone + 'static,
{
    pub fn new(layer: Rc<L>, scheduler: S, timings: NotifyTimings) -> Self {
        Self {
            layer,
            scheduler,
            timings,
        }
    }
}

impl<L, S> Notify for Notifier<L, S>
where
    L: ToastLayer + 'static,
    S: Scheduler + Clone + 'static,
{
    fn notify(&self, message: &str, severity: Severity) {
        debug!("toast [{}] {}", severity.as_str(), message);

        let toast = self.layer.mount(message, severity);
        let layer = Rc::clone(&self.layer);
        let scheduler = self.scheduler.clone();
        let timings = self.timings;

        // Entry is deferred past the current tick so the show transition runs.
        self.scheduler.spawn(Box::pin(async move {
            scheduler.sleep(timings.show_delay()).await;
            layer.set_visible(&toast, true);
            scheduler.sleep(timings.visible()).await;
            layer.set_visible(&toast, false);
            scheduler.sleep(timings.exit()).await;
            layer.unmount(toast);
        }));
    }
}
