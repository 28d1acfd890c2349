//! Dismissible, auto-expiring alerts

use crate::auth::get_user_friendly_error;
use biblioteca_http::ClientError;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

/// Identifies one shown alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    /// Stylesheet class for the alert container
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    /// Plain text, never markup
    pub message: String,
    pub severity: Severity,
}

/// The page region alerts are inserted into
pub trait AlertRegion {
    /// Insert `alert` above any existing ones. Returns `false` when the region doesn't exist.
    fn prepend(&self, alert: &Alert) -> bool;

    /// Remove an alert. Returns `false` when it is already gone.
    fn remove(&self, id: AlertId) -> bool;
}

/// Runs a task once after a delay
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Shows messages in an [`AlertRegion`] and removes them when their time is up
pub struct Notifier {
    region: Rc<dyn AlertRegion>,
    scheduler: Rc<dyn Scheduler>,
    next_id: Cell<u64>,
}

impl Notifier {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

    pub fn new(region: Rc<dyn AlertRegion>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            region,
            scheduler,
            next_id: Cell::new(1),
        }
    }

    /// Show `message` for [`Self::DEFAULT_DURATION`]
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Option<AlertId> {
        self.show_for(message, severity, Self::DEFAULT_DURATION)
    }

    /// Show `message` until `duration` elapses or the user dismisses it.
    ///
    /// Returns `None` when the page has no alert region.
    pub fn show_for(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> Option<AlertId> {
        let id = AlertId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        let alert = Alert {
            id,
            message: message.into(),
            severity,
        };
        if !self.region.prepend(&alert) {
            warn!(?severity, "No alert region on this page, message dropped");
            return None;
        }

        let region = Rc::clone(&self.region);
        self.scheduler.schedule(
            duration,
            Box::new(move || {
                region.remove(id);
            }),
        );
        Some(id)
    }

    /// Show a client error. Expired sessions are warnings, everything else is danger.
    pub fn show_error(&self, error: &ClientError) -> Option<AlertId> {
        let severity = if error.is_session_expired() {
            Severity::Warning
        } else {
            Severity::Danger
        };
        self.show(get_user_friendly_error(error), severity)
    }

    /// Remove an alert before its timer fires
    pub fn dismiss(&self, id: AlertId) -> bool {
        self.region.remove(id)
    }
}

/// Alert region kept in memory, newest first
#[derive(Debug)]
pub struct MemoryAlertRegion {
    alerts: RefCell<Vec<Alert>>,
    attached: bool,
}

impl MemoryAlertRegion {
    pub fn new() -> Self {
        Self {
            alerts: RefCell::new(Vec::new()),
            attached: true,
        }
    }

    /// A region that is missing from the page
    pub fn detached() -> Self {
        Self {
            alerts: RefCell::new(Vec::new()),
            attached: false,
        }
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }
}

impl Default for MemoryAlertRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertRegion for MemoryAlertRegion {
    fn prepend(&self, alert: &Alert) -> bool {
        if !self.attached {
            return false;
        }
        self.alerts.borrow_mut().insert(0, alert.clone());
        true
    }

    fn remove(&self, id: AlertId) -> bool {
        let mut alerts = self.alerts.borrow_mut();
        let before = alerts.len();
        alerts.retain(|alert| alert.id != id);
        alerts.len() != before
    }
}

/// Scheduler whose tasks run only when [`run_pending`](Self::run_pending) is called
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the tasks not yet run
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every pending task as if its delay had elapsed
    pub fn run_pending(&self) {
        let tasks = std::mem::take(&mut *self.pending.borrow_mut());
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> (Notifier, Rc<MemoryAlertRegion>, Rc<ManualScheduler>) {
        let region = Rc::new(MemoryAlertRegion::new());
        let scheduler = Rc::new(ManualScheduler::new());
        let notifier = Notifier::new(region.clone(), scheduler.clone());
        (notifier, region, scheduler)
    }

    #[test]
    fn test_show_prepends_and_expires() {
        let (notifier, region, scheduler) = notifier();

        let first = notifier.show("Book saved", Severity::Success).unwrap();
        let second = notifier.show("Loan overdue", Severity::Warning).unwrap();

        let alerts = region.alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id, second);
        assert_eq!(alerts[1].id, first);
        assert_eq!(scheduler.pending_delays(), vec![Notifier::DEFAULT_DURATION; 2]);

        scheduler.run_pending();
        assert!(region.alerts().is_empty());
    }

    #[test]
    fn test_custom_duration() {
        let (notifier, _region, scheduler) = notifier();
        notifier.show_for("Saved", Severity::Info, Duration::from_secs(1));
        assert_eq!(scheduler.pending_delays(), vec![Duration::from_secs(1)]);
    }

    #[test]
    fn test_dismiss_before_timer() {
        let (notifier, region, scheduler) = notifier();
        let id = notifier.show("Book saved", Severity::Success).unwrap();

        assert!(notifier.dismiss(id));
        assert!(region.alerts().is_empty());

        // timer fires after manual dismissal without error
        scheduler.run_pending();
        assert!(!notifier.dismiss(id));
    }

    #[test]
    fn test_missing_region_is_not_fatal() {
        let region = Rc::new(MemoryAlertRegion::detached());
        let scheduler = Rc::new(ManualScheduler::new());
        let notifier = Notifier::new(region.clone(), scheduler.clone());

        assert_eq!(notifier.show("hello", Severity::Info), None);
        assert!(scheduler.pending_delays().is_empty());
    }

    #[test]
    fn test_show_error_severity() {
        let (notifier, region, _scheduler) = notifier();

        notifier.show_error(&ClientError::SessionExpired { status: 401 });
        notifier.show_error(&ClientError::RequestFailed {
            status: 500,
            body: String::new(),
        });

        let alerts = region.alerts();
        assert_eq!(alerts[0].severity, Severity::Danger);
        assert_eq!(alerts[1].severity, Severity::Warning);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(Severity::Success.css_class(), "alert-success");
        assert_eq!(Severity::Danger.css_class(), "alert-danger");
        assert_eq!(Severity::Warning.css_class(), "alert-warning");
        assert_eq!(Severity::Info.css_class(), "alert-info");
    }
}
