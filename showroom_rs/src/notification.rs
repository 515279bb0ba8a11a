//! Transient success notification ("toast").
//!
//! [`Notification`] is the state machine, driven by explicit elapsed time so
//! it can be stepped in tests. [`ToastTimer`] drives it on the tokio clock.
//!
//! Only one toast exists. Showing while visible overwrites the message and
//! re-arms the timer; every show/dismiss bumps a generation counter and a
//! timer only fires for the generation it was armed with.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use showroom_pages::types::ToastView;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::config::DEFAULT_TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    state: ToastState,
    message: String,
    default_duration: Duration,
    duration: Duration,
    deadline: Option<Duration>,
    generation: u64,
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

impl Notification {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            state: ToastState::Hidden,
            message: String::new(),
            default_duration,
            duration: default_duration,
            deadline: None,
            generation: 0,
        }
    }

    /// Show with the default duration. `now` is elapsed time on the
    /// caller's clock. Returns the generation of this show.
    pub fn show(&mut self, message: impl Into<String>, now: Duration) -> u64 {
        self.show_for(message, self.default_duration, now)
    }

    /// Show for `duration`, replacing any pending auto-dismiss.
    pub fn show_for(&mut self, message: impl Into<String>, duration: Duration, now: Duration) -> u64 {
        self.generation += 1;
        self.state = ToastState::Visible;
        self.message = message.into();
        self.duration = duration;
        self.deadline = Some(now.saturating_add(duration));
        self.generation
    }

    /// Hide immediately and drop the pending auto-dismiss.
    pub fn dismiss(&mut self) {
        if self.state == ToastState::Visible {
            self.generation += 1;
        }
        self.state = ToastState::Hidden;
        self.deadline = None;
    }

    /// Fire the auto-dismiss if its deadline has passed. Returns true when
    /// this call hid the toast.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Timer callback: hide only if nothing happened since `generation`
    /// was armed. Returns true when this call hid the toast.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.state == ToastState::Visible && self.generation == generation {
            self.dismiss();
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ToastState::Visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the pending auto-dismiss fires, if one is armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Props for the toast component.
    pub fn view(&self) -> ToastView {
        ToastView {
            message: self.message.clone(),
            visible: self.is_visible(),
            duration_ms: u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Runs a [`Notification`] against the tokio clock.
///
/// Each show spawns one sleep task and aborts the previous one. Dropping the
/// timer aborts whatever is pending. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct ToastTimer {
    inner: Arc<Mutex<Notification>>,
    origin: Instant,
    pending: Option<JoinHandle<()>>,
}

impl ToastTimer {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Notification::new(default_duration))),
            origin: Instant::now(),
            pending: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let duration = lock(&self.inner).default_duration;
        self.show_for(message, duration);
    }

    pub fn show_for(&mut self, message: impl Into<String>, duration: Duration) {
        self.cancel_pending();

        let now = self.origin.elapsed();
        let generation = lock(&self.inner).show_for(message, duration, now);
        debug!(generation, ?duration, "toast shown");

        let inner = Arc::clone(&self.inner);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if lock(&inner).expire(generation) {
                debug!(generation, "toast auto-dismissed");
            }
        }));
    }

    pub fn dismiss(&mut self) {
        self.cancel_pending();
        lock(&self.inner).dismiss();
        debug!("toast dismissed");
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.inner).is_visible()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Notification {
        lock(&self.inner).clone()
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for ToastTimer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn lock(inner: &Mutex<Notification>) -> MutexGuard<'_, Notification> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
