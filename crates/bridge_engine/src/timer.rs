use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Single-slot delayed callback used for debouncing.
///
/// Implementations report expiry by calling
/// [`Reporter::on_debounce_elapsed`](crate::Reporter::on_debounce_elapsed).
pub trait DebounceTimer {
    fn schedule(&mut self, delay: Duration);
    fn cancel_pending(&mut self);
}

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Default)]
struct VirtualTime {
    now: Duration,
    due: Option<Duration>,
    scheduled: usize,
    cancelled: usize,
}

/// Deterministic timer and clock driven by [`ManualTimer::advance`].
///
/// Clones share the same virtual time, so a test can keep one handle while
/// the reporter owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    inner: Rc<RefCell<VirtualTime>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the virtual clock at `epoch_millis`.
    pub fn starting_at(epoch_millis: u64) -> Self {
        let timer = Self::default();
        timer.inner.borrow_mut().now = Duration::from_millis(epoch_millis);
        timer
    }

    /// Moves virtual time forward. Returns `true` if the pending callback
    /// came due, in which case it is no longer pending.
    pub fn advance(&self, by: Duration) -> bool {
        let mut time = self.inner.borrow_mut();
        time.now += by;
        match time.due {
            Some(due) if due <= time.now => {
                time.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.borrow().due.is_some()
    }

    /// Number of times a callback was armed.
    pub fn scheduled_count(&self) -> usize {
        self.inner.borrow().scheduled
    }

    /// Number of times an armed callback was dropped before firing.
    pub fn cancelled_count(&self) -> usize {
        self.inner.borrow().cancelled
    }
}

impl DebounceTimer for ManualTimer {
    fn schedule(&mut self, delay: Duration) {
        let mut time = self.inner.borrow_mut();
        debug_assert!(
            time.due.is_none(),
            "debounce scheduled while another callback is pending"
        );
        time.due = Some(time.now + delay);
        time.scheduled += 1;
    }

    fn cancel_pending(&mut self) {
        let mut time = self.inner.borrow_mut();
        if time.due.take().is_some() {
            time.cancelled += 1;
        }
    }
}

impl Clock for ManualTimer {
    fn now_millis(&self) -> u64 {
        self.inner.borrow().now.as_millis() as u64
    }
}
