//! Cancellable one-shot timers counted down by simulation ticks
//!
//! A `Schedule` lives inside the state it acts on, so dropping or cancelling
//! it is enough to guarantee it never fires against a newer game.

/// A payload released once its delay has elapsed
#[derive(Debug, Clone, PartialEq)]
struct Deferred<T> {
    remaining: f32,
    payload: T,
}

impl<T> Deferred<T> {
    fn new(delay_secs: f32, payload: T) -> Self {
        Self {
            remaining: delay_secs.max(0.0),
            payload,
        }
    }
}

/// Slot holding at most one pending task
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule<T> {
    pending: Option<Deferred<T>>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Schedule<T> {
    /// Schedule `payload` after `delay_secs`, replacing anything pending
    pub fn schedule(&mut self, delay_secs: f32, payload: T) {
        self.pending = Some(Deferred::new(delay_secs, payload));
    }

    /// Drop the pending task, returning whether there was one
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Count down by `dt`; yields the payload exactly once when due
    pub fn advance(&mut self, dt: f32) -> Option<T> {
        let task = self.pending.as_mut()?;
        task.remaining -= dt;
        if task.remaining <= 0.0 {
            self.pending.take().map(|task| task.payload)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut schedule = Schedule::default();
        schedule.schedule(1.0, 7u32);

        assert_eq!(schedule.advance(0.5), None);
        assert!(schedule.is_pending());
        assert_eq!(schedule.advance(0.5), Some(7));
        assert!(!schedule.is_pending());
        assert_eq!(schedule.advance(10.0), None);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut schedule = Schedule::default();
        schedule.schedule(0.1, "next level");
        assert!(schedule.cancel());
        assert!(!schedule.cancel());
        assert_eq!(schedule.advance(1.0), None);
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut schedule = Schedule::default();
        schedule.schedule(0.1, 1);
        schedule.schedule(2.0, 2);
        assert_eq!(schedule.advance(0.5), None);
        assert_eq!(schedule.advance(1.0), None);
        assert_eq!(schedule.advance(0.5), Some(2));
        assert!(!schedule.is_pending());
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut schedule = Schedule::default();
        schedule.schedule(0.0, ());
        assert_eq!(schedule.advance(0.0), Some(()));
    }
}
