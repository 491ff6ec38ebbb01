//! Pause, cancel and speed control for running sessions.
//!
//! `SessionControl` is a cheap cloneable handle. Any clone may pause,
//! resume, cancel or change speed while a session runs on another task;
//! the executor observes the change at its next suspension point.
//!
//! Cancellation is session-scoped: each session starts with a fresh
//! token, so cancelling one run never leaks into the next.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::core::{move_delay, CubeError};

#[derive(Debug)]
struct ControlInner {
    token: Mutex<CancellationToken>,
    paused: watch::Sender<bool>,
    delay: watch::Sender<Duration>,
}

/// Handle for steering the active session.
#[derive(Clone, Debug)]
pub struct SessionControl {
    inner: Arc<ControlInner>,
}

impl SessionControl {
    /// Control with the given speed in moves per second.
    pub fn new(moves_per_second: f64) -> Result<Self, CubeError> {
        let delay = move_delay(moves_per_second)?;
        Ok(Self::with_delay(delay))
    }

    /// Control with an explicit per-move delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        let (paused, _) = watch::channel(false);
        let (delay, _) = watch::channel(delay);
        Self {
            inner: Arc::new(ControlInner {
                token: Mutex::new(CancellationToken::new()),
                paused,
                delay,
            }),
        }
    }

    /// Hold the session before its next move.
    pub fn pause(&self) {
        self.set_paused(true);
    }

    /// Release a paused session.
    pub fn resume(&self) {
        self.set_paused(false);
    }

    /// Flip the pause flag, returning the new value.
    pub fn toggle_pause(&self) -> bool {
        let mut paused = false;
        self.inner.paused.send_modify(|p| {
            *p = !*p;
            paused = *p;
        });
        debug!("{}", if paused { "paused" } else { "resumed" });
        paused
    }

    /// Whether the pause flag is set.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        *self.inner.paused.borrow()
    }

    fn set_paused(&self, paused: bool) {
        if self.inner.paused.send_replace(paused) != paused {
            debug!("{}", if paused { "paused" } else { "resumed" });
        }
    }

    /// Request cancellation of the active session.
    pub fn cancel(&self) {
        debug!("cancel requested");
        self.token().cancel();
    }

    /// Whether the active session has been asked to stop.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token().is_cancelled()
    }

    /// Change playback speed. Takes effect from the next move.
    pub fn set_speed(&self, moves_per_second: f64) -> Result<(), CubeError> {
        let delay = move_delay(moves_per_second)?;
        self.inner.delay.send_replace(delay);
        debug!("speed {moves_per_second} moves/s ({delay:?} per move)");
        Ok(())
    }

    /// Current per-move delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        *self.inner.delay.borrow()
    }

    fn token(&self) -> CancellationToken {
        self.inner
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Start a session: install a fresh cancellation token and hand the
    /// executor its receivers.
    pub(crate) fn begin_session(
        &self,
    ) -> (CancellationToken, watch::Receiver<bool>, watch::Receiver<Duration>) {
        let token = CancellationToken::new();
        *self
            .inner
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = token.clone();
        (token, self.inner.paused.subscribe(), self.inner.delay.subscribe())
    }
}

impl Default for SessionControl {
    fn default() -> Self {
        Self::with_delay(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_flags() {
        let control = SessionControl::default();
        assert!(!control.is_paused());

        control.pause();
        assert!(control.is_paused());
        control.resume();
        assert!(!control.is_paused());

        assert!(control.toggle_pause());
        assert!(!control.toggle_pause());
    }

    #[test]
    fn test_clones_share_state() {
        let control = SessionControl::default();
        let other = control.clone();

        other.pause();
        assert!(control.is_paused());
        other.set_speed(4.0).unwrap();
        assert_eq!(control.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_speed_validation() {
        let control = SessionControl::new(10.0).unwrap();
        assert_eq!(control.delay(), Duration::from_millis(100));

        assert_eq!(control.set_speed(0.0), Err(CubeError::InvalidSpeed(0.0)));
        assert!(control.set_speed(f64::NAN).is_err());
        assert_eq!(control.delay(), Duration::from_millis(100));

        control.set_speed(f64::INFINITY).unwrap();
        assert_eq!(control.delay(), Duration::ZERO);

        assert!(SessionControl::new(-1.0).is_err());

        assert_eq!(control.set_speed(1e-300), Err(CubeError::InvalidSpeed(1e-300)));
        assert_eq!(control.delay(), Duration::ZERO);
        assert!(SessionControl::new(1e-30).is_err());
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let control = SessionControl::default();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let control = control.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        control.toggle_pause();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(!control.is_paused());
    }

    #[test]
    fn test_cancel_is_session_scoped() {
        let control = SessionControl::default();
        let (first, _, _) = control.begin_session();

        control.cancel();
        assert!(first.is_cancelled());
        assert!(control.is_cancelled());

        let (second, _, _) = control.begin_session();
        assert!(!second.is_cancelled());
        assert!(!control.is_cancelled());
    }

    #[test]
    fn test_receivers_see_updates() {
        let control = SessionControl::default();
        let (_, paused, delay) = control.begin_session();

        control.pause();
        control.set_speed(2.0).unwrap();
        assert!(*paused.borrow());
        assert_eq!(*delay.borrow(), Duration::from_millis(500));
    }
}
