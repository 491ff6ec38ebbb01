//! Step observers.
//!
//! A session reports every applied move to an observer before the next
//! move is considered. Any `FnMut(&StepEvent)` closure is an observer;
//! `ChannelObserver` forwards everything to another task.

use tokio::sync::mpsc;

use super::event::{SessionError, SessionEvent, SessionOutcome, StepEvent};

/// Receives session progress.
pub trait StepObserver {
    /// Called after each move is applied.
    fn on_step(&mut self, event: &StepEvent);

    /// Called once when the session finishes or is cancelled.
    fn on_end(&mut self, _outcome: &SessionOutcome) {}

    /// Called once when the session fails.
    fn on_error(&mut self, _error: &SessionError) {}
}

impl<F> StepObserver for F
where
    F: FnMut(&StepEvent),
{
    fn on_step(&mut self, event: &StepEvent) {
        self(event);
    }
}

/// Forwards session events over an unbounded channel.
///
/// A dropped receiver is ignored: the session keeps running.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Wrap an existing sender.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: SessionEvent) {
        // Receiver gone means nobody is listening; not an error.
        let _ = self.tx.send(event);
    }
}

impl StepObserver for ChannelObserver {
    fn on_step(&mut self, event: &StepEvent) {
        self.send(SessionEvent::Step(event.clone()));
    }

    fn on_end(&mut self, outcome: &SessionOutcome) {
        self.send(SessionEvent::Ended(outcome.clone()));
    }

    fn on_error(&mut self, error: &SessionError) {
        self.send(SessionEvent::Failed(error.clone()));
    }
}
