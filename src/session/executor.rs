//! Step executor: turns a move source into a pausable, cancellable stream
//! of single-move transitions.
//!
//! ## Per-move protocol
//!
//! 1. Wait while the pause flag is set (or until cancelled)
//! 2. Sleep the current per-move delay (or until cancelled)
//! 3. Stop if cancellation was requested
//! 4. Apply the move, record it, report it to the observer
//!
//! A move is never applied partially; a cancelled run leaves the cube at
//! exactly the last reported move.

use im::Vector;
use log::{error, info, trace, warn};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::control::SessionControl;
use super::event::{
    MoveRecord, SessionError, SessionKind, SessionOutcome, SessionReport, StepEvent,
};
use super::observer::StepObserver;
use crate::core::{CubeError, CubeState};
use crate::moves::{Algorithm, Move};
use crate::solver::{self, Phase};

/// Moves per phase that count as a full phase share of progress.
const PHASE_PROGRESS_MOVES: f64 = 20.0;

/// Per-run bookkeeping, discarded when the run ends.
#[derive(Clone, Debug)]
pub struct SolveSession {
    kind: SessionKind,
    token: CancellationToken,
    started: Instant,
    history: Vector<MoveRecord>,
}

impl SolveSession {
    fn new(kind: SessionKind, token: CancellationToken) -> Self {
        Self {
            kind,
            token,
            started: Instant::now(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Moves applied so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Applied moves in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn report(&self) -> SessionReport {
        SessionReport {
            kind: self.kind,
            moves: self.history.clone(),
            move_count: self.history.len(),
            elapsed: self.elapsed(),
        }
    }
}

/// Drives one session over a cube.
///
/// Holding `&mut CubeState` for the whole run makes the executor the
/// cube's only writer until it is dropped.
pub struct StepExecutor<'a> {
    cube: &'a mut CubeState,
    session: SolveSession,
    paused: watch::Receiver<bool>,
    delay: watch::Receiver<Duration>,
}

impl<'a> StepExecutor<'a> {
    /// Begin a session. Any earlier cancellation request is discarded.
    pub fn new(cube: &'a mut CubeState, control: &SessionControl, kind: SessionKind) -> Self {
        let (token, paused, delay) = control.begin_session();
        Self {
            cube,
            session: SolveSession::new(kind, token),
            paused,
            delay,
        }
    }

    /// Current session bookkeeping.
    #[must_use]
    pub fn session(&self) -> &SolveSession {
        &self.session
    }

    /// Current cube.
    #[must_use]
    pub fn cube(&self) -> &CubeState {
        self.cube
    }

    async fn wait_while_paused(&mut self) -> Result<(), CubeError> {
        let paused = &mut self.paused;
        let resumed = async {
            // Sender lives in the control handle; treat its loss as a release.
            let _ = paused.wait_for(|p| !*p).await;
        };
        tokio::select! {
            biased;
            () = self.session.token.cancelled() => Err(CubeError::OperationCancelled),
            () = resumed => Ok(()),
        }
    }

    async fn wait_delay(&mut self) -> Result<(), CubeError> {
        let delay = *self.delay.borrow();
        if delay.is_zero() {
            return Ok(());
        }
        tokio::select! {
            biased;
            () = self.session.token.cancelled() => Err(CubeError::OperationCancelled),
            () = tokio::time::sleep(delay) => Ok(()),
        }
    }

    /// Run one move through the full protocol.
    pub async fn step(
        &mut self,
        mv: Move,
        phase: Option<Phase>,
        progress: f64,
        observer: &mut impl StepObserver,
    ) -> Result<(), CubeError> {
        self.wait_while_paused().await?;
        self.wait_delay().await?;
        if self.session.token.is_cancelled() {
            return Err(CubeError::OperationCancelled);
        }

        self.cube.apply(mv);
        let index = self.session.history.len() + 1;
        self.session.history.push_back(MoveRecord { index, mv, phase });
        trace!("{} #{index}: {mv}", self.session.kind);

        observer.on_step(&StepEvent {
            kind: self.session.kind,
            phase,
            mv,
            move_index: index,
            progress: progress.clamp(0.0, 100.0),
            state: *self.cube,
        });
        Ok(())
    }

    /// Play a fixed sequence.
    pub async fn run_moves(
        mut self,
        moves: &Algorithm,
        observer: &mut impl StepObserver,
    ) -> Result<SessionOutcome, SessionError> {
        let total = moves.len();
        let mut result = Ok(());
        for (i, &mv) in moves.iter().enumerate() {
            let progress = (i + 1) as f64 / total as f64 * 100.0;
            if let Err(err) = self.step(mv, None, progress, observer).await {
                result = Err((None, err));
                break;
            }
        }
        self.finish(result, observer)
    }

    /// Solve the cube phase by phase.
    ///
    /// Each phase is planned on a copy of the cube, then replayed here one
    /// move at a time, so the observer sees every move before the next is
    /// applied.
    pub async fn run_solve(
        mut self,
        observer: &mut impl StepObserver,
    ) -> Result<SessionOutcome, SessionError> {
        let result = self.solve_phases(observer).await;
        self.finish(result, observer)
    }

    async fn solve_phases(
        &mut self,
        observer: &mut impl StepObserver,
    ) -> Result<(), (Option<Phase>, CubeError)> {
        for phase in Phase::ALL {
            let mut scratch = *self.cube;
            let plan = solver::solve_phase(phase, &mut scratch).map_err(|e| (Some(phase), e))?;

            let base = phase.index() as f64 / Phase::COUNT as f64 * 100.0;
            let share = 100.0 / Phase::COUNT as f64;
            for (i, &mv) in plan.iter().enumerate() {
                let progress = base + (i + 1) as f64 / PHASE_PROGRESS_MOVES * share;
                self.step(mv, Some(phase), progress, observer)
                    .await
                    .map_err(|e| (Some(phase), e))?;
            }
        }
        Ok(())
    }

    fn finish(
        self,
        result: Result<(), (Option<Phase>, CubeError)>,
        observer: &mut impl StepObserver,
    ) -> Result<SessionOutcome, SessionError> {
        let kind = self.session.kind;
        let report = self.session.report();
        match result {
            Ok(()) => {
                info!(
                    "{kind} finished: {} moves in {:?}",
                    report.move_count, report.elapsed
                );
                let outcome = SessionOutcome::Finished(report);
                observer.on_end(&outcome);
                Ok(outcome)
            }
            Err((phase, err)) if err.is_cancelled() => {
                warn!(
                    "{kind} cancelled after {} moves{}",
                    report.move_count,
                    phase.map(|p| format!(" in {p}")).unwrap_or_default()
                );
                let outcome = SessionOutcome::Cancelled(report);
                observer.on_end(&outcome);
                Ok(outcome)
            }
            Err((phase, source)) => {
                let err = SessionError {
                    kind,
                    phase,
                    move_index: report.move_count,
                    source,
                };
                error!("{err}");
                observer.on_error(&err);
                Err(err)
            }
        }
    }
}
