//! Cube engine: owns the cube, the configuration and the session control.

use log::info;

use super::control::SessionControl;
use super::event::{SessionError, SessionKind, SessionOutcome};
use super::executor::StepExecutor;
use super::observer::StepObserver;
use crate::core::{CubeError, CubeState, EngineConfig};
use crate::moves::Algorithm;
use crate::scramble::ScrambleGenerator;
use crate::solver::{self, Solution};

/// The caller-facing engine.
///
/// Sessions borrow the engine mutably, so at most one runs at a time.
/// Pause, resume, cancel and speed changes go through [`CubeEngine::control`],
/// whose handle can be moved to another task.
///
/// ```
/// use rust_cube::core::EngineConfig;
/// use rust_cube::session::{CubeEngine, StepEvent};
///
/// # tokio::runtime::Builder::new_current_thread()
/// #     .enable_time()
/// #     .build()
/// #     .unwrap()
/// #     .block_on(async {
/// let mut engine = CubeEngine::new(EngineConfig::instant().with_seed(1)).unwrap();
/// engine.scramble(&mut |_: &StepEvent| {}).await.unwrap();
/// let outcome = engine.solve(&mut |_: &StepEvent| {}).await.unwrap();
/// assert!(!outcome.is_cancelled());
/// assert!(engine.state().is_solved());
/// # });
/// ```
#[derive(Debug)]
pub struct CubeEngine {
    cube: CubeState,
    config: EngineConfig,
    control: SessionControl,
    scrambler: ScrambleGenerator,
}

impl CubeEngine {
    /// Build an engine over a solved cube.
    pub fn new(config: EngineConfig) -> Result<Self, CubeError> {
        let control = SessionControl::new(config.moves_per_second)?;
        let scrambler = ScrambleGenerator::from_config(&config);
        info!(
            "engine ready: {} moves/s, scramble length {}, seed {}",
            config.moves_per_second,
            config.scramble_length,
            scrambler.seed()
        );
        Ok(Self {
            cube: CubeState::solved(),
            config,
            control,
            scrambler,
        })
    }

    /// Current cube.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.cube
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the scramble stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.scrambler.seed()
    }

    /// Handle for pausing, cancelling and changing speed.
    #[must_use]
    pub fn control(&self) -> SessionControl {
        self.control.clone()
    }

    /// Return to the solved cube and clear the pause flag.
    pub fn reset(&mut self) {
        self.cube = CubeState::solved();
        self.control.resume();
    }

    /// Replace the cube, e.g. with a state read from elsewhere.
    pub fn set_state(&mut self, state: CubeState) {
        self.cube = state;
    }

    /// Apply a sequence immediately, without a session.
    pub fn apply_algorithm(&mut self, moves: &Algorithm) {
        self.cube.apply_all(moves);
    }

    /// Solve immediately, without a session.
    pub fn solve_instant(&mut self) -> Result<Solution, CubeError> {
        solver::solve(&mut self.cube)
    }

    /// Draw a scramble and play it step by step.
    pub async fn scramble(
        &mut self,
        observer: &mut impl StepObserver,
    ) -> Result<SessionOutcome, SessionError> {
        let moves = self.scrambler.generate();
        StepExecutor::new(&mut self.cube, &self.control, SessionKind::Scramble)
            .run_moves(&moves, observer)
            .await
    }

    /// Solve step by step.
    pub async fn solve(
        &mut self,
        observer: &mut impl StepObserver,
    ) -> Result<SessionOutcome, SessionError> {
        StepExecutor::new(&mut self.cube, &self.control, SessionKind::Solve)
            .run_solve(observer)
            .await
    }

    /// Play a caller-supplied sequence step by step.
    pub async fn run_algorithm(
        &mut self,
        moves: &Algorithm,
        observer: &mut impl StepObserver,
    ) -> Result<SessionOutcome, SessionError> {
        StepExecutor::new(&mut self.cube, &self.control, SessionKind::Algorithm)
            .run_moves(moves, observer)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StepEvent;

    fn engine() -> CubeEngine {
        CubeEngine::new(EngineConfig::instant().with_seed(3)).unwrap()
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let err = CubeEngine::new(EngineConfig::default().with_speed(0.0)).unwrap_err();
        assert_eq!(err, CubeError::InvalidSpeed(0.0));
    }

    #[test]
    fn test_instant_operations() {
        let mut engine = engine();
        engine.apply_algorithm(&"R U R' F2".parse().unwrap());
        assert!(!engine.state().is_solved());

        let solution = engine.solve_instant().unwrap();
        assert!(engine.state().is_solved());
        assert!(solution.move_count() > 0);
    }

    #[test]
    fn test_reset() {
        let mut engine = engine();
        engine.apply_algorithm(&"L D2".parse().unwrap());
        engine.control().pause();

        engine.reset();
        assert!(engine.state().is_solved());
        assert!(!engine.control().is_paused());
    }

    #[tokio::test]
    async fn test_scramble_is_seeded() {
        let mut a = engine();
        let mut b = engine();
        a.scramble(&mut |_: &StepEvent| {}).await.unwrap();
        b.scramble(&mut |_: &StepEvent| {}).await.unwrap();

        assert_eq!(a.state(), b.state());
        assert!(!a.state().is_solved());
    }

    #[tokio::test]
    async fn test_scramble_then_solve() {
        let mut engine = engine();
        let scramble = engine.scramble(&mut |_: &StepEvent| {}).await.unwrap();
        assert_eq!(scramble.report().move_count, 25);

        let solve = engine.solve(&mut |_: &StepEvent| {}).await.unwrap();
        assert!(matches!(solve, SessionOutcome::Finished(_)));
        assert!(engine.state().is_solved());
    }
}
