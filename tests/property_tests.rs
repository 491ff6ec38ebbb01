//! Property tests for the move engine, scrambler and solver.

use proptest::prelude::*;

use rust_cube::moves::{Algorithm, Direction, Layer, Move};
use rust_cube::{solve, CubeState, ScrambleGenerator};

fn any_move() -> impl Strategy<Value = Move> {
    (0..Layer::ALL.len(), 0..Direction::ALL.len())
        .prop_map(|(l, d)| Move::new(Layer::ALL[l], Direction::ALL[d]))
}

fn outer_move() -> impl Strategy<Value = Move> {
    (0..Layer::OUTER.len(), 0..Direction::ALL.len())
        .prop_map(|(l, d)| Move::new(Layer::OUTER[l], Direction::ALL[d]))
}

fn sequence(moves: impl Strategy<Value = Move>, max: usize) -> impl Strategy<Value = Algorithm> {
    prop::collection::vec(moves, 0..max).prop_map(|v| v.into_iter().collect())
}

proptest! {
    /// Any sequence keeps nine facelets of each color.
    #[test]
    fn prop_color_counts_preserved(alg in sequence(any_move(), 60)) {
        let mut cube = CubeState::solved();
        cube.apply_all(&alg);
        prop_assert_eq!(cube.color_counts(), [0, 9, 9, 9, 9, 9, 9]);
    }

    /// A sequence followed by its inverse restores the start state.
    #[test]
    fn prop_inverse_restores(
        setup in sequence(any_move(), 30),
        alg in sequence(any_move(), 30),
    ) {
        let mut cube = CubeState::solved();
        cube.apply_all(&setup);
        let start = cube;

        cube.apply_all(&alg);
        cube.apply_all(&alg.inverse());
        prop_assert_eq!(cube, start);
    }

    /// Four quarter turns of one layer are the identity from any state.
    #[test]
    fn prop_quarter_turn_order_four(setup in sequence(any_move(), 30), mv in any_move()) {
        let mut cube = CubeState::solved();
        cube.apply_all(&setup);
        let start = cube;

        for _ in 0..4 {
            cube.apply(mv);
        }
        prop_assert_eq!(cube, start);
    }

    /// Facelet text survives a parse.
    #[test]
    fn prop_state_text_round_trip(alg in sequence(any_move(), 40)) {
        let mut cube = CubeState::solved();
        cube.apply_all(&alg);
        let parsed: CubeState = cube.to_string().parse().unwrap();
        prop_assert_eq!(parsed, cube);
    }

    /// Scrambles have the requested length and never repeat a layer.
    #[test]
    fn prop_scramble_shape(seed in any::<u64>(), length in 0usize..80) {
        let scramble = ScrambleGenerator::new(seed).with_length(length).generate();
        prop_assert_eq!(scramble.len(), length);
        for pair in scramble.as_slice().windows(2) {
            prop_assert_ne!(pair[0].layer, pair[1].layer);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every state reachable by outer turns is solved, and the reported
    /// moves replay to solved from the same start.
    #[test]
    fn prop_solver_completes(alg in sequence(outer_move(), 40)) {
        let mut cube = CubeState::solved();
        cube.apply_all(&alg);
        let start = cube;

        let solution = solve(&mut cube).unwrap();
        prop_assert!(cube.is_solved());

        let mut replay = start;
        replay.apply_all(&solution.moves());
        prop_assert!(replay.is_solved());
    }
}
