//! Facelet permutation tables.
//!
//! A move gathers the facelets of its layer into a buffer, permutes the
//! buffer and scatters it back. Outer faces use a 20-facelet buffer (the
//! eight face stickers in ring order, then the twelve adjacent side
//! stickers), slices a 12-facelet buffer.
//!
//! A rule is read as `new[i] = old[rule[i]]`. Only the clockwise rules are
//! written out; the counter-clockwise rule (inverse) and the double rule
//! (square) are derived at compile time.

use super::notation::{Direction, Layer};

/// Source order for one cyclic rule in all three directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermutationTable<const N: usize> {
    clockwise: [usize; N],
    counter_clockwise: [usize; N],
    double: [usize; N],
}

impl<const N: usize> PermutationTable<N> {
    /// Derive all three directions from the clockwise rule.
    #[must_use]
    pub const fn from_clockwise(clockwise: [usize; N]) -> Self {
        let mut counter_clockwise = [0; N];
        let mut double = [0; N];
        let mut i = 0;
        while i < N {
            counter_clockwise[clockwise[i]] = i;
            double[i] = clockwise[clockwise[i]];
            i += 1;
        }
        Self {
            clockwise,
            counter_clockwise,
            double,
        }
    }

    /// Source indices for one direction.
    #[must_use]
    pub const fn sources(&self, direction: Direction) -> &[usize; N] {
        match direction {
            Direction::Clockwise => &self.clockwise,
            Direction::CounterClockwise => &self.counter_clockwise,
            Direction::Double => &self.double,
        }
    }
}

/// Clockwise rule for outer faces: the ring shifts by two, the side band by three.
pub const OUTER_CYCLE: PermutationTable<20> = PermutationTable::from_clockwise([
    6, 7, 0, 1, 2, 3, 4, 5, 17, 18, 19, 8, 9, 10, 11, 12, 13, 14, 15, 16,
]);

/// Clockwise rule for slices: the band shifts by three.
pub const SLICE_CYCLE: PermutationTable<12> =
    PermutationTable::from_clockwise([9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8]);

/// Facelets touched by a layer, in buffer order.
#[derive(Clone, Copy, Debug)]
pub enum LayerFacelets {
    Outer(&'static [usize; 20]),
    Slice(&'static [usize; 12]),
}

const U: [usize; 20] = [0, 1, 2, 5, 8, 7, 6, 3, 38, 37, 36, 29, 28, 27, 20, 19, 18, 11, 10, 9];
const D: [usize; 20] = [45, 46, 47, 50, 53, 52, 51, 48, 24, 25, 26, 33, 34, 35, 42, 43, 44, 15, 16, 17];
const F: [usize; 20] = [18, 19, 20, 23, 26, 25, 24, 21, 6, 7, 8, 27, 30, 33, 47, 46, 45, 17, 14, 11];
const B: [usize; 20] = [36, 37, 38, 41, 44, 43, 42, 39, 2, 1, 0, 9, 12, 15, 51, 52, 53, 35, 32, 29];
const R: [usize; 20] = [27, 28, 29, 32, 35, 34, 33, 30, 8, 5, 2, 36, 39, 42, 53, 50, 47, 26, 23, 20];
const L: [usize; 20] = [9, 10, 11, 14, 17, 16, 15, 12, 0, 3, 6, 18, 21, 24, 45, 48, 51, 44, 41, 38];
const E: [usize; 12] = [12, 13, 14, 21, 22, 23, 30, 31, 32, 39, 40, 41];
const M: [usize; 12] = [37, 40, 43, 52, 49, 46, 25, 22, 19, 7, 4, 1];
const S: [usize; 12] = [3, 4, 5, 28, 31, 34, 50, 49, 48, 16, 13, 10];

/// Facelet list for a layer.
#[must_use]
pub const fn layer_facelets(layer: Layer) -> LayerFacelets {
    match layer {
        Layer::U => LayerFacelets::Outer(&U),
        Layer::D => LayerFacelets::Outer(&D),
        Layer::F => LayerFacelets::Outer(&F),
        Layer::B => LayerFacelets::Outer(&B),
        Layer::R => LayerFacelets::Outer(&R),
        Layer::L => LayerFacelets::Outer(&L),
        Layer::M => LayerFacelets::Slice(&M),
        Layer::E => LayerFacelets::Slice(&E),
        Layer::S => LayerFacelets::Slice(&S),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose<const N: usize>(first: &[usize; N], second: &[usize; N]) -> [usize; N] {
        // Applying `first` then `second`: new[i] = mid[second[i]] = old[first[second[i]]].
        std::array::from_fn(|i| first[second[i]])
    }

    fn is_permutation(rule: &[usize]) -> bool {
        let mut seen = vec![false; rule.len()];
        for &i in rule {
            if i >= rule.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    #[test]
    fn test_derived_rules_are_permutations() {
        for direction in Direction::ALL {
            assert!(is_permutation(OUTER_CYCLE.sources(direction)));
            assert!(is_permutation(SLICE_CYCLE.sources(direction)));
        }
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        let identity: [usize; 20] = std::array::from_fn(|i| i);
        let composed = compose(
            OUTER_CYCLE.sources(Direction::Clockwise),
            OUTER_CYCLE.sources(Direction::CounterClockwise),
        );
        assert_eq!(composed, identity);

        let identity: [usize; 12] = std::array::from_fn(|i| i);
        let composed = compose(
            SLICE_CYCLE.sources(Direction::Clockwise),
            SLICE_CYCLE.sources(Direction::CounterClockwise),
        );
        assert_eq!(composed, identity);
    }

    #[test]
    fn test_double_is_clockwise_twice() {
        let cw = OUTER_CYCLE.sources(Direction::Clockwise);
        assert_eq!(&compose(cw, cw), OUTER_CYCLE.sources(Direction::Double));

        let cw = SLICE_CYCLE.sources(Direction::Clockwise);
        assert_eq!(&compose(cw, cw), SLICE_CYCLE.sources(Direction::Double));
    }

    #[test]
    fn test_outer_layers_leave_centers_alone() {
        for layer in Layer::ALL {
            if let LayerFacelets::Outer(facelets) = layer_facelets(layer) {
                for center in [4, 13, 22, 31, 40, 49] {
                    assert!(!facelets.contains(&center), "{layer:?} touches {center}");
                }
            }
        }
    }

    #[test]
    fn test_layer_lists_have_no_duplicates() {
        for layer in Layer::ALL {
            let list: Vec<usize> = match layer_facelets(layer) {
                LayerFacelets::Outer(f) => f.to_vec(),
                LayerFacelets::Slice(f) => f.to_vec(),
            };
            let mut sorted = list.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len(), "{layer:?}");
            assert!(list.iter().all(|&i| i < 54));
        }
    }
}
