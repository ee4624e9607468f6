//! Rotation order for the medium card stack.
//!
//! The "Médiums Artistiques" card shows three labeled mediums stacked
//! front-to-back. Every [`SHUFFLE_PERIOD`] the back card moves to the
//! front, producing the shuffling illusion. The order is always a
//! permutation of `{0, 1, 2}` and returns to the initial order after
//! exactly three rotations.

use std::time::Duration;

/// Number of cards in the stack.
pub const DECK_SIZE: usize = 3;

/// How often the stack rotates.
pub const SHUFFLE_PERIOD: Duration = Duration::from_millis(3000);

/// Front-to-back display order of the medium cards.
///
/// `order()[rank]` is the card index shown at that rank, rank 0 being the
/// front card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CardStack {
    order: [usize; DECK_SIZE],
}

impl CardStack {
    /// A stack in its initial order `[0, 1, 2]`.
    pub fn new() -> Self {
        Self { order: [0, 1, 2] }
    }

    /// Moves the back card to the front.
    pub fn rotate(&mut self) {
        self.order.rotate_right(1);
    }

    /// Current front-to-back order.
    pub fn order(&self) -> [usize; DECK_SIZE] {
        self.order
    }

    /// Display rank of a card, 0 = front.
    pub fn rank_of(&self, card: usize) -> Option<usize> {
        self.order.iter().position(|&c| c == card)
    }
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotation_walks_the_three_orders() {
        let mut stack = CardStack::new();
        assert_eq!(stack.order(), [0, 1, 2]);

        stack.rotate();
        assert_eq!(stack.order(), [2, 0, 1]);

        stack.rotate();
        assert_eq!(stack.order(), [1, 2, 0]);

        stack.rotate();
        assert_eq!(stack.order(), [0, 1, 2]);
    }

    #[test]
    fn rank_of_tracks_rotation() {
        let mut stack = CardStack::new();
        assert_eq!(stack.rank_of(0), Some(0));

        stack.rotate();
        assert_eq!(stack.rank_of(0), Some(1));
        assert_eq!(stack.rank_of(2), Some(0));
        assert_eq!(stack.rank_of(3), None);
    }

    proptest! {
        #[test]
        fn order_is_always_a_permutation(ticks in 0usize..100) {
            let mut stack = CardStack::new();
            for _ in 0..ticks {
                stack.rotate();
            }

            let mut seen = [false; DECK_SIZE];
            for card in stack.order() {
                prop_assert!(card < DECK_SIZE);
                prop_assert!(!seen[card]);
                seen[card] = true;
            }
        }

        #[test]
        fn period_is_exactly_three(cycles in 1usize..30) {
            let mut stack = CardStack::new();
            for _ in 0..cycles * DECK_SIZE {
                stack.rotate();
            }
            prop_assert_eq!(stack.order(), [0, 1, 2]);
        }
    }
}
