//! Scripted pointer for the "Atelier & Expos" card.
//!
//! A non-interactive pointer replays the same gesture on a fixed period:
//! aim at a random day of the week, mark it, glide to the confirm chip,
//! then disappear while the calendar clears. No real input device is
//! involved; the machine only decides where the pointer is, whether it is
//! visible, and which day is highlighted.
//!
//! One driver loop advances the machine and sleeps each phase's dwell, so
//! cycles cannot overlap. The dwells sum to [`CYCLE_PERIOD`].

use std::time::Duration;

use rand::Rng;

/// Number of day slots in the calendar row.
pub const DAY_COUNT: usize = 7;

/// Full replay period of the gesture.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(5000);

/// Where the pointer rests while pressing the confirm chip.
pub const CONFIRM_TARGET: Point = Point { x: 120, y: 90 };

/// Left edge of the first day slot.
const DAY_ORIGIN_X: i32 = 20;

/// Horizontal stride between day slots.
const DAY_STRIDE_X: i32 = 38;

/// Vertical position of the day row.
const DAY_ROW_Y: i32 = 40;

/// A pointer target in card-local pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The four phases of the scripted gesture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerPhase {
    /// Pointer visible, gliding to the target day.
    Aim { day: usize },
    /// Target day highlighted, pointer holding over it.
    Select { day: usize },
    /// Pointer over the confirm chip, day still highlighted.
    Confirm { day: usize },
    /// Pointer hidden, calendar cleared.
    Rest,
}

/// Scripted pointer state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PointerDemo {
    phase: PointerPhase,
}

impl PointerDemo {
    /// Begins a cycle: pointer shown, aiming at a random day.
    pub fn start(rng: &mut impl Rng) -> Self {
        let day = rng.random_range(0..DAY_COUNT);
        tracing::debug!(day, "pointer demo aiming");
        Self {
            phase: PointerPhase::Aim { day },
        }
    }

    /// A machine holding the idle frame: no pointer, nothing selected.
    pub fn resting() -> Self {
        Self {
            phase: PointerPhase::Rest,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    /// Pointer target, or `None` while the pointer is hidden.
    pub fn pointer(&self) -> Option<Point> {
        match self.phase {
            PointerPhase::Aim { day } | PointerPhase::Select { day } => {
                Some(Self::day_slot(day))
            }
            PointerPhase::Confirm { .. } => Some(CONFIRM_TARGET),
            PointerPhase::Rest => None,
        }
    }

    /// The highlighted day, if any.
    pub fn selected_day(&self) -> Option<usize> {
        match self.phase {
            PointerPhase::Select { day } | PointerPhase::Confirm { day } => Some(day),
            PointerPhase::Aim { .. } | PointerPhase::Rest => None,
        }
    }

    /// Dwell before the next [`advance`](Self::advance).
    pub fn dwell(&self) -> Duration {
        let ms = match self.phase {
            PointerPhase::Aim { .. } => 800,
            PointerPhase::Select { .. } => 600,
            PointerPhase::Confirm { .. } => 1000,
            // Hide-wait plus the idle gap that pads the cycle to 5s.
            PointerPhase::Rest => 2600,
        };
        Duration::from_millis(ms)
    }

    /// One transition through the script; `Rest` loops back to a fresh
    /// `Aim` with a new random day.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.phase = match self.phase {
            PointerPhase::Aim { day } => PointerPhase::Select { day },
            PointerPhase::Select { day } => PointerPhase::Confirm { day },
            PointerPhase::Confirm { .. } => PointerPhase::Rest,
            PointerPhase::Rest => {
                let day = rng.random_range(0..DAY_COUNT);
                tracing::debug!(day, "pointer demo aiming");
                PointerPhase::Aim { day }
            }
        };
    }

    /// Pointer target for a day slot.
    pub fn day_slot(day: usize) -> Point {
        Point {
            x: DAY_ORIGIN_X + day as i32 * DAY_STRIDE_X,
            y: DAY_ROW_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn target_day_is_always_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let demo = PointerDemo::start(&mut rng);
            let PointerPhase::Aim { day } = demo.phase() else {
                panic!("cycle must open in Aim");
            };
            assert!(day < DAY_COUNT);
        }
    }

    #[test]
    fn pointer_visible_only_while_gesturing() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut demo = PointerDemo::start(&mut rng);

        // Aim, Select, Confirm: visible.
        for _ in 0..3 {
            assert!(demo.pointer().is_some());
            demo.advance(&mut rng);
        }

        // Rest: hidden.
        assert_eq!(demo.phase(), PointerPhase::Rest);
        assert_eq!(demo.pointer(), None);
    }

    #[test]
    fn selection_clears_at_rest_and_cycle_start() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut demo = PointerDemo::start(&mut rng);
        assert_eq!(demo.selected_day(), None);

        demo.advance(&mut rng);
        assert!(demo.selected_day().is_some());

        demo.advance(&mut rng);
        assert!(demo.selected_day().is_some());

        demo.advance(&mut rng);
        assert_eq!(demo.phase(), PointerPhase::Rest);
        assert_eq!(demo.selected_day(), None);

        demo.advance(&mut rng);
        assert!(matches!(demo.phase(), PointerPhase::Aim { .. }));
        assert_eq!(demo.selected_day(), None);
    }

    #[test]
    fn selection_sticks_to_the_aimed_day() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut demo = PointerDemo::start(&mut rng);
            let PointerPhase::Aim { day } = demo.phase() else {
                unreachable!();
            };

            demo.advance(&mut rng);
            assert_eq!(demo.selected_day(), Some(day));
            assert_eq!(demo.pointer(), Some(PointerDemo::day_slot(day)));

            demo.advance(&mut rng);
            assert_eq!(demo.selected_day(), Some(day));
            assert_eq!(demo.pointer(), Some(CONFIRM_TARGET));
        }
    }

    #[test]
    fn dwells_sum_to_the_cycle_period() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut demo = PointerDemo::start(&mut rng);
        let mut total = Duration::ZERO;
        for _ in 0..4 {
            total += demo.dwell();
            demo.advance(&mut rng);
        }
        assert_eq!(total, CYCLE_PERIOD);
    }

    #[test]
    fn day_slots_line_up_with_the_row() {
        assert_eq!(PointerDemo::day_slot(0), Point { x: 20, y: 40 });
        assert_eq!(PointerDemo::day_slot(6), Point { x: 248, y: 40 });
    }

    #[test]
    fn resting_frame_shows_nothing() {
        let demo = PointerDemo::resting();
        assert_eq!(demo.pointer(), None);
        assert_eq!(demo.selected_day(), None);
    }
}
