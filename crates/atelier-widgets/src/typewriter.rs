//! Character-by-character statement reveal.
//!
//! The "Paroles d'artiste" card replays a fixed list of sentences forever:
//! one character every [`TYPE_INTERVAL`] while typing, a [`LINE_PAUSE`]
//! dwell on the full line, then the next line from a blank box. The
//! visible text is always a prefix (by characters, so accented copy stays
//! intact) of the active line.

use std::time::Duration;

use crate::WidgetError;

/// Delay between two revealed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(50);

/// Dwell on a fully revealed line before moving on.
pub const LINE_PAUSE: Duration = Duration::from_millis(2000);

/// Which half of the reveal cycle the machine is in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypePhase {
    /// Revealing the active line, one character per step.
    Typing,
    /// Holding the fully revealed line.
    Pausing,
}

/// Looping typewriter over a fixed list of lines.
///
/// `advance()` performs one transition; `delay()` is the dwell to wait
/// before the next `advance()`. The caller owns the timer loop.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Typewriter {
    lines: &'static [&'static str],
    line: usize,
    revealed: usize,
    phase: TypePhase,
}

impl Typewriter {
    /// Starts at the first character of the first line.
    pub fn new(lines: &'static [&'static str]) -> Result<Self, WidgetError> {
        if lines.is_empty() {
            return Err(WidgetError::EmptyScript);
        }
        Ok(Self {
            lines,
            line: 0,
            revealed: 0,
            phase: TypePhase::Typing,
        })
    }

    /// The currently visible prefix of the active line.
    pub fn visible(&self) -> &'static str {
        let Some(&line) = self.lines.get(self.line) else {
            return "";
        };
        match line.char_indices().nth(self.revealed) {
            Some((byte, _)) => &line[..byte],
            None => line,
        }
    }

    /// Index of the active line.
    pub fn line_index(&self) -> usize {
        self.line
    }

    /// Current phase of the reveal cycle.
    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    /// Dwell before the next [`advance`](Self::advance).
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypePhase::Typing => TYPE_INTERVAL,
            TypePhase::Pausing => LINE_PAUSE,
        }
    }

    /// One transition: reveal a character, start the pause on the full
    /// line, or wrap to the next line after a pause.
    pub fn advance(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        match self.phase {
            TypePhase::Typing => {
                self.revealed += 1;
                if self.revealed >= self.lines[self.line].chars().count() {
                    self.phase = TypePhase::Pausing;
                }
            }
            TypePhase::Pausing => {
                let next = (self.line + 1) % self.lines.len();
                if next == 0 {
                    tracing::debug!("typewriter wrapped to first line");
                }
                self.line = next;
                self.revealed = 0;
                self.phase = TypePhase::Typing;
            }
        }
    }
}

impl Default for Typewriter {
    /// An inert machine with nothing to reveal.
    fn default() -> Self {
        Self {
            lines: &[],
            line: 0,
            revealed: 0,
            phase: TypePhase::Pausing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &[
        "La matière parle.",
        "Créer, c'est écouter.",
        "L'âme et le monde.",
        "Couleurs et textures.",
        "Une histoire silencieuse.",
    ];

    fn ticks(tw: &mut Typewriter, n: usize) {
        for _ in 0..n {
            tw.advance();
        }
    }

    #[test]
    fn starts_blank_then_reveals_first_character() {
        let mut tw = Typewriter::new(LINES).unwrap();
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.delay(), TYPE_INTERVAL);

        tw.advance();
        assert_eq!(tw.visible(), "L");
    }

    #[test]
    fn full_line_shown_immediately_before_pause() {
        let mut tw = Typewriter::new(LINES).unwrap();
        let len = LINES[0].chars().count();
        ticks(&mut tw, len);

        assert_eq!(tw.visible(), LINES[0]);
        assert_eq!(tw.phase(), TypePhase::Pausing);
        assert_eq!(tw.delay(), LINE_PAUSE);
    }

    #[test]
    fn pause_resets_to_blank_next_line() {
        let mut tw = Typewriter::new(LINES).unwrap();
        ticks(&mut tw, LINES[0].chars().count());
        tw.advance();

        assert_eq!(tw.line_index(), 1);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), TypePhase::Typing);
    }

    #[test]
    fn visible_is_always_a_prefix_of_the_active_line() {
        let mut tw = Typewriter::new(LINES).unwrap();
        for _ in 0..500 {
            let line = LINES[tw.line_index()];
            assert!(line.starts_with(tw.visible()));
            tw.advance();
        }
    }

    #[test]
    fn line_index_wraps_to_zero() {
        let mut tw = Typewriter::new(LINES).unwrap();
        for _ in 0..LINES.len() {
            let count = LINES[tw.line_index()].chars().count();
            ticks(&mut tw, count);
            tw.advance();
        }
        assert_eq!(tw.line_index(), 0);
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn accented_copy_reveals_whole_characters() {
        let mut tw = Typewriter::new(&["Créer"]).unwrap();
        tw.advance();
        tw.advance();
        // Never splits the 'é' in half.
        assert_eq!(tw.visible(), "Cr");
        tw.advance();
        assert_eq!(tw.visible(), "Cré");
    }

    #[test]
    fn empty_script_is_rejected() {
        assert_eq!(Typewriter::new(&[]), Err(WidgetError::EmptyScript));
    }

    #[test]
    fn default_machine_is_inert() {
        let mut tw = Typewriter::default();
        assert_eq!(tw.visible(), "");
        tw.advance();
        tw.advance();
        assert_eq!(tw.visible(), "");
    }
}
