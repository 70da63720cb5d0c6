use std::time::Duration;

/// Delay between siblings in a staggered reveal.
pub const STAGGER_STEP_MS: u64 = 200;
/// Fraction of an element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_MS: u64 = 600;
pub const SKILL_BAR_DURATION_MS: u64 = 1500;
pub const SKILL_BAR_DELAY_MS: u64 = 500;

/// Interval between typewriter ticks.
pub const TYPE_TICK_MS: u64 = 80;
/// How long a fully typed word stays on screen.
pub const TYPE_HOLD_MS: u64 = 2000;

pub fn stagger_delay(index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(index as u64 * step_ms)
}

/// Whether an intersection report means the element should reveal. Observers
/// report ratios with float noise, so the threshold has a small tolerance.
pub fn reaches_reveal_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= REVEAL_THRESHOLD - 1e-3
}

/// CSS width for a skill bar; levels above 100 are clamped.
pub fn skill_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u64),
    Deleting,
}

/// Types each word one character at a time, holds it, deletes it, then moves
/// on to the next word. Wraps forever.
#[derive(Debug, Clone)]
pub struct TypewriterState {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    phase: Phase,
}

impl TypewriterState {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn hold_ticks() -> u64 {
        (TYPE_HOLD_MS / TYPE_TICK_MS).max(1)
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    pub fn text(&self) -> &'static str {
        let word = self.current();
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn tick(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.current().chars().count();
        self.phase = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    Phase::Holding(Self::hold_ticks())
                } else {
                    Phase::Typing
                }
            }
            Phase::Holding(1) => Phase::Deleting,
            Phase::Holding(n) => Phase::Holding(n - 1),
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    Phase::Typing
                } else {
                    Phase::Deleting
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["Rust", "Go"];

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, STAGGER_STEP_MS), Duration::ZERO);
        assert_eq!(stagger_delay(3, STAGGER_STEP_MS), Duration::from_millis(600));
        assert_eq!(stagger_delay(2, 300), Duration::from_millis(600));
    }

    #[test]
    fn test_reveal_threshold() {
        assert!(!reaches_reveal_threshold(true, 0.05));
        assert!(!reaches_reveal_threshold(false, 0.5));
        assert!(!reaches_reveal_threshold(true, 0.0));
        assert!(reaches_reveal_threshold(true, 0.0999999));
        assert!(reaches_reveal_threshold(true, 0.1));
        assert!(reaches_reveal_threshold(true, 1.0));
    }

    #[test]
    fn test_skill_width() {
        assert_eq!(skill_width(85), "85%");
        assert_eq!(skill_width(0), "0%");
        assert_eq!(skill_width(250), "100%");
    }

    #[test]
    fn test_typewriter_cycle() {
        let mut tw = TypewriterState::new(WORDS);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "R");
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.text(), "Rust");

        // held for the full hold window
        for _ in 0..TypewriterState::hold_ticks() {
            assert_eq!(tw.text(), "Rust");
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.text(), "Rus");
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.text(), "");
        assert_eq!(tw.word_index(), 1);

        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "Go");
    }

    #[test]
    fn test_typewriter_wraps() {
        let mut tw = TypewriterState::new(WORDS);
        let mut seen_wrap = false;
        for _ in 0..200 {
            tw.tick();
            if tw.word_index() == 1 {
                seen_wrap = true;
            }
            if seen_wrap && tw.word_index() == 0 {
                return;
            }
        }
        panic!("typewriter never wrapped back to the first word");
    }

    #[test]
    fn test_typewriter_empty() {
        let mut tw = TypewriterState::new(&[]);
        tw.tick();
        assert_eq!(tw.text(), "");
    }
}
