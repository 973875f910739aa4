pub const TYPING_INTERVAL_MS: i32 = 100;
pub const CARET_LINGER_MS: i32 = 1_000;
pub const CARET_BORDER: &str = "2px solid #6366f1";

/// Reveals a string one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Text visible after this tick, or `None` once everything is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }

        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut typewriter = Typewriter::new("Hi!");

        assert_eq!(typewriter.advance().as_deref(), Some("H"));
        assert_eq!(typewriter.advance().as_deref(), Some("Hi"));
        assert_eq!(typewriter.advance().as_deref(), Some("Hi!"));
        assert_eq!(typewriter.advance(), None);
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let mut typewriter = Typewriter::new("né🚀");

        assert_eq!(typewriter.advance().as_deref(), Some("n"));
        assert_eq!(typewriter.advance().as_deref(), Some("né"));
        assert_eq!(typewriter.advance().as_deref(), Some("né🚀"));
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut typewriter = Typewriter::new("");

        assert_eq!(typewriter.advance(), None);
    }
}
