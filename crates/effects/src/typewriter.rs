//! Typewriter title: types a role title one character at a time, pauses,
//! deletes it, and moves on to the next title, forever.

use portfolio_fx_core::error::FxError;
use std::time::Duration;

/// Delay after typing a character.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay after deleting a character.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Pause once a title is fully typed.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause once a title is fully deleted.
pub const NEXT_DELAY: Duration = Duration::from_millis(500);

/// Titles shown in the sidebar by default.
pub const DEFAULT_TITLES: [&str; 4] = [
    "AI Engineer",
    "RAG Architect",
    "MLOps Specialist",
    "LLM Developer",
];

/// What to display now, and how long to wait before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    title_index: usize,
    /// Characters (not bytes) of the current title on screen.
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// Returns `FxError::InvalidParam` if `titles` is empty or holds an empty
    /// string (an empty title would never complete).
    pub fn new<I, S>(titles: I) -> Result<Self, FxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return Err(FxError::InvalidParam {
                name: "titles".into(),
                reason: "at least one title is required".into(),
            });
        }
        if let Some(i) = titles.iter().position(|t| t.is_empty()) {
            return Err(FxError::InvalidParam {
                name: "titles".into(),
                reason: format!("title {i} is empty"),
            });
        }
        Ok(Self {
            titles,
            title_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    /// The title currently being typed or deleted.
    pub fn current_title(&self) -> &str {
        &self.titles[self.title_index]
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Types or deletes one character and reports the text and next delay.
    pub fn tick(&mut self) -> TypewriterFrame {
        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.char_index += 1;
            TYPE_DELAY
        };
        let title = &self.titles[self.title_index];
        let text = prefix(title, self.char_index).to_owned();

        if !self.deleting && self.char_index == title.chars().count() {
            self.deleting = true;
            delay = HOLD_DELAY;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.title_index = (self.title_index + 1) % self.titles.len();
            delay = NEXT_DELAY;
        }

        TypewriterFrame { text, delay }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            titles: DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
            title_index: 0,
            char_index: 0,
            deleting: false,
        }
    }
}

/// The first `n` characters of `s`.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str, ms: u64) -> TypewriterFrame {
        TypewriterFrame {
            text: text.to_string(),
            delay: Duration::from_millis(ms),
        }
    }

    #[test]
    fn full_cycle_for_short_title() {
        let mut tw = Typewriter::new(["Hi", "Yo"]).unwrap();
        let frames: Vec<_> = (0..9).map(|_| tw.tick()).collect();
        assert_eq!(
            frames,
            vec![
                frame("H", 100),
                frame("Hi", 2000),
                frame("H", 50),
                frame("", 500),
                frame("Y", 100),
                frame("Yo", 2000),
                frame("Y", 50),
                frame("", 500),
                frame("H", 100),
            ]
        );
    }

    #[test]
    fn single_character_title_holds_immediately() {
        let mut tw = Typewriter::new(["A"]).unwrap();
        assert_eq!(tw.tick(), frame("A", 2000));
        assert!(tw.is_deleting());
        assert_eq!(tw.tick(), frame("", 500));
        assert_eq!(tw.current_title(), "A");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = Typewriter::new(["né"]).unwrap();
        assert_eq!(tw.tick().text, "n");
        assert_eq!(tw.tick(), frame("né", 2000));
    }

    #[test]
    fn default_cycles_through_all_titles() {
        let mut tw = Typewriter::default();
        let mut shown = Vec::new();
        for _ in 0..4 {
            shown.push(tw.current_title().to_string());
            loop {
                if tw.tick().delay == NEXT_DELAY {
                    break;
                }
            }
        }
        assert_eq!(shown, DEFAULT_TITLES.map(String::from).to_vec());
        assert_eq!(tw.current_title(), "AI Engineer");
    }

    #[test]
    fn typed_text_is_always_a_prefix() {
        let mut tw = Typewriter::default();
        for _ in 0..500 {
            let title = tw.current_title().to_string();
            let f = tw.tick();
            assert!(title.starts_with(&f.text), "{:?} is not a prefix of {title:?}", f.text);
        }
    }

    #[test]
    fn rejects_empty_title_list() {
        let titles: Vec<String> = Vec::new();
        assert!(matches!(
            Typewriter::new(titles),
            Err(FxError::InvalidParam { .. })
        ));
    }

    #[test]
    fn rejects_empty_title() {
        let err = Typewriter::new(["ok", ""]).unwrap_err();
        assert!(err.to_string().contains("title 1 is empty"));
    }
}
