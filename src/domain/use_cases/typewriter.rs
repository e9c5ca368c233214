use std::time::Duration;

const CHAR_DELAY: Duration = Duration::from_millis(50);
const LINE_PAUSE: Duration = Duration::from_millis(300);

/// Reveals terminal lines one character at a time. The driver waits for the delay
/// returned by [`Typewriter::next_delay`], then calls [`Typewriter::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    column: usize,
    displayed: String,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Typewriter {
            lines: lines.iter().map(|l| l.as_ref().to_string()).collect(),
            line: 0,
            column: 0,
            displayed: String::new(),
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn is_done(&self) -> bool {
        self.line >= self.lines.len()
    }

    pub fn next_delay(&self) -> Option<Duration> {
        let current = self.lines.get(self.line)?;
        if self.column < current.chars().count() {
            Some(CHAR_DELAY)
        } else {
            Some(LINE_PAUSE)
        }
    }

    /// Applies one step and returns the delay before the following one, or `None` once
    /// every line has been typed.
    pub fn tick(&mut self) -> Option<Duration> {
        let current = self.lines.get(self.line)?;
        match current.chars().nth(self.column) {
            Some(c) => {
                self.displayed.push(c);
                self.column += 1;
            }
            None => {
                self.displayed.push('\n');
                self.line += 1;
                self.column = 0;
            }
        }
        self.next_delay()
    }

    /// Total time the animation takes from start to finish.
    pub fn total_duration(&self) -> Duration {
        let chars: u32 = self.lines.iter().map(|l| l.chars().count() as u32).sum();
        CHAR_DELAY * chars + LINE_PAUSE * self.lines.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_characters_then_pauses_between_lines() {
        let mut tw = Typewriter::new(&["ab", "c"]);
        assert_eq!(tw.next_delay(), Some(CHAR_DELAY));
        assert_eq!(tw.tick(), Some(CHAR_DELAY));
        assert_eq!(tw.tick(), Some(LINE_PAUSE));
        assert_eq!(tw.displayed(), "ab");
        assert_eq!(tw.tick(), Some(CHAR_DELAY));
        assert_eq!(tw.displayed(), "ab\n");
        assert_eq!(tw.tick(), Some(LINE_PAUSE));
        assert_eq!(tw.tick(), None);
        assert!(tw.is_done());
        assert_eq!(tw.displayed(), "ab\nc\n");
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn empty_input_is_done_immediately() {
        let mut tw = Typewriter::new::<&str>(&[]);
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn duration_counts_every_step() {
        let tw = Typewriter::new(&["abc", "de"]);
        assert_eq!(tw.total_duration(), Duration::from_millis(5 * 50 + 2 * 300));
    }
}
