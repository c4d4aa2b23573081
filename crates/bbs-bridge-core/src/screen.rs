/// One frame of the remote terminal's visible grid.
///
/// Lines are stored with trailing whitespace removed. A snapshot has no
/// identity beyond its content: two snapshots with the same lines are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScreenSnapshot {
    lines: Vec<String>,
    text: String,
}

impl ScreenSnapshot {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end().to_string())
            .collect();
        let text = lines.join("\n");
        Self { lines, text }
    }

    /// Build a snapshot from newline-joined screen text.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split('\n'))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole screen joined with `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Lines carrying at least one non-whitespace character, top to bottom.
    pub fn non_empty_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.non_empty_lines().next().is_none()
    }
}

/// Anything that can produce the current screen on demand.
///
/// Implementations must be cheap to call repeatedly; the quiescence detector
/// polls them at a short fixed interval.
pub trait ScreenSource {
    fn snapshot(&self) -> ScreenSnapshot;
}
