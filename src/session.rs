use crate::content::Content;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
    Error,
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputLine {
    pub id: LineId,
    pub kind: LineKind,
    pub content: Content,
}

/// Append-only list of rendered lines. Ids keep counting across clears so
/// they stay unique for the whole session.
#[derive(Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
    next_id: u64,
}

impl Transcript {
    pub fn push(&mut self, kind: LineKind, content: Content) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push(OutputLine { id, kind, content });
        id
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Past input plus the up/down recall cursor (`None` = not navigating).
#[derive(Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step back; stops at the oldest entry.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step forward. Walking past the newest entry leaves navigation and
    /// yields `Some("")` so the caller clears its buffer; `None` means the
    /// cursor was not set and nothing changes.
    pub fn newer(&mut self) -> Option<&str> {
        let idx = self.cursor? + 1;
        if idx < self.entries.len() {
            self.cursor = Some(idx);
            Some(&self.entries[idx])
        } else {
            self.cursor = None;
            Some("")
        }
    }
}

/// Everything a running terminal owns apart from its configuration.
#[derive(Default)]
pub struct Session {
    pub transcript: Transcript,
    pub history: CommandHistory,
    input: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, content: Content) -> LineId {
        self.transcript.push(kind, content)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Hand the buffer over for execution and leave it empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.older() {
            self.input = entry.to_string();
        }
    }

    pub fn recall_next(&mut self) {
        if let Some(entry) = self.history.newer() {
            self.input = entry.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(entries: &[&str]) -> Session {
        let mut s = Session::new();
        for e in entries {
            s.history.push(e);
        }
        s
    }

    #[test]
    fn test_recall_walks_back_and_floors() {
        let mut s = session_with(&["a", "b", "c"]);
        s.recall_previous();
        assert_eq!(s.input(), "c");
        s.recall_previous();
        assert_eq!(s.input(), "b");
        s.recall_previous();
        assert_eq!(s.input(), "a");
        s.recall_previous();
        assert_eq!(s.input(), "a");
        assert_eq!(s.history.cursor(), Some(0));
    }

    #[test]
    fn test_recall_next_runs_off_the_end() {
        let mut s = session_with(&["a", "b", "c"]);
        for _ in 0..3 {
            s.recall_previous();
        }
        s.recall_next();
        assert_eq!(s.input(), "b");
        s.recall_next();
        assert_eq!(s.input(), "c");
        s.recall_next();
        assert_eq!(s.input(), "");
        assert_eq!(s.history.cursor(), None);
    }

    #[test]
    fn test_recall_on_empty_history_is_noop() {
        let mut s = Session::new();
        s.set_input("typing");
        s.recall_previous();
        assert_eq!(s.input(), "typing");
        assert_eq!(s.history.cursor(), None);
    }

    #[test]
    fn test_recall_next_without_cursor_is_noop() {
        let mut s = session_with(&["a"]);
        s.set_input("draft");
        s.recall_next();
        assert_eq!(s.input(), "draft");
    }

    #[test]
    fn test_ids_unique_across_clear() {
        let mut t = Transcript::default();
        let a = t.push(LineKind::System, Content::text("one"));
        t.clear();
        let b = t.push(LineKind::System, Content::text("two"));
        assert!(t.len() == 1 && a != b);
    }

    #[test]
    fn test_take_input_empties_buffer() {
        let mut s = Session::new();
        s.set_input("help");
        assert_eq!(s.take_input(), "help");
        assert_eq!(s.input(), "");
    }
}
