use crate::boot::{BootPhase, BootSequencer};
use crate::command::suggestions;
use crate::content::Content;
use crate::interpreter::Interpreter;
use crate::session::{LineKind, Session};
use crate::theme::ThemeName;

/// One running terminal: the session, the interpreter that writes into it,
/// and the boot state that gates interactive input.
pub struct Terminal {
    session: Session,
    interpreter: Interpreter,
    boot: BootSequencer,
}

impl Terminal {
    pub fn new(interpreter: Interpreter) -> Self {
        Terminal {
            session: Session::new(),
            interpreter,
            boot: BootSequencer::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True until the boot sequence has completed.
    pub fn is_booting(&self) -> bool {
        self.boot.phase() != BootPhase::Ready
    }

    pub(crate) fn begin_boot(&mut self) -> bool {
        self.boot.begin()
    }

    pub(crate) fn boot_line(&mut self, message: &str) {
        self.session.push(LineKind::System, Content::text(message));
    }

    pub(crate) fn finish_boot(&mut self) {
        self.session.transcript.clear();
        self.interpreter.execute(&mut self.session, "neofetch");
        self.session.push(LineKind::System, Content::Welcome);
        self.boot.finish();
    }

    /// Interactive entry point for typed lines and shortcut buttons alike.
    /// Ignored while booting.
    pub fn exec(&mut self, line: &str) {
        if self.is_booting() {
            log::debug!("input ignored while booting: {:?}", line);
            return;
        }
        self.interpreter.execute(&mut self.session, line);
    }

    /// Enter: run whatever is in the input buffer.
    pub fn submit(&mut self) {
        if self.is_booting() {
            return;
        }
        let line = self.session.take_input();
        self.exec(&line);
    }

    pub fn input(&self) -> &str {
        self.session.input()
    }

    pub fn set_input(&mut self, text: &str) {
        self.session.set_input(text);
    }

    pub fn recall_previous(&mut self) {
        self.session.recall_previous();
    }

    pub fn recall_next(&mut self) {
        self.session.recall_next();
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        suggestions(self.session.input())
    }

    /// Tab: take the first suggestion, if any.
    pub fn complete(&mut self) -> bool {
        match self.suggestions().first() {
            Some(first) => {
                self.session.set_input(first);
                true
            }
            None => false,
        }
    }

    pub fn prompt(&self) -> String {
        let about = &self.interpreter.portfolio().about;
        format!("{}@{}:~$", about.user, about.machine)
    }

    pub fn theme(&self) -> ThemeName {
        self.interpreter.themes().current()
    }

    pub fn cycle_theme(&mut self) -> ThemeName {
        self.interpreter.themes_mut().cycle()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::boot::{run_boot, Delay};
    use crate::clock::FixedClock;
    use crate::persist::MemoryStore;
    use crate::portfolio::Portfolio;
    use crate::theme::ThemeState;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::future::{self, Future};

    struct NoDelay;

    impl Delay for NoDelay {
        fn sleep(&self, _ms: u32) -> impl Future<Output = ()> {
            future::ready(())
        }
    }

    pub(crate) fn terminal() -> Terminal {
        let themes = ThemeState::load(Box::new(MemoryStore::new()));
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap());
        let portfolio = Portfolio::builtin().unwrap();
        Terminal::new(Interpreter::new(portfolio, themes, Box::new(clock)))
    }

    fn booted() -> Terminal {
        let cell = RefCell::new(terminal());
        block_on(run_boot(&cell, &NoDelay));
        cell.into_inner()
    }

    #[test]
    fn test_input_ignored_before_boot() {
        let mut t = terminal();
        t.exec("help");
        assert!(t.session().transcript.is_empty());
        assert!(t.session().history.entries().is_empty());
    }

    #[test]
    fn test_boot_records_neofetch_in_history() {
        let t = booted();
        assert_eq!(t.session().history.entries(), ["neofetch"]);
    }

    #[test]
    fn test_submit_runs_buffer() {
        let mut t = booted();
        t.set_input("whoami");
        t.submit();
        assert_eq!(t.input(), "");
        let last = t.session().transcript.lines().last().unwrap();
        assert_eq!(last.content.as_text(), Some("guest"));
    }

    #[test]
    fn test_recall_after_commands() {
        let mut t = booted();
        t.exec("about");
        t.exec("skills");
        t.recall_previous();
        assert_eq!(t.input(), "skills");
        t.recall_previous();
        t.recall_previous();
        assert_eq!(t.input(), "neofetch");
        t.recall_next();
        assert_eq!(t.input(), "about");
    }

    #[test]
    fn test_complete_takes_first_match() {
        let mut t = booted();
        t.set_input("ex");
        assert!(t.complete());
        assert_eq!(t.input(), "experience");
        t.set_input("xyz");
        assert!(!t.complete());
        assert_eq!(t.input(), "xyz");
    }

    #[test]
    fn test_prompt() {
        assert_eq!(terminal().prompt(), "guest@amir-portfolio:~$");
    }

    #[test]
    fn test_cycle_theme_writes_no_line() {
        let mut t = booted();
        let len = t.session().transcript.len();
        assert_eq!(t.cycle_theme(), ThemeName::Nord);
        assert_eq!(t.theme(), ThemeName::Nord);
        assert_eq!(t.session().transcript.len(), len);
    }
}
