use crate::clock::{format_timestamp, Clock};
use crate::command::{lookup_file, Command, CommandName};
use crate::content::{Content, Section};
use crate::error::CommandError;
use crate::portfolio::Portfolio;
use crate::session::{LineKind, Session};
use crate::theme::{self, ThemeState};

/// Turns input lines into transcript output. Holds the read-only content and
/// the collaborators commands need; all mutable per-run state is in
/// [`Session`].
pub struct Interpreter {
    portfolio: Portfolio,
    themes: ThemeState,
    clock: Box<dyn Clock>,
}

impl Interpreter {
    pub fn new(portfolio: Portfolio, themes: ThemeState, clock: Box<dyn Clock>) -> Self {
        Interpreter {
            portfolio,
            themes,
            clock,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn themes(&self) -> &ThemeState {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeState {
        &mut self.themes
    }

    /// Run one line of input. Blank input does nothing; anything else is
    /// echoed, recorded in history, and dispatched. Failures end up as a
    /// single `Error` line.
    pub fn execute(&mut self, session: &mut Session, raw: &str) {
        let trimmed = raw.trim();
        let Some(cmd) = Command::parse(trimmed) else {
            return;
        };

        session.push(LineKind::Input, Content::text(trimmed));
        session.history.push(trimmed);
        session.history.reset_cursor();

        log::debug!("exec {:?} args={:?}", cmd.name, cmd.args);
        if let Err(e) = self.dispatch(session, &cmd) {
            session.push(LineKind::Error, Content::text(e.to_string()));
        }
    }

    fn dispatch(&mut self, session: &mut Session, cmd: &Command) -> Result<(), CommandError> {
        let name = cmd
            .resolve()
            .ok_or_else(|| CommandError::NotFound(cmd.token.to_string()))?;

        if let Some(section) = name.section() {
            self.print_section(session, section);
            return Ok(());
        }

        match name {
            CommandName::Help => {
                session.push(LineKind::Output, Content::help());
            }
            CommandName::Ls => {
                session.push(LineKind::Output, Content::files());
            }
            CommandName::Cat => self.cmd_cat(session, &cmd.args)?,
            CommandName::Neofetch => {
                session.push(LineKind::Output, Content::neofetch(&self.portfolio));
            }
            CommandName::Theme => self.cmd_theme(session, &cmd.args)?,
            CommandName::Clear => session.transcript.clear(),
            CommandName::Whoami => {
                session.push(LineKind::Output, Content::text(&self.portfolio.about.user));
            }
            CommandName::Date => {
                let now = format_timestamp(&self.clock.now());
                session.push(LineKind::Output, Content::text(now));
            }
            // handled by section() above
            CommandName::About
            | CommandName::Experience
            | CommandName::Skills
            | CommandName::Projects
            | CommandName::Education
            | CommandName::Contact => {}
        }
        Ok(())
    }

    fn print_section(&self, session: &mut Session, section: Section) {
        session.push(LineKind::Output, section.render(&self.portfolio));
    }

    fn cmd_cat(&self, session: &mut Session, args: &str) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::CatUsage);
        }
        let filename = args.trim().to_lowercase();
        let section = lookup_file(&filename).ok_or(CommandError::NoSuchFile(filename))?;
        self.print_section(session, section);
        Ok(())
    }

    fn cmd_theme(&mut self, session: &mut Session, args: &str) -> Result<(), CommandError> {
        if args.is_empty() {
            let names: Vec<_> = theme::enumerate().map(|t| t.as_str()).collect();
            session.push(
                LineKind::Output,
                Content::text(format!("Available themes: {}", names.join(", "))),
            );
            return Ok(());
        }
        let name = self.themes.set_by_name(args.trim())?;
        session.push(
            LineKind::System,
            Content::text(format!("Theme changed to {}", name)),
        );
        Ok(())
    }
}
