use crate::content::Section;
use serde::Serialize;
use std::str::FromStr;
use strum::{EnumString, IntoStaticStr};

/// The fixed command table. Names are matched after case folding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommandName {
    Help,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
    Ls,
    Cat,
    Neofetch,
    Theme,
    Clear,
    Whoami,
    Date,
}

impl CommandName {
    /// Commands that print a portfolio section verbatim.
    pub fn section(self) -> Option<Section> {
        match self {
            CommandName::About => Some(Section::About),
            CommandName::Experience => Some(Section::Experience),
            CommandName::Skills => Some(Section::Skills),
            CommandName::Projects => Some(Section::Projects),
            CommandName::Education => Some(Section::Education),
            CommandName::Contact => Some(Section::Contact),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CommandInfo {
    pub name: &'static str,
    pub desc: &'static str,
}

pub const COMMANDS: [CommandInfo; 14] = [
    CommandInfo { name: "help", desc: "List all commands" },
    CommandInfo { name: "about", desc: "About me" },
    CommandInfo { name: "experience", desc: "Work experience" },
    CommandInfo { name: "skills", desc: "Technical skills" },
    CommandInfo { name: "projects", desc: "My projects" },
    CommandInfo { name: "education", desc: "Educational background" },
    CommandInfo { name: "contact", desc: "Get in touch" },
    CommandInfo { name: "ls", desc: "List files" },
    CommandInfo { name: "cat", desc: "Read a file" },
    CommandInfo { name: "neofetch", desc: "System info" },
    CommandInfo {
        name: "theme",
        desc: "Change theme [gruvbox, nord, solarized, matrix, catppuccin]",
    },
    CommandInfo { name: "clear", desc: "Clear terminal" },
    CommandInfo { name: "whoami", desc: "Print the current user" },
    CommandInfo { name: "date", desc: "Print the current date" },
];

/// Virtual files readable with `cat`, in `ls` order.
pub const FILES: [(&str, Section); 6] = [
    ("about.txt", Section::About),
    ("experience.md", Section::Experience),
    ("skills.md", Section::Skills),
    ("projects.json", Section::Projects),
    ("education.txt", Section::Education),
    ("contact.info", Section::Contact),
];

pub fn lookup_file(name: &str) -> Option<Section> {
    FILES.iter().find(|(f, _)| *f == name).map(|(_, s)| *s)
}

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub struct Command<'a> {
    /// First token as typed.
    pub token: &'a str,
    /// `token`, lowercased.
    pub name: String,
    /// Remaining tokens joined by single spaces.
    pub args: String,
}

impl<'a> Command<'a> {
    /// `None` for blank input.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split_whitespace();
        let token = parts.next()?;
        Some(Command {
            token,
            name: token.to_lowercase(),
            args: parts.collect::<Vec<_>>().join(" "),
        })
    }

    pub fn resolve(&self) -> Option<CommandName> {
        CommandName::from_str(&self.name).ok()
    }
}

/// Tab-completion candidates: command names starting with the typed word.
/// Nothing is offered once the input contains a space.
pub fn suggestions(input: &str) -> Vec<&'static str> {
    if input.trim().is_empty() || input.contains(' ') {
        return Vec::new();
    }
    let prefix = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|c| c.name)
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

/// Status bar buttons; each one runs a canonical command.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shortcut {
    pub label: &'static str,
    pub command: &'static str,
}

pub const SHORTCUTS: [Shortcut; 6] = [
    Shortcut { label: "1:About", command: "about" },
    Shortcut { label: "2:Experience", command: "experience" },
    Shortcut { label: "3:Skills", command: "skills" },
    Shortcut { label: "4:Projects", command: "projects" },
    Shortcut { label: "5:Contact", command: "contact" },
    Shortcut { label: "[ Files ]", command: "ls" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folds_name_and_joins_args() {
        let cmd = Command::parse("  CaT   About.TXT   extra ").unwrap();
        assert_eq!(cmd.token, "CaT");
        assert_eq!(cmd.name, "cat");
        assert_eq!(cmd.args, "About.TXT extra");
        assert_eq!(cmd.resolve(), Some(CommandName::Cat));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse(" \t "), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(Command::parse("zzz").unwrap().resolve(), None);
    }

    #[test]
    fn test_every_table_entry_resolves() {
        for info in COMMANDS {
            let cmd = Command::parse(info.name).unwrap();
            assert!(cmd.resolve().is_some(), "{} not dispatchable", info.name);
        }
    }

    #[test]
    fn test_file_table() {
        assert_eq!(lookup_file("skills.md"), Some(Section::Skills));
        assert_eq!(lookup_file("Skills.md"), None);
        assert_eq!(lookup_file("nosuchfile"), None);
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggestions("c"), vec!["contact", "cat", "clear"]);
        assert_eq!(suggestions("NE"), vec!["neofetch"]);
        assert!(suggestions("cat ").is_empty());
        assert!(suggestions("").is_empty());
    }
}
