//! Renderable payloads for transcript lines, independent of how the host
//! page draws them. Serialized as `{"type": ..., ...}` for the JS side.

use crate::command::{CommandInfo, COMMANDS, FILES};
use crate::neofetch::Neofetch;
use crate::portfolio::{About, Contact, Education, Experience, Portfolio, Project, SkillGroup};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    Text { text: String },
    About(About),
    Experience { entries: Vec<Experience> },
    Skills { groups: Vec<SkillGroup> },
    Projects { projects: Vec<Project> },
    Education { entries: Vec<Education> },
    Contact(Contact),
    Help { commands: Vec<CommandInfo> },
    Files { names: Vec<&'static str> },
    Neofetch(Neofetch),
    Welcome,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    pub fn help() -> Self {
        Content::Help {
            commands: COMMANDS.to_vec(),
        }
    }

    pub fn files() -> Self {
        Content::Files {
            names: FILES.iter().map(|(name, _)| *name).collect(),
        }
    }

    pub fn neofetch(portfolio: &Portfolio) -> Self {
        Content::Neofetch(Neofetch::new(&portfolio.about))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// One named category of portfolio content. Section commands and `cat`
/// both go through [`Section::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub fn render(self, p: &Portfolio) -> Content {
        match self {
            Section::About => Content::About(p.about.clone()),
            Section::Experience => Content::Experience {
                entries: p.experience.clone(),
            },
            Section::Skills => Content::Skills {
                groups: p.skills.clone(),
            },
            Section::Projects => Content::Projects {
                projects: p.projects.clone(),
            },
            Section::Education => Content::Education {
                entries: p.education.clone(),
            },
            Section::Contact => Content::Contact(p.contact.clone()),
        }
    }
}

/// Plain-text rendering, for text-only surfaces and logs.
impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text { text } => write!(f, "{}", text),
            Content::About(a) => {
                writeln!(f, "Hello! I'm {}.", a.name)?;
                writeln!(f, "I am a {} based in {}.", a.title, a.location)?;
                write!(f, "{}", a.description)
            }
            Content::Experience { entries } => {
                for (i, e) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{} ({})", e.company, e.period)?;
                    write!(f, "{}", e.role)?;
                    for d in &e.details {
                        write!(f, "\n  - {}", d)?;
                    }
                }
                Ok(())
            }
            Content::Skills { groups } => {
                let lines: Vec<_> = groups
                    .iter()
                    .map(|g| format!("{}: {}", g.category, g.items.join(", ")))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Content::Projects { projects } => {
                let lines: Vec<_> = projects
                    .iter()
                    .map(|p| format!("> {}\n  {}", p.name, p.description))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Content::Education { entries } => {
                let lines: Vec<_> = entries
                    .iter()
                    .map(|e| format!("{} ({})\n  {}", e.institution, e.period, e.degree))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Content::Contact(c) => {
                writeln!(f, "Email: {}", c.email)?;
                writeln!(f, "Phone: {}", c.phone)?;
                writeln!(f, "GitHub: {}", c.github)?;
                write!(f, "Location: {}", c.location)
            }
            Content::Help { commands } => {
                let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
                let lines: Vec<_> = commands
                    .iter()
                    .map(|c| format!("{:width$}  {}", c.name, c.desc, width = width))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Content::Files { names } => write!(f, "{}", names.join("  ")),
            Content::Neofetch(n) => write!(f, "{}", n.format()),
            Content::Welcome => write!(f, "Type 'help' OR use the buttons below to navigate."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::builtin().unwrap()
    }

    #[test]
    fn test_about_text() {
        let text = Section::About.render(&portfolio()).to_string();
        assert!(text.starts_with("Hello! I'm Amir Khan."));
        assert!(text.contains("Software Engineer based in Mumbai, India"));
    }

    #[test]
    fn test_experience_lists_details() {
        let text = Section::Experience.render(&portfolio()).to_string();
        assert!(text.contains("GrayMatrix Solutions (07.2023 - 12.2023)"));
        assert!(text.contains("  - Merged 45+ SSO providers using SAML 2.0 and OAuth2."));
    }

    #[test]
    fn test_files_listing() {
        assert_eq!(
            Content::files().to_string(),
            "about.txt  experience.md  skills.md  projects.json  education.txt  contact.info"
        );
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(Section::Contact.render(&portfolio())).unwrap();
        assert_eq!(json["type"], "contact");
        assert_eq!(json["githubUrl"], "https://github.com/amirk85");

        let json = serde_json::to_value(Content::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "text": "hi"}));
    }
}
