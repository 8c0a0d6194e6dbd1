use crate::portfolio::About;
use serde::Serialize;

pub const ARCH_LOGO: [&str; 7] = [
    "       /\\",
    "      /  \\",
    "     /    \\",
    "    /      \\",
    "   /   ,,   \\",
    "  /   |  |   \\",
    " /_-''    ''-_\\",
];

/// Palette slots shown as the colour strip under the info block.
pub const SWATCHES: [&str; 5] = ["red", "green", "yellow", "blue", "purple"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Neofetch {
    pub user: String,
    pub machine: String,
    pub logo: Vec<&'static str>,
    pub fields: Vec<(&'static str, String)>,
    pub swatches: Vec<&'static str>,
}

impl Neofetch {
    pub fn new(about: &About) -> Self {
        Neofetch {
            user: about.user.clone(),
            machine: about.machine.clone(),
            logo: ARCH_LOGO.to_vec(),
            fields: vec![
                ("OS", "Arch Linux x86_64".to_string()),
                ("Host", about.title.clone()),
                ("Uptime", "Since 1998".to_string()),
                ("Packages", "Next.js, Python, Docker".to_string()),
                ("Shell", "zsh 5.9".to_string()),
                ("Location", about.location.clone()),
            ],
            swatches: SWATCHES.to_vec(),
        }
    }

    /// Logo on the left, `user@machine` header and fields on the right.
    pub fn format(&self) -> String {
        let mut info = vec![
            format!("{}@{}", self.user, self.machine),
            "----------------------".to_string(),
        ];
        info.extend(self.fields.iter().map(|(k, v)| format!("{}: {}", k, v)));

        let width = self.logo.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for i in 0..self.logo.len().max(info.len()) {
            let logo_line = self.logo.get(i).copied().unwrap_or("");
            let info_line = info.get(i).map(String::as_str).unwrap_or("");
            let padding = " ".repeat(width - logo_line.chars().count() + 3);
            let row = format!("{}{}{}", logo_line, padding, info_line);
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Portfolio;

    #[test]
    fn test_fields_follow_about() {
        let p = Portfolio::builtin().unwrap();
        let n = Neofetch::new(&p.about);
        assert_eq!(n.fields[1], ("Host", "Software Engineer".to_string()));
        assert_eq!(n.fields[5].1, "Mumbai, India");
    }

    #[test]
    fn test_format_side_by_side() {
        let p = Portfolio::builtin().unwrap();
        let text = Neofetch::new(&p.about).format();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("       /\\"));
        assert!(lines[0].ends_with("guest@amir-portfolio"));
        assert!(lines[7].trim_start().starts_with("Location: "));
    }
}
