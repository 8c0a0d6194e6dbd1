//! Static portfolio content, keyed by section.

use crate::error::ContentError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const BUILTIN: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub user: String,
    pub machine: String,
    pub title: String,
    pub location: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub period: String,
    pub role: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub period: String,
    pub degree: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub github_url: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub about: About,
    pub experience: Vec<Experience>,
    /// `{ "category": [items] }` in the source data; kept in document order.
    #[serde(deserialize_with = "skill_groups")]
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub contact: Contact,
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The portfolio compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN)
    }
}

fn skill_groups<'de, D>(deserializer: D) -> Result<Vec<SkillGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<SkillGroup>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of skill category to list of skills")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut groups = Vec::new();
            while let Some((category, items)) = map.next_entry::<String, Vec<String>>()? {
                groups.push(SkillGroup { category, items });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let p = Portfolio::builtin().unwrap();
        assert_eq!(p.about.user, "guest");
        assert_eq!(p.experience.len(), 3);
        assert_eq!(p.contact.github_url, "https://github.com/amirk85");
    }

    #[test]
    fn test_skills_keep_document_order() {
        let p = Portfolio::builtin().unwrap();
        let cats: Vec<_> = p.skills.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(cats, ["frontend", "backend", "database", "design"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Portfolio::from_json("{\"about\": 3}").is_err());
    }
}
