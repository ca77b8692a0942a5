use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::from_assets(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("content file is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("couldn't parse portfolio content: {0}")]
    ParseError(String),
    #[error("portfolio content is incomplete: {0}")]
    Incomplete(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    /// Tailwind gradient stops for the card glow, e.g. `from-blue-500 to-cyan-500`.
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub highlight: String,
    pub blurb: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Job>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Portfolio {
    /// The embedded portfolio, parsed on first use.
    pub fn global() -> Result<&'static Portfolio, ContentError> {
        GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
    }

    pub fn from_assets(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        let text = String::from_utf8(file.data.into())
            .map_err(|_| ContentError::Encoding(name.to_string()))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(text).map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.hero.name.trim().is_empty() {
            return Err(ContentError::Incomplete("hero.name"));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ContentError::Incomplete("contact.email"));
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "hero": {
            "name": "Ada",
            "tagline": "Builds things",
            "primary_cta": "Explore",
            "secondary_cta": "CV"
        },
        "skills": [
            { "title": "Frontend", "skills": ["Leptos"], "accent": "from-blue-500 to-cyan-500" }
        ],
        "experience": [
            {
                "title": "Engineer",
                "company": "Acme",
                "period": "2020 - Present",
                "description": "Did work"
            }
        ],
        "projects": [
            { "title": "Thing", "summary": "A thing", "tags": ["Rust"] }
        ],
        "contact": {
            "heading": "Say",
            "highlight": "hi",
            "blurb": "Write me",
            "email": "ada@example.com"
        }
    }"#;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = Portfolio::global().expect("embedded portfolio should parse");
        assert!(!portfolio.hero.name.is_empty());
        assert_eq!(portfolio.skills.len(), 3);
        assert_eq!(portfolio.experience.len(), 2);
        assert_eq!(portfolio.projects.len(), 6);
        assert!(portfolio.mailto().starts_with("mailto:"));
    }

    #[test]
    fn test_parse_defaults_optional_lists() {
        let portfolio = Portfolio::parse(MINIMAL).expect("minimal portfolio should parse");
        assert!(portfolio.experience[0].achievements.is_empty());
        assert!(portfolio.contact.socials.is_empty());
        assert_eq!(portfolio.projects[0].link, None);
        assert_eq!(portfolio.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let res = Portfolio::parse("{ \"hero\": ");
        assert!(matches!(res, Err(ContentError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_missing_email() {
        let text = MINIMAL.replace("ada@example.com", " ");
        assert_eq!(
            Portfolio::parse(&text),
            Err(ContentError::Incomplete("contact.email"))
        );
    }

    #[test]
    fn test_missing_asset() {
        assert_eq!(
            Portfolio::from_assets("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }
}
