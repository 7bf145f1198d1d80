//! Static portfolio content, embedded at compile time.

use serde::{ Deserialize, Serialize };

use crate::error::ContentError;

const PORTFOLIO_JSON: &str = include_str!("../../assets/portfolio.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Job>,
    pub projects: Vec<Project>,
    pub footer: FooterInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub badge: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
}

impl Contact {
    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Database,
    Server,
    Code,
    Terminal,
    Cpu,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Database => "🗄️",
            SkillIcon::Server => "🖥️",
            SkillIcon::Code => "</>",
            SkillIcon::Terminal => ">_",
            SkillIcon::Cpu => "⚙️",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
    pub icon: SkillIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub tech: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterInfo {
    pub year: u16,
    pub built_with: String,
}

impl PortfolioData {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(PORTFOLIO_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }
}
