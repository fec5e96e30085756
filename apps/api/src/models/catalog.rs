//! Catalog entities — the targets a student profile is matched against.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Academic term. The roadmap derives it from semester parity
/// (even 0-based index = Fall).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    #[default]
    #[serde(alias = "FALL")]
    Fall,
    #[serde(alias = "SPRING")]
    Spring,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
        }
    }
}

/// Difficulty tier of a portfolio item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "BEGINNER")]
    Beginner,
    #[serde(alias = "INTERMEDIATE")]
    Intermediate,
    #[serde(alias = "ADVANCED")]
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Kind of portfolio checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(alias = "PROJECT")]
    Project,
    #[serde(alias = "CERTIFICATION")]
    Certification,
    #[serde(alias = "INTERNSHIP")]
    Internship,
    #[serde(alias = "RESEARCH")]
    Research,
    #[serde(alias = "COMPETITION")]
    Competition,
}

impl ItemType {
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Project => "project",
            ItemType::Certification => "certification",
            ItemType::Internship => "internship",
            ItemType::Research => "research project",
            ItemType::Competition => "competition",
        }
    }
}

/// A career path students can be matched against. Unscoped — every career
/// is visible to every profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// A course offered for a specific major. `number` is free text
/// ("301", "4500H"); its leading digit, when present, is the course level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub subject: String,
    pub number: String,
    pub title: String,
    pub credits: f64,
    pub major_id: Uuid,
    #[serde(default)]
    pub description: String,
}

/// A student club tied to one college.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub college_id: Uuid,
    #[serde(default)]
    pub description: String,
}

/// A portfolio checklist item (project, certification, ...). Unscoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub item_type: ItemType,
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub estimated_hours: Option<u32>,
    #[serde(default)]
    pub description: String,
}
