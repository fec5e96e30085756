//! Student profile — the read-only input driving all matching and planning.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Academic standing, carried on the wire as the two-letter codes used by
/// the upstream profile store ("FR", "SO", "JR", "SR", "GR").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcademicYear {
    #[default]
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Graduate,
}

impl AcademicYear {
    /// Parses an academic-year code. Unknown codes fall back to Freshman
    /// (semester index 0) rather than erroring.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "SO" => AcademicYear::Sophomore,
            "JR" => AcademicYear::Junior,
            "SR" => AcademicYear::Senior,
            "GR" => AcademicYear::Graduate,
            _ => AcademicYear::Freshman,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AcademicYear::Freshman => "FR",
            AcademicYear::Sophomore => "SO",
            AcademicYear::Junior => "JR",
            AcademicYear::Senior => "SR",
            AcademicYear::Graduate => "GR",
        }
    }

    /// 0-based index of the student's current semester
    /// (0 = Freshman Fall, 2 = Sophomore Fall, ... 8 = already graduated).
    pub fn semester_index(&self) -> usize {
        match self {
            AcademicYear::Freshman => 0,
            AcademicYear::Sophomore => 2,
            AcademicYear::Junior => 4,
            AcademicYear::Senior => 6,
            AcademicYear::Graduate => 8,
        }
    }

    /// 1-based year level used for course-level fit (Freshman=1 ... Graduate=5).
    pub fn level(&self) -> u32 {
        match self {
            AcademicYear::Freshman => 1,
            AcademicYear::Sophomore => 2,
            AcademicYear::Junior => 3,
            AcademicYear::Senior => 4,
            AcademicYear::Graduate => 5,
        }
    }
}

impl Serialize for AcademicYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AcademicYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(AcademicYear::from_code(&code))
    }
}

/// A student's academic and career record as supplied by the hosting layer.
///
/// Every field beyond the id and academic year is optional in spirit: empty
/// collections and empty strings degrade to zero score contributions or
/// empty recommendation lists, never to errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: Uuid,
    #[serde(default)]
    pub academic_year: AcademicYear,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub work_experience: String,
    #[serde(default)]
    pub college_id: Option<Uuid>,
    #[serde(default)]
    pub major_id: Option<Uuid>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

impl StudentProfile {
    /// Lowercased, trimmed, deduplicated skill set in deterministic order.
    pub fn normalized_skills(&self) -> BTreeSet<String> {
        crate::matching::normalize_set(&self.skills)
    }

    /// Lowercased, trimmed, deduplicated interest set in deterministic order.
    pub fn normalized_interests(&self) -> BTreeSet<String> {
        crate::matching::normalize_set(&self.interests)
    }

    pub fn normalized_industries(&self) -> BTreeSet<String> {
        crate::matching::normalize_set(&self.preferred_industries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_code_round_trip() {
        for code in ["FR", "SO", "JR", "SR", "GR"] {
            assert_eq!(AcademicYear::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_unknown_year_code_falls_back_to_freshman() {
        assert_eq!(AcademicYear::from_code("PHD"), AcademicYear::Freshman);
        assert_eq!(AcademicYear::from_code(""), AcademicYear::Freshman);
    }

    #[test]
    fn test_year_code_parse_is_case_insensitive() {
        assert_eq!(AcademicYear::from_code(" so "), AcademicYear::Sophomore);
    }

    #[test]
    fn test_semester_index_table() {
        assert_eq!(AcademicYear::Freshman.semester_index(), 0);
        assert_eq!(AcademicYear::Sophomore.semester_index(), 2);
        assert_eq!(AcademicYear::Junior.semester_index(), 4);
        assert_eq!(AcademicYear::Senior.semester_index(), 6);
        assert_eq!(AcademicYear::Graduate.semester_index(), 8);
    }

    #[test]
    fn test_year_deserializes_from_code_string() {
        let year: AcademicYear = serde_json::from_str(r#""JR""#).unwrap();
        assert_eq!(year, AcademicYear::Junior);
    }

    #[test]
    fn test_unknown_code_deserializes_as_freshman() {
        let year: AcademicYear = serde_json::from_str(r#""??""#).unwrap();
        assert_eq!(year, AcademicYear::Freshman);
    }

    #[test]
    fn test_profile_sparse_json_fills_defaults() {
        let json = format!(r#"{{"id": "{}"}}"#, Uuid::new_v4());
        let profile: StudentProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile.academic_year, AcademicYear::Freshman);
        assert!(profile.skills.is_empty());
        assert!(profile.major_id.is_none());
        assert!(profile.career_goals.is_empty());
    }

    #[test]
    fn test_normalized_skills_trim_lowercase_dedup() {
        let profile = StudentProfile {
            id: Uuid::new_v4(),
            academic_year: AcademicYear::Freshman,
            skills: vec![
                " Python ".to_string(),
                "python".to_string(),
                "SQL".to_string(),
                "  ".to_string(),
            ],
            interests: vec![],
            preferred_industries: vec![],
            career_goals: String::new(),
            work_experience: String::new(),
            college_id: None,
            major_id: None,
            gpa: None,
        };
        let skills: Vec<String> = profile.normalized_skills().into_iter().collect();
        assert_eq!(skills, vec!["python".to_string(), "sql".to_string()]);
    }
}
