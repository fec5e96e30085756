//! Portfolio item matching — gap-driven: items are scored against the skills
//! missing from the student's top career matches, not against the skills the
//! student already has.

use std::collections::BTreeSet;

use crate::matching::{name_some, MatchResult};
use crate::models::catalog::{Difficulty, PortfolioItem};
use crate::models::profile::{AcademicYear, StudentProfile};

const OVERLAP_POINTS: u32 = 20;
const DIFFICULTY_POINTS: u32 = 10;
const SKILLS_NAMED: usize = 2;

/// Difficulty-fit lookup: how well an item's difficulty suits the student's
/// academic year. Peaks when they align (Freshman + Beginner = 10), bottoms
/// out at 2 for the widest mismatch.
fn difficulty_fit(year: AcademicYear, difficulty: Difficulty) -> u32 {
    use AcademicYear::*;
    use Difficulty::*;
    match (year, difficulty) {
        (Freshman, Beginner) => 10,
        (Freshman, Intermediate) => 5,
        (Freshman, Advanced) => 2,
        (Sophomore, Beginner) => 8,
        (Sophomore, Intermediate) => 10,
        (Sophomore, Advanced) => 5,
        (Junior, Beginner) => 5,
        (Junior, Intermediate) => 10,
        (Junior, Advanced) => 8,
        (Senior, Beginner) => 3,
        (Senior, Intermediate) => 8,
        (Senior, Advanced) => 10,
        (Graduate, Beginner) => 2,
        (Graduate, Intermediate) => 5,
        (Graduate, Advanced) => 10,
    }
}

/// Scores one portfolio item against the gap-skill set derived from the
/// student's top career matches. Clamped to 100.
pub fn match_portfolio_item(
    profile: &StudentProfile,
    item: &PortfolioItem,
    gap_skills: &BTreeSet<String>,
) -> MatchResult<PortfolioItem> {
    let item_skills = crate::matching::normalize_set(&item.skills);
    let overlap: BTreeSet<String> = item_skills.intersection(gap_skills).cloned().collect();

    let fit = difficulty_fit(profile.academic_year, item.difficulty_level);
    let score = (overlap.len() as u32 * OVERLAP_POINTS + fit * DIFFICULTY_POINTS).min(100);

    let rationale = portfolio_rationale(item, &overlap);

    MatchResult {
        target: item.clone(),
        score,
        matched_skills: overlap.into_iter().collect(),
        missing_skills: Vec::new(),
        rationale,
    }
}

fn portfolio_rationale(item: &PortfolioItem, overlap: &BTreeSet<String>) -> String {
    let mut reason = if overlap.is_empty() {
        format!(
            "This {} will broaden your skill set. ",
            item.item_type.label()
        )
    } else {
        format!(
            "This {} will help you develop {}, which are important for your target careers. ",
            item.item_type.label(),
            name_some(overlap, SKILLS_NAMED)
        )
    };
    if let Some(hours) = item.estimated_hours {
        reason += &format!("Estimated time: {hours} hours. ");
    }
    reason += &format!("Difficulty: {}.", item.difficulty_level.label());
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::ItemType;
    use uuid::Uuid;

    fn make_profile(year: AcademicYear) -> StudentProfile {
        StudentProfile {
            id: Uuid::new_v4(),
            academic_year: year,
            skills: vec![],
            interests: vec![],
            preferred_industries: vec![],
            career_goals: String::new(),
            work_experience: String::new(),
            college_id: None,
            major_id: None,
            gpa: None,
        }
    }

    fn make_item(skills: &[&str], difficulty: Difficulty) -> PortfolioItem {
        PortfolioItem {
            id: Uuid::new_v4(),
            title: "Personal Website".to_string(),
            item_type: ItemType::Project,
            difficulty_level: difficulty,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            estimated_hours: Some(20),
            description: String::new(),
        }
    }

    fn gaps(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_difficulty_fit_peaks_on_alignment() {
        assert_eq!(difficulty_fit(AcademicYear::Freshman, Difficulty::Beginner), 10);
        assert_eq!(difficulty_fit(AcademicYear::Freshman, Difficulty::Advanced), 2);
        assert_eq!(difficulty_fit(AcademicYear::Senior, Difficulty::Advanced), 10);
        assert_eq!(difficulty_fit(AcademicYear::Graduate, Difficulty::Beginner), 2);
    }

    #[test]
    fn test_score_is_overlap_twenty_plus_fit_ten() {
        let profile = make_profile(AcademicYear::Freshman);
        let item = make_item(&["html", "css"], Difficulty::Beginner);
        let result = match_portfolio_item(&profile, &item, &gaps(&["html", "css", "sql"]));
        // 2 overlap * 20 + fit 10 * 10 = 140 -> clamped to 100.
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_score_without_overlap_is_fit_only() {
        let profile = make_profile(AcademicYear::Freshman);
        let item = make_item(&["welding"], Difficulty::Advanced);
        let result = match_portfolio_item(&profile, &item, &gaps(&["sql"]));
        assert_eq!(result.score, 20); // fit 2 * 10
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_score_clamped_to_one_hundred() {
        let profile = make_profile(AcademicYear::Senior);
        let item = make_item(&["a", "b", "c", "d", "e", "f"], Difficulty::Advanced);
        let result =
            match_portfolio_item(&profile, &item, &gaps(&["a", "b", "c", "d", "e", "f"]));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_rationale_names_overlap_hours_and_difficulty() {
        let profile = make_profile(AcademicYear::Sophomore);
        let item = make_item(&["html", "css", "sql"], Difficulty::Intermediate);
        let result = match_portfolio_item(&profile, &item, &gaps(&["html", "css", "sql"]));
        assert!(result.rationale.contains("css, html"));
        assert!(!result.rationale.contains("css, html, sql"));
        assert!(result.rationale.contains("Estimated time: 20 hours"));
        assert!(result.rationale.contains("Difficulty: Intermediate."));
    }

    #[test]
    fn test_rationale_without_overlap_mentions_broadening() {
        let profile = make_profile(AcademicYear::Junior);
        let mut item = make_item(&[], Difficulty::Beginner);
        item.estimated_hours = None;
        let result = match_portfolio_item(&profile, &item, &gaps(&["sql"]));
        assert!(result.rationale.starts_with("This project will broaden"));
        assert!(!result.rationale.contains("Estimated time"));
    }
}
