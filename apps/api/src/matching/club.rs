//! Club matching — profile-driven additive relevance over the club's
//! name/category/description text.
//!
//! Unlike career and portfolio scores, club scores are not clamped to 100.
//! That asymmetry mirrors long-standing behavior and is covered by tests;
//! capping it is an open product decision, not something to fix here.

use std::collections::BTreeSet;

use crate::matching::{normalize, MatchResult};
use crate::models::catalog::Club;
use crate::models::profile::StudentProfile;

const INTEREST_POINTS: u32 = 15;
const SKILL_POINTS: u32 = 10;

/// Scores one club against a profile's interests and skills.
pub fn match_club(profile: &StudentProfile, club: &Club) -> MatchResult<Club> {
    let text = normalize(&format!("{} {} {}", club.name, club.category, club.description));

    let interest_hits = profile
        .normalized_interests()
        .into_iter()
        .filter(|i| text.contains(i.as_str()))
        .count() as u32;
    let matched: BTreeSet<String> = profile
        .normalized_skills()
        .into_iter()
        .filter(|s| text.contains(s.as_str()))
        .collect();

    let score = interest_hits * INTEREST_POINTS + matched.len() as u32 * SKILL_POINTS;

    MatchResult {
        target: club.clone(),
        score,
        matched_skills: matched.into_iter().collect(),
        missing_skills: Vec::new(),
        rationale: "This club aligns with your interests and can help you network \
                    with like-minded students."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::AcademicYear;
    use uuid::Uuid;

    fn make_profile(skills: &[&str], interests: &[&str]) -> StudentProfile {
        StudentProfile {
            id: Uuid::new_v4(),
            academic_year: AcademicYear::Freshman,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            preferred_industries: vec![],
            career_goals: String::new(),
            work_experience: String::new(),
            college_id: Some(Uuid::new_v4()),
            major_id: None,
            gpa: None,
        }
    }

    fn make_club(name: &str, category: &str, description: &str) -> Club {
        Club {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            college_id: Uuid::new_v4(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_fifteen_per_interest_ten_per_skill() {
        let profile = make_profile(&["python"], &["robotics"]);
        let club = make_club("Robotics Club", "Tech", "We build robots in python");
        let result = match_club(&profile, &club);
        assert_eq!(result.score, 25);
        assert_eq!(result.matched_skills, vec!["python"]);
    }

    #[test]
    fn test_club_score_is_not_clamped_to_one_hundred() {
        // Career and portfolio scores clamp at 100; club scores do not.
        let interests: Vec<&str> = vec![
            "robots", "coding", "hardware", "sensors", "vision", "motors", "ai", "drones",
        ];
        let profile = make_profile(&[], &interests);
        let club = make_club(
            "Robotics Club",
            "Tech",
            "robots coding hardware sensors vision motors ai drones",
        );
        let result = match_club(&profile, &club);
        assert_eq!(result.score, 120);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let profile = make_profile(&["painting"], &["watercolors"]);
        let club = make_club("Chess Club", "Games", "Weekly chess tournaments");
        assert_eq!(match_club(&profile, &club).score, 0);
    }

    #[test]
    fn test_category_text_counts_for_matching() {
        let profile = make_profile(&[], &["cultural"]);
        let club = make_club("Folklore Society", "Cultural", "");
        assert_eq!(match_club(&profile, &club).score, 15);
    }
}
