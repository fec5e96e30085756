//! Course matching — additive integer relevance, not a percentage.
//!
//! Courses are scored against the gap skills from the student's top career
//! matches (+10 per keyword hit on subject/title) with a small bonus when
//! the course level sits near the student's year.

use std::collections::BTreeSet;

use crate::matching::{normalize, MatchResult};
use crate::models::catalog::Course;
use crate::models::profile::StudentProfile;

const KEYWORD_POINTS: u32 = 10;
const LEVEL_POINTS: u32 = 5;

/// Extracts the course level from a free-text course number: the first
/// decimal digit, if any ("301" -> 3, "CS-4500H" -> 4, "intro" -> None).
fn course_level(number: &str) -> Option<u32> {
    number.chars().find_map(|c| c.to_digit(10))
}

/// Scores one course against the gap-skill set. Non-numeric course numbers
/// simply forgo the level bonus.
pub fn match_course(
    profile: &StudentProfile,
    course: &Course,
    gap_skills: &BTreeSet<String>,
) -> MatchResult<Course> {
    let text = normalize(&format!("{} {}", course.subject, course.title));

    let matched: BTreeSet<String> = gap_skills
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect();
    let mut score = matched.len() as u32 * KEYWORD_POINTS;

    // Level bonus: course level at or below one past the student's year.
    if let Some(level) = course_level(&course.number) {
        if level <= profile.academic_year.level() + 1 {
            score += LEVEL_POINTS;
        }
    }

    MatchResult {
        target: course.clone(),
        score,
        matched_skills: matched.into_iter().collect(),
        missing_skills: Vec::new(),
        rationale: "Aligns with your major requirements and career interests.".to_string(),
    }
}
