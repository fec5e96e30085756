//! Career matching — the richest scorer: skill overlap, interest and industry
//! alignment, goals and experience bonuses, plus tiered rationale prose.

use std::collections::BTreeSet;

use crate::matching::{name_some, normalize, MatchResult};
use crate::models::catalog::Career;
use crate::models::profile::StudentProfile;

// Score composition weights. The terms are additive and can double-count a
// skill (overlap ratio plus goals-text bonus); the final clamp to 100 is the
// only normalization.
const SKILL_WEIGHT: f64 = 50.0;
const INTEREST_POINTS: f64 = 10.0;
const INTEREST_CAP: f64 = 30.0;
const INDUSTRY_WEIGHT: f64 = 20.0;
const GOALS_TITLE_BONUS: f64 = 15.0;
const GOALS_SKILL_BONUS: f64 = 8.0;
const GOALS_INDUSTRY_BONUS: f64 = 5.0;
const EXPERIENCE_BONUS: f64 = 10.0;

// Rationale naming limits. These counts are contract, not style.
const MATCHED_NAMED: usize = 3;
const MISSING_NAMED: usize = 3;
const INTERESTS_NAMED: usize = 2;

/// Scores one career against a profile. Returns a 0-100 match with the
/// matched/missing skill sets and a human-readable rationale.
pub fn match_career(profile: &StudentProfile, career: &Career) -> MatchResult<Career> {
    let career_skills = crate::matching::normalize_set(&career.skills);
    let user_skills = profile.normalized_skills();

    let matched: BTreeSet<String> = career_skills.intersection(&user_skills).cloned().collect();
    let missing: BTreeSet<String> = career_skills.difference(&user_skills).cloned().collect();

    // Skill overlap, weight 50. A career with no declared skills scores 0
    // here rather than dividing by zero.
    let skill_score = if career_skills.is_empty() {
        0.0
    } else {
        (matched.len() as f64 / career_skills.len() as f64) * SKILL_WEIGHT
    };

    // Interest alignment: +10 per distinct interest found in the career's
    // title/description text or verbatim among its skill tags, capped at 30.
    let haystack = normalize(&format!("{} {}", career.title, career.description));
    let matched_interests: BTreeSet<String> = profile
        .normalized_interests()
        .into_iter()
        .filter(|interest| haystack.contains(interest.as_str()) || career_skills.contains(interest))
        .collect();
    let interest_score = (matched_interests.len() as f64 * INTEREST_POINTS).min(INTEREST_CAP);

    // Industry alignment, weight 20, only when both sides declare industries.
    let career_industries = crate::matching::normalize_set(&career.industries);
    let user_industries = profile.normalized_industries();
    let industry_score = if career_industries.is_empty() || user_industries.is_empty() {
        0.0
    } else {
        let overlap = career_industries.intersection(&user_industries).count();
        (overlap as f64 / career_industries.len() as f64) * INDUSTRY_WEIGHT
    };

    let title = normalize(&career.title);
    let goals_score = goals_bonus(profile, &title, &matched, &career_industries);

    // Experience boost: the career title appearing in the student's
    // free-text work history.
    let experience = normalize(&profile.work_experience);
    let experience_score = if !experience.is_empty() && !title.is_empty() && experience.contains(&title)
    {
        EXPERIENCE_BONUS
    } else {
        0.0
    };

    let total = skill_score + interest_score + industry_score + goals_score + experience_score;
    let score = total.min(100.0).floor() as u32;

    let rationale = career_rationale(career, &matched, &missing, &matched_interests, score);

    MatchResult {
        target: career.clone(),
        score,
        matched_skills: matched.into_iter().collect(),
        missing_skills: missing.into_iter().collect(),
        rationale,
    }
}

/// Free-text goals bonus: +15 for the career title verbatim, else +8 for any
/// matched skill, else +5 for any career industry. First hit wins.
fn goals_bonus(
    profile: &StudentProfile,
    title: &str,
    matched: &BTreeSet<String>,
    career_industries: &BTreeSet<String>,
) -> f64 {
    let goals = normalize(&profile.career_goals);
    if goals.is_empty() {
        return 0.0;
    }
    if !title.is_empty() && goals.contains(title) {
        GOALS_TITLE_BONUS
    } else if matched.iter().any(|skill| goals.contains(skill.as_str())) {
        GOALS_SKILL_BONUS
    } else if career_industries.iter().any(|ind| goals.contains(ind.as_str())) {
        GOALS_INDUSTRY_BONUS
    } else {
        0.0
    }
}

/// Tiered rationale prose. Tier boundaries (80/60/40/20) and naming limits
/// (3 matched, 3 missing, 2 interests) are contract.
fn career_rationale(
    career: &Career,
    matched: &BTreeSet<String>,
    missing: &BTreeSet<String>,
    interests: &BTreeSet<String>,
    score: u32,
) -> String {
    let total_skills = matched.len() + missing.len();

    if score >= 80 {
        let mut reason = format!(
            "Excellent Match ({score}%): you already hold {} of the {} key skills for {}.",
            matched.len(),
            total_skills,
            career.title
        );
        if !matched.is_empty() {
            reason += &format!(
                " Your strengths in {} map directly onto this role.",
                name_some(matched, MATCHED_NAMED)
            );
        }
        if !interests.is_empty() {
            reason += &format!(
                " Your interest in {} reinforces the fit.",
                name_some(interests, INTERESTS_NAMED)
            );
        }
        if !missing.is_empty() {
            reason += &format!(" To stand out, add {}.", name_some(missing, MISSING_NAMED));
        }
        reason
    } else if score >= 60 {
        let mut reason = format!(
            "Strong Match ({score}%): you have {} of the {} key skills for {}.",
            matched.len(),
            total_skills,
            career.title
        );
        if !matched.is_empty() {
            reason += &format!(
                " Your experience with {} is directly relevant.",
                name_some(matched, MATCHED_NAMED)
            );
        }
        if !interests.is_empty() {
            reason += &format!(
                " Your interest in {} lines up with this path.",
                name_some(interests, INTERESTS_NAMED)
            );
        }
        if !missing.is_empty() {
            reason += &format!(
                " Strengthen your fit by developing {}.",
                name_some(missing, MISSING_NAMED)
            );
        }
        reason
    } else if score >= 40 {
        let mut reason = format!(
            "Good Match ({score}%): you bring {} relevant skills to {}.",
            matched.len(),
            career.title
        );
        if !matched.is_empty() {
            reason += &format!(
                " Your background in {} is valuable here.",
                name_some(matched, MATCHED_NAMED)
            );
        }
        if !missing.is_empty() {
            reason += &format!(" Focus next on {}.", name_some(missing, MISSING_NAMED));
        }
        reason
    } else if score >= 20 {
        let mut reason = format!(
            "Growing Opportunity ({score}%): {} could become a path with preparation.",
            career.title
        );
        if !matched.is_empty() {
            reason += &format!(
                " You have a foundation in {}.",
                name_some(matched, MATCHED_NAMED)
            );
        }
        if !missing.is_empty() {
            reason += &format!(
                " Key areas to develop: {}.",
                name_some(missing, MISSING_NAMED)
            );
        }
        reason
    } else {
        format!(
            "Exploratory Path: {} calls for a different skill set today. \
             Keep it in view if it matches your long-term interests.",
            career.title
        )
    }
}
