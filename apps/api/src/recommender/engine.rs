//! Recommendation engine — orchestrates the per-target matchers over the
//! catalog, then sorts, filters, and truncates.
//!
//! Pure read/compute: no state survives a call, so concurrent requests for
//! different profiles need no coordination.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::matching::{career, club, course, portfolio, MatchResult};
use crate::models::catalog::{Career, Club, Course, PortfolioItem, Season};
use crate::models::profile::StudentProfile;

/// Default list sizes for the combined dashboard payload.
pub const DEFAULT_CAREER_LIMIT: usize = 5;
pub const DEFAULT_PORTFOLIO_LIMIT: usize = 8;
pub const DEFAULT_COURSE_LIMIT: usize = 6;
pub const DEFAULT_CLUB_LIMIT: usize = 5;

/// Portfolio and course recommendations are gap-driven from this many top
/// career matches.
const GAP_CAREER_COUNT: usize = 3;

/// All four recommendation categories in one payload.
#[derive(Debug, Serialize)]
pub struct AllRecommendations {
    pub careers: Vec<MatchResult<Career>>,
    pub portfolio_items: Vec<MatchResult<PortfolioItem>>,
    pub courses: Vec<MatchResult<Course>>,
    pub clubs: Vec<MatchResult<Club>>,
}

pub struct RecommendationEngine<'a> {
    profile: &'a StudentProfile,
    catalog: &'a dyn CatalogStore,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(profile: &'a StudentProfile, catalog: &'a dyn CatalogStore) -> Self {
        Self { profile, catalog }
    }

    /// Top career matches, descending by score, zero scores excluded.
    /// Equal scores keep catalog order (the sort is stable).
    pub fn career_recommendations(&self, limit: usize) -> Vec<MatchResult<Career>> {
        let mut results: Vec<MatchResult<Career>> = self
            .catalog
            .careers()
            .iter()
            .map(|c| career::match_career(self.profile, c))
            .filter(|r| r.score > 0)
            .collect();
        sort_and_truncate(&mut results, limit);
        results
    }

    /// Union of missing skills across the student's top career matches.
    /// This is the target set for gap-driven (portfolio, course) scoring.
    fn gap_skills(&self) -> BTreeSet<String> {
        self.career_recommendations(GAP_CAREER_COUNT)
            .into_iter()
            .flat_map(|r| r.missing_skills)
            .collect()
    }

    /// Portfolio items scored against the gap-skill set.
    pub fn portfolio_recommendations(&self, limit: usize) -> Vec<MatchResult<PortfolioItem>> {
        let gaps = self.gap_skills();
        let mut results: Vec<MatchResult<PortfolioItem>> = self
            .catalog
            .portfolio_items()
            .iter()
            .map(|item| portfolio::match_portfolio_item(self.profile, item, &gaps))
            .filter(|r| r.score > 0)
            .collect();
        sort_and_truncate(&mut results, limit);
        results
    }

    /// Courses for the student's major scored against the gap-skill set.
    /// Returns an empty list when the profile declares no major. The term is
    /// accepted for interface parity with callers planning a specific
    /// semester; course rows are not term-scoped.
    pub fn course_recommendations(
        &self,
        _semester: Season,
        limit: usize,
    ) -> Vec<MatchResult<Course>> {
        let Some(major_id) = self.profile.major_id else {
            return Vec::new();
        };
        let gaps = self.gap_skills();
        let mut results: Vec<MatchResult<Course>> = self
            .catalog
            .courses_for_major(major_id)
            .iter()
            .map(|c| course::match_course(self.profile, c, &gaps))
            .filter(|r| r.score > 0)
            .collect();
        sort_and_truncate(&mut results, limit);
        results
    }

    /// Clubs at the student's college scored against interests and skills.
    /// Returns an empty list when the profile declares no college.
    pub fn club_recommendations(&self, limit: usize) -> Vec<MatchResult<Club>> {
        let Some(college_id) = self.profile.college_id else {
            return Vec::new();
        };
        let mut results: Vec<MatchResult<Club>> = self
            .catalog
            .clubs_for_college(college_id)
            .iter()
            .map(|c| club::match_club(self.profile, c))
            .filter(|r| r.score > 0)
            .collect();
        sort_and_truncate(&mut results, limit);
        results
    }

    /// One-call dashboard payload with the default limit per category.
    pub fn all_recommendations(&self) -> AllRecommendations {
        AllRecommendations {
            careers: self.career_recommendations(DEFAULT_CAREER_LIMIT),
            portfolio_items: self.portfolio_recommendations(DEFAULT_PORTFOLIO_LIMIT),
            courses: self.course_recommendations(Season::Fall, DEFAULT_COURSE_LIMIT),
            clubs: self.club_recommendations(DEFAULT_CLUB_LIMIT),
        }
    }
}

/// Stable descending sort by score, then truncate. Stability preserves
/// catalog iteration order for ties.
fn sort_and_truncate<T>(results: &mut Vec<MatchResult<T>>, limit: usize) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
}
