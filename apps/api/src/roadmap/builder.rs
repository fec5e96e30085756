//! Roadmap builder — turns recommendations into a semester-by-semester plan
//! covering the student's remaining time to graduation.

use std::collections::BTreeSet;

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::matching::MatchResult;
use crate::models::catalog::{Course, PortfolioItem, Season};
use crate::models::profile::StudentProfile;
use crate::recommender::engine::RecommendationEngine;
use crate::roadmap::milestones::milestones_for;

/// Typical full-time credit load per semester.
const TARGET_CREDITS: f64 = 15.0;
/// Packing stops early once the load reaches target minus this headroom,
/// even if more courses would still fit. Deliberate policy, keep exact.
const CREDIT_HEADROOM: f64 = 2.0;
/// Four years, two semesters each. Hard ceiling regardless of start index.
const MAX_SEMESTERS: usize = 8;

const COURSE_FETCH_LIMIT: usize = 5;
const CLUB_FETCH_LIMIT: usize = 3;
const CLUBS_PER_SEMESTER: usize = 2;
const PORTFOLIO_FETCH_LIMIT: usize = 8;

/// A course slotted into a semester, with its packing credits and the
/// recommendation rationale it arrived with.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedCourse {
    pub course: Course,
    pub credits: f64,
    pub reasoning: String,
}

/// A portfolio item assigned to a semester.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedPortfolioItem {
    pub item: PortfolioItem,
    pub reasoning: String,
    pub estimated_hours: u32,
}

/// One academic term's package of courses, clubs, portfolio items, and
/// milestones.
#[derive(Debug, Clone, Serialize)]
pub struct SemesterPlan {
    pub semester_number: usize,
    pub season: Season,
    pub year: i32,
    pub courses: Vec<PlannedCourse>,
    pub clubs: Vec<String>,
    pub portfolio_items: Vec<PlannedPortfolioItem>,
    pub total_credits: f64,
    pub milestones: Vec<String>,
}

/// High-level aggregate over a roadmap, for dashboard display. Graduation
/// fields are absent when the roadmap is empty (student already past
/// semester 8).
#[derive(Debug, Serialize)]
pub struct RoadmapSummary {
    pub total_semesters: usize,
    pub total_courses: usize,
    pub total_credits: f64,
    pub total_portfolio_items: usize,
    pub recommended_clubs: Vec<String>,
    pub graduation_year: Option<i32>,
    pub graduation_season: Option<Season>,
}

pub struct RoadmapGenerator<'a> {
    profile: &'a StudentProfile,
    engine: RecommendationEngine<'a>,
}

impl<'a> RoadmapGenerator<'a> {
    pub fn new(profile: &'a StudentProfile, catalog: &'a dyn CatalogStore) -> Self {
        Self {
            profile,
            engine: RecommendationEngine::new(profile, catalog),
        }
    }

    /// Generates one plan per remaining semester, from the student's current
    /// standing through semester 8. A Graduate profile (index 8) yields an
    /// empty roadmap: already graduated, not an error.
    pub fn generate_roadmap(&self, start_year: Option<i32>) -> Vec<SemesterPlan> {
        let start_year = start_year.unwrap_or_else(|| Utc::now().year());
        let start = self.profile.academic_year.semester_index();

        // Fetched once per roadmap; distributed across semesters by slicing.
        let portfolio_recs = self.engine.portfolio_recommendations(PORTFOLIO_FETCH_LIMIT);

        (start..MAX_SEMESTERS)
            .map(|i| {
                let season = if i % 2 == 0 { Season::Fall } else { Season::Spring };
                let year = start_year + (i / 2) as i32;
                self.build_semester(i + 1, season, year, &portfolio_recs)
            })
            .collect()
    }

    fn build_semester(
        &self,
        semester_number: usize,
        season: Season,
        year: i32,
        portfolio_recs: &[MatchResult<PortfolioItem>],
    ) -> SemesterPlan {
        let course_recs = self.engine.course_recommendations(season, COURSE_FETCH_LIMIT);

        // Greedy credit packing in recommendation order: take a course while
        // it fits under the target, and stop outright once the load reaches
        // target minus headroom.
        let mut courses = Vec::new();
        let mut total_credits = 0.0;
        for rec in course_recs {
            if total_credits + rec.target.credits <= TARGET_CREDITS {
                total_credits += rec.target.credits;
                courses.push(PlannedCourse {
                    credits: rec.target.credits,
                    reasoning: rec.rationale,
                    course: rec.target,
                });
            }
            if total_credits >= TARGET_CREDITS - CREDIT_HEADROOM {
                break;
            }
        }

        let clubs: Vec<String> = self
            .engine
            .club_recommendations(CLUB_FETCH_LIMIT)
            .into_iter()
            .take(CLUBS_PER_SEMESTER)
            .map(|r| r.target.name)
            .collect();

        SemesterPlan {
            semester_number,
            season,
            year,
            courses,
            clubs,
            portfolio_items: assign_portfolio_items(semester_number, portfolio_recs),
            total_credits,
            milestones: milestones_for(semester_number),
        }
    }

    /// Aggregates the roadmap into dashboard totals.
    pub fn generate_summary(&self, start_year: Option<i32>) -> RoadmapSummary {
        let roadmap = self.generate_roadmap(start_year);

        let total_courses = roadmap.iter().map(|s| s.courses.len()).sum();
        let total_credits = roadmap.iter().map(|s| s.total_credits).sum();
        let total_portfolio_items = roadmap.iter().map(|s| s.portfolio_items.len()).sum();
        let recommended_clubs: BTreeSet<String> = roadmap
            .iter()
            .flat_map(|s| s.clubs.iter().cloned())
            .collect();

        RoadmapSummary {
            total_semesters: roadmap.len(),
            total_courses,
            total_credits,
            total_portfolio_items,
            recommended_clubs: recommended_clubs.into_iter().collect(),
            graduation_year: roadmap.last().map(|s| s.year),
            graduation_season: roadmap.last().map(|s| s.season),
        }
    }
}

/// Distributes the roadmap-wide portfolio recommendations across the 8
/// semester slots: `total / 8` items each (at least 1), assigned by slicing.
/// Semesters past the end of the list get an empty slice.
fn assign_portfolio_items(
    semester_number: usize,
    recs: &[MatchResult<PortfolioItem>],
) -> Vec<PlannedPortfolioItem> {
    let items_per_semester = (recs.len() / MAX_SEMESTERS).max(1);
    let start = semester_number.saturating_sub(1) * items_per_semester;
    if start >= recs.len() {
        return Vec::new();
    }
    let end = (start + items_per_semester).min(recs.len());

    recs[start..end]
        .iter()
        .map(|rec| PlannedPortfolioItem {
            item: rec.target.clone(),
            reasoning: rec.rationale.clone(),
            estimated_hours: rec.target.estimated_hours.unwrap_or(0),
        })
        .collect()
}
