use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::roadmap::builder::{RoadmapGenerator, RoadmapSummary, SemesterPlan};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub profile: StudentProfile,
    /// Calendar year of the roadmap's first Fall semester.
    /// Defaults to the current year.
    #[serde(default)]
    pub start_year: Option<i32>,
}

/// POST /api/v1/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<Vec<SemesterPlan>>, AppError> {
    let generator = RoadmapGenerator::new(&req.profile, state.catalog.as_ref());
    Ok(Json(generator.generate_roadmap(req.start_year)))
}

/// POST /api/v1/roadmap/summary
pub async fn handle_roadmap_summary(
    State(state): State<AppState>,
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<RoadmapSummary>, AppError> {
    let generator = RoadmapGenerator::new(&req.profile, state.catalog.as_ref());
    Ok(Json(generator.generate_summary(req.start_year)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_roadmap_request_start_year_optional() {
        let json = format!(r#"{{"profile": {{"id": "{}"}}}}"#, Uuid::new_v4());
        let req: RoadmapRequest = serde_json::from_str(&json).unwrap();
        assert!(req.start_year.is_none());
    }

    #[test]
    fn test_roadmap_request_with_start_year() {
        let json = format!(
            r#"{{"profile": {{"id": "{}", "academic_year": "SR"}}, "start_year": 2026}}"#,
            Uuid::new_v4()
        );
        let req: RoadmapRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.start_year, Some(2026));
    }
}
