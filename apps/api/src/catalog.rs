//! Catalog store — the synchronous read-only query layer the core consumes.
//!
//! Careers and portfolio items are unscoped; courses are scoped to the
//! student's major, clubs to the student's college. `AppState` holds an
//! `Arc<dyn CatalogStore>`, so a different backing store can be swapped in
//! without touching the engine.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::catalog::{Career, Club, Course, PortfolioItem};

/// Read-only catalog queries. Implementations must be cheap to call
/// repeatedly: the engine re-reads on every request and caches nothing.
pub trait CatalogStore: Send + Sync {
    fn careers(&self) -> Vec<Career>;
    fn portfolio_items(&self) -> Vec<PortfolioItem>;
    fn courses_for_major(&self, major_id: Uuid) -> Vec<Course>;
    fn clubs_for_college(&self, college_id: Uuid) -> Vec<Club>;
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    careers: Vec<Career>,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    clubs: Vec<Club>,
    #[serde(default)]
    portfolio_items: Vec<PortfolioItem>,
}

/// Catalog materialized in memory from a JSON seed file at startup.
/// Iteration order is file order, which is the tie-break order for
/// equal-score recommendations.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    careers: Vec<Career>,
    courses: Vec<Course>,
    clubs: Vec<Club>,
    portfolio_items: Vec<PortfolioItem>,
}

impl InMemoryCatalog {
    pub fn new(
        careers: Vec<Career>,
        courses: Vec<Course>,
        clubs: Vec<Club>,
        portfolio_items: Vec<PortfolioItem>,
    ) -> Self {
        Self {
            careers,
            courses,
            clubs,
            portfolio_items,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        Ok(Self::new(
            file.careers,
            file.courses,
            file.clubs,
            file.portfolio_items,
        ))
    }

    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.careers.len(),
            self.courses.len(),
            self.clubs.len(),
            self.portfolio_items.len(),
        )
    }
}

impl CatalogStore for InMemoryCatalog {
    fn careers(&self) -> Vec<Career> {
        self.careers.clone()
    }

    fn portfolio_items(&self) -> Vec<PortfolioItem> {
        self.portfolio_items.clone()
    }

    fn courses_for_major(&self, major_id: Uuid) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.major_id == major_id)
            .cloned()
            .collect()
    }

    fn clubs_for_college(&self, college_id: Uuid) -> Vec<Club> {
        self.clubs
            .iter()
            .filter(|c| c.college_id == college_id)
            .cloned()
            .collect()
    }
}
