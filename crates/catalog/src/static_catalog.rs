//! Course analytics backed by a fixed list of titles.

use async_trait::async_trait;
use courserag_core::analytics::{CourseAnalytics, CourseStats};
use courserag_core::error::AnalyticsError;

/// A catalog whose titles are known up front (typically from config).
///
/// Titles are reported in the order given, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    titles: Vec<String>,
}

impl StaticCatalog {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }
}

#[async_trait]
impl CourseAnalytics for StaticCatalog {
    async fn get_course_analytics(&self) -> Result<CourseStats, AnalyticsError> {
        Ok(CourseStats::new(self.titles.len() as u64, self.titles.clone()))
    }
}
