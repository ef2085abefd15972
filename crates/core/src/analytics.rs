//! Course analytics boundary — aggregate statistics for the course catalog.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Catalog statistics as reported by the analytics source.
///
/// `course_titles.len()` is not required to match `total_courses`; both are
/// relayed exactly as the source reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStats {
    pub total_courses: u64,
    pub course_titles: Vec<String>,
}

impl CourseStats {
    pub fn new(total_courses: u64, course_titles: Vec<String>) -> Self {
        Self {
            total_courses,
            course_titles,
        }
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }
}

/// The Course Analytics boundary.
#[async_trait]
pub trait CourseAnalytics: Send + Sync {
    async fn get_course_analytics(&self) -> Result<CourseStats, AnalyticsError>;
}
