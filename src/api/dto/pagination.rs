//! Listing query parameters and pagination metadata.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::application::services::PageInfo;
use crate::domain::entities::CourseStatus;
use crate::domain::repositories::CourseFilter;
use crate::error::AppError;

/// Query parameters for the listing endpoint.
///
/// Uses `serde_with` to parse numeric parameters from query strings.
/// Unparseable `page`/`limit` values are treated like absent ones instead
/// of rejecting the request, so `?page=abc` still serves the first page.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCoursesParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub upcoming_course: Option<String>,

    #[serde(default)]
    pub course_type: Option<String>,

    #[serde(default)]
    pub search: Option<String>,
}

impl ListCoursesParams {
    /// Resolves page and limit, falling back to the defaults (1 and 10) for
    /// absent or non-positive values.
    pub fn page_and_limit(&self) -> (u32, u32) {
        (
            self.page.filter(|page| *page > 0).unwrap_or(1),
            self.limit.filter(|limit| *limit > 0).unwrap_or(10),
        )
    }

    /// Builds the store filter from the parameters actually supplied.
    /// Blank strings impose no constraint, same as absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `upcomingCourse` is not 0 or 1.
    pub fn filter(&self) -> Result<CourseFilter, AppError> {
        let upcoming = match self.upcoming_course.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i16>()
                    .ok()
                    .and_then(|value| CourseStatus::try_from(value).ok())
                    .ok_or_else(|| {
                        AppError::bad_request("Upcoming course must be either 0 or 1")
                    })?,
            ),
        };

        Ok(CourseFilter {
            upcoming,
            course_type: self
                .course_type
                .clone()
                .filter(|value| !value.trim().is_empty()),
            search: self.search.clone().filter(|value| !value.trim().is_empty()),
        })
    }
}

/// Pagination block of the listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl From<PageInfo> for PaginationMeta {
    fn from(info: PageInfo) -> Self {
        Self {
            current_page: info.current_page,
            total_pages: info.total_pages,
            total_items: info.total_items,
            items_per_page: info.items_per_page,
            has_next_page: info.has_next_page,
            has_prev_page: info.has_prev_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_and_limit_defaults() {
        let params = ListCoursesParams::default();
        assert_eq!(params.page_and_limit(), (1, 10));
    }

    #[test]
    fn test_page_and_limit_zero_falls_back() {
        let params = ListCoursesParams {
            page: Some(0),
            limit: Some(0),
            ..ListCoursesParams::default()
        };
        assert_eq!(params.page_and_limit(), (1, 10));
    }

    #[test]
    fn test_query_string_parsing() {
        // Query-string values arrive as strings; DisplayFromStr parses them.
        let params: ListCoursesParams = serde_json::from_value(serde_json::json!({
            "page": "2",
            "limit": "5",
            "upcomingCourse": "1",
            "search": "systems"
        }))
        .unwrap();
        assert_eq!(params.page_and_limit(), (2, 5));

        let filter = params.filter().unwrap();
        assert_eq!(filter.upcoming, Some(CourseStatus::Upcoming));
        assert_eq!(filter.search.as_deref(), Some("systems"));
        assert!(filter.course_type.is_none());
    }

    #[test]
    fn test_filter_skips_absent_parameters() {
        let filter = ListCoursesParams::default().filter().unwrap();
        assert_eq!(filter, CourseFilter::default());
    }

    #[test]
    fn test_filter_drops_blank_strings() {
        let params = ListCoursesParams {
            course_type: Some("   ".to_string()),
            search: Some(String::new()),
            ..ListCoursesParams::default()
        };

        let filter = params.filter().unwrap();
        assert!(filter.course_type.is_none());
        assert!(filter.search.is_none());
    }

    #[test]
    fn test_filter_rejects_invalid_upcoming() {
        for raw in ["2", "-1", "abc"] {
            let params = ListCoursesParams {
                upcoming_course: Some(raw.to_string()),
                ..ListCoursesParams::default()
            };
            assert!(params.filter().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_non_numeric_paging_falls_back_to_defaults() {
        let params: ListCoursesParams = serde_json::from_value(serde_json::json!({
            "page": "abc",
            "limit": "ten"
        }))
        .unwrap();

        assert_eq!(params.page_and_limit(), (1, 10));
    }
}
