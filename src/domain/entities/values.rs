//! Owned value types embedded in a course.
//!
//! None of these carry their own identity. They live and die with the course
//! that owns them and are persisted as sub-documents on the course row, never
//! as separate collections.

use serde::{Deserialize, Serialize};

/// An instructor teaching a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

/// Course statistics.
///
/// `module_count`, `assignment_count` and `project_count` are derived from
/// the owning course's arrays immediately before every persistence write and
/// are never trusted from caller input. The remaining fields are supplied by
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub enrolled_students: i64,
    #[serde(default)]
    pub module_count: i64,
    #[serde(default)]
    pub project_count: i64,
    #[serde(default)]
    pub assignment_count: i64,
    pub price: f64,
    pub original_price: f64,
}

impl Statistics {
    /// Recomputes the derived counters from the owning course's array lengths.
    pub fn derive_counts(&mut self, modules: usize, assignments: usize, projects: usize) {
        self.module_count = modules as i64;
        self.assignment_count = assignments as i64;
        self.project_count = projects as i64;
    }
}

/// A titled module containing an ordered list of lessons.
///
/// Display order is insertion order; every module has at least one lesson
/// once it passes validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub title: String,
    pub lessons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_counts_overrides_previous_values() {
        let mut stats = Statistics {
            enrolled_students: 12,
            module_count: 99,
            project_count: 99,
            assignment_count: 99,
            price: 100.0,
            original_price: 150.0,
        };

        stats.derive_counts(3, 2, 1);

        assert_eq!(stats.module_count, 3);
        assert_eq!(stats.assignment_count, 2);
        assert_eq!(stats.project_count, 1);
        // Supplied fields are left alone.
        assert_eq!(stats.enrolled_students, 12);
        assert_eq!(stats.price, 100.0);
    }

    #[test]
    fn test_statistics_json_field_names() {
        let stats = Statistics {
            enrolled_students: 0,
            module_count: 1,
            project_count: 0,
            assignment_count: 0,
            price: 49.5,
            original_price: 99.0,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["enrolledStudents"], 0);
        assert_eq!(json["moduleCount"], 1);
        assert_eq!(json["originalPrice"], 99.0);
    }

    #[test]
    fn test_statistics_counters_default_when_absent() {
        let stats: Statistics =
            serde_json::from_str(r#"{"price": 10.0, "originalPrice": 20.0}"#).unwrap();
        assert_eq!(stats.module_count, 0);
        assert_eq!(stats.enrolled_students, 0);
    }
}
