//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use anvaya_core::{Activity, ActivityStatistics, HealthStatus, Wing, WingStatistic};
    use chrono::NaiveDate;

    fn activity(id: i64, title: &str) -> Activity {
        Activity {
            id,
            wing_id: 1,
            title: title.to_string(),
            description: "An evening of competitive programming".to_string(),
            activity_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            faculty_coordinator: Some("Dr. Rao".to_string()),
            report_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn row(id: i64, name: &str, count: u64) -> WingStatistic {
        WingStatistic {
            wing_id: id,
            wing_name: name.to_string(),
            wing_slug: name.to_lowercase(),
            activity_count: count,
        }
    }

    #[test]
    fn test_bar_boundaries() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.bar(0, 10), "░".repeat(20));
        assert_eq!(formatter.bar(10, 10), "█".repeat(20));
        assert_eq!(formatter.bar(5, 10), format!("{}{}", "█".repeat(10), "░".repeat(10)));
        assert_eq!(formatter.bar(3, 0), "░".repeat(20));
    }

    #[test]
    fn test_bar_with_colors() {
        let formatter = TextFormatter::new(true);
        let bar = formatter.bar(1, 2);
        assert!(bar.starts_with("\x1b[32m"));
        assert!(bar.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_no_colors_means_no_escapes() {
        let formatter = TextFormatter::new(false);
        let wings = vec![Wing {
            id: 1,
            name: "CodeZero".to_string(),
            slug: "codezero".to_string(),
            description: Some("Programming wing".to_string()),
        }];
        let out = formatter.format_wings(&wings);
        assert!(!out.contains('\x1b'));
        assert!(out.contains("codezero"));
        assert!(out.contains("Programming wing"));
    }

    #[test]
    fn test_empty_lists() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_wings(&[]), "No wings found");
        assert_eq!(formatter.format_activities(&[]), "No activities found");
        assert_eq!(formatter.format_photos(&[]), "No photos found");
    }

    #[test]
    fn test_activity_line() {
        let formatter = TextFormatter::new(false);
        let line = formatter.format_activity_line(&activity(7, "Hack Night"));
        assert_eq!(line, "2024-03-15  #7     Hack Night  Dr. Rao");
    }

    #[test]
    fn test_activity_detail_shows_report() {
        let formatter = TextFormatter::new(false);
        let mut a = activity(7, "Hack Night");
        a.report_url = Some("/uploads/reports/7.pdf".to_string());
        let out = formatter.format_activity(&a);
        assert!(out.contains("Report:      /uploads/reports/7.pdf"));
        assert!(out.ends_with("An evening of competitive programming"));
    }

    #[test]
    fn test_statistics_all_time() {
        let formatter = TextFormatter::new(false);
        let stats = ActivityStatistics {
            statistics: vec![row(1, "CodeZero", 4), row(2, "Robotics", 2)],
            available_years: vec![2024, 2023],
            filtered_year: None,
        };
        let out = formatter.format_statistics(&stats);
        assert!(out.starts_with("Activity statistics (all time)"));
        assert!(out.contains("Total: 6"));
        assert!(out.contains("Years: 2024, 2023"));
    }

    #[test]
    fn test_statistics_for_year() {
        let formatter = TextFormatter::new(false);
        let stats = ActivityStatistics {
            statistics: Vec::new(),
            available_years: vec![2024],
            filtered_year: Some(2024),
        };
        let out = formatter.format_statistics(&stats);
        assert!(out.starts_with("Activity statistics (2024)"));
        assert!(out.contains("No activities recorded"));
    }

    #[test]
    fn test_health() {
        let formatter = TextFormatter::new(false);
        let healthy = HealthStatus {
            status: "healthy".to_string(),
        };
        let out = formatter.format_health("http://localhost:8000", &healthy, None);
        assert!(out.contains("✓ healthy"));
    }

    #[test]
    fn test_error() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_error("Wing not found"), "Error: Wing not found");
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::{ErrorOutput, JsonFormatter};
    use anvaya_core::Photo;

    #[test]
    fn test_compact_vs_pretty() {
        let photo = Photo {
            id: 1,
            wing_id: 2,
            url: "/uploads/1.jpg".to_string(),
            created_at: None,
        };
        let compact = JsonFormatter::new(false).format(&photo).unwrap();
        assert_eq!(compact, r#"{"id":1,"wing_id":2,"url":"/uploads/1.jpg"}"#);

        let pretty = JsonFormatter::new(true).format(&photo).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_error_output_shape() {
        let output = ErrorOutput {
            error: "Request timed out".to_string(),
            status: None,
            network_error: true,
            error_code: None,
        };
        let json = JsonFormatter::new(false).format_error(&output);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "Request timed out");
        assert_eq!(value["networkError"], true);
        assert!(value.get("status").is_none());
    }
}
