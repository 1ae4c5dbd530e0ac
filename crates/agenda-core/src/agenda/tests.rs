//! Tests for the agenda facade.

use jiff::civil::date;
use jiff::tz::TimeZone;
use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::error::AgendaError;
use crate::models::{ExportFormat, PlanStatus};
use crate::params::{Download, ExportPlan, ImportPlan, ListPlans, PlanId, SetStatus};

/// Helper function to create a test agenda backed by a database file
async fn create_test_agenda() -> (TempDir, Agenda) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agenda = AgendaBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create agenda");
    (temp_dir, agenda)
}

fn import(request: &str) -> ImportPlan {
    ImportPlan {
        user_request: request.to_string(),
        event_type: Some("workshop".to_string()),
        content: Some(json!({
            "title": "Rust Workshop",
            "cards": [{"title": "Book room", "tasks": [{"task": "Call venue"}]}],
            "timeline": [{"phase": "Prep", "tasks": ["Slides"]}]
        })),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_export_dir_defaults_next_to_database() {
    let (temp_dir, agenda) = create_test_agenda().await;
    assert_eq!(agenda.export_dir(), temp_dir.path().join("exports"));
}

#[tokio::test]
async fn test_import_assigns_id_and_status() {
    let (_temp_dir, agenda) = create_test_agenda().await;

    let first = agenda.import_plan(&import("  Teach Rust  ")).await.unwrap();
    let second = agenda.import_plan(&import("Teach Rust again")).await.unwrap();

    assert_ne!(first.plan_id, second.plan_id);
    assert_eq!(first.status, PlanStatus::Generated);
    assert_eq!(first.user_request, "Teach Rust");
    assert_eq!(first.event_type, "workshop");

    let fetched = agenda
        .get_plan(&PlanId {
            plan_id: first.plan_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(fetched, Some(first));
}

#[tokio::test]
async fn test_import_rejects_blank_request() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let err = agenda.import_plan(&import("   ")).await.unwrap_err();
    assert!(matches!(err, AgendaError::InvalidInput { ref field, .. } if field == "user_request"));
}

#[tokio::test]
async fn test_import_defaults_event_type() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let plan = agenda
        .import_plan(&ImportPlan {
            user_request: "Something".to_string(),
            event_type: Some("  ".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(plan.event_type, "general");
}

#[tokio::test]
async fn test_list_plans_summary() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    agenda.import_plan(&import("One")).await.unwrap();
    agenda
        .import_plan(&ImportPlan {
            user_request: "Two".to_string(),
            event_type: Some("gala".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let all = agenda.list_plans_summary(&ListPlans::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let workshops = agenda
        .list_plans_summary(&ListPlans {
            event_type: Some("Workshop".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(workshops.len(), 1);
    assert_eq!(workshops[0].title, "Rust Workshop");
    assert_eq!(workshops[0].card_count, 1);
    assert_eq!(workshops[0].phase_count, 1);
}

#[tokio::test]
async fn test_set_status() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let plan = agenda.import_plan(&import("Status")).await.unwrap();

    let updated = agenda
        .set_status(&SetStatus {
            plan_id: plan.plan_id.clone(),
            status: "Exported".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.status, PlanStatus::Exported);
    assert!(updated.updated_at >= plan.updated_at);

    let missing = agenda
        .set_status(&SetStatus {
            plan_id: "nope".to_string(),
            status: "exported".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(missing, AgendaError::PlanNotFound { .. }));

    let blank = agenda
        .set_status(&SetStatus {
            plan_id: plan.plan_id,
            status: " ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(blank, AgendaError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_export_errors() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let plan = agenda.import_plan(&import("Errors")).await.unwrap();

    let missing = agenda
        .export_plan(&ExportPlan {
            plan_id: "missing".to_string(),
            format: "pdf".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(missing, AgendaError::PlanNotFound { ref id } if id == "missing"));

    let csv = agenda
        .export_plan(&ExportPlan {
            plan_id: plan.plan_id,
            format: "csv".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(csv, AgendaError::UnsupportedFormat { .. }));

    // Format is validated before the lookup
    let both = agenda
        .export_plan(&ExportPlan {
            plan_id: "missing".to_string(),
            format: "csv".to_string(),
        })
        .await
        .unwrap_err();
    assert!(both.is_bad_request());
}

#[tokio::test]
async fn test_export_and_download_both_formats() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let plan = agenda.import_plan(&import("Formats")).await.unwrap();

    for (format, prefix, magic) in [
        ("Excel", "event_plan_", &b"PK"[..]),
        ("PDF", "action_plan_", &b"%PDF"[..]),
    ] {
        let file = agenda
            .export_plan(&ExportPlan {
                plan_id: plan.plan_id.clone(),
                format: format.to_string(),
            })
            .await
            .unwrap();
        assert!(file.file_name.starts_with(prefix));
        assert!(file.path.starts_with(agenda.export_dir()));

        let bytes = agenda
            .download(&Download {
                file_name: file.file_name.clone(),
            })
            .await
            .unwrap();
        assert!(bytes.starts_with(magic));
        assert_eq!(bytes.len() as u64, file.size);
    }

    // Exporting never changes the stored record
    let stored = agenda
        .get_plan(&PlanId {
            plan_id: plan.plan_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(stored, Some(plan));
}

#[tokio::test]
async fn test_repeated_exports_land_in_distinct_files() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let plan = agenda.import_plan(&import("Twice")).await.unwrap();
    let at = date(2024, 6, 1)
        .at(12, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();

    let first = agenda
        .export_plan_at(&plan.plan_id, ExportFormat::Paginated, at.clone())
        .await
        .unwrap();
    let second = agenda
        .export_plan_at(&plan.plan_id, ExportFormat::Paginated, at)
        .await
        .unwrap();

    assert_ne!(first.path, second.path);
    assert_eq!(
        std::fs::read(&first.path).unwrap(),
        std::fs::read(&second.path).unwrap()
    );
}

#[tokio::test]
async fn test_download_unknown_file() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let err = agenda
        .download(&Download {
            file_name: "../test.db".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_in_memory_agenda() {
    let exports = TempDir::new().unwrap();
    let agenda = AgendaBuilder::new()
        .in_memory()
        .with_export_dir(Some(exports.path()))
        .build()
        .await
        .unwrap();

    let plan = agenda.import_plan(&import("Memory")).await.unwrap();
    let file = agenda
        .export_plan(&ExportPlan {
            plan_id: plan.plan_id,
            format: "xlsx".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(file.path.parent(), Some(exports.path()));
}
