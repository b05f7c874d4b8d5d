mod common;

use common::create_test_service;
use waypoint_core::{
    models::StepKind,
    params::{GenerateRoadmap, Id, ListRoadmaps, UpdateRoadmap},
    AuthContext,
};

fn generate_params(raw: &str) -> GenerateRoadmap {
    GenerateRoadmap {
        raw_response: raw.to_string(),
        title_hint: None,
    }
}

#[tokio::test]
async fn test_generate_applies_defaults_for_missing_fields() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    // A minimal document with only steps: every other field defaults.
    let roadmap = service
        .generate_roadmap(&auth, &generate_params(r#"{"steps": ["Only step"]}"#))
        .await
        .expect("Failed to generate roadmap");

    assert_eq!(roadmap.title, "Untitled Roadmap");
    assert_eq!(roadmap.description, "");
    assert_eq!(roadmap.difficulty, "beginner");
    assert_eq!(roadmap.category, "general");
    assert_eq!(roadmap.estimated_total_duration, "");
    assert!(roadmap.edges.is_empty());
}

#[tokio::test]
async fn test_generate_preserves_rich_node_objects() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    let raw = r#"{
        "title": "Learn Databases",
        "estimatedTotalDuration": "6 weeks",
        "difficulty": "intermediate",
        "nodes": [
            {
                "id": "sql-basics",
                "title": "SQL Basics",
                "description": "Queries and joins",
                "duration": "2 weeks",
                "type": "milestone",
                "resources": ["https://example.com/sql"]
            },
            "Indexing"
        ],
        "edges": [
            {"source": "sql-basics", "target": "step_2", "label": "After"}
        ]
    }"#;

    let roadmap = service
        .generate_roadmap(&auth, &generate_params(raw))
        .await
        .expect("Failed to generate roadmap");

    assert_eq!(roadmap.estimated_total_duration, "6 weeks");
    assert_eq!(roadmap.difficulty, "intermediate");

    // The rich object keeps its supplied fields.
    assert_eq!(roadmap.nodes[0].id, "sql-basics");
    assert_eq!(roadmap.nodes[0].kind, StepKind::Milestone);
    assert_eq!(roadmap.nodes[0].duration, "2 weeks");
    assert_eq!(roadmap.nodes[0].resources, vec!["https://example.com/sql"]);

    // The bare string becomes a positional step.
    assert_eq!(roadmap.nodes[1].id, "step_2");
    assert_eq!(roadmap.nodes[1].title, "Indexing");
    assert_eq!(roadmap.nodes[1].kind, StepKind::Task);

    // Supplied edges pass through instead of the auto-generated chain.
    assert_eq!(roadmap.edges.len(), 1);
    assert_eq!(roadmap.edges[0].label, "After");
}

#[tokio::test]
async fn test_generate_with_title_hint_round_trips() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    let roadmap = service
        .generate_roadmap(
            &auth,
            &GenerateRoadmap {
                raw_response: r#"{"steps": ["Washes", "Glazing"]}"#.to_string(),
                title_hint: Some("Watercolor Basics".to_string()),
            },
        )
        .await
        .expect("Failed to generate roadmap");
    assert_eq!(roadmap.title, "Watercolor Basics");

    // The hinted title is persisted, not just applied in memory.
    let stored = service
        .show_roadmap(&auth, &Id { id: roadmap.id })
        .await
        .expect("Failed to show roadmap")
        .expect("Roadmap should exist");
    assert_eq!(stored.title, "Watercolor Basics");
}

#[tokio::test]
async fn test_generate_result_display_output() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    let result = service
        .generate_roadmap_result(
            &auth,
            &generate_params(r#"{"title": "Learn Rust", "steps": ["Ownership"]}"#),
        )
        .await
        .expect("Failed to generate roadmap");

    let output = format!("{result}");
    assert!(output.contains(&format!("Created roadmap with ID: {}", result.resource.id)));
    assert!(output.contains("Learn Rust"));
    assert!(output.contains("## Steps"));
    assert!(output.contains("### 1. Ownership"));
}

#[tokio::test]
async fn test_update_result_tracks_changes() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    let roadmap = service
        .generate_roadmap(&auth, &generate_params(r#"{"title": "Before", "steps": ["One"]}"#))
        .await
        .expect("Failed to generate roadmap");

    let result = service
        .update_roadmap_result(
            &auth,
            &UpdateRoadmap {
                id: roadmap.id,
                title: Some("After".to_string()),
                description: Some("New description".to_string()),
            },
        )
        .await
        .expect("Failed to update roadmap");

    let output = format!("{result}");
    assert!(output.contains("Changes made:"));
    assert!(output.contains("Title set to \"After\""));
    assert!(output.contains("Description updated"));
    assert_eq!(result.resource.description, "New description");
}

#[tokio::test]
async fn test_empty_list_displays_placeholder() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    let summaries = service
        .list_roadmaps_summary(&auth, &ListRoadmaps::default())
        .await
        .expect("Failed to list roadmaps");

    assert!(summaries.is_empty());
    assert!(format!("{summaries}").contains("No roadmaps found."));
}

#[tokio::test]
async fn test_duplicate_then_show_both_roadmaps() {
    let (_temp_dir, service) = create_test_service().await;
    let auth = AuthContext::new("tester");

    let original = service
        .generate_roadmap(
            &auth,
            &generate_params(r#"{"title": "Learn Git", "steps": ["Commits", "Branches"]}"#),
        )
        .await
        .expect("Failed to generate roadmap");

    let copy = service
        .duplicate_roadmap_result(&auth, &Id { id: original.id })
        .await
        .expect("Failed to duplicate roadmap");

    let shown = service
        .show_roadmap(&auth, &Id { id: copy.resource.id })
        .await
        .expect("Failed to show roadmap")
        .expect("Copy should exist");
    assert_eq!(shown.title, "Learn Git (copy)");
    assert_eq!(shown.nodes, original.nodes);
}
