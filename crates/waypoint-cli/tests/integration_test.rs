//! Integration tests comparing CLI output with direct Display output
//!
//! The CLI renders results through the same Display implementations the
//! MCP server uses; these tests verify the two paths stay in sync.

use std::process::Command;

use tempfile::TempDir;
use waypoint_core::{
    params::{GenerateRoadmap, Id},
    AuthContext, RoadmapService, RoadmapServiceBuilder,
};

/// Helper function to create a test service with temporary database
async fn create_test_service() -> (RoadmapService, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let service = RoadmapServiceBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create service");

    (service, temp_dir)
}

/// Run a CLI command with stdin and capture its output
fn run_cli_command(db_path: &str, args: &[&str], stdin: Option<&str>) -> String {
    use std::io::Write;
    use std::process::Stdio;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wp"));
    cmd.arg("--no-color")
        .args(["--user", "integration"])
        .arg("--database-file")
        .arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    if let Some(input) = stdin {
        cmd.stdin(Stdio::piped()).stdout(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to spawn CLI command");
        child
            .stdin
            .as_mut()
            .expect("Failed to open stdin")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to run CLI command");
        return String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output");
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

const RAW_RESPONSE: &str = r#"{
    "title": "Integration Roadmap",
    "description": "Roadmap used to compare output paths",
    "steps": ["First thing", "Second thing"]
}"#;

#[tokio::test]
async fn test_show_output_matches_display_impl() {
    let (service, temp_dir) = create_test_service().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();
    let auth = AuthContext::new("integration");

    let roadmap = service
        .generate_roadmap(
            &auth,
            &GenerateRoadmap {
                raw_response: RAW_RESPONSE.to_string(),
                title_hint: None,
            },
        )
        .await
        .expect("Failed to generate roadmap");

    let cli_output = run_cli_command(db_str, &["show", &roadmap.id.to_string()], None);

    let direct = service
        .show_roadmap(&auth, &Id { id: roadmap.id })
        .await
        .expect("Failed to show roadmap")
        .expect("Roadmap should exist")
        .to_string();

    // Plain-text rendering echoes the markdown verbatim.
    assert_eq!(cli_output, direct);
}

#[tokio::test]
async fn test_generate_output_matches_display_impl() {
    let (service, temp_dir) = create_test_service().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();
    let auth = AuthContext::new("integration");

    let cli_output = run_cli_command(db_str, &["generate"], Some(RAW_RESPONSE));
    assert!(cli_output.contains("Created roadmap with ID:"));

    // The stored roadmap renders identically when fetched directly.
    let stored = service
        .show_roadmap(&auth, &Id { id: 1 })
        .await
        .expect("Failed to show roadmap")
        .expect("Roadmap should exist");
    assert!(cli_output.contains(&stored.to_string()));
}
