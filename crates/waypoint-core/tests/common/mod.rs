use tempfile::TempDir;
use waypoint_core::{RoadmapService, RoadmapServiceBuilder};

/// Helper function to create a test service
pub async fn create_test_service() -> (TempDir, RoadmapService) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let service = RoadmapServiceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create service");
    (temp_dir, service)
}
