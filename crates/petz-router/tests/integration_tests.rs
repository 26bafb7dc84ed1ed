//! Integration tests for the Router service

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use petz_domain::{AnimalId, AnimalRecord, GameVersion, PetStatus, Sex};
use petz_router::{
    build_state,
    config::RouterConfig,
    handlers::{create_router, ErrorResponse, HealthCheckResponse},
    responses::{PedigreeResponse, PetProfileResponse},
};
use petz_store::SqliteStore;
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

fn animal(id: i64, sex: Sex, sire: Option<i64>, dam: Option<i64>) -> AnimalRecord {
    AnimalRecord {
        id: AnimalId::from_value(id),
        show_name: format!("Moonlit Pet {}", id),
        partial_show_name: format!("Pet {}", id),
        call_name: format!("pet{}", id),
        pedigree_number: Some(format!("PBC-{}", id)),
        registration_date: Some(1_700_000_000),
        registrar_id: Some(1),
        age: 8,
        sex,
        game_version: GameVersion::Petz4,
        status: PetStatus::Registered,
        sire_id: sire.map(AnimalId::from_value),
        dam_id: dam.map(AnimalId::from_value),
        affix_id: Some(1),
        breed_id: 1,
        owner_id: 1,
        breeder_id: Some(1),
        created_at: 1_690_000_000,
        added_by: None,
        last_modified_at: None,
        modified_by: None,
    }
}

/// Seed a registry on disk and return a config pointing at it
fn seeded_config() -> (TempDir, RouterConfig) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.db");

    let mut store = SqliteStore::new(&path).unwrap();
    store.insert_member(1, "Maren").unwrap();
    store.insert_breed(1, "Scottie").unwrap();
    store.insert_affix(1, "Moonlit", 1).unwrap();

    // sire 2 x dam 3 -> 1 and 4; sire 2 x dam 5 -> 6
    store.insert_animal(&animal(2, Sex::Male, None, None)).unwrap();
    store.insert_animal(&animal(3, Sex::Female, None, None)).unwrap();
    store.insert_animal(&animal(5, Sex::Female, None, None)).unwrap();
    store.insert_animal(&animal(1, Sex::Female, Some(2), Some(3))).unwrap();
    store.insert_animal(&animal(4, Sex::Male, Some(2), Some(3))).unwrap();
    store.insert_animal(&animal(6, Sex::Male, Some(2), Some(5))).unwrap();

    let mut pending = animal(9, Sex::Male, Some(2), Some(3));
    pending.status = PetStatus::PendingRegistration;
    store.insert_animal(&pending).unwrap();

    let mut config = RouterConfig::default_test_config();
    config.database_path = path.to_string_lossy().into_owned();
    (dir, config)
}

async fn get(config: &RouterConfig, uri: &str) -> (StatusCode, Vec<u8>) {
    let app = create_router(build_state(config).unwrap());

    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (_dir, config) = seeded_config();
    let (status, body) = get(&config, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthCheckResponse = parse(&body);
    assert_eq!(health.status, "healthy");
    assert_eq!(health.max_generations, 8);
}

#[tokio::test]
async fn test_profile_endpoint() {
    let (_dir, config) = seeded_config();
    let (status, body) = get(&config, "/api/pets/1").await;

    assert_eq!(status, StatusCode::OK);
    let profile: PetProfileResponse = parse(&body);
    assert_eq!(profile.id, 1);
    assert_eq!(profile.affix_name.as_deref(), Some("Moonlit"));
    assert_eq!(profile.breed_name.as_deref(), Some("Scottie"));
    assert_eq!(profile.owner_name.as_deref(), Some("Maren"));
    assert_eq!(profile.sex, "female");
    assert_eq!(profile.game_version, "petz4");

    let siblings: Vec<(i64, bool)> = profile.siblings.iter().map(|s| (s.id, s.full)).collect();
    assert_eq!(siblings, vec![(4, true), (9, true), (6, false)]);

    assert_eq!(profile.pedigree.entries.len(), 3);
    assert_eq!(profile.pedigree.entries[0][0].as_ref().map(|e| e.id), Some(2));
    assert_eq!(profile.pedigree.entries[0][1].as_ref().map(|e| e.id), Some(3));
}

#[tokio::test]
async fn test_profile_json_uses_camel_case() {
    let (_dir, config) = seeded_config();
    let (_, body) = get(&config, "/api/pets/1").await;

    let json: serde_json::Value = parse(&body);
    assert!(json.get("showName").is_some());
    assert!(json.get("pedigreeNumber").is_some());
    assert!(json["pedigree"]["entries"][2][0].is_null());
}

#[tokio::test]
async fn test_profile_pending_is_404() {
    let (_dir, config) = seeded_config();
    let (status, body) = get(&config, "/api/pets/9").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = parse(&body);
    assert!(error.error.contains('9'));
}

#[tokio::test]
async fn test_pedigree_endpoint_depth() {
    let (_dir, config) = seeded_config();
    let (status, body) = get(&config, "/api/pets/1/pedigree?generations=5").await;

    assert_eq!(status, StatusCode::OK);
    let pedigree: PedigreeResponse = parse(&body);
    assert_eq!(pedigree.entries.len(), 5);
    for (i, generation) in pedigree.entries.iter().enumerate() {
        assert_eq!(generation.len(), 1 << (i + 1));
    }
}

#[tokio::test]
async fn test_pedigree_endpoint_default_depth() {
    let (_dir, config) = seeded_config();
    let (status, body) = get(&config, "/api/pets/6/pedigree").await;

    assert_eq!(status, StatusCode::OK);
    let pedigree: PedigreeResponse = parse(&body);
    assert_eq!(pedigree.entries.len(), 3);
}

#[tokio::test]
async fn test_pedigree_endpoint_missing_and_invalid() {
    let (_dir, config) = seeded_config();

    let (status, _) = get(&config, "/api/pets/404/pedigree?generations=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&config, "/api/pets/1/pedigree?generations=99").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_router_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("router.toml");
    std::fs::write(
        &path,
        r#"
        bind_address = "0.0.0.0"
        bind_port = 9000
        database_path = "registry.db"

        [lineage]
        max_generations = 5
        "#,
    )
    .unwrap();

    let config = RouterConfig::from_file(&path).unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.lineage.max_generations, 5);
    assert_eq!(config.lineage.profile_generations, 3);
}

#[test]
fn test_router_config_rejects_invalid_lineage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("router.toml");
    std::fs::write(
        &path,
        r#"
        bind_address = "127.0.0.1"
        bind_port = 8080
        database_path = "registry.db"

        [lineage]
        profile_generations = 6
        max_generations = 2
        "#,
    )
    .unwrap();

    assert!(RouterConfig::from_file(&path).is_err());
}
