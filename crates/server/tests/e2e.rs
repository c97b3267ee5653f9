use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use common::{Coordinates, GeocodeError, Geocoder};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use models::test_support::{temp_db, TestDb};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

/// Geocoder answering from a fixed table; unknown addresses have no match
/// and `"explode"` fails like an unreachable upstream.
struct TableGeocoder {
    calls: Mutex<usize>,
}

#[async_trait]
impl Geocoder for TableGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        *self.calls.lock().unwrap() += 1;
        match address {
            "Av. Siempre Viva 123" => Ok(Some(Coordinates { lat: -34.6, lon: -58.4 })),
            "Corrientes 1500" => Ok(Some(Coordinates { lat: -34.604, lon: -58.387 })),
            "explode" => Err(GeocodeError::Network("connection refused".into())),
            _ => Ok(None),
        }
    }
}

struct TestApp {
    base_url: String,
    geocoder: Arc<TableGeocoder>,
    _db: TestDb,
    _static_dir: TempDir,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn geocode_calls(&self) -> usize {
        *self.geocoder.calls.lock().unwrap()
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = temp_db().await?;
    let geocoder = Arc::new(TableGeocoder { calls: Mutex::new(0) });
    let static_dir = tempfile::tempdir()?;
    std::fs::write(static_dir.path().join("index.html"), "<h1>Servicios locales</h1>")?;

    let state = AppState::new(db.connection(), geocoder.clone());
    let app: Router = routes::build_router(
        state,
        CorsLayer::very_permissive(),
        static_dir.path().to_str().unwrap_or_default(),
    );
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), geocoder, _db: db, _static_dir: static_dir })
}

fn taller_x() -> Value {
    json!({"name": "Taller X", "direccion": "Av. Siempre Viva 123", "descripcion": "Reparación de autos"})
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_list_service() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/services")).json(&taller_x()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert!(created["id"].as_i64().is_some());
    assert_eq!(created["lat"], -34.6);
    assert_eq!(created["lon"], -58.4);

    let list = c.get(app.url("/services")).send().await?.json::<Value>().await?;
    assert_eq!(list, json!([{
        "id": created["id"],
        "nombre": "Taller X",
        "direccion": "Av. Siempre Viva 123",
        "lat": -34.6,
        "lon": -58.4,
        "descripcion": "Reparación de autos"
    }]));
    Ok(())
}

#[tokio::test]
async fn e2e_empty_geocode_is_404_and_inserts_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/services"))
        .json(&json!({"name": "Fantasma", "address": "no such place", "description": "x"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.json::<Value>().await?["error"].is_string());

    let list = c.get(app.url("/services")).send().await?.json::<Value>().await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_geocoder_failure_is_generic_500() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(app.url("/services"))
        .json(&json!({"name": "A", "address": "explode", "description": "b"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert!(!body["error"].as_str().unwrap_or_default().contains("connection refused"));
    Ok(())
}

#[tokio::test]
async fn e2e_missing_fields_are_400_without_geocoding() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/services")).json(&json!({"name": "A", "address": ""})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/services")).body("not json").header("content-type", "application/json").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await?["error"].is_string());

    let res = c.put(app.url("/services/1")).json(&json!({})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    assert_eq!(app.geocode_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn e2e_update_service() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = c.post(app.url("/services")).json(&taller_x()).send().await?.json::<Value>().await?;
    let id = created["id"].as_i64().unwrap_or_default();

    let res = c.put(app.url(&format!("/services/{id}")))
        .json(&json!({"name": "Taller Y", "address": "Corrientes 1500", "description": "Motos"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["updatedID"], id);
    assert!(body["message"].is_string());

    let list = c.get(app.url("/services")).send().await?.json::<Value>().await?;
    assert_eq!(list[0]["nombre"], "Taller Y");
    assert_eq!(list[0]["direccion"], "Corrientes 1500");
    assert_eq!(list[0]["descripcion"], "Motos");
    assert_eq!(list[0]["lat"], -34.604);
    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_id_is_404_and_changes_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    c.post(app.url("/services")).json(&taller_x()).send().await?;
    let before = c.get(app.url("/services")).send().await?.json::<Value>().await?;

    let res = c.put(app.url("/services/999")).json(&taller_x()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.json::<Value>().await?["error"].as_str().unwrap_or_default().contains("999"));

    let after = c.get(app.url("/services")).send().await?.json::<Value>().await?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn e2e_update_with_empty_geocode_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = c.post(app.url("/services")).json(&taller_x()).send().await?.json::<Value>().await?;
    let res = c.put(app.url(&format!("/services/{}", created["id"])))
        .json(&json!({"name": "A", "address": "unknown street", "description": "b"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_service() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = c.post(app.url("/services")).json(&taller_x()).send().await?.json::<Value>().await?;
    let id = created["id"].as_i64().unwrap_or_default();

    let res = c.delete(app.url(&format!("/services/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["deletedID"], id);

    let res = c.delete(app.url(&format!("/services/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_absent_and_non_numeric_ids_are_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    assert_eq!(c.delete(app.url("/services/999")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(c.delete(app.url("/services/abc")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_requests_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/requests")).json(&json!({"user": "ana", "service": "Taller X"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert!(created["id"].as_i64().is_some());
    assert!(created["message"].is_string());

    let list = c.get(app.url("/requests")).send().await?.json::<Value>().await?;
    assert_eq!(list, json!([{"id": created["id"], "usuario": "ana", "servicio": "Taller X"}]));
    Ok(())
}

#[tokio::test]
async fn e2e_incomplete_request_is_400_and_not_stored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    for body in [json!({"user": "", "service": "Taller X"}), json!({"user": "ana", "service": ""}), json!({})] {
        let res = c.post(app.url("/requests")).json(&body).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    }
    let list = c.get(app.url("/requests")).send().await?.json::<Value>().await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_legacy_paths_and_field_names() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/servicios"))
        .json(&json!({"nombre": "Taller X", "direccion": "Av. Siempre Viva 123", "descripcion": "Reparación de autos"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.post(app.url("/solicitudes")).json(&json!({"usuario": "beto", "servicio": "Taller X"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let services = c.get(app.url("/servicios")).send().await?.json::<Value>().await?;
    assert_eq!(services.as_array().map(Vec::len), Some(1));
    assert_eq!(services[0]["nombre"], "Taller X");
    let requests = c.get(app.url("/solicitudes")).send().await?.json::<Value>().await?;
    assert_eq!(requests[0]["usuario"], "beto");
    assert_eq!(requests[0]["servicio"], "Taller X");
    Ok(())
}

#[tokio::test]
async fn e2e_serves_front_end_and_openapi() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("Servicios locales"));

    let doc = reqwest::get(app.url("/api-docs/openapi.json")).await?.json::<Value>().await?;
    assert!(doc["paths"]["/services"].is_object());
    Ok(())
}
