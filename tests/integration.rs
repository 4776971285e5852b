//! Integration tests for the Paystub Engine.
//!
//! This suite covers the public surface end to end:
//! - Totals for routes, incentives and STAT delivery
//! - Rendering of headers, sections, custom items and notes
//! - PDF export through a fake raster backend
//! - The saved-driver book on a JSON file
//! - The remote API client against an in-process stub service

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use image::{Rgb, RgbImage};
use serde_json::{json, Value};

use paystub_engine::api::{
    download_pdf, ApiCreateTemplateRequest, ApiPaystubData, PaystubApiClient,
};
use paystub_engine::calculation::calculate_totals;
use paystub_engine::config::ConfigLoader;
use paystub_engine::error::PaystubError;
use paystub_engine::export::{PdfExporter, RasterBackend, RasterError};
use paystub_engine::models::{CustomItem, DriverInfo, PaystubRecord, PdfOptions};
use paystub_engine::render::{render_document, render_html, Surface};
use paystub_engine::storage::{DriverBook, DriverRepository, JsonFileDriverStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_scenario_record() -> PaystubRecord {
    let mut record = PaystubRecord::default();
    record.driver_info = DriverInfo {
        first_name: "Maria".to_string(),
        last_name: "Lopez".to_string(),
        address: "4 Elm St, Springfield".to_string(),
        ssn: "9876".to_string(),
        pay_period_start: "2026-03-01".to_string(),
        pay_period_end: "2026-03-14".to_string(),
    };
    record.routes.quantities.four_hour_routes = 2;
    record.routes.quantities.six_hour_routes = 1;
    record.incentives.quantities.pick_up = 1;
    record.incentives.quantities.gas = 1;
    record.stat_delivery.quantities.miles = 25.0;
    record
}

/// Raster backend that paints a white page and counts teardown calls.
#[derive(Default)]
struct WhitePageBackend {
    unmounted: AtomicU32,
}

impl RasterBackend for WhitePageBackend {
    type Surface = (f64, usize);

    fn mount(&self, html: &str, width_in: f64) -> Result<(f64, usize), RasterError> {
        Ok((width_in, html.len()))
    }

    fn capture(&self, surface: &(f64, usize), scale: f64) -> Result<RgbImage, RasterError> {
        let width = (surface.0 * 96.0 * scale) as u32;
        let height = (700.0 * scale) as u32;
        Ok(RgbImage::from_pixel(width, height, Rgb([255, 255, 255])))
    }

    fn unmount(&self, _surface: (f64, usize)) {
        self.unmounted.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_scenario_routes_subtotal() {
    let calc = calculate_totals(&create_scenario_record());
    assert_eq!(calc.routes_total, 280.0);
}

#[test]
fn test_scenario_incentives_subtotal() {
    let calc = calculate_totals(&create_scenario_record());
    assert_eq!(calc.incentives_total, 37.5);
}

#[test]
fn test_scenario_stat_delivery_subtotal() {
    let calc = calculate_totals(&create_scenario_record());
    assert_eq!(calc.stat_delivery_total, 30.0);
}

#[test]
fn test_scenario_grand_total_end_to_end() {
    let record = create_scenario_record();
    let calc = calculate_totals(&record);
    assert_eq!(calc.grand_total, 347.5);

    let doc = render_document(&record, &calc);
    assert_eq!(doc.grand_total, "$347.50");
    assert_eq!(doc.sections[0].subtotal, "$280.00");
    assert_eq!(doc.sections[1].subtotal, "$37.50");
    assert_eq!(doc.sections[2].subtotal, "$30.00");
}

#[test]
fn test_scenario_empty_record() {
    let mut record = PaystubRecord::default();
    record.notes.clear();

    let calc = calculate_totals(&record);
    let doc = render_document(&record, &calc);

    for section in &doc.sections {
        assert_eq!(section.subtotal, "$0.00");
    }
    assert_eq!(doc.grand_total, "$0.00");
    assert!(doc.notes.is_none());
}

#[test]
fn test_custom_items_change_totals_and_rows() {
    let mut record = create_scenario_record();
    let bonus = CustomItem::new("Holiday bonus", 1.0, 50.0);
    let bonus_id = bonus.id.clone();
    record.incentives.add_custom_item(bonus);
    record
        .incentives
        .add_custom_item(CustomItem::new("Training", 2.0, 12.5));

    let calc = calculate_totals(&record);
    assert_eq!(calc.incentives_total, 37.5 + 50.0 + 25.0);
    assert_eq!(calc.grand_total, 280.0 + 112.5 + 30.0);

    let doc = render_document(&record, &calc);
    let labels: Vec<_> = doc.sections[1].rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(&labels[5..], &["Holiday bonus", "Training"]);

    record.incentives.remove_custom_item(&bonus_id);
    let calc = calculate_totals(&record);
    assert_eq!(calc.incentives_total, 62.5);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_preview_and_export_show_the_same_content() {
    let record = create_scenario_record();
    let doc = render_document(&record, &calculate_totals(&record));

    let preview = render_html(&doc, Surface::Preview);
    let export = render_html(&doc, Surface::Export);

    for text in [
        "Maria Lopez",
        "XXX-XX-9876",
        "03/01/2026 - 03/14/2026",
        "$347.50",
        "Routes Subtotal:",
        "STAT Delivery Subtotal:",
    ] {
        assert!(preview.contains(text), "preview is missing {}", text);
        assert!(export.contains(text), "export is missing {}", text);
    }
}

#[test]
fn test_config_branding_reaches_the_header() {
    let loader = ConfigLoader::load("./config/mdse").unwrap();
    let record = loader.default_record().unwrap();
    let doc = paystub_engine::render::render_document_with(
        &record,
        &calculate_totals(&record),
        &loader.branding(),
    );
    let html = render_html(&doc, Surface::Preview);
    assert!(html.contains(r#"alt="MDSCRIPTS express""#));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_and_save_pdf() {
    let exporter = PdfExporter::new(WhitePageBackend::default());
    let record = create_scenario_record();
    let calc = calculate_totals(&record);

    let pdf = exporter
        .export(&record, &calc, &PdfOptions::with_check_space(2.0))
        .unwrap();
    assert_eq!(pdf.filename, "paystub_Maria_Lopez_2026-03-14.pdf");
    assert!(pdf.bytes.starts_with(b"%PDF"));
    assert_eq!(exporter.backend().unmounted.load(Ordering::SeqCst), 1);

    let dir = tempfile::tempdir().unwrap();
    let path = pdf.save_to(dir.path()).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), pdf.bytes);
}

#[test]
fn test_export_requires_driver_name() {
    let exporter = PdfExporter::new(WhitePageBackend::default());
    let mut record = create_scenario_record();
    record.driver_info.first_name = " ".to_string();
    let calc = calculate_totals(&record);

    let err = exporter
        .export(&record, &calc, &PdfOptions::default())
        .unwrap_err();
    assert!(matches!(err, PaystubError::Validation { .. }));
    assert_eq!(exporter.backend().unmounted.load(Ordering::SeqCst), 0);
}

#[test]
fn test_concurrent_exports_use_separate_surfaces() {
    let exporter = Arc::new(PdfExporter::new(WhitePageBackend::default()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let exporter = Arc::clone(&exporter);
            std::thread::spawn(move || {
                let mut record = create_scenario_record();
                record.routes.quantities.four_hour_routes = i;
                let calc = calculate_totals(&record);
                exporter.export(&record, &calc, &PdfOptions::default())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert_eq!(exporter.backend().unmounted.load(Ordering::SeqCst), 4);
}

// =============================================================================
// Saved drivers
// =============================================================================

#[test]
fn test_scenario_driver_saved_with_only_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileDriverStore::new(dir.path().join("drivers.json"));
    let mut book = DriverBook::open(store.clone());

    let info = DriverInfo {
        first_name: "Sam".to_string(),
        last_name: "Reed".to_string(),
        ..DriverInfo::default()
    };
    let saved = book.save_driver(&info).unwrap();

    assert_eq!(saved.address, "");
    assert_eq!(saved.ssn, "");
    assert_eq!(book.drivers().last(), Some(&saved));

    // A fresh book on the same file sees the driver.
    let reopened = DriverBook::open(store);
    assert_eq!(reopened.drivers(), &[saved.clone()]);

    let form = DriverInfo::from_driver(&saved);
    assert_eq!(form.full_name(), "Sam Reed");
    assert_eq!(form.pay_period_start, "");
}

#[test]
fn test_deleting_every_driver_empties_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileDriverStore::new(dir.path().join("drivers.json"));
    let mut book = DriverBook::open(store.clone());

    let info = DriverInfo {
        first_name: "Sam".to_string(),
        last_name: "Reed".to_string(),
        ..DriverInfo::default()
    };
    let saved = book.save_driver(&info).unwrap();
    book.delete_driver(&saved.id).unwrap();

    assert!(store.load_all().is_empty());
    assert!(DriverBook::open(store).drivers().is_empty());
}

// =============================================================================
// Remote API client
// =============================================================================

#[derive(Clone, Default)]
struct StubState {
    deletes: Arc<AtomicU32>,
}

fn template_json(id: &str, data: Value) -> Value {
    json!({
        "id": id,
        "name": "Weekly",
        "createdAt": "2026-03-14T12:00:00Z",
        "data": data,
    })
}

async fn stub_calculate(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if headers.get("content-type").and_then(|v| v.to_str().ok()) != Some("application/json") {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }
    let routes = body["routes"]["fourHourRoutes"].as_f64().unwrap_or(0.0)
        * body["routeRates"]["fourHourRate"].as_f64().unwrap_or(0.0)
        + body["routes"]["sixHourRoutes"].as_f64().unwrap_or(0.0)
            * body["routeRates"]["sixHourRate"].as_f64().unwrap_or(0.0);
    Json(json!({
        "routesTotal": routes,
        "incentivesTotal": 0.0,
        "statDeliveryTotal": 0.0,
        "grandTotal": routes,
    }))
    .into_response()
}

async fn stub_generate(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "data": body,
        "calculations": {
            "routesTotal": 280.0,
            "incentivesTotal": 37.5,
            "statDeliveryTotal": 30.0,
            "grandTotal": 347.5
        },
        "generatedAt": "2026-03-14T12:00:00.0000000Z",
    }))
}

async fn stub_generate_pdf(Json(body): Json<Value>) -> Response {
    if body["driverInfo"]["name"].as_str().unwrap_or("").is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Driver name is required"})),
        )
            .into_response();
    }
    (
        [("content-type", "application/pdf")],
        b"%PDF-1.7 stub".to_vec(),
    )
        .into_response()
}

async fn stub_list_templates() -> Json<Value> {
    Json(json!([]))
}

async fn stub_save_template(Json(body): Json<Value>) -> Json<Value> {
    Json(template_json("tpl-1", body["data"].clone()))
}

async fn stub_get_template(Path(id): Path<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": format!("Template {} not found", id)})),
    )
        .into_response()
}

async fn stub_delete_template(State(state): State<StubState>, Path(id): Path<String>) -> StatusCode {
    if id == "locked" {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    state.deletes.fetch_add(1, Ordering::SeqCst);
    StatusCode::NO_CONTENT
}

async fn stub_health() -> Json<Value> {
    Json(json!({
        "status": "Healthy",
        "timestamp": "2026-03-14T12:00:00Z",
        "service": "MDSE Paystub API"
    }))
}

/// Starts the stub service on an ephemeral port and returns its base URL.
async fn spawn_stub_service(state: StubState) -> String {
    let app = Router::new()
        .route("/api/Paystub/calculate", post(stub_calculate))
        .route("/api/Paystub/generate", post(stub_generate))
        .route("/api/Paystub/generate-pdf", post(stub_generate_pdf))
        .route(
            "/api/Paystub/templates",
            get(stub_list_templates).post(stub_save_template),
        )
        .route(
            "/api/Paystub/templates/:id",
            get(stub_get_template).delete(stub_delete_template),
        )
        .route("/api/Paystub/health", get(stub_health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_api_health_check() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let health = client.health_check().await.unwrap();
    assert_eq!(health.status, "Healthy");
    assert_eq!(health.service, "MDSE Paystub API");
}

#[tokio::test]
async fn test_api_calculate_totals_sends_json() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let data = ApiPaystubData::from(&create_scenario_record());

    let calc = client.calculate_totals(&data).await.unwrap();
    assert_eq!(calc.routes_total, 280.0);
    assert_eq!(calc.grand_total, 280.0);
}

#[tokio::test]
async fn test_api_generate_paystub() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let data = ApiPaystubData::from(&create_scenario_record());

    let response = client.generate_paystub(&data).await.unwrap();
    assert_eq!(response.data, data);
    assert_eq!(response.calculations.grand_total, 347.5);
    assert_eq!(response.generated_at, "2026-03-14T12:00:00.0000000Z");
}

#[tokio::test]
async fn test_api_error_field_becomes_message() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);

    let err = client.get_template("tpl-9").await.unwrap_err();
    assert_eq!(err.to_string(), "Template tpl-9 not found");
    assert!(matches!(err, PaystubError::Api { status: Some(404), .. }));
}

#[tokio::test]
async fn test_api_error_without_body_uses_status() {
    let state = StubState::default();
    let client = PaystubApiClient::new(spawn_stub_service(state.clone()).await);

    let err = client.delete_template("locked").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");

    client.delete_template("tpl-1").await.unwrap();
    assert_eq!(state.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_api_templates_round_trip() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    assert!(client.get_templates().await.unwrap().is_empty());

    let request = ApiCreateTemplateRequest {
        name: "Weekly".to_string(),
        data: ApiPaystubData::from(&create_scenario_record()),
    };
    let template = client.save_template(&request).await.unwrap();
    assert_eq!(template.id, "tpl-1");
    assert_eq!(template.data, request.data);
}

#[tokio::test]
async fn test_download_pdf_writes_default_filename() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let data = ApiPaystubData::from(&create_scenario_record());
    let dir = tempfile::tempdir().unwrap();

    let path = download_pdf(&client, &data, dir.path(), None).await.unwrap();
    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("paystub_Maria_Lopez_"), "unexpected name {}", name);
    assert!(name.ends_with(".pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7 stub");

    let named = download_pdf(&client, &data, dir.path(), Some("march.pdf"))
        .await
        .unwrap();
    assert_eq!(named, dir.path().join("march.pdf"));
}

#[tokio::test]
async fn test_download_pdf_leaves_only_the_finished_file() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let data = ApiPaystubData::from(&create_scenario_record());
    let dir = tempfile::tempdir().unwrap();

    let path = download_pdf(&client, &data, dir.path(), None).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries, vec![path]);
}

#[tokio::test]
async fn test_download_pdf_into_missing_directory_is_storage_error() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let data = ApiPaystubData::from(&create_scenario_record());
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let err = download_pdf(&client, &data, &missing, None).await.unwrap_err();
    assert!(matches!(err, PaystubError::Storage { .. }));
    assert!(!missing.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_download_pdf_failure_writes_nothing() {
    let client = PaystubApiClient::new(spawn_stub_service(StubState::default()).await);
    let data = ApiPaystubData::from(&PaystubRecord::default());
    let dir = tempfile::tempdir().unwrap();

    let err = download_pdf(&client, &data, dir.path(), None).await.unwrap_err();
    assert_eq!(err.to_string(), "Driver name is required");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
