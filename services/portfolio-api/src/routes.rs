//! Request handlers over the read-only portfolio document.

use actix_web::{web, HttpResponse};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{json, Value};
use shared::dto::PortfolioDocument;
use shared::error::AppError;
use tracing::info;

/// Read-only per-process state, built once in `main` and shared with every
/// worker.
pub struct AppState {
    pub document: PortfolioDocument,
    pub templates: Handlebars<'static>,
}

#[derive(Serialize)]
struct Acknowledgment {
    status: &'static str,
    message: &'static str,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/projects", web::get().to(list_projects))
        .route("/api/projects/{id}", web::get().to(get_project))
        .route("/api/contact", web::post().to(contact))
        .default_service(web::route().to(not_found));
}

/// Renders the full document into the `index` template.
pub async fn index(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let html = data
        .templates
        .render("index", &data.document)
        .map_err(|e| AppError::Template(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// The project list, verbatim and in stored order.
pub async fn list_projects(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&data.document.projects)
}

pub async fn get_project(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    // Non-numeric segments fall through as an unmatched route would.
    let id: i64 = path
        .parse()
        .map_err(|_| AppError::NotFound("Not found".into()))?;
    match data.document.project_by_id(id) {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(AppError::NotFound("Project not found".into())),
    }
}

/// An inquiry carrying nothing counts as absent.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Accepts a contact inquiry, logs it and discards it. Nothing is persisted
/// and no mail is sent.
pub async fn contact(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let inquiry: Value = match serde_json::from_slice(&body) {
        Ok(value) if !is_empty_payload(&value) => value,
        _ => return Err(AppError::BadRequest("No data received".into())),
    };

    info!(%inquiry, "inquiry received");

    Ok(HttpResponse::Ok().json(Acknowledgment {
        status: "success",
        message: "Your inquiry has been received. Thank you!",
    }))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
