//! Portfolio web server: renders the portfolio page and serves the read-only
//! JSON API over the document loaded at startup.

mod routes;
mod templates;

use std::path::Path;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use shared::config::Settings;
use shared::store;
use tracing::{error, info};

use crate::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            tracing_subscriber::fmt::init();
            error!(%e, "failed to load settings");
            std::process::exit(1);
        }
    };

    // Production logs into a rotating file; the guard must outlive the server.
    let _guard = match settings.init_logging() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };
    info!(environment = %settings.environment, "starting portfolio-api");

    let document = match store::load(Path::new(&settings.data_file)) {
        Ok(d) => d,
        Err(e) => {
            error!(%e, "failed to load portfolio data");
            std::process::exit(1);
        }
    };

    let templates = match templates::load_templates(Path::new(&settings.templates_folder)) {
        Ok(t) => t,
        Err(e) => {
            error!(%e, "failed to load templates");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(AppState {
        document,
        templates,
    });
    let bind = (settings.host.clone(), settings.port);

    info!(host = %settings.host, port = settings.port, "listening");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
