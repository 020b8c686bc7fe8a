use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use log4rs::init_file;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod apis;
mod configs;
mod cores;
mod utils;

use crate::configs::settings::{openai_api_key, GLOBAL_CONFIG};
use crate::apis::api_doc::ApiDoc;

#[cfg(test)]
mod test;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    let config = &*GLOBAL_CONFIG;

    let config_path = format!("{}/src/configs/log4rs.yaml", env!("CARGO_MANIFEST_DIR"));
    init_file(&config_path, Default::default()).unwrap();

    // The upstream credential must be present before the server takes traffic.
    openai_api_key().map_err(|_| std::io::Error::new(
        std::io::ErrorKind::Other,
        "OPENAI_API_KEY must be set (see .env)",
    ))?;

    // Set the port number
    let port = config.port;
    println!("Starting server on port {}", port);

    // Start the HTTP server
    HttpServer::new(move || {
        // Everything is allowed, credentials included. Local development only.
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            // Request bodies carry base64-encoded images, which do not fit
            // the default JSON payload limit.
            .app_data(web::JsonConfig::default().limit(config.json_limit))
            .configure(apis::relay_api::sketch::configure)
            .configure(apis::relay_api::render::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
