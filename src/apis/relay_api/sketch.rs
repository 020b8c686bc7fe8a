use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde_json::Value;

use crate::apis::relay_api::schemas::SketchAiRequest;
use crate::apis::schemas::ErrorResponse;
use crate::cores::generation_models::generation_controller::GenerationProvider;
use crate::cores::generation_models::gpt::Gpt;
use crate::utils::log::log_request;

// Configure the actix_web service routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
       .service(sketch_ai);
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    "OK"
}

// Interface layer that calls the generation method of the upstream model.
pub(crate) struct Generator {
    model: Box<dyn GenerationProvider>,
}

impl Generator {
    pub(crate) fn new(model: Box<dyn GenerationProvider>) -> Self {
        Generator { model }
    }

    async fn generate(&self, prompt: &str, images: Vec<String>) -> Result<Value, String> {
        self.model.generate(prompt, images).await
    }

    // The upstream answer passes through unchanged. A failed call is reported
    // in the body under an `error` key while the status stays 200; clients of
    // this relay inspect the body, not the status.
    pub(crate) async fn relay(&self, req: &HttpRequest, prompt: &str, images: Vec<String>) -> HttpResponse {
        match self.generate(prompt, images).await {
            Ok(data) => {
                info!("{}", log_request(req, 200, None));
                HttpResponse::Ok().json(data)
            }
            Err(err) => {
                error!("{}", log_request(req, 200, Some(&err)));
                HttpResponse::Ok().json(ErrorResponse { error: err })
            }
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/sketch-ai",
    request_body = SketchAiRequest,
    responses(
        (status = 200, description = "Raw upstream response, or an object with an `error` key"),
        (status = 400, description = "Malformed request body"),
    )
)]
// Handle the POST request for /api/sketch-ai.
#[post("/api/sketch-ai")]
pub async fn sketch_ai(req: HttpRequest, req_body: web::Json<SketchAiRequest>) -> impl Responder {
    let generator = Generator::new(Box::new(Gpt::default()));
    let images = vec![req_body.base64_image.clone()];
    generator.relay(&req, &req_body.prompt_text, images).await
}
