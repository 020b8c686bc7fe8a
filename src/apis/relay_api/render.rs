use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::apis::relay_api::schemas::RenderAiRequest;
use crate::apis::relay_api::sketch::Generator;
use crate::apis::schemas::ErrorResponse;
use crate::cores::generation_models::gpt::Gpt;

// Configure the actix_web service routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(render_ai);
}

#[utoipa::path(
    post,
    path = "/api/render-ai",
    request_body = RenderAiRequest,
    responses(
        (status = 200, description = "Raw upstream response, or an object with an `error` key"),
        (status = 400, description = "Missing base64Sketch or promptText", body = ErrorResponse),
    )
)]
// Handle the POST request for /api/render-ai.
#[post("/api/render-ai")]
pub async fn render_ai(req: HttpRequest, req_body: web::Json<RenderAiRequest>) -> impl Responder {
    // 1. Validate the required fields.
    if req_body.base64_sketch.is_empty() || req_body.prompt_text.is_empty() {
        let error_response = ErrorResponse {
            error: "Missing base64Sketch or promptText".into(),
        };
        return HttpResponse::BadRequest().json(error_response);
    }

    // 2. Build the user turn: always the sketch, optionally the material.
    let mut images = vec![req_body.base64_sketch.clone()];
    if let Some(material) = &req_body.base64_material {
        if !material.is_empty() {
            images.push(material.clone());
        }
    }

    // 3. Send the request to the model service.
    let generator = Generator::new(Box::new(Gpt::default()));
    generator.relay(&req, &req_body.prompt_text, images).await
}
