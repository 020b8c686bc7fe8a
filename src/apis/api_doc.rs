use utoipa::OpenApi;

use crate::apis::relay_api;
use crate::apis::relay_api::schemas::{RenderAiRequest, SketchAiRequest};
use crate::apis::schemas::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        relay_api::sketch::health,
        relay_api::sketch::sketch_ai,
        relay_api::render::render_ai,
    ),
    components(
        schemas(SketchAiRequest, RenderAiRequest, ErrorResponse)
    )
)]

pub struct ApiDoc;
