use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Request struct for the /api/sketch-ai interface. The image is an opaque
// base64 data URL; no size or format checks are applied on this side.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SketchAiRequest {
    pub base64_image: String,
    pub prompt_text: String,
}

// Request struct for the /api/render-ai interface. The material image is
// optional; when present it is appended to the user turn after the sketch.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderAiRequest {
    pub base64_sketch: String,
    pub base64_material: Option<String>,
    pub prompt_text: String,
}
