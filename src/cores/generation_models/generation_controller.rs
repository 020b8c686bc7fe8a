use async_trait::async_trait;
use serde_json::Value;

// Seam between the HTTP handlers and the upstream model. The provider returns
// the upstream response body as-is; every failure mode collapses to a message
// string.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str, images: Vec<String>) -> Result<Value, String>;
}
