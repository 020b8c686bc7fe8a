use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::configs::settings::{openai_api_key, GLOBAL_CONFIG};
use crate::cores::generation_models::generation_controller::GenerationProvider;

pub struct Gpt {
    pub url: String,
    pub model: String,
}

impl Default for Gpt {
    fn default() -> Self {
        let config = &*GLOBAL_CONFIG;
        Gpt {
            url: config.responses_url.clone(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl GenerationProvider for Gpt {
    async fn generate(&self, prompt: &str, images: Vec<String>) -> Result<Value, String> {
        // 1. Read the upstream credential. Checked at startup as well, so a
        // miss here means the environment changed underneath the process.
        let api_key = openai_api_key().map_err(|_| "OPENAI_API_KEY is not set".to_string())?;

        // 2. Construct the request body: one user turn carrying the prompt
        // text followed by each image, plus the image_generation tool.
        let mut content = vec![json!({"type": "input_text", "text": prompt})];
        for image in &images {
            content.push(json!({"type": "input_image", "image_url": image}));
        }

        let request_body = json!({
            "model": self.model,
            "input": [
                {
                    "role": "user",
                    "content": content
                }
            ],
            "text": {"format": {"type": "text"}},
            "reasoning": {},
            "tools": [
                {
                    "type": "image_generation",
                    "size": "1024x1024",
                    "quality": "high",
                    "output_format": "png",
                    "background": "transparent",
                    "moderation": "low"
                }
            ],
            "temperature": 1,
            "max_output_tokens": 2048,
            "top_p": 1,
            "store": true
        });

        // 3. Use reqwest to initiate the POST request.
        let config = &*GLOBAL_CONFIG;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|err| format!("Failed to build client: {}", err))?;

        let response = match client.post(&self.url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await {
                Ok(resp) => resp,
                Err(err) => return Err(format!("Request failed: {}", err)),
            };

        // 4. Pass the upstream body through untouched.
        if response.status().is_success() {
            let data: Value = response.json().await
                .map_err(|err| format!("Failed to parse response: {}", err))?;
            Ok(data)
        } else {
            Err(format!("API returned non-success status: {}", response.status()))
        }
    }
}
