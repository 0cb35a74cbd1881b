use crate::error::Result;
use crate::models::{GenerateOptions, GenerateRequest, GenerateResponse};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct CaseClient {
    client: Client,
    endpoint: String,
    model: String,
    options: GenerateOptions,
}

impl CaseClient {
    pub fn new(endpoint: &str, model: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            options: GenerateOptions::default(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single non-streaming generation. Transport errors and non-2xx statuses propagate.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            options: self.options,
            stream: false,
        };

        info!("Requesting a case from {} ({})", self.endpoint, self.model);
        let started = Instant::now();

        let res = self
            .client
            .post(format!("{}/api/generate", self.endpoint))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = res.json().await?;
        debug!(
            "Model answered in {:.1}s ({} bytes)",
            started.elapsed().as_secs_f64(),
            body.response.len()
        );
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseError;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_sends_fixed_options() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({
                "model": "gemma:4b",
                "prompt": "write a case",
                "options": { "num_ctx": 4096 },
                "stream": false
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "# Case 1F" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = CaseClient::new(&server.uri(), "gemma:4b").unwrap();
        let text = client.generate("write a case").await.unwrap();
        assert_eq!(text, "# Case 1F");
    }

    #[tokio::test]
    async fn test_generate_sampling_values() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
            .mount(&server)
            .await;

        let client = CaseClient::new(&format!("{}/", server.uri()), "m").unwrap();
        client.generate("p").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let temperature = body["options"]["temperature"].as_f64().unwrap();
        let top_p = body["options"]["top_p"].as_f64().unwrap();
        assert!((temperature - 0.9).abs() < 1e-6);
        assert!((top_p - 0.95).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_missing_response_field_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
            .mount(&server)
            .await;

        let client = CaseClient::new(&server.uri(), "m").unwrap();
        assert_eq!(client.generate("p").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = CaseClient::new(&server.uri(), "m").unwrap();
        let err = client.generate("p").await.unwrap_err();
        assert!(matches!(err, CaseError::Http(_)));
    }
}
