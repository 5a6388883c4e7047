//! HTTP client for the finance flow.

use crate::types::{RunRequest, RunResponse, error_detail};
use crate::{Error, FinanceConfig, Result};
use reqwest::Url;
use serde_json::Value;

/// Client for one flow run endpoint.
///
/// Holds no per-call state, so a single instance can serve concurrent queries.
#[derive(Debug, Clone)]
pub struct FinanceClient {
    client: reqwest::Client,
    url: Url,
    tweaks: Vec<String>,
    timeout_ms: u64,
}

impl FinanceClient {
    /// Build a client from configuration, validating the remote target.
    pub fn new(config: &FinanceConfig) -> Result<Self> {
        let url = config.run_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            tweaks: config.tweaks.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// The run endpoint this client posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run the flow with `query` as input and return the answer text.
    pub async fn query(&self, query: &str) -> Result<String> {
        let request = RunRequest::chat(query, &self.tweaks);

        let response = self
            .client
            .post(self.url.clone())
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => return Err(self.transport_error(e)),
                Err(_) => Default::default(),
            };
            let body: Option<Value> = serde_json::from_slice(&body).ok();
            let fallback = format!("Request failed with status code {}", status.as_u16());
            tracing::debug!(%status, "finance flow returned an error status");
            return Err(Error::Api(error_detail(body.as_ref(), &fallback)));
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        RunResponse::decode(&body)?.into_text()
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.timeout_ms)
        } else {
            Error::Api(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RUN_PATH: &str = "/api/v1/run/test-flow";

    fn config_for(server: &MockServer) -> FinanceConfig {
        FinanceConfig {
            endpoint_url: server.uri(),
            run_id: "test-flow".into(),
            ..FinanceConfig::default()
        }
    }

    fn answer(text: &str) -> Value {
        json!({ "outputs": [{ "outputs": [{ "results": { "message": { "text": text } } }] }] })
    }

    #[tokio::test]
    async fn posts_query_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_PATH))
            .and(query_param("stream", "false"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "input_value": "My balance",
                "output_type": "chat",
                "input_type": "chat"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer("Balance: $100")))
            .expect(1)
            .mount(&server)
            .await;

        let client = FinanceClient::new(&config_for(&server)).unwrap();
        let text = client.query("My balance").await.unwrap();
        assert_eq!(text, "Balance: $100");
    }

    #[tokio::test]
    async fn error_status_uses_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "service unavailable" })),
            )
            .mount(&server)
            .await;

        let client = FinanceClient::new(&config_for(&server)).unwrap();
        let err = client.query("credit card").await.unwrap_err();
        assert_eq!(err.to_string(), "Finance API error: service unavailable");
    }

    #[tokio::test]
    async fn error_status_without_message_uses_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = FinanceClient::new(&config_for(&server)).unwrap();
        let err = client.query("credit card").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Finance API error: Request failed with status code 503"
        );
    }

    #[tokio::test]
    async fn connection_refused_is_api_error() {
        // Grab a free port, then close it so nothing is listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = FinanceConfig {
            endpoint_url: format!("http://127.0.0.1:{port}"),
            ..FinanceConfig::default()
        };
        let client = FinanceClient::new(&config).unwrap();
        let err = client.query("balance").await.unwrap_err();

        assert!(matches!(err, Error::Api(_)));
        let message = err.to_string();
        assert!(message.starts_with("Finance API error: "));
        assert!(message.len() > "Finance API error: ".len());
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(answer("late"))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = FinanceConfig {
            timeout_ms: 50,
            ..config_for(&server)
        };
        let client = FinanceClient::new(&config).unwrap();
        let err = client.query("balance").await.unwrap_err();
        assert!(matches!(err, Error::Timeout(50)));
    }

    #[tokio::test]
    async fn stalled_error_body_times_out() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Sends an error status line and headers, then never finishes the body.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let stalled = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\n\
                      content-type: application/json\r\n\
                      content-length: 64\r\n\r\n{\"mess",
                )
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        });

        let config = FinanceConfig {
            endpoint_url: format!("http://127.0.0.1:{port}"),
            timeout_ms: 200,
            ..FinanceConfig::default()
        };
        let client = FinanceClient::new(&config).unwrap();
        let err = client.query("balance").await.unwrap_err();
        assert!(matches!(err, Error::Timeout(200)), "got {err:?}");

        stalled.abort();
    }

    #[tokio::test]
    async fn unexpected_success_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "outputs": [] })))
            .mount(&server)
            .await;

        let client = FinanceClient::new(&config_for(&server)).unwrap();
        let err = client.query("balance").await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn only_input_value_varies_between_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer("ok")))
            .mount(&server)
            .await;

        let client = FinanceClient::new(&config_for(&server)).unwrap();
        client.query("My balance").await.unwrap();
        client.query("  credit \"card\" ünïcode  ").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);

        let mut bodies: Vec<Value> = requests
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect();
        assert_eq!(bodies[0]["input_value"], "My balance");
        assert_eq!(bodies[1]["input_value"], "  credit \"card\" ünïcode  ");

        for body in &mut bodies {
            body.as_object_mut().unwrap().remove("input_value");
        }
        assert_eq!(
            serde_json::to_vec(&bodies[0]).unwrap(),
            serde_json::to_vec(&bodies[1]).unwrap()
        );
        assert_eq!(bodies[0]["tweaks"].as_object().unwrap().len(), 6);
    }
}
