//! Wire types of the flow run API.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a run request. Only `input_value` varies between calls.
#[derive(Debug, Serialize)]
pub struct RunRequest<'a> {
    pub input_value: &'a str,
    pub output_type: &'static str,
    pub input_type: &'static str,
    pub tweaks: Map<String, Value>,
}

impl<'a> RunRequest<'a> {
    /// Build a chat-in/chat-out request with an empty tweak per component.
    pub fn chat(input_value: &'a str, components: &[String]) -> Self {
        let tweaks = components
            .iter()
            .map(|c| (c.clone(), Value::Object(Map::new())))
            .collect();

        Self {
            input_value,
            output_type: "chat",
            input_type: "chat",
            tweaks,
        }
    }
}

/// Successful run response: `outputs[0].outputs[0].results.message.text`.
#[derive(Debug, Deserialize)]
pub struct RunResponse {
    pub outputs: Vec<RunOutput>,
}

#[derive(Debug, Deserialize)]
pub struct RunOutput {
    pub outputs: Vec<ComponentOutput>,
}

#[derive(Debug, Deserialize)]
pub struct ComponentOutput {
    pub results: ComponentResults,
}

#[derive(Debug, Deserialize)]
pub struct ComponentResults {
    pub message: ResultMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResultMessage {
    pub text: String,
}

impl RunResponse {
    /// Decode a response body, checking every nesting level.
    pub fn decode(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }

    /// Take the answer text out of the first output of the first run.
    pub fn into_text(self) -> Result<String> {
        let run = self
            .outputs
            .into_iter()
            .next()
            .ok_or_else(|| Error::MalformedResponse("`outputs` is empty".into()))?;

        let component = run
            .outputs
            .into_iter()
            .next()
            .ok_or_else(|| Error::MalformedResponse("`outputs[0].outputs` is empty".into()))?;

        Ok(component.results.message.text)
    }
}

/// Pick the human-readable detail for a failed call.
///
/// A `message` in the remote error body wins when it is a non-empty string,
/// a non-zero number or `true`; otherwise the transport's own error text is
/// used.
pub fn error_detail(body: Option<&Value>, fallback: &str) -> String {
    match body.and_then(|b| b.get("message")) {
        Some(Value::String(m)) if !m.is_empty() => m.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => fallback.to_string(),
    }
}
