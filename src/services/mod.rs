//! Clients for the generative content API.

mod assistant;
mod gemini;

pub use assistant::{CrmAssistant, parse_jobs, parse_org_chart};
pub use gemini::GeminiClient;

use serde_json::Value;

use crate::error::ApiError;

/// One prompt, optionally constrained to a JSON response schema.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
	pub prompt: String,
	pub response_schema: Option<Value>,
}

impl GenerateRequest {
	pub fn text(prompt: impl Into<String>) -> Self {
		Self {
			prompt: prompt.into(),
			response_schema: None,
		}
	}

	pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
		Self {
			prompt: prompt.into(),
			response_schema: Some(schema),
		}
	}
}

/// A text generation backend. Returns the raw model text, which may be empty.
#[allow(async_fn_in_trait)]
pub trait GenerativeModel {
	async fn generate(&self, request: &GenerateRequest) -> Result<String, ApiError>;
}
