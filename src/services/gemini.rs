use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{GenerateRequest, GenerativeModel};
use crate::config::GeminiConfig;
use crate::error::ApiError;

/// REST client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiClient {
	http: reqwest::Client,
	config: GeminiConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
	contents: [Content<'a>; 1],
	#[serde(skip_serializing_if = "Option::is_none")]
	generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
	parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
	text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
	response_mime_type: &'static str,
	response_schema: &'a Value,
}

impl<'a> From<&'a GenerateRequest> for GenerateContentBody<'a> {
	fn from(request: &'a GenerateRequest) -> Self {
		Self {
			contents: [Content {
				parts: [TextPart {
					text: &request.prompt,
				}],
			}],
			generation_config: request.response_schema.as_ref().map(|schema| GenerationConfig {
				response_mime_type: "application/json",
				response_schema: schema,
			}),
		}
	}
}

#[derive(Deserialize)]
struct GenerateContentResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
	#[serde(default)]
	content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
	#[serde(default)]
	text: Option<String>,
}

/// Concatenated text of the first candidate; empty when there is none.
fn extract_text(body: &str) -> Result<String, ApiError> {
	let response: GenerateContentResponse = serde_json::from_str(body)?;
	let Some(candidate) = response.candidates.into_iter().next() else {
		warn!("generateContent returned no candidates");
		return Ok(String::new());
	};
	Ok(candidate
		.content
		.map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
		.unwrap_or_default())
}

impl GeminiClient {
	pub fn new(config: GeminiConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	fn url(&self) -> String {
		format!(
			"{}/models/{}:generateContent",
			self.config.endpoint, self.config.model
		)
	}
}

impl GenerativeModel for GeminiClient {
	async fn generate(&self, request: &GenerateRequest) -> Result<String, ApiError> {
		let key = self
			.config
			.api_key
			.as_deref()
			.ok_or(ApiError::MissingApiKey)?;
		debug!("generateContent: model={}", self.config.model);

		let response = self
			.http
			.post(self.url())
			.header("x-goog-api-key", key)
			.json(&GenerateContentBody::from(request))
			.send()
			.await?;
		let status = response.status();
		let body = response.text().await?;
		if !status.is_success() {
			return Err(ApiError::Status {
				status: status.as_u16(),
				body,
			});
		}
		extract_text(&body)
	}
}
