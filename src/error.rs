use thiserror::Error;

/// Failures talking to the generative content API.
///
/// Malformed model output is not an error: callers degrade it to defaults.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("no Gemini API key configured (set GEMINI_API_KEY at build time)")]
	MissingApiKey,
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("API returned HTTP {status}: {body}")]
	Status { status: u16, body: String },
	#[error("could not decode API response: {0}")]
	Decode(#[from] serde_json::Error),
}
