//! Build-time configuration.
//!
//! A CSR bundle has no process environment at runtime, so values are baked in
//! with `option_env!` when the WASM is compiled.

use log::Level;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeminiConfig {
	pub api_key: Option<String>,
	pub model: String,
	pub endpoint: String,
}

impl Default for GeminiConfig {
	fn default() -> Self {
		Self {
			api_key: None,
			model: DEFAULT_MODEL.into(),
			endpoint: DEFAULT_ENDPOINT.into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
	pub gemini: GeminiConfig,
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			gemini: GeminiConfig::default(),
			log_level: Level::Debug,
		}
	}
}

fn non_blank(value: Option<&str>) -> Option<String> {
	value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

impl AppConfig {
	/// Read the environment captured at compile time.
	pub fn from_env() -> Self {
		Self::from_values(
			option_env!("GEMINI_API_KEY").or(option_env!("API_KEY")),
			option_env!("GEMINI_MODEL"),
			option_env!("GEMINI_ENDPOINT"),
			option_env!("CRM_LOG_LEVEL"),
		)
	}

	/// Build a config from raw values; blank or unparsable entries fall back to defaults.
	pub fn from_values(
		api_key: Option<&str>,
		model: Option<&str>,
		endpoint: Option<&str>,
		log_level: Option<&str>,
	) -> Self {
		let defaults = Self::default();
		Self {
			gemini: GeminiConfig {
				api_key: non_blank(api_key),
				model: non_blank(model).unwrap_or(defaults.gemini.model),
				endpoint: non_blank(endpoint)
					.map(|e| e.trim_end_matches('/').to_string())
					.unwrap_or(defaults.gemini.endpoint),
			},
			log_level: log_level
				.and_then(|l| l.trim().parse().ok())
				.unwrap_or(defaults.log_level),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn blank_values_fall_back_to_defaults() {
		let config = AppConfig::from_values(Some("  "), Some(""), None, Some("loud"));
		assert_eq!(config, AppConfig::default());
	}

	#[test]
	fn explicit_values_are_used() {
		let config = AppConfig::from_values(
			Some("secret"),
			Some("gemini-2.5-pro"),
			Some("http://localhost:8080/v1/"),
			Some("warn"),
		);
		assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
		assert_eq!(config.gemini.model, "gemini-2.5-pro");
		assert_eq!(config.gemini.endpoint, "http://localhost:8080/v1");
		assert_eq!(config.log_level, Level::Warn);
	}
}
