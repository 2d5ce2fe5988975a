use log::warn;
use serde_json::{Value, json};

use super::{GenerateRequest, GenerativeModel, GeminiClient};
use crate::components::org_chart::OrgNode;
use crate::config::GeminiConfig;
use crate::crm::{JobPosition, JobSource};
use crate::error::ApiError;

/// CRM-facing prompts on top of a [`GenerativeModel`].
///
/// Transport errors are returned; whatever text the model produces is parsed
/// leniently and never fails the call.
#[derive(Clone, Debug)]
pub struct CrmAssistant<M> {
	model: M,
}

impl CrmAssistant<GeminiClient> {
	pub fn from_config(config: &GeminiConfig) -> Self {
		Self::new(GeminiClient::new(config.clone()))
	}
}

fn person_schema(children: Option<Value>) -> Value {
	let mut properties = json!({
		"name": { "type": "STRING" },
		"title": { "type": "STRING" },
	});
	if let Some(items) = children {
		properties["children"] = json!({ "type": "ARRAY", "items": items });
	}
	json!({ "type": "OBJECT", "properties": properties })
}

/// Three levels: root, direct reports, and their reports.
fn org_chart_schema() -> Value {
	person_schema(Some(person_schema(Some(person_schema(None)))))
}

fn job_list_schema() -> Value {
	let field = json!({ "type": "STRING" });
	json!({
		"type": "ARRAY",
		"items": {
			"type": "OBJECT",
			"properties": {
				"id": field,
				"title": field,
				"salary": field,
				"experience": field,
				"description": field,
				"url": field,
			}
		}
	})
}

/// Models sometimes wrap JSON in a Markdown code fence.
fn strip_code_fence(text: &str) -> &str {
	let trimmed = text.trim();
	let Some(body) = trimmed.strip_prefix("```") else {
		return trimmed;
	};
	let body = body.strip_suffix("```").unwrap_or(body);
	// drop the info string, e.g. ```json, with or without a newline after it
	let info = body
		.find(|c: char| !c.is_ascii_alphanumeric())
		.unwrap_or(body.len());
	match body[info..].trim() {
		"" => body.trim(),
		rest => rest,
	}
}

fn parse_json(text: &str) -> Option<Value> {
	let body = strip_code_fence(text);
	if body.is_empty() {
		return None;
	}
	match serde_json::from_str(body) {
		Ok(value) => Some(value),
		Err(err) => {
			warn!("model returned malformed JSON: {err}");
			None
		}
	}
}

/// Read an org chart out of model text. Anything that is not a JSON object
/// becomes an empty root node.
pub fn parse_org_chart(text: &str) -> OrgNode {
	match parse_json(text) {
		Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|err| {
			warn!("org chart did not match the expected shape: {err}");
			OrgNode::default()
		}),
		Some(_) => {
			warn!("org chart response was not a JSON object");
			OrgNode::default()
		}
		None => OrgNode::default(),
	}
}

/// Read job listings out of model text, tagging each as a 104 listing.
/// Entries that are not objects are skipped; missing ids are filled in.
pub fn parse_jobs(text: &str) -> Vec<JobPosition> {
	let Some(Value::Array(items)) = parse_json(text) else {
		return Vec::new();
	};
	items
		.into_iter()
		.filter_map(|item| match item {
			Value::Object(_) => serde_json::from_value::<JobPosition>(item)
				.map_err(|err| warn!("skipping malformed job listing: {err}"))
				.ok(),
			other => {
				warn!("skipping job listing that is not an object: {other}");
				None
			}
		})
		.enumerate()
		.map(|(index, mut job)| {
			if job.id.trim().is_empty() {
				job.id = format!("104-{}", index + 1);
			}
			job.source = JobSource::Job104;
			job
		})
		.collect()
}

impl<M: GenerativeModel> CrmAssistant<M> {
	pub fn new(model: M) -> Self {
		Self { model }
	}

	pub fn model(&self) -> &M {
		&self.model
	}

	pub async fn generate_org_chart(&self, company: &str) -> Result<OrgNode, ApiError> {
		let request = GenerateRequest::json(
			format!(
				"Generate a simplified hierarchical HR organization chart for {company} in JSON format. \
				 Focus on C-level and high-level HR/Development leadership."
			),
			org_chart_schema(),
		);
		let text = self.model.generate(&request).await?;
		Ok(parse_org_chart(&text))
	}

	pub async fn simulate_job_import(&self, keyword: &str) -> Result<Vec<JobPosition>, ApiError> {
		let request = GenerateRequest::json(
			format!(
				"Simulate a search on 104 Job Bank for positions related to \"{keyword}\". \
				 Return a list of 3-5 relevant job positions in JSON format."
			),
			job_list_schema(),
		);
		let text = self.model.generate(&request).await?;
		Ok(parse_jobs(&text))
	}

	pub async fn suggest_development_strategy(&self, company: &str) -> Result<String, ApiError> {
		let request = GenerateRequest::text(format!(
			"Provide a strategic plan to develop business relationships with {company}. \
			 Include key decision-makers to target and typical hiring patterns for development roles."
		));
		Ok(self.model.generate(&request).await?.trim().to_string())
	}
}
