use serde::{Deserialize, Serialize};

use crate::components::org_chart::lenient_string;

/// Where a job listing came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSource {
	/// The 104 Job Bank.
	#[default]
	#[serde(rename = "104")]
	Job104,
	Internal,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosition {
	#[serde(default, deserialize_with = "lenient_string")]
	pub id: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub title: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub salary: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub experience: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub description: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub url: String,
	/// Assigned by the importer, never read from the payload.
	#[serde(skip_deserializing)]
	pub source: JobSource,
}
