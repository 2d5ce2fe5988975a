use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One person or role in a company's leadership hierarchy.
///
/// Every field tolerates being absent, `null` or of the wrong type in the
/// upstream JSON, so a leaf with `children` omitted and a leaf with
/// `children: []` are the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
	/// Display label for the person or role.
	#[serde(default, deserialize_with = "lenient_string")]
	pub name: String,
	/// Job title, possibly empty.
	#[serde(default, deserialize_with = "lenient_string")]
	pub title: String,
	/// Direct reports in display order.
	#[serde(default, deserialize_with = "lenient_children")]
	pub children: Vec<OrgNode>,
}

/// Read a string field, stringifying numbers and booleans. `null`, arrays and
/// objects become the empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::String(s) => s,
		Value::Number(n) => n.to_string(),
		Value::Bool(b) => b.to_string(),
		Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
	})
}

/// Read direct reports, skipping entries that are not objects.
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<OrgNode>, D::Error>
where
	D: Deserializer<'de>,
{
	let Value::Array(items) = Value::deserialize(deserializer)? else {
		return Ok(Vec::new());
	};
	Ok(items
		.into_iter()
		.filter_map(|item| match item {
			Value::Object(_) => serde_json::from_value(item)
				.map_err(|err| warn!("skipping malformed org chart entry: {err}"))
				.ok(),
			other => {
				warn!("skipping org chart entry that is not an object: {other}");
				None
			}
		})
		.collect())
}

impl OrgNode {
	/// Create a node without reports.
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			children: Vec::new(),
		}
	}

	/// Builder-style helper that appends a direct report.
	pub fn with_child(mut self, child: OrgNode) -> Self {
		self.children.push(child);
		self
	}

	/// True when the node has no direct reports.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Number of leaves in this subtree (a lone node counts as one).
	pub fn leaf_count(&self) -> usize {
		if self.is_leaf() {
			1
		} else {
			self.children.iter().map(OrgNode::leaf_count).sum()
		}
	}

	/// Deepest level below this node; a leaf has depth 0.
	pub fn depth(&self) -> usize {
		self.children
			.iter()
			.map(|c| c.depth() + 1)
			.max()
			.unwrap_or(0)
	}

	/// Total number of nodes in this subtree.
	pub fn node_count(&self) -> usize {
		1 + self.children.iter().map(OrgNode::node_count).sum::<usize>()
	}
}
