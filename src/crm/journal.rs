use std::collections::HashMap;

use uuid::Uuid;

pub const DEFAULT_AUTHOR: &str = "Senior BD Manager";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogKind {
	#[default]
	Note,
	Meeting,
	Call,
	Insight,
}

impl LogKind {
	pub const ALL: [LogKind; 4] = [LogKind::Note, LogKind::Meeting, LogKind::Call, LogKind::Insight];

	pub fn label(self) -> &'static str {
		match self {
			LogKind::Note => "Note",
			LogKind::Meeting => "Meeting",
			LogKind::Call => "Call",
			LogKind::Insight => "Insight",
		}
	}
}

/// One development-journal entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevLog {
	pub id: String,
	/// `YYYY-MM-DD`.
	pub date: String,
	pub content: String,
	pub kind: LogKind,
	pub author: String,
}

/// Journal entries per company id, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogBook {
	entries: HashMap<String, Vec<DevLog>>,
}

impl LogBook {
	pub fn entries(&self, company_id: &str) -> &[DevLog] {
		self.entries.get(company_id).map(Vec::as_slice).unwrap_or_default()
	}

	/// Prepend an entry. Blank content is ignored and yields `None`.
	pub fn add(
		&mut self,
		company_id: &str,
		date: impl Into<String>,
		content: &str,
		kind: LogKind,
	) -> Option<&DevLog> {
		if content.trim().is_empty() {
			return None;
		}
		let entry = DevLog {
			id: Uuid::new_v4().simple().to_string(),
			date: date.into(),
			content: content.to_string(),
			kind,
			author: DEFAULT_AUTHOR.into(),
		};
		let list = self.entries.entry(company_id.to_string()).or_default();
		list.insert(0, entry);
		list.first()
	}

	pub fn delete(&mut self, company_id: &str, log_id: &str) -> bool {
		let Some(list) = self.entries.get_mut(company_id) else {
			return false;
		};
		let before = list.len();
		list.retain(|l| l.id != log_id);
		list.len() != before
	}

	/// Replace an entry's text. Blank replacements are rejected.
	pub fn edit(&mut self, company_id: &str, log_id: &str, content: &str) -> bool {
		if content.trim().is_empty() {
			return false;
		}
		let entry = self
			.entries
			.get_mut(company_id)
			.and_then(|list| list.iter_mut().find(|l| l.id == log_id));
		match entry {
			Some(entry) => {
				entry.content = content.to_string();
				true
			}
			None => false,
		}
	}

	pub fn total(&self) -> usize {
		self.entries.values().map(Vec::len).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn entries_are_newest_first() {
		let mut book = LogBook::default();
		book.add("1", "2026-10-01", "sent intro deck", LogKind::Note);
		book.add("1", "2026-10-02", "call with HR", LogKind::Call);

		let contents: Vec<&str> = book.entries("1").iter().map(|l| l.content.as_str()).collect();
		assert_eq!(contents, vec!["call with HR", "sent intro deck"]);
		assert_eq!(book.entries("1")[0].author, DEFAULT_AUTHOR);
		assert!(book.entries("2").is_empty());
	}

	#[test]
	fn blank_entries_are_ignored() {
		let mut book = LogBook::default();
		assert!(book.add("1", "2026-10-01", "   ", LogKind::Note).is_none());
		assert_eq!(book.total(), 0);
	}

	#[test]
	fn edit_and_delete_by_id() {
		let mut book = LogBook::default();
		let id = book
			.add("1", "2026-10-01", "first draft", LogKind::Meeting)
			.map(|l| l.id.clone())
			.unwrap();

		assert!(!book.edit("1", &id, ""));
		assert!(book.edit("1", &id, "final wording"));
		assert_eq!(book.entries("1")[0].content, "final wording");

		assert!(!book.delete("2", &id));
		assert!(book.delete("1", &id));
		assert!(!book.delete("1", &id));
		assert_eq!(book.total(), 0);
	}
}
