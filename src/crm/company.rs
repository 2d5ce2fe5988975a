use uuid::Uuid;

/// Industry filter value that matches everything.
pub const ALL_INDUSTRIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Company {
	pub id: String,
	pub name: String,
	pub rank: u32,
	pub phone: String,
	pub industry: String,
	pub website: String,
	pub headquarters: String,
	pub description: String,
}

fn seed(
	id: &str,
	name: &str,
	rank: u32,
	phone: &str,
	industry: &str,
	website: &str,
	headquarters: &str,
	description: &str,
) -> Company {
	Company {
		id: id.into(),
		name: name.into(),
		rank,
		phone: phone.into(),
		industry: industry.into(),
		website: website.into(),
		headquarters: headquarters.into(),
		description: description.into(),
	}
}

/// The starting watch list.
pub fn seed_companies() -> Vec<Company> {
	vec![
		seed(
			"1",
			"Apple Inc.",
			1,
			"+1 (408) 996-1010",
			"Technology",
			"https://apple.com",
			"Cupertino, CA",
			"A global leader in consumer electronics, software, and services.",
		),
		seed(
			"2",
			"Microsoft Corp.",
			2,
			"+1 (425) 882-8080",
			"Software",
			"https://microsoft.com",
			"Redmond, WA",
			"Leading developer of personal computer software and cloud solutions.",
		),
		seed(
			"3",
			"Alphabet Inc.",
			3,
			"+1 (650) 253-0000",
			"Internet Services",
			"https://abc.xyz",
			"Mountain View, CA",
			"Parent company of Google, specializing in internet-related services.",
		),
		seed(
			"4",
			"Amazon.com Inc.",
			4,
			"+1 (206) 266-1000",
			"E-commerce & Cloud",
			"https://amazon.com",
			"Seattle, WA",
			"The world's largest online retailer and cloud service provider.",
		),
		seed(
			"5",
			"NVIDIA Corporation",
			5,
			"+1 (408) 486-2000",
			"Semiconductors",
			"https://nvidia.com",
			"Santa Clara, CA",
			"Leader in AI computing and high-performance graphics hardware.",
		),
		seed(
			"6",
			"Taiwan Semiconductor (TSMC)",
			6,
			"+886 3-563-6688",
			"Semiconductors",
			"https://tsmc.com",
			"Hsinchu, Taiwan",
			"World's largest dedicated independent semiconductor foundry.",
		),
	]
}

/// Search box plus industry dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyFilter {
	pub search: String,
	pub industry: String,
}

impl Default for CompanyFilter {
	fn default() -> Self {
		Self {
			search: String::new(),
			industry: ALL_INDUSTRIES.into(),
		}
	}
}

impl CompanyFilter {
	pub fn matches(&self, company: &Company) -> bool {
		let needle = self.search.to_lowercase();
		let text = company.name.to_lowercase().contains(&needle)
			|| company.industry.to_lowercase().contains(&needle);
		text && (self.industry == ALL_INDUSTRIES || company.industry == self.industry)
	}

	pub fn apply<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
		companies.iter().filter(|c| self.matches(c)).collect()
	}
}

/// `"All"` followed by each distinct industry in first-seen order.
pub fn industries(companies: &[Company]) -> Vec<String> {
	let mut out = vec![ALL_INDUSTRIES.to_string()];
	for company in companies {
		if !out.iter().skip(1).any(|i| *i == company.industry) {
			out.push(company.industry.clone());
		}
	}
	out
}

/// Form state for adding a company by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyDraft {
	pub name: String,
	pub industry: String,
	pub rank: i64,
	pub phone: String,
	pub website: String,
	pub headquarters: String,
}

impl CompanyDraft {
	pub fn is_complete(&self) -> bool {
		!self.name.trim().is_empty() && !self.industry.trim().is_empty()
	}

	/// `None` unless both name and industry are filled in. Unranked entries go to 999.
	pub fn build(&self) -> Option<Company> {
		if !self.is_complete() {
			return None;
		}
		let rank = u32::try_from(self.rank).ok().filter(|r| *r > 0).unwrap_or(999);
		Some(Company {
			id: Uuid::new_v4().simple().to_string(),
			name: self.name.trim().into(),
			rank,
			phone: self.phone.trim().into(),
			industry: self.industry.trim().into(),
			website: self.website.trim().into(),
			headquarters: self.headquarters.trim().into(),
			description: String::new(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn names(list: Vec<&Company>) -> Vec<&str> {
		list.into_iter().map(|c| c.name.as_str()).collect()
	}

	#[test]
	fn search_matches_name_or_industry_case_insensitively() {
		let companies = seed_companies();
		let filter = CompanyFilter {
			search: "SEMI".into(),
			..Default::default()
		};
		assert_eq!(
			names(filter.apply(&companies)),
			vec!["NVIDIA Corporation", "Taiwan Semiconductor (TSMC)"]
		);

		let filter = CompanyFilter {
			search: "micro".into(),
			..Default::default()
		};
		assert_eq!(names(filter.apply(&companies)), vec!["Microsoft Corp."]);
	}

	#[test]
	fn industry_filter_combines_with_search() {
		let companies = seed_companies();
		let filter = CompanyFilter {
			search: "taiwan".into(),
			industry: "Semiconductors".into(),
		};
		assert_eq!(names(filter.apply(&companies)), vec!["Taiwan Semiconductor (TSMC)"]);

		let filter = CompanyFilter {
			search: "apple".into(),
			industry: "Semiconductors".into(),
		};
		assert!(filter.apply(&companies).is_empty());
		assert_eq!(CompanyFilter::default().apply(&companies).len(), 6);
	}

	#[test]
	fn industries_are_distinct_in_first_seen_order() {
		assert_eq!(
			industries(&seed_companies()),
			vec![
				"All",
				"Technology",
				"Software",
				"Internet Services",
				"E-commerce & Cloud",
				"Semiconductors"
			]
		);
	}

	#[test]
	fn draft_requires_name_and_industry() {
		let draft = CompanyDraft {
			name: "Foxconn".into(),
			..Default::default()
		};
		assert_eq!(draft.build(), None);

		let draft = CompanyDraft {
			name: " Foxconn ".into(),
			industry: "Electronics".into(),
			..Default::default()
		};
		let company = draft.build().unwrap();
		assert_eq!(company.name, "Foxconn");
		assert_eq!(company.rank, 999);
		assert_eq!(company.id.len(), 32);
		assert_ne!(draft.build().unwrap().id, company.id);
	}

	#[test]
	fn positive_rank_is_kept() {
		let draft = CompanyDraft {
			name: "MediaTek".into(),
			industry: "Semiconductors".into(),
			rank: 42,
			..Default::default()
		};
		assert_eq!(draft.build().unwrap().rank, 42);
	}
}
