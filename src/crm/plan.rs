use std::collections::HashMap;

/// Manually entered outreach plan for one company.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DevPlan {
	pub hr_contact: String,
	pub contact_info: String,
	pub has_line: bool,
	pub line_id: String,
	pub notes: String,
}

/// Plans keyed by company id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanBook {
	plans: HashMap<String, DevPlan>,
}

impl PlanBook {
	pub fn get(&self, company_id: &str) -> Option<&DevPlan> {
		self.plans.get(company_id)
	}

	/// Working copy for the edit form: the saved plan, or a blank one.
	pub fn draft(&self, company_id: &str) -> DevPlan {
		self.get(company_id).cloned().unwrap_or_default()
	}

	pub fn save(&mut self, company_id: impl Into<String>, mut plan: DevPlan) {
		if !plan.has_line {
			plan.line_id.clear();
		}
		self.plans.insert(company_id.into(), plan);
	}
}
