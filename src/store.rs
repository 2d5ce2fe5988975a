//! Application-wide CRM state shared through Leptos context.

use leptos::prelude::*;

use crate::crm::{Company, LogBook, PipelineStats, PlanBook, seed_companies};

/// Signals for everything the user edits. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct CrmStore {
	pub companies: RwSignal<Vec<Company>>,
	pub plans: RwSignal<PlanBook>,
	pub logs: RwSignal<LogBook>,
}

impl CrmStore {
	pub fn new() -> Self {
		Self {
			companies: RwSignal::new(seed_companies()),
			plans: RwSignal::new(PlanBook::default()),
			logs: RwSignal::new(LogBook::default()),
		}
	}

	/// Prepend a manually added company.
	pub fn add_company(&self, company: Company) {
		self.companies.update(|list| list.insert(0, company));
	}

	pub fn stats(&self) -> PipelineStats {
		self.companies.with(|companies| {
			self.plans.with(|plans| self.logs.with(|logs| PipelineStats::compute(companies, plans, logs)))
		})
	}
}

impl Default for CrmStore {
	fn default() -> Self {
		Self::new()
	}
}

pub fn use_store() -> CrmStore {
	expect_context::<CrmStore>()
}
