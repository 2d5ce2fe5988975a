use super::{Company, LogBook, PlanBook};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trend {
	Up,
	Down,
	#[default]
	Stable,
}

impl Trend {
	pub fn symbol(self) -> &'static str {
		match self {
			Trend::Up => "▲",
			Trend::Down => "▼",
			Trend::Stable => "■",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct KpiMetric {
	pub label: String,
	pub target: f64,
	pub current: f64,
	pub unit: String,
	pub trend: Trend,
}

impl KpiMetric {
	pub fn new(label: impl Into<String>, target: f64, current: f64, unit: impl Into<String>) -> Self {
		let trend = if current >= target && target > 0.0 {
			Trend::Up
		} else if current <= 0.0 {
			Trend::Down
		} else {
			Trend::Stable
		};
		Self {
			label: label.into(),
			target,
			current,
			unit: unit.into(),
			trend,
		}
	}

	/// Progress toward target, rounded; 0 when there is no target.
	pub fn percentage(&self) -> u32 {
		if self.target <= 0.0 {
			return 0;
		}
		(self.current / self.target * 100.0).round().max(0.0) as u32
	}
}

/// Headline figures for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
	pub tracked: usize,
	pub with_plan: usize,
	pub log_entries: usize,
}

impl PipelineStats {
	pub fn compute(companies: &[Company], plans: &PlanBook, logs: &LogBook) -> Self {
		Self {
			tracked: companies.len(),
			with_plan: companies.iter().filter(|c| plans.get(&c.id).is_some()).count(),
			log_entries: companies.iter().map(|c| logs.entries(&c.id).len()).sum(),
		}
	}

	pub fn metrics(&self) -> Vec<KpiMetric> {
		vec![
			KpiMetric::new("Tracked companies", self.tracked as f64, self.tracked as f64, "companies"),
			KpiMetric::new(
				"Plans in development",
				self.tracked as f64,
				self.with_plan as f64,
				"plans",
			),
			KpiMetric::new(
				"Journal entries",
				(self.tracked * 2) as f64,
				self.log_entries as f64,
				"entries",
			),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::crm::{DevPlan, LogKind, seed_companies};
	use pretty_assertions::assert_eq;

	#[test]
	fn percentage_rounds_and_guards_zero_target() {
		assert_eq!(KpiMetric::new("x", 3.0, 2.0, "").percentage(), 67);
		assert_eq!(KpiMetric::new("x", 0.0, 5.0, "").percentage(), 0);
		assert_eq!(KpiMetric::new("x", 4.0, 6.0, "").percentage(), 150);
	}

	#[test]
	fn trend_reflects_progress() {
		assert_eq!(KpiMetric::new("x", 2.0, 2.0, "").trend, Trend::Up);
		assert_eq!(KpiMetric::new("x", 2.0, 1.0, "").trend, Trend::Stable);
		assert_eq!(KpiMetric::new("x", 2.0, 0.0, "").trend, Trend::Down);
	}

	#[test]
	fn stats_count_only_tracked_companies() {
		let companies = seed_companies();
		let mut plans = PlanBook::default();
		plans.save("1", DevPlan::default());
		plans.save("deleted", DevPlan::default());
		let mut logs = LogBook::default();
		logs.add("1", "2026-10-01", "intro", LogKind::Note);
		logs.add("2", "2026-10-01", "call", LogKind::Call);

		let stats = PipelineStats::compute(&companies, &plans, &logs);
		assert_eq!(
			stats,
			PipelineStats {
				tracked: 6,
				with_plan: 1,
				log_entries: 2
			}
		);
		assert_eq!(stats.metrics()[1].percentage(), 17);
	}
}
