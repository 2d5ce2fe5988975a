//! In-memory CRM records: the tracked companies and what the user notes about them.

mod company;
mod jobs;
mod journal;
mod kpi;
mod plan;

pub use company::{ALL_INDUSTRIES, Company, CompanyDraft, CompanyFilter, industries, seed_companies};
pub use jobs::{JobPosition, JobSource};
pub use journal::{DEFAULT_AUTHOR, DevLog, LogBook, LogKind};
pub use kpi::{KpiMetric, PipelineStats, Trend};
pub use plan::{DevPlan, PlanBook};
