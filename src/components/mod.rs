pub mod form;
pub mod org_chart;
pub mod sidebar;
