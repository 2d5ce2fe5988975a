use leptos::prelude::*;

use crate::crm::KpiMetric;
use crate::store::use_store;

fn kpi_card(metric: KpiMetric) -> impl IntoView {
	let pct = metric.percentage();
	let trend = format!("{} {pct}%", metric.trend.symbol());
	view! {
		<div class="kpi-card">
			<p class="kpi-label">{metric.label}</p>
			<h4 class="kpi-value">
				{metric.current.to_string()}
				" "
				<span class="kpi-unit">{metric.unit}</span>
			</h4>
			<div class="kpi-progress">
				<div class="kpi-bar" style=format!("width: {}%", pct.min(100))></div>
			</div>
			<p class="kpi-trend">{trend}</p>
		</div>
	}
}

/// Dashboard with pipeline figures derived from the CRM store.
#[component]
pub fn Home() -> impl IntoView {
	let store = use_store();
	let metrics = move || store.stats().metrics();

	view! {
		<section class="dashboard">
			<header class="page-header">
				<p class="eyebrow">"Target Development Hub"</p>
				<h1>"Operations"</h1>
			</header>
			<div class="kpi-grid">
				{move || metrics().into_iter().map(kpi_card).collect_view()}
			</div>
			<div class="insight">
				<h3>"Market development notes"</h3>
				<p>
					"Semiconductor and AI infrastructure companies show the strongest hiring \
					 expansion this quarter. Focus outreach on supply-chain partners around \
					 Hsinchu, Taiwan."
				</p>
			</div>
		</section>
	}
}
