use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::layout::{Canvas, layout};
use super::render::{DomSurface, render};
use super::types::OrgNode;
use crate::fetch::FetchState;

/// Draws the org chart for the selected company, or a placeholder while
/// there is nothing to draw.
#[component]
pub fn OrgChart(
	#[prop(into)] chart: Signal<FetchState<OrgNode>>,
	#[prop(optional)] canvas: Option<Canvas>,
) -> impl IntoView {
	let canvas = canvas.unwrap_or_default();
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let has_tree = move || chart.with(|s| s.value().is_some());

	// Full redraw on every change of the tree or of the mounted host.
	Effect::new(move |_| {
		let Some(host) = host_ref.get() else {
			return;
		};
		let host: Element = host.unchecked_into();
		chart.with(|state| {
			let Some(root) = state.value() else {
				return;
			};
			debug!(
				"drawing org chart: {} nodes, {} levels",
				root.node_count(),
				root.depth() + 1
			);
			match DomSurface::attach(&host, &canvas) {
				Ok(mut surface) => render(&layout(root, &canvas), &mut surface),
				Err(err) => error!("could not attach org chart surface: {err:?}"),
			}
		});
	});

	let placeholder = move || {
		let message = chart.with(|state| match state {
			FetchState::Failed(reason) => format!("Could not generate the organization chart: {reason}"),
			FetchState::Loading => "Generating organization chart data...".to_string(),
			_ => "Select a company to generate its organization chart.".to_string(),
		});
		let failed = chart.with(|state| state.error().is_some());
		view! {
			<div class="org-chart-placeholder" class:failed=failed>
				<p>{message}</p>
			</div>
		}
	};

	view! {
		<Show when=has_tree fallback=placeholder>
			<div class="org-chart" node_ref=host_ref />
		</Show>
	}
}
