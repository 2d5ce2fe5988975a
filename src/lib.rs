//! Business-development CRM: a company watch list with AI generated
//! organization charts, job imports and outreach notes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};

// Modules
pub mod components;
pub mod config;
pub mod crm;
pub mod error;
pub mod fetch;
pub mod services;
pub mod store;
mod pages;

// Top-Level pages
use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::pages::companies::Companies;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::store::CrmStore;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router with the dashboard, the company board and a 404 page
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::from_env();
	if config.gemini.api_key.is_none() {
		warn!("GEMINI_API_KEY was not set at build time; AI features will fail");
	}
	provide_context(config);
	provide_context(CrmStore::new());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="G1K CRM" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="app-shell">
				<Sidebar />
				<main class="content">
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Home />
						<Route path=path!("/companies") view=Companies />
					</Routes>
				</main>
			</div>
		</Router>
	}
}
