use leptos::prelude::*;
use leptos_router::components::A;

use crate::crm::DEFAULT_AUTHOR;

#[component]
pub fn Sidebar() -> impl IntoView {
	view! {
		<aside class="sidebar">
			<div class="brand">
				<span class="badge">"G1K"</span>
				<span>"CRM"</span>
			</div>
			<nav class="nav">
				<A href="/">"Dashboard"</A>
				<A href="/companies">"Company List"</A>
			</nav>
			<div class="profile">
				<p class="profile-name">{DEFAULT_AUTHOR}</p>
				<p class="profile-mail">"bd.lead@g1000.com"</p>
			</div>
		</aside>
	}
}
