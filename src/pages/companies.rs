use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::form::text_field;
use crate::components::org_chart::{OrgChart, OrgNode};
use crate::config::AppConfig;
use crate::crm::{
	Company, CompanyDraft, CompanyFilter, DevLog, DevPlan, JobPosition, LogKind, industries,
};
use crate::error::ApiError;
use crate::fetch::{FetchMachine, FetchState};
use crate::services::CrmAssistant;
use crate::store::use_store;

/// Start `request` on the local executor and feed its outcome back into `machine`.
fn dispatch<T, Fut>(machine: RwSignal<FetchMachine<T>>, key: String, request: Fut)
where
	T: Send + Sync + 'static,
	Fut: Future<Output = Result<T, ApiError>> + 'static,
{
	let Some(token) = machine.try_update(|m| m.begin(key)) else {
		return;
	};
	spawn_local(async move {
		let outcome = request.await;
		// the page may have been left while the request was in flight
		let _ = machine.try_update(|m| m.resolve(token, outcome));
	});
}

fn today() -> String {
	String::from(js_sys::Date::new_0().to_iso_string())
		.chars()
		.take(10)
		.collect()
}

/// Company board: filterable list on the left, selected company on the right.
#[component]
pub fn Companies() -> impl IntoView {
	let store = use_store();
	let gemini = StoredValue::new(expect_context::<AppConfig>().gemini);

	let filter = RwSignal::new(CompanyFilter::default());
	let selected = RwSignal::new(None::<Company>);
	let chart = RwSignal::new(FetchMachine::<OrgNode>::default());
	let jobs = RwSignal::new(FetchMachine::<Vec<JobPosition>>::default());
	let strategy = RwSignal::new(FetchMachine::<String>::default());
	let adding = RwSignal::new(false);

	let sync_jobs = move |name: String| {
		let assistant = gemini.with_value(CrmAssistant::from_config);
		let keyword = name.clone();
		dispatch(jobs, name, async move {
			assistant.simulate_job_import(&keyword).await
		});
	};

	let select = move |company: Company| {
		let assistant = gemini.with_value(CrmAssistant::from_config);
		let name = company.name.clone();
		selected.set(Some(company));
		strategy.update(FetchMachine::reset);
		sync_jobs(name.clone());
		let company = name.clone();
		dispatch(chart, name, async move {
			assistant.generate_org_chart(&company).await
		});
	};

	let suggest = move |name: String| {
		let assistant = gemini.with_value(CrmAssistant::from_config);
		let company = name.clone();
		dispatch(strategy, name, async move {
			assistant.suggest_development_strategy(&company).await
		});
	};

	let on_select = Callback::new(select);
	let on_created = Callback::new(move |company: Company| {
		store.add_company(company.clone());
		select(company);
	});

	let detail = move || {
		selected.get().map(|company| {
			view! {
				<CompanyDetail
					company=company
					chart=chart
					jobs=jobs
					strategy=strategy
					on_sync_jobs=Callback::new(sync_jobs)
					on_suggest=Callback::new(suggest)
				/>
			}
		})
	};

	view! {
		<section class="companies">
			<header class="page-header">
				<p class="eyebrow">"Target Development Hub"</p>
				<h1>"Company Board"</h1>
			</header>
			<div class="board">
				<CompanyList filter=filter selected=selected on_select=on_select adding=adding />
				<div class="detail">
					<Show when=move || selected.with(Option::is_some) fallback=|| view! {
						<div class="empty-detail">
							<h3>"Select a target company"</h3>
							<p>
								"Picking a company generates its AI organization chart and \
								 pulls matching 104 job openings."
							</p>
						</div>
					}>
						{detail}
					</Show>
				</div>
			</div>
			<AddCompanyModal open=adding on_created=on_created />
		</section>
	}
}

#[component]
fn CompanyList(
	filter: RwSignal<CompanyFilter>,
	selected: RwSignal<Option<Company>>,
	on_select: Callback<Company>,
	adding: RwSignal<bool>,
) -> impl IntoView {
	let store = use_store();
	let options = move || {
		store
			.companies
			.with(|all| industries(all))
			.into_iter()
			.map(|industry| view! { <option value=industry.clone()>{industry.clone()}</option> })
			.collect_view()
	};
	let visible = move || {
		let filter = filter.get();
		store
			.companies
			.with(|all| filter.apply(all).into_iter().cloned().collect::<Vec<_>>())
	};

	view! {
		<div class="company-list">
			<div class="list-tools">
				<input
					type="text"
					placeholder="Search name or industry"
					prop:value=move || filter.with(|f| f.search.clone())
					on:input=move |ev| {
						let search = event_target_value(&ev);
						filter.update(|f| f.search = search);
					}
				/>
				<select
					prop:value=move || filter.with(|f| f.industry.clone())
					on:change=move |ev| {
						let industry = event_target_value(&ev);
						filter.update(|f| f.industry = industry);
					}
				>
					{options}
				</select>
				<button class="primary" on:click=move |_| adding.set(true)>"+ Add company"</button>
			</div>
			<For
				each=visible
				key=|company| company.id.clone()
				children=move |company: Company| {
					let id = company.id.clone();
					let is_selected = move || {
						selected.with(|s| s.as_ref().is_some_and(|c| c.id == id))
					};
					let rank = format!("#{}", company.rank);
					let name = company.name.clone();
					let industry = company.industry.clone();
					view! {
						<button
							class="company-row"
							class:selected=is_selected
							on:click=move |_| on_select.run(company.clone())
						>
							<span class="rank">{rank}</span>
							<span class="name">{name}</span>
							<span class="industry">{industry}</span>
						</button>
					}
				}
			/>
		</div>
	}
}

#[component]
fn CompanyDetail(
	company: Company,
	chart: RwSignal<FetchMachine<OrgNode>>,
	jobs: RwSignal<FetchMachine<Vec<JobPosition>>>,
	strategy: RwSignal<FetchMachine<String>>,
	on_sync_jobs: Callback<String>,
	on_suggest: Callback<String>,
) -> impl IntoView {
	let chart_state = Signal::derive(move || chart.with(|m| m.state().clone()));
	let name = StoredValue::new(company.name.clone());

	view! {
		<article class="company-detail">
			<header class="company-card">
				<h2>{company.name.clone()}</h2>
				<p class="meta">
					{format!("{} · {} · {}", company.industry, company.headquarters, company.phone)}
				</p>
				<a href=company.website.clone() target="_blank" rel="noopener">
					{company.website.clone()}
				</a>
				<p class="description">{company.description.clone()}</p>
			</header>

			<PlanPanel company_id=company.id.clone() />

			<div class="panels">
				<section class="panel chart-panel">
					<h4>"AI organization chart"</h4>
					<OrgChart chart=chart_state />
				</section>

				<section class="panel jobs-panel">
					<div class="panel-head">
						<h4>"104 live openings"</h4>
						<button on:click=move |_| on_sync_jobs.run(name.get_value())>"REFRESH"</button>
					</div>
					{move || jobs.with(|m| job_list(m.state()))}
				</section>

				<section class="panel strategy-panel">
					<div class="panel-head">
						<h4>"Development strategy (AI)"</h4>
						<button on:click=move |_| on_suggest.run(name.get_value())>"SUGGEST"</button>
					</div>
					{move || strategy.with(|m| match m.state() {
						FetchState::Loading => view! { <p class="muted">"Drafting a plan..."</p> }.into_any(),
						FetchState::Ready(text) => view! { <p class="strategy">{text.clone()}</p> }.into_any(),
						FetchState::Failed(reason) => view! { <p class="error">{reason.clone()}</p> }.into_any(),
						FetchState::Empty => view! { <p class="muted">"Ask for a suggested approach."</p> }.into_any(),
					})}
				</section>

				<LogPanel company_id=company.id.clone() />
			</div>
		</article>
	}
}

fn job_list(state: &FetchState<Vec<JobPosition>>) -> AnyView {
	match state {
		FetchState::Loading => view! { <div class="skeleton">"Syncing openings..."</div> }.into_any(),
		FetchState::Failed(reason) => view! { <p class="error">{reason.clone()}</p> }.into_any(),
		FetchState::Ready(list) if !list.is_empty() => list
			.iter()
			.take(4)
			.map(|job| {
				view! {
					<a class="job" href=job.url.clone() target="_blank" rel="noopener">
						<h5>{job.title.clone()}</h5>
						<p class="salary">{job.salary.clone()}</p>
						<p class="experience">{job.experience.clone()}</p>
					</a>
				}
			})
			.collect_view()
			.into_any(),
		_ => view! { <p class="muted">"Press refresh to fetch openings."</p> }.into_any(),
	}
}

fn or_dash(value: &str) -> String {
	if value.trim().is_empty() {
		"-".into()
	} else {
		value.to_string()
	}
}

#[component]
fn PlanPanel(company_id: String) -> impl IntoView {
	let store = use_store();
	let id = StoredValue::new(company_id);
	let editing = RwSignal::new(None::<DevPlan>);

	let saved = move || id.with_value(|id| store.plans.with(|p| p.get(id).cloned()));
	let start_edit = move |_| {
		editing.set(Some(id.with_value(|id| store.plans.with_untracked(|p| p.draft(id)))));
	};
	let save = move |_| {
		if let Some(plan) = editing.get_untracked() {
			id.with_value(|id| store.plans.update(|p| p.save(id.clone(), plan)));
		}
		editing.set(None);
	};
	let has_line = move || editing.with(|e| e.as_ref().is_some_and(|p| p.has_line));

	let summary = move || {
		let plan = saved().unwrap_or_default();
		let line = if plan.has_line {
			format!("✅ {}", plan.line_id)
		} else {
			"Not connected".to_string()
		};
		let notes = if plan.notes.trim().is_empty() {
			"No strategy notes yet...".to_string()
		} else {
			plan.notes.clone()
		};
		view! {
			<div class="plan-summary">
				<div><span class="caption">"HR contact"</span><span>{or_dash(&plan.hr_contact)}</span></div>
				<div><span class="caption">"Contact details"</span><span>{or_dash(&plan.contact_info)}</span></div>
				<div><span class="caption">"LINE"</span><span class:connected=plan.has_line>{line}</span></div>
				<div class="notes"><span class="caption">"Strategy notes"</span><span>{notes}</span></div>
			</div>
		}
	};

	view! {
		<section class="panel plan-panel">
			<div class="panel-head">
				<h4>"Development plan"</h4>
				<Show when=move || editing.with(Option::is_none)>
					<button on:click=start_edit>
						{move || if saved().is_some() { "Edit plan" } else { "Start developing" }}
					</button>
				</Show>
			</div>
			<Show when=move || editing.with(Option::is_some) fallback=summary>
				<div class="plan-editor">
					{text_field(
						editing,
						"HR contact",
						|e| e.as_ref().map(|p| p.hr_contact.clone()).unwrap_or_default(),
						|e, v| if let Some(p) = e { p.hr_contact = v },
					)}
					{text_field(
						editing,
						"Contact details",
						|e| e.as_ref().map(|p| p.contact_info.clone()).unwrap_or_default(),
						|e, v| if let Some(p) = e { p.contact_info = v },
					)}
					<label class="field line-field">
						<span class="field-label">"LINE"</span>
						<input
							type="checkbox"
							prop:checked=has_line
							on:change=move |ev| {
								let checked = event_target_checked(&ev);
								editing.update(|e| if let Some(p) = e { p.has_line = checked });
							}
						/>
						<input
							type="text"
							placeholder="ID"
							prop:disabled=move || !has_line()
							prop:value=move || editing.with(|e| e.as_ref().map(|p| p.line_id.clone()).unwrap_or_default())
							on:input=move |ev| {
								let value = event_target_value(&ev);
								editing.update(|e| if let Some(p) = e { p.line_id = value });
							}
						/>
					</label>
					{text_field(
						editing,
						"Strategy notes",
						|e| e.as_ref().map(|p| p.notes.clone()).unwrap_or_default(),
						|e, v| if let Some(p) = e { p.notes = v },
					)}
					<div class="actions">
						<button class="primary" on:click=save>"Save"</button>
						<button on:click=move |_| editing.set(None)>"Cancel"</button>
					</div>
				</div>
			</Show>
		</section>
	}
}

#[component]
fn LogPanel(company_id: String) -> impl IntoView {
	let store = use_store();
	let id = StoredValue::new(company_id);
	let draft = RwSignal::new(String::new());
	let kind = RwSignal::new(LogKind::Note);
	let editing_id = RwSignal::new(None::<String>);
	let edit_text = RwSignal::new(String::new());

	let add = move |_| {
		let content = draft.get_untracked();
		let added = id.with_value(|id| {
			store
				.logs
				.try_update(|book| book.add(id, today(), &content, kind.get_untracked()).is_some())
		});
		if added == Some(true) {
			draft.set(String::new());
		}
	};
	let entries = move || id.with_value(|id| store.logs.with(|book| book.entries(id).to_vec()));

	view! {
		<section class="panel log-panel">
			<div class="panel-head">
				<h4>"Development journal (newest first)"</h4>
				<span class="today">{format!("TODAY: {}", today())}</span>
			</div>
			<div class="log-compose">
				<select on:change=move |ev| {
					let label = event_target_value(&ev);
					if let Some(k) = LogKind::ALL.into_iter().find(|k| k.label() == label) {
						kind.set(k);
					}
				}>
					{LogKind::ALL
						.into_iter()
						.map(|k| view! { <option value=k.label()>{k.label()}</option> })
						.collect_view()}
				</select>
				<input
					type="text"
					placeholder="Record today's progress..."
					prop:value=move || draft.get()
					on:input=move |ev| draft.set(event_target_value(&ev))
				/>
				<button class="primary" on:click=add>"ADD LOG"</button>
			</div>
			<div class="log-grid">
				<For
					each=entries
					key=|log| (log.id.clone(), log.content.clone())
					children=move |log| {
						let log_id = StoredValue::new(log.id.clone());
						let is_editing = move || {
							log_id.with_value(|l| editing_id.with(|e| e.as_deref() == Some(l.as_str())))
						};
						let DevLog { date, content, kind, .. } = log;
						let body = content.clone();
						let start_edit = move |_| {
							edit_text.set(content.clone());
							editing_id.set(Some(log_id.get_value()));
						};
						let save_edit = move |_| {
							let text = edit_text.get_untracked();
							let changed = id.with_value(|id| {
								log_id.with_value(|l| store.logs.try_update(|book| book.edit(id, l, &text)))
							});
							if changed == Some(true) {
								editing_id.set(None);
							}
						};
						let delete = move |_| {
							id.with_value(|id| {
								log_id.with_value(|l| store.logs.update(|book| {
									book.delete(id, l);
								}))
							});
						};
						view! {
							<div class="log-entry">
								<div class="log-head">
									<span class="log-date">{date}</span>
									<span class="log-kind">{kind.label()}</span>
									<button class="link" on:click=start_edit>"EDIT"</button>
									<button class="link danger" on:click=delete>"DELETE"</button>
								</div>
								<Show
									when=is_editing
									fallback=move || view! { <p class="log-content">{body.clone()}</p> }
								>
									<input
										type="text"
										prop:value=move || edit_text.get()
										on:input=move |ev| edit_text.set(event_target_value(&ev))
									/>
									<button class="primary" on:click=save_edit>"Save"</button>
									<button on:click=move |_| editing_id.set(None)>"Cancel"</button>
								</Show>
							</div>
						}
					}
				/>
			</div>
		</section>
	}
}

#[component]
fn AddCompanyModal(open: RwSignal<bool>, on_created: Callback<Company>) -> impl IntoView {
	let draft = RwSignal::new(CompanyDraft::default());
	let submit = move |_| {
		if let Some(company) = draft.with_untracked(CompanyDraft::build) {
			draft.set(CompanyDraft::default());
			open.set(false);
			on_created.run(company);
		}
	};

	view! {
		<Show when=move || open.get()>
			<div class="modal-backdrop">
				<div class="modal">
					<header class="modal-head">
						<h3>"New target company"</h3>
						<p>"Enter company details to add it to the CRM watch list."</p>
					</header>
					<div class="modal-body">
						{text_field(draft, "Company name", |d| d.name.clone(), |d, v| d.name = v)}
						{text_field(draft, "Industry", |d| d.industry.clone(), |d, v| d.industry = v)}
						<label class="field">
							<span class="field-label">"Global rank / priority"</span>
							<input
								type="number"
								prop:value=move || draft.with(|d| d.rank.to_string())
								on:input=move |ev| {
									let rank = event_target_value(&ev).parse().unwrap_or(0);
									draft.update(|d| d.rank = rank);
								}
							/>
						</label>
						{text_field(draft, "Headquarters", |d| d.headquarters.clone(), |d, v| d.headquarters = v)}
						{text_field(draft, "Phone", |d| d.phone.clone(), |d, v| d.phone = v)}
						{text_field(draft, "Website", |d| d.website.clone(), |d, v| d.website = v)}
					</div>
					<div class="actions">
						<button on:click=move |_| open.set(false)>"Cancel"</button>
						<button
							class="primary"
							prop:disabled=move || !draft.with(CompanyDraft::is_complete)
							on:click=submit
						>
							"Add to watch list"
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}
