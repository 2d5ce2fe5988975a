use leptos::prelude::*;

/// Labelled text input bound to one field of a signal's value.
pub fn text_field<T>(
	state: RwSignal<T>,
	label: &'static str,
	get: fn(&T) -> String,
	set: fn(&mut T, String),
) -> impl IntoView
where
	T: Send + Sync + 'static,
{
	view! {
		<label class="field">
			<span class="field-label">{label}</span>
			<input
				type="text"
				placeholder=label
				prop:value=move || state.with(get)
				on:input=move |ev| {
					let value = event_target_value(&ev);
					state.update(|s| set(s, value));
				}
			/>
		</label>
	}
}
