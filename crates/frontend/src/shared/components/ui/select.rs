use leptos::prelude::*;

/// Labelled select over (value, label) pairs with an empty placeholder row
#[component]
pub fn Select(
    #[prop(into)] label: Signal<String>,
    /// (value, label) pairs, already localized and sorted by the caller
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Selected value; empty string means nothing selected
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] error: MaybeProp<Option<String>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let error_text = move || error.get().flatten();

    view! {
        <div class="form-group">
            <label class="form-group__label">{label}</label>
            <select
                class="form-group__input"
                class:form-group__input--error=move || error_text().is_some()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{"—"}</option>
                {move || options.get().into_iter().map(|(option_value, option_label)| {
                    let selected_value = option_value.clone();
                    view! {
                        <option
                            value=option_value
                            selected=move || value.get() == selected_value
                        >
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
            {move || error_text().map(|e| view! {
                <span class="form-group__error">{e}</span>
            })}
        </div>
    }
}
