use leptos::prelude::*;

/// Labelled text input with an inline validation error slot
#[component]
pub fn Input(
    #[prop(into)] label: Signal<String>,
    /// Current value (reactive)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw input value on every keystroke
    on_input: Callback<String>,
    /// Input type attribute, defaults to "text"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Inline validation error shown under the field
    #[prop(optional, into)]
    error: MaybeProp<Option<String>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Force LTR contents inside an RTL page (phone numbers, prices)
    #[prop(optional, into)]
    ltr: MaybeProp<bool>,
) -> impl IntoView {
    let error_text = move || error.get().flatten();

    view! {
        <div class="form-group">
            <label class="form-group__label">{label}</label>
            <input
                class="form-group__input"
                class:form-group__input--error=move || error_text().is_some()
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get().unwrap_or_default()
                dir=move || if ltr.get().unwrap_or(false) { "ltr" } else { "auto" }
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error_text().map(|e| view! {
                <span class="form-group__error">{e}</span>
            })}
        </div>
    }
}
