use leptos::prelude::*;

/// Labelled on/off switch
#[component]
pub fn Toggle(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle">
            <input
                type="checkbox"
                class="toggle__input"
                prop:checked=move || checked.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="toggle__track"></span>
            <span class="toggle__label">{label}</span>
        </label>
    }
}
