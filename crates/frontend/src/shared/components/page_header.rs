use leptos::prelude::*;

/// Page header with a title and an actions slot
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    /// Action buttons rendered on the trailing edge
    children: Children,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
            </div>
            <div class="header__actions">{children()}</div>
        </div>
    }
}
