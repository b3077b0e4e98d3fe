use leptos::prelude::*;

/// Button in the dashboard design system.
///
/// Variants map to BEM modifiers: "primary" (default), "secondary", "ghost";
/// sizes: "md" (default), "sm".
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    /// Extra classes appended after the computed ones
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `type` attribute; defaults to "button" so forms don't submit by accident
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let mut classes = vec!["button".to_string()];
        classes.push(match variant.get().as_deref() {
            Some("secondary") => "button--secondary".to_string(),
            Some("ghost") => "button--ghost".to_string(),
            _ => "button--primary".to_string(),
        });
        if size.get().as_deref() == Some("sm") {
            classes.push("button--small".to_string());
        }
        if let Some(extra) = class.get() {
            classes.push(extra);
        }
        classes.join(" ")
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
