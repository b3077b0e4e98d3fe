//! Sidebar with one entry per dashboard page

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::Page;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let i18n = use_i18n();

    view! {
        <Show when=move || ctx.sidebar_open.get()>
            <nav class="sidebar">
                <ul class="sidebar__list">
                    {Page::ALL
                        .iter()
                        .map(|page| {
                            let page = *page;
                            view! {
                                <li class="sidebar__item">
                                    <button
                                        class="sidebar__link"
                                        class:sidebar__link--active=move || {
                                            ctx.active.get() == page.path()
                                        }
                                        on:click=move |_| ctx.navigate(page.path())
                                    >
                                        {icon(page.icon())}
                                        <span class="sidebar__label">
                                            {move || i18n.t(page.label_key())}
                                        </span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
