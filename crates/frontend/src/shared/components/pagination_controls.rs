use crate::shared::icons::icon;
use leptos::prelude::*;

const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Pager strip under the list tables: first/prev/next/last plus a page-size
/// select. Pages are 0-indexed here; callers translate to the backend's
/// 1-indexed queries.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= total_pages.get();

    let go = move |page: usize| on_page_change.run(page);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-controls__button"
                disabled=at_first
                on:click=move |_| go(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-controls__button"
                disabled=at_first
                on:click=move |_| go(current_page.get().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>

            <span class="pagination-controls__info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>

            <button
                class="pagination-controls__button"
                disabled=at_last
                on:click=move |_| {
                    if !at_last() {
                        go(current_page.get() + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-controls__button"
                disabled=at_last
                on:click=move |_| go(total_pages.get().saturating_sub(1))
            >
                {icon("chevrons-right")}
            </button>

            <select
                class="pagination-controls__page-size"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page_size.get() == size
                            >
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
