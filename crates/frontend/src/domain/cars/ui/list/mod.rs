use crate::domain::attributes::store as attribute_store;
use crate::domain::cars::api;
use crate::domain::cars::ui::details::CarDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Button;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::inventory_gate::use_inventory_status;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator};
use contracts::domain::attribute::Language;
use contracts::domain::car::{Car, CarStatus};
use contracts::shared::pagination::{PageQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

fn status_key(status: CarStatus) -> &'static str {
    match status {
        CarStatus::Available => "status.available",
        CarStatus::Rented => "status.rented",
        CarStatus::Maintenance => "status.maintenance",
        CarStatus::Hidden => "status.hidden",
    }
}

fn brand_label(car: &Car, lang: Language) -> String {
    match lang {
        Language::Ar => car.brand_ar.clone(),
        Language::En => car.brand_en.clone(),
    }
}

fn model_label(car: &Car, lang: Language) -> String {
    match lang {
        Language::Ar => car.model_ar.clone(),
        Language::En => car.model_en.clone(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CarsList() -> impl IntoView {
    let i18n = use_i18n();
    let inventory = use_inventory_status();

    let (items, set_items) = signal::<Vec<Car>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (total_pages, set_total_pages) = signal(0usize);
    let (page, set_page) = signal(0usize); // 0-indexed for the controls
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (sort_field, set_sort_field) = signal("plate".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let fetch = move || {
        let query = PageQuery {
            page: page.get_untracked() + 1,
            limit: page_size.get_untracked(),
        };
        spawn_local(async move {
            match api::fetch_cars(query).await {
                Ok(result) => {
                    set_total.set(result.total);
                    set_total_pages.set(result.total_pages());
                    set_items.set(result.items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("cars fetch failed: {}", e);
                    set_error.set(Some(format!("{}: {}", i18n.t("error.load_failed"), e)));
                }
            }
        });
    };

    let after_mutation = move || {
        fetch();
        // The overview/office gate depends on the fleet size
        inventory.refresh();
    };

    let handle_create_new = move || {
        set_editing_id.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |id: i64| {
        set_editing_id.set(Some(id));
        set_show_modal.set(true);
    };

    let delete_car = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&i18n.t("common.confirm_delete"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_car(id).await {
                Ok(()) => after_mutation(),
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    let handle_upload = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = match ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(input) => input,
            None => return,
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        spawn_local(async move {
            match api::upload_cars_xlsx(file).await {
                Ok(()) => after_mutation(),
                Err(e) => {
                    let message = match e.as_str() {
                        "too_large" => i18n.t("cars.upload_too_large"),
                        "wrong_type" => i18n.t("cars.upload_wrong_type"),
                        other => format!("{}: {}", i18n.t("error.save_failed"), other),
                    };
                    set_error.set(Some(message));
                }
            }
        });
    };

    let download_template = move |_| {
        if let Err(e) = api::download_template() {
            log::error!("template download failed: {}", e);
        }
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("cars.title"))>
                <Button on_click=Callback::new(move |_| handle_create_new())>
                    {icon("plus")}
                    {move || i18n.t("cars.new")}
                </Button>
                <label class="button button--secondary">
                    {icon("upload")}
                    {move || i18n.t("cars.upload")}
                    <input
                        type="file"
                        accept=".xlsx"
                        style="display: none;"
                        on:change=handle_upload
                    />
                </label>
                <Button variant="secondary" on_click=Callback::new(download_template)>
                    {icon("download")}
                    {move || i18n.t("cars.template")}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| {
                    // A manual refresh also drops the cached taxonomy
                    attribute_store::invalidate();
                    fetch();
                })>
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || inventory.is_empty()>
                <div class="empty-state">{move || i18n.t("cars.empty")}</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "plate", sort_field.into(), set_sort_field, set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "{}{}",
                                    i18n.t("cars.plate"),
                                    get_sort_indicator(&sort_field.get(), "plate", sort_ascending.get()),
                                )}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("cars.brand")}</th>
                            <th class="table__header-cell">{move || i18n.t("cars.model")}</th>
                            <th class="table__header-cell">{move || i18n.t("cars.year")}</th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "price", sort_field.into(), set_sort_field, set_sort_ascending,
                                )
                            >
                                {move || format!(
                                    "{}{}",
                                    i18n.t("cars.daily_price"),
                                    get_sort_indicator(&sort_field.get(), "price", sort_ascending.get()),
                                )}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("cars.status")}</th>
                            <th class="table__header-cell">{move || i18n.t("common.actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lang = i18n.lang.get();
                            let mut sorted = items.get();
                            let field = sort_field.get();
                            let ascending = sort_ascending.get();
                            sorted.sort_by(|a, b| {
                                let ord = match field.as_str() {
                                    "price" => a
                                        .daily_price
                                        .partial_cmp(&b.daily_price)
                                        .unwrap_or(std::cmp::Ordering::Equal),
                                    _ => a.plate_number.cmp(&b.plate_number),
                                };
                                if ascending { ord } else { ord.reverse() }
                            });
                            sorted.into_iter().map(|car| {
                                let id = car.id;
                                view! {
                                    <tr class="table__row" on:click=move |_| handle_edit(id)>
                                        <td class="table__cell" dir="ltr">{car.plate_number.clone()}</td>
                                        <td class="table__cell">{brand_label(&car, lang)}</td>
                                        <td class="table__cell">{model_label(&car, lang)}</td>
                                        <td class="table__cell">{car.year_label.clone()}</td>
                                        <td class="table__cell" dir="ltr">{format!("{:.3}", car.daily_price)}</td>
                                        <td class="table__cell">{i18n.t(status_key(car.status))}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--ghost button--small"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_car(id);
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total
                page_size=page_size
                on_page_change=Callback::new(move |p| {
                    set_page.set(p);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size| {
                    set_page_size.set(size);
                    set_page.set(0);
                    fetch();
                })
            />

            <Show when=move || show_modal.get()>
                <div class="modal-overlay" on:click=move |_| set_show_modal.set(false)>
                    <div class="modal-surface" on:click=|ev| ev.stop_propagation()>
                        <CarDetails
                            id=editing_id.get_untracked()
                            on_saved=Callback::new(move |_| {
                                set_show_modal.set(false);
                                after_mutation();
                            })
                            on_cancel=Callback::new(move |_| set_show_modal.set(false))
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
