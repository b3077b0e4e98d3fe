use crate::domain::price_tiers::api;
use crate::domain::price_tiers::ui::details::TierDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::price_tier::{format_day_range, format_discount, PriceTier, PriceTierDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn PriceTiersList() -> impl IntoView {
    let i18n = use_i18n();

    let (items, set_items) = signal::<Vec<PriceTier>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<Option<PriceTierDto>>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_price_tiers().await {
                Ok(tiers) => {
                    set_items.set(tiers);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("price tiers fetch failed: {}", e);
                    set_error.set(Some(format!("{}: {}", i18n.t("error.load_failed"), e)));
                }
            }
        });
    };

    let delete_tier = move |id: i64| {
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
            match api::delete_price_tier(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    let reset_tiers = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&i18n.t("tiers.reset_confirm"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::reset_price_tiers().await {
                Ok(tiers) => {
                    set_items.set(tiers);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("tiers.title"))>
                <Button on_click=Callback::new(move |_| set_editing.set(Some(None)))>
                    {icon("plus")}
                    {move || i18n.t("tiers.new")}
                </Button>
                <Button variant="secondary" on_click=Callback::new(reset_tiers)>
                    {icon("refresh")}
                    {move || i18n.t("tiers.reset")}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t("tiers.name")}</th>
                            <th class="table__header-cell">{move || i18n.t("tiers.days")}</th>
                            <th class="table__header-cell">{move || i18n.t("tiers.multiplier")}</th>
                            <th class="table__header-cell">{move || i18n.t("tiers.discount")}</th>
                            <th class="table__header-cell">{move || i18n.t("common.actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lang = i18n.lang.get();
                            items.get().into_iter().map(|tier| {
                                let id = tier.id;
                                let dto = PriceTierDto {
                                    id: Some(tier.id),
                                    tier_name: tier.tier_name.clone(),
                                    days_from: tier.days_from,
                                    days_to: tier.days_to,
                                    multiplier: tier.multiplier,
                                };
                                view! {
                                    <tr
                                        class="table__row"
                                        on:click=move |_| set_editing.set(Some(Some(dto.clone())))
                                    >
                                        <td class="table__cell">{tier.tier_name.clone()}</td>
                                        <td class="table__cell">{format_day_range(&tier, lang)}</td>
                                        <td class="table__cell" dir="ltr">{tier.multiplier.to_string()}</td>
                                        <td class="table__cell" dir="ltr">{format_discount(tier.multiplier)}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--ghost button--small"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_tier(id);
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

            {move || editing.get().map(|initial| view! {
                <div class="modal-overlay" on:click=move |_| set_editing.set(None)>
                    <div class="modal-surface" on:click=|ev| ev.stop_propagation()>
                        <TierDetails
                            initial=initial.clone()
                            on_saved=Callback::new(move |_| {
                                set_editing.set(None);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
