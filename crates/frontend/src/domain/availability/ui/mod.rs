use crate::domain::availability::api;
use crate::domain::cars::api as cars_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::domain::attribute::Language;
use contracts::domain::availability::{
    validate_date_range, AvailabilityPeriod, DateRangeDto, DateRangeErrors, MaintenanceSchedule,
    QuarterlyPlan,
};
use contracts::domain::car::Car;
use contracts::shared::pagination::PageQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Periods,
    Maintenance,
    Quarterly,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RangeKind {
    Period,
    Maintenance,
}

fn car_label(cars: &[Car], car_id: i64, lang: Language) -> String {
    cars.iter()
        .find(|c| c.id == car_id)
        .map(|c| match lang {
            Language::Ar => format!("{} {} ({})", c.brand_ar, c.model_ar, c.plate_number),
            Language::En => format!("{} {} ({})", c.brand_en, c.model_en, c.plate_number),
        })
        .unwrap_or_else(|| format!("#{}", car_id))
}

fn car_options(cars: &[Car], lang: Language) -> Vec<(String, String)> {
    cars.iter()
        .map(|c| (c.id.to_string(), car_label(cars, c.id, lang)))
        .collect()
}

/// Availability, maintenance and quarterly planning, one tab per concern.
#[component]
#[allow(non_snake_case)]
pub fn AvailabilityPage() -> impl IntoView {
    let i18n = use_i18n();

    let (tab, set_tab) = signal(Tab::Periods);
    let (cars, set_cars) = signal::<Vec<Car>>(Vec::new());

    // One fleet fetch shared by the car selects and the table labels.
    spawn_local(async move {
        match cars_api::fetch_cars(PageQuery { page: 1, limit: 200 }).await {
            Ok(page) => set_cars.set(page.items),
            Err(e) => log::error!("cars fetch for availability failed: {}", e),
        }
    });

    let tab_button = move |target: Tab, key: &'static str| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {move || i18n.t(key)}
            </button>
        }
    };

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("avail.title"))>
                ""
            </PageHeader>

            <div class="tabs">
                {tab_button(Tab::Periods, "avail.periods")}
                {tab_button(Tab::Maintenance, "avail.maintenance")}
                {tab_button(Tab::Quarterly, "avail.quarterly")}
            </div>

            <Show when=move || tab.get() == Tab::Periods>
                <DateRangeSection kind=RangeKind::Period cars=cars/>
            </Show>
            <Show when=move || tab.get() == Tab::Maintenance>
                <DateRangeSection kind=RangeKind::Maintenance cars=cars/>
            </Show>
            <Show when=move || tab.get() == Tab::Quarterly>
                <QuarterlySection cars=cars/>
            </Show>
        </div>
    }
}

/// Row model shared by the periods and maintenance tables
#[derive(Clone)]
struct RangeRow {
    id: i64,
    car_id: i64,
    date_from: chrono::NaiveDate,
    date_to: chrono::NaiveDate,
    reason: Option<String>,
}

impl From<AvailabilityPeriod> for RangeRow {
    fn from(p: AvailabilityPeriod) -> Self {
        Self {
            id: p.id,
            car_id: p.car_id,
            date_from: p.date_from,
            date_to: p.date_to,
            reason: None,
        }
    }
}

impl From<MaintenanceSchedule> for RangeRow {
    fn from(m: MaintenanceSchedule) -> Self {
        Self {
            id: m.id,
            car_id: m.car_id,
            date_from: m.date_from,
            date_to: m.date_to,
            reason: m.reason,
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn DateRangeSection(kind: RangeKind, cars: ReadSignal<Vec<Car>>) -> impl IntoView {
    let i18n = use_i18n();
    let with_reason = kind == RangeKind::Maintenance;

    let (rows, set_rows) = signal::<Vec<RangeRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let form = RwSignal::new(DateRangeDto::default());
    let errors = RwSignal::new(DateRangeErrors::default());

    let fetch = move || {
        spawn_local(async move {
            let result = match kind {
                RangeKind::Period => api::fetch_periods()
                    .await
                    .map(|list| list.into_iter().map(RangeRow::from).collect::<Vec<_>>()),
                RangeKind::Maintenance => api::fetch_maintenance()
                    .await
                    .map(|list| list.into_iter().map(RangeRow::from).collect::<Vec<_>>()),
            };
            match result {
                Ok(list) => {
                    set_rows.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("availability fetch failed: {}", e);
                    set_error.set(Some(format!("{}: {}", i18n.t("error.load_failed"), e)));
                }
            }
        });
    };

    let save = move |_| {
        let dto = form.get();
        match validate_date_range(&dto) {
            Ok(()) => errors.set(DateRangeErrors::default()),
            Err(e) => {
                errors.set(e);
                return;
            }
        }
        spawn_local(async move {
            let result = match kind {
                RangeKind::Period => api::create_period(&dto).await,
                RangeKind::Maintenance => api::create_maintenance(&dto).await,
            };
            match result {
                Ok(()) => {
                    form.set(DateRangeDto::default());
                    set_show_form.set(false);
                    fetch();
                }
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    let delete_row = move |id: i64| {
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
            let result = match kind {
                RangeKind::Period => api::delete_period(id).await,
                RangeKind::Maintenance => api::delete_maintenance(id).await,
            };
            match result {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    fetch();

    let new_key = if with_reason {
        "avail.new_maintenance"
    } else {
        "avail.new_period"
    };

    view! {
        <div class="section">
            <div class="section__actions">
                <Button on_click=Callback::new(move |_| set_show_form.set(true))>
                    {icon("plus")}
                    {move || i18n.t(new_key)}
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || show_form.get()>
                <div class="details-form">
                    <Select
                        label=Signal::derive(move || i18n.t("avail.car"))
                        options=Signal::derive(move || car_options(&cars.get(), i18n.lang.get()))
                        value=Signal::derive(move || {
                            form.get().car_id.map(|id| id.to_string()).unwrap_or_default()
                        })
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.car_id = v.parse().ok())
                        })
                        error=Signal::derive(move || errors.get().car_id)
                    />
                    <Input
                        label=Signal::derive(move || i18n.t("avail.from"))
                        input_type="date"
                        value=Signal::derive(move || {
                            form.get().date_from.map(|d| d.to_string()).unwrap_or_default()
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.date_from = v.parse().ok())
                        })
                        error=Signal::derive(move || errors.get().date_from)
                        ltr=true
                    />
                    <Input
                        label=Signal::derive(move || i18n.t("avail.to"))
                        input_type="date"
                        value=Signal::derive(move || {
                            form.get().date_to.map(|d| d.to_string()).unwrap_or_default()
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.date_to = v.parse().ok())
                        })
                        error=Signal::derive(move || errors.get().date_to)
                        ltr=true
                    />
                    <Show when=move || with_reason>
                        <Input
                            label=Signal::derive(move || i18n.t("avail.reason"))
                            value=Signal::derive(move || form.get().reason.unwrap_or_default())
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    f.reason = if v.trim().is_empty() { None } else { Some(v) }
                                })
                            })
                        />
                    </Show>
                    <div class="details-form__actions">
                        <Button on_click=Callback::new(save)>
                            {move || i18n.t("common.save")}
                        </Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| set_show_form.set(false))
                        >
                            {move || i18n.t("common.cancel")}
                        </Button>
                    </div>
                </div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t("avail.car")}</th>
                            <th class="table__header-cell">{move || i18n.t("avail.from")}</th>
                            <th class="table__header-cell">{move || i18n.t("avail.to")}</th>
                            <Show when=move || with_reason>
                                <th class="table__header-cell">{move || i18n.t("avail.reason")}</th>
                            </Show>
                            <th class="table__header-cell">{move || i18n.t("common.actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lang = i18n.lang.get();
                            let fleet = cars.get();
                            rows.get().into_iter().map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{car_label(&fleet, row.car_id, lang)}</td>
                                        <td class="table__cell" dir="ltr">{row.date_from.to_string()}</td>
                                        <td class="table__cell" dir="ltr">{row.date_to.to_string()}</td>
                                        <Show when=move || with_reason>
                                            <td class="table__cell">{row.reason.clone().unwrap_or_default()}</td>
                                        </Show>
                                        <td class="table__cell">
                                            <button
                                                class="button button--ghost button--small"
                                                on:click=move |_| delete_row(id)
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
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn QuarterlySection(cars: ReadSignal<Vec<Car>>) -> impl IntoView {
    let i18n = use_i18n();

    let (plans, set_plans) = signal::<Vec<QuarterlyPlan>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (car_id, set_car_id) = signal::<Option<i64>>(None);
    let (year, set_year) = signal(chrono::Utc::now().year());
    let (quarter, set_quarter) = signal(1u8);
    let (planned_days, set_planned_days) = signal(0u32);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_quarterly_plans().await {
                Ok(list) => {
                    set_plans.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("quarterly plans fetch failed: {}", e);
                    set_error.set(Some(format!("{}: {}", i18n.t("error.load_failed"), e)));
                }
            }
        });
    };

    let save = move |_| {
        let Some(car) = car_id.get_untracked() else {
            return;
        };
        let (y, q, days) = (
            year.get_untracked(),
            quarter.get_untracked(),
            planned_days.get_untracked(),
        );
        spawn_local(async move {
            match api::save_quarterly_plan(car, y, q, days).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    fetch();

    view! {
        <div class="section">
            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-form details-form--inline">
                <Select
                    label=Signal::derive(move || i18n.t("avail.car"))
                    options=Signal::derive(move || car_options(&cars.get(), i18n.lang.get()))
                    value=Signal::derive(move || {
                        car_id.get().map(|id| id.to_string()).unwrap_or_default()
                    })
                    on_change=Callback::new(move |v: String| set_car_id.set(v.parse().ok()))
                />
                <Input
                    label=Signal::derive(move || i18n.t("cars.year"))
                    value=Signal::derive(move || year.get().to_string())
                    on_input=Callback::new(move |v: String| {
                        if let Ok(y) = v.parse() {
                            set_year.set(y);
                        }
                    })
                    ltr=true
                />
                <Select
                    label=Signal::derive(move || i18n.t("avail.quarter"))
                    options=Signal::derive(|| {
                        (1..=4u8)
                            .map(|q| (q.to_string(), format!("Q{}", q)))
                            .collect::<Vec<_>>()
                    })
                    value=Signal::derive(move || quarter.get().to_string())
                    on_change=Callback::new(move |v: String| {
                        if let Ok(q) = v.parse() {
                            set_quarter.set(q);
                        }
                    })
                />
                <Input
                    label=Signal::derive(move || i18n.t("avail.planned_days"))
                    value=Signal::derive(move || {
                        let days = planned_days.get();
                        if days > 0 { days.to_string() } else { String::new() }
                    })
                    on_input=Callback::new(move |v: String| {
                        set_planned_days.set(v.parse().unwrap_or(0));
                    })
                    ltr=true
                />
                <Button on_click=Callback::new(save)>
                    {move || i18n.t("common.save")}
                </Button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t("avail.car")}</th>
                            <th class="table__header-cell">{move || i18n.t("cars.year")}</th>
                            <th class="table__header-cell">{move || i18n.t("avail.quarter")}</th>
                            <th class="table__header-cell">{move || i18n.t("avail.planned_days")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lang = i18n.lang.get();
                            let fleet = cars.get();
                            plans.get().into_iter().map(|plan| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{car_label(&fleet, plan.car_id, lang)}</td>
                                    <td class="table__cell" dir="ltr">{plan.year.to_string()}</td>
                                    <td class="table__cell" dir="ltr">{format!("Q{}", plan.quarter)}</td>
                                    <td class="table__cell" dir="ltr">{plan.planned_days.to_string()}</td>
                                </tr>
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
