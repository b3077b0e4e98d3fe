pub mod view_model;

use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use view_model::CarDetailsViewModel;

/// Car create/edit form, rendered inside the list's modal
#[component]
#[allow(non_snake_case)]
pub fn CarDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = CarDetailsViewModel::new();

    vm.load_catalog();
    vm.load_if_needed(id);

    let parse_id = |v: String| v.parse::<i64>().ok();

    view! {
        <div class="details-form">
            <h2>
                {move || {
                    if vm.is_edit_mode() {
                        i18n.t("common.edit")
                    } else {
                        i18n.t("cars.new")
                    }
                }}
            </h2>

            {move || vm.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <Input
                label=Signal::derive(move || i18n.t("cars.plate"))
                value=Signal::derive(move || vm.form.get().plate_number)
                on_input=Callback::new(move |v| vm.form.update(|f| f.plate_number = v))
                error=Signal::derive(move || vm.errors.get().plate_number)
                ltr=true
            />

            <Select
                label=Signal::derive(move || i18n.t("cars.brand"))
                options=Signal::derive(move || vm.brand_options(i18n.lang.get()))
                value=Signal::derive(move || {
                    vm.form.get().brand_id.map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| vm.set_brand(parse_id(v)))
                error=Signal::derive(move || vm.errors.get().brand_id)
            />

            <Select
                label=Signal::derive(move || i18n.t("cars.model"))
                options=Signal::derive(move || vm.model_options(i18n.lang.get()))
                value=Signal::derive(move || {
                    vm.form.get().model_id.map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.model_id = parse_id(v))
                })
                error=Signal::derive(move || vm.errors.get().model_id)
                disabled=Signal::derive(move || vm.form.get().brand_id.is_none())
            />

            <Select
                label=Signal::derive(move || i18n.t("cars.year"))
                options=Signal::derive(move || vm.year_options(i18n.lang.get()))
                value=Signal::derive(move || {
                    vm.form.get().year_id.map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.year_id = parse_id(v))
                })
                error=Signal::derive(move || vm.errors.get().year_id)
            />

            <Select
                label=Signal::derive(move || i18n.t("cars.color"))
                options=Signal::derive(move || vm.color_options(i18n.lang.get()))
                value=Signal::derive(move || {
                    vm.form.get().color_id.map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.color_id = parse_id(v))
                })
            />

            <Select
                label=Signal::derive(move || i18n.t("cars.transmission"))
                options=Signal::derive(move || vm.transmission_options(i18n.lang.get()))
                value=Signal::derive(move || {
                    vm.form.get().transmission_id.map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.transmission_id = parse_id(v))
                })
            />

            <Select
                label=Signal::derive(move || i18n.t("cars.body_type"))
                options=Signal::derive(move || vm.body_type_options(i18n.lang.get()))
                value=Signal::derive(move || {
                    vm.form.get().body_type_id.map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.body_type_id = parse_id(v))
                })
            />

            <Input
                label=Signal::derive(move || i18n.t("cars.daily_price"))
                value=Signal::derive(move || {
                    let price = vm.form.get().daily_price;
                    if price > 0.0 { price.to_string() } else { String::new() }
                })
                on_input=Callback::new(move |v: String| {
                    vm.form.update(|f| f.daily_price = v.parse().unwrap_or(0.0))
                })
                error=Signal::derive(move || vm.errors.get().daily_price)
                ltr=true
            />

            <div class="details-form__actions">
                <Button on_click=Callback::new(move |_| vm.save_command(on_saved))>
                    {move || i18n.t("common.save")}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {move || i18n.t("common.cancel")}
                </Button>
            </div>
        </div>
    }
}
