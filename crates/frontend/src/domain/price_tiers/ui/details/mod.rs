pub mod view_model;

use crate::shared::components::ui::{Button, Input};
use crate::shared::i18n::use_i18n;
use contracts::domain::price_tier::{format_discount, PriceTierDto};
use leptos::prelude::*;
use view_model::TierDetailsViewModel;

/// Tier create/edit form, rendered inside the list's modal
#[component]
#[allow(non_snake_case)]
pub fn TierDetails(
    initial: Option<PriceTierDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = TierDetailsViewModel::new(initial);

    view! {
        <div class="details-form">
            <h2>
                {move || {
                    if vm.is_edit_mode() {
                        i18n.t("common.edit")
                    } else {
                        i18n.t("tiers.new")
                    }
                }}
            </h2>

            {move || vm.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <Input
                label=Signal::derive(move || i18n.t("tiers.name"))
                value=Signal::derive(move || vm.form.get().tier_name)
                on_input=Callback::new(move |v| vm.form.update(|f| f.tier_name = v))
                error=Signal::derive(move || vm.errors.get().tier_name)
            />

            <Input
                label=Signal::derive(move || i18n.t("tiers.days_from"))
                value=Signal::derive(move || {
                    let from = vm.form.get().days_from;
                    if from > 0 { from.to_string() } else { String::new() }
                })
                on_input=Callback::new(move |v: String| {
                    vm.form.update(|f| f.days_from = v.parse().unwrap_or(0))
                })
                error=Signal::derive(move || vm.errors.get().days_from)
                ltr=true
            />

            <Input
                label=Signal::derive(move || i18n.t("tiers.days_to"))
                value=Signal::derive(move || {
                    vm.form.get().days_to.map(|d| d.to_string()).unwrap_or_default()
                })
                on_input=Callback::new(move |v: String| {
                    // blank means open-ended
                    vm.form.update(|f| f.days_to = v.trim().parse().ok())
                })
                error=Signal::derive(move || vm.errors.get().days_to)
                ltr=true
            />

            <Input
                label=Signal::derive(move || i18n.t("tiers.multiplier"))
                value=Signal::derive(move || {
                    let m = vm.form.get().multiplier;
                    if m > 0.0 { m.to_string() } else { String::new() }
                })
                on_input=Callback::new(move |v: String| {
                    vm.form.update(|f| f.multiplier = v.parse().unwrap_or(0.0))
                })
                error=Signal::derive(move || vm.errors.get().multiplier)
                ltr=true
            />

            <div class="details-form__hint">
                {move || {
                    let m = vm.form.get().multiplier;
                    if m > 0.0 {
                        format!("{}: {}", i18n.t("tiers.discount"), format_discount(m))
                    } else {
                        String::new()
                    }
                }}
            </div>

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
