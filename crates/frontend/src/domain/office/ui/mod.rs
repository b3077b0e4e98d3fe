use crate::domain::office::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Toggle};
use crate::shared::i18n::use_i18n;
use contracts::domain::office::{validate_office_config, OfficeConfig, OfficeConfigErrors};
use contracts::domain::phone::validate_and_format_phone;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn OfficeConfigsPage() -> impl IntoView {
    let i18n = use_i18n();

    let form = RwSignal::new(OfficeConfig::default());
    let errors = RwSignal::new(OfficeConfigErrors::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    spawn_local(async move {
        match api::fetch_office_config().await {
            Ok(config) => form.set(config),
            Err(e) => {
                log::error!("office config fetch failed: {}", e);
                set_error.set(Some(format!("{}: {}", i18n.t("error.load_failed"), e)));
            }
        }
    });

    let handle_phone_input = move |raw: String| {
        let validation = validate_and_format_phone(
            &raw,
            Some(&i18n.t("auth.phone_invalid")),
            Some(&i18n.t("auth.phone_required")),
        );
        form.update(|f| f.contact_phone = format!("+965 {}", validation.formatted));
        errors.update(|e| e.contact_phone = validation.error);
    };

    let save = move |_| {
        let current = form.get();
        match validate_office_config(&current) {
            Ok(()) => errors.set(OfficeConfigErrors::default()),
            Err(e) => {
                errors.set(e);
                return;
            }
        }
        spawn_local(async move {
            match api::save_office_config(&current).await {
                Ok(()) => {
                    set_error.set(None);
                    set_saved.set(true);
                    gloo_timers::future::TimeoutFuture::new(2_500).await;
                    set_saved.set(false);
                }
                Err(e) => {
                    set_saved.set(false);
                    set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e)));
                }
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("office.title"))>
                ""
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-form">
                <Input
                    label=Signal::derive(move || i18n.t("office.name_en"))
                    value=Signal::derive(move || form.get().office_name_en)
                    on_input=Callback::new(move |v| form.update(|f| f.office_name_en = v))
                    error=Signal::derive(move || errors.get().office_name_en)
                    ltr=true
                />
                <Input
                    label=Signal::derive(move || i18n.t("office.name_ar"))
                    value=Signal::derive(move || form.get().office_name_ar)
                    on_input=Callback::new(move |v| form.update(|f| f.office_name_ar = v))
                />
                <Input
                    label=Signal::derive(move || i18n.t("office.address_en"))
                    value=Signal::derive(move || form.get().address_en)
                    on_input=Callback::new(move |v| form.update(|f| f.address_en = v))
                    ltr=true
                />
                <Input
                    label=Signal::derive(move || i18n.t("office.address_ar"))
                    value=Signal::derive(move || form.get().address_ar)
                    on_input=Callback::new(move |v| form.update(|f| f.address_ar = v))
                />
                <Input
                    label=Signal::derive(move || i18n.t("office.phone"))
                    value=Signal::derive(move || {
                        form.get()
                            .contact_phone
                            .strip_prefix("+965 ")
                            .map(str::to_string)
                            .unwrap_or_else(|| form.get().contact_phone)
                    })
                    on_input=Callback::new(handle_phone_input)
                    error=Signal::derive(move || errors.get().contact_phone)
                    placeholder="XXXX XXXX"
                    ltr=true
                />
                <Toggle
                    label=Signal::derive(move || i18n.t("bookings.enabled"))
                    checked=Signal::derive(move || form.get().booking_enabled)
                    on_change=Callback::new(move |enabled| {
                        form.update(|f| f.booking_enabled = enabled)
                    })
                />

                <div class="details-form__actions">
                    <Button on_click=Callback::new(save)>
                        {move || i18n.t("common.save")}
                    </Button>
                    <Show when=move || saved.get()>
                        <span class="details-form__saved">{move || i18n.t("common.save")}" ✓"</span>
                    </Show>
                </div>
            </div>
        </div>
    }
}
