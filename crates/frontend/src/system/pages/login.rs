use crate::shared::components::ui::{Button, Input};
use crate::shared::i18n::use_i18n;
use crate::system::auth::{api, context};
use contracts::domain::phone::{validate_and_format_phone, KUWAIT_COUNTRY_CODE};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Signup,
    VerifyOtp,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let session = crate::shared::session::use_session();
    let (_, set_auth_state) = context::use_auth();

    let (mode, set_mode) = signal(Mode::Login);
    // Local part only ("1234 5678"); reformatted on every keystroke
    let (phone, set_phone) = signal(String::new());
    let (phone_error, set_phone_error) = signal(Option::<String>::None);
    let (password, set_password) = signal(String::new());
    let (office_name, set_office_name) = signal(String::new());
    let (otp_code, set_otp_code) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let handle_phone_input = move |raw: String| {
        let result = validate_and_format_phone(
            &raw,
            Some(&i18n.t("auth.phone_invalid")),
            Some(&i18n.t("auth.phone_required")),
        );
        set_phone.set(result.formatted);
        // While typing, only show the format error once something was entered
        set_phone_error.set(if raw.trim().is_empty() { None } else { result.error });
    };

    let canonical_phone = move || format!("{} {}", KUWAIT_COUNTRY_CODE, phone.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let check = validate_and_format_phone(
            &phone.get(),
            Some(&i18n.t("auth.phone_invalid")),
            Some(&i18n.t("auth.phone_required")),
        );
        if !check.is_valid {
            set_phone_error.set(check.error);
            return;
        }

        let current_mode = mode.get();
        let phone_val = canonical_phone();
        let password_val = password.get();
        let office_name_val = office_name.get();
        let otp_val = otp_code.get();
        let session = session.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let outcome = match current_mode {
                Mode::Login => api::login(phone_val, password_val).await.map(|r| r.token),
                Mode::Signup => {
                    api::signup(phone_val, password_val, office_name_val)
                        .await
                        .map(|r| r.token)
                }
                Mode::VerifyOtp => api::verify_otp(phone_val, otp_val)
                    .await
                    .map(|r| Some(r.token)),
            };

            match outcome {
                Ok(Some(token)) => {
                    context::complete_login(&session, set_auth_state, token);
                }
                // No token yet: the backend sent an OTP to the phone
                Ok(None) => set_mode.set(Mode::VerifyOtp),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{move || i18n.t("app.title")}</h1>
                <h2>
                    {move || match mode.get() {
                        Mode::Login => i18n.t("auth.login"),
                        Mode::Signup => i18n.t("auth.signup"),
                        Mode::VerifyOtp => i18n.t("auth.verify"),
                    }}
                </h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="phone-field">
                        <span class="phone-field__prefix" dir="ltr">{KUWAIT_COUNTRY_CODE}</span>
                        <Input
                            label=Signal::derive(move || i18n.t("auth.phone"))
                            value=phone
                            on_input=Callback::new(handle_phone_input)
                            placeholder="1234 5678"
                            error=Signal::derive(move || phone_error.get())
                            disabled=Signal::derive(move || {
                                is_loading.get() || mode.get() == Mode::VerifyOtp
                            })
                            ltr=true
                        />
                    </div>

                    <Show when=move || mode.get() != Mode::VerifyOtp>
                        <Input
                            label=Signal::derive(move || i18n.t("auth.password"))
                            value=password
                            on_input=Callback::new(move |v| set_password.set(v))
                            input_type="password"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </Show>

                    <Show when=move || mode.get() == Mode::Signup>
                        <Input
                            label=Signal::derive(move || i18n.t("auth.office_name"))
                            value=office_name
                            on_input=Callback::new(move |v| set_office_name.set(v))
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </Show>

                    <Show when=move || mode.get() == Mode::VerifyOtp>
                        <Input
                            label=Signal::derive(move || i18n.t("auth.otp_code"))
                            value=otp_code
                            on_input=Callback::new(move |v| set_otp_code.set(v))
                            ltr=true
                        />
                    </Show>

                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {move || match mode.get() {
                            Mode::Login => i18n.t("auth.login"),
                            Mode::Signup => i18n.t("auth.signup"),
                            Mode::VerifyOtp => i18n.t("auth.verify"),
                        }}
                    </Button>
                </form>

                <Show when=move || mode.get() != Mode::VerifyOtp>
                    <button
                        class="login-box__switch"
                        on:click=move |_| {
                            set_error_message.set(None);
                            set_mode.update(|m| {
                                *m = if *m == Mode::Login { Mode::Signup } else { Mode::Login };
                            });
                        }
                    >
                        {move || match mode.get() {
                            Mode::Login => i18n.t("auth.need_account"),
                            _ => i18n.t("auth.have_account"),
                        }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
