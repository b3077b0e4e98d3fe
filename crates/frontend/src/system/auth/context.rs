use crate::shared::session::SessionService;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session = crate::shared::session::use_session();

    // Restore the session from the store on mount. The backend validates the
    // token on the first authenticated request; an expired one simply fails
    // that request and the user logs in again.
    let (auth_state, set_auth_state) = signal(AuthState {
        token: session.auth_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a freshly issued token and flip the app into the logged-in state
pub fn complete_login(session: &SessionService, set_auth_state: WriteSignal<AuthState>, token: String) {
    session.set_auth_token(&token);
    set_auth_state.set(AuthState { token: Some(token) });
}

/// Helper: Perform logout
pub async fn do_logout(session: &SessionService, set_auth_state: WriteSignal<AuthState>) {
    session.clear_auth_token();
    set_auth_state.set(AuthState::default());
}
