use dioxus::prelude::*;
use shared_types::Principal;

use crate::routes::Route;

/// Session state for the signed-in principal.
///
/// Provided once by `App` with `loading = true`. Only [`AuthState::resolve`],
/// [`AuthState::sign_in`] and [`AuthState::sign_out`] write to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    principal: Signal<Option<Principal>>,
    loading: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            principal: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn principal(&self) -> Option<Principal> {
        self.principal.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.read().is_some()
    }

    /// Finish the initial session check.
    pub fn resolve(&mut self, principal: Option<Principal>) {
        self.principal.set(principal);
        self.loading.set(false);
    }

    pub fn sign_in(&mut self, principal: Principal) {
        self.resolve(Some(principal));
    }

    pub fn sign_out(&mut self) {
        self.principal.set(None);
        self.loading.set(false);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Sign-out handler: drops the principal, goes to the login page and
/// asks the server to clear the session cookie.
pub fn use_sign_out() -> Callback<MouseEvent> {
    let mut auth = use_auth();
    use_callback(move |_: MouseEvent| {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!(error = %e, "logout request failed");
            }
        });
        auth.sign_out();
        navigator().replace(Route::Login {});
    })
}

/// Runs the initial session check and resolves [`AuthState`].
#[component]
pub fn SessionLoader() -> Element {
    let mut auth = use_auth();
    let session =
        use_resource(move || async move { server::api::get_current_principal().await });

    use_effect(move || {
        let Some(result) = session.read().as_ref().cloned() else {
            return;
        };
        if !auth.is_loading() {
            return;
        }
        match result {
            Ok(principal) => auth.resolve(principal),
            Err(e) => {
                tracing::warn!(error = %e, "session check failed, treating as signed out");
                auth.resolve(None);
            }
        }
    });

    rsx! {}
}
