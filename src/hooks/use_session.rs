// ============================================================================
// USE SESSION - Estado de autenticación para toda la app
// ============================================================================
// Se suscribe al notificador del auth_service: cualquier mutación de sesión
// (login, logout, OAuth, refresh fallido) re-lee storage y actualiza aquí.
// ============================================================================

use yew::prelude::*;

use crate::models::{LoginForm, User};
use crate::services::auth_service;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub user: UseStateHandle<Option<User>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub login: Callback<LoginForm>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let user = use_state(auth_service::get_user);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Suscripción al notificador + consumo del callback OAuth (solo al montar)
    {
        let user = user.clone();
        use_effect_with((), move |_| {
            let user_for_listener = user.clone();
            let id = auth_service::subscribe_auth(move || {
                user_for_listener.set(auth_service::get_user());
            });

            // Si venimos de la redirección de Google, la query trae la sesión;
            // consumirla aquí la hace de un solo uso
            if auth_service::complete_oauth_callback().is_some() {
                user.set(auth_service::get_user());
            } else if auth_service::is_authenticated() {
                // Sesión guardada de una visita anterior: renovar el token.
                // Si el refresh falla, el auth_service tira la sesión y el
                // suscriptor de arriba nos deja en el login.
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = auth_service::refresh_token().await;
                });
            }

            move || auth_service::unsubscribe_auth(id)
        });
    }

    let login = {
        let user = user.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |form: LoginForm| {
            let user = user.clone();
            let loading = loading.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);

                match auth_service::login(&form).await {
                    Ok(session) => {
                        user.set(Some(session.user));
                        loading.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        error.set(Some(e.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let logout = {
        let user = user.clone();
        Callback::from(move |_| {
            let user = user.clone();
            wasm_bindgen_futures::spawn_local(async move {
                auth_service::logout().await;
                user.set(None);
            });
        })
    };

    UseSessionHandle {
        user,
        loading,
        error,
        login,
        logout,
    }
}
