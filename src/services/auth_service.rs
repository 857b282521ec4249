// ============================================================================
// AUTH SERVICE - Sesión + notificador de cambios
// ============================================================================
// Dueño único de la sesión en browser storage. Toda mutación (login, logout,
// callback OAuth, refresh fallido) dispara UNA notificación a los
// suscriptores; es el único canal entre componentes de toda la app.
// ============================================================================

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsValue;
use web_sys::window;

use crate::models::{
    LoginForm, LoginRequest, LoginResponse, MessageResponse, OAuthCallback, RefreshResponse,
    StoredSession, User,
};
use crate::services::api_client::{self, ApiError, ApiResult};
use crate::utils::{
    load_json, load_string, percent_decode, remove, save_json, save_string,
    storage::StorageScope, STORAGE_KEY_REMEMBER, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

// ----------------------------------------------------------------------------
// Notificador: registro de observadores (sustituye al CustomEvent global)
// ----------------------------------------------------------------------------

thread_local! {
    static SUBSCRIBERS: RefCell<Vec<(usize, Box<dyn Fn()>)>> = RefCell::new(Vec::new());
    static NEXT_SUBSCRIBER_ID: Cell<usize> = Cell::new(1);
}

/// Suscribirse a cambios de sesión; devuelve el id para darse de baja
pub fn subscribe_auth<F: Fn() + 'static>(listener: F) -> usize {
    let id = NEXT_SUBSCRIBER_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    SUBSCRIBERS.with(|subs| subs.borrow_mut().push((id, Box::new(listener))));
    id
}

pub fn unsubscribe_auth(id: usize) {
    SUBSCRIBERS.with(|subs| subs.borrow_mut().retain(|(sub_id, _)| *sub_id != id));
}

/// Notificar a todos los suscriptores montados.
/// El registro se saca del thread_local durante la emisión para que un
/// listener pueda suscribir sin reventar el RefCell; las altas hechas en
/// mitad de la emisión se conservan.
pub fn notify_auth_changed() {
    let current = SUBSCRIBERS.with(|subs| subs.take());
    for (_, listener) in &current {
        listener();
    }
    SUBSCRIBERS.with(|subs| {
        let mut subs = subs.borrow_mut();
        let added = std::mem::take(&mut *subs);
        *subs = current;
        subs.extend(added);
    });
}

// ----------------------------------------------------------------------------
// Persistencia de la sesión (dual-scope)
// ----------------------------------------------------------------------------

fn session_scope(persistent: bool) -> StorageScope {
    if persistent {
        StorageScope::Persistent
    } else {
        StorageScope::Session
    }
}

/// Escribe token+usuario en el ámbito elegido y limpia el otro.
/// Invariante: como mucho un ámbito contiene una sesión viva.
pub fn persist_session(session: &StoredSession, persistent: bool) -> Result<(), String> {
    let scope = session_scope(persistent);
    clear_scope(scope.other());

    save_string(scope, STORAGE_KEY_TOKEN, &session.token)?;
    save_json(scope, STORAGE_KEY_USER, &session.user)?;
    save_string(scope, STORAGE_KEY_REMEMBER, if persistent { "1" } else { "0" })?;
    Ok(())
}

fn clear_scope(scope: StorageScope) {
    remove(scope, STORAGE_KEY_TOKEN);
    remove(scope, STORAGE_KEY_USER);
    remove(scope, STORAGE_KEY_REMEMBER);
}

/// Borra la sesión de AMBOS ámbitos (logout siempre gana)
pub fn clear_session() {
    clear_scope(StorageScope::Persistent);
    clear_scope(StorageScope::Session);
}

/// Lectura defensiva: el ámbito persistente gana si ambos tienen valor
pub fn get_token() -> Option<String> {
    load_string(StorageScope::Persistent, STORAGE_KEY_TOKEN)
        .or_else(|| load_string(StorageScope::Session, STORAGE_KEY_TOKEN))
}

pub fn get_user() -> Option<User> {
    load_json(StorageScope::Persistent, STORAGE_KEY_USER)
        .or_else(|| load_json(StorageScope::Session, STORAGE_KEY_USER))
}

pub fn is_authenticated() -> bool {
    get_token().is_some() && get_user().is_some()
}

/// Ámbito donde vive la sesión actual, si hay alguna
fn current_scope() -> Option<StorageScope> {
    if load_string(StorageScope::Persistent, STORAGE_KEY_TOKEN).is_some() {
        Some(StorageScope::Persistent)
    } else if load_string(StorageScope::Session, STORAGE_KEY_TOKEN).is_some() {
        Some(StorageScope::Session)
    } else {
        None
    }
}

// ----------------------------------------------------------------------------
// Operaciones remotas
// ----------------------------------------------------------------------------

pub async fn login(form: &LoginForm) -> ApiResult<StoredSession> {
    log::info!("🔐 Iniciando sesión para: {}", form.email);

    let request = LoginRequest {
        email: form.email.clone(),
        password: form.password.clone(),
    };
    let response: LoginResponse =
        api_client::post_json(form.portal.login_endpoint(), None, &request).await?;

    let session = StoredSession {
        token: response.token,
        user: response.user,
    };
    persist_session(&session, form.remember_me).map_err(ApiError::local)?;
    notify_auth_changed();

    log::info!("✅ Sesión iniciada: {} ({})", session.user.name, session.user.role);
    Ok(session)
}

/// Logout: la invalidación remota es best-effort, el borrado local nunca falla
pub async fn logout() {
    let token = get_token();
    if token.is_some() {
        if let Err(e) = api_client::post_empty::<MessageResponse>("/auth/logout", token.as_deref()).await
        {
            log::warn!("⚠️ Logout remoto falló (se ignora): {}", e);
        }
    }

    clear_session();
    notify_auth_changed();
    log::info!("👋 Sesión cerrada");
}

/// Renueva el token manteniendo el ámbito actual.
/// Si el refresh falla, la sesión se tira entera (logout forzado).
pub async fn refresh_token() -> ApiResult<String> {
    let token = get_token();
    let scope = current_scope();

    match api_client::post_empty::<RefreshResponse>("/auth/refresh", token.as_deref()).await {
        Ok(response) => {
            if let Some(scope) = scope {
                save_string(scope, STORAGE_KEY_TOKEN, &response.token)
                    .map_err(ApiError::local)?;
            }
            log::info!("🔄 Token renovado");
            Ok(response.token)
        }
        Err(e) => {
            log::error!("❌ Refresh falló, cerrando sesión: {}", e);
            clear_session();
            notify_auth_changed();
            Err(e)
        }
    }
}

// ----------------------------------------------------------------------------
// Callback de OAuth (Google)
// ----------------------------------------------------------------------------

/// Parseo puro de la query de retorno: `token`+`user` o `error`.
/// `user` llega como JSON percent-encodeado.
pub fn parse_oauth_callback(search: &str) -> Option<OAuthCallback> {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() {
        return None;
    }

    let mut token = None;
    let mut user_raw = None;
    let mut error = None;

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "token" => token = Some(percent_decode(value)),
            "user" => user_raw = Some(percent_decode(value)),
            "error" => error = Some(percent_decode(value)),
            _ => {}
        }
    }

    if let Some(message) = error {
        return Some(OAuthCallback::Failure { message });
    }

    match (token, user_raw) {
        (Some(token), Some(user_raw)) => match serde_json::from_str::<User>(&user_raw) {
            Ok(user) => Some(OAuthCallback::Success { token, user }),
            Err(_) => Some(OAuthCallback::Failure {
                message: "Invalid user payload in OAuth callback".to_string(),
            }),
        },
        _ => None,
    }
}

/// Consume el callback de OAuth de la URL actual. La query se elimina con
/// `history.replaceState`, así que un refresh NO la vuelve a consumir.
/// La sesión OAuth se guarda como no-persistente.
pub fn complete_oauth_callback() -> Option<StoredSession> {
    let win = window()?;
    let search = win.location().search().ok()?;
    let result = parse_oauth_callback(&search)?;

    strip_query_string(&win);

    match result {
        OAuthCallback::Success { token, user } => {
            let session = StoredSession { token, user };
            if let Err(e) = persist_session(&session, false) {
                log::error!("❌ No se pudo guardar la sesión OAuth: {}", e);
                return None;
            }
            notify_auth_changed();
            log::info!("✅ Sesión OAuth iniciada: {}", session.user.email);
            Some(session)
        }
        OAuthCallback::Failure { message } => {
            log::error!("❌ OAuth devolvió error: {}", message);
            None
        }
    }
}

fn strip_query_string(win: &web_sys::Window) {
    let location = win.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = win.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&pathname));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Portal;

    #[test]
    fn oauth_success_parses_token_and_user() {
        let user = r#"{"id":"u1","email":"ana@example.com","role":"admin","name":"Ana"}"#;
        let search = format!("?token=abc123&user={}", crate::utils::percent_encode(user));

        match parse_oauth_callback(&search) {
            Some(OAuthCallback::Success { token, user }) => {
                assert_eq!(token, "abc123");
                assert_eq!(user.email, "ana@example.com");
                assert_eq!(user.role, "admin");
            }
            other => panic!("se esperaba Success, llegó {:?}", other),
        }
    }

    #[test]
    fn oauth_error_param_is_failure() {
        let result = parse_oauth_callback("?error=access_denied");
        assert_eq!(
            result,
            Some(OAuthCallback::Failure {
                message: "access_denied".to_string()
            })
        );
    }

    #[test]
    fn no_markers_means_no_callback() {
        assert_eq!(parse_oauth_callback(""), None);
        assert_eq!(parse_oauth_callback("?tab=orders&page=2"), None);
        // token sin user no es un callback válido
        assert_eq!(parse_oauth_callback("?token=abc"), None);
    }

    #[test]
    fn malformed_user_payload_is_failure() {
        let result = parse_oauth_callback("?token=abc&user=%7Bnot-json");
        assert!(matches!(result, Some(OAuthCallback::Failure { .. })));
    }

    #[test]
    fn subscribers_receive_exactly_one_notification() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let id = subscribe_auth(move || count_clone.set(count_clone.get() + 1));

        notify_auth_changed();
        assert_eq!(count.get(), 1);

        unsubscribe_auth(id);
        notify_auth_changed();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn portal_endpoints() {
        assert_eq!(Portal::Admin.login_endpoint(), "/auth/login/admin");
        assert_eq!(Portal::Customer.login_endpoint(), "/auth/login/customer");
    }
}
