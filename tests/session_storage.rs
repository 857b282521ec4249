// Invariantes de la sesión en browser storage. Solo tienen sentido con un
// DOM real, por eso van con wasm-bindgen-test:
//   wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use fleet_admin_pwa::models::{StoredSession, User};
use fleet_admin_pwa::services::auth_service;
use fleet_admin_pwa::utils::{
    load_string, save_string, storage::StorageScope, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

wasm_bindgen_test_configure!(run_in_browser);

fn session(token: &str) -> StoredSession {
    StoredSession {
        token: token.to_string(),
        user: User {
            id: "u1".to_string(),
            email: "ana@example.com".to_string(),
            role: "admin".to_string(),
            name: "Ana".to_string(),
        },
    }
}

#[wasm_bindgen_test]
fn remember_me_writes_local_storage_only() {
    auth_service::clear_session();

    auth_service::persist_session(&session("tok-persistent"), true).unwrap();

    assert_eq!(
        load_string(StorageScope::Persistent, STORAGE_KEY_TOKEN).as_deref(),
        Some("tok-persistent")
    );
    assert!(load_string(StorageScope::Persistent, STORAGE_KEY_USER).is_some());
    assert!(load_string(StorageScope::Session, STORAGE_KEY_TOKEN).is_none());
    assert!(load_string(StorageScope::Session, STORAGE_KEY_USER).is_none());
}

#[wasm_bindgen_test]
fn plain_login_writes_session_storage_only() {
    auth_service::clear_session();

    auth_service::persist_session(&session("tok-session"), false).unwrap();

    assert_eq!(
        load_string(StorageScope::Session, STORAGE_KEY_TOKEN).as_deref(),
        Some("tok-session")
    );
    assert!(load_string(StorageScope::Persistent, STORAGE_KEY_TOKEN).is_none());
    assert!(load_string(StorageScope::Persistent, STORAGE_KEY_USER).is_none());
}

#[wasm_bindgen_test]
fn switching_scope_clears_the_other_one() {
    auth_service::clear_session();

    auth_service::persist_session(&session("first"), false).unwrap();
    auth_service::persist_session(&session("second"), true).unwrap();

    // la sesión vieja en sessionStorage no puede sobrevivir
    assert!(load_string(StorageScope::Session, STORAGE_KEY_TOKEN).is_none());
    assert_eq!(auth_service::get_token().as_deref(), Some("second"));
}

#[wasm_bindgen_test]
fn persistent_scope_wins_on_conflicting_reads() {
    auth_service::clear_session();

    // estado anómalo forzado a mano: ambos ámbitos con token
    save_string(StorageScope::Persistent, STORAGE_KEY_TOKEN, "from-local").unwrap();
    save_string(StorageScope::Session, STORAGE_KEY_TOKEN, "from-session").unwrap();

    assert_eq!(auth_service::get_token().as_deref(), Some("from-local"));

    auth_service::clear_session();
}

#[wasm_bindgen_test]
fn clear_session_empties_both_scopes() {
    auth_service::persist_session(&session("bye"), true).unwrap();
    auth_service::clear_session();

    assert!(auth_service::get_token().is_none());
    assert!(auth_service::get_user().is_none());
    assert!(!auth_service::is_authenticated());
}
