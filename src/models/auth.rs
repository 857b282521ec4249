use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: String,
    pub name: String,
}

/// Sesión viva: token + perfil. Invariante: se escriben y se borran juntos,
/// y como mucho un ámbito de storage la contiene.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Portal de acceso: mismo dashboard, endpoints de login distintos
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Portal {
    Admin,
    Customer,
}

impl Portal {
    pub fn login_endpoint(&self) -> &'static str {
        match self {
            Portal::Admin => "/auth/login/admin",
            Portal::Customer => "/auth/login/customer",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub portal: Portal,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RefreshResponse {
    pub token: String,
}

/// Resultado de inspeccionar la URL de retorno del OAuth de Google
#[derive(Clone, PartialEq, Debug)]
pub enum OAuthCallback {
    Success { token: String, user: User },
    Failure { message: String },
}
