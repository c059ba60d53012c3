use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Authenticated user as returned by `/login` and `/api/perfil`, and each row of
/// `/api/usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl UserDto {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember: Option<bool>,
}

impl LoginRequest {
    /// Build a login request from trimmed form input.
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            remember: None,
        })
    }

    pub fn remember(mut self, remember: bool) -> Self {
        self.remember = Some(remember);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    /// Reason given when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Message to show for a rejected login.
    pub fn rejection_message(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or("Usuário ou senha inválidos")
            .to_string()
    }
}

/// Body of `PUT /api/perfil`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfilUpdate {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Raw input of the profile form.
#[derive(Debug, Clone, Default)]
pub struct PerfilForm {
    pub username: String,
    pub current_password: String,
    pub new_password: String,
    pub confirmation: String,
}

impl PerfilForm {
    /// Validate the form and build the update body.
    ///
    /// Password fields are all-or-nothing: once any of them is filled, all three are
    /// required and the new password must match its confirmation.
    pub fn into_update(self) -> Result<PerfilUpdate, ValidationError> {
        let current = self.current_password.trim();
        let new = self.new_password.trim();
        let confirmation = self.confirmation.trim();

        let mut update = PerfilUpdate {
            username: self.username.trim().to_string(),
            current_password: None,
            password: None,
        };

        if current.is_empty() && new.is_empty() && confirmation.is_empty() {
            return Ok(update);
        }

        if current.is_empty() || new.is_empty() || confirmation.is_empty() {
            return Err(ValidationError::IncompletePasswordFields);
        }

        if new != confirmation {
            return Err(ValidationError::PasswordMismatch);
        }

        update.current_password = Some(current.to_string());
        update.password = Some(new.to_string());

        Ok(update)
    }
}

/// Body of `POST /api/usuarios` and `PUT /api/usuarios/{id}`.
///
/// An empty or absent password on update keeps the stored one.
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
}
