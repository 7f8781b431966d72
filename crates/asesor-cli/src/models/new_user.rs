use std::fmt;

use serde::Serialize;

/// Request body for `POST /usuarios`
#[derive(Clone, Serialize)]
pub struct NewUser {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("nombre", &self.nombre)
            .field("apellido", &self.apellido)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
