//! Resource forms: raw field input in, one request out.

use crate::{
    CliClientResult, Client, ClientError, Outcome,
    models::{
        Identity, NewSession, NewUser, SessionOwner, SessionUpdate, TutoringSession,
        time_format::{DATE_FORMAT, TIME_FORMAT},
    },
};

use asesor_config::OwnerField;
use chrono::{NaiveDate, NaiveTime};

/// Sign-up form fields
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// The only client-side check is the password confirmation
    pub fn to_payload(&self) -> CliClientResult<NewUser> {
        if self.password != self.confirm_password {
            return Err(ClientError::validation("Passwords do not match."));
        }

        Ok(NewUser {
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// New tutoring session form fields, as typed
#[derive(Debug, Clone, Default)]
pub struct SessionForm {
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    pub hora: String,
    pub profesor: String,
}

impl SessionForm {
    pub fn to_payload(&self, identity: &Identity, owner_field: OwnerField) -> CliClientResult<NewSession> {
        let owner = match owner_field {
            OwnerField::Username => SessionOwner::Username(identity.username.clone()),
            OwnerField::UserId => SessionOwner::UsuarioId(identity.user_id.ok_or_else(|| {
                ClientError::validation("Your user id is unknown; log out and sign in again.")
            })?),
        };

        Ok(NewSession {
            titulo: self.titulo.clone(),
            descripcion: self.descripcion.clone(),
            fecha: parse_date(&self.fecha)?,
            hora: parse_time(&self.hora)?,
            profesor: self.profesor.clone(),
            owner,
        })
    }
}

/// Edit form: a blank field leaves the stored value alone
#[derive(Debug, Clone, Default)]
pub struct SessionEditForm {
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    pub hora: String,
    pub profesor: String,
}

impl SessionEditForm {
    pub fn to_payload(&self) -> CliClientResult<SessionUpdate> {
        Ok(SessionUpdate {
            titulo: non_blank(&self.titulo),
            descripcion: non_blank(&self.descripcion),
            fecha: non_blank(&self.fecha).map(|d| parse_date(&d)).transpose()?,
            hora: non_blank(&self.hora).map(|t| parse_time(&t)).transpose()?,
            profesor: non_blank(&self.profesor),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// ISO-8601 calendar date, `YYYY-MM-DD`
pub fn parse_date(value: &str) -> CliClientResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ClientError::validation(format!("'{}' is not a date, use YYYY-MM-DD.", value.trim()))
    })
}

/// 24-hour `HH:MM`
pub fn parse_time(value: &str) -> CliClientResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        ClientError::validation(format!("'{}' is not a time, use HH:MM.", value.trim()))
    })
}

// =========================================================================
// Submissions
// =========================================================================

/// Register a user; a password mismatch never reaches the network
pub async fn submit_registration(
    client: &Client,
    form: &RegistrationForm,
) -> CliClientResult<Outcome<()>> {
    let user = form.to_payload()?;
    client.register(&user).await
}

pub async fn submit_create(
    client: &Client,
    identity: &Identity,
    form: &SessionForm,
    owner_field: OwnerField,
) -> CliClientResult<Outcome<Option<TutoringSession>>> {
    let session = form.to_payload(identity, owner_field)?;
    client.create_session(identity, &session).await
}

pub async fn submit_update(
    client: &Client,
    identity: &Identity,
    id: i64,
    form: &SessionEditForm,
) -> CliClientResult<Outcome<()>> {
    let update = form.to_payload()?;
    client.update_session(identity, id, &update).await
}

pub async fn submit_delete(
    client: &Client,
    identity: &Identity,
    id: i64,
) -> CliClientResult<Outcome<()>> {
    client.delete_session(identity, id).await
}
