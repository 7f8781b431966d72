use crate::{
    CliClientResult, ClientError, Outcome,
    client::detail::extract_detail,
    models::{
        Identity, ListScope, NewSession, NewUser, SessionUpdate, TokenResponse, TutoringSession,
        UserProfile,
    },
};

use std::time::Duration;

use log::{debug, error, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the asesorías REST API
pub struct Client {
    base_url: Url,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://asesorias-api.azurewebsites.net")
    /// * `timeout` - Bound on every request, from connect to the last body byte
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ClientError::url(format!("'{base_url}' is not a URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::url(format!("'{base_url}' cannot be a base URL")));
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL
    pub(crate) fn endpoint(&self, segments: &[&str]) -> CliClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::url(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a request, attaching the identity's bearer token when it has one
    fn request(&self, method: Method, url: Url, identity: Option<&Identity>) -> RequestBuilder {
        debug!("{} {}", method, url.path());
        let mut req = self.client.request(method, url);

        if let Some(token) = identity.and_then(Identity::bearer) {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send a request and read the whole body
    async fn execute(&self, req: RequestBuilder) -> CliClientResult<(StatusCode, String)> {
        let response = req.send().await.map_err(|e| {
            error!("Request failed before a response arrived: {e}");
            ClientError::from_reqwest(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::NO_CONTENT {
            warn!("{} answered {}", response.url().path(), status);
        }

        let body = response.text().await.map_err(ClientError::from_reqwest)?;
        Ok((status, body))
    }

    /// Classify a reply purely by status code
    fn outcome(status: StatusCode, body: String) -> CliClientResult<Outcome<String>> {
        match status {
            StatusCode::OK => Ok(Outcome::Done(body)),
            StatusCode::NO_CONTENT => Ok(Outcome::NoContent),
            other => Err(ClientError::resource(other.as_u16(), extract_detail(&body))),
        }
    }

    /// Decode a 200 body, anything else is an error
    fn expect_ok<T: DeserializeOwned>(status: StatusCode, body: &str) -> CliClientResult<T> {
        if status != StatusCode::OK {
            return Err(ClientError::resource(status.as_u16(), extract_detail(body)));
        }
        Ok(serde_json::from_str(body)?)
    }

    // =========================================================================
    // Auth and User Operations
    // =========================================================================

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> CliClientResult<TokenResponse> {
        let url = self.endpoint(&["auth", "token"])?;
        let req = self
            .request(Method::POST, url, None)
            .form(&[("username", username), ("password", password)]);
        let (status, body) = self.execute(req).await?;

        if status != StatusCode::OK {
            warn!("Login rejected for {username}: {}", extract_detail(&body));
            return Err(ClientError::auth("Login failed."));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Unreadable token response: {e}");
            ClientError::auth("Login failed: the server sent an unreadable token.")
        })?;

        if token.access_token.trim().is_empty() {
            return Err(ClientError::auth("Login failed: the server sent an empty token."));
        }

        Ok(token)
    }

    /// Register a new user account
    pub async fn register(&self, user: &NewUser) -> CliClientResult<Outcome<()>> {
        let url = self.endpoint(&["usuarios"])?;
        let req = self.request(Method::POST, url, None).json(user);
        let (status, body) = self.execute(req).await?;
        Ok(Self::outcome(status, body)?.map(|_| ()))
    }

    /// Look up a user record by username
    pub async fn get_user(&self, identity: &Identity, username: &str) -> CliClientResult<UserProfile> {
        let url = self.endpoint(&["usuarios", "username", username])?;
        let req = self.request(Method::GET, url, Some(identity));
        let (status, body) = self.execute(req).await?;
        Self::expect_ok(status, &body)
    }

    // =========================================================================
    // Tutoring Session Operations
    // =========================================================================

    /// List tutoring sessions in the given scope
    pub async fn list_sessions(
        &self,
        identity: &Identity,
        scope: &ListScope,
    ) -> CliClientResult<Vec<TutoringSession>> {
        let url = match scope {
            ListScope::Token => self.endpoint(&["asesorias"])?,
            ListScope::Username(username) => {
                self.endpoint(&["asesorias", "username", username.as_str()])?
            }
            ListScope::UserId(user_id) => {
                let mut url = self.endpoint(&["asesorias"])?;
                url.query_pairs_mut()
                    .append_pair("usuario_id", &user_id.to_string());
                url
            }
        };

        let req = self.request(Method::GET, url, Some(identity));
        let (status, body) = self.execute(req).await?;
        Self::expect_ok(status, &body)
    }

    /// Create a tutoring session; the server assigns the id
    ///
    /// A 200 is success whatever the body says. The created session is
    /// returned only when the body decodes as one.
    pub async fn create_session(
        &self,
        identity: &Identity,
        session: &NewSession,
    ) -> CliClientResult<Outcome<Option<TutoringSession>>> {
        let url = self.endpoint(&["asesorias"])?;
        let req = self.request(Method::POST, url, Some(identity)).json(session);
        let (status, body) = self.execute(req).await?;

        Ok(Self::outcome(status, body)?.map(|body| {
            serde_json::from_str::<TutoringSession>(&body)
                .inspect_err(|e| warn!("Session created but the reply is not a session: {e}"))
                .ok()
        }))
    }

    /// Update a tutoring session
    pub async fn update_session(
        &self,
        identity: &Identity,
        id: i64,
        update: &SessionUpdate,
    ) -> CliClientResult<Outcome<()>> {
        let id = id.to_string();
        let url = self.endpoint(&["asesorias", id.as_str()])?;
        let req = self.request(Method::PUT, url, Some(identity)).json(update);
        let (status, body) = self.execute(req).await?;
        Ok(Self::outcome(status, body)?.map(|_| ()))
    }

    /// Delete a tutoring session; 200 and 204 both mean it is gone
    pub async fn delete_session(&self, identity: &Identity, id: i64) -> CliClientResult<Outcome<()>> {
        let id = id.to_string();
        let url = self.endpoint(&["asesorias", id.as_str()])?;
        let req = self.request(Method::DELETE, url, Some(identity));
        let (status, body) = self.execute(req).await?;
        Ok(Self::outcome(status, body)?.map(|_| ()))
    }
}
