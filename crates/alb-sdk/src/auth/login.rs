/*
[INPUT]:  Client credentials and the controller `/login` endpoint
[OUTPUT]: Established session with the CSRF token captured from cookies
[POS]:    Auth layer - orchestrates the login/logout flow
[UPDATE]: When login endpoints or session cookies change
*/

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, REFERER};
use tracing::{debug, info};

use crate::http::{ApiOptions, AviClient, AviError, Result};

/// Cookie the controller sets at login; echoed back as `X-CSRFToken`.
pub const CSRF_COOKIE: &str = "csrftoken";

impl AviClient {
    /// Log in and store the session.
    ///
    /// Called automatically by the first request and again when a request
    /// comes back with 401.
    pub async fn login(&self) -> Result<()> {
        let url = self.url("login")?;
        let username = self.credentials().username().to_string();
        debug!(%url, %username, "logging in to controller");

        let response = self
            .http_client()
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER, self.config().base_url()?.as_str())
            .json(&self.credentials().login_body())
            .send()
            .await
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        let csrf_token = response
            .cookies()
            .find(|cookie| cookie.name() == CSRF_COOKIE)
            .map(|cookie| cookie.value().to_string());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match AviError::api_error(status, &body) {
                AviError::Api { message, .. } => message,
                other => other.to_string(),
            };
            return Err(AviError::Authentication {
                message: format!("login as {username} rejected ({status}): {message}"),
            });
        }

        self.session().set(csrf_token, username.as_str());
        info!(%username, controller = %self.config().controller, "controller session established");
        Ok(())
    }

    /// End the session on the controller and forget it locally.
    pub async fn logout(&self) -> Result<()> {
        if !self.session().is_active() {
            return Ok(());
        }
        let result = self
            .execute(Method::POST, "logout", None, &ApiOptions::new())
            .await;
        self.session().clear();
        result.map(|_| ())
    }
}
