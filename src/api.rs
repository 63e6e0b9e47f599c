//! API gateway client.
//!
//! One thin layer over the remote REST API: every request goes through
//! here so the bearer token is attached uniformly. There is no token
//! refresh and no retry policy; a failing request surfaces its error to
//! the caller unchanged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ErrorBody, LoginRequest, LoginResponse};
use crate::session;

/// Base URL for the management API. Override at build time with
/// `SALON_API_URL`; defaults to a same-origin reverse proxy.
pub const BASE_URL: &str = match option_env!("SALON_API_URL") {
    Some(url) => url,
    None => "/api",
};

pub const AUTH_LOGIN: &str = "/auth/login/";
pub const CLIENTS: &str = "/clients/";
pub const SERVICES: &str = "/services/";
pub const APPOINTMENTS: &str = "/appointments/";
pub const PRODUCTS: &str = "/products/";
pub const USERS: &str = "/users/";
pub const DASHBOARD: &str = "/dashboard/";
pub const REPORTS: &str = "/reports/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response; the message is the server's `detail` field when
    /// the body carries one.
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Item endpoint for a collection, e.g. `/clients/42/`.
pub fn item(collection: &str, id: i64) -> String {
    format!("{collection}{id}/")
}

/// Reports endpoint with the date range in the query string.
pub fn reports_query(start_date: &str, end_date: &str) -> String {
    format!(
        "{REPORTS}?start_date={}&end_date={}",
        urlencoding::encode(start_date),
        urlencoding::encode(end_date)
    )
}

fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Attach the persisted bearer token when one exists; otherwise the
/// request goes out unauthenticated and the server rejects it.
fn authorize(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match session::stored_access_token() {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("server returned {status}"),
    };
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    Ok(check(resp).await?.json::<T>().await?)
}

/// GET a JSON resource.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorize(reqwest::Client::new().get(url(path)))
        .send()
        .await?;
    read_json(resp).await
}

/// POST a JSON body, returning the created record.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorize(reqwest::Client::new().post(url(path)))
        .json(body)
        .send()
        .await?;
    read_json(resp).await
}

/// PUT a JSON body, returning the updated record.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorize(reqwest::Client::new().put(url(path)))
        .json(body)
        .send()
        .await?;
    read_json(resp).await
}

/// DELETE an item endpoint.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = authorize(reqwest::Client::new().delete(url(path)))
        .send()
        .await?;
    check(resp).await.map(|_| ())
}

/// Authenticate against the login endpoint. Sent without a bearer token.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let req = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let resp = reqwest::Client::new()
        .post(url(AUTH_LOGIN))
        .json(&req)
        .send()
        .await?;
    read_json(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        assert_eq!(item(CLIENTS, 42), "/clients/42/");
        assert_eq!(item(USERS, 7), "/users/7/");
    }

    #[test]
    fn test_reports_query_encodes_dates() {
        assert_eq!(
            reports_query("2026-08-01", "2026-08-31"),
            "/reports/?start_date=2026-08-01&end_date=2026-08-31"
        );
        // Anything odd the browser hands us still ends up URL-safe.
        assert_eq!(
            reports_query("2026 08 01", ""),
            "/reports/?start_date=2026%2008%2001&end_date="
        );
    }

    #[test]
    fn test_api_error_display_is_the_server_detail() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
