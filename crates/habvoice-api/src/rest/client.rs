// Hand-crafted async HTTP client for the openHAB REST API.
//
// Base path: /rest/
// Auth: Authorization: Bearer <token>

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types;
use crate::Error;
use crate::transport::TransportConfig;

/// Async client for the openHAB REST API.
///
/// Authenticates with a bearer API token injected as a default header and
/// speaks JSON for reads, plain text for item commands.
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL, API token, and transport config.
    ///
    /// Injects `Authorization: Bearer <token>` as a sensitive default
    /// header on every request.
    pub fn from_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid token header value: {e}"),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL ending in `/rest/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/rest") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/rest/"));
        }

        Ok(url)
    }

    /// The server base URL (ends in `/rest/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"items"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// POST a plain-text body; only success/failure is observed.
    async fn post_plain(&self, path: &str, body: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body.to_owned())
            .send()
            .await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Error::Authentication {
                message: format!("server rejected API token (HTTP {})", status.as_u16()),
            };
        }

        let raw = resp.text().await.unwrap_or_default();
        Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Get server system information.
    ///
    /// `GET /rest/systeminfo`
    pub async fn system_info(&self) -> Result<types::SystemInfoResponse, Error> {
        self.get("systeminfo").await
    }

    /// List all items in the server's inventory.
    ///
    /// `GET /rest/items`
    pub async fn list_items(&self) -> Result<Vec<types::RawItem>, Error> {
        self.get("items").await
    }

    /// Send a command string to a single item.
    ///
    /// `POST /rest/items/{id}` with a plain-text body. The command token is
    /// sent verbatim; no response body is consumed.
    pub async fn send_item_command(&self, item: &str, command: &str) -> Result<(), Error> {
        self.post_plain(&format!("items/{item}"), command).await
    }
}
