use crate::Credentials;
use crate::Error;

use serde::Serialize;
use url::Url;

/// The Client struct represents a connection to a single gateway management
/// endpoint that can be used for any further requests to the gateway
pub struct Client {
    credentials: Credentials,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client for the gateway described by the given credentials
    pub fn new(credentials: Credentials) -> Client {
        Client {
            credentials,
            http: reqwest::Client::new(),
        }
    }

    /// This function is a general way to directly make requests to the
    /// gateway's management API. This can be used to make custom requests or
    /// to make requests to endpoints that are not directly covered by this
    /// crate.
    pub async fn gateway_request<T: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<reqwest::Response, Error> {
        let url = Url::parse(&self.credentials.gw_url)?
            .join("v2/")?
            .join(path)?;

        let mut req = self.http.request(method, url);

        if let Some(auth) = self.credentials.authorization() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;

        let status_code = resp.status().as_u16();

        match status_code {
            200 | 201 | 204 => Ok(resp),
            _ => {
                let detail = resp.text().await.unwrap_or_default();
                Err(Error::Upstream(format!(
                    "gateway returned status {}: {}",
                    status_code, detail
                )))
            }
        }
    }
}
