#![warn(missing_docs)]
//! A simple async library to manage API mappings on an API gateway
//!
//! The gateway publishes APIs on behalf of tenants, where every tenant is
//! identified by a (namespace, instance) pair and every API by its basepath.
//! This crate talks to the gateway's management endpoint to look those
//! resources up and to remove a published API, either as a whole or one
//! endpoint at a time.

/// The apis module is used for all interactions with the gateway's API resources
pub mod apis;
/// The deletion module contains the workflow that removes an API mapping
pub mod deletion;
/// The endpoints module holds the editable model of one API's paths and operations
pub mod endpoints;
/// The tenants module is used for all interactions with the gateway's tenants
pub mod tenants;

mod client;
mod errors;

pub use client::Client;
pub use errors::Error;

use base64::Engine;
use std::fmt;

/// The Credentials struct describes how to reach one gateway management
/// endpoint and how to authorize against it
#[derive(Clone)]
pub struct Credentials {
    /// The base URL of the gateway management endpoint
    pub gw_url: String,

    token: Option<String>,
}

impl Credentials {
    /// Creates credentials for a gateway that does not require authorization
    pub fn new(gw_url: String) -> Credentials {
        Credentials {
            gw_url,
            token: None,
        }
    }

    /// Creates credentials that authorize with http basic-auth, the token
    /// is encoded once here and the raw password is not kept around
    pub fn with_basic_auth(gw_url: String, user: &str, password: &str) -> Credentials {
        let raw = format!("{}:{}", user, password);
        let token = base64::engine::general_purpose::STANDARD.encode(raw);

        Credentials {
            gw_url,
            token: Some(token),
        }
    }

    /// The value for the Authorization header, if any was configured
    pub(crate) fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Basic {}", t))
    }
}

// The token must never show up in log output, so no derived Debug here
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("gw_url", &self.gw_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
