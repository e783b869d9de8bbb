use crate::apis::GatewayApi;
use crate::Error;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The operations published under one path, keyed by lower-case http
/// method, each carrying the gateway's routing metadata for that endpoint
pub type PathEntry = BTreeMap<String, Value>;

/// The editable model of one API's paths and operations. It is produced
/// from the gateway-native representation, mutated in memory and sent back
/// as a full replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDocument {
    /// The basepath the API is published under
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// All paths of the API and the operations under each of them
    #[serde(default)]
    pub paths: BTreeMap<String, PathEntry>,
    /// Any further fields of the gateway document, carried along untouched
    /// so the replacement round-trip does not lose them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Converts the gateway-native endpoint representation of the given API
/// into the editable document model. This is a structural transform only,
/// every path and operation maps 1:1.
pub fn to_editable_document(api: &GatewayApi) -> Result<EndpointDocument, Error> {
    match serde_json::from_value(api.open_api_doc.clone()) {
        Err(e) => Err(Error::from(e)),
        Ok(doc) => Ok(doc),
    }
}

/// Identifies the part of an API to remove, a path and optionally a single
/// operation under it. No operation means the whole path is meant.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSelector {
    /// The path within the API, relative to its basepath
    pub relpath: String,
    /// The http method of the single endpoint to remove, already
    /// lower-cased by validation
    pub operation: Option<String>,
}
