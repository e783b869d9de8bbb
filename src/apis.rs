mod delete;
mod list;
mod replace;

pub use delete::*;
pub use list::*;
pub use replace::*;

use serde::Deserialize;
use serde_json::Value;

/// A single API resource published on the gateway, owned by one tenant and
/// identified by its basepath within that tenant
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayApi {
    /// The opaque id the gateway assigned to this API
    pub id: String,
    /// The id of the tenant owning this API
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    /// The basepath under which this API is published
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// The gateway-native endpoint definition document, kept opaque here
    /// and only interpreted by the endpoints module
    #[serde(rename = "openApiDoc")]
    pub open_api_doc: Value,
}
