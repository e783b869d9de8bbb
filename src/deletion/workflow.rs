use crate::apis;
use crate::apis::GatewayApi;
use crate::deletion::{validate, DeleteParams, DeleteRequest};
use crate::endpoints;
use crate::tenants;
use crate::Client;
use crate::Error;

/// Removes an API mapping from the gateway, in whole or in part.
///
/// The request's namespace and instance are resolved to exactly one tenant
/// and its basepath to exactly one API. Without a relpath that API is
/// deleted entirely. With one, the selected path or operation is removed
/// from the API's endpoint document and the document is republished as a
/// full replacement.
///
/// The steps run strictly in order, each one only starts after the
/// previous one succeeded and the first failure aborts the whole workflow.
/// Nothing is retried and no state is kept across invocations.
pub async fn delete_route(params: Option<DeleteRequest>) -> Result<(), Error> {
    let params = validate(params)?;
    let client = Client::new(params.credentials.clone());

    match run(&client, &params).await {
        Ok(()) => Ok(()),
        Err(e) => Err(finalize(e)),
    }
}

async fn run(client: &Client, params: &DeleteParams) -> Result<(), Error> {
    let tenant_id = resolve_tenant(client, params).await?;
    let api = resolve_api(client, &tenant_id, &params.basepath).await?;

    match &params.selector {
        None => {
            tracing::debug!(api = %api.id, "deleting whole API");
            apis::delete(client, &api.id).await
        }
        Some(selector) => {
            let mut document = endpoints::to_editable_document(&api)?;
            endpoints::remove_endpoint(&mut document, selector)?;

            tracing::debug!(api = %api.id, relpath = %selector.relpath, "republishing edited API");
            apis::replace(client, &tenant_id, &document, &api.id).await
        }
    }
}

async fn resolve_tenant(client: &Client, params: &DeleteParams) -> Result<String, Error> {
    let mut matches = tenants::list(client, &params.namespace, &params.tenant_instance).await?;

    match matches.len() {
        0 => Err(Error::NotFound(format!(
            "No tenant found for namespace {} and instance {}",
            params.namespace, params.tenant_instance
        ))),
        1 => Ok(matches.remove(0).id),
        n => {
            tracing::error!(
                namespace = %params.namespace,
                instance = %params.tenant_instance,
                matches = n,
                "tenant lookup matched more than one tenant"
            );
            Err(Error::Ambiguous(format!(
                "Internal error: {} tenants match namespace {} and instance {}",
                n, params.namespace, params.tenant_instance
            )))
        }
    }
}

async fn resolve_api(client: &Client, tenant_id: &str, basepath: &str) -> Result<GatewayApi, Error> {
    let mut matches = apis::list(client, tenant_id, basepath).await?;

    match matches.len() {
        0 => Err(Error::NotFound(format!("API {} does not exist", basepath))),
        1 => Ok(matches.remove(0)),
        n => {
            tracing::error!(
                tenant = %tenant_id,
                basepath = %basepath,
                matches = n,
                "API lookup matched more than one API"
            );
            Err(Error::Ambiguous(format!(
                "Internal error: {} APIs match basepath {}",
                n, basepath
            )))
        }
    }
}

// Input, not-found and ambiguity messages surface to the caller exactly as
// written, collaborator failures get the one consistent prefix
fn finalize(err: Error) -> Error {
    match err {
        Error::Input(_) | Error::NotFound(_) | Error::Ambiguous(_) => err,
        other => Error::Upstream(format!("API deletion failure: {}", other)),
    }
}
