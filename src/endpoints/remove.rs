use crate::endpoints::{EndpointDocument, EndpointSelector};
use crate::Error;

/// Removes the selected endpoint from the document, in place.
///
/// With an operation in the selector only that one operation is dropped,
/// and the path entry is dropped with it when no operations remain under
/// it, a path without operations is not a valid state. Without an
/// operation the whole path entry is dropped, no matter how many
/// operations it holds.
///
/// This function has no external side effects, given the same document and
/// selector it always produces the same result.
pub fn remove_endpoint(
    document: &mut EndpointDocument,
    selector: &EndpointSelector,
) -> Result<(), Error> {
    let entry = match document.paths.get_mut(&selector.relpath) {
        None => {
            return Err(Error::NotFound(format!(
                "path {} does not exist in the API",
                selector.relpath
            )))
        }
        Some(e) => e,
    };

    let operation = match &selector.operation {
        None => {
            document.paths.remove(&selector.relpath);
            return Ok(());
        }
        Some(op) => op,
    };

    // Documents normally key operations in lower case, but that is a
    // convention rather than a guarantee
    let key = match entry
        .keys()
        .find(|k| k.eq_ignore_ascii_case(operation))
        .cloned()
    {
        None => {
            return Err(Error::NotFound(format!(
                "operation {} does not exist under path {}",
                operation, selector.relpath
            )))
        }
        Some(k) => k,
    };

    entry.remove(&key);
    if entry.is_empty() {
        document.paths.remove(&selector.relpath);
    }

    Ok(())
}
