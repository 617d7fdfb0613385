use super::{category_map, CategoriesPayload};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &S) -> Result<CategoriesPayload> {
    let categories = category_map(store)?;
    debug!(count = categories.len(), "listed categories");

    Ok(CategoriesPayload {
        success: true,
        categories,
    })
}
