//! Searching a stored item end to end.

use folio_layout::{Layout, load_layout};
use folio_leaves::{DerivativeSize, DerivativeStore, Item, ItemFile, LeafError, RasterPatterns};
use folio_query::normalize;
use rayon::prelude::*;

use crate::{
    DimensionTable, FulltextError, MatchResult, SearchParams,
    matcher::{Deadline, search_layout_until},
};

/// Searches an item's OCR layout for a raw query.
///
/// The query is normalized first; a query too short to search returns no
/// results without touching storage. Otherwise the item's first `xml` file is
/// parsed while the fullsize leaf images are probed for their pixel sizes, and
/// the layout is matched against the resulting dimension table. Any failure
/// fails the whole search; no partial results are returned.
///
/// The params' timeout covers the whole call, including loading.
pub fn search_fulltext<S>(
    raw_query: &str,
    item: &Item,
    store: &S,
    patterns: &RasterPatterns,
    params: &SearchParams,
) -> Result<Vec<MatchResult>, FulltextError>
where
    S: DerivativeStore + Sync,
{
    let deadline = Deadline::start(params);
    let query = normalize(raw_query);
    if query.is_empty() {
        log::debug!("query {raw_query:?} is too short to search");
        return Ok(Vec::new());
    }
    let layout_file = item
        .layout_file()
        .ok_or(FulltextError::NoLayoutAvailable)?;
    let leaves = item.leaves(patterns);

    let (layout, dims) = rayon::join(
        || load_layout(&store.original_path(layout_file)),
        || probe_dimensions(&leaves, store),
    );
    let layout = layout?;
    let dims = dims?;
    log::debug!(
        "searching {} pages, {} zones, {} leaves for {:?}",
        layout.pages.len(),
        layout.zone_count(),
        dims.len(),
        query.normalized
    );

    Ok(search_layout_until(&layout, &query, &dims, params, deadline)?)
}

/// Loads an item's OCR layout without searching it.
pub fn load_item_layout<S: DerivativeStore>(item: &Item, store: &S) -> Result<Layout, FulltextError> {
    let layout_file = item
        .layout_file()
        .ok_or(FulltextError::NoLayoutAvailable)?;
    Ok(load_layout(&store.original_path(layout_file))?)
}

/// Reads the fullsize pixel size of every leaf, in leaf order.
pub fn probe_dimensions<S>(leaves: &[&ItemFile], store: &S) -> Result<DimensionTable, LeafError>
where
    S: DerivativeStore + Sync,
{
    let dims = leaves
        .par_iter()
        .map(|leaf| store.dimensions(leaf, DerivativeSize::Fullsize))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DimensionTable::from_ordered(dims))
}
