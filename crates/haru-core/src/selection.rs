//! Random card selection.
//!
//! Picks uniformly from the filtered catalog pool. There is no
//! repeat-avoidance: the same card may come up on consecutive draws.

use rand::Rng;

use crate::card::{AffirmationCard, CategoryFilter};
use crate::catalog::Catalog;
use crate::error::{HaruError, Result};

/// Selects a card uniformly at random from the catalog records matching
/// `filter`.
///
/// The `quote` pseudo-category is not served from the catalog; callers
/// route it to the quote provider before reaching this function. An empty
/// pool is a configuration error: the bundled catalog guarantees records
/// for every catalog category.
pub fn select_card<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    filter: CategoryFilter,
    rng: &mut R,
) -> Result<&'a AffirmationCard> {
    let pool = catalog.pool(filter);
    if pool.is_empty() {
        return Err(HaruError::config(format!(
            "no catalog records for filter '{}'",
            filter
        )));
    }
    let index = rng.gen_range(0..pool.len());
    Ok(pool[index])
}
