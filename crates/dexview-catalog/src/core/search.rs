use crate::data::CatalogEntry;

/// Search terms are matched case-insensitively against lowercase names.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// Entries whose name contains `term`, in catalog order.
///
/// An empty term matches every entry.
///
/// # Examples
///
/// ```
/// use dexview_catalog::{CatalogEntry, core::filter_by_term};
///
/// let catalog = vec![
///     CatalogEntry::new("charmander", "https://pokeapi.co/api/v2/pokemon/4/"),
///     CatalogEntry::new("squirtle", "https://pokeapi.co/api/v2/pokemon/7/"),
/// ];
/// let hits = filter_by_term(&catalog, "CHAR");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "charmander");
/// ```
pub fn filter_by_term(entries: &[CatalogEntry], term: &str) -> Vec<CatalogEntry> {
    let term = normalize_term(term);
    entries
        .iter()
        .filter(|entry| entry.name.contains(&term))
        .cloned()
        .collect()
}
