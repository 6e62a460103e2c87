//! Collection name routing
//!
//! Front-end code addresses resources by their singular name
//! (`api/customer/1`) while the store keys them by plural. The mapping is a
//! fixed table with no pluralization rules.

/// Routing table from URL segment to collection name
const COLLECTION_NAMES: &[(&str, &str)] = &[("customer", "customers"), ("order", "orders")];

/// Map a URL segment to the collection it addresses
///
/// Matching is exact and case-sensitive; unknown names are returned as is.
///
/// # Examples
///
/// ```
/// use mockapi::core::naming::map_collection_name;
///
/// assert_eq!(map_collection_name("customer"), "customers");
/// assert_eq!(map_collection_name("widgets"), "widgets");
/// ```
pub fn map_collection_name(name: &str) -> String {
    COLLECTION_NAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |&(_, to)| to)
        .to_string()
}
