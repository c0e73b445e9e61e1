use serde::{Deserialize, Serialize};

/// A posting package offered to property sellers.
///
/// The description is rich HTML from the editor; images stay inline as data
/// URIs for packages, they are small and never uploaded separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingPackage {
    pub id: String,
    pub name: String,
    /// Monthly price in whole euros.
    pub price: u64,
    pub description: String,
}
