/// Listing filter. Both criteria, when present, must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Empty strings count as "no criterion".
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            category: category.filter(|c| !c.is_empty()),
        }
    }
}
