//! Query options accepted by list endpoints.

use xelon_core::{ListOptions, QueryParams, ToQuery};

/// Sorting, free-text search and pagination for list endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchListOptions {
    /// Sort expression, e.g. `name` or `-createdAt`.
    pub sort: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Pagination.
    pub list: ListOptions,
}

impl SearchListOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort the results.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Filter by a search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set pagination.
    #[must_use]
    pub const fn with_list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }
}

impl ToQuery for SearchListOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_non_empty("sort", self.sort.as_deref().unwrap_or_default());
        params.push_non_empty("search", self.search.as_deref().unwrap_or_default());
        params.extend_from(&self.list);
        params.into_pairs()
    }
}

/// List options for templates, which can also be filtered by type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateListOptions {
    /// Common sort/search/pagination options.
    pub search: SearchListOptions,
    /// Template type filter, e.g. `custom`.
    pub template_type: Option<String>,
}

impl TemplateListOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to templates of the given type.
    #[must_use]
    pub fn with_type(mut self, template_type: impl Into<String>) -> Self {
        self.template_type = Some(template_type.into());
        self
    }

    /// Set the shared sort/search/pagination options.
    #[must_use]
    pub fn with_search(mut self, search: SearchListOptions) -> Self {
        self.search = search;
        self
    }
}

impl ToQuery for TemplateListOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.extend_from(&self.search);
        params.push_non_empty("type", self.template_type.as_deref().unwrap_or_default());
        params.into_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xelon_core::add_options;

    #[test]
    fn search_options_encode_sorted() {
        let options = SearchListOptions::new()
            .with_search("db")
            .with_sort("name")
            .with_list(ListOptions::new().with_page(2));
        assert_eq!(
            add_options("devices", Some(&options)).unwrap(),
            "devices?page=2&search=db&sort=name"
        );
    }

    #[test]
    fn empty_strings_are_skipped() {
        let options = SearchListOptions::new().with_search("");
        assert!(options.to_pairs().is_empty());
    }

    #[test]
    fn template_type_is_encoded() {
        let options = TemplateListOptions::new()
            .with_type("custom")
            .with_search(SearchListOptions::new().with_list(ListOptions::new().with_per_page(5)));
        assert_eq!(
            add_options("templates", Some(&options)).unwrap(),
            "templates?per_page=5&type=custom"
        );
    }
}
