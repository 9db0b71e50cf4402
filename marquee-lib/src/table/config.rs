//! Table view configuration

/// Presentation settings for a [`DataTable`](super::DataTable).
///
/// # Example
///
/// ```
/// use marquee_lib::table::ViewConfig;
///
/// let config = ViewConfig::default()
///     .with_page_size(25)
///     .with_search_fields(["name", "city"]);
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Text of the row shown when nothing matches.
    ///
    /// Default: "No results."
    pub placeholder: String,

    /// Fields searched by the search box; `None` searches every string field.
    pub search_fields: Option<Vec<String>>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            placeholder: "No results.".to_string(),
            search_fields: None,
        }
    }
}

impl ViewConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the empty-state placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Restricts search to the given fields.
    pub fn with_search_fields<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}
