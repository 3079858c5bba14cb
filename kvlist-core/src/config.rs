//! Configuration for a kvlist client
//!
//! Re-architected per DESIGN NOTES in SPEC_FULL.md: an explicit value
//! built once via [`ConfigurationBuilder`] and passed into the client,
//! rather than a process-wide mutable record.

/// The default `maxElementPerPage`, used when the caller never calls
/// [`ConfigurationBuilder::max_element_per_page`]
pub const DEFAULT_MAX_ELEMENT_PER_PAGE: usize = 50;

/// Where the list family lives in the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub region: String,
    pub table_name: String,
}

/// Process-wide settings recognized by kvlist
///
/// # Example
///
/// ```
/// use kvlist_core::config::Configuration;
///
/// let config = Configuration::builder()
///     .store("us-east-1", "lists")
///     .max_element_per_page(2)
///     .build();
///
/// assert_eq!(config.max_element_per_page(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    store: StoreConfig,
    max_element_per_page: usize,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn max_element_per_page(&self) -> usize {
        self.max_element_per_page
    }
}

/// Builds a [`Configuration`] via the two calls named in the callable
/// surface: `ConfigureStore` and `ConfigureMaximumNumberOfElementPerPage`
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    store: Option<StoreConfig>,
    max_element_per_page: Option<usize>,
}

impl ConfigurationBuilder {
    /// `ConfigureStore(region, table)`
    pub fn store(mut self, region: impl Into<String>, table_name: impl Into<String>) -> Self {
        self.store = Some(StoreConfig {
            region: region.into(),
            table_name: table_name.into(),
        });
        self
    }

    /// `ConfigureMaximumNumberOfElementPerPage(n)`
    ///
    /// `n` is clamped to a minimum of 1 per spec.md §4.5.
    pub fn max_element_per_page(mut self, n: usize) -> Self {
        self.max_element_per_page = Some(n.max(1));
        self
    }

    /// Finalizes the configuration
    ///
    /// # Panics
    ///
    /// Panics if [`ConfigurationBuilder::store`] was never called: a
    /// client cannot exist without a target table, unlike
    /// `max_element_per_page`, which has a documented default.
    pub fn build(self) -> Configuration {
        Configuration {
            store: self.store.expect("ConfigureStore must be called before build()"),
            max_element_per_page: self
                .max_element_per_page
                .unwrap_or(DEFAULT_MAX_ELEMENT_PER_PAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_max_element_per_page_to_fifty() {
        let config = Configuration::builder().store("us-east-1", "lists").build();
        assert_eq!(config.max_element_per_page(), 50);
    }

    #[test]
    fn clamps_max_element_per_page_to_one() {
        let config = Configuration::builder()
            .store("us-east-1", "lists")
            .max_element_per_page(0)
            .build();
        assert_eq!(config.max_element_per_page(), 1);
    }
}
