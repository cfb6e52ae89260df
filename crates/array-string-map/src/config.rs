//! Map configuration parameters.

/// Configuration for an [`ArrayStringMap`](crate::ArrayStringMap).
///
/// Fixed at construction; the separator cannot change once entries exist,
/// since every stored encoded key depends on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
    /// String placed between the rendered elements of a key.
    ///
    /// Default: U+200B ZERO WIDTH SPACE, which rarely occurs in trusted
    /// data. When keys carry arbitrary user input, either strip this
    /// character during validation or choose a separator the validation
    /// already rules out. Not validated.
    pub separator: String,

    /// Number of entries to reserve space for up front.
    ///
    /// Default: 0 (allocate lazily).
    pub capacity: usize,
}

impl MapConfig {
    /// Default separator: the zero-width space.
    pub const DEFAULT_SEPARATOR: &'static str = "\u{200b}";

    /// Default initial capacity.
    pub const DEFAULT_CAPACITY: usize = 0;

    /// Create a config with the default separator and capacity.
    pub fn new() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR.to_owned(),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Replace the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the initial capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether the separator differs from [`Self::DEFAULT_SEPARATOR`].
    pub fn has_custom_separator(&self) -> bool {
        self.separator != Self::DEFAULT_SEPARATOR
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_separator_is_zero_width_space() {
        let config = MapConfig::default();
        assert_eq!(config.separator, "\u{200b}");
        assert_eq!(config.separator.chars().count(), 1);
        assert!(!config.has_custom_separator());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = MapConfig::new().with_separator("|").with_capacity(64);
        assert_eq!(config.separator, "|");
        assert_eq!(config.capacity, 64);
        assert!(config.has_custom_separator());
    }
}
