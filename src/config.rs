//! Configuration for memkv
//!
//! Centralized configuration with sensible defaults.

/// Default number of entries a store can hold
pub const MAX_ENTRIES: usize = 1024;

/// Default maximum key length in bytes
pub const MAX_KEY_LEN: usize = 99;

/// Default maximum value length in bytes
pub const MAX_VALUE_LEN: usize = 1023;

/// Default maximum command line length in bytes (excluding the newline)
pub const MAX_LINE_LEN: usize = 2048;

/// Default minimum width of a dump column
pub const COLUMN_WIDTH: usize = 8;

/// Main configuration for a memkv store and its shell
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Hard capacity of the entry table
    pub max_entries: usize,

    /// Longest accepted key, in bytes
    pub max_key_len: usize,

    /// Longest accepted raw value, in bytes
    pub max_value_len: usize,

    /// Cells in the dump are padded to at least this many characters
    pub column_width: usize,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Longest accepted command line, in bytes
    pub max_line_len: usize,

    /// Print the greeting banner when a session starts
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: MAX_ENTRIES,
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            column_width: COLUMN_WIDTH,
            max_line_len: MAX_LINE_LEN,
            show_banner: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the entry table capacity
    pub fn max_entries(mut self, count: usize) -> Self {
        self.config.max_entries = count;
        self
    }

    /// Set the maximum key length (in bytes)
    pub fn max_key_len(mut self, len: usize) -> Self {
        self.config.max_key_len = len;
        self
    }

    /// Set the maximum value length (in bytes)
    pub fn max_value_len(mut self, len: usize) -> Self {
        self.config.max_value_len = len;
        self
    }

    /// Set the dump column width
    pub fn column_width(mut self, width: usize) -> Self {
        self.config.column_width = width;
        self
    }

    /// Set the maximum command line length (in bytes)
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    /// Enable or disable the session banner
    pub fn show_banner(mut self, show: bool) -> Self {
        self.config.show_banner = show;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
