use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    #[config(nested)]
    pub code_style: CodeStyle,
}

/// Indentation settings applied by [`reindent`].
#[derive(Debug, Clone, PartialEq, Eq, confique::Config)]
pub struct CodeStyle {
    #[config(env = "SIDDHI_INDENT_SIZE", default = 4)]
    pub indent_size: usize,
    #[config(env = "SIDDHI_CONTINUATION_INDENT_SIZE", default = 4)]
    pub continuation_indent_size: usize,
    #[config(env = "SIDDHI_TAB_SIZE", default = 4)]
    pub tab_size: usize,
    #[config(env = "SIDDHI_USE_TAB_CHARACTER", default = false)]
    pub use_tab_character: bool,
    #[config(env = "SIDDHI_BLOCK_COMMENT_AT_FIRST_COLUMN", default = false)]
    pub block_comment_at_first_column: bool,
    #[config(env = "SIDDHI_LINE_COMMENT_AT_FIRST_COLUMN", default = false)]
    pub line_comment_at_first_column: bool,
}

impl Default for CodeStyle {
    fn default() -> Self {
        CodeStyle::builder()
            .load()
            .expect("every code style setting has a default")
    }
}

impl CodeStyle {
    /// Leading whitespace covering `columns` visual columns.
    pub fn indent(&self, columns: usize) -> String {
        if self.use_tab_character && self.tab_size > 0 {
            let mut out = "\t".repeat(columns / self.tab_size);
            out.push_str(&" ".repeat(columns % self.tab_size));
            out
        } else {
            " ".repeat(columns)
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Config::builder().env().load()?;
        debug!("Loaded code style {:?}", config.code_style);
        Ok(config)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
