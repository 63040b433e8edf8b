// Front end configuration

/// Longest identifier accepted by default.
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 255;

/// Knobs shared by the lexer and parser for one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Identifiers longer than this are reported as `LexIdentifierTooLong`
    pub max_identifier_len: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            max_identifier_len: DEFAULT_MAX_IDENTIFIER_LEN,
        }
    }
}

impl FrontendConfig {
    pub fn with_max_identifier_len(mut self, len: usize) -> Self {
        self.max_identifier_len = len;
        self
    }
}
