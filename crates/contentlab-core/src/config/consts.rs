//! Constants shared across the whole system

/// Identifier limits
pub mod ident {
    /// Maximum length of a normalized identifier (slug)
    pub const ID_MAX_LEN: usize = 50;

    /// Maximum length of a generated constant name
    pub const VARIABLE_MAX_LEN: usize = 30;

    /// Constant name used when an identifier strips down to nothing
    pub const FALLBACK_VARIABLE: &str = "entry";

    /// JavaScript reserved words, including the strict-mode and module ones
    pub const RESERVED_WORDS: &[&str] = &[
        "arguments", "await", "break", "case", "catch", "class", "const", "continue",
        "debugger", "default", "delete", "do", "else", "enum", "eval", "export",
        "extends", "false", "finally", "for", "function", "if", "implements", "import",
        "in", "instanceof", "interface", "let", "new", "null", "package", "private",
        "protected", "public", "return", "static", "super", "switch", "this", "throw",
        "true", "try", "typeof", "var", "void", "while", "with", "yield",
    ];
}

/// Configuration file discovery
pub mod files {
    /// Name of the configuration file looked up from the working directory upwards
    pub const CONFIG_FILE_NAME: &str = "contentlab.toml";
}

/// Rendering defaults
pub mod render {
    /// Spaces per nesting level in rendered literals
    pub const DEFAULT_INDENT: usize = 2;

    /// Element wrapping rich content
    pub const RICH_CONTAINER: &str = "div";

    /// Attribute name `class` is rewritten to
    pub const CLASS_ATTRIBUTE: &str = "className";
}
