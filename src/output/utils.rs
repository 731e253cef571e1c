//! Shared helpers for laying out tree lines

use crate::tree::TreeLine;

/// Connector in front of a subdirectory header.
pub const DIR_CONNECTOR: &str = "└── ";
/// Connector in front of a file or group.
pub const ENTRY_CONNECTOR: &str = "├── ";
/// Indentation added per nesting level.
pub const INDENT: &str = "  ";

/// What the colored part of a line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Folder,
    /// File name or group shape; colored by extension.
    File,
    /// Not colored.
    Plain,
}

/// A line split around its colorable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineParts<'a> {
    pub prefix: String,
    pub token: &'a str,
    pub kind: TokenKind,
    pub suffix: String,
}

/// Split a tree line into prefix, token and suffix.
pub fn line_parts(line: &TreeLine) -> LineParts<'_> {
    let indent = INDENT.repeat(line.depth());
    match line {
        TreeLine::Dir { name, .. } => LineParts {
            prefix: format!("{}{}", indent, DIR_CONNECTOR),
            token: name,
            kind: TokenKind::Folder,
            suffix: "/".to_string(),
        },
        TreeLine::File { name, .. } => LineParts {
            prefix: format!("{}{}", indent, ENTRY_CONNECTOR),
            token: name,
            kind: TokenKind::File,
            suffix: String::new(),
        },
        TreeLine::Group { shape, count, .. } => LineParts {
            prefix: format!("{}{}", indent, ENTRY_CONNECTOR),
            token: shape,
            kind: TokenKind::File,
            suffix: format!(" ({} files)", count),
        },
        TreeLine::Error { message, .. } => LineParts {
            prefix: format!("{}[error opening dir: ", indent),
            token: message,
            kind: TokenKind::Plain,
            suffix: "]".to_string(),
        },
    }
}
