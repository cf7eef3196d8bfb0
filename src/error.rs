// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

/// The main error type for nestcfg lexing, parsing and loading.
///
/// Every parse error aborts the whole parse; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CfgError {
    /// A `}` appeared at the root level.
    #[error("[NESTCFG] Unexpected end of group on line {line}")]
    UnexpectedEndOfGroup { line: usize },

    #[error("[NESTCFG] Key or variable name expected on line {line}")]
    NameExpected { line: usize },

    #[error("[NESTCFG] Duplicate config key '{path}' on line {line}")]
    DuplicateKey { path: String, line: usize },

    /// A variable was declared twice in the same group.
    #[error("[NESTCFG] Duplicate variable '${path}' on line {line} (first declared on line {first_line})")]
    DuplicateVariable {
        path: String,
        line: usize,
        first_line: usize,
    },

    #[error("[NESTCFG] Variable '${path}' on line {line} cannot hold a group")]
    VariableMustBeString { path: String, line: usize },

    /// Input ended inside a group or a continued value.
    #[error("[NESTCFG] Unexpected end of file on line {line}")]
    UnexpectedEndOfFile { line: usize },

    #[error("[NESTCFG] Unmatched {quote} quote on line {line}")]
    UnmatchedQuote { quote: char, line: usize },

    #[error("[NESTCFG] Unrecognized token '{token}' on line {line}")]
    UnrecognizedToken { token: String, line: usize },

    #[error("[NESTCFG] Unknown variable '${name}' in '{path}' on line {line}")]
    UnknownVariable {
        name: String,
        path: String,
        line: usize,
    },

    #[error("[NESTCFG] Config file '{path}' does not exist")]
    FileNotFound { path: String },

    #[error("[NESTCFG] File Error '{path}': {message}")]
    FileError { path: String, message: String },

    /// A parse error raised while loading `path`.
    #[error("[NESTCFG] Error in config file '{path}': {source}")]
    InFile {
        path: String,
        #[source]
        source: Box<CfgError>,
    },
}

impl CfgError {
    /// Numeric code of the error kind. Wrapped errors report the inner code.
    pub fn code(&self) -> u32 {
        match self {
            CfgError::UnmatchedQuote { .. } => 101,
            CfgError::UnrecognizedToken { .. } => 102,
            CfgError::UnexpectedEndOfGroup { .. } => 201,
            CfgError::NameExpected { .. } => 202,
            CfgError::DuplicateKey { .. } => 203,
            CfgError::DuplicateVariable { .. } => 204,
            CfgError::VariableMustBeString { .. } => 205,
            CfgError::UnexpectedEndOfFile { .. } => 206,
            CfgError::UnknownVariable { .. } => 207,
            CfgError::FileNotFound { .. } => 301,
            CfgError::FileError { .. } => 302,
            CfgError::InFile { source, .. } => source.code(),
        }
    }

    /// Line the error was raised on, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            CfgError::UnexpectedEndOfGroup { line }
            | CfgError::NameExpected { line }
            | CfgError::DuplicateKey { line, .. }
            | CfgError::DuplicateVariable { line, .. }
            | CfgError::VariableMustBeString { line, .. }
            | CfgError::UnexpectedEndOfFile { line }
            | CfgError::UnmatchedQuote { line, .. }
            | CfgError::UnrecognizedToken { line, .. }
            | CfgError::UnknownVariable { line, .. } => Some(*line),
            CfgError::FileNotFound { .. } | CfgError::FileError { .. } => None,
            CfgError::InFile { source, .. } => source.line(),
        }
    }

    /// Strip any file wrapping and return the underlying error.
    pub fn root(&self) -> &CfgError {
        match self {
            CfgError::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self.root() {
            CfgError::UnexpectedEndOfGroup { .. } => "Remove the extra '}' or open a group before it",
            CfgError::NameExpected { .. } => "Entries start with a name made of letters, digits and '_'",
            CfgError::DuplicateKey { .. } => "Each key may appear only once per group",
            CfgError::DuplicateVariable { .. } => "Declare a variable once per group, or redeclare it in a nested group",
            CfgError::VariableMustBeString { .. } => "Variables hold scalar values only",
            CfgError::UnexpectedEndOfFile { .. } => "Close every '{' with '}' and do not end a file on '\\'",
            CfgError::UnmatchedQuote { .. } => "Quoted strings must close on the same line",
            CfgError::UnrecognizedToken { .. } => "A '$' must be followed by a variable name",
            CfgError::UnknownVariable { .. } => "Declare the variable in this group or an enclosing one before using it",
            CfgError::FileNotFound { .. } => "Check that the file exists",
            CfgError::FileError { .. } => "Check that the file is readable UTF-8 text",
            CfgError::InFile { .. } => "",
        }
    }
}
