//! A small hierarchical config language.
//!
//! ```text
//! # comments run to the end of the line
//! $root = /srv/app
//! name = demo
//! server {
//!     listen: 0.0.0.0 8080
//!     docroot = $root/public
//!     banner = "Welcome to " $root
//! }
//! ```
//!
//! Parsing is a pure function from text to an immutable [`Config`] tree.

pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{Group, Value};
pub use config::{Config, ConfigView, Entry};
pub use error::CfgError;
pub use export::render;

/// Parse config text into a [`Config`].
pub fn parse(text: &str) -> Result<Config, CfgError> {
    Config::parse(text)
}
