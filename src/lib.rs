//! # AULA
//!
//! Front-end for the AULA teaching language: source text in, classified
//! tokens and a syntax tree out.
//!
//! ## Pipeline
//!
//! ```text
//! Source → tokenize → Vec<Token> → parse → Program
//! ```
//!
//! 1. [`lexer`] — classifies the input with an ordered table of anchored
//!    recognizers and drops whitespace.
//! 2. [`parser`] — single-cursor recursive descent over the tokens.
//! 3. [`ast`] — the closed set of tree shapes.
//!
//! The first error of either stage ends the run; there is no partial
//! result. Callers re-run [`analyze`] on every new input.

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;

use serde::Serialize;

pub use ast::Program;
pub use error::AulaError;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::parse;

/// Output of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub program: Program,
}

impl Analysis {
    /// The token list as JSON, pretty-printed unless `compact`.
    pub fn tokens_json(&self, compact: bool) -> serde_json::Result<String> {
        to_json(&self.tokens, compact)
    }

    /// The syntax tree as JSON, pretty-printed unless `compact`.
    pub fn tree_json(&self, compact: bool) -> serde_json::Result<String> {
        to_json(&self.program, compact)
    }
}

/// Tokenizes and parses `source`.
///
/// # Example
/// ```rust
/// let analysis = aula::analyze("while (n > 0) { n = n - 1; }").unwrap();
/// assert_eq!(analysis.tokens.len(), 14);
/// assert_eq!(analysis.program.len(), 1);
/// ```
pub fn analyze(source: &str) -> Result<Analysis, AulaError> {
    let tokens = tokenize(source)?;
    let program = parse(tokens.clone())?;
    Ok(Analysis { tokens, program })
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
