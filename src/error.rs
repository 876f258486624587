/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the AULA teaching language project.
 *
 * AULA is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::lexer::token::Token;
use thiserror::Error;

/// Text reported as the "found" value when the token stream runs out.
pub const END_OF_INPUT: &str = "fin de entrada";

/// What went wrong, with the context each failure carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No recognizer matched at the cursor.
    Lexical {
        /// The unconsumed source text starting at the failing position.
        remaining: String,
    },

    /// A production expected something other than the current token.
    Syntax {
        /// The expected exact text, or the expected kind label.
        expected: String,
        /// The actual token text, or [`END_OF_INPUT`].
        found: String,
    },
}

/// The single failure of one pipeline run.
///
/// The first error is final: the tokenizer and parser return it as soon as
/// it happens and produce no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AulaError {
    /// Stable error code (`E_LEXICAL`, `E_SYNTAX`)
    pub code: &'static str,

    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl AulaError {
    /// Lexical error: nothing is recognized at the start of `remaining`.
    pub fn lexical(remaining: impl Into<String>) -> Self {
        let remaining = remaining.into();
        Self {
            code: "E_LEXICAL",
            message: format!("Error léxico: carácter no reconocido en \"{}\"", remaining),
            kind: ErrorKind::Lexical { remaining },
            help: None,
        }
    }

    /// Syntax error: `expected` was required but `found` was current.
    pub fn unexpected(expected: impl Into<String>, found: Option<&Token>) -> Self {
        let expected = expected.into();
        let found = found_text(found);
        Self {
            code: "E_SYNTAX",
            message: format!(
                "Error de sintaxis: se esperaba \"{}\" pero se encontró \"{}\"",
                expected, found
            ),
            kind: ErrorKind::Syntax { expected, found },
            help: None,
        }
    }

    /// Syntax error: the current token cannot be an expression term.
    pub fn invalid_term(found: Option<&Token>) -> Self {
        let found = found_text(found);
        Self {
            code: "E_SYNTAX",
            message: format!("Error de sintaxis: término no válido en \"{}\"", found),
            kind: ErrorKind::Syntax {
                expected: "IDENTIFICADOR o CONSTANTE".to_string(),
                found,
            },
            help: None,
        }
    }

    /// Syntax error: a block opens deeper than `limit` levels.
    pub fn nesting_too_deep(limit: usize, found: Option<&Token>) -> Self {
        Self {
            code: "E_SYNTAX",
            message: format!(
                "Error de sintaxis: anidamiento demasiado profundo (máximo {} bloques)",
                limit
            ),
            kind: ErrorKind::Syntax {
                expected: "}".to_string(),
                found: found_text(found),
            },
            help: Some("split the code into functions instead of nesting further".to_string()),
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ErrorKind::Lexical { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }
}

fn found_text(token: Option<&Token>) -> String {
    token.map_or_else(|| END_OF_INPUT.to_string(), |t| t.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;

    #[test]
    fn lexical_message_quotes_remaining_text() {
        let err = AulaError::lexical("@ x");
        assert_eq!(err.to_string(), "Error léxico: carácter no reconocido en \"@ x\"");
        assert_eq!(err.code, "E_LEXICAL");
        assert!(err.is_lexical());
    }

    #[test]
    fn syntax_message_names_expected_and_found() {
        let found = Token::new(TokenKind::Identifier, "y");
        let err = AulaError::unexpected(";", Some(&found));
        assert_eq!(
            err.to_string(),
            "Error de sintaxis: se esperaba \";\" pero se encontró \"y\""
        );
        assert!(err.is_syntax());
    }

    #[test]
    fn missing_token_reports_end_of_input() {
        let err = AulaError::unexpected("IDENTIFICADOR", None);
        assert_eq!(
            err.kind,
            ErrorKind::Syntax {
                expected: "IDENTIFICADOR".to_string(),
                found: END_OF_INPUT.to_string(),
            }
        );
    }

    #[test]
    fn help_is_attached() {
        let err = AulaError::invalid_term(None).with_help("add a value");
        assert_eq!(err.help.as_deref(), Some("add a value"));
        assert_eq!(err.to_string(), "Error de sintaxis: término no válido en \"fin de entrada\"");
    }
}
