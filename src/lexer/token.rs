/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the AULA
 *            tokenizer and consumed by the parser.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the AULA teaching language project.
 *
 * AULA is dual-licensed under the terms of:
 *   - The MIT License
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the **category of a lexical token** in AULA.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Tokenizer → TokenKind → Parser → Program
/// ```
///
/// Whitespace is recognized by the tokenizer but never emitted, so it has
/// no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A reserved word such as `let`, `if` or `function`.
    ///
    /// The reserved set lives in `keywords.rs`.
    Keyword,

    /// An arithmetic, comparison or assignment operator.
    ///
    /// Includes:
    /// - Single characters: `+`, `-`, `*`, `/`, `<`, `>`, `!`, `=`
    /// - Two characters: `==`, `!=`, `<=`, `>=`, `+=`, `++`, `--`
    Operator,

    /// A single structural character: `(`, `)`, `{`, `}`, `;`, `,`, `.`
    Delimiter,

    /// A user-defined name (letter or underscore, then word characters).
    Identifier,

    /// An unsigned numeric literal, integer or decimal.
    ///
    /// The text is kept verbatim; no numeric value is computed.
    Constant,
}

impl TokenKind {
    /// The label used for this kind in user-facing syntax errors.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "PALABRA_CLAVE",
            TokenKind::Operator => "OPERADOR",
            TokenKind::Delimiter => "DELIMITADOR",
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::Constant => "CONSTANTE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a **single lexical token** produced by the AULA tokenizer.
///
/// # Example Tokens
/// ```text
/// let   →  { kind: Keyword,    text: "let" }
/// edad  →  { kind: Identifier, text: "edad" }
/// 3.14  →  { kind: Constant,   text: "3.14" }
/// ```
///
/// Tokens are immutable values; the parser moves them into the tree
/// where a production keeps them (names, parameters, terms, operators).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns `true` when this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    /// Prints **only the token's text**, which is what users wrote and
    /// what syntax errors quote back to them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
