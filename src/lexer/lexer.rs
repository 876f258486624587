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

use crate::error::AulaError;
use crate::lexer::patterns::{patterns, Class};
use crate::lexer::token::Token;

pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of the next unread character.
    current: usize,
    pub tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new AULA lexer over the full source buffer.
    ///
    /// # Returns
    /// A `Lexer` with:
    /// - Cursor at position `0`
    /// - Empty token output buffer
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Classifies the input left to right with no gaps or overlaps
    /// - Drops whitespace
    /// - Stops at the first position no recognizer accepts
    ///
    /// # Errors
    /// A lexical `AulaError` carrying the remaining source text.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, AulaError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        Ok(self.tokens)
    }

    /// Scans one lexeme at the cursor.
    ///
    /// Recognizers are tried in table order and the first non-empty match
    /// wins; there is no longest-match arbitration between classes.
    fn scan_token(&mut self) -> Result<(), AulaError> {
        let rest = self.rest();

        let (class, len) = patterns()
            .iter()
            .find_map(|pattern| pattern.match_len(rest).map(|len| (pattern.class, len)))
            .ok_or_else(|| AulaError::lexical(rest))?;

        if let Class::Emit(kind) = class {
            self.tokens.push(Token::new(kind, &rest[..len]));
        }

        self.current += len;
        Ok(())
    }

    /// The unconsumed tail of the source.
    fn rest(&self) -> &'src str {
        &self.source[self.current..]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Converts a source buffer into its ordered token list.
///
/// # Example
/// ```rust
/// use aula::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("let x = 1;").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, AulaError> {
    Lexer::new(source).scan_tokens()
}
