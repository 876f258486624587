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

use crate::error::{AulaError, END_OF_INPUT};
use crate::lexer::keywords::has_production;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the current token, or `None` past the last one.
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Checks the current token's kind without consuming it.
    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Checks for a keyword without consuming it.
    pub(crate) fn check_keyword(&self, kw: &str) -> bool {
        self.peek().is_some_and(|t| t.is(TokenKind::Keyword, kw))
    }

    /// Checks if the current token is the given delimiter.
    pub(crate) fn check_delimiter(&self, ch: &str) -> bool {
        self.peek().is_some_and(|t| t.is(TokenKind::Delimiter, ch))
    }

    /// Consumes the current token if it has the expected kind and, when
    /// given, the expected exact text.
    ///
    /// This is the **only** place the cursor advances. On mismatch,
    /// including running out of tokens, it returns a syntax error that
    /// quotes the expected text (or the kind label) and what was found.
    ///
    /// # Returns
    /// The consumed token.
    pub(crate) fn consume(&mut self, kind: TokenKind, text: Option<&str>) -> Result<Token, AulaError> {
        let matches = self
            .peek()
            .is_some_and(|t| t.kind == kind && text.map_or(true, |text| t.text == text));

        if !matches {
            let expected = text.unwrap_or(kind.label());
            return Err(self.error_here(AulaError::unexpected(expected, self.peek())));
        }

        let token = self.tokens[self.current].clone();
        self.current += 1;
        Ok(token)
    }

    pub(crate) fn consume_keyword(&mut self, kw: &str) -> Result<Token, AulaError> {
        self.consume(TokenKind::Keyword, Some(kw))
    }

    pub(crate) fn consume_delimiter(&mut self, ch: &str) -> Result<Token, AulaError> {
        self.consume(TokenKind::Delimiter, Some(ch))
    }

    pub(crate) fn consume_identifier(&mut self) -> Result<Token, AulaError> {
        self.consume(TokenKind::Identifier, None)
    }

    /// Fails unless every token has been consumed.
    pub(crate) fn expect_end(&self) -> Result<(), AulaError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error_here(AulaError::unexpected(END_OF_INPUT, self.peek())))
        }
    }

    /// Returns true once the cursor has passed the last token.
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Adds a hint when the parser stopped on a reserved word the grammar
    /// has no production for (`return`, `break`, ...).
    pub(crate) fn error_here(&self, err: AulaError) -> AulaError {
        match self.peek() {
            Some(t) if t.is(TokenKind::Keyword, "else") => {
                err.with_help("`else` must directly follow the `}` of an `if` block")
            }
            Some(t) if t.kind == TokenKind::Keyword && !has_production(&t.text) => {
                err.with_help(format!("`{}` is reserved but has no statement form", t.text))
            }
            _ => err,
        }
    }
}
