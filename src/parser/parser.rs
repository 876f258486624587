/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform a token list into an AULA `Program`.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Declaration grammar (`let`, `if`, `while`, etc.)
 * - `expressions.rs`  → Flat left-associative expressions and terms
 * - `helpers.rs`      → Lookahead checks and the consume primitive
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Program;
use crate::error::AulaError;
use crate::lexer::token::Token;

/// Deepest allowed stack of open `{ ... }` blocks.
///
/// Productions recurse once per block, so this bounds the parser's stack
/// use on any input.
pub const MAX_NESTING: usize = 200;

/// The core AULA recursive-descent parser.
///
/// This structure maintains:
/// - The token list produced by the tokenizer (whitespace already removed)
/// - The current cursor position into that list
///
/// The grammar is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser` blocks.
/// Every production decides with one token of lookahead and never backtracks.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token list.
    /// Only `consume` moves it.
    pub(crate) current: usize,

    /// Number of blocks currently open.
    pub(crate) depth: usize,
}

/// Public entry point for the AULA parsing phase.
///
/// # AULA Pipeline
/// ```text
/// Source → tokenize → Tokens → parse → Program
/// ```
///
/// # Example
/// ```rust
/// use aula::{lexer::tokenize, parser::parse};
///
/// let program = parse(tokenize("let x = 1;").unwrap()).unwrap();
/// assert_eq!(program.len(), 1);
/// ```
///
/// # Errors
/// The first syntax error; no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, AulaError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses the entire token list into the top-level `Program`.
    ///
    /// # Behavior
    /// - Declarations are parsed in strict left-to-right order.
    /// - A `}` with no open block is rejected rather than silently
    ///   ending the program early.
    pub fn parse(&mut self) -> Result<Program, AulaError> {
        let program = self.program()?;
        self.expect_end()?;
        Ok(program)
    }
}
