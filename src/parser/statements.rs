/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * Declaration-Level Parsing Logic
 *
 * This file contains all grammar rules that build **AULA declarations**:
 * - Blocks (`Program`)
 * - Variables (`let`)
 * - Control flow (`if` / `else`, `while`, `for`)
 * - Classes (`class`) and functions (`function`)
 * - Expression statements as the fallback
 *
 * Nested blocks end at `}`. The production that opened a block consumes
 * its closing `}` after the inner `program()` returns.
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

use crate::ast::{Assignment, Decl, Expr, Function, Program};
use crate::error::AulaError;
use crate::lexer::TokenKind;
use crate::parser::parser::{Parser, MAX_NESTING};

impl Parser {
    /// program → declaration* (until end of input or `}`)
    pub fn program(&mut self) -> Result<Program, AulaError> {
        let mut declarations = Vec::new();

        while !self.is_at_end() && !self.check_delimiter("}") {
            declarations.push(self.declaration()?);
        }

        Ok(Program::new(declarations))
    }

    /// Parses a single declaration.
    ///
    /// This is the **main dispatcher**: the current keyword picks the
    /// production. Anything else is an expression statement, which means
    /// reserved words without a production (`return`, `break`, ...) fail
    /// in `term()`.
    pub fn declaration(&mut self) -> Result<Decl, AulaError> {
        if self.check_keyword("let") {
            return Ok(Decl::Assignment(self.assignment()?));
        }

        if self.check_keyword("if") {
            return self.conditional();
        }

        if self.check_keyword("while") {
            return self.while_loop();
        }

        if self.check_keyword("for") {
            return self.for_loop();
        }

        if self.check_keyword("class") {
            return self.class_declaration();
        }

        if self.check_keyword("function") {
            return Ok(Decl::Function(self.function_declaration()?));
        }

        // ------------------------------------------------------------
        // FALLBACK: EXPRESSION STATEMENT
        // ------------------------------------------------------------
        let expression = self.expression()?;
        self.consume_delimiter(";")?;
        Ok(Decl::Expression { expression })
    }

    /// assignment → `let` IDENT `=` expression `;`
    pub fn assignment(&mut self) -> Result<Assignment, AulaError> {
        self.consume_keyword("let")?;
        let identifier = self.consume_identifier()?;
        self.consume(TokenKind::Operator, Some("="))?;
        let expression = self.expression()?;
        self.consume_delimiter(";")?;

        Ok(Assignment {
            identifier,
            expression,
        })
    }

    /// conditional → `if` `(` expression `)` block ( `else` block )?
    pub fn conditional(&mut self) -> Result<Decl, AulaError> {
        self.consume_keyword("if")?;
        let condition = self.parenthesized()?;
        let then_branch = self.block()?;

        let else_branch = if self.check_keyword("else") {
            self.consume_keyword("else")?;
            Some(self.block()?)
        } else {
            None
        };

        Ok(Decl::Conditional {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// while → `while` `(` expression `)` block
    pub fn while_loop(&mut self) -> Result<Decl, AulaError> {
        self.consume_keyword("while")?;
        let condition = self.parenthesized()?;
        let body = self.block()?;

        Ok(Decl::WhileLoop { condition, body })
    }

    /// for → `for` `(` assignment expression `;` expression `)` block
    ///
    /// The initializer is a whole `assignment`, which already eats its
    /// own `;`.
    pub fn for_loop(&mut self) -> Result<Decl, AulaError> {
        self.consume_keyword("for")?;
        self.consume_delimiter("(")?;
        let initializer = self.assignment()?;
        let condition = self.expression()?;
        self.consume_delimiter(";")?;
        let update = self.expression()?;
        self.consume_delimiter(")")?;
        let body = self.block()?;

        Ok(Decl::ForLoop {
            initializer,
            condition,
            update,
            body,
        })
    }

    /// class → `class` IDENT `{` function* `}`
    pub fn class_declaration(&mut self) -> Result<Decl, AulaError> {
        self.consume_keyword("class")?;
        let name = self.consume_identifier()?;
        self.consume_delimiter("{")?;

        let mut methods = Vec::new();
        while !self.is_at_end() && !self.check_delimiter("}") {
            methods.push(self.function_declaration()?);
        }
        self.consume_delimiter("}")?;

        Ok(Decl::Class { name, methods })
    }

    /// function → `function` IDENT `(` ( IDENT `,`? )* `)` block
    ///
    /// A comma is consumed only when present, so `f(a, b,)` is accepted.
    pub fn function_declaration(&mut self) -> Result<Function, AulaError> {
        self.consume_keyword("function")?;
        let name = self.consume_identifier()?;
        self.consume_delimiter("(")?;

        let mut params = Vec::new();
        while !self.is_at_end() && !self.check_delimiter(")") {
            params.push(self.consume_identifier()?);
            if self.check_delimiter(",") {
                self.consume_delimiter(",")?;
            }
        }
        self.consume_delimiter(")")?;

        let body = self.block()?;

        Ok(Function { name, params, body })
    }

    /// `(` expression `)`
    fn parenthesized(&mut self) -> Result<Expr, AulaError> {
        self.consume_delimiter("(")?;
        let expr = self.expression()?;
        self.consume_delimiter(")")?;
        Ok(expr)
    }

    /// `{` program `}`
    ///
    /// Every nested production passes through here, so this is where the
    /// nesting limit is enforced.
    fn block(&mut self) -> Result<Program, AulaError> {
        if self.depth >= MAX_NESTING && self.check_delimiter("{") {
            return Err(AulaError::nesting_too_deep(MAX_NESTING, self.peek()));
        }

        self.consume_delimiter("{")?;
        self.depth += 1;
        let program = self.program();
        self.depth -= 1;
        let program = program?;
        self.consume_delimiter("}")?;
        Ok(program)
    }
}
