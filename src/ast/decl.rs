/*
 * ============================================================================
 * AULA - Teaching Language Front-End
 * ============================================================================
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
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use crate::ast::Expr;
use crate::lexer::token::Token;
use serde::{Deserialize, Serialize};

/// An ordered block of declarations: the whole source, or the inside of
/// a `{ ... }` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub declarations: Vec<Decl>,
}

impl Program {
    pub fn new(declarations: Vec<Decl>) -> Self {
        Self { declarations }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

/// `let <identifier> = <expression>;`
///
/// A struct of its own because the `for` initializer is exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub identifier: Token,
    pub expression: Expr,
}

/// `function <name>(<params>) { <body> }`
///
/// A struct of its own because class bodies hold only functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Program,
}

/// All AULA declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Decl {
    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    Assignment(Assignment),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    Conditional {
        condition: Expr,
        then_branch: Program,
        else_branch: Option<Program>,
    },

    WhileLoop {
        condition: Expr,
        body: Program,
    },

    ForLoop {
        initializer: Assignment,
        condition: Expr,
        update: Expr,
        body: Program,
    },

    /* ----------------------------- */
    /* CLASSES & FUNCTIONS           */
    /* ----------------------------- */

    Class {
        name: Token,
        methods: Vec<Function>,
    },

    Function(Function),

    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    Expression {
        expression: Expr,
    },
}
