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
use serde::{Deserialize, Serialize};

/// An AULA expression.
///
/// Every binary operator binds at the same level and groups to the left,
/// so `a + b - c` is `Operation(-, Operation(+, a, b), c)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// A leaf: one Identifier or Constant token.
    Term(Token),

    Operation {
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn operation(operator: Token, left: Expr, right: Expr) -> Self {
        Expr::Operation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
