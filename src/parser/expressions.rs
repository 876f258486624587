/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * Expression Parsing
 *
 * AULA expressions are flat: a term followed by any number of
 * operator/term pairs, folded to the left. There are no precedence
 * levels, no parentheses and no unary operators.
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

use crate::ast::Expr;
use crate::error::AulaError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use regex::Regex;
use std::sync::OnceLock;

/// Operators that may join two terms: one of `+ - * / < > = !`,
/// optionally followed by `=`.
///
/// `++` and `--` are operators to the tokenizer but not here, so an
/// expression ends in front of them.
pub fn is_binary_operator(text: &str) -> bool {
    static BINARY: OnceLock<Regex> = OnceLock::new();

    BINARY
        .get_or_init(|| {
            Regex::new(r"^[+\-*/<>=!]=?$")
                .unwrap_or_else(|e| panic!("invalid binary operator pattern: {}", e))
        })
        .is_match(text)
}

impl Parser {
    /// expression → term ( OPERATOR term )*
    ///
    /// Each new pair wraps everything built so far as its left operand:
    /// `a + b - c` becomes `((a + b) - c)`.
    pub fn expression(&mut self) -> Result<Expr, AulaError> {
        let mut expr = self.term()?;

        while self.check_binary_operator() {
            let operator = self.consume(TokenKind::Operator, None)?;
            let right = self.term()?;
            expr = Expr::operation(operator, expr, right);
        }

        Ok(expr)
    }

    /// term → IDENTIFIER | CONSTANT
    pub fn term(&mut self) -> Result<Expr, AulaError> {
        if self.check_kind(TokenKind::Identifier) {
            return Ok(Expr::Term(self.consume(TokenKind::Identifier, None)?));
        }

        if self.check_kind(TokenKind::Constant) {
            return Ok(Expr::Term(self.consume(TokenKind::Constant, None)?));
        }

        Err(self.error_here(AulaError::invalid_term(self.peek())))
    }

    fn check_binary_operator(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Operator && is_binary_operator(&t.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::lexer::{tokenize, Token};

    fn expr(source: &str) -> Result<Expr, AulaError> {
        Parser::new(tokenize(source).unwrap()).expression()
    }

    fn term(kind: TokenKind, text: &str) -> Expr {
        Expr::Term(Token::new(kind, text))
    }

    fn op(text: &str) -> Token {
        Token::new(TokenKind::Operator, text)
    }

    #[test]
    fn binary_operator_set() {
        for text in ["+", "-", "*", "/", "<", ">", "=", "!", "==", "!=", "<=", ">=", "+="] {
            assert!(is_binary_operator(text), "{text}");
        }
        for text in ["++", "--", "", "=>", "<=="] {
            assert!(!is_binary_operator(text), "{text}");
        }
    }

    #[test]
    fn single_term() {
        assert_eq!(expr("42").unwrap(), term(TokenKind::Constant, "42"));
    }

    #[test]
    fn operators_fold_to_the_left() {
        let a = term(TokenKind::Identifier, "a");
        let b = term(TokenKind::Identifier, "b");
        let c = term(TokenKind::Identifier, "c");
        assert_eq!(
            expr("a + b - c").unwrap(),
            Expr::operation(op("-"), Expr::operation(op("+"), a, b), c)
        );
    }

    #[test]
    fn no_precedence_between_operators() {
        // `1 + 2 * 3` is ((1 + 2) * 3)
        match expr("1 + 2 * 3").unwrap() {
            Expr::Operation { operator, left, .. } => {
                assert_eq!(operator.text, "*");
                assert!(matches!(*left, Expr::Operation { ref operator, .. } if operator.text == "+"));
            }
            other => panic!("unexpected expression: {:?}", other),
        }
    }

    #[test]
    fn expression_stops_before_increment() {
        let mut parser = Parser::new(tokenize("i++").unwrap());
        assert_eq!(parser.expression().unwrap(), term(TokenKind::Identifier, "i"));
        assert_eq!(parser.peek().map(|t| t.text.as_str()), Some("++"));
    }

    #[test]
    fn dangling_operator_is_an_invalid_term() {
        let err = expr("a +").unwrap_err();
        assert_eq!(err.to_string(), "Error de sintaxis: término no válido en \"fin de entrada\"");
    }

    #[test]
    fn delimiter_is_not_a_term() {
        let err = expr("(a)").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Syntax { ref found, .. } if found == "("));
    }
}
