/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * File:      patterns.rs
 * Purpose:   The ordered table of recognizers the tokenizer tries at each
 *            cursor position.
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

use crate::lexer::keywords::KEYWORDS;
use crate::lexer::token::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// What the tokenizer does with a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Append a token of this kind.
    Emit(TokenKind),

    /// Advance past the match without emitting anything.
    Skip,
}

/// One recognizer: a class label and a regex anchored at the haystack start.
#[derive(Debug)]
pub struct Pattern {
    pub class: Class,
    regex: Regex,
}

impl Pattern {
    fn new(class: Class, source: &str) -> Self {
        // Patterns are fixed at compile time; a failure here is a typo in
        // this file, not a user error.
        let regex = Regex::new(&format!("^(?:{})", source))
            .unwrap_or_else(|e| panic!("invalid {:?} pattern: {}", class, e));
        Self { class, regex }
    }

    /// Length in bytes of the match at the start of `input`.
    ///
    /// Empty matches count as no match so the cursor always advances.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Returns the recognizers in priority order:
/// Keyword, Operator, Delimiter, Identifier, Constant, Whitespace.
///
/// The first match wins. Keyword precedes Identifier, and the keyword
/// pattern requires a word boundary, so `class` is a keyword while
/// `classroom` falls through to the identifier pattern.
///
/// Word boundaries are ASCII (`(?-u:\b)`): a non-ASCII letter ends a word
/// and is then rejected on its own.
///
/// Compiled once per process and shared read-only by every tokenizer run.
pub fn patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();

    PATTERNS.get_or_init(|| {
        let keywords = format!("(?:{})(?-u:\\b)", KEYWORDS.join("|"));

        vec![
            Pattern::new(Class::Emit(TokenKind::Keyword), &keywords),
            // `++` and `--` go first so a doubled sign is never split in two.
            Pattern::new(
                Class::Emit(TokenKind::Operator),
                r"==|!=|\+\+|--|[+\-*/=<>!]=?",
            ),
            Pattern::new(Class::Emit(TokenKind::Delimiter), r"[(){};,.]"),
            Pattern::new(
                Class::Emit(TokenKind::Identifier),
                r"[A-Za-z_][A-Za-z0-9_]*(?-u:\b)",
            ),
            Pattern::new(Class::Emit(TokenKind::Constant), r"[0-9]+(?:\.[0-9]+)?(?-u:\b)"),
            Pattern::new(Class::Skip, r"\s+"),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(input: &str) -> Option<(Class, usize)> {
        patterns()
            .iter()
            .find_map(|p| p.match_len(input).map(|len| (p.class, len)))
    }

    #[test]
    fn table_order_is_fixed() {
        let classes: Vec<Class> = patterns().iter().map(|p| p.class).collect();
        assert_eq!(
            classes,
            vec![
                Class::Emit(TokenKind::Keyword),
                Class::Emit(TokenKind::Operator),
                Class::Emit(TokenKind::Delimiter),
                Class::Emit(TokenKind::Identifier),
                Class::Emit(TokenKind::Constant),
                Class::Skip,
            ]
        );
    }

    #[test]
    fn patterns_are_anchored_to_the_start() {
        assert_eq!(first_match("  let"), Some((Class::Skip, 2)));
        assert_eq!(first_match("@let"), None);
    }

    #[test]
    fn keyword_needs_a_word_boundary() {
        assert_eq!(first_match("if("), Some((Class::Emit(TokenKind::Keyword), 2)));
        assert_eq!(first_match("iffy"), Some((Class::Emit(TokenKind::Identifier), 4)));
    }

    #[test]
    fn two_character_operators_are_whole() {
        for op in ["==", "!=", "<=", ">=", "++", "--", "+="] {
            assert_eq!(first_match(op), Some((Class::Emit(TokenKind::Operator), 2)), "{op}");
        }
    }

    #[test]
    fn constants_take_an_optional_fraction() {
        assert_eq!(first_match("3.14;"), Some((Class::Emit(TokenKind::Constant), 4)));
        assert_eq!(first_match("3.x"), Some((Class::Emit(TokenKind::Constant), 1)));
    }

    #[test]
    fn word_boundaries_are_ascii() {
        assert_eq!(first_match("ifé("), Some((Class::Emit(TokenKind::Keyword), 2)));
        assert_eq!(first_match("año"), Some((Class::Emit(TokenKind::Identifier), 1)));
        assert_eq!(first_match("7ñ"), Some((Class::Emit(TokenKind::Constant), 1)));
    }

    #[test]
    fn digits_glued_to_letters_do_not_match() {
        assert_eq!(first_match("12abc"), None);
    }
}
