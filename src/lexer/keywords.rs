/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords of the AULA language.
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

/// Every reserved word, in the order the keyword recognizer tries them.
///
/// Only the first six open a declaration in the grammar; `else` continues
/// a conditional. The remaining words are reserved without a production,
/// so using one as a statement is a syntax error.
pub const KEYWORDS: &[&str] = &[
    "let",
    "if",
    "else",
    "while",
    "for",
    "class",
    "function",
    "return",
    "const",
    "var",
    "switch",
    "case",
    "break",
    "default",
    "continue",
];

/// Determines whether a word is a **reserved keyword** in AULA.
///
/// # AULA Examples
/// ```text
/// while     -> keyword
/// classroom -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Determines whether a reserved word can start a declaration.
///
/// Used to attach a hint to errors raised on words such as `return`
/// that the tokenizer accepts but the grammar never consumes.
pub fn has_production(word: &str) -> bool {
    matches!(
        word,
        "let" |
        "if" |
        "while" |
        "for" |
        "class" |
        "function"
    )
}
