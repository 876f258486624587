/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the AULA tokenizer.
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

/// Token and token-kind definitions.
pub mod token;

/// Reserved word table.
pub mod keywords;

/// Ordered recognizer table (one anchored regex per token class).
pub mod patterns;

/// The scanning loop:
/// - owns the byte cursor into the source
/// - exposes `tokenize(source)`
pub mod lexer;

pub use lexer::tokenize;
pub use token::{Token, TokenKind};
