/*
 * ==========================================================================
 * AULA - Teaching Language Front-End
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Syntax tree produced by the AULA parser.
 *
 * The tree is a closed set of shapes. Every node owns its children; there
 * is no sharing and no mutation after the parser returns it.
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

pub mod decl;
pub mod expr;

pub use decl::{Assignment, Decl, Function, Program};
pub use expr::Expr;
