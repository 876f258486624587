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

use crate::error::{AulaError, ErrorKind};
use std::fmt::Write;

/// Renders compiler-style diagnostics for AULA errors.
///
/// Errors carry no positions. For lexical errors the remaining text is a
/// suffix of the source, which is enough to recover the line and column;
/// syntax errors are shown with their message and file only.
///
/// # Output Example
/// ```text
/// error[E_LEXICAL]: Error léxico: carácter no reconocido en "@ b"
///   --> main.aula:2:3
///    |
///  2 | a @ b
///    |   ^
/// ```
pub struct DiagnosticPrinter {
    /// Full source text the error came from.
    source: String,

    /// Name shown after `-->` (a path, or `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Builds the full diagnostic text.
    pub fn render(&self, error: &AulaError) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "error[{}]: {}", error.code, error.message);

        match self.locate(error) {
            Some((line, column)) => {
                let src_line = self.source.lines().nth(line - 1).unwrap_or("");
                let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, line, column);
                let _ = writeln!(out, "   |");
                let _ = writeln!(out, "{:>3} | {}", line, src_line);
                let _ = writeln!(out, "   | {}^", " ".repeat(column - 1));
            }
            None => {
                let _ = writeln!(out, "  --> {}", self.file_name);
            }
        }

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints the diagnostic to stderr.
    pub fn print(&self, error: &AulaError) {
        eprint!("{}", self.render(error));
    }

    /// 1-based line and column of a lexical error, in characters.
    fn locate(&self, error: &AulaError) -> Option<(usize, usize)> {
        let ErrorKind::Lexical { remaining } = &error.kind else {
            return None;
        };

        if !self.source.ends_with(remaining.as_str()) {
            return None;
        }

        let before = &self.source[..self.source.len() - remaining.len()];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;

        Some((line, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::{analyze, lexer::Token, lexer::TokenKind};

    #[test]
    fn lexical_error_points_at_the_character() {
        let source = "let a = 1;\na @ b";
        let err = tokenize(source).unwrap_err();
        let text = DiagnosticPrinter::new("main.aula", source).render(&err);

        assert!(text.starts_with("error[E_LEXICAL]: "));
        assert!(text.contains("--> main.aula:2:3"));
        assert!(text.contains("  2 | a @ b"));
        assert!(text.contains("   |   ^"));
    }

    #[test]
    fn syntax_error_has_no_location() {
        let source = "let x = 1";
        let err = analyze(source).unwrap_err();
        let text = DiagnosticPrinter::new("<stdin>", source).render(&err);

        assert_eq!(
            text,
            "error[E_SYNTAX]: Error de sintaxis: se esperaba \";\" pero se encontró \"fin de entrada\"\n  --> <stdin>\n"
        );
    }

    #[test]
    fn help_is_rendered_last() {
        let err = AulaError::unexpected(";", Some(&Token::new(TokenKind::Keyword, "return")))
            .with_help("try something else");
        let text = DiagnosticPrinter::new("x", "").render(&err);
        assert!(text.ends_with("\nhelp: try something else\n"));
    }
}
