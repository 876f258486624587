// Integration tests for the AULA tokenizer + parser pipeline

use aula::ast::{Assignment, Decl, Expr, Program};
use aula::error::{ErrorKind, END_OF_INPUT};
use aula::{analyze, parse, tokenize, Token, TokenKind};

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

fn ident(name: &str) -> Expr {
    Expr::Term(tok(TokenKind::Identifier, name))
}

#[test]
fn test_empty_source() {
    assert!(tokenize("").unwrap().is_empty());

    let program = parse(Vec::new()).expect("empty token list should parse");
    assert_eq!(program, Program::default());
}

#[test]
fn test_unknown_character() {
    let err = tokenize("@").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Lexical {
            remaining: "@".to_string()
        }
    );
}

#[test]
fn test_classroom_is_one_identifier() {
    assert_eq!(
        tokenize("classroom").unwrap(),
        vec![tok(TokenKind::Identifier, "classroom")]
    );
}

#[test]
fn test_simple_assignment() {
    let program = parse(tokenize("let x = 1;").unwrap()).unwrap();

    assert_eq!(
        program,
        Program::new(vec![Decl::Assignment(Assignment {
            identifier: tok(TokenKind::Identifier, "x"),
            expression: Expr::Term(tok(TokenKind::Constant, "1")),
        })])
    );
}

#[test]
fn test_if_without_else() {
    let program = parse(tokenize("if (a) { let b = 2; }").unwrap()).unwrap();

    match &program.declarations[..] {
        [Decl::Conditional {
            condition,
            then_branch,
            else_branch: None,
        }] => {
            assert_eq!(condition, &ident("a"));
            assert_eq!(then_branch.len(), 1);
            assert!(matches!(then_branch.declarations[0], Decl::Assignment(_)));
        }
        other => panic!("unexpected tree: {:?}", other),
    }
}

#[test]
fn test_missing_semicolon() {
    let err = parse(tokenize("let x = 1").unwrap()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Syntax {
            expected: ";".to_string(),
            found: END_OF_INPUT.to_string(),
        }
    );
}

#[test]
fn test_return_has_no_production() {
    // `return` lexes as a keyword, but no declaration starts with it, so the
    // body falls through to an expression statement and fails on the term.
    let tokens = tokenize("function f(a,b){ return; }").unwrap();
    assert_eq!(tokens[8], tok(TokenKind::Keyword, "return"));

    let err = parse(tokens).unwrap_err();
    assert_eq!(err.to_string(), "Error de sintaxis: término no válido en \"return\"");
    assert!(err.help.is_some());
}

#[test]
fn test_left_associativity() {
    let program = parse(tokenize("a+b-c;").unwrap()).unwrap();

    let expected = Expr::operation(
        tok(TokenKind::Operator, "-"),
        Expr::operation(tok(TokenKind::Operator, "+"), ident("a"), ident("b")),
        ident("c"),
    );
    assert_eq!(
        program.declarations,
        vec![Decl::Expression {
            expression: expected
        }]
    );
}

#[test]
fn test_stray_closing_brace() {
    let err = analyze("a; } b;").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Syntax {
            expected: END_OF_INPUT.to_string(),
            found: "}".to_string(),
        }
    );
}

#[test]
fn test_unclosed_block() {
    let err = analyze("while (a) { a;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error de sintaxis: se esperaba \"}\" pero se encontró \"fin de entrada\""
    );
}

#[test]
fn test_deep_nesting_is_rejected() {
    let depth = 5000;
    let source = format!("{}{}", "while (a) { ".repeat(depth), "}".repeat(depth));
    let err = analyze(&source).unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().contains("anidamiento demasiado profundo"));
}

#[test]
fn test_moderate_nesting_parses() {
    let source = format!("{}{}", "if (a) { ".repeat(50), "}".repeat(50));
    let program = analyze(&source).unwrap().program;
    assert_eq!(program.len(), 1);
}

#[test]
fn test_else_without_if() {
    let err = analyze("else { a; }").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.help.unwrap().contains("else"));
}

#[test]
fn test_class_rejects_non_function_members() {
    let err = analyze("class A { let x = 1; }").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Syntax {
            expected: "function".to_string(),
            found: "let".to_string(),
        }
    );
}

#[test]
fn test_for_increment_is_not_an_expression_operator() {
    let err = analyze("for (let i = 0; i < 3; i++) { }").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Syntax {
            expected: ")".to_string(),
            found: "++".to_string(),
        }
    );
}

#[test]
fn test_lexical_error_stops_before_parsing() {
    // The missing `;` would be a syntax error too, but tokenizing fails first.
    let err = analyze("let x = 1 #").unwrap_err();
    assert!(err.is_lexical());
}

#[test]
fn test_full_program() {
    let source = r#"
        class Contador {
            function sumar(a, b) {
                let total = a + b;
                total;
            }
        }

        let limite = 10;
        for (let i = 0; i < limite; i + 1) {
            if (i == 5) {
                i;
            } else {
                limite - i;
            }
        }

        while (limite > 0) {
            limite = limite - 1;
        }
    "#;

    let analysis = analyze(source).expect("program should parse");
    let kinds: Vec<&str> = analysis
        .program
        .declarations
        .iter()
        .map(|d| match d {
            Decl::Assignment(_) => "Assignment",
            Decl::Conditional { .. } => "Conditional",
            Decl::WhileLoop { .. } => "WhileLoop",
            Decl::ForLoop { .. } => "ForLoop",
            Decl::Class { .. } => "Class",
            Decl::Function(_) => "Function",
            Decl::Expression { .. } => "Expression",
        })
        .collect();

    assert_eq!(kinds, ["Class", "Assignment", "ForLoop", "WhileLoop"]);
}

#[test]
fn test_tree_json_shape() {
    let analysis = analyze("let x = a * 2;").unwrap();
    let value: serde_json::Value = serde_json::from_str(&analysis.tree_json(true).unwrap()).unwrap();

    let decl = &value["declarations"][0];
    assert_eq!(decl["type"], "Assignment");
    assert_eq!(decl["identifier"]["text"], "x");
    assert_eq!(decl["expression"]["type"], "Operation");
    assert_eq!(decl["expression"]["operator"]["text"], "*");
    assert_eq!(decl["expression"]["left"]["kind"], "Identifier");
    assert_eq!(decl["expression"]["right"]["text"], "2");
}

#[test]
fn test_tree_json_reads_back() {
    let analysis = analyze("if (a) { b; } else { let c = 1; }").unwrap();
    let json = analysis.tree_json(false).unwrap();

    let program: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(program, analysis.program);
}
