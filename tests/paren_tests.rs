use cparen::{parenthesize, Error, Expr, Parser, TypeRegistry};

fn paren(source: &str) -> String {
    parenthesize(source, &TypeRegistry::new()).expect("parenthesize failed")
}

fn parse(source: &str) -> Expr {
    let registry = TypeRegistry::new();
    let mut parser = Parser::new(source, &registry).expect("lexing failed");
    parser.parse().expect("parsing failed")
}

#[test]
fn test_representative_expressions() {
    assert_eq!(paren("a+b*c"), "a + (b * c)");
    assert_eq!(paren("x = y + 1"), "x = (y + 1)");
    assert_eq!(paren("sizeof(int)"), "sizeof (int)");
    assert_eq!(paren("sizeof x"), "sizeof x");
    assert_eq!(paren("a ? b : c"), "(a) ? (b) : (c)");
    assert_eq!(paren("*f()"), "*(f())");
}

#[test]
fn test_same_precedence_chain_surfaces_grouping() {
    // Left associativity becomes visible instead of staying implicit
    assert_eq!(paren("a + b + c"), "(a + b) + c");
    assert_eq!(paren("a - b - c"), "(a - b) - c");
}

#[test]
fn test_simple_operands_stay_bare() {
    assert_eq!(paren("a * 2"), "a * 2");
    assert_eq!(paren("f() + g(x)"), "f() + g(x)");
}

#[test]
fn test_call_arguments_render_bare() {
    // An argument is a full expression of its own, not an operand
    assert_eq!(paren("f(a, b + c)"), "f(a, b + c)");
    assert_eq!(paren("f(a + b * c)"), "f(a + (b * c))");
}

#[test]
fn test_array_and_member_chains() {
    assert_eq!(paren("a[i]"), "a[i]");
    assert_eq!(paren("a[i + 1]"), "a[(i + 1)]");
    assert_eq!(paren("p->x"), "p->x");
    assert_eq!(paren("s.a.b"), "(s.a).b");
    assert_eq!(paren("p->a[0]"), "(p->a)[0]");
}

#[test]
fn test_unary_operators() {
    assert_eq!(paren("-x"), "-x");
    assert_eq!(paren("!done"), "!done");
    assert_eq!(paren("~mask"), "~mask");
    assert_eq!(paren("-(a + b)"), "-(a + b)");
    assert_eq!(paren("*p"), "*p");
    assert_eq!(paren("&x"), "&x");
    assert_eq!(paren("++i"), "++i");
    assert_eq!(paren("i++"), "i++");
    assert_eq!(paren("+x"), "+x");
}

#[test]
fn test_sizeof_forms() {
    assert_eq!(paren("sizeof(size_t)"), "sizeof (size_t)");
    assert_eq!(paren("sizeof(char *)"), "sizeof (char *)");
    assert_eq!(paren("sizeof(unsigned long)"), "sizeof (unsigned long)");
    // (x) is not a type name, so this is sizeof of a value
    assert_eq!(paren("sizeof(x)"), "sizeof x");
    assert_eq!(paren("sizeof(a + b)"), "sizeof (a + b)");
    assert_eq!(paren("sizeof(int) * n"), "sizeof (int) * n");
}

#[test]
fn test_casts() {
    assert_eq!(paren("(int)x"), "(int) x");
    assert_eq!(paren("(size_t)-1"), "(size_t) (-1)");
    assert_eq!(paren("(char **)p"), "(char **) p");
    assert_eq!(paren("(unsigned long)(a + b)"), "(unsigned long) (a + b)");
}

#[test]
fn test_cast_requires_registry() {
    // Unregistered name: (buf)(n) is a call, not a cast
    assert_eq!(paren("(buf)(n)"), "buf(n)");

    let registry = TypeRegistry::with_extra(["buf"]);
    assert_eq!(parenthesize("(buf)(n)", &registry).unwrap(), "(buf) n");
}

#[test]
fn test_assignments() {
    assert_eq!(paren("x += 2"), "x += 2");
    assert_eq!(paren("x = y = z"), "x = (y = z)");
    assert_eq!(paren("mask |= 1 << n"), "mask |= (1 << n)");
    assert_eq!(paren("*p = q + 1"), "*p = (q + 1)");
}

#[test]
fn test_ternary_branches_always_wrapped() {
    assert_eq!(
        paren("a > b ? a : b"),
        "(a > b) ? (a) : (b)"
    );
    assert_eq!(
        paren("a ? b : c ? d : e"),
        "(a) ? (b) : ((c) ? (d) : (e))"
    );
}

#[test]
fn test_comma_operator() {
    assert_eq!(paren("x = 1, y = 2"), "(x = 1) , (y = 2)");
}

#[test]
fn test_literals_render_verbatim() {
    assert_eq!(paren("0x1F + 017"), "0x1F + 017");
    assert_eq!(paren("1.5e3 * 2.0f"), "1.5e3 * 2.0f");
    assert_eq!(paren("42u"), "42u");
    assert_eq!(paren(r#"s + "a\nb""#), r#"s + "a\nb""#);
    assert_eq!(paren(r"c == '\n'"), r"c == '\n'");
}

#[test]
fn test_trailing_semicolon_stripped() {
    assert_eq!(paren("a + b * c;"), "a + (b * c)");
}

#[test]
fn test_idempotence_under_reparse() {
    let inputs = [
        "a+b*c",
        "x = y + 1",
        "a ? b : c",
        "*f()",
        "(size_t)-1",
        "a[i + 1]",
        "s.a.b",
        "sizeof(char *)",
        "x = 1, y = 2",
        "!(a && b) || c",
        "p->next->data[i * 2] + f(g(x), -y)",
    ];

    for input in inputs {
        let once = paren(input);
        let twice = paren(&once);
        assert_eq!(once, twice, "re-parenthesizing {:?} changed the output", input);
    }
}

#[test]
fn test_structural_equivalence() {
    let inputs = [
        "a+b*c",
        "x = y + 1",
        "a ? b : c",
        "*f()",
        "a[i + 1]",
        "sizeof x",
        "sizeof(int)",
        "(size_t)-1",
        "x <<= n & 7",
        "a, b, c",
    ];

    for input in inputs {
        let ast = parse(input);
        let reparsed = parse(&paren(input));
        assert_eq!(ast, reparsed, "rendering {:?} changed its structure", input);
    }
}

#[test]
fn test_unexpected_end_of_input() {
    let err = parenthesize("(", &TypeRegistry::new()).unwrap_err();
    match err {
        Error::Parse(e) => assert!(e.message.contains("end of input")),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_lex_error_reported() {
    let err = parenthesize("\"abc", &TypeRegistry::new()).unwrap_err();
    match err {
        Error::Lex(e) => assert!(e.message.contains("Unterminated string")),
        other => panic!("Expected lex error, got {:?}", other),
    }
}

#[test]
fn test_trailing_input_rejected() {
    let err = parenthesize("a + b c", &TypeRegistry::new()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_error_carries_position() {
    let err = parenthesize("a +\n@ b", &TypeRegistry::new()).unwrap_err();
    match err {
        Error::Lex(e) => {
            assert_eq!(e.location.line, 2);
            assert_eq!(e.location.column, 1);
        }
        other => panic!("Expected lex error, got {:?}", other),
    }
}
