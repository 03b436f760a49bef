//! AST-to-text generator
//!
//! Re-renders an expression tree with every compound operand explicitly
//! parenthesized. Rendering is a pure structural recursion: no state, no
//! errors, always terminates. Parenthesization is driven by per-node-kind
//! policy, not by comparing precedences, so the output deliberately
//! over-parenthesizes rather than computing the minimum.
//!
//! The policy pivots on the "simple operand" test: constants, identifiers,
//! and function calls render bare wherever they appear; every other kind is
//! wrapped by its enclosing context. Three node kinds have bespoke rules on
//! top of that — `sizeof`, the ternary (all three branches always
//! parenthesized), and assignment (target always bare).

use crate::parser::ast::{Expr, TypeName, UnOp};

/// Render `expr` as explicitly parenthesized C text.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Constant { text, .. } => text.clone(),

        Expr::Identifier(name) => name.clone(),

        Expr::FunctionCall { callee, args } => {
            let rendered: Vec<String> = args.iter().map(render).collect();
            format!(
                "{}({})",
                parenthesize_unless_simple(callee),
                rendered.join(", ")
            )
        }

        Expr::ArrayAccess { base, index } => format!(
            "{}[{}]",
            parenthesize_unless_simple(base),
            parenthesize_unless_simple(index)
        ),

        Expr::MemberAccess { base, field, arrow } => format!(
            "{}{}{}",
            parenthesize_unless_simple(base),
            if *arrow { "->" } else { "." },
            field
        ),

        Expr::UnaryOp { op, operand } => render_unary(*op, operand),

        // A type name after sizeof is only valid C inside parentheses,
        // so these are unconditional.
        Expr::SizeofType { type_name } => {
            format!("sizeof ({})", render_type_name(type_name))
        }

        Expr::Cast { type_name, operand } => format!(
            "({}) {}",
            render_type_name(type_name),
            parenthesize_unless_simple(operand)
        ),

        Expr::BinaryOp { op, left, right } => format!(
            "{} {} {}",
            parenthesize_unless_simple(left),
            op.symbol(),
            parenthesize_unless_simple(right)
        ),

        // All three branches are always parenthesized, even bare
        // identifiers: ternary grouping is where readers get lost.
        Expr::TernaryOp {
            condition,
            then_expr,
            else_expr,
        } => format!(
            "({}) ? ({}) : ({})",
            render(condition),
            render(then_expr),
            render(else_expr)
        ),

        Expr::Assignment { op, target, value } => format!(
            "{} {} {}",
            render(target),
            op.symbol(),
            parenthesize_unless_simple(value)
        ),
    }
}

fn render_unary(op: UnOp, operand: &Expr) -> String {
    if op == UnOp::Sizeof {
        // sizeof of a value: spaced, and never parenthesized as a whole
        return format!("sizeof {}", parenthesize_unless_simple(operand));
    }

    // *f() reads as a declarator; force parens even though a call is
    // normally a simple operand
    let force = op == UnOp::Deref && matches!(operand, Expr::FunctionCall { .. });
    let rendered = if force {
        format!("({})", render(operand))
    } else {
        parenthesize_unless_simple(operand)
    };

    if op.is_postfix() {
        format!("{}{}", rendered, op.symbol())
    } else {
        format!("{}{}", op.symbol(), rendered)
    }
}

/// Simple operands render bare in any context; everything else gets
/// wrapped by the enclosing expression.
fn is_simple(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Constant { .. } | Expr::Identifier(_) | Expr::FunctionCall { .. }
    )
}

fn parenthesize_unless_simple(expr: &Expr) -> String {
    if is_simple(expr) {
        render(expr)
    } else {
        format!("({})", render(expr))
    }
}

fn render_type_name(type_name: &TypeName) -> String {
    let mut s = String::new();

    if type_name.is_const {
        s.push_str("const ");
    }
    s.push_str(&type_name.base);

    if type_name.pointer_depth > 0 {
        s.push(' ');
        for _ in 0..type_name.pointer_depth {
            s.push('*');
        }
    }

    for dim in &type_name.array_dims {
        match dim {
            Some(size) => {
                s.push('[');
                s.push_str(size);
                s.push(']');
            }
            None => s.push_str("[]"),
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{AssignOp, BinOp, LiteralKind};

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    fn int(text: &str) -> Expr {
        Expr::Constant {
            text: text.to_string(),
            kind: LiteralKind::Int,
        }
    }

    #[test]
    fn test_leaves_render_verbatim() {
        assert_eq!(render(&ident("x")), "x");
        assert_eq!(render(&int("0x1F")), "0x1F");
    }

    #[test]
    fn test_binary_simple_operands_bare() {
        let expr = Expr::BinaryOp {
            op: BinOp::Add,
            left: Box::new(ident("a")),
            right: Box::new(int("1")),
        };
        assert_eq!(render(&expr), "a + 1");
    }

    #[test]
    fn test_binary_compound_operand_wrapped() {
        let inner = Expr::BinaryOp {
            op: BinOp::Mul,
            left: Box::new(ident("b")),
            right: Box::new(ident("c")),
        };
        let expr = Expr::BinaryOp {
            op: BinOp::Add,
            left: Box::new(ident("a")),
            right: Box::new(inner),
        };
        assert_eq!(render(&expr), "a + (b * c)");
    }

    #[test]
    fn test_call_is_simple_operand() {
        let call = Expr::FunctionCall {
            callee: Box::new(ident("f")),
            args: vec![],
        };
        let expr = Expr::BinaryOp {
            op: BinOp::Add,
            left: Box::new(call),
            right: Box::new(int("1")),
        };
        assert_eq!(render(&expr), "f() + 1");
    }

    #[test]
    fn test_deref_of_call_forced_parens() {
        let call = Expr::FunctionCall {
            callee: Box::new(ident("f")),
            args: vec![],
        };
        let expr = Expr::UnaryOp {
            op: UnOp::Deref,
            operand: Box::new(call),
        };
        assert_eq!(render(&expr), "*(f())");
    }

    #[test]
    fn test_deref_of_identifier_bare() {
        let expr = Expr::UnaryOp {
            op: UnOp::Deref,
            operand: Box::new(ident("p")),
        };
        assert_eq!(render(&expr), "*p");
    }

    #[test]
    fn test_postfix_operators() {
        let expr = Expr::UnaryOp {
            op: UnOp::PostInc,
            operand: Box::new(ident("x")),
        };
        assert_eq!(render(&expr), "x++");
    }

    #[test]
    fn test_ternary_always_parenthesized() {
        let expr = Expr::TernaryOp {
            condition: Box::new(ident("a")),
            then_expr: Box::new(ident("b")),
            else_expr: Box::new(ident("c")),
        };
        assert_eq!(render(&expr), "(a) ? (b) : (c)");
    }

    #[test]
    fn test_assignment_target_bare() {
        let value = Expr::BinaryOp {
            op: BinOp::Add,
            left: Box::new(ident("y")),
            right: Box::new(int("1")),
        };
        let expr = Expr::Assignment {
            op: AssignOp::Assign,
            target: Box::new(ident("x")),
            value: Box::new(value),
        };
        assert_eq!(render(&expr), "x = (y + 1)");
    }

    #[test]
    fn test_sizeof_type_always_parenthesized() {
        let expr = Expr::SizeofType {
            type_name: TypeName::new("int"),
        };
        assert_eq!(render(&expr), "sizeof (int)");
    }

    #[test]
    fn test_sizeof_value_spaced() {
        let expr = Expr::UnaryOp {
            op: UnOp::Sizeof,
            operand: Box::new(ident("x")),
        };
        assert_eq!(render(&expr), "sizeof x");
    }

    #[test]
    fn test_pointer_type_rendering() {
        let mut type_name = TypeName::new("char");
        type_name.pointer_depth = 2;
        let expr = Expr::SizeofType { type_name };
        assert_eq!(render(&expr), "sizeof (char **)");
    }

    #[test]
    fn test_array_type_rendering() {
        let mut type_name = TypeName::new("int");
        type_name.array_dims = vec![Some("10".to_string())];
        let expr = Expr::SizeofType { type_name };
        assert_eq!(render(&expr), "sizeof (int[10])");
    }

    #[test]
    fn test_member_access() {
        let dot = Expr::MemberAccess {
            base: Box::new(ident("s")),
            field: "field".to_string(),
            arrow: false,
        };
        // s is simple, but MemberAccess is not: chaining wraps the base
        let arrow = Expr::MemberAccess {
            base: Box::new(dot),
            field: "next".to_string(),
            arrow: true,
        };
        assert_eq!(render(&arrow), "(s.field)->next");
    }

    #[test]
    fn test_call_arguments_joined() {
        let expr = Expr::FunctionCall {
            callee: Box::new(ident("f")),
            args: vec![ident("a"), int("2")],
        };
        assert_eq!(render(&expr), "f(a, 2)");
    }
}
