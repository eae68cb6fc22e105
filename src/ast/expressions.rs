use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// An expression node.
///
/// Formatting a node with `Display` gives its canonical rendering: every
/// operator application is wrapped in parentheses, so two trees render to
/// the same string exactly when they have the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier, `a`.
    Name(String),
    /// `name = value`. The target is always a plain identifier.
    Assign { name: String, value: Box<Expr> },
    /// An infix operator, `left op right`.
    Binary {
        left: Box<Expr>,
        operator: TokenKind,
        right: Box<Expr>,
    },
    /// A prefix operator, `op right`.
    Prefix { operator: TokenKind, right: Box<Expr> },
    /// A postfix operator, `left op`.
    Postfix { left: Box<Expr>, operator: TokenKind },
    /// `condition ? then_arm : else_arm`.
    Conditional {
        condition: Box<Expr>,
        then_arm: Box<Expr>,
        else_arm: Box<Expr>,
    },
    /// `callee(arguments...)`.
    Call { callee: Box<Expr>, arguments: Vec<Expr> },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExprType {
    Name,
    Assign,
    Binary,
    Prefix,
    Postfix,
    Conditional,
    Call,
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Name(_) => ExprType::Name,
            Expr::Assign { .. } => ExprType::Assign,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Prefix { .. } => ExprType::Prefix,
            Expr::Postfix { .. } => ExprType::Postfix,
            Expr::Conditional { .. } => ExprType::Conditional,
            Expr::Call { .. } => ExprType::Call,
        }
    }

    /// The identifier, if this node is a bare name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expr::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn name(name: impl Into<String>) -> Expr {
        Expr::Name(name.into())
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Expr {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn binary(left: Expr, operator: TokenKind, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn prefix(operator: TokenKind, right: Expr) -> Expr {
        Expr::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    pub fn postfix(left: Expr, operator: TokenKind) -> Expr {
        Expr::Postfix {
            left: Box::new(left),
            operator,
        }
    }

    pub fn conditional(condition: Expr, then_arm: Expr, else_arm: Expr) -> Expr {
        Expr::Conditional {
            condition: Box::new(condition),
            then_arm: Box::new(then_arm),
            else_arm: Box::new(else_arm),
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Assign { name, value } => write!(f, "({} = {})", name, value),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expr::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expr::Postfix { left, operator } => write!(f, "({}{})", left, operator),
            Expr::Conditional {
                condition,
                then_arm,
                else_arm,
            } => write!(f, "({} ? {} : {})", condition, then_arm, else_arm),
            Expr::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
