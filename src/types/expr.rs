//! Expression trees over pixel coordinates.
//!
//! An expression is a strictly binary tree. Leaves read one of the
//! operands `x`, `y` or `c`; inner nodes combine two subtrees with an
//! arithmetic or bitwise operator:
//! - `(x + y)`, `(x - y)`, `(x * y)`, `(x / y)`, `(x % y)`
//! - `(x & y)`, `(x | y)`, `(x ^ y)`
//! - `(x << y)`, `(x >> y)`
//!
//! Evaluation is total: division and remainder by zero yield zero, and
//! overflow wraps.

use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// A leaf value source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The pixel column.
    X,
    /// The pixel row.
    Y,
    /// The per-run constant.
    C,
}

impl Operand {
    pub const ALL: [Operand; 3] = [Operand::X, Operand::Y, Operand::C];

    /// Single-character name used when rendering.
    pub fn name(self) -> char {
        match self {
            Operand::X => 'x',
            Operand::Y => 'y',
            Operand::C => 'c',
        }
    }
}

impl Distribution<Operand> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operand {
        Operand::ALL[rng.gen_range(0..Operand::ALL.len())]
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::BitAnd,
        Operator::BitOr,
        Operator::BitXor,
        Operator::ShiftLeft,
        Operator::ShiftRight,
    ];

    /// The operator's infix symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
        }
    }

    /// Apply the operator to two evaluated operands.
    ///
    /// Shift amounts are reduced into `0..8` first. Right shift is
    /// arithmetic.
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a.wrapping_add(b),
            Operator::Sub => a.wrapping_sub(b),
            Operator::Mul => a.wrapping_mul(b),
            Operator::Div => {
                if b == 0 {
                    0
                } else {
                    a.wrapping_div(b)
                }
            }
            Operator::Mod => {
                if b == 0 {
                    0
                } else {
                    a.wrapping_rem(b)
                }
            }
            Operator::BitAnd => a & b,
            Operator::BitOr => a | b,
            Operator::BitXor => a ^ b,
            Operator::ShiftLeft => a.wrapping_shl(shift_amount(b)),
            Operator::ShiftRight => a >> shift_amount(b),
        }
    }
}

impl Distribution<Operator> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        Operator::ALL[rng.gen_range(0..Operator::ALL.len())]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn shift_amount(b: i32) -> u32 {
    b.rem_euclid(8) as u32
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf: `x`, `y` or `c`.
    Operand(Operand),
    /// An operator applied to two owned subtrees.
    Operator {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Create a leaf node.
    pub fn operand(operand: Operand) -> Self {
        Expr::Operand(operand)
    }

    /// Create an operator node.
    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate the expression for a pixel.
    pub fn eval(&self, x: i32, y: i32, c: i32) -> i32 {
        match self {
            Expr::Operand(Operand::X) => x,
            Expr::Operand(Operand::Y) => y,
            Expr::Operand(Operand::C) => c,
            Expr::Operator { op, left, right } => {
                let a = left.eval(x, y, c);
                let b = right.eval(x, y, c);
                op.apply(a, b)
            }
        }
    }

    /// Render as a fully parenthesized infix string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Longest root-to-leaf path, counting nodes. A leaf has depth 1.
    pub fn depth(&self) -> u32 {
        match self {
            Expr::Operand(_) => 1,
            Expr::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Operand(_) => 1,
            Expr::Operator { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Number of operator (inner) nodes.
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Operand(_) => 0,
            Expr::Operator { left, right, .. } => {
                1 + left.operator_count() + right.operator_count()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Operand(operand) => write!(f, "{}", operand.name()),
            Expr::Operator { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
