//! pretty-printer for expression trees.
//!
//! Every binary infix operation is fully parenthesized, there is no precedence-based
//! elision, so the grouping of the original tree can always be read back from the text:
//! ```text
//! {"type":"op","op":"*","args":[{"type":"dep","name":"u"},{"type":"deriv","dep":"u","wrt":"x","order":1}]}
//!  ->  (u ∂u/∂x)
//! ```

use crate::symbolic::expr_tree::Node;
use itertools::Itertools;
use std::fmt;

/// what an unrecognised or malformed node renders to
pub const UNKNOWN_PLACEHOLDER: &str = "<?>";

/// operators printed infix when they have exactly two arguments
pub const INFIX_OPERATORS: [&str; 5] = ["+", "-", "*", "/", "^"];

/// Renders a node to its display string. Total and pure.
pub fn render(node: &Node) -> String {
    node.to_string()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Deriv { dep, wrt, order: 1 } => write!(f, "∂{}/∂{}", dep, wrt),
            // same exponent on numerator and denominator, mixed partials are not distinguished
            Node::Deriv { dep, wrt, order } => write!(f, "∂^{}{}/∂{}^{}", order, dep, wrt, order),
            Node::Dep(name) | Node::Param(name) | Node::Var(name) => write!(f, "{}", name),
            Node::Const(value) => write!(f, "{}", value),
            Node::Func { name, args } => write!(f, "{}({})", name, args.iter().join(", ")),
            Node::Op { op, args } if args.len() == 2 && INFIX_OPERATORS.contains(&op.as_str()) => {
                let (left, right) = (&args[0], &args[1]);
                match op.as_str() {
                    // product is juxtaposition
                    "*" => write!(f, "({} {})", left, right),
                    "^" => write!(f, "({}^{})", left, right),
                    _ => write!(f, "({} {} {})", left, op, right),
                }
            }
            Node::Op { op, args } => write!(f, "{}({})", op, args.iter().join(", ")),
            Node::Unknown { .. } => f.write_str(UNKNOWN_PLACEHOLDER),
        }
    }
}
