///____________________________________________________________________________________________________________________________
/// # Expression tree
/// tagged-node grammar of the operator trees found in PDE documents, decoded from JSON
/// without ever failing
///# Example#
/// ```
/// use pde_tree::symbolic::expr_tree::Node;
/// let value = serde_json::json!({"type": "deriv", "dep": "u", "wrt": "x", "order": 2});
/// let node = Node::from_json(&value);
/// assert_eq!(node, Node::deriv("u", "x", 2));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod expr_tree;
///____________________________________________________________________________________________________________________________
/// # Expression renderer
/// turns an expression tree into a human-readable string
///# Example#
/// ```
/// use pde_tree::symbolic::expr_render::render;
/// use pde_tree::symbolic::expr_tree::Node;
/// let convection = Node::dep("u") * Node::deriv("u", "x", 1);
/// assert_eq!(render(&convection), "(u ∂u/∂x)");
/// let initial = Node::func("u0", vec![Node::var("x"), Node::var("y")]);
/// assert_eq!(initial.to_string(), "u0(x, y)");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod expr_render;
mod expr_tree_tests;
