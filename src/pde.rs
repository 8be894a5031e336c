//! PDE documents: the record the generator produces, the classification of its
//! equations, and its text rendering.
///____________________________________________________________________________________________________________________________
/// classify an `equation_id` as a PDE, a boundary condition or an initial condition
/// Example#
/// ```
/// use pde_tree::pde::classify::{classify, EquationKind};
/// assert_eq!(classify("bc_u_left"), EquationKind::Boundary);
/// assert_eq!(classify("ic_boundary"), EquationKind::Boundary);
/// assert_eq!(classify("u_momentum"), EquationKind::Pde);
/// ```
pub mod classify;
///____________________________________________________________________________________________________________________________
/// document model: metadata, variables, parameters, domain, equations, conditions
pub mod document;
/// the Navier–Stokes example document
pub mod navier_stokes;
///____________________________________________________________________________________________________________________________
/// render a document into grouped text sections
/// Example#
/// ```
/// use pde_tree::pde::document::Document;
/// use pde_tree::pde::report::render_document;
/// let text = r#"{"metadata": {"name": "heat"}, "pdes": [{"equation_id": "heat",
///   "lhs": {"type": "deriv", "dep": "u", "wrt": "t"},
///   "rhs": {"type": "op", "op": "*", "args": [{"type": "param", "name": "alpha"},
///           {"type": "deriv", "dep": "u", "wrt": "x", "order": 2}]}}]}"#;
/// let document = Document::from_json_str("heat.json", text).unwrap();
/// let rendered = render_document(&document, Some("heat.json"));
/// assert!(rendered.contains("[heat]  ∂u/∂t = (alpha ∂^2u/∂x^2)"));
/// ```
pub mod report;
