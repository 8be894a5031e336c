//! The 2D incompressible Navier–Stokes system with initial and boundary conditions.
//!
//! It doubles as the schema-by-example handed to the generator: every construct a
//! document may use (operator trees in `lhs`/`rhs`/`value_expr`, null parameters,
//! mapping and string placements, notes) appears in it at least once.

use crate::error::Result;
use crate::pde::document::Document;
use serde_json::{Value, json};

fn dep(name: &str) -> Value {
    json!({"type": "dep", "name": name})
}

fn var(name: &str) -> Value {
    json!({"type": "var", "name": name})
}

fn d1(dep: &str, wrt: &str) -> Value {
    json!({"type": "deriv", "dep": dep, "wrt": wrt, "order": 1})
}

fn d2(dep: &str, wrt: &str) -> Value {
    json!({"type": "deriv", "dep": dep, "wrt": wrt, "order": 2})
}

fn op(op: &str, left: Value, right: Value) -> Value {
    json!({"type": "op", "op": op, "args": [left, right]})
}

/// `∂w/∂t + (u ∂w/∂x + v ∂w/∂y) = -∂p/∂wrt + nu (∂²w/∂x² + ∂²w/∂y²)`
fn momentum(equation_id: &str, w: &str, pressure_wrt: &str) -> Value {
    json!({
        "equation_id": equation_id,
        "type": "equals",
        "lhs": op("+",
            d1(w, "t"),
            op("+",
                op("*", dep("u"), d1(w, "x")),
                op("*", dep("v"), d1(w, "y")))),
        "rhs": op("+",
            op("*", json!({"type": "const", "value": -1}), d1("p", pressure_wrt)),
            op("*",
                json!({"type": "param", "name": "nu"}),
                op("+", d2(w, "x"), d2(w, "y")))),
    })
}

fn initial_condition(dep: &str, function: &str) -> Value {
    json!({
        "type": "ic",
        "dep": dep,
        "location": {"t": 0.0},
        "value_expr": {"type": "fn", "name": function, "args": [var("x"), var("y")]},
    })
}

/// The example as raw JSON, key order as it is sent to the generator.
pub fn navier_stokes_example() -> Value {
    json!({
        "metadata": {
            "name": "2D Incompressible Navier–Stokes (u,v,p) - full system with ICs/BCs",
            "description": "System of three PDEs: u-momentum, v-momentum, and incompressible continuity in (x,y,t), with initial and boundary conditions.",
        },
        "variables": {
            "independent": ["x", "y", "t"],
            "dependent": ["u", "v", "p"],
        },
        "parameters": {"nu": null},
        "domain": {
            "x": [0.0, 1.0],
            "y": [0.0, 1.0],
            "t": [0.0, 1.0],
        },
        "pdes": [
            momentum("u_momentum", "u", "x"),
            momentum("v_momentum", "v", "y"),
            {
                "equation_id": "continuity",
                "type": "equals",
                "lhs": op("+", d1("u", "x"), d1("v", "y")),
                "rhs": {"type": "const", "value": 0},
            },
        ],
        "initial_conditions": [
            initial_condition("u", "u0"),
            initial_condition("v", "v0"),
            initial_condition("p", "p0"),
        ],
        "boundary_conditions": [
            {
                "type": "dirichlet",
                "dep": "u",
                "spec": "boundary",
                "value_expr": {"type": "const", "value": 0.0},
                "notes": "no-slip: u = 0 on spatial boundary",
            },
            {
                "type": "dirichlet",
                "dep": "v",
                "spec": "boundary",
                "value_expr": {"type": "const", "value": 0.0},
                "notes": "no-slip: v = 0 on spatial boundary",
            },
            {
                "type": "dirichlet",
                "dep": "p",
                "spec": {"x": 0.0, "y": 0.0},
                "value_expr": {"type": "const", "value": 0.0},
                "notes": "pressure reference to fix gauge: p(0,0,t)=0",
            },
        ],
    })
}

pub fn navier_stokes_document() -> Result<Document> {
    Document::from_value("navier_stokes", navier_stokes_example())
}
