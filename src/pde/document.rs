//! # PDE document model
//!
//! Top-level record describing one PDE problem, as produced by the external generator:
//! ```text
//! {
//!   "metadata":   {"name": ..., "description": ...},
//!   "variables":  {"independent": [...], "dependent": [...]},
//!   "parameters": {"nu": null, "c": 1.0},
//!   "domain":     {"x": [0.0, 1.0], "t": [0.0, {"type": "param", "name": "T"}]},
//!   "pdes":       [{"equation_id": ..., "type": "equals", "lhs": node, "rhs": node}],
//!   "initial_conditions":  [{"type": "ic", "dep": "u", "location": {"t": 0.0}, "value_expr": node}],
//!   "boundary_conditions": [{"type": "dirichlet", "dep": "u", "spec": "boundary", "value_expr": node, "notes": ...}]
//! }
//! ```
//! Every key is optional at the type level: an absent section simply produces no output.
//! Decoding is total below the top level, the same way it is for [`Node`]: a record that is
//! not an object, a `null`, or a field of the wrong type reads as absent, and the record
//! renders with placeholders. Only a top level that is not an object is rejected.
//! Whether the required keys are present is a separate, advisory question answered by
//! [`Document::validate`]. Documents are read once and never mutated.

use crate::error::{PdeError, Result};
use crate::pde::classify::{EquationKind, classify};
use crate::symbolic::expr_tree::Node;
use serde::Serialize;
use serde_json::{Map, Value};

static MISSING_NODE: Node = Node::Unknown { tag: None };

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Metadata {
    pub fn from_json(value: &Value) -> Metadata {
        Metadata {
            name: string_field(value, "name"),
            description: string_field(value, "description"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Variables {
    pub independent: Vec<String>,
    pub dependent: Vec<String>,
}

impl Variables {
    /// `null` or a non-list is an empty list; non-string items are skipped.
    pub fn from_json(value: &Value) -> Variables {
        Variables {
            independent: string_list(value, "independent"),
            dependent: string_list(value, "dependent"),
        }
    }
}

/// One entry of `pdes`. The `type` field ("equals") is informational only.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Equation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lhs: Option<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhs: Option<Node>,
}

impl Equation {
    /// A non-object entry reads as an equation with every field absent.
    pub fn from_json(value: &Value) -> Equation {
        Equation {
            equation_id: string_field(value, "equation_id"),
            relation: string_field(value, "type"),
            lhs: value.get("lhs").map(Node::from_json),
            rhs: value.get("rhs").map(Node::from_json),
        }
    }

    pub fn id(&self) -> &str {
        self.equation_id.as_deref().unwrap_or("unknown")
    }

    pub fn kind(&self) -> EquationKind {
        classify(self.id())
    }

    pub fn lhs(&self) -> &Node {
        self.lhs.as_ref().unwrap_or(&MISSING_NODE)
    }

    pub fn rhs(&self) -> &Node {
        self.rhs.as_ref().unwrap_or(&MISSING_NODE)
    }

    /// `lhs = rhs`
    pub fn render(&self) -> String {
        format!("{} = {}", self.lhs(), self.rhs())
    }
}

/// Initial or boundary condition record. Initial conditions say where they hold in
/// `location`, boundary conditions in `spec`; both may be a mapping, a string or absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Condition {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_expr: Option<Node>,
    /// a string, or a number shown as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
}

impl Condition {
    pub fn from_json(value: &Value) -> Condition {
        Condition {
            kind: string_field(value, "type"),
            dep: string_field(value, "dep"),
            location: present_field(value, "location"),
            spec: present_field(value, "spec"),
            value_expr: value.get("value_expr").map(Node::from_json),
            notes: present_field(value, "notes"),
        }
    }

    pub fn dep(&self) -> &str {
        self.dep.as_deref().unwrap_or("?")
    }

    pub fn value_expr(&self) -> &Node {
        self.value_expr.as_ref().unwrap_or(&MISSING_NODE)
    }

    /// `[type] dep at placement: value (notes)`
    pub fn render(&self, default_kind: &str, placement: Option<&Value>) -> String {
        let mut line = format!(
            "[{}] {} at {}: {}",
            self.kind.as_deref().unwrap_or(default_kind),
            self.dep(),
            placement_text(placement),
            self.value_expr()
        );
        let notes = match &self.notes {
            Some(Value::String(notes)) if !notes.is_empty() => Some(notes.clone()),
            Some(Value::Number(notes)) => Some(notes.to_string()),
            _ => None,
        };
        if let Some(notes) = notes {
            line.push_str(&format!(" ({})", notes));
        }
        line
    }

    pub fn render_initial(&self) -> String {
        self.render("ic", self.location.as_ref())
    }

    pub fn render_boundary(&self) -> String {
        self.render("?", self.spec.as_ref())
    }
}

/// One end of a domain interval: an expression tree or a plain literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Bound {
    Expr(Node),
    Literal(Value),
}

impl Bound {
    pub fn from_json(value: &Value) -> Bound {
        match value {
            Value::Object(_) => Bound::Expr(Node::from_json(value)),
            other => Bound::Literal(other.clone()),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Bound::Expr(node) => node.to_string(),
            Bound::Literal(value) => literal_text(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DomainInterval {
    pub variable: String,
    pub lower: Bound,
    pub upper: Bound,
}

impl DomainInterval {
    /// `x ∈ [a, b]`
    pub fn render(&self) -> String {
        format!("{} ∈ [{}, {}]", self.variable, self.lower.render(), self.upper.render())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    /// values are `number | null`; key order is kept as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdes: Option<Vec<Equation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conditions: Option<Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_conditions: Option<Vec<Condition>>,
}

impl Document {
    pub fn from_json_str(source_name: &str, text: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| PdeError::malformed(source_name, e.to_string()))?;
        Document::from_value(source_name, value)
    }

    /// Fails only when `value` is not an object; every section below it is read leniently.
    pub fn from_value(source_name: &str, value: Value) -> Result<Document> {
        if !value.is_object() {
            return Err(PdeError::malformed(source_name, "top-level value is not a JSON object"));
        }
        let object = |key: &str| value.get(key).filter(|section| section.is_object());
        let records = |key: &str| value.get(key).and_then(Value::as_array);
        Ok(Document {
            metadata: object("metadata").map(Metadata::from_json),
            variables: object("variables").map(Variables::from_json),
            parameters: object("parameters").and_then(Value::as_object).cloned(),
            domain: object("domain").and_then(Value::as_object).cloned(),
            pdes: records("pdes").map(|items| items.iter().map(Equation::from_json).collect()),
            initial_conditions: records("initial_conditions")
                .map(|items| items.iter().map(Condition::from_json).collect()),
            boundary_conditions: records("boundary_conditions")
                .map(|items| items.iter().map(Condition::from_json).collect()),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.name.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.description.as_deref())
    }

    pub fn independent(&self) -> &[String] {
        self.variables.as_ref().map(|v| v.independent.as_slice()).unwrap_or(&[])
    }

    pub fn dependent(&self) -> &[String] {
        self.variables.as_ref().map(|v| v.dependent.as_slice()).unwrap_or(&[])
    }

    /// `nu (unspecified)` for null values, `name = value` otherwise
    pub fn parameter_entries(&self) -> Vec<String> {
        self.parameters
            .iter()
            .flatten()
            .map(|(name, value)| match value {
                Value::Null => format!("{} (unspecified)", name),
                other => format!("{} = {}", name, literal_text(other)),
            })
            .collect()
    }

    /// Two-element intervals only; anything else under `domain` is skipped.
    pub fn domain_intervals(&self) -> Vec<DomainInterval> {
        self.domain
            .iter()
            .flatten()
            .filter_map(|(variable, interval)| match interval.as_array().map(Vec::as_slice) {
                Some([lower, upper]) => Some(DomainInterval {
                    variable: variable.clone(),
                    lower: Bound::from_json(lower),
                    upper: Bound::from_json(upper),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn equations(&self) -> &[Equation] {
        self.pdes.as_deref().unwrap_or(&[])
    }

    pub fn equations_of_kind(&self, kind: EquationKind) -> impl Iterator<Item = &Equation> {
        self.equations().iter().filter(move |eq| eq.kind() == kind)
    }

    pub fn initial_conditions(&self) -> &[Condition] {
        self.initial_conditions.as_deref().unwrap_or(&[])
    }

    pub fn boundary_conditions(&self) -> &[Condition] {
        self.boundary_conditions.as_deref().unwrap_or(&[])
    }

    /// Dependent variables referenced by equations and conditions, first-seen order.
    pub fn referenced_dependents(&self) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut push = |name: String| {
            if !found.contains(&name) {
                found.push(name);
            }
        };
        for eq in self.equations() {
            for name in eq.lhs().dependents().into_iter().chain(eq.rhs().dependents()) {
                push(name);
            }
        }
        for condition in self.initial_conditions().iter().chain(self.boundary_conditions()) {
            if let Some(dep) = &condition.dep {
                push(dep.clone());
            }
            for name in condition.value_expr().dependents() {
                push(name);
            }
        }
        found
    }

    /// Checks that `metadata.name`, `variables`, `parameters` and `pdes` are present and
    /// that every referenced dependent variable is declared. Advisory: rendering works
    /// on documents that fail it.
    pub fn validate(&self, source_name: &str) -> Result<()> {
        let mut problems = Vec::new();
        let missing: Vec<&str> = [
            ("metadata.name", self.name().is_none()),
            ("variables", self.variables.is_none()),
            ("parameters", self.parameters.is_none()),
            ("pdes", self.pdes.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect();
        if !missing.is_empty() {
            problems.push(format!("missing required keys: {}", missing.join(", ")));
        }
        if self.variables.is_some() {
            let undeclared: Vec<String> = self
                .referenced_dependents()
                .into_iter()
                .filter(|name| !self.dependent().contains(name))
                .collect();
            if !undeclared.is_empty() {
                problems.push(format!(
                    "undeclared dependent variables: {}",
                    undeclared.join(", ")
                ));
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(PdeError::malformed(source_name, problems.join("; ")))
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn present_field(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|field| !field.is_null()).cloned()
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Plain display of a JSON literal: strings without quotes, numbers as written.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Where a condition holds: a mapping becomes `k=v, ...`, a string is used as is,
/// an absent or empty mapping is `?`.
pub fn placement_text(placement: Option<&Value>) -> String {
    match placement {
        None => "?".to_string(),
        Some(Value::Object(entries)) if entries.is_empty() => "?".to_string(),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(key, value)| format!("{}={}", key, literal_text(value)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => literal_text(other),
    }
}
