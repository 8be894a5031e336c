//! # Expression Tree Module
//!
//! Tagged-node grammar for the mathematical expressions that appear in a PDE document
//! (`lhs`, `rhs`, `value_expr` and domain bounds). On the wire every node is a JSON object
//! with a `type` tag:
//!
//! | tag     | fields                          |
//! |---------|---------------------------------|
//! | `const` | `value: number`                 |
//! | `var`   | `name: string`                  |
//! | `dep`   | `name: string`                  |
//! | `param` | `name: string`                  |
//! | `deriv` | `dep`, `wrt`, `order >= 1`      |
//! | `op`    | `op: string`, `args: [node]`    |
//! | `fn`    | `name: string`, `args: [node]`  |
//!
//! Trees come from an untrusted producer, so decoding is total: anything that does not fit
//! the table above becomes [`Node::Unknown`] instead of an error, and one bad node never
//! spoils the rest of the document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value, json};

/// Core expression node. One variant per node kind, plus an explicit fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// numeric literal, kept exactly as written in the JSON (`0` stays `0`, `0.0` stays `0.0`)
    Const(Number),
    /// free/independent variable, e.g. a coordinate
    Var(String),
    /// reference to a dependent variable (an unknown function)
    Dep(String),
    /// reference to a named parameter
    Param(String),
    /// partial derivative of `dep` with respect to `wrt`
    Deriv { dep: String, wrt: String, order: u32 },
    /// n-ary operator application
    Op { op: String, args: Vec<Node> },
    /// named function application
    Func { name: String, args: Vec<Node> },
    /// anything else; `tag` is the `type` string if there was one
    Unknown { tag: Option<String> },
}

impl Node {
    pub fn var(name: &str) -> Node {
        Node::Var(name.to_string())
    }

    pub fn dep(name: &str) -> Node {
        Node::Dep(name.to_string())
    }

    pub fn param(name: &str) -> Node {
        Node::Param(name.to_string())
    }

    pub fn int(value: i64) -> Node {
        Node::Const(Number::from(value))
    }

    /// float literal; NaN and infinities have no JSON form and become `Unknown`
    pub fn float(value: f64) -> Node {
        match Number::from_f64(value) {
            Some(number) => Node::Const(number),
            None => Node::Unknown {
                tag: Some("const".to_string()),
            },
        }
    }

    pub fn deriv(dep: &str, wrt: &str, order: u32) -> Node {
        Node::Deriv {
            dep: dep.to_string(),
            wrt: wrt.to_string(),
            order,
        }
    }

    pub fn op(op: &str, args: Vec<Node>) -> Node {
        Node::Op {
            op: op.to_string(),
            args,
        }
    }

    pub fn func(name: &str, args: Vec<Node>) -> Node {
        Node::Func {
            name: name.to_string(),
            args,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Node::Unknown { .. })
    }

    /// Decodes a node from JSON. Never fails.
    pub fn from_json(value: &Value) -> Node {
        let Some(object) = value.as_object() else {
            return Node::Unknown { tag: None };
        };
        let Some(tag) = object.get("type").and_then(Value::as_str) else {
            return Node::Unknown { tag: None };
        };
        let name = || string_field(object, "name");
        let parsed = match tag {
            "const" => match object.get("value") {
                Some(Value::Number(number)) => Some(Node::Const(number.clone())),
                _ => None,
            },
            "var" => name().map(Node::Var),
            "dep" => name().map(Node::Dep),
            "param" => name().map(Node::Param),
            "deriv" => deriv_from_json(object),
            "op" => string_field(object, "op").map(|op| Node::Op {
                op,
                args: args_from_json(object),
            }),
            "fn" => name().map(|name| Node::Func {
                name,
                args: args_from_json(object),
            }),
            _ => None,
        };
        parsed.unwrap_or_else(|| Node::Unknown {
            tag: Some(tag.to_string()),
        })
    }

    /// Encodes the node back into the tagged JSON shape it was read from.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Const(value) => json!({"type": "const", "value": value}),
            Node::Var(name) => json!({"type": "var", "name": name}),
            Node::Dep(name) => json!({"type": "dep", "name": name}),
            Node::Param(name) => json!({"type": "param", "name": name}),
            Node::Deriv { dep, wrt, order } => {
                json!({"type": "deriv", "dep": dep, "wrt": wrt, "order": order})
            }
            Node::Op { op, args } => json!({
                "type": "op",
                "op": op,
                "args": args.iter().map(Node::to_json).collect::<Vec<_>>(),
            }),
            Node::Func { name, args } => json!({
                "type": "fn",
                "name": name,
                "args": args.iter().map(Node::to_json).collect::<Vec<_>>(),
            }),
            Node::Unknown { tag } => json!({ "type": tag }),
        }
    }

    /// Names of dependent variables referenced by `dep` and `deriv` nodes, first-seen order.
    pub fn dependents(&self) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_dependents(&mut found);
        found
    }

    fn collect_dependents(&self, found: &mut Vec<String>) {
        match self {
            Node::Dep(name) | Node::Deriv { dep: name, .. } => {
                if !found.contains(name) {
                    found.push(name.clone());
                }
            }
            Node::Op { args, .. } | Node::Func { args, .. } => {
                for arg in args {
                    arg.collect_dependents(found);
                }
            }
            Node::Const(_) | Node::Var(_) | Node::Param(_) | Node::Unknown { .. } => {}
        }
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn args_from_json(object: &Map<String, Value>) -> Vec<Node> {
    object
        .get("args")
        .and_then(Value::as_array)
        .map(|args| args.iter().map(Node::from_json).collect())
        .unwrap_or_default()
}

fn deriv_from_json(object: &Map<String, Value>) -> Option<Node> {
    let dep = string_field(object, "dep")?;
    let wrt = string_field(object, "wrt")?;
    // absent order means a first derivative; 2.0 is accepted as 2
    let order = match object.get("order") {
        None | Some(Value::Null) => 1,
        Some(value) => {
            let order = value.as_f64()?;
            if order < 1.0 || order.fract() != 0.0 || order > u32::MAX as f64 {
                return None;
            }
            order as u32
        }
    };
    Some(Node::Deriv { dep, wrt, order })
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Node::from_json(&value))
    }
}

impl std::ops::Add for Node {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Node::op("+", vec![self, rhs])
    }
}

impl std::ops::Sub for Node {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Node::op("-", vec![self, rhs])
    }
}

impl std::ops::Mul for Node {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Node::op("*", vec![self, rhs])
    }
}

impl std::ops::Div for Node {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Node::op("/", vec![self, rhs])
    }
}
