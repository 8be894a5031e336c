//! Prompt construction for the generator. Everything here is deterministic: the same
//! catalog entry always yields the same description and the same prompts.

use crate::pde::document::literal_text;
use crate::pde::navier_stokes::navier_stokes_example;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SYSTEM_PROMPT: &str = "You are an expert in partial differential equations and symbolic expression trees. \
Convert PDE descriptions into a structured JSON object following the example \
Navier–Stokes JSON schema with PDEs, initial conditions, and boundary conditions. \
Use the same operator-tree style for 'lhs', 'rhs', and 'value_expr' expressions. \
Respond with VALID JSON ONLY, no Markdown, no explanations.";

const USER_PROMPT_HEADER: &str = "Convert the given PDE into JSON format. Use the SAME structure as the example below:\n\
- Top-level keys: at least 'metadata', 'variables', 'parameters', 'pdes'. You may also include 'domain', 'initial_conditions', and 'boundary_conditions'.\n\
- Each PDE in 'pdes' has 'equation_id', 'type', 'lhs', 'rhs'.\n\
- 'lhs' and 'rhs' are expression trees built using 'op', 'deriv', 'dep', 'param', 'const', and optionally 'fn'/'var'.\n\
- Initial and boundary conditions, when present, use 'value_expr' nodes that follow the same expression-tree conventions.\n\n\
IMPORTANT INSTRUCTIONS:\n \
- Follow the schema closely but adapt field values to this PDE.\n \
- If some information is missing, use null or a short best-guess description.\n \
- Do NOT include any text outside the JSON object.\n\n";

const CLOSING_INSTRUCTION: &str = "Convert this PDE (or PDE system) into the JSON operator-tree format following the Navier–Stokes example with \
keys 'metadata', 'variables', 'parameters', optional 'domain', 'pdes', 'initial_conditions', and \
'boundary_conditions'. Use expression trees for 'lhs', 'rhs', and any 'value_expr' fields.";

/// The user message: fixed instructions, the example document, then the description.
pub fn user_prompt(description: &str) -> String {
    format!(
        "{}Example JSON schema:\n{:#}\n\nNow convert this PDE description into JSON:\n{}\n",
        USER_PROMPT_HEADER,
        navier_stokes_example(),
        description
    )
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariables {
    #[serde(default)]
    pub independent: Vec<String>,
    #[serde(default)]
    pub dependent: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<String>,
}

/// One entry of a PDE catalog, the loosely structured input the descriptions are built from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub variables: CatalogVariables,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    /// a mapping `var -> [a, b]` or a free-text description such as `"[0,1]^2"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_conditions: Option<Value>,
    /// older catalogs carry a single string here instead of `initial_conditions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_condition: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_conditions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    /// legacy free text like `D=0.01,r=1.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_values: Option<String>,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed_pde")
    }
}

/// strings are one item, arrays one item per element, null/absent nothing
fn text_items(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(literal_text).collect(),
        Some(other) => vec![literal_text(other)],
    }
}

fn domain_line(entry: &CatalogEntry) -> Option<String> {
    match &entry.domain {
        Some(Value::Object(intervals)) => {
            let pieces: Vec<String> = intervals
                .iter()
                .filter_map(|(var, interval)| match interval.as_array().map(Vec::as_slice) {
                    Some([a, b]) => Some(format!(
                        "{} ∈ [{}, {}]",
                        var,
                        literal_text(a),
                        literal_text(b)
                    )),
                    _ => None,
                })
                .collect();
            (!pieces.is_empty()).then(|| format!("Domain: {}.", pieces.join("; ")))
        }
        Some(Value::String(description)) => Some(format!(
            "Domain description from data (convert this into a structured 'domain' JSON object): {}",
            description
        )),
        // no usable domain: unit interval for every independent variable
        _ => {
            let pieces: Vec<String> = entry
                .variables
                .independent
                .iter()
                .map(|var| format!("{} ∈ [0, 1]", var))
                .collect();
            (!pieces.is_empty()).then(|| {
                format!(
                    "Assume the following default domain for the independent variables (encode this in the JSON 'domain' field): {}.",
                    pieces.join("; ")
                )
            })
        }
    }
}

/// Turns a catalog entry into the natural-language description handed to the generator.
pub fn build_description(entry: &CatalogEntry) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("PDE name: {}.", entry.name()));

    if let Some(line) = domain_line(entry) {
        parts.push(line);
    }

    parts.push(format!(
        "The PDE system, written in a compact symbolic notation using subscripts for derivatives, is:\n{}",
        entry.equation.as_deref().unwrap_or("")
    ));

    let initial = entry
        .initial_conditions
        .as_ref()
        .filter(|value| !value.is_null())
        .or(entry.initial_condition.as_ref());
    let initial = text_items(initial);
    if !initial.is_empty() {
        parts.push("Initial conditions (to be encoded under 'initial_conditions' in JSON):".to_string());
        parts.extend(initial.iter().map(|ic| format!("- {}", ic)));
    }

    let boundary = text_items(entry.boundary_conditions.as_ref());
    if !boundary.is_empty() {
        parts.push("Boundary conditions (to be encoded under 'boundary_conditions' in JSON):".to_string());
        parts.extend(boundary.iter().map(|bc| format!("- {}", bc)));
    }

    match (&entry.parameters, entry.parameters_values.as_deref()) {
        (Some(parameters), _) if !parameters.is_empty() => {
            parts.push(
                "Parameter definitions / values (encode these under the JSON 'parameters' field):"
                    .to_string(),
            );
            parts.extend(
                parameters
                    .iter()
                    .map(|(name, value)| format!("- {} = {}", name, literal_text(value))),
            );
        }
        (_, Some(values)) if !values.is_empty() => {
            parts.push(
                "Example or default parameter values (encode these under the appropriate 'parameters' or auxiliary fields in JSON):"
                    .to_string(),
            );
            parts.push(format!("- {}", values));
        }
        _ => {}
    }

    parts.push(CLOSING_INSTRUCTION.to_string());
    parts.join("\n")
}
