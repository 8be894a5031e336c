//! Classification of entries of a document's `pdes` list by their `equation_id`.
//!
//! Producers often put boundary and initial conditions into `pdes` next to the equations
//! proper, naming them `bc_u_left`, `initial_v` and so on. The id text is the only thing
//! looked at, never the equation content.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EquationKind {
    Pde,
    Boundary,
    Initial,
}

/// Case-insensitive substring rules, first match wins:
/// `boundary`, `initial`, `bc`, `ic`, otherwise a PDE.
/// The long words go first, so `ic_boundary` is a boundary condition.
pub fn classify(equation_id: &str) -> EquationKind {
    let lower = equation_id.to_lowercase();
    const RULES: [(&str, EquationKind); 4] = [
        ("boundary", EquationKind::Boundary),
        ("initial", EquationKind::Initial),
        ("bc", EquationKind::Boundary),
        ("ic", EquationKind::Initial),
    ];
    RULES
        .iter()
        .find(|(needle, _)| lower.contains(*needle))
        .map(|(_, kind)| *kind)
        .unwrap_or(EquationKind::Pde)
}
