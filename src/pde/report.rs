//! Human-readable rendering of a whole [`Document`].
//!
//! [`DocumentReport`] collects the already-rendered lines of every section, so callers
//! (and tests) can look at single sections; its `Display` lays them out as text:
//! header, variables, parameters, domain, the three groups found under `pdes`, then
//! the top-level condition lists.

use crate::pde::classify::EquationKind;
use crate::pde::document::Document;
use itertools::Itertools;
use std::fmt;
use strum::IntoEnumIterator;

/// A rendered entry of `pdes`.
#[derive(Clone, Debug, PartialEq)]
pub struct EquationLine {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentReport {
    pub title: String,
    pub description: Option<String>,
    pub independent: Vec<String>,
    pub dependent: Vec<String>,
    pub parameters: Vec<String>,
    /// `domain` is a non-empty mapping, even if none of its entries is an interval
    pub domain_present: bool,
    pub domain: Vec<String>,
    pub pdes: Vec<EquationLine>,
    pub boundaries: Vec<EquationLine>,
    pub initials: Vec<EquationLine>,
    pub initial_conditions: Vec<String>,
    pub boundary_conditions: Vec<String>,
}

impl DocumentReport {
    /// `source_name` (usually the file name) is the title when the document has no name.
    pub fn new(document: &Document, source_name: Option<&str>) -> Self {
        let mut pdes = Vec::new();
        let mut boundaries = Vec::new();
        let mut initials = Vec::new();
        for eq in document.equations() {
            let line = EquationLine {
                id: eq.id().to_string(),
                text: eq.render(),
            };
            match eq.kind() {
                EquationKind::Pde => pdes.push(line),
                EquationKind::Boundary => boundaries.push(line),
                EquationKind::Initial => initials.push(line),
            }
        }
        DocumentReport {
            title: document
                .name()
                .or(source_name)
                .unwrap_or("unnamed")
                .to_string(),
            description: document
                .description()
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            independent: document.independent().to_vec(),
            dependent: document.dependent().to_vec(),
            parameters: document.parameter_entries(),
            domain_present: document.domain.as_ref().is_some_and(|domain| !domain.is_empty()),
            domain: document
                .domain_intervals()
                .iter()
                .map(|interval| interval.render())
                .collect(),
            pdes,
            boundaries,
            initials,
            initial_conditions: document
                .initial_conditions()
                .iter()
                .map(|ic| ic.render_initial())
                .collect(),
            boundary_conditions: document
                .boundary_conditions()
                .iter()
                .map(|bc| bc.render_boundary())
                .collect(),
        }
    }

    pub fn group(&self, kind: EquationKind) -> &[EquationLine] {
        match kind {
            EquationKind::Pde => &self.pdes,
            EquationKind::Boundary => &self.boundaries,
            EquationKind::Initial => &self.initials,
        }
    }
}

fn group_heading(kind: EquationKind) -> &'static str {
    match kind {
        EquationKind::Pde => "PDE(s):",
        EquationKind::Boundary => "Boundary condition(s) (from 'pdes'):",
        EquationKind::Initial => "Initial condition(s) (from 'pdes'):",
    }
}

fn write_group(f: &mut fmt::Formatter, kind: EquationKind, lines: &[EquationLine]) -> fmt::Result {
    writeln!(f, "\n{}", group_heading(kind))?;
    for line in lines {
        writeln!(f, "  [{}]  {}", line.id, line.text)?;
    }
    Ok(())
}

impl fmt::Display for DocumentReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n=== {} ===", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "Description: {}", description)?;
        }
        if !self.independent.is_empty() {
            writeln!(f, "Independent variables: {}", self.independent.join(", "))?;
        }
        if !self.dependent.is_empty() {
            writeln!(f, "Dependent variables: {}", self.dependent.join(", "))?;
        }
        if !self.parameters.is_empty() {
            writeln!(f, "Parameters: {}", self.parameters.join(", "))?;
        }
        if self.domain_present {
            writeln!(f, "Domain:")?;
            for interval in &self.domain {
                writeln!(f, "  {}", interval)?;
            }
            writeln!(f)?;
        }

        // the groups taken from `pdes` are always listed, even when empty
        for kind in EquationKind::iter() {
            write_group(f, kind, self.group(kind))?;
        }

        if !self.initial_conditions.is_empty() {
            writeln!(f, "\nInitial condition(s) (from 'initial_conditions'):")?;
            writeln!(f, "{}", self.initial_conditions.iter().map(|l| format!("  {}", l)).join("\n"))?;
        }
        if !self.boundary_conditions.is_empty() {
            writeln!(f, "\nBoundary condition(s) (from 'boundary_conditions'):")?;
            writeln!(f, "{}", self.boundary_conditions.iter().map(|l| format!("  {}", l)).join("\n"))?;
        }
        Ok(())
    }
}

/// Renders a document to the full text layout.
pub fn render_document(document: &Document, source_name: Option<&str>) -> String {
    DocumentReport::new(document, source_name).to_string()
}
