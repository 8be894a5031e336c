//! Conversion of catalog entries into stored documents.

use crate::error::{PdeError, Result};
use crate::generation::generator::{GenerationRequest, PdeGenerator};
use crate::generation::prompt::{CatalogEntry, SYSTEM_PROMPT, build_description, user_prompt};
use crate::generation::response::parse_response;
use crate::generation::sink::DocumentSink;
use log::{debug, info, warn};

/// Outcome of a batch: where each converted entry was stored, and why the others failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<(String, String)>,
    pub failed: Vec<(String, PdeError)>,
}

impl BatchReport {
    pub fn all_failed(&self) -> bool {
        self.saved.is_empty() && !self.failed.is_empty()
    }
}

pub fn build_request(name: &str, description: &str, model: &str) -> GenerationRequest {
    GenerationRequest {
        name: name.to_string(),
        model: model.to_string(),
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt: user_prompt(description),
    }
}

/// Asks the generator for one document and stores the parsed reply.
/// Returns the sink's identifier for the stored document.
pub fn convert_pde(
    name: &str,
    description: &str,
    model: &str,
    generator: &mut dyn PdeGenerator,
    sink: &mut dyn DocumentSink,
) -> Result<String> {
    let request = build_request(name, description, model);
    debug!(
        "MODEL INPUT for PDE '{}' ({}):\nSystem message:\n{}\nUser message:\n{}",
        name, model, request.system_prompt, request.user_prompt
    );
    let reply = generator.complete(&request)?;
    let document = parse_response(name, &reply)?;
    sink.store(name, &document)
}

/// Converts every entry. A failing entry is logged and recorded, the rest carry on.
pub fn run_batch(
    entries: &[CatalogEntry],
    model: &str,
    generator: &mut dyn PdeGenerator,
    sink: &mut dyn DocumentSink,
) -> BatchReport {
    let mut report = BatchReport::default();
    for entry in entries {
        let name = entry.name();
        info!("Generating JSON for {:?}...", name);
        let description = build_description(entry);
        match convert_pde(name, &description, model, generator, sink) {
            Ok(target) => {
                info!("  Saved to {}", target);
                report.saved.push((name.to_string(), target));
            }
            Err(error) => {
                warn!("  Failed for {:?}: {}", name, error);
                report.failed.push((name.to_string(), error));
            }
        }
    }
    report
}
