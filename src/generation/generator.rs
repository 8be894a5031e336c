//! The generator collaborator: something that turns a pair of prompts into text, in
//! practice a language model. Live model calls are not part of this crate; the
//! [`RecordedGenerator`] replays answers captured earlier, which keeps runs reproducible.

use crate::error::{PdeError, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Everything the generator is asked in one call.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// catalog entry name, also the name the result is stored under
    pub name: String,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

pub trait PdeGenerator {
    /// Returns the raw reply text for the request.
    fn complete(&mut self, request: &GenerationRequest) -> Result<String>;
}

impl<F> PdeGenerator for F
where
    F: FnMut(&GenerationRequest) -> Result<String>,
{
    fn complete(&mut self, request: &GenerationRequest) -> Result<String> {
        self(request)
    }
}

/// Replays recorded replies, looked up by entry name: first in memory, then as
/// `<directory>/<name>.txt` or `<directory>/<name>.json`.
#[derive(Clone, Debug, Default)]
pub struct RecordedGenerator {
    responses: HashMap<String, String>,
    directory: Option<PathBuf>,
}

impl RecordedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dir(directory: impl Into<PathBuf>) -> Self {
        RecordedGenerator {
            responses: HashMap::new(),
            directory: Some(directory.into()),
        }
    }

    pub fn with_response(mut self, name: &str, reply: &str) -> Self {
        self.responses.insert(name.to_string(), reply.to_string());
        self
    }

    fn recorded_file(&self, name: &str) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        ["txt", "json"]
            .iter()
            .map(|extension| directory.join(format!("{}.{}", name, extension)))
            .find(|path| path.is_file())
    }
}

impl PdeGenerator for RecordedGenerator {
    fn complete(&mut self, request: &GenerationRequest) -> Result<String> {
        if let Some(reply) = self.responses.get(&request.name) {
            return Ok(reply.clone());
        }
        match self.recorded_file(&request.name) {
            Some(path) => {
                debug!("replaying {} for '{}'", path.display(), request.name);
                Ok(fs::read_to_string(path)?)
            }
            None => Err(PdeError::Generator {
                name: request.name.clone(),
                message: "no recorded response".to_string(),
            }),
        }
    }
}
