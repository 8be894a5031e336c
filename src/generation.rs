//! Conversion of natural-language PDE descriptions into documents through an external
//! generator. The generator itself and the place results are written to are both injected,
//! so this module only builds prompts, parses replies and keeps batch bookkeeping.
/// system/user prompts and the description builder for catalog entries
pub mod prompt;
/// code-fence stripping and JSON parsing of generator replies
pub mod response;
/// the generator trait and a generator replaying recorded replies
pub mod generator;
/// document sinks: a directory of JSON files, or memory
pub mod sink;
///____________________________________________________________________________________________________________________________
/// convert one entry or a whole catalog
/// Example#
/// ```
/// use pde_tree::generation::batch::run_batch;
/// use pde_tree::generation::generator::RecordedGenerator;
/// use pde_tree::generation::prompt::CatalogEntry;
/// use pde_tree::generation::sink::MemorySink;
/// let entries = vec![CatalogEntry { name: Some("heat".to_string()), ..Default::default() }];
/// let mut generator = RecordedGenerator::new().with_response("heat", "{\"metadata\": {\"name\": \"heat\"}}");
/// let mut sink = MemorySink::default();
/// let report = run_batch(&entries, "gpt-5-nano", &mut generator, &mut sink);
/// assert_eq!(report.saved.len(), 1);
/// ```
pub mod batch;
mod generation_tests;
