/////////////////////////////TESTS////////////////////////////////////////////////////
/*
description building from catalog entries
prompt texts
conversion and batch isolation of failures
directory sink
*/

#[cfg(test)]
mod tests {
    use crate::error::{PdeError, Result};
    use crate::generation::batch::{build_request, convert_pde, run_batch};
    use crate::generation::generator::{GenerationRequest, PdeGenerator, RecordedGenerator};
    use crate::generation::prompt::{
        CatalogEntry, CatalogVariables, SYSTEM_PROMPT, build_description, user_prompt,
    };
    use crate::generation::sink::{DirectorySink, DocumentSink, MemorySink};
    use crate::pde::document::Document;
    use crate::pde::navier_stokes::navier_stokes_example;
    use serde_json::json;
    use std::fs;

    fn entry(value: serde_json::Value) -> CatalogEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_description_full_entry() {
        let entry = entry(json!({
            "name": "reaction_diffusion",
            "variables": {"independent": ["x", "t"], "dependent": ["u"], "parameters": ["D", "r"]},
            "equation": "u_t = D u_xx + r u (1 - u)",
            "domain": {"x": [0, 1], "t": [0, 10.5], "bad": [1]},
            "initial_conditions": ["u(x,0) = exp(-x^2)"],
            "boundary_conditions": ["u(0,t) = 0", "u(1,t) = 0"],
            "parameters": {"D": 0.01, "r": null}
        }));
        let expected = "PDE name: reaction_diffusion.\n\
            Domain: x ∈ [0, 1]; t ∈ [0, 10.5].\n\
            The PDE system, written in a compact symbolic notation using subscripts for derivatives, is:\n\
            u_t = D u_xx + r u (1 - u)\n\
            Initial conditions (to be encoded under 'initial_conditions' in JSON):\n\
            - u(x,0) = exp(-x^2)\n\
            Boundary conditions (to be encoded under 'boundary_conditions' in JSON):\n\
            - u(0,t) = 0\n\
            - u(1,t) = 0\n\
            Parameter definitions / values (encode these under the JSON 'parameters' field):\n\
            - D = 0.01\n\
            - r = null\n\
            Convert this PDE (or PDE system) into the JSON operator-tree format following the Navier–Stokes example with \
            keys 'metadata', 'variables', 'parameters', optional 'domain', 'pdes', 'initial_conditions', and \
            'boundary_conditions'. Use expression trees for 'lhs', 'rhs', and any 'value_expr' fields.";
        assert_eq!(build_description(&entry), expected);
    }

    #[test]
    fn test_description_defaults() {
        let entry = entry(json!({
            "variables": {"independent": ["x", "time"]},
            "equation": "u_t = u_xx",
            "initial_condition": "u(x,0) = sin(pi x)",
            "parameters_values": "D=0.01,r=1.0"
        }));
        let description = build_description(&entry);
        assert!(description.starts_with("PDE name: unnamed_pde.\n"));
        assert!(description.contains(
            "Assume the following default domain for the independent variables (encode this in the JSON 'domain' field): x ∈ [0, 1]; time ∈ [0, 1]."
        ));
        assert!(description.contains(
            "Initial conditions (to be encoded under 'initial_conditions' in JSON):\n- u(x,0) = sin(pi x)"
        ));
        assert!(description.contains(
            "Example or default parameter values (encode these under the appropriate 'parameters' or auxiliary fields in JSON):\n- D=0.01,r=1.0"
        ));
        assert!(!description.contains("Boundary conditions"));
    }

    #[test]
    fn test_description_string_domain() {
        let entry = entry(json!({"name": "poisson", "domain": "[0,1]^2", "equation": "u_xx + u_yy = f"}));
        let description = build_description(&entry);
        assert!(description.contains(
            "Domain description from data (convert this into a structured 'domain' JSON object): [0,1]^2"
        ));
        assert!(!description.contains("Assume the following default domain"));
    }

    #[test]
    fn test_prompts() {
        assert!(SYSTEM_PROMPT.starts_with("You are an expert in partial differential equations"));
        assert!(SYSTEM_PROMPT.ends_with("Respond with VALID JSON ONLY, no Markdown, no explanations."));
        let prompt = user_prompt("PDE name: heat.");
        assert!(prompt.starts_with("Convert the given PDE into JSON format."));
        assert!(prompt.contains("IMPORTANT INSTRUCTIONS:\n - Follow the schema closely"));
        assert!(prompt.ends_with("Now convert this PDE description into JSON:\nPDE name: heat.\n"));
        // the embedded example is the Navier–Stokes document, two-space indented
        let start = prompt.find("Example JSON schema:\n").unwrap() + "Example JSON schema:\n".len();
        let end = prompt.find("\n\nNow convert").unwrap();
        let example: serde_json::Value = serde_json::from_str(&prompt[start..end]).unwrap();
        assert_eq!(example, navier_stokes_example());
        assert!(prompt[start..end].starts_with("{\n  \"metadata\": {\n    \"name\""));

        let request = build_request("heat", "PDE name: heat.", "gpt-5-nano");
        assert_eq!(request.system_prompt, SYSTEM_PROMPT);
        assert_eq!(request.user_prompt, prompt);
        assert_eq!(request.model, "gpt-5-nano");
    }

    #[test]
    fn test_convert_stores_parsed_reply() {
        let reply = format!("```json\n{}\n```", navier_stokes_example());
        let mut generator = RecordedGenerator::new().with_response("navier_stokes", &reply);
        let mut sink = MemorySink::default();
        let target = convert_pde("navier_stokes", "desc", "gpt-5-nano", &mut generator, &mut sink).unwrap();
        assert_eq!(target, "memory:navier_stokes");
        assert_eq!(sink.documents.len(), 1);
        let document = Document::from_value("navier_stokes", sink.documents[0].1.clone()).unwrap();
        assert_eq!(document.equations().len(), 3);
    }

    #[test]
    fn test_generator_sees_prompts() {
        let mut seen: Vec<GenerationRequest> = Vec::new();
        let mut generator = |request: &GenerationRequest| -> Result<String> {
            seen.push(request.clone());
            Ok("{\"metadata\": {\"name\": \"wave\"}}".to_string())
        };
        let mut sink = MemorySink::default();
        convert_pde("wave", "PDE name: wave.", "m", &mut generator, &mut sink).unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "wave");
        assert!(seen[0].user_prompt.ends_with("PDE name: wave.\n"));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let entries = vec![
            entry(json!({"name": "heat"})),
            entry(json!({"name": "garbled"})),
            entry(json!({"name": "silent"})),
            entry(json!({"name": "wave"})),
        ];
        let mut generator = RecordedGenerator::new()
            .with_response("heat", "{\"metadata\": {\"name\": \"heat\"}}")
            .with_response("garbled", "I cannot do that.")
            .with_response("wave", "```\n{\"metadata\": {\"name\": \"wave\"}}\n```");
        let mut sink = MemorySink::default();
        let report = run_batch(&entries, "gpt-5-nano", &mut generator, &mut sink);

        let saved: Vec<&str> = report.saved.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(saved, vec!["heat", "wave"]);
        assert_eq!(report.failed.len(), 2);
        assert!(matches!(report.failed[0], (ref name, PdeError::UpstreamFormat { .. }) if name == "garbled"));
        assert!(matches!(report.failed[1], (ref name, PdeError::Generator { .. }) if name == "silent"));
        assert!(!report.all_failed());
        assert_eq!(sink.documents.len(), 2);
    }

    #[test]
    fn test_recorded_generator_reads_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("heat.txt"), "{\"pdes\": []}").unwrap();
        fs::write(dir.path().join("wave.json"), "{\"parameters\": {}}").unwrap();
        let mut generator = RecordedGenerator::from_dir(dir.path());
        let heat = generator.complete(&build_request("heat", "", "m")).unwrap();
        assert_eq!(heat, "{\"pdes\": []}");
        let wave = generator.complete(&build_request("wave", "", "m")).unwrap();
        assert_eq!(wave, "{\"parameters\": {}}");
        assert!(generator.complete(&build_request("burgers", "", "m")).is_err());
    }

    #[test]
    fn test_directory_sink_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("random_pde_jsons");
        let mut sink = DirectorySink::new(&output);
        let document = json!({"metadata": {"name": "Navier–Stokes"}, "parameters": {"nu": null}});
        let target = sink.store("ns", &document).unwrap();
        let path = output.join("ns.json");
        assert_eq!(target, path.display().to_string());
        let written = fs::read_to_string(&path).unwrap();
        // non-ASCII is written verbatim
        assert!(written.contains("Navier–Stokes"));
        assert!(written.starts_with("{\n  \"metadata\""));
        let back: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn test_catalog_entry_defaults() {
        let entry = CatalogEntry::default();
        assert_eq!(entry.name(), "unnamed_pde");
        assert_eq!(entry.variables, CatalogVariables::default());
    }
}
