use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use crate::config::OpportunityThresholds;
use crate::core::errors::ScanError;
use crate::core::{FileContent, FileRecord, FileStructure};
use crate::extract;

/// Placeholder carried verbatim in every file record; filled in by
/// downstream LLM tooling, never by this scanner.
const REFACTORING_PLACEHOLDER: &str = "To be analyzed by LLM";

/// Build the full record for one source file.
///
/// `root` is passed explicitly and only used for relative-path
/// computation; there is no ambient root state. Reading the file is the
/// one hard failure; undecodable bytes inside it are lossily replaced.
pub fn assemble_file_record(
    path: &Path,
    root: &Path,
    thresholds: &OpportunityThresholds,
) -> Result<FileRecord, ScanError> {
    let bytes = fs::read(path).map_err(|e| ScanError::unreadable(path, e))?;
    let metadata = fs::metadata(path).map_err(|e| ScanError::unreadable(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let structure = extract::extract(&content);
    let relative = relative_path(path, root);

    let inputs = dedup(
        structure
            .functions
            .iter()
            .flat_map(|f| f.parameters.iter().map(|p| p.name.clone())),
    );
    let outputs = dedup(
        structure
            .functions
            .iter()
            .filter(|f| f.return_type != "void")
            .map(|f| f.return_type.clone()),
    );
    let dependencies = dedup(structure.includes.iter().map(|i| i.file.clone()));
    let optimization_opportunities = detect_optimization_opportunities(&structure, thresholds);

    let last_modified: DateTime<Utc> = metadata
        .modified()
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now());

    Ok(FileRecord {
        name: file_name(path),
        size: metadata.len(),
        last_modified,
        path: relative.clone(),
        dependencies,
        inputs,
        outputs,
        content: FileContent {
            functions: structure.functions,
            structs: structure.structs,
            globals: structure.globals,
            defines: structure.defines,
        },
        source_code_path: relative,
        refactoring_potential: REFACTORING_PLACEHOLDER.to_string(),
        optimization_opportunities,
    })
}

/// The three per-file flags, in a fixed order so output is stable.
pub fn detect_optimization_opportunities(
    structure: &FileStructure,
    thresholds: &OpportunityThresholds,
) -> Vec<String> {
    let mut opportunities = Vec::new();
    if structure.functions.len() > thresholds.max_functions {
        opportunities.push("High number of functions".to_string());
    }
    if crate::core::metrics::count_high_complexity(&structure.functions, thresholds.high_complexity)
        > 0
    {
        opportunities.push("Functions with high cyclomatic complexity".to_string());
    }
    if structure.globals.len() > thresholds.max_globals {
        opportunities.push("High number of global variables".to_string());
    }
    opportunities
}

fn relative_path(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// First occurrence wins; later duplicates are dropped, keeping output
/// order independent of hash state.
fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionRecord;

    fn function(name: &str, return_type: &str, complexity: u32) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            return_type: return_type.to_string(),
            parameters: vec![],
            start_line: 1,
            end_line: 2,
            local_variables: vec![],
            function_calls: vec![],
            control_flow: vec![],
            complexity,
            inputs: vec![],
            outputs: vec![],
            dependencies: vec![],
        }
    }

    #[test]
    fn no_flags_below_thresholds() {
        let structure = FileStructure {
            functions: vec![function("f", "int", 2)],
            ..Default::default()
        };
        let flags =
            detect_optimization_opportunities(&structure, &OpportunityThresholds::default());
        assert!(flags.is_empty());
    }

    #[test]
    fn high_complexity_raises_its_flag() {
        let structure = FileStructure {
            functions: vec![function("f", "int", 16)],
            ..Default::default()
        };
        let flags =
            detect_optimization_opportunities(&structure, &OpportunityThresholds::default());
        assert_eq!(flags, vec!["Functions with high cyclomatic complexity"]);
    }

    #[test]
    fn flags_come_out_in_fixed_order() {
        let functions: Vec<FunctionRecord> =
            (0..25).map(|i| function(&format!("f{i}"), "int", 20)).collect();
        let structure = FileStructure {
            functions,
            ..Default::default()
        };
        let flags =
            detect_optimization_opportunities(&structure, &OpportunityThresholds::default());
        assert_eq!(
            flags,
            vec![
                "High number of functions",
                "Functions with high cyclomatic complexity"
            ]
        );
    }
}
