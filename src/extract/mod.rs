//! Heuristic structure extraction over raw C-like text.
//!
//! Each submodule is an independent pass over the same text; none of them
//! share a cursor or any state, so `extract` is pure with respect to its
//! input and deterministic across calls.

pub mod assemble;
pub mod complexity;
pub mod dependencies;
pub mod functions;
pub mod globals;
pub mod patterns;
pub mod preprocessor;
pub mod structs;

use crate::core::FileStructure;

/// The extractor's single entry point: run every pass over `content` and
/// package the results. Never fails; unmatched text is simply absent from
/// the output.
pub fn extract(content: &str) -> FileStructure {
    FileStructure {
        functions: functions::parse_functions(content),
        structs: structs::parse_structs(content),
        globals: globals::parse_globals(content),
        defines: preprocessor::parse_defines(content),
        includes: preprocessor::parse_includes(content),
        preprocessor: preprocessor::parse_preprocessor(content),
    }
}
