// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod io;
pub mod scanners;

// Re-export commonly used types
pub use crate::core::{
    ControlFlowEvent, ControlFlowKind, DefineRecord, DependencyMap, FileContent, FileRecord,
    FileStructure, FunctionCall, FunctionRecord, GlobalRecord, IncludeRecord, LocalVariable,
    MakefileRecord, Parameter, PreprocessorSummary, StructRecord, SymbolUsage, TreeNode,
};

pub use crate::core::errors::ScanError;

pub use crate::core::metrics::{
    calculate_average_complexity, collect_functions, count_high_complexity, find_long_functions,
    find_max_complexity,
};

pub use crate::config::{OpportunityThresholds, StructmapConfig};

pub use crate::extract::assemble::{assemble_file_record, detect_optimization_opportunities};
pub use crate::extract::dependencies::analyze_dependencies;
pub use crate::extract::extract;

pub use crate::io::output::{create_writer, JsonWriter, OutputWriter};
pub use crate::io::walker::{should_ignore_file, CodebaseWalker};

pub use crate::scanners::makefile::{is_makefile, scan_makefile};
