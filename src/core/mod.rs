pub mod errors;
pub mod metrics;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parameter of a function signature. The type may be multi-token
/// ("unsigned long"); the name is the last whitespace-delimited token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

/// A single-line local declaration inside a function body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LocalVariable {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub array_size: Option<String>,
    pub line_number: usize,
}

/// A call-like token `NAME(` found on a body line. Keywords such as `if`
/// match the same shape and are recorded as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub line_number: usize,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlFlowKind {
    If,
    Else,
    For,
    While,
}

/// At most one control-flow event is recorded per physical line,
/// checked in priority order if > else > for > while.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlFlowEvent {
    #[serde(rename = "type")]
    pub kind: ControlFlowKind,
    pub line_number: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionRecord {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub start_line: usize,
    pub end_line: usize,
    pub local_variables: Vec<LocalVariable>,
    pub function_calls: Vec<FunctionCall>,
    pub control_flow: Vec<ControlFlowEvent>,
    pub complexity: u32,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub dependencies: Vec<String>,
}

impl FunctionRecord {
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line
    }
}

/// Struct members share the single-line declaration shape of locals.
pub type StructMember = LocalVariable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StructRecord {
    pub name: String,
    pub members: Vec<StructMember>,
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GlobalRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub storage_class: Option<String>,
    pub array_size: Option<String>,
    pub line_number: usize,
}

/// A column-0 `#define NAME VALUE` with a non-empty value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DefineRecord {
    pub name: String,
    pub value: String,
    pub line_number: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IncludeRecord {
    pub file: String,
    pub line_number: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DirectiveRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub args: String,
    pub line_number: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroDefinition {
    pub value: Option<String>,
    pub line_number: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConditionalDirective {
    #[serde(rename = "type")]
    pub kind: String,
    pub condition: String,
    pub line_number: usize,
}

/// Everything the preprocessor pass recovers from `#`-led lines.
/// Macro names map through a BTreeMap so serialization order is stable.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PreprocessorSummary {
    pub directives: Vec<DirectiveRecord>,
    pub macros: BTreeMap<String, MacroDefinition>,
    pub includes: Vec<IncludeRecord>,
    pub conditionals: Vec<ConditionalDirective>,
}

/// Output of the single extraction entry point over one file's text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FileStructure {
    pub functions: Vec<FunctionRecord>,
    pub structs: Vec<StructRecord>,
    pub globals: Vec<GlobalRecord>,
    pub defines: Vec<DefineRecord>,
    pub includes: Vec<IncludeRecord>,
    pub preprocessor: PreprocessorSummary,
}

/// Where a symbol is written (`NAME =`) and where it is invoked (`NAME(`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SymbolUsage {
    pub used_in: Vec<usize>,
    pub modified_in: Vec<usize>,
}

pub type DependencyMap = BTreeMap<String, SymbolUsage>;

/// The four extractor outputs packaged under a file node.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileContent {
    pub functions: Vec<FunctionRecord>,
    pub structs: Vec<StructRecord>,
    pub globals: Vec<GlobalRecord>,
    pub defines: Vec<DefineRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileRecord {
    pub name: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub path: String,
    pub dependencies: Vec<String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub content: FileContent,
    pub source_code_path: String,
    pub refactoring_potential: String,
    pub optimization_opportunities: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MakefileRecord {
    pub name: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub targets: Vec<String>,
    pub variables: Vec<String>,
    pub includes: Vec<String>,
}

/// One node of the serialized codebase tree. Directories omit the
/// `root_directory` field except at the root; empty directories are
/// pruned before they ever become nodes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Directory {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        root_directory: Option<String>,
        children: Vec<TreeNode>,
    },
    File(FileRecord),
    Makefile(MakefileRecord),
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } => name,
            TreeNode::File(record) => &record.name,
            TreeNode::Makefile(record) => &record.name,
        }
    }
}
