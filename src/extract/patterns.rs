//! Shared line matchers. These are heuristics over C-like text, not a
//! grammar: they tolerate incomplete code and mislabel pathological lines
//! rather than fail.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{ControlFlowKind, LocalVariable};

/// Function signature: return-type tokens, name, parameter list, open brace.
/// `\s` crosses newlines, so a signature split over several lines still
/// matches.
pub static SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+(?:\s+\w+)*)\s+(\w+)\s*\(([^)]*)\)\s*\{").unwrap());

/// Single-line declaration: `type name;` or `type name[N];`, nothing else.
/// Anchored, so initializers and multi-line declarations never match.
pub static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+(?:\s+\w+)*)\s+(\w+)(?:\[(\d+)\])?;").unwrap());

/// Call-like token `NAME(`; also matches keywords such as `if (`.
pub static CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\w+)\s*\(").unwrap());

/// Left side of an assignment. `==` comparisons also match; callers accept
/// that as part of the heuristic.
pub static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\w+)\s*=").unwrap());

pub static STRUCT_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*struct\s+(\w+)\s*\{").unwrap());

pub static STRUCT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\}\s*;").unwrap());

/// Global-looking declaration with optional storage class. Searched, not
/// anchored: the first plausible fragment on the line wins.
pub static GLOBAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(extern|static)?\s*(\w+(?:\s+\w+)*)\s+(\w+)(?:\[(\d+)\])?;").unwrap());

/// Column-0 `#define NAME VALUE`; the value part is required.
pub static DEFINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#define\s+(\w+)\s+(.+)").unwrap());

/// Column-0 `#include <file>` or `#include "file"`.
pub static INCLUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^#include\s+[<"](.+)[>"]"#).unwrap());

pub static KEYWORD_IF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bif\b").unwrap());
pub static KEYWORD_ELSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\belse\b").unwrap());
pub static KEYWORD_FOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfor\b").unwrap());
pub static KEYWORD_WHILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwhile\b").unwrap());

/// Classify a line into at most one control-flow kind, in priority order
/// if > else > for > while. The keyword may appear anywhere on the line.
pub fn classify_control_flow(line: &str) -> Option<ControlFlowKind> {
    if KEYWORD_IF.is_match(line) {
        Some(ControlFlowKind::If)
    } else if KEYWORD_ELSE.is_match(line) {
        Some(ControlFlowKind::Else)
    } else if KEYWORD_FOR.is_match(line) {
        Some(ControlFlowKind::For)
    } else if KEYWORD_WHILE.is_match(line) {
        Some(ControlFlowKind::While)
    } else {
        None
    }
}

/// Match a single-line declaration and build the record at `line_number`.
pub fn match_declaration(line: &str, line_number: usize) -> Option<LocalVariable> {
    DECLARATION.captures(line).map(|caps| LocalVariable {
        ty: caps[1].to_string(),
        name: caps[2].to_string(),
        array_size: caps.get(3).map(|m| m.as_str().to_string()),
        line_number,
    })
}
