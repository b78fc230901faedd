use crate::core::{DependencyMap, SymbolUsage};
use crate::extract::patterns::{ASSIGNMENT, CALL};

/// Build the symbol -> {used_in, modified_in} map for one file's text.
///
/// Per line, assignment targets (`NAME =`) and call targets (`NAME(`) are
/// found by independent searches; a line holding both feeds both lists,
/// possibly for different symbols. Comparison operators satisfy the
/// assignment pattern, so `a == b` counts `a` as modified.
pub fn analyze_dependencies(content: &str) -> DependencyMap {
    let mut dependencies = DependencyMap::new();

    for (i, line) in content.split('\n').enumerate() {
        let line_number = i + 1;

        for caps in ASSIGNMENT.captures_iter(line) {
            dependencies
                .entry(caps[1].to_string())
                .or_insert_with(SymbolUsage::default)
                .modified_in
                .push(line_number);
        }

        for caps in CALL.captures_iter(line) {
            dependencies
                .entry(caps[1].to_string())
                .or_insert_with(SymbolUsage::default)
                .used_in
                .push(line_number);
        }
    }

    dependencies
}
