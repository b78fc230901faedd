use crate::core::{FunctionRecord, TreeNode};

/// Flatten every function record reachable under `tree`, in tree order.
pub fn collect_functions(tree: &TreeNode) -> Vec<&FunctionRecord> {
    match tree {
        TreeNode::Directory { children, .. } => {
            children.iter().flat_map(collect_functions).collect()
        }
        TreeNode::File(record) => record.content.functions.iter().collect(),
        TreeNode::Makefile(_) => Vec::new(),
    }
}

pub fn calculate_average_complexity(functions: &[FunctionRecord]) -> f64 {
    if functions.is_empty() {
        return 0.0;
    }

    let total: u32 = functions.iter().map(|f| f.complexity).sum();
    total as f64 / functions.len() as f64
}

pub fn find_max_complexity(functions: &[FunctionRecord]) -> u32 {
    functions.iter().map(|f| f.complexity).max().unwrap_or(0)
}

pub fn count_high_complexity(functions: &[FunctionRecord], threshold: u32) -> usize {
    functions
        .iter()
        .filter(|f| f.complexity > threshold)
        .count()
}

/// Functions whose body spans more than `threshold` lines, by name.
pub fn find_long_functions(functions: &[FunctionRecord], threshold: usize) -> Vec<(String, usize)> {
    functions
        .iter()
        .filter(|f| f.line_count() > threshold)
        .map(|f| (f.name.clone(), f.line_count()))
        .collect()
}
