use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OpportunityThresholds;
use crate::core::errors::ScanError;
use crate::core::TreeNode;
use crate::extract::assemble::assemble_file_record;
use crate::scanners::makefile;

/// Filenames with no structural content worth scanning. Matched
/// case-insensitively against the bare filename.
static IGNORED_FILES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^README.*",
        r"^FILES\d*$",
        r"^TODO$",
        r"^ChangeLog$",
        r"\.h\.gch$",
        r"^CVS/Entries$",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect()
});

pub fn should_ignore_file(name: &str) -> bool {
    IGNORED_FILES.iter().any(|p| p.is_match(name))
}

/// Depth-first recursive walk over a codebase, producing the serialized
/// tree. One node per kept file, one per non-empty directory; the root
/// node carries the project name and the absolute root path.
pub struct CodebaseWalker {
    root: PathBuf,
    project_name: String,
    thresholds: OpportunityThresholds,
}

impl CodebaseWalker {
    pub fn new(root: PathBuf) -> Self {
        let project_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "codebase".to_string());
        Self {
            root,
            project_name,
            thresholds: OpportunityThresholds::default(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_thresholds(mut self, thresholds: OpportunityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn walk(&self) -> Result<TreeNode, ScanError> {
        let children = self.walk_directory(&self.root)?;
        Ok(TreeNode::Directory {
            name: self.project_name.clone(),
            root_directory: Some(self.root.to_string_lossy().into_owned()),
            children,
        })
    }

    fn walk_directory(&self, dir: &Path) -> Result<Vec<TreeNode>, ScanError> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| ScanError::unreadable(dir, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ScanError::unreadable(dir, e))?
            .into_iter()
            .map(|entry| entry.path())
            .collect();
        // Directory order is filesystem-dependent; sort for stable output.
        entries.sort();

        let mut nodes = Vec::new();
        for path in entries {
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };

            if path.is_dir() {
                if name == "CVS" {
                    continue;
                }
                let children = self.walk_directory(&path)?;
                // Empty directories are pruned from the output entirely.
                if !children.is_empty() {
                    nodes.push(TreeNode::Directory {
                        name,
                        root_directory: None,
                        children,
                    });
                }
            } else if path.is_file() {
                if should_ignore_file(&name) {
                    log::debug!("Ignoring file: {}", path.display());
                } else if makefile::is_makefile(&name) {
                    nodes.push(TreeNode::Makefile(makefile::scan_makefile(&path)?));
                } else {
                    let record = assemble_file_record(&path, &self.root, &self.thresholds)?;
                    nodes.push(TreeNode::File(record));
                }
            }
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_list_matches_the_usual_suspects() {
        assert!(should_ignore_file("README"));
        assert!(should_ignore_file("readme.txt"));
        assert!(should_ignore_file("FILES"));
        assert!(should_ignore_file("FILES2"));
        assert!(should_ignore_file("TODO"));
        assert!(should_ignore_file("changelog"));
        assert!(should_ignore_file("doomdef.h.gch"));
    }

    #[test]
    fn source_files_are_not_ignored() {
        assert!(!should_ignore_file("main.c"));
        assert!(!should_ignore_file("doomdef.h"));
        assert!(!should_ignore_file("TODO.c"));
        assert!(!should_ignore_file("FILES.c"));
    }
}
