use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::TreeNode;

pub trait OutputWriter {
    fn write_tree(&mut self, tree: &TreeNode) -> anyhow::Result<()>;
}

/// Pretty-printed JSON, two-space indent, matching the historical output.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_tree(&mut self, tree: &TreeNode) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(tree)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Writer over the given file, or stdout when no path is given.
pub fn create_writer(output: Option<PathBuf>) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(JsonWriter::new(file)))
        }
        None => Ok(Box::new(JsonWriter::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_nodes_are_tagged_and_root_only_on_root() {
        let tree = TreeNode::Directory {
            name: "demo".to_string(),
            root_directory: Some("/tmp/demo".to_string()),
            children: vec![TreeNode::Directory {
                name: "src".to_string(),
                root_directory: None,
                children: vec![],
            }],
        };

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_tree(&tree).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(json["type"], "directory");
        assert_eq!(json["root_directory"], "/tmp/demo");
        assert_eq!(json["children"][0]["type"], "directory");
        assert!(json["children"][0].get("root_directory").is_none());
    }
}
