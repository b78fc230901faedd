use crate::core::GlobalRecord;
use crate::extract::patterns::GLOBAL;

/// Find declaration-shaped lines anywhere in the file.
///
/// The search is textual: it does not know about function boundaries, so
/// locals that look like `type name;` land here too. `#`-led lines are
/// excluded so macro bodies are not misread as globals.
pub fn parse_globals(content: &str) -> Vec<GlobalRecord> {
    let mut globals = Vec::new();

    for (i, line) in content.split('\n').enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        if let Some(caps) = GLOBAL.captures(line) {
            globals.push(GlobalRecord {
                name: caps[3].to_string(),
                ty: caps[2].to_string(),
                storage_class: caps.get(1).map(|m| m.as_str().to_string()),
                array_size: caps.get(4).map(|m| m.as_str().to_string()),
                line_number: i + 1,
            });
        }
    }

    globals
}
