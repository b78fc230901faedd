use crate::core::{
    ConditionalDirective, DefineRecord, DirectiveRecord, IncludeRecord, MacroDefinition,
    PreprocessorSummary,
};
use crate::extract::patterns::{DEFINE, INCLUDE};

const CONDITIONAL_KEYWORDS: [&str; 6] = ["ifdef", "ifndef", "if", "elif", "else", "endif"];

/// Record every `#`-led line: the raw directive stream, a macro map
/// (last definition of a name wins), stripped include names, and the
/// conditional-compilation events with their unevaluated condition text.
pub fn parse_preprocessor(content: &str) -> PreprocessorSummary {
    let mut summary = PreprocessorSummary::default();

    for (i, line) in content.split('\n').enumerate() {
        let line_number = i + 1;
        let trimmed = line.trim();
        if !trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or("");
        let args = parts.next().map(str::trim_start).unwrap_or("").to_string();
        let directive = head[1..].to_string();

        summary.directives.push(DirectiveRecord {
            kind: directive.clone(),
            args: args.clone(),
            line_number,
        });

        match directive.as_str() {
            "define" => {
                let mut macro_parts = args.splitn(2, char::is_whitespace);
                if let Some(name) = macro_parts.next().filter(|n| !n.is_empty()) {
                    let value = macro_parts.next().map(|v| v.trim_start().to_string());
                    summary
                        .macros
                        .insert(name.to_string(), MacroDefinition { value, line_number });
                }
            }
            "include" => {
                summary.includes.push(IncludeRecord {
                    file: args.trim_matches(['"', '<', '>']).to_string(),
                    line_number,
                });
            }
            kind if CONDITIONAL_KEYWORDS.contains(&kind) => {
                summary.conditionals.push(ConditionalDirective {
                    kind: kind.to_string(),
                    condition: args,
                    line_number,
                });
            }
            _ => {}
        }
    }

    summary
}

/// Column-0 `#define NAME VALUE` records for the content block. Stricter
/// than the directive pass: no leading whitespace, value required.
pub fn parse_defines(content: &str) -> Vec<DefineRecord> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(i, line)| {
            DEFINE.captures(line).map(|caps| DefineRecord {
                name: caps[1].to_string(),
                value: caps[2].trim().to_string(),
                line_number: i + 1,
            })
        })
        .collect()
}

/// Column-0 `#include` records with the `<>`/`""` delimiters stripped.
pub fn parse_includes(content: &str) -> Vec<IncludeRecord> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(i, line)| {
            INCLUDE.captures(line).map(|caps| IncludeRecord {
                file: caps[1].to_string(),
                line_number: i + 1,
            })
        })
        .collect()
}
