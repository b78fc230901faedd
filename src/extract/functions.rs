use crate::core::{ControlFlowEvent, FunctionCall, FunctionRecord, LocalVariable, Parameter};
use crate::extract::complexity::calculate_complexity;
use crate::extract::patterns::{self, CALL, SIGNATURE};

/// Locate every candidate function in `content` and recover its body by
/// brace-depth counting.
///
/// The signature match is a heuristic, not a parse: braces inside string
/// literals or comments are counted like any other brace, and a body whose
/// closing brace never appears is clamped to the end of the text. Records
/// come out in source order.
pub fn parse_functions(content: &str) -> Vec<FunctionRecord> {
    let total_lines = content.lines().count();
    let mut functions = Vec::new();

    for caps in SIGNATURE.captures_iter(content) {
        let whole = caps.get(0).expect("capture 0 always present");
        let return_type = caps[1].to_string();
        let name = caps[2].to_string();
        let parameters = parse_parameters(&caps[3]);

        let start_line = line_number_at(content, whole.start());
        // Line holding the opening brace; the signature may span lines.
        let open_line = line_number_at(content, whole.end());

        let body = scan_body(&content[whole.end()..], open_line, total_lines);

        let inputs: Vec<String> = parameters.iter().map(|p| p.name.clone()).collect();
        let outputs = if return_type == "void" {
            vec![]
        } else {
            vec![return_type.clone()]
        };
        let dependencies = dedup_preserving_order(body.calls.iter().map(|c| c.name.clone()));

        log::debug!("Found function: {} at line {}", name, start_line);

        functions.push(FunctionRecord {
            name,
            return_type,
            parameters,
            start_line,
            end_line: body.end_line,
            local_variables: body.locals,
            function_calls: body.calls,
            control_flow: body.control_flow,
            complexity: calculate_complexity(&body.text),
            inputs,
            outputs,
            dependencies,
        });
    }

    functions
}

struct BodyScan {
    end_line: usize,
    locals: Vec<LocalVariable>,
    calls: Vec<FunctionCall>,
    control_flow: Vec<ControlFlowEvent>,
    text: String,
}

/// Walk the text after the opening brace line by line, depth starting at 1.
/// Chunk 0 is the remainder of the opening-brace line itself.
fn scan_body(after_brace: &str, open_line: usize, total_lines: usize) -> BodyScan {
    let mut depth: i64 = 1;
    let mut end_line = open_line;
    let mut locals = Vec::new();
    let mut calls = Vec::new();
    let mut control_flow = Vec::new();
    let mut scanned = Vec::new();

    for (i, line) in after_brace.split('\n').enumerate() {
        let line_number = (open_line + i).min(total_lines);
        end_line = line_number;
        depth += line.matches('{').count() as i64 - line.matches('}').count() as i64;
        scanned.push(line);

        if let Some(var) = patterns::match_declaration(line, line_number) {
            locals.push(var);
        }

        for call in CALL.captures_iter(line) {
            calls.push(FunctionCall {
                name: call[1].to_string(),
                line_number,
            });
        }

        if let Some(kind) = patterns::classify_control_flow(line) {
            control_flow.push(ControlFlowEvent { kind, line_number });
        }

        if depth == 0 {
            break;
        }
    }

    BodyScan {
        end_line,
        locals,
        calls,
        control_flow,
        text: scanned.join("\n"),
    }
}

/// Split a raw parameter list on commas; each parameter's name is the last
/// whitespace token and its type is everything before it. A lone token has
/// no type to give.
pub fn parse_parameters(params: &str) -> Vec<Parameter> {
    params
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let tokens: Vec<&str> = p.split_whitespace().collect();
            let (ty, name) = tokens.split_at(tokens.len() - 1);
            Parameter {
                ty: ty.join(" "),
                name: name[0].to_string(),
            }
        })
        .collect()
}

fn line_number_at(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

fn dedup_preserving_order(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names.filter(|n| seen.insert(n.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlFlowKind;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn recovers_a_simple_function() {
        let source = indoc! {"
            int add(int a, int b) {
              if (a > 0) {
                return a + b;
              }
              return 0;
            }
        "};
        let functions = parse_functions(source);
        assert_eq!(functions.len(), 1);

        let f = &functions[0];
        assert_eq!(f.name, "add");
        assert_eq!(f.return_type, "int");
        assert_eq!(f.start_line, 1);
        assert_eq!(f.end_line, 6);
        assert_eq!(f.complexity, 2);
        assert_eq!(f.inputs, vec!["a", "b"]);
        assert_eq!(f.outputs, vec!["int"]);
        assert_eq!(f.control_flow.len(), 1);
        assert_eq!(f.control_flow[0].kind, ControlFlowKind::If);
        assert_eq!(f.control_flow[0].line_number, 2);
    }

    #[test]
    fn signature_may_span_multiple_lines() {
        let source = "static unsigned long\ncompute_checksum(char *buf,\n    int len)\n{\n  return 0;\n}\n";
        let functions = parse_functions(source);
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "compute_checksum");
        assert_eq!(functions[0].return_type, "static unsigned long");
        assert_eq!(functions[0].start_line, 1);
        assert_eq!(functions[0].end_line, 6);
        assert_eq!(functions[0].parameters.len(), 2);
        assert_eq!(functions[0].parameters[1].ty, "int");
        assert_eq!(functions[0].parameters[1].name, "len");
    }

    #[test]
    fn unclosed_body_clamps_to_end_of_text() {
        let source = "void broken(void) {\n  int x;\n  x = 1;\n";
        let functions = parse_functions(source);
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].end_line, 3);
        assert_eq!(functions[0].local_variables.len(), 1);
        assert_eq!(functions[0].local_variables[0].name, "x");
        assert_eq!(functions[0].local_variables[0].line_number, 2);
    }

    #[test]
    fn keywords_are_recorded_as_calls() {
        let source = "int f(int a) {\n  if (check(a)) {\n    run();\n  }\n}\n";
        let functions = parse_functions(source);
        let f = &functions[0];
        let names: Vec<&str> = f.function_calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["if", "check", "run"]);
        // dependencies de-duplicate in first-occurrence order
        assert_eq!(f.dependencies, vec!["if", "check", "run"]);
    }

    #[test]
    fn void_functions_have_no_outputs() {
        let source = "void log_tick(void) {\n  ticks++;\n}\n";
        let functions = parse_functions(source);
        let f = &functions[0];
        assert!(f.outputs.is_empty());
    }

    #[test]
    fn parameter_without_type_yields_empty_type() {
        let params = parse_parameters("x");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].ty, "");
        assert_eq!(params[0].name, "x");
    }

    #[test]
    fn two_functions_come_out_in_source_order() {
        let source = "int first(void) {\n  return 1;\n}\n\nint second(void) {\n  return 2;\n}\n";
        let functions = parse_functions(source);
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name, "first");
        assert_eq!(functions[0].start_line, 1);
        assert_eq!(functions[1].name, "second");
        assert_eq!(functions[1].start_line, 5);
        assert_eq!(functions[1].end_line, 7);
    }
}
