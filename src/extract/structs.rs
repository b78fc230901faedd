use crate::core::StructRecord;
use crate::extract::patterns::{self, STRUCT_CLOSE, STRUCT_OPEN};

/// Scan for `struct NAME {` ... `};` blocks, one line at a time.
///
/// Members are single-line declarations between the braces. Nested structs
/// are not supported: a second open while inside a struct restarts the
/// current record, losing the outer one. Known limitation, kept.
pub fn parse_structs(content: &str) -> Vec<StructRecord> {
    let mut structs = Vec::new();
    let mut current: Option<StructRecord> = None;

    for (i, line) in content.split('\n').enumerate() {
        let line_number = i + 1;
        if let Some(caps) = STRUCT_OPEN.captures(line) {
            current = Some(StructRecord {
                name: caps[1].to_string(),
                members: Vec::new(),
                start_line: line_number,
                end_line: line_number,
            });
        } else if let Some(mut record) = current.take() {
            if STRUCT_CLOSE.is_match(line) {
                record.end_line = line_number;
                structs.push(record);
            } else {
                if let Some(member) = patterns::match_declaration(line, line_number) {
                    record.members.push(member);
                }
                current = Some(record);
            }
        }
    }

    structs
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn recovers_a_two_member_struct() {
        let source = indoc! {"
            struct Point {
              int x;
              int y;
            };
        "};
        let structs = parse_structs(source);
        assert_eq!(structs.len(), 1);

        let s = &structs[0];
        assert_eq!(s.name, "Point");
        assert_eq!(s.start_line, 1);
        assert_eq!(s.end_line, 4);
        assert_eq!(s.members.len(), 2);
        assert_eq!(s.members[0].name, "x");
        assert_eq!(s.members[0].ty, "int");
        assert_eq!(s.members[0].array_size, None);
        assert_eq!(s.members[1].name, "y");
    }

    #[test]
    fn array_members_carry_their_size() {
        let source = "struct wad_lump {\n  char name[8];\n  int size;\n};\n";
        let structs = parse_structs(source);
        let s = &structs[0];
        assert_eq!(s.members[0].array_size, Some("8".to_string()));
        assert_eq!(s.members[0].line_number, 2);
    }

    #[test]
    fn unterminated_struct_yields_nothing() {
        let source = "struct half {\n  int x;\n";
        assert!(parse_structs(source).is_empty());
    }

    #[test]
    fn lines_outside_structs_are_ignored() {
        let source = "int global;\nstruct A {\n  int a;\n};\nint other;\nstruct B {\n  int b;\n};\n";
        let structs = parse_structs(source);
        assert_eq!(structs.len(), 2);
        assert_eq!(structs[0].name, "A");
        assert_eq!(structs[1].name, "B");
        assert_eq!(structs[1].start_line, 6);
        assert_eq!(structs[1].end_line, 8);
    }
}
