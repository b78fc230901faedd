/// Cyclomatic-complexity-like score for a function body.
///
/// Base score 1, plus 1 for every line whose left-trimmed text starts with
/// a branching prefix. This is a plain prefix check, not a word-bounded
/// one (`ifdef` counts), and it deliberately differs from the control-flow
/// event pass, which searches keywords anywhere on the line. The two
/// metrics can disagree; keep them independent.
pub fn calculate_complexity(body: &str) -> u32 {
    let mut complexity = 1;
    for line in body.split('\n') {
        let line = line.trim();
        if line.starts_with("if")
            || line.starts_with("for")
            || line.starts_with("while")
            || line.starts_with("&&")
            || line.starts_with("||")
        {
            complexity += 1;
        }
    }
    complexity
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn empty_body_scores_one() {
        assert_eq!(calculate_complexity(""), 1);
    }

    #[test]
    fn leading_branches_and_continuation_operators_count() {
        let body = indoc! {"
            if (a > 0
                && b < 10) {
                x = 1;
            }
            while (x--) {
                y++;
            }
        "};
        assert_eq!(calculate_complexity(body), 4);
    }

    #[test]
    fn mid_line_keywords_do_not_count() {
        // A `while` that is not at the start of the line is invisible to
        // the scorer, even though the control-flow pass would record it.
        assert_eq!(calculate_complexity("do { x--; } while (x);"), 1);
    }

    #[test]
    fn prefix_check_is_not_word_bounded() {
        assert_eq!(calculate_complexity("ifdef_handler();"), 2);
    }
}
