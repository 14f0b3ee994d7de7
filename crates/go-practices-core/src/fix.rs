//! Applies suggested fixes to document text.

use crate::types::{Problem, Replacement};

use tracing::warn;

/// Outcome of applying the fixes attached to a set of problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The document text after applying fixes.
    pub text: String,
    /// Number of replacements applied.
    pub applied: usize,
    /// Number of replacements skipped as invalid or overlapping.
    pub skipped: usize,
}

/// Applies every fix replacement carried by `problems` to `text`.
///
/// Replacements are applied in descending start order so earlier byte
/// offsets stay valid while later ranges are rewritten. Ranges that fall
/// outside the document, split a character, or overlap an already-applied
/// replacement are skipped with a warning rather than corrupting unrelated
/// text.
#[must_use]
pub fn apply_fixes(text: &str, problems: &[Problem]) -> FixOutcome {
    let mut replacements: Vec<&Replacement> = problems
        .iter()
        .filter_map(|p| p.fix.as_ref())
        .flat_map(|fix| &fix.replacements)
        .collect();
    replacements.sort_by(|a, b| b.start.cmp(&a.start));

    let mut out = text.to_string();
    let mut applied = 0;
    let mut skipped = 0;
    // Exclusive upper bound for the next replacement's end.
    let mut floor = text.len();

    for r in replacements {
        if r.start > r.end
            || r.end > text.len()
            || !text.is_char_boundary(r.start)
            || !text.is_char_boundary(r.end)
        {
            warn!(start = r.start, end = r.end, "Skipping out-of-bounds replacement");
            skipped += 1;
            continue;
        }
        if r.end > floor {
            warn!(start = r.start, end = r.end, "Skipping overlapping replacement");
            skipped += 1;
            continue;
        }

        out.replace_range(r.start..r.end, &r.text);
        floor = r.start;
        applied += 1;
    }

    FixOutcome {
        text: out,
        applied,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FixInfo, Severity};

    fn problem_with_replacement(start: usize, end: usize, text: &str) -> Problem {
        Problem::new("go-naming", Severity::Warning, 1, 1, "msg").with_fix(FixInfo::single(
            "fix",
            Replacement::new(start, end, text),
        ))
    }

    #[test]
    fn applies_single_replacement() {
        let text = "package MyPkg\n";
        let outcome = apply_fixes(text, &[problem_with_replacement(8, 13, "mypkg")]);
        assert_eq!(outcome.text, "package mypkg\n");
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn applies_multiple_replacements_back_to_front() {
        let text = "aa bb cc";
        let problems = vec![
            problem_with_replacement(0, 2, "xx"),
            problem_with_replacement(6, 8, "yy"),
        ];
        let outcome = apply_fixes(text, &problems);
        assert_eq!(outcome.text, "xx bb yy");
        assert_eq!(outcome.applied, 2);
    }

    #[test]
    fn skips_out_of_bounds_range() {
        let outcome = apply_fixes("short", &[problem_with_replacement(2, 99, "x")]);
        assert_eq!(outcome.text, "short");
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn skips_overlapping_replacement() {
        let text = "abcdef";
        let problems = vec![
            problem_with_replacement(0, 4, "X"),
            problem_with_replacement(2, 6, "Y"),
        ];
        // The later-starting range applies first; the overlapping one is dropped.
        let outcome = apply_fixes(text, &problems);
        assert_eq!(outcome.text, "abY");
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn no_fixes_leaves_text_unchanged() {
        let problems = vec![Problem::new("go-formatting", Severity::Info, 1, 1, "long line")];
        let outcome = apply_fixes("text", &problems);
        assert_eq!(outcome.text, "text");
        assert_eq!(outcome.applied, 0);
    }
}
