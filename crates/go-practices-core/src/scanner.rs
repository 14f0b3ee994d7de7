//! Lexical scanner for Go source text.
//!
//! The scanner is a regex-driven approximation, not a real parser: it
//! extracts the superficial markers the rules consume (package and function
//! declarations, short-variable error assignments without an adjacent nil
//! check, error variable declarations) and nothing more. A future grammar
//! based front end would keep the [`ScannedDocument`] shape so the rules
//! stay unchanged.
//!
//! Scanning never fails. Arbitrary non-Go text simply yields empty lists.

use once_cell::sync::Lazy;
use regex::Regex;

static PACKAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"package\s+(\w+)").expect("valid package pattern"));

static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"func\s+(\w+)").expect("valid function pattern"));

// Short variable declarations assigning into `err` with no nil check on the
// same match. Deliberately crude: no control-flow awareness of a following
// `if`, so false positives and negatives are expected.
static IGNORED_ERROR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^_]\s*,\s*err\s*:=.*?[^if]").expect("valid ignored-error pattern"));

static ERROR_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*:?=\s*(?:errors\.New|fmt\.Errorf)").expect("valid error-var pattern")
});

/// Canned nil-check fragment appended by the ignored-error fix.
pub const NIL_CHECK_FRAGMENT: &str = "if err != nil {\n\treturn err\n}";

// Identifier byte range assumes exactly one space after the keyword.
const PACKAGE_KEYWORD_LEN: usize = "package ".len();

/// A single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Raw line text, without the trailing newline.
    pub text: &'a str,
    /// Byte offset of the first non-whitespace character; 0 for blank lines.
    pub indentation: usize,
}

/// A detected `package` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDecl<'a> {
    /// Declared package name.
    pub name: &'a str,
    /// Line of the declaration (1-indexed).
    pub line: usize,
    /// Column of the declaration (1-indexed).
    pub column: usize,
    /// Byte offset where the identifier starts.
    pub name_start: usize,
    /// Byte offset just past the identifier.
    pub name_end: usize,
}

/// A detected `func` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl<'a> {
    /// Declared function name.
    pub name: &'a str,
    /// Line of the declaration (1-indexed).
    pub line: usize,
    /// Column of the declaration (1-indexed).
    pub column: usize,
}

/// An error-assignment site with no adjacent nil check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredError {
    /// Line of the site (1-indexed).
    pub line: usize,
    /// Column of the site (1-indexed).
    pub column: usize,
    /// Byte offset where the matched site starts.
    pub start: usize,
    /// Byte offset just past the matched site.
    pub end: usize,
    /// Matched text with the canned nil-check fragment appended.
    pub suggested_fix: String,
}

/// A variable assigned from `errors.New` or `fmt.Errorf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorVariable<'a> {
    /// Assigned variable name.
    pub name: &'a str,
    /// Line of the assignment (1-indexed).
    pub line: usize,
    /// Column of the assignment (1-indexed).
    pub column: usize,
}

/// Read-only lexical view of a source text.
#[derive(Debug, Clone, Default)]
pub struct ScannedDocument<'a> {
    /// All source lines in order.
    pub lines: Vec<Line<'a>>,
    /// Detected package declarations.
    pub packages: Vec<PackageDecl<'a>>,
    /// Detected function declarations.
    pub functions: Vec<FunctionDecl<'a>>,
    /// Detected error assignments lacking a nil check.
    pub ignored_errors: Vec<IgnoredError>,
    /// Detected error variable declarations.
    pub error_variables: Vec<ErrorVariable<'a>>,
}

/// Scans `text` into a [`ScannedDocument`].
///
/// Pure and deterministic; identical input always yields identical output.
#[must_use]
pub fn scan(text: &str) -> ScannedDocument<'_> {
    let lines = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| Line {
            number: index + 1,
            text: line,
            indentation: line.find(|c: char| !c.is_whitespace()).unwrap_or(0),
        })
        .collect();

    let mut packages = Vec::new();
    for caps in PACKAGE_RE.captures_iter(text) {
        let m = caps.get(0).expect("match group 0 always present");
        let name = caps.get(1).expect("package pattern has one group").as_str();
        let name_start = m.start() + PACKAGE_KEYWORD_LEN;
        packages.push(PackageDecl {
            name,
            line: line_number(text, m.start()),
            column: column_number(text, m.start()),
            name_start,
            name_end: name_start + name.len(),
        });
    }

    let mut functions = Vec::new();
    for caps in FUNCTION_RE.captures_iter(text) {
        let m = caps.get(0).expect("match group 0 always present");
        functions.push(FunctionDecl {
            name: caps.get(1).expect("function pattern has one group").as_str(),
            line: line_number(text, m.start()),
            column: column_number(text, m.start()),
        });
    }

    let mut ignored_errors = Vec::new();
    for m in IGNORED_ERROR_RE.find_iter(text) {
        ignored_errors.push(IgnoredError {
            line: line_number(text, m.start()),
            column: column_number(text, m.start()),
            start: m.start(),
            end: m.end(),
            suggested_fix: format!("{}{NIL_CHECK_FRAGMENT}", m.as_str()),
        });
    }

    let mut error_variables = Vec::new();
    for caps in ERROR_VAR_RE.captures_iter(text) {
        let m = caps.get(0).expect("match group 0 always present");
        error_variables.push(ErrorVariable {
            name: caps.get(1).expect("error-var pattern has one group").as_str(),
            line: line_number(text, m.start()),
            column: column_number(text, m.start()),
        });
    }

    ScannedDocument {
        lines,
        packages,
        functions,
        ignored_errors,
        error_variables,
    }
}

/// Returns the 1-based line number containing byte `offset`.
fn line_number(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Returns the 1-based column of byte `offset` within its line.
fn column_number(text: &str, offset: usize) -> usize {
    match text[..offset].rfind('\n') {
        Some(newline) => offset - newline,
        None => offset + 1,
    }
}

/// Calculates the byte offset for a 1-based line and column.
///
/// Returns the end of the text if the position is past the last line, and 0
/// for line 0.
#[must_use]
pub fn offset_for(text: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_text) in text.split('\n').enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1);
        }
        offset += line_text.len() + 1;
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_single_empty_line() {
        let doc = scan("");
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].text, "");
        assert!(doc.packages.is_empty());
        assert!(doc.functions.is_empty());
        assert!(doc.ignored_errors.is_empty());
        assert!(doc.error_variables.is_empty());
    }

    #[test]
    fn lines_carry_numbers_and_indentation() {
        let doc = scan("package main\n    x := 1\n\t\ty := 2\n");
        assert_eq!(doc.lines.len(), 4);
        assert_eq!(doc.lines[0].number, 1);
        assert_eq!(doc.lines[0].indentation, 0);
        assert_eq!(doc.lines[1].indentation, 4);
        assert_eq!(doc.lines[2].indentation, 2);
        // Trailing newline produces a final empty line.
        assert_eq!(doc.lines[3].text, "");
        assert_eq!(doc.lines[3].indentation, 0);
    }

    #[test]
    fn detects_package_with_identifier_range() {
        let text = "package main\n";
        let doc = scan(text);
        assert_eq!(doc.packages.len(), 1);
        let pkg = &doc.packages[0];
        assert_eq!(pkg.name, "main");
        assert_eq!(pkg.line, 1);
        assert_eq!(pkg.column, 1);
        assert_eq!(&text[pkg.name_start..pkg.name_end], "main");
    }

    #[test]
    fn package_position_on_later_line() {
        let doc = scan("// comment\npackage util\n");
        assert_eq!(doc.packages[0].line, 2);
        assert_eq!(doc.packages[0].column, 1);
    }

    #[test]
    fn detects_functions() {
        let doc = scan("package main\n\nfunc Add(a, b int) int {\n\treturn a + b\n}\n\nfunc sub() {}\n");
        let names: Vec<&str> = doc.functions.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Add", "sub"]);
        assert_eq!(doc.functions[0].line, 3);
        assert_eq!(doc.functions[1].line, 7);
    }

    #[test]
    fn detects_ignored_error_with_suggested_fix() {
        let text = "x, err := foo()\nbar()\n";
        let doc = scan(text);
        assert_eq!(doc.ignored_errors.len(), 1);
        let site = &doc.ignored_errors[0];
        assert!(site.suggested_fix.ends_with(NIL_CHECK_FRAGMENT));
        assert!(site.start < site.end);
        assert!(site.end <= text.len());
    }

    #[test]
    fn underscore_assignment_is_not_ignored_error() {
        let doc = scan("_, err := foo()\n");
        assert!(doc.ignored_errors.is_empty());
    }

    #[test]
    fn detects_error_variables() {
        let doc = scan("myErr := errors.New(\"boom\")\nbad := fmt.Errorf(\"no: %d\", 1)\n");
        let names: Vec<&str> = doc.error_variables.iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["myErr", "bad"]);
        assert_eq!(doc.error_variables[1].line, 2);
        assert_eq!(doc.error_variables[1].column, 1);
    }

    #[test]
    fn column_counts_from_preceding_newline() {
        let doc = scan("x := 1\n\tpackage main\n");
        assert_eq!(doc.packages[0].line, 2);
        assert_eq!(doc.packages[0].column, 2);
    }

    #[test]
    fn offset_for_maps_line_and_column() {
        let content = "line1\nline2\nline3";
        assert_eq!(offset_for(content, 1, 1), 0);
        assert_eq!(offset_for(content, 2, 1), 6);
        assert_eq!(offset_for(content, 2, 3), 8);
        assert_eq!(offset_for(content, 0, 5), 0);
    }
}
