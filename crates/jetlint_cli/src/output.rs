//! Diagnostic rendering.
//!
//! Rendering is a pure function of the diagnostic records plus the
//! locator; the engine itself only ever produces records.

use jetlint_core::text::Locator;
use jetlint_engine::{Diagnostic, Severity};
use serde::Serialize;
use std::io::Write;

/// `file:line:col: severity: message [code]`, 1-based.
pub fn render_gnu_like(
    out: &mut impl Write,
    path: &str,
    diagnostics: &[Diagnostic],
    locator: &Locator<'_>,
    snarky: bool,
) {
    for diag in diagnostics {
        let at = locator.locate(diag.primary_span().begin);
        let message = message_for(diag, snarky);
        let _ = writeln!(
            out,
            "{path}:{line}:{column}: {severity}: {message} [{code}]",
            line = at.line + 1,
            column = at.column + 1,
            severity = diag.kind.severity(),
            code = diag.kind.code(),
        );
    }
}

#[derive(Serialize)]
struct VimQflistEntry<'a> {
    col: u32,
    end_col: u32,
    lnum: u32,
    end_lnum: u32,
    text: String,
    #[serde(rename = "type")]
    kind: &'a str,
    filename: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bufnr: Option<i32>,
}

#[derive(Serialize)]
struct VimQflist<'a> {
    qflist: Vec<VimQflistEntry<'a>>,
}

/// The JSON body consumed by vim's `setqflist()`.
pub fn render_vim_qflist_json(
    out: &mut impl Write,
    path: &str,
    vim_bufnr: Option<i32>,
    diagnostics: &[Diagnostic],
    locator: &Locator<'_>,
    snarky: bool,
) {
    let qflist = VimQflist {
        qflist: diagnostics
            .iter()
            .map(|diag| {
                let span = diag.primary_span();
                let begin = locator.locate(span.begin);
                let end = locator.locate(span.end);
                VimQflistEntry {
                    col: begin.column + 1,
                    end_col: end.column + 1,
                    lnum: begin.line + 1,
                    end_lnum: end.line + 1,
                    text: message_for(diag, snarky),
                    kind: match diag.kind.severity() {
                        Severity::Error => "E",
                        Severity::Warning => "W",
                    },
                    filename: path,
                    bufnr: vim_bufnr,
                }
            })
            .collect(),
    };
    let _ = serde_json::to_writer(&mut *out, &qflist);
    let _ = writeln!(out);
}

/// One alist per diagnostic: `((begin . end) severity code message)`,
/// offsets 1-based as Emacs buffer positions.
pub fn render_emacs_lisp(
    out: &mut impl Write,
    diagnostics: &[Diagnostic],
    snarky: bool,
) {
    let _ = write!(out, "(");
    for diag in diagnostics {
        let span = diag.primary_span();
        let severity = match diag.kind.severity() {
            Severity::Error => 2,
            Severity::Warning => 1,
        };
        let message = message_for(diag, snarky);
        let _ = write!(
            out,
            "(({begin} . {end}) {severity} \"{code}\" \"{message}\")",
            begin = span.begin + 1,
            end = span.end + 1,
            code = diag.kind.code(),
            message = message.replace('\\', "\\\\").replace('"', "\\\""),
        );
    }
    let _ = writeln!(out, ")");
}

fn message_for(diag: &Diagnostic, snarky: bool) -> String {
    let message = diag.kind.message();
    if snarky {
        snarkify(message)
    } else {
        message.to_string()
    }
}

/// The `--snarky` rendition of a message.
fn snarkify(message: &str) -> String {
    let mut snark = message
        .replace("missing", "you forgot the")
        .replace("unexpected", "seriously, an unexpected")
        .replace("not allowed", "just not a thing");
    if snark == message {
        snark.push_str(", obviously");
    }
    snark
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetlint_analyzer::{AnalyzerOptions, GlobalDeclaredVariableSet};
    use jetlint_engine::{parse_and_analyze, ParserOptions};

    fn render_to_string(
        source: &str,
        render: impl Fn(&mut Vec<u8>, &[Diagnostic], &Locator<'_>),
    ) -> String {
        let globals = GlobalDeclaredVariableSet::default_globals();
        let result = parse_and_analyze(
            source,
            ParserOptions::default(),
            AnalyzerOptions::default(),
            &globals,
        );
        let mut out = Vec::new();
        render(&mut out, result.diagnostics.diagnostics(), &result.locator);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_gnu_like_positions_are_one_based() {
        let rendered = render_to_string("let a;\nmystery;\n", |out, diags, locator| {
            render_gnu_like(out, "test.js", diags, locator, false);
        });
        assert_eq!(
            rendered,
            "test.js:2:1: warning: use of undeclared variable [E0057]\n"
        );
    }

    #[test]
    fn test_vim_qflist_json_shape() {
        let rendered = render_to_string("mystery;", |out, diags, locator| {
            render_vim_qflist_json(out, "test.js", Some(3), diags, locator, false);
        });
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let entry = &parsed["qflist"][0];
        assert_eq!(entry["lnum"], 1);
        assert_eq!(entry["col"], 1);
        assert_eq!(entry["end_col"], 8);
        assert_eq!(entry["type"], "W");
        assert_eq!(entry["bufnr"], 3);
        assert_eq!(entry["filename"], "test.js");
    }

    #[test]
    fn test_emacs_lisp_shape() {
        let rendered = render_to_string("mystery;", |out, diags, _locator| {
            render_emacs_lisp(out, diags, false);
        });
        assert_eq!(
            rendered,
            "(((1 . 8) 1 \"E0057\" \"use of undeclared variable\"))\n"
        );
    }
}
