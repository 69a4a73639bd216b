//! Parsing and evaluation of `--exit-fail-on` code lists.
//!
//! A code list is a comma-separated mix of `E####` codes and category
//! names, each optionally prefixed with `-` to exclude. Categories:
//! `all`, `error`, `warning`.

use crate::kinds::{DiagKind, Severity};
use rustc_hash::FxHashSet;

/// The parsed form of one `--exit-fail-on=` argument.
#[derive(Debug, Clone, Default)]
pub struct ParsedDiagCodeList {
    pub included_codes: Vec<String>,
    pub excluded_codes: Vec<String>,
    pub included_categories: Vec<String>,
    pub excluded_categories: Vec<String>,
    /// Comma-separated pieces that were neither a code nor a word.
    pub unexpected: Vec<String>,
}

impl ParsedDiagCodeList {
    pub fn is_empty(&self) -> bool {
        self.included_codes.is_empty()
            && self.excluded_codes.is_empty()
            && self.included_categories.is_empty()
            && self.excluded_categories.is_empty()
    }
}

fn looks_like_code(piece: &str) -> bool {
    piece.len() == 5
        && piece.as_bytes()[0] == b'E'
        && piece.bytes().skip(1).all(|b| b.is_ascii_digit())
}

/// Parse one comma-separated diag code list.
pub fn parse_diag_code_list(raw: &str) -> ParsedDiagCodeList {
    let mut parsed = ParsedDiagCodeList::default();
    for piece in raw.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let (piece, excluded) = match piece.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (piece, false),
        };
        if looks_like_code(piece) {
            if excluded {
                parsed.excluded_codes.push(piece.to_string());
            } else {
                parsed.included_codes.push(piece.to_string());
            }
        } else if piece.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            if excluded {
                parsed.excluded_categories.push(piece.to_string());
            } else {
                parsed.included_categories.push(piece.to_string());
            }
        } else {
            parsed.unexpected.push(piece.to_string());
        }
    }
    parsed
}

fn category_members(category: &str) -> Option<Vec<DiagKind>> {
    let severity = match category {
        "all" => {
            return Some(DiagKind::all().to_vec());
        }
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => return None,
    };
    Some(
        DiagKind::all()
            .iter()
            .copied()
            .filter(|kind| kind.severity() == severity)
            .collect(),
    )
}

/// The set of diagnostic kinds that force a non-zero exit. Defaults to
/// every error-severity kind until the user overrides it.
#[derive(Debug, Clone)]
pub struct DiagCodeSet {
    present: FxHashSet<DiagKind>,
    user_provided: bool,
    /// Collected while applying user lists; surfaced by
    /// `Options::dump_errors`.
    pub unknown_codes: Vec<String>,
    pub unknown_categories: Vec<String>,
    /// True when the user passed an empty list (a hard error).
    pub has_empty_list: bool,
}

impl Default for DiagCodeSet {
    fn default() -> Self {
        let present = DiagKind::all()
            .iter()
            .copied()
            .filter(|kind| kind.severity() == Severity::Error)
            .collect();
        Self {
            present,
            user_provided: false,
            unknown_codes: Vec::new(),
            unknown_categories: Vec::new(),
            has_empty_list: false,
        }
    }
}

impl DiagCodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether diagnostics of this kind fail the process.
    pub fn is_present(&self, kind: DiagKind) -> bool {
        self.present.contains(&kind)
    }

    /// Whether the user customized the set.
    pub fn is_user_provided(&self) -> bool {
        self.user_provided
    }

    /// Apply one parsed code list. The first user list replaces the
    /// default; later lists refine.
    pub fn add(&mut self, parsed: ParsedDiagCodeList) {
        if parsed.is_empty() {
            self.has_empty_list = true;
            return;
        }
        if !self.user_provided {
            self.present.clear();
            self.user_provided = true;
        }
        for category in &parsed.included_categories {
            match category_members(category) {
                Some(kinds) => self.present.extend(kinds),
                None => self.unknown_categories.push(category.clone()),
            }
        }
        for code in &parsed.included_codes {
            match DiagKind::from_code(code) {
                Some(kind) => {
                    self.present.insert(kind);
                }
                None => self.unknown_codes.push(code.clone()),
            }
        }
        for category in &parsed.excluded_categories {
            match category_members(category) {
                Some(kinds) => {
                    for kind in kinds {
                        self.present.remove(&kind);
                    }
                }
                None => self.unknown_categories.push(category.clone()),
            }
        }
        for code in &parsed.excluded_codes {
            match DiagKind::from_code(code) {
                Some(kind) => {
                    self.present.remove(&kind);
                }
                None => self.unknown_codes.push(code.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_categories() {
        let parsed = parse_diag_code_list("E0003,all,-E0005,-warning");
        assert_eq!(parsed.included_codes, vec!["E0003"]);
        assert_eq!(parsed.included_categories, vec!["all"]);
        assert_eq!(parsed.excluded_codes, vec!["E0005"]);
        assert_eq!(parsed.excluded_categories, vec!["warning"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_diag_code_list("").is_empty());
        assert!(parse_diag_code_list(" , ,").is_empty());
    }

    #[test]
    fn test_default_set_fails_on_errors_only() {
        let set = DiagCodeSet::new();
        assert!(set.is_present(DiagKind::AssignmentToConstVariable));
        assert!(!set.is_present(DiagKind::UseOfUndeclaredVariable));
        assert!(!set.is_user_provided());
    }

    #[test]
    fn test_user_list_replaces_default() {
        let mut set = DiagCodeSet::new();
        set.add(parse_diag_code_list("E0003"));
        assert!(set.is_present(DiagKind::AssignmentToConstVariable));
        assert!(!set.is_present(DiagKind::BigIntLiteralContainsDecimalPoint));
    }

    #[test]
    fn test_unknown_code_and_category() {
        let mut set = DiagCodeSet::new();
        let mut parsed = ParsedDiagCodeList::default();
        parsed.included_categories.push("banana".to_string());
        parsed.excluded_codes.push("E9999".to_string());
        set.add(parsed);
        assert_eq!(set.unknown_categories, vec!["banana"]);
        assert_eq!(set.unknown_codes, vec!["E9999"]);
    }

    #[test]
    fn test_empty_list_is_flagged() {
        let mut set = DiagCodeSet::new();
        set.add(ParsedDiagCodeList::default());
        assert!(set.has_empty_list);
    }
}
