//! Command-line option parsing.
//!
//! Flags and files interleave: `--config-file` is sticky (applies to
//! every following file until replaced), while `--language`,
//! `--path-for-config-search`, and `--vim-file-bufnr` apply to the next
//! file only. `--` ends flag parsing. Option mistakes are collected
//! into the `Options` record and rendered by `dump_errors`; parsing
//! itself never exits.

use jetlint_diagnostics::{parse_diag_code_list, DiagCodeSet};
use std::io::Write;

/// Output format selected with `--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    DefaultFormat,
    GnuLike,
    VimQflistJson,
    EmacsLisp,
}

/// Language selected with `--language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFileLanguage {
    /// Pick from the file extension.
    Default,
    Javascript,
    JavascriptJsx,
    Typescript,
    TypescriptDefinition,
    TypescriptJsx,
}

impl InputFileLanguage {
    fn from_id(id: &str) -> Option<InputFileLanguage> {
        Some(match id {
            "default" => InputFileLanguage::Default,
            "javascript" => InputFileLanguage::Javascript,
            "javascript-jsx" => InputFileLanguage::JavascriptJsx,
            "experimental-typescript" => InputFileLanguage::Typescript,
            "experimental-typescript-definition" => InputFileLanguage::TypescriptDefinition,
            "experimental-typescript-jsx" => InputFileLanguage::TypescriptJsx,
            _ => return None,
        })
    }
}

/// One input, with the per-file options that were pending when it
/// appeared on the command line.
#[derive(Debug, Clone)]
pub struct FileToLint {
    pub path: String,
    /// Sticky: stays set for later files until overridden.
    pub config_file: Option<String>,
    /// One-shot: applies to this file only.
    pub path_for_config_search: Option<String>,
    pub language: Option<InputFileLanguage>,
    pub is_stdin: bool,
    pub vim_bufnr: Option<i32>,
}

/// Everything parsed from argv.
#[derive(Debug, Clone)]
pub struct Options {
    pub print_parser_visits: bool,
    pub snarky: bool,
    pub help: bool,
    pub version: bool,
    pub list_debug_apps: bool,
    pub lsp_server: bool,
    pub output_format: OutputFormat,
    pub files_to_lint: Vec<FileToLint>,
    pub has_config_file: bool,
    pub has_multiple_stdin: bool,
    pub exit_fail_on: DiagCodeSet,
    /// Bad option names and bad option values, in order of appearance.
    pub error_unrecognized_options: Vec<String>,
    /// `--language=` values that had no following input file.
    pub warning_language_without_file: Vec<String>,
    /// Full `--vim-file-bufnr=N` flags that had no following input
    /// file.
    pub warning_vim_bufnr_without_file: Vec<String>,
    has_language: bool,
    has_vim_file_bufnr: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            print_parser_visits: false,
            snarky: false,
            help: false,
            version: false,
            list_debug_apps: false,
            lsp_server: false,
            output_format: OutputFormat::DefaultFormat,
            files_to_lint: Vec::new(),
            has_config_file: false,
            has_multiple_stdin: false,
            exit_fail_on: DiagCodeSet::new(),
            error_unrecognized_options: Vec::new(),
            warning_language_without_file: Vec::new(),
            warning_vim_bufnr_without_file: Vec::new(),
            has_language: false,
            has_vim_file_bufnr: false,
        }
    }
}

/// Pending per-file state while walking argv.
#[derive(Default)]
struct PendingFileOptions {
    config_file: Option<String>,
    path_for_config_search: Option<String>,
    language: Option<(InputFileLanguage, String)>,
    vim_bufnr: Option<(i32, String)>,
}

/// Whether `arg` is an accepted unambiguous prefix of `full`, at least
/// `minimum` characters long.
fn matches_prefix(arg: &str, full: &str, minimum: usize) -> bool {
    arg.len() >= minimum && full.starts_with(arg)
}

/// Parse command-line arguments (without the program name).
pub fn parse_options<I, S>(arguments: I) -> Options
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
    let mut options = Options::default();
    let mut pending = PendingFileOptions::default();
    let mut saw_stdin = false;
    let mut flags_done = false;
    let mut index = 0;

    // `--flag=value` or `--flag value`; None (plus an error entry) when
    // the value is missing.
    fn flag_value(
        arguments: &[String],
        index: &mut usize,
        flag: &str,
        errors: &mut Vec<String>,
    ) -> Option<String> {
        let arg = &arguments[*index];
        if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            return Some(value.to_string());
        }
        if *index + 1 < arguments.len() {
            *index += 1;
            return Some(arguments[*index].clone());
        }
        errors.push(flag.to_string());
        None
    }

    while index < arguments.len() {
        let arg = arguments[index].clone();

        if flags_done || !arg.starts_with('-') || arg == "-" {
            let is_stdin = !flags_done && arg == "-";
            if is_stdin && saw_stdin {
                options.has_multiple_stdin = true;
                // Standard input is linted once; consume the pending
                // per-file options anyway.
                pending.path_for_config_search = None;
                pending.language = None;
                pending.vim_bufnr = None;
            } else {
                if is_stdin {
                    saw_stdin = true;
                }
                options.files_to_lint.push(FileToLint {
                    path: if is_stdin { "<stdin>".to_string() } else { arg },
                    config_file: pending.config_file.clone(),
                    path_for_config_search: pending.path_for_config_search.take(),
                    language: pending.language.take().map(|(language, _)| language),
                    is_stdin,
                    vim_bufnr: pending.vim_bufnr.take().map(|(bufnr, _)| bufnr),
                });
            }
            index += 1;
            continue;
        }

        if arg == "--" {
            flags_done = true;
            index += 1;
            continue;
        }

        if arg == "--stdin" {
            if saw_stdin {
                options.has_multiple_stdin = true;
                pending.path_for_config_search = None;
                pending.language = None;
                pending.vim_bufnr = None;
            } else {
                saw_stdin = true;
                options.files_to_lint.push(FileToLint {
                    path: "<stdin>".to_string(),
                    config_file: pending.config_file.clone(),
                    path_for_config_search: pending.path_for_config_search.take(),
                    language: pending.language.take().map(|(language, _)| language),
                    is_stdin: true,
                    vim_bufnr: pending.vim_bufnr.take().map(|(bufnr, _)| bufnr),
                });
            }
            index += 1;
            continue;
        }

        if arg == "-h" || matches_prefix(&arg, "--help", "--h".len()) {
            options.help = true;
        } else if arg == "-v" || matches_prefix(&arg, "--version", "--v".len()) {
            options.version = true;
        } else if arg == "--snarky" {
            options.snarky = true;
        } else if arg == "--debug-apps" {
            options.list_debug_apps = true;
        } else if matches_prefix(&arg, "--debug-parser-visits", "--debug-p".len()) {
            options.print_parser_visits = true;
        } else if arg == "--lsp-server" || arg == "--lsp" {
            options.lsp_server = true;
        } else if arg == "--config-file" || arg.starts_with("--config-file=") {
            if let Some(value) = flag_value(
                &arguments,
                &mut index,
                "--config-file",
                &mut options.error_unrecognized_options,
            ) {
                pending.config_file = Some(value);
                options.has_config_file = true;
            }
        } else if arg == "--path-for-config-search" || arg.starts_with("--path-for-config-search=")
        {
            if let Some(value) = flag_value(
                &arguments,
                &mut index,
                "--path-for-config-search",
                &mut options.error_unrecognized_options,
            ) {
                pending.path_for_config_search = Some(value);
            }
        } else if arg == "--language" || arg.starts_with("--language=") {
            if let Some(value) = flag_value(
                &arguments,
                &mut index,
                "--language",
                &mut options.error_unrecognized_options,
            ) {
                match InputFileLanguage::from_id(&value) {
                    Some(language) => {
                        if let Some((_, unused)) = pending.language.take() {
                            options.warning_language_without_file.push(unused);
                        }
                        options.has_language = true;
                        pending.language = Some((language, value));
                    }
                    None => options.error_unrecognized_options.push(value),
                }
            }
        } else if arg == "--vim-file-bufnr" || arg.starts_with("--vim-file-bufnr=") {
            if let Some(value) = flag_value(
                &arguments,
                &mut index,
                "--vim-file-bufnr",
                &mut options.error_unrecognized_options,
            ) {
                match value.parse::<i32>() {
                    Ok(bufnr) => {
                        if let Some((_, unused)) = pending.vim_bufnr.take() {
                            options.warning_vim_bufnr_without_file.push(unused);
                        }
                        options.has_vim_file_bufnr = true;
                        let flag = format!("--vim-file-bufnr={value}");
                        pending.vim_bufnr = Some((bufnr, flag));
                    }
                    Err(_) => options.error_unrecognized_options.push(value),
                }
            }
        } else if arg == "--output-format" || arg.starts_with("--output-format=") {
            if let Some(value) = flag_value(
                &arguments,
                &mut index,
                "--output-format",
                &mut options.error_unrecognized_options,
            ) {
                match value.as_str() {
                    "gnu-like" => options.output_format = OutputFormat::GnuLike,
                    "vim-qflist-json" => options.output_format = OutputFormat::VimQflistJson,
                    "emacs-lisp" => options.output_format = OutputFormat::EmacsLisp,
                    _ => options.error_unrecognized_options.push(value),
                }
            }
        } else if arg == "--exit-fail-on" || arg.starts_with("--exit-fail-on=") {
            if let Some(value) = flag_value(
                &arguments,
                &mut index,
                "--exit-fail-on",
                &mut options.error_unrecognized_options,
            ) {
                options.exit_fail_on.add(parse_diag_code_list(&value));
            }
        } else {
            // Unknown option: record it and stop; everything after it
            // would be guesswork.
            options.error_unrecognized_options.push(arg);
            break;
        }
        index += 1;
    }

    // Per-file flags with no file left to apply to.
    if let Some((_, unused)) = pending.language.take() {
        options.warning_language_without_file.push(unused);
    }
    if let Some((_, unused)) = pending.vim_bufnr.take() {
        options.warning_vim_bufnr_without_file.push(unused);
    }

    options
}

impl Options {
    /// Print accumulated option problems. Returns true when a hard
    /// error (not just a warning) was printed.
    pub fn dump_errors(&self, out: &mut impl Write) -> bool {
        let mut have_errors = false;
        for option in &self.error_unrecognized_options {
            let _ = writeln!(out, "error: unrecognized option: {option}");
            have_errors = true;
        }
        for category in &self.exit_fail_on.unknown_categories {
            let _ = writeln!(out, "warning: unknown error category: {category}");
        }
        for code in &self.exit_fail_on.unknown_codes {
            let _ = writeln!(out, "warning: unknown error code: {code}");
        }
        if self.exit_fail_on.has_empty_list {
            let _ = writeln!(
                out,
                "error: --exit-fail-on must be given at least one category or code"
            );
            have_errors = true;
        }

        if self.lsp_server {
            if !self.files_to_lint.is_empty() {
                let _ = writeln!(
                    out,
                    "warning: ignoring files given on command line in --lsp-server mode"
                );
            }
            if self.has_config_file {
                let _ = writeln!(out, "warning: --config-file ignored in --lsp-server mode");
            }
            if self.has_language {
                let _ = writeln!(out, "warning: ignoring --language in --lsp-server mode");
            }
            if self.has_vim_file_bufnr {
                let _ = writeln!(
                    out,
                    "warning: ignoring --vim-file-bufnr in --lsp-server mode"
                );
            }
            if self.exit_fail_on.is_user_provided() {
                let _ = writeln!(out, "warning: --exit-fail-on ignored with --lsp-server");
            }
            if self.output_format != OutputFormat::DefaultFormat {
                let _ = writeln!(out, "warning: --output-format ignored with --lsp-server");
            }
            return have_errors;
        }

        for language in &self.warning_language_without_file {
            let _ = writeln!(
                out,
                "warning: flag '--language={language}' should be followed by an input file \
                 name or --stdin"
            );
        }
        if self.output_format == OutputFormat::VimQflistJson {
            for flag in &self.warning_vim_bufnr_without_file {
                let _ = writeln!(
                    out,
                    "warning: flag: '{flag}' should be followed by an input file name or --stdin"
                );
            }
        } else if self.has_vim_file_bufnr {
            let _ = writeln!(
                out,
                "warning: --output-format selected which doesn't use --vim-file-bufnr"
            );
        }

        have_errors
    }
}

/// The language to lint a file as: an explicit `--language` wins,
/// otherwise the file extension decides.
pub fn get_language(path: &str, language: Option<InputFileLanguage>) -> InputFileLanguage {
    match language {
        Some(InputFileLanguage::Default) | None => {
            if path.ends_with(".d.ts") {
                InputFileLanguage::TypescriptDefinition
            } else if path.ends_with(".ts") {
                InputFileLanguage::Typescript
            } else if path.ends_with(".tsx") {
                InputFileLanguage::TypescriptJsx
            } else {
                InputFileLanguage::JavascriptJsx
            }
        }
        Some(language) => language,
    }
}
