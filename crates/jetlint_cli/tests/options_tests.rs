//! Option-parsing contract tests.

use jetlint_cli::options::{
    get_language, parse_options, InputFileLanguage, Options, OutputFormat,
};
use jetlint_diagnostics::{parse_diag_code_list, DiagKind, ParsedDiagCodeList};

fn parse(arguments: &[&str]) -> Options {
    parse_options(arguments.iter().copied())
}

#[track_caller]
fn parse_no_errors(arguments: &[&str]) -> Options {
    let options = parse(arguments);
    assert!(
        options.error_unrecognized_options.is_empty(),
        "{:?}",
        options.error_unrecognized_options
    );
    assert!(
        options.warning_language_without_file.is_empty(),
        "{:?}",
        options.warning_language_without_file
    );
    assert!(
        options.warning_vim_bufnr_without_file.is_empty(),
        "{:?}",
        options.warning_vim_bufnr_without_file
    );
    options
}

struct DumpedErrors {
    have_errors: bool,
    output: String,
}

fn dump_errors(options: &Options) -> DumpedErrors {
    let mut output = Vec::new();
    let have_errors = options.dump_errors(&mut output);
    DumpedErrors {
        have_errors,
        output: String::from_utf8(output).unwrap(),
    }
}

#[test]
fn test_default_options_with_no_files() {
    let options = parse_no_errors(&[]);
    assert!(!options.print_parser_visits);
    assert!(!options.help);
    assert!(!options.list_debug_apps);
    assert!(!options.version);
    assert!(!options.lsp_server);
    assert_eq!(options.output_format, OutputFormat::DefaultFormat);
    assert!(options.files_to_lint.is_empty());
}

#[test]
fn test_default_options_with_files() {
    let options = parse_no_errors(&["foo.js"]);
    assert!(!options.print_parser_visits);
    assert!(!options.snarky);
    assert_eq!(options.files_to_lint.len(), 1);
    assert_eq!(options.files_to_lint[0].path, "foo.js");
}

#[test]
fn test_hyphen_hyphen_treats_remaining_arguments_as_files() {
    let options = parse_no_errors(&["--", "foo.js"]);
    assert_eq!(options.files_to_lint.len(), 1);
    assert_eq!(options.files_to_lint[0].path, "foo.js");

    let options = parse_no_errors(&["--", "--debug-parser-visits", "foo.js", "-bar"]);
    assert!(!options.print_parser_visits);
    assert_eq!(options.files_to_lint.len(), 3);
    assert_eq!(options.files_to_lint[0].path, "--debug-parser-visits");
    assert_eq!(options.files_to_lint[1].path, "foo.js");
    assert_eq!(options.files_to_lint[2].path, "-bar");
}

#[test]
fn test_debug_parser_visits() {
    let options = parse_no_errors(&["--debug-parser-visits", "foo.js"]);
    assert!(options.print_parser_visits);
    assert_eq!(options.files_to_lint.len(), 1);
    assert_eq!(options.files_to_lint[0].path, "foo.js");
}

#[test]
fn test_snarky() {
    let options = parse_no_errors(&["--snarky", "foo.js"]);
    assert!(options.snarky);
    assert_eq!(options.files_to_lint.len(), 1);
}

#[test]
fn test_debug_parser_visits_shorthand() {
    let options = parse_no_errors(&["--debug-p", "foo.js"]);
    assert!(options.print_parser_visits);

    let options = parse_no_errors(&["--debug-parser-vis", "foo.js"]);
    assert!(options.print_parser_visits);
}

#[test]
fn test_output_format() {
    let options = parse_no_errors(&[]);
    assert_eq!(options.output_format, OutputFormat::DefaultFormat);

    let options = parse_no_errors(&["--output-format=gnu-like"]);
    assert_eq!(options.output_format, OutputFormat::GnuLike);

    let options = parse_no_errors(&["--output-format=vim-qflist-json"]);
    assert_eq!(options.output_format, OutputFormat::VimQflistJson);

    let options = parse_no_errors(&["--output-format=emacs-lisp"]);
    assert_eq!(options.output_format, OutputFormat::EmacsLisp);
}

#[test]
fn test_invalid_output_format() {
    let options = parse(&["--output-format=unknown-garbage"]);
    assert_eq!(options.error_unrecognized_options, vec!["unknown-garbage"]);
    assert_eq!(
        options.output_format,
        OutputFormat::DefaultFormat,
        "output_format should remain the default"
    );

    let options = parse(&["--output-format"]);
    assert_eq!(options.error_unrecognized_options, vec!["--output-format"]);
}

#[test]
fn test_vim_file_bufnr() {
    let options = parse_no_errors(&["one.js", "two.js"]);
    assert_eq!(options.files_to_lint.len(), 2);
    assert_eq!(options.files_to_lint[0].vim_bufnr, None);
    assert_eq!(options.files_to_lint[1].vim_bufnr, None);

    let options = parse_no_errors(&[
        "--output-format",
        "vim-qflist-json",
        "--vim-file-bufnr",
        "3",
        "file.js",
    ]);
    assert_eq!(options.files_to_lint.len(), 1);
    assert_eq!(options.files_to_lint[0].path, "file.js");
    assert_eq!(options.files_to_lint[0].vim_bufnr, Some(3));

    let options = parse_no_errors(&["--vim-file-bufnr", "3", "one.js", "two.js"]);
    assert_eq!(options.files_to_lint[0].vim_bufnr, Some(3));
    assert_eq!(options.files_to_lint[1].vim_bufnr, None);

    let options = parse_no_errors(&["one.js", "--vim-file-bufnr=10", "two.js"]);
    assert_eq!(options.files_to_lint[0].vim_bufnr, None);
    assert_eq!(options.files_to_lint[1].vim_bufnr, Some(10));

    let options = parse_no_errors(&["--vim-file-bufnr=1", "one.js", "--vim-file-bufnr=2", "two.js"]);
    assert_eq!(options.files_to_lint[0].vim_bufnr, Some(1));
    assert_eq!(options.files_to_lint[1].vim_bufnr, Some(2));

    let options = parse_no_errors(&["--vim-file-bufnr=42", "-"]);
    assert_eq!(options.files_to_lint.len(), 1);
    assert_eq!(options.files_to_lint[0].vim_bufnr, Some(42));

    let options = parse_no_errors(&["one.js", "--vim-file-bufnr=42", "--stdin"]);
    assert_eq!(options.files_to_lint.len(), 2);
    assert_eq!(options.files_to_lint[1].vim_bufnr, Some(42));

    let options = parse_no_errors(&["--vim-file-bufnr=1", "--", "one.js", "two.js"]);
    assert_eq!(options.files_to_lint[0].vim_bufnr, Some(1));
    assert_eq!(options.files_to_lint[1].vim_bufnr, None);
}

#[test]
fn test_path_for_config_search() {
    let options = parse_no_errors(&["one.js", "two.js"]);
    assert_eq!(options.files_to_lint[0].path_for_config_search, None);
    assert_eq!(options.files_to_lint[1].path_for_config_search, None);

    let options = parse_no_errors(&["--path-for-config-search", "configme.js", "file.js"]);
    assert_eq!(options.files_to_lint.len(), 1);
    assert_eq!(
        options.files_to_lint[0].path_for_config_search.as_deref(),
        Some("configme.js")
    );

    // Applies to the next file only.
    let options = parse_no_errors(&["--path-for-config-search", "configme.js", "one.js", "two.js"]);
    assert_eq!(
        options.files_to_lint[0].path_for_config_search.as_deref(),
        Some("configme.js")
    );
    assert_eq!(options.files_to_lint[1].path_for_config_search, None);

    let options = parse_no_errors(&["one.js", "--path-for-config-search=configme.js", "two.js"]);
    assert_eq!(options.files_to_lint[0].path_for_config_search, None);
    assert_eq!(
        options.files_to_lint[1].path_for_config_search.as_deref(),
        Some("configme.js")
    );

    let options = parse_no_errors(&[
        "--path-for-config-search=test/one.js",
        "/tmp/one.js",
        "--path-for-config-search=src/two.js",
        "/tmp/two.js",
    ]);
    assert_eq!(
        options.files_to_lint[0].path_for_config_search.as_deref(),
        Some("test/one.js")
    );
    assert_eq!(
        options.files_to_lint[1].path_for_config_search.as_deref(),
        Some("src/two.js")
    );

    let options = parse_no_errors(&["--path-for-config-search=configme.js", "-"]);
    assert_eq!(
        options.files_to_lint[0].path_for_config_search.as_deref(),
        Some("configme.js")
    );

    let options = parse_no_errors(&["--path-for-config-search=configme.js", "--stdin", "two.js"]);
    assert_eq!(
        options.files_to_lint[0].path_for_config_search.as_deref(),
        Some("configme.js")
    );
    assert_eq!(options.files_to_lint[1].path_for_config_search, None);

    let options = parse_no_errors(&[
        "--path-for-config-search=configme.js",
        "--",
        "one.js",
        "two.js",
    ]);
    assert_eq!(
        options.files_to_lint[0].path_for_config_search.as_deref(),
        Some("configme.js")
    );
    assert_eq!(options.files_to_lint[1].path_for_config_search, None);
}

#[test]
fn test_config_file_is_sticky() {
    let options = parse_no_errors(&["one.js", "two.js"]);
    assert_eq!(options.files_to_lint[0].config_file, None);
    assert_eq!(options.files_to_lint[1].config_file, None);
    assert!(!options.has_config_file);

    let options = parse_no_errors(&["--config-file", "config.json", "file.js"]);
    assert_eq!(
        options.files_to_lint[0].config_file.as_deref(),
        Some("config.json")
    );
    assert!(options.has_config_file);

    // Sticky: applies to every following file.
    let options = parse_no_errors(&["--config-file", "config.json", "one.js", "two.js"]);
    assert_eq!(
        options.files_to_lint[0].config_file.as_deref(),
        Some("config.json")
    );
    assert_eq!(
        options.files_to_lint[1].config_file.as_deref(),
        Some("config.json")
    );

    let options = parse_no_errors(&["one.js", "--config-file=config.json", "two.js"]);
    assert_eq!(options.files_to_lint[0].config_file, None);
    assert_eq!(
        options.files_to_lint[1].config_file.as_deref(),
        Some("config.json")
    );

    let options = parse_no_errors(&[
        "--config-file=one.config",
        "one.js",
        "--config-file=two.config",
        "two.js",
    ]);
    assert_eq!(options.files_to_lint[0].config_file.as_deref(), Some("one.config"));
    assert_eq!(options.files_to_lint[1].config_file.as_deref(), Some("two.config"));

    let options = parse_no_errors(&["--config-file=config.json", "--", "one.js", "two.js"]);
    assert_eq!(
        options.files_to_lint[0].config_file.as_deref(),
        Some("config.json")
    );
    assert_eq!(
        options.files_to_lint[1].config_file.as_deref(),
        Some("config.json")
    );
}

#[test]
fn test_language() {
    let options = parse_no_errors(&["one.js", "two.ts", "three.txt", "--stdin"]);
    for file in &options.files_to_lint {
        assert_eq!(file.language, None, "{}", file.path);
    }

    let options = parse_no_errors(&["--language=javascript", "one.js", "two.ts", "three.txt"]);
    // `--language` is one-shot; only the next file gets it.
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::Javascript)
    );
    assert_eq!(options.files_to_lint[1].language, None);
    assert_eq!(options.files_to_lint[2].language, None);

    let options = parse_no_errors(&[
        "--language=javascript",
        "one.js",
        "--language=javascript-jsx",
        "two.js",
    ]);
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::Javascript)
    );
    assert_eq!(
        options.files_to_lint[1].language,
        Some(InputFileLanguage::JavascriptJsx)
    );

    let options = parse_no_errors(&["one.js", "--language=javascript-jsx", "two.jsx"]);
    assert_eq!(options.files_to_lint[0].language, None);
    assert_eq!(
        options.files_to_lint[1].language,
        Some(InputFileLanguage::JavascriptJsx)
    );

    let options = parse_no_errors(&["--language=experimental-typescript", "one.txt"]);
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::Typescript)
    );

    let options = parse_no_errors(&["--language=experimental-typescript-definition", "one.txt"]);
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::TypescriptDefinition)
    );

    let options = parse_no_errors(&["--language=experimental-typescript-jsx", "one.txt"]);
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::TypescriptJsx)
    );

    let options = parse_no_errors(&["--language=javascript-jsx", "-"]);
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::JavascriptJsx)
    );

    let options = parse_no_errors(&["--language=javascript-jsx", "--stdin"]);
    assert_eq!(
        options.files_to_lint[0].language,
        Some(InputFileLanguage::JavascriptJsx)
    );
}

#[test]
fn test_language_without_following_file_warns() {
    let options = parse(&["file.js", "--language=javascript-jsx"]);
    assert_eq!(options.warning_language_without_file, vec!["javascript-jsx"]);

    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: flag '--language=javascript-jsx' should be followed by an input file name \
         or --stdin\n"
    );
}

#[test]
fn test_language_overwritten_without_file_warns() {
    let options = parse(&["--language=javascript", "--language=javascript-jsx", "test.jsx"]);
    assert_eq!(options.warning_language_without_file, vec!["javascript"]);

    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: flag '--language=javascript' should be followed by an input file name \
         or --stdin\n"
    );
}

#[test]
fn test_invalid_language_id() {
    let options = parse(&["--language=badlanguageid", "test.js"]);
    assert!(options.warning_language_without_file.is_empty());
    assert_eq!(options.error_unrecognized_options, vec!["badlanguageid"]);
}

#[test]
fn test_get_language_from_path() {
    assert_eq!(
        get_language("<stdin>", None),
        InputFileLanguage::JavascriptJsx
    );
    assert_eq!(get_language("hi.js", None), InputFileLanguage::JavascriptJsx);
    assert_eq!(get_language("hi.jsx", None), InputFileLanguage::JavascriptJsx);
    assert_eq!(get_language("hi.txt", None), InputFileLanguage::JavascriptJsx);
}

#[test]
fn test_get_language_overwritten() {
    let javascript = Some(InputFileLanguage::Javascript);
    let javascript_jsx = Some(InputFileLanguage::JavascriptJsx);

    for path in ["<stdin>", "hi.js", "hi.jsx", "hi.txt"] {
        assert_eq!(
            get_language(path, javascript_jsx),
            InputFileLanguage::JavascriptJsx
        );
        assert_eq!(get_language(path, javascript), InputFileLanguage::Javascript);
    }
}

#[test]
fn test_lsp_server_flag_and_alias() {
    let options = parse_no_errors(&["--lsp-server"]);
    assert!(options.lsp_server);

    let options = parse_no_errors(&["--lsp"]);
    assert!(options.lsp_server);
}

#[test]
fn test_dash_dash_stdin() {
    let options = parse_no_errors(&["--stdin", "one.js"]);
    assert_eq!(options.files_to_lint.len(), 2);
    assert!(options.files_to_lint[0].is_stdin);
    assert!(!options.has_multiple_stdin);

    let options = parse_no_errors(&["one.js", "--stdin"]);
    assert_eq!(options.files_to_lint.len(), 2);
    assert!(options.files_to_lint[1].is_stdin);
    assert!(!options.has_multiple_stdin);

    let options = parse_no_errors(&["-"]);
    assert_eq!(options.files_to_lint.len(), 1);
    assert!(options.files_to_lint[0].is_stdin);
    assert!(!options.has_multiple_stdin);
}

#[test]
fn test_stdin_is_linted_only_once() {
    let options = parse_no_errors(&["--stdin", "one.js", "-", "two.js"]);
    assert_eq!(options.files_to_lint.len(), 3);
    assert!(options.has_multiple_stdin);

    let options = parse_no_errors(&["one.js", "-", "two.js", "-"]);
    assert_eq!(options.files_to_lint.len(), 3);
    assert!(options.has_multiple_stdin);
}

#[test]
fn test_single_hyphen_is_an_argument() {
    let options = parse_no_errors(&["one.js", "-", "two.js"]);
    assert_eq!(options.files_to_lint.len(), 3);
}

#[test]
fn test_print_help() {
    assert!(parse_no_errors(&["--help"]).help);
    assert!(parse_no_errors(&["--h"]).help);
    assert!(parse_no_errors(&["-h"]).help);
}

#[test]
fn test_list_debug_apps() {
    assert!(parse_no_errors(&["--debug-apps"]).list_debug_apps);
}

#[test]
fn test_print_version() {
    assert!(parse_no_errors(&["--version"]).version);
    assert!(parse_no_errors(&["--v"]).version);
    assert!(parse_no_errors(&["-v"]).version);
}

#[test]
fn test_exit_fail_on() {
    let options = parse_no_errors(&["--exit-fail-on=E0003", "file.js"]);
    assert!(
        options
            .exit_fail_on
            .is_present(DiagKind::AssignmentToConstVariable),
        "E0003 should cause failure"
    );
    assert!(
        !options
            .exit_fail_on
            .is_present(DiagKind::BigIntLiteralContainsDecimalPoint),
        "E0005 should not cause failure"
    );
}

#[test]
fn test_invalid_vim_file_bufnr() {
    let options = parse(&["--vim-file-bufnr=garbage", "file.js"]);
    assert_eq!(options.error_unrecognized_options, vec!["garbage"]);

    let options = parse(&["--vim-file-bufnr"]);
    assert_eq!(options.error_unrecognized_options, vec!["--vim-file-bufnr"]);
}

#[test]
fn test_vim_file_bufnr_without_following_file() {
    let mut options = parse(&["foo.js", "--vim-file-bufnr=1"]);
    options.output_format = OutputFormat::VimQflistJson;
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: flag: '--vim-file-bufnr=1' should be followed by an input file name \
         or --stdin\n"
    );

    let mut options = parse(&["--vim-file-bufnr=1", "--vim-file-bufnr=2", "foo.js"]);
    options.output_format = OutputFormat::VimQflistJson;
    let errors = dump_errors(&options);
    assert_eq!(
        errors.output,
        "warning: flag: '--vim-file-bufnr=1' should be followed by an input file name \
         or --stdin\n"
    );

    let mut options = parse(&["--vim-file-bufnr=1", "foo.js", "--vim-file-bufnr=2"]);
    options.output_format = OutputFormat::VimQflistJson;
    let errors = dump_errors(&options);
    assert_eq!(
        errors.output,
        "warning: flag: '--vim-file-bufnr=2' should be followed by an input file name \
         or --stdin\n"
    );

    let mut options = parse(&["--vim-file-bufnr=1", "--vim-file-bufnr=2"]);
    options.output_format = OutputFormat::VimQflistJson;
    let errors = dump_errors(&options);
    assert_eq!(
        errors.output,
        "warning: flag: '--vim-file-bufnr=1' should be followed by an input file name \
         or --stdin\n\
         warning: flag: '--vim-file-bufnr=2' should be followed by an input file name \
         or --stdin\n"
    );

    // The right argument lands in the message.
    let mut options = parse(&[
        "--vim-file-bufnr=11",
        "--output-format=vim-qflist-json",
        "--vim-file-bufnr=22",
        "foo.js",
    ]);
    options.output_format = OutputFormat::VimQflistJson;
    let errors = dump_errors(&options);
    assert_eq!(
        errors.output,
        "warning: flag: '--vim-file-bufnr=11' should be followed by an input file name \
         or --stdin\n"
    );
}

#[test]
fn test_vim_file_bufnr_with_non_vim_output_format() {
    for format in [
        OutputFormat::DefaultFormat,
        OutputFormat::GnuLike,
        OutputFormat::EmacsLisp,
    ] {
        let mut options = parse_no_errors(&["--vim-file-bufnr=1", "file.js"]);
        options.output_format = format;
        let errors = dump_errors(&options);
        assert!(!errors.have_errors);
        assert_eq!(
            errors.output,
            "warning: --output-format selected which doesn't use --vim-file-bufnr\n"
        );
    }

    let mut options = parse_no_errors(&["--vim-file-bufnr=1", "file.js"]);
    options.output_format = OutputFormat::VimQflistJson;
    let errors = dump_errors(&options);
    assert_eq!(errors.output, "");
}

#[test]
fn test_vim_file_bufnr_in_lsp_mode() {
    let options = parse(&["--lsp-server", "--vim-file-bufnr=1"]);
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: ignoring --vim-file-bufnr in --lsp-server mode\n"
    );

    let options = parse(&["--lsp-server", "--vim-file-bufnr=1", "foo.js"]);
    let errors = dump_errors(&options);
    assert_eq!(
        errors.output,
        "warning: ignoring files given on command line in --lsp-server mode\n\
         warning: ignoring --vim-file-bufnr in --lsp-server mode\n"
    );
}

#[test]
fn test_language_in_lsp_mode() {
    let options = parse(&["--lsp-server", "--language=javascript"]);
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: ignoring --language in --lsp-server mode\n"
    );

    let options = parse(&["--lsp-server", "--language=javascript", "foo.js"]);
    let errors = dump_errors(&options);
    assert_eq!(
        errors.output,
        "warning: ignoring files given on command line in --lsp-server mode\n\
         warning: ignoring --language in --lsp-server mode\n"
    );
}

#[test]
fn test_invalid_options() {
    let options = parse(&["--option-does-not-exist", "foo.js"]);
    assert_eq!(
        options.error_unrecognized_options,
        vec!["--option-does-not-exist"]
    );
    assert!(options.files_to_lint.is_empty());

    let options = parse(&["--debug-parse-vixxx", "foo.js"]);
    assert_eq!(options.error_unrecognized_options, vec!["--debug-parse-vixxx"]);
    assert!(options.files_to_lint.is_empty());

    let options = parse(&["--debug-parse-visits-xxx", "foo.js"]);
    assert_eq!(
        options.error_unrecognized_options,
        vec!["--debug-parse-visits-xxx"]
    );
    assert!(options.files_to_lint.is_empty());

    let options = parse(&["-version", "foo.js"]);
    assert_eq!(options.error_unrecognized_options, vec!["-version"]);
    assert!(options.files_to_lint.is_empty());
}

#[test]
fn test_dump_errors() {
    let options = Options::default();
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(errors.output, "");

    let mut options = Options::default();
    options
        .error_unrecognized_options
        .push("--bad-option".to_string());
    let errors = dump_errors(&options);
    assert!(errors.have_errors);
    assert_eq!(errors.output, "error: unrecognized option: --bad-option\n");

    let mut options = Options::default();
    let mut parsed = ParsedDiagCodeList::default();
    parsed.included_categories.push("banana".to_string());
    parsed.excluded_codes.push("E9999".to_string());
    options.exit_fail_on.add(parsed);
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: unknown error category: banana\nwarning: unknown error code: E9999\n"
    );

    let mut options = Options::default();
    options.exit_fail_on.add(ParsedDiagCodeList::default());
    let errors = dump_errors(&options);
    assert!(errors.have_errors);
    assert_eq!(
        errors.output,
        "error: --exit-fail-on must be given at least one category or code\n"
    );

    let mut options = Options::default();
    options.lsp_server = true;
    options.output_format = OutputFormat::DefaultFormat;
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(errors.output, "");

    for format in [OutputFormat::GnuLike, OutputFormat::VimQflistJson] {
        let mut options = Options::default();
        options.lsp_server = true;
        options.output_format = format;
        let errors = dump_errors(&options);
        assert!(!errors.have_errors);
        assert_eq!(
            errors.output,
            "warning: --output-format ignored with --lsp-server\n"
        );
    }

    let mut options = Options::default();
    options.lsp_server = true;
    options.has_config_file = true;
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: --config-file ignored in --lsp-server mode\n"
    );

    let mut options = Options::default();
    options.lsp_server = true;
    options.files_to_lint.push(jetlint_cli::FileToLint {
        path: "file.js".to_string(),
        config_file: None,
        path_for_config_search: None,
        language: None,
        is_stdin: false,
        vim_bufnr: None,
    });
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: ignoring files given on command line in --lsp-server mode\n"
    );

    let mut options = Options::default();
    options.lsp_server = true;
    options.exit_fail_on.add(parse_diag_code_list("E0001"));
    let errors = dump_errors(&options);
    assert!(!errors.have_errors);
    assert_eq!(
        errors.output,
        "warning: --exit-fail-on ignored with --lsp-server\n"
    );
}
