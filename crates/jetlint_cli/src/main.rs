//! jetlint: find bugs in JavaScript and TypeScript programs.
//!
//! Usage:
//!   jetlint [options] [file...]

use jetlint_analyzer::{AnalyzerOptions, GlobalDeclaredVariableSet};
use jetlint_cli::options::{get_language, parse_options, InputFileLanguage, OutputFormat};
use jetlint_cli::output;
use jetlint_core::arena::LintArena;
use jetlint_engine::{parse_and_analyze, ParserOptions};
use std::io::Read;
use std::process::ExitCode;

const HELP: &str = "\
Usage: jetlint [options] [file...]

Options:
  --config-file=PATH            use PATH for following input files
  --exit-fail-on=CODES          comma-separated codes/categories that fail
  --language=LANGUAGE           language of the next input file
  --lsp-server                  run as a Language Server Protocol server
  --output-format=FORMAT        gnu-like, vim-qflist-json, or emacs-lisp
  --path-for-config-search=PATH config search origin for the next file
  --stdin, -                    lint standard input
  --vim-file-bufnr=N            vim buffer number of the next file
  --debug-parser-visits         trace parser visits to stderr
  --snarky                      opinionated diagnostic wording
  -h, --help                    print this help
  -v, --version                 print the version
";

fn main() -> ExitCode {
    let options = parse_options(std::env::args().skip(1));

    let mut stderr = std::io::stderr();
    let have_option_errors = options.dump_errors(&mut stderr);
    if have_option_errors {
        return ExitCode::from(2);
    }

    if options.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }
    if options.version {
        println!("jetlint {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    if options.list_debug_apps {
        println!("parser-visits");
        return ExitCode::SUCCESS;
    }
    if options.lsp_server {
        eprintln!("error: the LSP transport is not part of this build");
        return ExitCode::from(1);
    }
    if options.files_to_lint.is_empty() {
        eprintln!("error: expected file name");
        return ExitCode::from(1);
    }

    let mut globals = GlobalDeclaredVariableSet::default_globals();
    globals.add_group(jetlint_engine::GlobalGroup::Browser);
    globals.add_group(jetlint_engine::GlobalGroup::Node);

    let mut any_exit_failure = false;
    let stdout = std::io::stdout();

    for file in &options.files_to_lint {
        let raw = if file.is_stdin {
            let mut buffer = String::new();
            if let Err(error) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("error: failed to read stdin: {error}");
                return ExitCode::from(1);
            }
            buffer
        } else {
            match std::fs::read_to_string(&file.path) {
                Ok(contents) => contents,
                Err(error) => {
                    eprintln!("error: failed to read {}: {error}", file.path);
                    return ExitCode::from(1);
                }
            }
        };

        // The arena owns the buffer for the duration of one lint pass;
        // dropping it frees everything at once.
        let arena = LintArena::new();
        let source = arena.alloc_str(&raw);

        let language = get_language(&file.path, file.language);
        let parser_options = parser_options_for(language, options.print_parser_visits);
        let result = parse_and_analyze(
            source,
            parser_options,
            AnalyzerOptions::default(),
            &globals,
        );

        for diag in result.diagnostics.iter() {
            if options.exit_fail_on.is_present(diag.kind) {
                any_exit_failure = true;
            }
        }

        let mut out = stdout.lock();
        match options.output_format {
            OutputFormat::DefaultFormat | OutputFormat::GnuLike => output::render_gnu_like(
                &mut out,
                &file.path,
                result.diagnostics.diagnostics(),
                &result.locator,
                options.snarky,
            ),
            OutputFormat::VimQflistJson => output::render_vim_qflist_json(
                &mut out,
                &file.path,
                file.vim_bufnr,
                result.diagnostics.diagnostics(),
                &result.locator,
                options.snarky,
            ),
            OutputFormat::EmacsLisp => output::render_emacs_lisp(
                &mut out,
                result.diagnostics.diagnostics(),
                options.snarky,
            ),
        }
    }

    if any_exit_failure {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn parser_options_for(language: InputFileLanguage, print_parser_visits: bool) -> ParserOptions {
    let mut parser_options = ParserOptions {
        print_parser_visits,
        ..ParserOptions::default()
    };
    match language {
        InputFileLanguage::Default => unreachable!("get_language resolves Default"),
        InputFileLanguage::Javascript => {}
        InputFileLanguage::JavascriptJsx => parser_options.jsx = true,
        InputFileLanguage::Typescript => parser_options.typescript = true,
        InputFileLanguage::TypescriptDefinition => {
            parser_options.typescript = true;
            parser_options.typescript_definition = true;
        }
        InputFileLanguage::TypescriptJsx => {
            parser_options.typescript = true;
            parser_options.jsx = true;
        }
    }
    parser_options
}
