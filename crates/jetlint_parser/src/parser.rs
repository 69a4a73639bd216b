//! The parser implementation.
//!
//! A recursive descent statement parser with a Pratt expression core.
//! Instead of building a syntax tree it drives a `ParseVisitor` with
//! declarations, uses, and scope boundaries; error recovery always
//! keeps the enter/exit scope events balanced.
//!
//! Identifier expressions are held back one step (`ExprResult::Ident`)
//! so that `x = 1` can become a `visit_variable_assignment` instead of
//! a use once the `=` is seen; everything else visits eagerly in
//! source order.

use jetlint_core::intern::{InternedString, StringInterner};
use jetlint_core::text::TextSpan;
use jetlint_diagnostics::{DiagKind, DiagnosticCollection};
use jetlint_scanner::{Scanner, ScannerState};
use jetlint_syntax::syntax_kind::{ContextualKeyword, SyntaxKind};
use jetlint_syntax::types::{DeclFlags, DeclKind, Identifier};
use jetlint_syntax::visitor::ParseVisitor;

use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};

/// Maximum recursion depth to prevent stack overflow on deeply nested
/// input.
const MAX_RECURSION_DEPTH: u32 = 200;

/// Options selected by the driver per input file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Enable TypeScript-only productions.
    pub typescript: bool,
    /// Restrict to the `.d.ts` subset; implies `typescript` and an
    /// ambient top level.
    pub typescript_definition: bool,
    /// Enable JSX element parsing inside expressions.
    pub jsx: bool,
    /// Trace every visitor event to stderr.
    pub print_parser_visits: bool,
}

impl ParserOptions {
    pub fn typescript(&self) -> bool {
        self.typescript || self.typescript_definition
    }
}

/// A snapshot of parser state for speculative parsing. Restoring also
/// discards tentative diagnostics.
struct Checkpoint {
    scanner: ScannerState,
    diag_watermark: usize,
    prev_token_end: u32,
}

/// What an expression parse left behind. A bare identifier is held back
/// so the caller can turn it into a use, an assignment target, or an
/// arrow parameter.
#[derive(Clone, Copy)]
enum ExprResult {
    /// A plain identifier, not yet visited.
    Ident(Identifier),
    /// A member or index access; a valid assignment target.
    AssignmentTarget,
    /// Anything else; already fully visited.
    Other,
}

pub struct Parser<'src> {
    scanner: Scanner<'src>,
    options: ParserOptions,
    diags: DiagnosticCollection,
    /// End offset of the previous token; ASI diagnostics anchor here.
    prev_token_end: u32,
    // Context
    in_async_function: bool,
    in_generator_function: bool,
    in_ambient_context: bool,
    /// In a `for (...;...)` head the `in` operator is not a binary
    /// operator.
    allow_in_operator: bool,
    /// Set once a TypeScript-only construct was already reported in
    /// JavaScript mode, so nested annotations stay quiet.
    suppress_typescript_diags: bool,
    recursion_depth: u32,
    // Pre-interned names the parser compares against.
    await_name: InternedString,
    yield_name: InternedString,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, options: ParserOptions, interner: StringInterner) -> Self {
        let await_name = interner.intern_static("await");
        let yield_name = interner.intern_static("yield");
        let scanner = Scanner::new(source, interner);
        Self {
            scanner,
            options,
            diags: DiagnosticCollection::new(),
            prev_token_end: 0,
            in_async_function: false,
            in_generator_function: false,
            in_ambient_context: options.typescript_definition,
            allow_in_operator: true,
            suppress_typescript_diags: false,
            recursion_depth: 0,
            await_name,
            yield_name,
        }
    }

    /// Parse a whole module, driving the visitor, then emit
    /// `visit_end_of_module`.
    pub fn parse_and_visit_module<V: ParseVisitor>(&mut self, v: &mut V) {
        self.scanner.skip_shebang();
        self.advance();
        self.parse_statements_until(v, &[]);
        v.visit_end_of_module();
    }

    /// The diagnostics produced so far.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diags
    }

    pub fn take_diagnostics(self) -> DiagnosticCollection {
        self.diags
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn kind(&self) -> SyntaxKind {
        self.scanner.kind()
    }

    #[inline]
    fn token_span(&self) -> TextSpan {
        self.scanner.token_span()
    }

    #[inline]
    fn advance(&mut self) -> SyntaxKind {
        self.prev_token_end = self.scanner.token_end();
        self.scanner.scan(&mut self.diags)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            scanner: self.scanner.save_state(),
            diag_watermark: self.diags.watermark(),
            prev_token_end: self.prev_token_end,
        }
    }

    fn rewind(&mut self, checkpoint: Checkpoint) {
        self.scanner.restore_state(checkpoint.scanner);
        self.diags.rewind(checkpoint.diag_watermark);
        self.prev_token_end = checkpoint.prev_token_end;
    }

    /// Look at the token after the current one without committing.
    fn peek(&mut self) -> jetlint_scanner::Token {
        let cp = self.checkpoint();
        self.advance();
        let token = *self.scanner.token();
        self.rewind(cp);
        token
    }

    fn at_contextual(&self, keyword: ContextualKeyword) -> bool {
        self.kind() == SyntaxKind::Identifier && self.scanner.token().is_contextual(keyword)
    }

    /// The current token as an `Identifier` payload. Only meaningful
    /// for identifier, keyword, and private-identifier tokens.
    fn cur_identifier(&self) -> Identifier {
        let token = self.scanner.token();
        let name = token
            .ident
            .unwrap_or_else(|| self.scanner.interner().intern(""));
        Identifier::new(name, token.span())
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the expected token or report `UnexpectedToken` without
    /// consuming anything.
    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.kind() == kind {
            self.advance();
            true
        } else {
            self.report(DiagKind::UnexpectedToken, "token", self.token_span());
            false
        }
    }

    fn report(&mut self, kind: DiagKind, label: &'static str, span: TextSpan) {
        self.diags.report(kind, label, span);
    }

    /// Report with an empty span at the end of the previous token; used
    /// by every "missing semicolon" diagnostic.
    fn report_at_prev_end(&mut self, kind: DiagKind, label: &'static str) {
        let pos = self.prev_token_end;
        self.diags.report(kind, label, TextSpan::empty(pos));
    }

    /// Consume a `;`, or apply ASI: a preceding line break, `}`, or end
    /// of file terminate the statement silently. Otherwise report
    /// `missing_kind`.
    fn skip_semicolon_or_asi(&mut self, missing_kind: DiagKind) {
        if self.kind() == SyntaxKind::SemicolonToken {
            self.advance();
            return;
        }
        if self.scanner.has_preceding_line_break()
            || self.kind() == SyntaxKind::CloseBraceToken
            || self.kind() == SyntaxKind::EndOfFileToken
        {
            return;
        }
        self.report_at_prev_end(missing_kind, "expected_semicolon");
    }

    /// Whether the current token can be a binding name (identifier,
    /// contextual keyword, or `await`/`yield` outside their contexts).
    fn at_binding_name(&self) -> bool {
        matches!(
            self.kind(),
            SyntaxKind::Identifier | SyntaxKind::AwaitKeyword | SyntaxKind::YieldKeyword
        )
    }

    /// Declare a variable, applying ambient-context flags and the
    /// `await`/`yield` context checks.
    fn declare<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        name: Identifier,
        kind: DeclKind,
        mut flags: DeclFlags,
    ) {
        if self.in_ambient_context {
            flags |= DeclFlags::DECLARE | DeclFlags::AMBIENT;
        }
        if name.name == self.await_name && self.in_async_function {
            self.report(DiagKind::CannotDeclareAwaitInAsyncFunction, "name", name.span);
        }
        if name.name == self.yield_name && self.in_generator_function {
            self.report(
                DiagKind::CannotDeclareYieldInGeneratorFunction,
                "name",
                name.span,
            );
        }
        v.visit_variable_declaration(name, kind, flags);
    }

    /// Report a TypeScript-only construct in JavaScript mode, once per
    /// outermost construct.
    fn report_typescript_only(&mut self, kind: DiagKind, label: &'static str, span: TextSpan) {
        if !self.options.typescript() && !self.suppress_typescript_diags {
            self.report(kind, label, span);
        }
    }

    fn with_recursion_guard<R>(
        &mut self,
        fallback: R,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            return fallback;
        }
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statements_until<V: ParseVisitor>(&mut self, v: &mut V, stop: &[SyntaxKind]) {
        while self.kind() != SyntaxKind::EndOfFileToken && !stop.contains(&self.kind()) {
            let saved_pos = self.scanner.token_begin();
            self.parse_statement(v);
            // Error recovery: guarantee forward progress, then resync
            // to the nearest statement start.
            if self.scanner.token_begin() == saved_pos
                && self.kind() != SyntaxKind::EndOfFileToken
                && !stop.contains(&self.kind())
            {
                self.advance();
                self.skip_to_next_statement(stop);
            }
        }
    }

    /// Skip tokens until one that can start a new statement. Prevents
    /// cascading errors from a single parse failure.
    fn skip_to_next_statement(&mut self, stop: &[SyntaxKind]) {
        loop {
            let kind = self.kind();
            if kind == SyntaxKind::EndOfFileToken || stop.contains(&kind) {
                return;
            }
            match kind {
                SyntaxKind::VarKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::IfKeyword
                | SyntaxKind::ForKeyword
                | SyntaxKind::WhileKeyword
                | SyntaxKind::DoKeyword
                | SyntaxKind::SwitchKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::ThrowKeyword
                | SyntaxKind::TryKeyword
                | SyntaxKind::BreakKeyword
                | SyntaxKind::ContinueKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::SemicolonToken
                | SyntaxKind::CloseBraceToken => return,
                SyntaxKind::Identifier
                    if matches!(
                        self.scanner.token().contextual,
                        Some(ContextualKeyword::Let)
                            | Some(ContextualKeyword::Interface)
                            | Some(ContextualKeyword::Type)
                            | Some(ContextualKeyword::Namespace)
                            | Some(ContextualKeyword::Declare)
                    ) =>
                {
                    return
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn parse_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.with_recursion_guard((), |p| p.parse_statement_inner(v));
    }

    fn parse_statement_inner<V: ParseVisitor>(&mut self, v: &mut V) {
        match self.kind() {
            SyntaxKind::SemicolonToken => {
                self.advance();
            }
            SyntaxKind::OpenBraceToken => self.parse_block(v),
            SyntaxKind::VarKeyword => {
                self.advance();
                self.parse_variable_declarators(v, DeclKind::Var, DeclFlags::NONE);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::ConstKeyword => {
                if self.peek().kind == SyntaxKind::EnumKeyword {
                    self.advance();
                    self.parse_enum_declaration(v, DeclFlags::NONE);
                } else {
                    self.advance();
                    self.parse_variable_declarators(v, DeclKind::Const, DeclFlags::NONE);
                    self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                }
            }
            SyntaxKind::FunctionKeyword => {
                self.parse_function_declaration(v, DeclFlags::NONE, false)
            }
            SyntaxKind::ClassKeyword => self.parse_class_declaration(v, DeclFlags::NONE),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(v, DeclFlags::NONE),
            SyntaxKind::IfKeyword => self.parse_if_statement(v),
            SyntaxKind::WhileKeyword => self.parse_while_statement(v),
            SyntaxKind::DoKeyword => self.parse_do_statement(v),
            SyntaxKind::ForKeyword => self.parse_for_statement(v),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(v),
            SyntaxKind::TryKeyword => self.parse_try_statement(v),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(v),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(v),
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => {
                self.advance();
                if self.kind() == SyntaxKind::Identifier
                    && !self.scanner.has_preceding_line_break()
                {
                    self.advance(); // label
                }
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::DebuggerKeyword => {
                self.advance();
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::WithKeyword => self.parse_with_statement(v),
            SyntaxKind::ImportKeyword => self.parse_import_declaration(v),
            SyntaxKind::ExportKeyword => self.parse_export_declaration(v),
            SyntaxKind::Identifier => self.parse_identifier_statement(v),
            _ => self.parse_expression_statement(v),
        }
    }

    /// Statements that begin with an identifier: contextual-keyword
    /// declarations, labels, or a plain expression statement.
    fn parse_identifier_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        match self.scanner.token().contextual {
            Some(ContextualKeyword::Let) => {
                let next = self.peek();
                if next.kind == SyntaxKind::Identifier
                    || next.kind == SyntaxKind::OpenBracketToken
                    || next.kind == SyntaxKind::OpenBraceToken
                    || next.kind == SyntaxKind::AwaitKeyword
                    || next.kind == SyntaxKind::YieldKeyword
                {
                    self.advance();
                    self.parse_variable_declarators(v, DeclKind::Let, DeclFlags::NONE);
                    self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                    return;
                }
            }
            Some(ContextualKeyword::Interface) => {
                let next = self.peek();
                let next_is_name = next.kind.is_identifier_or_keyword();
                let newline_after = next.has_preceding_line_break();
                if next_is_name && (self.options.typescript() || !newline_after) {
                    self.parse_interface_declaration(v, DeclFlags::NONE);
                    return;
                }
            }
            Some(ContextualKeyword::Type) => {
                let next = self.peek();
                if next.kind.is_identifier_or_keyword() && !next.has_preceding_line_break() {
                    self.parse_type_alias_declaration(v, DeclFlags::NONE);
                    return;
                }
            }
            Some(ContextualKeyword::Namespace) | Some(ContextualKeyword::Module) => {
                let next = self.peek();
                if (next.kind.is_identifier_or_keyword()
                    || next.kind == SyntaxKind::StringLiteral)
                    && !next.has_preceding_line_break()
                {
                    self.parse_namespace_declaration(v, DeclFlags::NONE);
                    return;
                }
            }
            Some(ContextualKeyword::Declare) => {
                if !self.peek().has_preceding_line_break() && self.at_declare_target() {
                    self.parse_declare_statement(v);
                    return;
                }
            }
            Some(ContextualKeyword::Async) => {
                let next = self.peek();
                if next.kind == SyntaxKind::FunctionKeyword && !next.has_preceding_line_break() {
                    self.advance();
                    self.parse_function_declaration(v, DeclFlags::NONE, true);
                    return;
                }
            }
            Some(ContextualKeyword::Abstract) => {
                let next = self.peek();
                if next.kind == SyntaxKind::ClassKeyword && !next.has_preceding_line_break() {
                    self.advance();
                    self.parse_class_declaration(v, DeclFlags::NONE);
                    return;
                }
            }
            _ => {}
        }
        // Label?
        if self.peek().kind == SyntaxKind::ColonToken {
            self.advance();
            self.advance();
            self.parse_statement(v);
            return;
        }
        self.parse_expression_statement(v);
    }

    fn at_declare_target(&mut self) -> bool {
        let next = self.peek();
        match next.kind {
            SyntaxKind::ClassKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::VarKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::EnumKeyword => true,
            SyntaxKind::Identifier => matches!(
                next.contextual,
                Some(ContextualKeyword::Let)
                    | Some(ContextualKeyword::Namespace)
                    | Some(ContextualKeyword::Module)
                    | Some(ContextualKeyword::Interface)
                    | Some(ContextualKeyword::Type)
                    | Some(ContextualKeyword::Global)
                    | Some(ContextualKeyword::Abstract)
                    | Some(ContextualKeyword::Async)
            ),
            _ => false,
        }
    }

    fn parse_declare_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        let declare_span = self.token_span();
        self.report_typescript_only(
            DiagKind::DeclareKeywordNotAllowedInJavaScript,
            "declare_keyword",
            declare_span,
        );
        self.advance();
        let was_ambient = self.in_ambient_context;
        self.in_ambient_context = true;
        match self.kind() {
            SyntaxKind::ClassKeyword => self.parse_class_declaration(v, DeclFlags::DECLARE),
            SyntaxKind::FunctionKeyword => {
                self.parse_function_declaration(v, DeclFlags::DECLARE, false)
            }
            SyntaxKind::VarKeyword => {
                self.advance();
                self.parse_variable_declarators(v, DeclKind::Var, DeclFlags::DECLARE);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::ConstKeyword => {
                if self.peek().kind == SyntaxKind::EnumKeyword {
                    self.advance();
                    self.parse_enum_declaration(v, DeclFlags::DECLARE);
                } else {
                    self.advance();
                    self.parse_variable_declarators(v, DeclKind::Const, DeclFlags::DECLARE);
                    self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                }
            }
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(v, DeclFlags::DECLARE),
            SyntaxKind::Identifier => match self.scanner.token().contextual {
                Some(ContextualKeyword::Let) => {
                    self.advance();
                    self.parse_variable_declarators(v, DeclKind::Let, DeclFlags::DECLARE);
                    self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                }
                Some(ContextualKeyword::Namespace)
                | Some(ContextualKeyword::Module)
                | Some(ContextualKeyword::Global) => {
                    self.parse_namespace_declaration(v, DeclFlags::DECLARE)
                }
                Some(ContextualKeyword::Interface) => {
                    self.parse_interface_declaration(v, DeclFlags::DECLARE)
                }
                Some(ContextualKeyword::Type) => {
                    self.parse_type_alias_declaration(v, DeclFlags::DECLARE)
                }
                Some(ContextualKeyword::Abstract) => {
                    self.advance();
                    self.parse_class_declaration(v, DeclFlags::DECLARE);
                }
                Some(ContextualKeyword::Async) => {
                    self.advance();
                    self.parse_function_declaration(v, DeclFlags::DECLARE, true);
                }
                _ => self.parse_expression_statement(v),
            },
            _ => self.parse_expression_statement(v),
        }
        self.in_ambient_context = was_ambient;
    }

    fn parse_block<V: ParseVisitor>(&mut self, v: &mut V) {
        let open_span = self.token_span();
        v.visit_enter_block_scope();
        self.advance();
        self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
        if !self.eat(SyntaxKind::CloseBraceToken) {
            self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
        }
        v.visit_exit_block_scope();
    }

    // ========================================================================
    // Variable declarations
    // ========================================================================

    /// Parse the declarator list after `var`/`let`/`const`.
    fn parse_variable_declarators<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        kind: DeclKind,
        flags: DeclFlags,
    ) {
        loop {
            let mut names = Vec::new();
            if !self.parse_binding_target(v, &mut names) {
                self.report(DiagKind::MissingVariableName, "where", self.token_span());
                break;
            }
            if self.kind() == SyntaxKind::ColonToken {
                self.parse_type_annotation(v);
            }
            if self.eat(SyntaxKind::EqualsToken) {
                let init = self.parse_assignment_expression(v);
                self.flush_use(v, init);
            }
            // The binding comes into scope after its initializer runs.
            for name in names {
                self.declare(v, name, kind, flags);
            }
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
    }

    /// Parse a binding name or destructuring pattern, collecting the
    /// declared names. Computed keys and default values visit their
    /// uses inline. Returns false if no binding was present.
    fn parse_binding_target<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        names: &mut Vec<Identifier>,
    ) -> bool {
        match self.kind() {
            SyntaxKind::Identifier | SyntaxKind::AwaitKeyword | SyntaxKind::YieldKeyword => {
                names.push(self.cur_identifier());
                self.advance();
                true
            }
            SyntaxKind::OpenBraceToken => {
                self.advance();
                while self.kind() != SyntaxKind::CloseBraceToken
                    && self.kind() != SyntaxKind::EndOfFileToken
                {
                    if self.eat(SyntaxKind::DotDotDotToken) {
                        self.parse_binding_target(v, names);
                    } else if self.kind() == SyntaxKind::OpenBracketToken {
                        // Computed key: `{ [expr]: binding }`
                        self.advance();
                        let key = self.parse_assignment_expression(v);
                        self.flush_use(v, key);
                        self.expect(SyntaxKind::CloseBracketToken);
                        self.expect(SyntaxKind::ColonToken);
                        self.parse_binding_target(v, names);
                    } else if self.kind().is_identifier_or_keyword()
                        || self.kind() == SyntaxKind::StringLiteral
                        || self.kind() == SyntaxKind::NumericLiteral
                    {
                        let shorthand = self.cur_identifier();
                        let is_name = self.at_binding_name();
                        self.advance();
                        if self.eat(SyntaxKind::ColonToken) {
                            self.parse_binding_target(v, names);
                        } else if is_name {
                            names.push(shorthand);
                        }
                    } else {
                        break;
                    }
                    if self.eat(SyntaxKind::EqualsToken) {
                        let default = self.parse_assignment_expression(v);
                        self.flush_use(v, default);
                    }
                    if !self.eat(SyntaxKind::CommaToken) {
                        break;
                    }
                }
                self.expect(SyntaxKind::CloseBraceToken);
                true
            }
            SyntaxKind::OpenBracketToken => {
                self.advance();
                while self.kind() != SyntaxKind::CloseBracketToken
                    && self.kind() != SyntaxKind::EndOfFileToken
                {
                    if self.kind() == SyntaxKind::CommaToken {
                        self.advance(); // hole
                        continue;
                    }
                    self.eat(SyntaxKind::DotDotDotToken);
                    self.parse_binding_target(v, names);
                    if self.eat(SyntaxKind::EqualsToken) {
                        let default = self.parse_assignment_expression(v);
                        self.flush_use(v, default);
                    }
                    if !self.eat(SyntaxKind::CommaToken) {
                        break;
                    }
                }
                self.expect(SyntaxKind::CloseBracketToken);
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    fn parse_function_declaration<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        flags: DeclFlags,
        is_async: bool,
    ) {
        let function_span = self.token_span();
        self.advance(); // `function`
        let is_generator = self.eat(SyntaxKind::AsteriskToken);
        if self.at_binding_name() {
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::Function, flags);
        } else {
            self.report(
                DiagKind::MissingNameInFunctionStatement,
                "function_keyword",
                function_span,
            );
        }
        self.parse_function_rest(v, is_async, is_generator, DeclKind::Parameter);
    }

    /// Parse everything after the function name: generics, parameters,
    /// return type, and body. Enters and exits the function scope.
    fn parse_function_rest<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        is_async: bool,
        is_generator: bool,
        param_kind: DeclKind,
    ) {
        v.visit_enter_function_scope();
        let saved_async = self.in_async_function;
        let saved_generator = self.in_generator_function;
        self.in_async_function = is_async;
        self.in_generator_function = is_generator;

        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.kind() == SyntaxKind::OpenParenToken {
            self.parse_parameter_list(v, param_kind);
        } else {
            self.report_at_prev_end(DiagKind::MissingFunctionParameterList, "expected_parameter_list");
        }
        if self.kind() == SyntaxKind::ColonToken {
            self.parse_return_type_annotation(v);
        }
        if self.kind() == SyntaxKind::OpenBraceToken {
            let open_span = self.token_span();
            self.advance();
            v.visit_enter_function_scope_body();
            self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
            if !self.eat(SyntaxKind::CloseBraceToken) {
                self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
            }
        } else if !self.in_ambient_context {
            self.report_at_prev_end(DiagKind::MissingBodyForFunction, "expected_body");
        } else {
            self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
        }

        self.in_async_function = saved_async;
        self.in_generator_function = saved_generator;
        v.visit_exit_function_scope();
    }

    /// Parse `(param, ...)`. Caller must have checked for `(`.
    fn parse_parameter_list<V: ParseVisitor>(&mut self, v: &mut V, param_kind: DeclKind) {
        self.advance(); // `(`
        while self.kind() != SyntaxKind::CloseParenToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            let is_rest = self.eat(SyntaxKind::DotDotDotToken);
            // TypeScript parameter property modifiers on constructor
            // parameters (`public x`, `readonly y`).
            while self.options.typescript()
                && matches!(
                    self.scanner.token().contextual,
                    Some(ContextualKeyword::Public)
                        | Some(ContextualKeyword::Private)
                        | Some(ContextualKeyword::Protected)
                        | Some(ContextualKeyword::Readonly)
                        | Some(ContextualKeyword::Override)
                )
                && self.peek().kind.is_identifier_or_keyword()
            {
                self.advance();
            }
            let mut names = Vec::new();
            if !self.parse_binding_target(v, &mut names) {
                break;
            }
            self.eat(SyntaxKind::QuestionToken);
            if self.kind() == SyntaxKind::ColonToken {
                self.parse_type_annotation(v);
            }
            if self.eat(SyntaxKind::EqualsToken) {
                let default = self.parse_assignment_expression(v);
                self.flush_use(v, default);
            }
            for name in names {
                self.declare(v, name, param_kind, DeclFlags::NONE);
            }
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            } else if is_rest && self.kind() != SyntaxKind::CloseParenToken {
                self.report_at_prev_end(
                    DiagKind::CommaNotAllowedAfterSpreadParameter,
                    "comma",
                );
            }
        }
        self.expect(SyntaxKind::CloseParenToken);
    }

    // ========================================================================
    // Classes
    // ========================================================================

    fn parse_class_declaration<V: ParseVisitor>(&mut self, v: &mut V, flags: DeclFlags) {
        let class_span = self.token_span();
        self.advance(); // `class`
        let name = if self.at_binding_name() {
            let name = self.cur_identifier();
            self.advance();
            Some(name)
        } else {
            self.report(DiagKind::MissingNameInClassStatement, "class_keyword", class_span);
            None
        };
        self.parse_class_tail(v, name);
        // The class binding is in scope only after the whole class.
        if let Some(name) = name {
            self.declare(v, name, DeclKind::Class, flags);
        }
    }

    /// Heritage, body, and scope events shared by class statements and
    /// class expressions.
    fn parse_class_tail<V: ParseVisitor>(&mut self, v: &mut V, name: Option<Identifier>) {
        v.visit_enter_class_scope();
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.eat(SyntaxKind::ExtendsKeyword) {
            let base = self.parse_left_hand_side_expression(v);
            self.flush_use(v, base);
        }
        if self.at_contextual(ContextualKeyword::Implements) && self.options.typescript() {
            self.advance();
            loop {
                self.parse_type_reference(v);
                if !self.eat(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }
        v.visit_enter_class_scope_body(name);
        if self.kind() == SyntaxKind::OpenBraceToken {
            self.advance();
            while self.kind() != SyntaxKind::CloseBraceToken
                && self.kind() != SyntaxKind::EndOfFileToken
            {
                let saved_pos = self.scanner.token_begin();
                self.parse_class_member(v);
                if self.scanner.token_begin() == saved_pos {
                    self.advance();
                }
            }
            self.expect(SyntaxKind::CloseBraceToken);
        } else {
            self.report_at_prev_end(DiagKind::MissingBodyForClass, "expected_body");
        }
        v.visit_exit_class_scope();
    }

    fn parse_class_member<V: ParseVisitor>(&mut self, v: &mut V) {
        if self.eat(SyntaxKind::SemicolonToken) {
            return;
        }
        let mut is_async = false;
        let mut is_generator = false;
        // Modifiers; all of them are legal on class members.
        loop {
            match self.kind() {
                SyntaxKind::Identifier => {
                    let contextual = self.scanner.token().contextual;
                    let next = self.peek();
                    let continues = Self::starts_member_name(&next) && match contextual {
                        // ASI applies after `async`.
                        Some(ContextualKeyword::Async) => !next.has_preceding_line_break(),
                        _ => true,
                    };
                    match contextual {
                        Some(ContextualKeyword::Static) if next.kind == SyntaxKind::OpenBraceToken => {
                            // Static initialization block.
                            self.advance();
                            self.parse_block(v);
                            return;
                        }
                        Some(ContextualKeyword::Static)
                        | Some(ContextualKeyword::Readonly)
                        | Some(ContextualKeyword::Abstract)
                        | Some(ContextualKeyword::Override)
                        | Some(ContextualKeyword::Accessor)
                        | Some(ContextualKeyword::Declare)
                        | Some(ContextualKeyword::Public)
                        | Some(ContextualKeyword::Private)
                        | Some(ContextualKeyword::Protected)
                            if continues =>
                        {
                            self.advance();
                            continue;
                        }
                        Some(ContextualKeyword::Async) if continues => {
                            is_async = true;
                            self.advance();
                            continue;
                        }
                        Some(ContextualKeyword::Get) | Some(ContextualKeyword::Set)
                            if continues =>
                        {
                            self.advance();
                            continue;
                        }
                        _ => break,
                    }
                }
                SyntaxKind::AsteriskToken => {
                    is_generator = true;
                    self.advance();
                }
                _ => break,
            }
        }

        // Member name.
        let name: Option<Identifier> = match self.kind() {
            kind if kind.is_identifier_or_keyword() => {
                let name = self.cur_identifier();
                self.advance();
                Some(name)
            }
            SyntaxKind::PrivateIdentifier => {
                let name = self.cur_identifier();
                self.advance();
                Some(name)
            }
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                self.advance();
                None
            }
            SyntaxKind::OpenBracketToken => {
                self.advance();
                let key = self.parse_assignment_expression(v);
                self.flush_use(v, key);
                self.expect(SyntaxKind::CloseBracketToken);
                None
            }
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => None,
            _ => {
                self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                return;
            }
        };

        self.eat(SyntaxKind::QuestionToken);
        self.eat(SyntaxKind::ExclamationToken);

        if self.kind() == SyntaxKind::OpenParenToken || self.kind() == SyntaxKind::LessThanToken {
            // Method: the property is declared after the function scope.
            self.parse_function_rest(v, is_async, is_generator, DeclKind::Parameter);
            v.visit_property_declaration(name);
            return;
        }

        // Field.
        if self.kind() == SyntaxKind::ColonToken {
            self.parse_type_annotation(v);
        }
        if self.eat(SyntaxKind::EqualsToken) {
            let init = self.parse_assignment_expression(v);
            self.flush_use(v, init);
        }
        v.visit_property_declaration(name);
        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterField);
    }

    /// Whether a token can begin a class/interface member name (or a
    /// further modifier, which is itself an identifier).
    fn starts_member_name(token: &jetlint_scanner::Token) -> bool {
        token.kind.is_identifier_or_keyword()
            || matches!(
                token.kind,
                SyntaxKind::PrivateIdentifier
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::AsteriskToken
            )
    }

    // ========================================================================
    // Control flow statements
    // ========================================================================

    fn parse_parenthesized_condition<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        missing_kind: DiagKind,
        keyword_span: TextSpan,
        keyword_label: &'static str,
    ) {
        if self.kind() != SyntaxKind::OpenParenToken {
            self.report(missing_kind, keyword_label, keyword_span);
            return;
        }
        self.advance();
        let condition = self.parse_expression(v);
        self.flush_use(v, condition);
        self.expect(SyntaxKind::CloseParenToken);
    }

    fn parse_if_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        let if_span = self.token_span();
        self.advance();
        self.parse_parenthesized_condition(
            v,
            DiagKind::MissingConditionForIfStatement,
            if_span,
            "if_keyword",
        );
        self.parse_statement(v);
        if self.eat(SyntaxKind::ElseKeyword) {
            self.parse_statement(v);
        }
    }

    fn parse_while_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        let while_span = self.token_span();
        self.advance();
        self.parse_parenthesized_condition(
            v,
            DiagKind::MissingConditionForWhileStatement,
            while_span,
            "while_keyword",
        );
        self.parse_statement(v);
    }

    fn parse_do_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance();
        self.parse_statement(v);
        if self.eat(SyntaxKind::WhileKeyword) {
            let while_span = self.token_span();
            self.parse_parenthesized_condition(
                v,
                DiagKind::MissingConditionForWhileStatement,
                while_span,
                "while_keyword",
            );
        }
        self.eat(SyntaxKind::SemicolonToken);
    }

    fn parse_for_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance(); // `for`
        self.eat(SyntaxKind::AwaitKeyword); // `for await (... of ...)`
        if !self.expect(SyntaxKind::OpenParenToken) {
            self.parse_statement(v);
            return;
        }

        // Lexical loop bindings live in a scope around the whole loop.
        let mut entered_scope = false;
        let decl_kind = match self.kind() {
            SyntaxKind::VarKeyword => Some(DeclKind::Var),
            SyntaxKind::ConstKeyword => Some(DeclKind::Const),
            SyntaxKind::Identifier
                if self.at_contextual(ContextualKeyword::Let)
                    && matches!(
                        self.peek().kind,
                        SyntaxKind::Identifier
                            | SyntaxKind::OpenBracketToken
                            | SyntaxKind::OpenBraceToken
                    ) =>
            {
                Some(DeclKind::Let)
            }
            _ => None,
        };

        if let Some(kind) = decl_kind {
            if kind != DeclKind::Var {
                v.visit_enter_block_scope();
                entered_scope = true;
            }
            self.advance();
            let mut names = Vec::new();
            self.parse_binding_target(v, &mut names);
            if self.kind() == SyntaxKind::ColonToken {
                self.parse_type_annotation(v);
            }
            if self.kind() == SyntaxKind::InKeyword || self.at_contextual(ContextualKeyword::Of) {
                // `for (let x of xs)`: the iterated value is read
                // before the binding exists.
                self.advance();
                let iterated = self.parse_assignment_expression(v);
                self.flush_use(v, iterated);
                for name in names {
                    self.declare(v, name, kind, DeclFlags::NONE);
                }
            } else {
                if self.eat(SyntaxKind::EqualsToken) {
                    let saved = self.allow_in_operator;
                    self.allow_in_operator = false;
                    let init = self.parse_assignment_expression(v);
                    self.allow_in_operator = saved;
                    self.flush_use(v, init);
                }
                for name in names {
                    self.declare(v, name, kind, DeclFlags::NONE);
                }
                while self.eat(SyntaxKind::CommaToken) {
                    let mut more = Vec::new();
                    if !self.parse_binding_target(v, &mut more) {
                        break;
                    }
                    if self.kind() == SyntaxKind::ColonToken {
                        self.parse_type_annotation(v);
                    }
                    if self.eat(SyntaxKind::EqualsToken) {
                        let init = self.parse_assignment_expression(v);
                        self.flush_use(v, init);
                    }
                    for name in more {
                        self.declare(v, name, kind, DeclFlags::NONE);
                    }
                }
                self.parse_classic_for_rest(v);
            }
        } else if self.kind() == SyntaxKind::SemicolonToken {
            self.parse_classic_for_rest(v);
        } else {
            let saved = self.allow_in_operator;
            self.allow_in_operator = false;
            let init = self.parse_expression(v);
            self.allow_in_operator = saved;
            if self.kind() == SyntaxKind::InKeyword || self.at_contextual(ContextualKeyword::Of) {
                self.advance();
                let iterated = self.parse_assignment_expression(v);
                self.flush_use(v, iterated);
                // `for (x of xs)` writes to x on every iteration.
                match init {
                    ExprResult::Ident(id) => v.visit_variable_assignment(id),
                    _ => {}
                }
            } else {
                self.flush_use(v, init);
                self.parse_classic_for_rest(v);
            }
        }

        self.expect(SyntaxKind::CloseParenToken);
        self.parse_statement(v);
        if entered_scope {
            v.visit_exit_block_scope();
        }
    }

    /// The `; condition ; update` part of a classic `for`.
    fn parse_classic_for_rest<V: ParseVisitor>(&mut self, v: &mut V) {
        self.eat(SyntaxKind::SemicolonToken);
        if self.kind() != SyntaxKind::SemicolonToken {
            let condition = self.parse_expression(v);
            self.flush_use(v, condition);
        }
        self.eat(SyntaxKind::SemicolonToken);
        if self.kind() != SyntaxKind::CloseParenToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            let update = self.parse_expression(v);
            self.flush_use(v, update);
        }
    }

    fn parse_switch_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance();
        if self.eat(SyntaxKind::OpenParenToken) {
            let scrutinee = self.parse_expression(v);
            self.flush_use(v, scrutinee);
            self.expect(SyntaxKind::CloseParenToken);
        }
        if !self.expect(SyntaxKind::OpenBraceToken) {
            return;
        }
        v.visit_enter_block_scope();
        while self.kind() != SyntaxKind::CloseBraceToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            if self.eat(SyntaxKind::CaseKeyword) {
                let value = self.parse_expression(v);
                self.flush_use(v, value);
                self.expect(SyntaxKind::ColonToken);
            } else if self.eat(SyntaxKind::DefaultKeyword) {
                self.expect(SyntaxKind::ColonToken);
            } else {
                self.parse_statements_until(
                    v,
                    &[
                        SyntaxKind::CaseKeyword,
                        SyntaxKind::DefaultKeyword,
                        SyntaxKind::CloseBraceToken,
                    ],
                );
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
        v.visit_exit_block_scope();
    }

    fn parse_try_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance();
        if self.kind() == SyntaxKind::OpenBraceToken {
            self.parse_block(v);
        }
        let mut handled = false;
        if self.eat(SyntaxKind::CatchKeyword) {
            handled = true;
            // The catch parameter shares the catch body's block scope.
            v.visit_enter_block_scope();
            if self.eat(SyntaxKind::OpenParenToken) {
                let mut names = Vec::new();
                self.parse_binding_target(v, &mut names);
                if self.kind() == SyntaxKind::ColonToken {
                    self.parse_type_annotation(v);
                }
                for name in names {
                    self.declare(v, name, DeclKind::CatchParameter, DeclFlags::NONE);
                }
                self.expect(SyntaxKind::CloseParenToken);
            }
            if self.kind() == SyntaxKind::OpenBraceToken {
                let open_span = self.token_span();
                self.advance();
                self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
                if !self.eat(SyntaxKind::CloseBraceToken) {
                    self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
                }
            }
            v.visit_exit_block_scope();
        }
        if self.eat(SyntaxKind::FinallyKeyword) {
            handled = true;
            if self.kind() == SyntaxKind::OpenBraceToken {
                self.parse_block(v);
            }
        }
        if !handled {
            self.report_at_prev_end(DiagKind::MissingCatchOrFinally, "expected_catch_or_finally");
        }
    }

    fn parse_return_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance();
        if self.kind() != SyntaxKind::SemicolonToken
            && self.kind() != SyntaxKind::CloseBraceToken
            && self.kind() != SyntaxKind::EndOfFileToken
            && !self.scanner.has_preceding_line_break()
        {
            let value = self.parse_expression(v);
            self.flush_use(v, value);
        }
        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
    }

    fn parse_throw_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance();
        if self.kind() != SyntaxKind::SemicolonToken
            && self.kind() != SyntaxKind::CloseBraceToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            let value = self.parse_expression(v);
            self.flush_use(v, value);
        }
        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
    }

    fn parse_with_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance();
        if self.eat(SyntaxKind::OpenParenToken) {
            let object = self.parse_expression(v);
            self.flush_use(v, object);
            self.expect(SyntaxKind::CloseParenToken);
        }
        v.visit_enter_with_scope();
        self.parse_statement(v);
        v.visit_exit_with_scope();
    }

    fn parse_expression_statement<V: ParseVisitor>(&mut self, v: &mut V) {
        let before = self.scanner.token_begin();
        let result = self.parse_expression(v);
        self.flush_use(v, result);
        if self.scanner.token_begin() == before {
            // Nothing was consumed; let the statement loop recover.
            return;
        }
        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
    }

    // ========================================================================
    // Imports and exports
    // ========================================================================

    fn parse_import_declaration<V: ParseVisitor>(&mut self, v: &mut V) {
        let next = self.peek();
        if next.kind == SyntaxKind::OpenParenToken || next.kind == SyntaxKind::DotToken {
            // `import(...)` / `import.meta`: an expression statement.
            self.parse_expression_statement(v);
            return;
        }
        self.advance(); // `import`

        if self.kind() == SyntaxKind::StringLiteral {
            self.advance();
            self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            return;
        }

        // `import type ...` (but not `import type from 'mod'`).
        if self.options.typescript()
            && self.at_contextual(ContextualKeyword::Type)
            && !matches!(self.peek().contextual, Some(ContextualKeyword::From))
            && self.peek().kind != SyntaxKind::CommaToken
        {
            self.advance();
        }

        let mut need_from = false;
        if self.at_binding_name() {
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::Import, DeclFlags::NONE);
            need_from = true;
            if !self.eat(SyntaxKind::CommaToken) {
                // fall through to `from`
            }
        }
        if self.kind() == SyntaxKind::AsteriskToken {
            self.advance();
            if self.at_contextual(ContextualKeyword::As) {
                self.advance();
                if self.at_binding_name() {
                    let name = self.cur_identifier();
                    self.advance();
                    self.declare(v, name, DeclKind::Import, DeclFlags::NONE);
                }
            }
            need_from = true;
        } else if self.kind() == SyntaxKind::OpenBraceToken {
            self.advance();
            while self.kind() != SyntaxKind::CloseBraceToken
                && self.kind() != SyntaxKind::EndOfFileToken
            {
                if self.options.typescript() && self.at_contextual(ContextualKeyword::Type) {
                    let after = self.peek();
                    if after.kind.is_identifier_or_keyword()
                        && !matches!(after.contextual, Some(ContextualKeyword::As))
                    {
                        self.advance();
                    }
                }
                if !self.kind().is_identifier_or_keyword()
                    && self.kind() != SyntaxKind::StringLiteral
                {
                    break;
                }
                let mut binding = self.cur_identifier();
                let binding_is_name = self.at_binding_name();
                self.advance();
                let mut aliased = false;
                if self.at_contextual(ContextualKeyword::As) {
                    self.advance();
                    if self.at_binding_name() {
                        binding = self.cur_identifier();
                        aliased = true;
                        self.advance();
                    }
                }
                if aliased || binding_is_name {
                    self.declare(v, binding, DeclKind::Import, DeclFlags::NONE);
                }
                if !self.eat(SyntaxKind::CommaToken) {
                    break;
                }
            }
            self.expect(SyntaxKind::CloseBraceToken);
            need_from = true;
        }
        if need_from {
            if self.at_contextual(ContextualKeyword::From) {
                self.advance();
            }
            if self.kind() == SyntaxKind::StringLiteral {
                self.advance();
            }
        }
        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
    }

    fn parse_export_declaration<V: ParseVisitor>(&mut self, v: &mut V) {
        self.advance(); // `export`
        match self.kind() {
            SyntaxKind::OpenBraceToken => {
                self.advance();
                let mut exported = Vec::new();
                while self.kind() != SyntaxKind::CloseBraceToken
                    && self.kind() != SyntaxKind::EndOfFileToken
                {
                    if !self.kind().is_identifier_or_keyword()
                        && self.kind() != SyntaxKind::StringLiteral
                    {
                        break;
                    }
                    let name = self.cur_identifier();
                    let is_name = self.kind().is_identifier_or_keyword();
                    self.advance();
                    if self.at_contextual(ContextualKeyword::As) {
                        self.advance();
                        if self.kind().is_identifier_or_keyword()
                            || self.kind() == SyntaxKind::StringLiteral
                        {
                            self.advance();
                        }
                    }
                    if is_name {
                        exported.push(name);
                    }
                    if !self.eat(SyntaxKind::CommaToken) {
                        break;
                    }
                }
                self.expect(SyntaxKind::CloseBraceToken);
                if self.at_contextual(ContextualKeyword::From) {
                    // Re-export: names resolve in the other module.
                    self.advance();
                    if self.kind() == SyntaxKind::StringLiteral {
                        self.advance();
                    }
                } else {
                    for name in exported {
                        v.visit_variable_use(name);
                    }
                }
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::AsteriskToken => {
                self.advance();
                if self.at_contextual(ContextualKeyword::As) {
                    self.advance();
                    if self.kind().is_identifier_or_keyword() {
                        self.advance();
                    }
                }
                if self.at_contextual(ContextualKeyword::From) {
                    self.advance();
                }
                if self.kind() == SyntaxKind::StringLiteral {
                    self.advance();
                }
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::DefaultKeyword => {
                self.advance();
                match self.kind() {
                    SyntaxKind::FunctionKeyword => {
                        self.parse_function_declaration(v, DeclFlags::EXPORT, false)
                    }
                    SyntaxKind::ClassKeyword => {
                        self.parse_class_declaration(v, DeclFlags::EXPORT)
                    }
                    SyntaxKind::Identifier
                        if self.at_contextual(ContextualKeyword::Async)
                            && self.peek().kind == SyntaxKind::FunctionKeyword =>
                    {
                        self.advance();
                        self.parse_function_declaration(v, DeclFlags::EXPORT, true);
                    }
                    _ => {
                        let value = self.parse_assignment_expression(v);
                        self.flush_use(v, value);
                        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                    }
                }
            }
            SyntaxKind::EqualsToken => {
                // TypeScript `export = expr;`
                self.advance();
                let value = self.parse_expression(v);
                self.flush_use(v, value);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::VarKeyword => {
                self.advance();
                self.parse_variable_declarators(v, DeclKind::Var, DeclFlags::EXPORT);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
            }
            SyntaxKind::ConstKeyword => {
                if self.peek().kind == SyntaxKind::EnumKeyword {
                    self.advance();
                    self.parse_enum_declaration(v, DeclFlags::EXPORT);
                } else {
                    self.advance();
                    self.parse_variable_declarators(v, DeclKind::Const, DeclFlags::EXPORT);
                    self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                }
            }
            SyntaxKind::FunctionKeyword => {
                self.parse_function_declaration(v, DeclFlags::EXPORT, false)
            }
            SyntaxKind::ClassKeyword => self.parse_class_declaration(v, DeclFlags::EXPORT),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(v, DeclFlags::EXPORT),
            SyntaxKind::Identifier => match self.scanner.token().contextual.clone() {
                Some(ContextualKeyword::Let) => {
                    self.advance();
                    self.parse_variable_declarators(v, DeclKind::Let, DeclFlags::EXPORT);
                    self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
                }
                Some(ContextualKeyword::Interface) => {
                    self.parse_interface_declaration(v, DeclFlags::EXPORT)
                }
                Some(ContextualKeyword::Type) => {
                    self.parse_type_alias_declaration(v, DeclFlags::EXPORT)
                }
                Some(ContextualKeyword::Namespace) | Some(ContextualKeyword::Module) => {
                    self.parse_namespace_declaration(v, DeclFlags::EXPORT)
                }
                Some(ContextualKeyword::Declare) => self.parse_declare_statement(v),
                Some(ContextualKeyword::Async)
                    if self.peek().kind == SyntaxKind::FunctionKeyword =>
                {
                    self.advance();
                    self.parse_function_declaration(v, DeclFlags::EXPORT, true);
                }
                Some(ContextualKeyword::Abstract)
                    if self.peek().kind == SyntaxKind::ClassKeyword =>
                {
                    self.advance();
                    self.parse_class_declaration(v, DeclFlags::EXPORT);
                }
                _ => {
                    self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                }
            },
            _ => {
                self.report(DiagKind::UnexpectedToken, "token", self.token_span());
            }
        }
    }

    // ========================================================================
    // TypeScript declarations
    // ========================================================================

    fn parse_type_alias_declaration<V: ParseVisitor>(&mut self, v: &mut V, flags: DeclFlags) {
        let type_span = self.token_span();
        self.report_typescript_only(
            DiagKind::TypeScriptTypeAliasesNotAllowedInJavaScript,
            "type_keyword",
            type_span,
        );
        let suppressed = self.suppress_typescript_diags;
        self.suppress_typescript_diags = true;
        self.advance(); // `type`
        if self.kind().is_identifier_or_keyword() {
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::TypeAlias, flags);
        }
        v.visit_enter_type_scope();
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.expect(SyntaxKind::EqualsToken) {
            self.parse_type(v);
        }
        v.visit_exit_type_scope();
        self.suppress_typescript_diags = suppressed;
        self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterStatement);
    }

    fn parse_enum_declaration<V: ParseVisitor>(&mut self, v: &mut V, flags: DeclFlags) {
        let enum_span = self.token_span();
        self.report_typescript_only(
            DiagKind::TypeScriptEnumsNotAllowedInJavaScript,
            "enum_keyword",
            enum_span,
        );
        self.advance(); // `enum`
        if self.kind().is_identifier_or_keyword() {
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::Enum, flags);
        }
        if !self.expect(SyntaxKind::OpenBraceToken) {
            return;
        }
        while self.kind() != SyntaxKind::CloseBraceToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            match self.kind() {
                kind if kind.is_identifier_or_keyword() => {
                    self.advance();
                }
                SyntaxKind::StringLiteral => {
                    self.advance();
                }
                SyntaxKind::OpenBracketToken => {
                    self.advance();
                    let key = self.parse_assignment_expression(v);
                    self.flush_use(v, key);
                    self.expect(SyntaxKind::CloseBracketToken);
                }
                _ => break,
            }
            if self.eat(SyntaxKind::EqualsToken) {
                let value = self.parse_assignment_expression(v);
                self.flush_use(v, value);
            }
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
    }

    fn parse_namespace_declaration<V: ParseVisitor>(&mut self, v: &mut V, flags: DeclFlags) {
        let namespace_span = self.token_span();
        self.report_typescript_only(
            DiagKind::TypeScriptNamespacesNotAllowedInJavaScript,
            "namespace_keyword",
            namespace_span,
        );
        let is_global = self.at_contextual(ContextualKeyword::Global);
        self.advance(); // `namespace` / `module` / `global`
        if is_global {
            // `declare global { }` augments; it binds nothing.
        } else if self.kind().is_identifier_or_keyword() {
            let name = self.cur_identifier();
            self.advance();
            // `namespace a.b.c { }` declares only `a` here.
            while self.eat(SyntaxKind::DotToken) {
                if self.kind().is_identifier_or_keyword() {
                    self.advance();
                } else {
                    break;
                }
            }
            self.declare(v, name, DeclKind::Namespace, flags);
        } else if self.kind() == SyntaxKind::StringLiteral {
            // `declare module "name" { }`: no local binding.
            self.advance();
        }
        let was_ambient = self.in_ambient_context;
        if flags.contains(DeclFlags::DECLARE) {
            // Everything inside a `declare namespace` is itself
            // ambient, transitively.
            self.in_ambient_context = true;
        }
        v.visit_enter_namespace_scope();
        if self.kind() == SyntaxKind::OpenBraceToken {
            let open_span = self.token_span();
            self.advance();
            self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
            if !self.eat(SyntaxKind::CloseBraceToken) {
                self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
            }
        }
        v.visit_exit_namespace_scope();
        self.in_ambient_context = was_ambient;
    }

    // ========================================================================
    // Interfaces
    // ========================================================================

    fn parse_interface_declaration<V: ParseVisitor>(&mut self, v: &mut V, flags: DeclFlags) {
        let interface_kw_span = self.token_span();
        self.report_typescript_only(
            DiagKind::TypeScriptInterfacesNotAllowedInJavaScript,
            "interface_keyword",
            interface_kw_span,
        );
        let suppressed = self.suppress_typescript_diags;
        self.suppress_typescript_diags = true;

        self.advance(); // `interface`
        if self.scanner.has_preceding_line_break() {
            self.report(
                DiagKind::NewlineNotAllowedAfterInterfaceKeyword,
                "interface_keyword",
                interface_kw_span,
            );
        }
        if self.kind().is_identifier_or_keyword() {
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::Interface, flags);
        }

        v.visit_enter_interface_scope();
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.eat(SyntaxKind::ExtendsKeyword) {
            loop {
                self.parse_type_reference(v);
                if !self.eat(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }
        if self.kind() == SyntaxKind::OpenBraceToken {
            let open_span = self.token_span();
            self.advance();
            loop {
                match self.kind() {
                    SyntaxKind::CloseBraceToken => {
                        self.advance();
                        break;
                    }
                    SyntaxKind::EndOfFileToken => {
                        self.report(DiagKind::UnclosedInterfaceBlock, "block_open", open_span);
                        break;
                    }
                    SyntaxKind::SemicolonToken | SyntaxKind::CommaToken => {
                        self.advance();
                    }
                    _ => {
                        let saved_pos = self.scanner.token_begin();
                        self.parse_interface_member(v);
                        if self.scanner.token_begin() == saved_pos {
                            self.advance();
                        }
                    }
                }
            }
        } else {
            let span = TextSpan::new(interface_kw_span.begin, self.prev_token_end);
            self.report(DiagKind::MissingBodyForTypeScriptInterface, "interface_keyword", span);
        }
        v.visit_exit_interface_scope();
        self.suppress_typescript_diags = suppressed;
    }

    fn parse_interface_member<V: ParseVisitor>(&mut self, v: &mut V) {
        // Modifier loop. Each modifier is itself a valid property name,
        // so a modifier only counts when a member can still follow it.
        loop {
            match self.kind() {
                SyntaxKind::Identifier => {
                    let contextual = self.scanner.token().contextual;
                    let modifier_span = self.token_span();
                    let next = self.peek();
                    let continues = Self::starts_member_name(&next);
                    match contextual {
                        Some(ContextualKeyword::Static)
                            if next.kind == SyntaxKind::OpenBraceToken =>
                        {
                            self.report(
                                DiagKind::TypeScriptInterfacesCannotContainStaticBlocks,
                                "static_token",
                                modifier_span,
                            );
                            self.advance();
                            self.parse_block(v);
                            return;
                        }
                        Some(ContextualKeyword::Static) if continues => {
                            // No ASI after `static`, matching the
                            // TypeScript compiler.
                            self.report(
                                DiagKind::InterfacePropertiesCannotBeStatic,
                                "static_keyword",
                                modifier_span,
                            );
                            self.advance();
                        }
                        Some(ContextualKeyword::Async)
                            if continues && !next.has_preceding_line_break() =>
                        {
                            self.report(
                                DiagKind::InterfaceMethodsCannotBeAsync,
                                "async_keyword",
                                modifier_span,
                            );
                            self.advance();
                        }
                        Some(ContextualKeyword::Readonly) if continues => {
                            self.advance();
                        }
                        Some(ContextualKeyword::Public) if continues => {
                            self.report(
                                DiagKind::InterfacePropertiesCannotBeExplicitlyPublic,
                                "public_keyword",
                                modifier_span,
                            );
                            self.advance();
                        }
                        Some(ContextualKeyword::Protected) if continues => {
                            self.report(
                                DiagKind::InterfacePropertiesCannotBeProtected,
                                "protected_keyword",
                                modifier_span,
                            );
                            self.advance();
                        }
                        Some(ContextualKeyword::Private) if continues => {
                            self.report(
                                DiagKind::InterfacePropertiesCannotBePrivate,
                                "property_name_or_private_keyword",
                                modifier_span,
                            );
                            self.advance();
                        }
                        Some(ContextualKeyword::Abstract) if continues => {
                            self.report(
                                DiagKind::AbstractPropertyNotAllowedInInterface,
                                "abstract_keyword",
                                modifier_span,
                            );
                            self.advance();
                        }
                        Some(ContextualKeyword::Get) | Some(ContextualKeyword::Set)
                            if next.kind.is_identifier_or_keyword()
                                || matches!(
                                    next.kind,
                                    SyntaxKind::StringLiteral
                                        | SyntaxKind::NumericLiteral
                                        | SyntaxKind::OpenBracketToken
                                        | SyntaxKind::PrivateIdentifier
                                ) =>
                        {
                            // Accessor: the next token is the name.
                            self.advance();
                        }
                        _ => break,
                    }
                }
                SyntaxKind::AsteriskToken => {
                    self.report(
                        DiagKind::InterfaceMethodsCannotBeGenerators,
                        "star",
                        self.token_span(),
                    );
                    self.advance();
                }
                _ => break,
            }
        }

        // Member name.
        let name: Option<Identifier> = match self.kind() {
            kind if kind.is_identifier_or_keyword() => {
                let name = self.cur_identifier();
                self.advance();
                Some(name)
            }
            SyntaxKind::PrivateIdentifier => {
                let name = self.cur_identifier();
                self.report(
                    DiagKind::InterfacePropertiesCannotBePrivate,
                    "property_name_or_private_keyword",
                    name.span,
                );
                self.advance();
                Some(name)
            }
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                self.advance();
                None
            }
            SyntaxKind::OpenBracketToken => {
                if self.at_index_signature() {
                    self.parse_index_signature(v);
                    return;
                }
                self.advance();
                let key = self.parse_expression(v);
                self.flush_use(v, key);
                self.expect(SyntaxKind::CloseBracketToken);
                None
            }
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                // Call signature.
                None
            }
            _ => {
                self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                return;
            }
        };

        self.eat(SyntaxKind::QuestionToken);
        let mut assignment_asserted = false;
        if self.kind() == SyntaxKind::ExclamationToken {
            self.report(
                DiagKind::TypeScriptAssignmentAssertedFieldsNotAllowedInInterfaces,
                "bang",
                self.token_span(),
            );
            assignment_asserted = true;
            self.advance();
        }

        // A `(` or `<` on a new line is not this member's parameter
        // list; ASI ends the field and a call signature begins.
        let starts_method = matches!(
            self.kind(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) && !self.scanner.has_preceding_line_break();

        match self.kind() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken if starts_method => {
                v.visit_property_declaration(name);
                self.parse_interface_method_rest(v);
            }
            SyntaxKind::ColonToken => {
                self.advance();
                self.parse_type(v);
                if self.kind() == SyntaxKind::EqualsToken {
                    if !assignment_asserted {
                        self.report(
                            DiagKind::InterfaceFieldsCannotHaveInitializers,
                            "equal",
                            self.token_span(),
                        );
                    }
                    self.advance();
                    let init = self.parse_assignment_expression(v);
                    self.flush_use(v, init);
                }
                v.visit_property_declaration(name);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterField);
            }
            SyntaxKind::EqualsToken => {
                if !assignment_asserted {
                    self.report(
                        DiagKind::InterfaceFieldsCannotHaveInitializers,
                        "equal",
                        self.token_span(),
                    );
                }
                self.advance();
                let init = self.parse_assignment_expression(v);
                self.flush_use(v, init);
                v.visit_property_declaration(name);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterField);
            }
            _ => {
                v.visit_property_declaration(name);
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterField);
            }
        }
    }

    /// Parameters, return type, and (disallowed) body of an interface
    /// method or call signature. The property event was already
    /// emitted.
    fn parse_interface_method_rest<V: ParseVisitor>(&mut self, v: &mut V) {
        v.visit_enter_function_scope();
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.kind() == SyntaxKind::OpenParenToken {
            self.parse_parameter_list(v, DeclKind::Parameter);
        }
        if self.kind() == SyntaxKind::ColonToken {
            self.parse_return_type_annotation(v);
        }
        let mut had_body = false;
        if self.kind() == SyntaxKind::EqualsGreaterThanToken {
            self.report(
                DiagKind::FunctionsOrMethodsShouldNotHaveArrowOperator,
                "arrow_operator",
                self.token_span(),
            );
            self.advance();
        }
        if self.kind() == SyntaxKind::OpenBraceToken {
            self.report(
                DiagKind::InterfaceMethodsCannotContainBodies,
                "body_start",
                self.token_span(),
            );
            let open_span = self.token_span();
            self.advance();
            v.visit_enter_function_scope_body();
            self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
            if !self.eat(SyntaxKind::CloseBraceToken) {
                self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
            }
            had_body = true;
        }
        v.visit_exit_function_scope();
        if !had_body {
            self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterInterfaceMethod);
        }
    }

    /// `[` starts an index signature iff a name followed by `:` is
    /// inside; anything else is a computed property name.
    fn at_index_signature(&mut self) -> bool {
        let cp = self.checkpoint();
        self.advance(); // `[`
        let looks_like = self.kind().is_identifier_or_keyword() && {
            self.advance();
            self.kind() == SyntaxKind::ColonToken
        };
        self.rewind(cp);
        looks_like
    }

    /// `[key: KeyType]: ValueType;` inside an interface or object type.
    fn parse_index_signature<V: ParseVisitor>(&mut self, v: &mut V) {
        v.visit_enter_index_signature_scope();
        self.advance(); // `[`
        let key = self.cur_identifier();
        self.advance();
        self.expect(SyntaxKind::ColonToken);
        // The key's type is visited before the key declaration.
        self.parse_type(v);
        self.declare(v, key, DeclKind::IndexSignatureParameter, DeclFlags::NONE);
        let close_ok = self.expect(SyntaxKind::CloseBracketToken);

        match self.kind() {
            SyntaxKind::ColonToken => {
                self.advance();
                self.parse_type(v);
                v.visit_exit_index_signature_scope();
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterIndexSignature);
            }
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken if close_ok => {
                self.report(
                    DiagKind::TypeScriptIndexSignatureCannotBeMethod,
                    "left_paren",
                    self.token_span(),
                );
                v.visit_property_declaration(None);
                self.parse_interface_method_rest(v);
                v.visit_exit_index_signature_scope();
            }
            _ => {
                self.report_at_prev_end(DiagKind::TypeScriptIndexSignatureNeedsType, "expected_type");
                v.visit_exit_index_signature_scope();
                self.skip_semicolon_or_asi(DiagKind::MissingSemicolonAfterIndexSignature);
            }
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// `: Type` in an annotation position. Reports in JavaScript mode
    /// unless a TypeScript-only construct already did.
    fn parse_type_annotation<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::ColonToken);
        self.report_typescript_only(
            DiagKind::TypeScriptTypeAnnotationsNotAllowedInJavaScript,
            "type_colon",
            self.token_span(),
        );
        self.advance();
        self.parse_type(v);
    }

    /// `: Type` after a parameter list; also handles type predicates
    /// (`x is T`, `asserts x`).
    fn parse_return_type_annotation<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::ColonToken);
        self.report_typescript_only(
            DiagKind::TypeScriptTypeAnnotationsNotAllowedInJavaScript,
            "type_colon",
            self.token_span(),
        );
        self.advance();
        if self.at_contextual(ContextualKeyword::Asserts) {
            let after = self.peek();
            if after.kind.is_identifier_or_keyword() || after.kind == SyntaxKind::ThisKeyword {
                self.advance();
                self.advance();
                if self.at_contextual(ContextualKeyword::Is) {
                    self.advance();
                    self.parse_type(v);
                }
                return;
            }
        }
        if self.kind().is_identifier_or_keyword() || self.kind() == SyntaxKind::ThisKeyword {
            // Possible type predicate `param is Type`.
            if self.peek().is_contextual(ContextualKeyword::Is) {
                self.advance();
                self.advance();
                self.parse_type(v);
                return;
            }
        }
        self.parse_type(v);
    }

    /// `<T, U extends V = W>`; declares generic parameters into the
    /// current scope.
    fn parse_type_parameters<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::LessThanToken);
        self.report_typescript_only(
            DiagKind::TypeScriptGenericsNotAllowedInJavaScript,
            "opening_less",
            self.token_span(),
        );
        self.advance();
        while self.kind() != SyntaxKind::GreaterThanToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            // Variance modifiers: `<in T>`, `<out T>`, `<in out T>`.
            loop {
                if self.kind() == SyntaxKind::InKeyword
                    && self.peek().kind.is_identifier_or_keyword()
                {
                    self.advance();
                } else if self.at_contextual(ContextualKeyword::Out)
                    && self.peek().kind.is_identifier_or_keyword()
                {
                    self.advance();
                } else {
                    break;
                }
            }
            if !self.kind().is_identifier_or_keyword() {
                break;
            }
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::GenericParameter, DeclFlags::NONE);
            if self.eat(SyntaxKind::ExtendsKeyword) {
                self.parse_type(v);
            }
            if self.eat(SyntaxKind::EqualsToken) {
                self.parse_type(v);
            }
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::GreaterThanToken);
    }

    /// A full type expression: unions, intersections, operators,
    /// suffixes.
    fn parse_type<V: ParseVisitor>(&mut self, v: &mut V) {
        self.with_recursion_guard((), |p| p.parse_type_inner(v));
    }

    fn parse_type_inner<V: ParseVisitor>(&mut self, v: &mut V) {
        // Leading `|` / `&` are allowed.
        self.eat(SyntaxKind::BarToken);
        self.parse_type_operand(v);
        loop {
            if self.eat(SyntaxKind::BarToken) || self.eat(SyntaxKind::AmpersandToken) {
                self.parse_type_operand(v);
            } else if self.eat(SyntaxKind::ExtendsKeyword) {
                // Conditional type: `T extends U ? X : Y`.
                self.parse_type_operand(v);
                if self.eat(SyntaxKind::QuestionToken) {
                    self.parse_type(v);
                    self.expect(SyntaxKind::ColonToken);
                    self.parse_type(v);
                }
            } else {
                break;
            }
        }
    }

    fn parse_type_operand<V: ParseVisitor>(&mut self, v: &mut V) {
        match self.kind() {
            SyntaxKind::Identifier => match self.scanner.token().contextual {
                Some(ContextualKeyword::Keyof)
                | Some(ContextualKeyword::Readonly)
                | Some(ContextualKeyword::Unique)
                | Some(ContextualKeyword::Infer) => {
                    self.advance();
                    self.parse_type_operand(v);
                    return;
                }
                Some(hint) if hint.is_builtin_type() => {
                    self.advance();
                }
                _ => self.parse_type_reference(v),
            },
            SyntaxKind::VoidKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::ThisKeyword => {
                self.advance();
            }
            SyntaxKind::TypeOfKeyword => {
                // `typeof expr` reads a value-namespace name.
                self.advance();
                if self.kind().is_identifier_or_keyword() {
                    let name = self.cur_identifier();
                    self.advance();
                    v.visit_variable_use(name);
                    while self.eat(SyntaxKind::DotToken) {
                        if !self.kind().is_identifier_or_keyword() {
                            break;
                        }
                        self.advance();
                    }
                }
            }
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => {
                self.advance();
            }
            SyntaxKind::MinusToken => {
                self.advance();
                if self.kind() == SyntaxKind::NumericLiteral
                    || self.kind() == SyntaxKind::BigIntLiteral
                {
                    self.advance();
                }
            }
            SyntaxKind::OpenParenToken => {
                if self.at_function_type() {
                    self.parse_function_type(v);
                } else {
                    self.advance();
                    self.parse_type(v);
                    self.expect(SyntaxKind::CloseParenToken);
                }
            }
            SyntaxKind::NewKeyword => {
                // Constructor type: `new (args) => T`.
                self.advance();
                if self.kind() == SyntaxKind::OpenParenToken {
                    self.parse_function_type(v);
                }
            }
            SyntaxKind::OpenBraceToken => self.parse_object_type(v),
            SyntaxKind::OpenBracketToken => {
                // Tuple type.
                self.advance();
                while self.kind() != SyntaxKind::CloseBracketToken
                    && self.kind() != SyntaxKind::EndOfFileToken
                {
                    self.eat(SyntaxKind::DotDotDotToken);
                    // Tuple member labels: `[name: T, ...]`.
                    if self.kind().is_identifier_or_keyword()
                        && self.peek().kind == SyntaxKind::ColonToken
                    {
                        self.advance();
                        self.advance();
                    }
                    self.parse_type(v);
                    if !self.eat(SyntaxKind::CommaToken) {
                        break;
                    }
                }
                self.expect(SyntaxKind::CloseBracketToken);
            }
            SyntaxKind::LessThanToken => {
                // Generic function type `<T>(x: T) => T`.
                self.parse_function_type(v);
            }
            _ => {
                self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                return;
            }
        }

        // Suffixes: `T[]`, `T[K]`.
        loop {
            if self.kind() == SyntaxKind::OpenBracketToken
                && !self.scanner.has_preceding_line_break()
            {
                self.advance();
                if self.kind() != SyntaxKind::CloseBracketToken {
                    self.parse_type(v);
                }
                self.expect(SyntaxKind::CloseBracketToken);
            } else {
                break;
            }
        }
    }

    /// A (possibly qualified, possibly generic) type reference.
    /// `ns.Type` visits a namespace use of `ns` only; a plain `Type`
    /// visits a type use.
    fn parse_type_reference<V: ParseVisitor>(&mut self, v: &mut V) {
        if !self.kind().is_identifier_or_keyword() {
            self.report(DiagKind::UnexpectedToken, "token", self.token_span());
            return;
        }
        let first = self.cur_identifier();
        self.advance();
        if self.kind() == SyntaxKind::DotToken {
            v.visit_variable_namespace_use(first);
            while self.eat(SyntaxKind::DotToken) {
                if !self.kind().is_identifier_or_keyword() {
                    break;
                }
                self.advance();
            }
        } else {
            v.visit_variable_type_use(first);
        }
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_arguments(v);
        }
    }

    /// `<T, U>` in a type position.
    fn parse_type_arguments<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::LessThanToken);
        self.advance();
        while self.kind() != SyntaxKind::GreaterThanToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            self.parse_type(v);
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::GreaterThanToken);
    }

    /// Whether `(` begins a function type rather than a parenthesized
    /// type. Decided by a token-level speculation.
    fn at_function_type(&mut self) -> bool {
        let cp = self.checkpoint();
        self.advance(); // `(`
        let result = match self.kind() {
            SyntaxKind::CloseParenToken => {
                self.advance();
                self.kind() == SyntaxKind::EqualsGreaterThanToken
            }
            SyntaxKind::DotDotDotToken => true,
            kind if kind.is_identifier_or_keyword() => {
                self.advance();
                matches!(
                    self.kind(),
                    SyntaxKind::ColonToken
                        | SyntaxKind::CommaToken
                        | SyntaxKind::QuestionToken
                ) || (self.kind() == SyntaxKind::CloseParenToken && {
                    self.advance();
                    self.kind() == SyntaxKind::EqualsGreaterThanToken
                })
            }
            _ => false,
        };
        self.rewind(cp);
        result
    }

    /// `(params) => Type`, possibly with leading type parameters.
    /// Parameters declare `function-type-parameter` bindings inside a
    /// function scope.
    fn parse_function_type<V: ParseVisitor>(&mut self, v: &mut V) {
        v.visit_enter_function_scope();
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.kind() == SyntaxKind::OpenParenToken {
            self.advance();
            while self.kind() != SyntaxKind::CloseParenToken
                && self.kind() != SyntaxKind::EndOfFileToken
            {
                self.eat(SyntaxKind::DotDotDotToken);
                if self.kind().is_identifier_or_keyword() {
                    let name = self.cur_identifier();
                    self.advance();
                    self.eat(SyntaxKind::QuestionToken);
                    if self.eat(SyntaxKind::ColonToken) {
                        self.parse_type(v);
                    }
                    self.declare(v, name, DeclKind::FunctionTypeParameter, DeclFlags::NONE);
                } else {
                    self.parse_type(v);
                }
                if !self.eat(SyntaxKind::CommaToken) {
                    break;
                }
            }
            self.expect(SyntaxKind::CloseParenToken);
        }
        if self.eat(SyntaxKind::EqualsGreaterThanToken) {
            self.parse_type(v);
        }
        v.visit_exit_function_scope();
    }

    /// `{ prop: T; method(x: U): V; [k: K]: V }`.
    fn parse_object_type<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::OpenBraceToken);
        self.advance();
        while self.kind() != SyntaxKind::CloseBraceToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            if self.eat(SyntaxKind::SemicolonToken) || self.eat(SyntaxKind::CommaToken) {
                continue;
            }
            let saved_pos = self.scanner.token_begin();
            // Modifiers shared with interface members.
            while self.at_contextual(ContextualKeyword::Readonly)
                && Self::starts_member_name(&self.peek())
            {
                self.advance();
            }
            match self.kind() {
                SyntaxKind::OpenBracketToken if self.at_index_signature() => {
                    v.visit_enter_index_signature_scope();
                    self.advance();
                    let key = self.cur_identifier();
                    self.advance();
                    self.expect(SyntaxKind::ColonToken);
                    self.parse_type(v);
                    self.declare(v, key, DeclKind::IndexSignatureParameter, DeclFlags::NONE);
                    self.expect(SyntaxKind::CloseBracketToken);
                    if self.eat(SyntaxKind::ColonToken) {
                        self.parse_type(v);
                    }
                    v.visit_exit_index_signature_scope();
                }
                SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                    // Call signature.
                    self.parse_function_type_signature_member(v);
                }
                SyntaxKind::NewKeyword if self.peek().kind == SyntaxKind::OpenParenToken => {
                    self.advance();
                    self.parse_function_type_signature_member(v);
                }
                kind if kind.is_identifier_or_keyword()
                    || matches!(
                        kind,
                        SyntaxKind::StringLiteral
                            | SyntaxKind::NumericLiteral
                            | SyntaxKind::OpenBracketToken
                    ) =>
                {
                    if kind == SyntaxKind::OpenBracketToken {
                        self.advance();
                        let key = self.parse_assignment_expression(v);
                        self.flush_use(v, key);
                        self.expect(SyntaxKind::CloseBracketToken);
                    } else {
                        self.advance();
                    }
                    self.eat(SyntaxKind::QuestionToken);
                    match self.kind() {
                        SyntaxKind::ColonToken => {
                            self.advance();
                            self.parse_type(v);
                        }
                        SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                            self.parse_function_type_signature_member(v);
                        }
                        _ => {}
                    }
                }
                _ => {
                    self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                }
            }
            if self.scanner.token_begin() == saved_pos {
                self.advance();
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
    }

    /// A method/call signature inside an object type: parameters and
    /// return type wrapped in a function scope.
    fn parse_function_type_signature_member<V: ParseVisitor>(&mut self, v: &mut V) {
        v.visit_enter_function_scope();
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.kind() == SyntaxKind::OpenParenToken {
            self.parse_parameter_list(v, DeclKind::Parameter);
        }
        if self.eat(SyntaxKind::ColonToken) {
            self.parse_type(v);
        }
        v.visit_exit_function_scope();
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Comma-level expression.
    fn parse_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        let mut result = self.parse_assignment_expression(v);
        while self.kind() == SyntaxKind::CommaToken {
            self.flush_use(v, result);
            self.advance();
            result = self.parse_assignment_expression(v);
        }
        result
    }

    fn parse_assignment_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        self.with_recursion_guard(ExprResult::Other, |p| p.parse_assignment_expression_inner(v))
    }

    fn parse_assignment_expression_inner<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        // `yield` expressions sit below assignment.
        if self.kind() == SyntaxKind::YieldKeyword && self.in_generator_function {
            self.advance();
            self.eat(SyntaxKind::AsteriskToken);
            if !self.scanner.has_preceding_line_break()
                && !matches!(
                    self.kind(),
                    SyntaxKind::SemicolonToken
                        | SyntaxKind::CloseParenToken
                        | SyntaxKind::CloseBracketToken
                        | SyntaxKind::CloseBraceToken
                        | SyntaxKind::CommaToken
                        | SyntaxKind::ColonToken
                        | SyntaxKind::EndOfFileToken
                )
            {
                let operand = self.parse_assignment_expression(v);
                self.flush_use(v, operand);
            }
            return ExprResult::Other;
        }

        let left_begin = self.scanner.token_begin();
        let left = self.parse_conditional_expression(v);

        // Single-identifier arrow function: `x => ...`.
        if self.kind() == SyntaxKind::EqualsGreaterThanToken {
            if let ExprResult::Ident(param) = left {
                self.advance();
                v.visit_enter_function_scope();
                self.declare(v, param, DeclKind::ArrowParameter, DeclFlags::NONE);
                self.parse_arrow_function_body(v);
                v.visit_exit_function_scope();
                return ExprResult::Other;
            }
        }

        if self.kind().is_assignment_operator() {
            let compound = self.kind().is_compound_assignment();
            let op_span = self.token_span();
            self.advance();
            let right = self.parse_assignment_expression(v);
            self.flush_use(v, right);
            match left {
                ExprResult::Ident(id) => {
                    if compound {
                        v.visit_variable_use(id);
                    }
                    v.visit_variable_assignment(id);
                }
                ExprResult::AssignmentTarget => {}
                ExprResult::Other => {
                    let span = TextSpan::new(left_begin, op_span.begin);
                    self.report(DiagKind::InvalidExpressionLeftOfAssignment, "lhs", span);
                }
            }
            return ExprResult::Other;
        }

        left
    }

    fn parse_conditional_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        let condition = self.parse_binary_expression(v, OperatorPrecedence::NullishCoalescing);
        if self.kind() == SyntaxKind::QuestionToken {
            self.flush_use(v, condition);
            self.advance();
            let when_true = self.parse_assignment_expression(v);
            self.flush_use(v, when_true);
            self.expect(SyntaxKind::ColonToken);
            let when_false = self.parse_assignment_expression(v);
            self.flush_use(v, when_false);
            return ExprResult::Other;
        }
        condition
    }

    fn parse_binary_expression<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        min_precedence: OperatorPrecedence,
    ) -> ExprResult {
        let mut left = self.parse_unary_expression(v);
        loop {
            // TypeScript `as` / `satisfies` bind like relational
            // operators and take a type on the right.
            if (self.at_contextual(ContextualKeyword::As)
                || self.at_contextual(ContextualKeyword::Satisfies))
                && self.options.typescript()
                && !self.scanner.has_preceding_line_break()
            {
                self.flush_use(v, left);
                left = ExprResult::Other;
                self.advance();
                self.parse_type(v);
                continue;
            }

            let mut op = self.kind();
            if op == SyntaxKind::GreaterThanToken {
                op = self.scanner.rescan_greater_than_token();
            }
            if op == SyntaxKind::InKeyword && !self.allow_in_operator {
                break;
            }
            let precedence = get_binary_operator_precedence(op);
            if precedence == OperatorPrecedence::Invalid || precedence < min_precedence {
                break;
            }
            self.flush_use(v, left);
            left = ExprResult::Other;
            self.advance();
            // `**` is right-associative; everything else is left.
            let right = if op == SyntaxKind::AsteriskAsteriskToken {
                self.parse_binary_expression(v, precedence)
            } else {
                self.parse_binary_tighter_than(v, precedence)
            };
            self.flush_use(v, right);
        }
        left
    }

    /// Right operand of a left-associative operator: everything that
    /// binds strictly tighter.
    fn parse_binary_tighter_than<V: ParseVisitor>(
        &mut self,
        v: &mut V,
        precedence: OperatorPrecedence,
    ) -> ExprResult {
        let mut left = self.parse_unary_expression(v);
        loop {
            let mut op = self.kind();
            if op == SyntaxKind::GreaterThanToken {
                op = self.scanner.rescan_greater_than_token();
            }
            if op == SyntaxKind::InKeyword && !self.allow_in_operator {
                break;
            }
            let next = get_binary_operator_precedence(op);
            if next == OperatorPrecedence::Invalid || next <= precedence {
                break;
            }
            self.flush_use(v, left);
            left = ExprResult::Other;
            self.advance();
            let right = if op == SyntaxKind::AsteriskAsteriskToken {
                self.parse_binary_expression(v, next)
            } else {
                self.parse_binary_tighter_than(v, next)
            };
            self.flush_use(v, right);
        }
        left
    }

    fn parse_unary_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        match self.kind() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::VoidKeyword
            | SyntaxKind::TypeOfKeyword => {
                self.advance();
                let operand = self.parse_unary_expression(v);
                self.flush_use(v, operand);
                ExprResult::Other
            }
            SyntaxKind::DeleteKeyword => {
                self.advance();
                let operand = self.parse_unary_expression(v);
                match operand {
                    ExprResult::Ident(id) => v.visit_variable_delete_use(id),
                    other => self.flush_use(v, other),
                }
                ExprResult::Other
            }
            SyntaxKind::AwaitKeyword if self.in_async_function => {
                self.advance();
                let operand = self.parse_unary_expression(v);
                self.flush_use(v, operand);
                ExprResult::Other
            }
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                self.advance();
                let operand = self.parse_unary_expression(v);
                match operand {
                    ExprResult::Ident(id) => {
                        v.visit_variable_use(id);
                        v.visit_variable_assignment(id);
                    }
                    other => self.flush_use(v, other),
                }
                ExprResult::Other
            }
            SyntaxKind::LessThanToken if self.options.jsx => {
                // The element parser leaves its final `>` current so
                // sibling JSX text can be re-lexed from it.
                self.parse_jsx_element(v);
                if self.kind() == SyntaxKind::GreaterThanToken {
                    self.advance();
                }
                ExprResult::Other
            }
            SyntaxKind::LessThanToken if self.options.typescript() => {
                // Type assertion `<T>expr` (or a generic arrow; both
                // start the same way and the distinction does not
                // change the visit stream we produce for the type).
                if self.at_generic_arrow_function() {
                    self.parse_generic_arrow_function(v);
                    return ExprResult::Other;
                }
                self.advance();
                self.parse_type(v);
                self.expect(SyntaxKind::GreaterThanToken);
                let operand = self.parse_unary_expression(v);
                self.flush_use(v, operand);
                ExprResult::Other
            }
            _ => {
                let result = self.parse_postfix_expression(v);
                if matches!(
                    self.kind(),
                    SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
                ) && !self.scanner.has_preceding_line_break()
                {
                    self.advance();
                    match result {
                        ExprResult::Ident(id) => {
                            v.visit_variable_use(id);
                            v.visit_variable_assignment(id);
                        }
                        _ => {}
                    }
                    return ExprResult::Other;
                }
                result
            }
        }
    }

    /// Member access, calls, optional chaining, tagged templates, and
    /// the non-null postfix `!`.
    fn parse_postfix_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        let mut result = self.parse_primary_expression(v);
        loop {
            match self.kind() {
                SyntaxKind::DotToken | SyntaxKind::QuestionDotToken => {
                    self.flush_use(v, result);
                    self.advance();
                    if self.kind().is_identifier_or_keyword()
                        || self.kind() == SyntaxKind::PrivateIdentifier
                    {
                        self.advance();
                        result = ExprResult::AssignmentTarget;
                    } else if self.kind() == SyntaxKind::OpenParenToken {
                        // `f?.()`
                        self.parse_arguments(v);
                        result = ExprResult::Other;
                    } else if self.kind() == SyntaxKind::OpenBracketToken {
                        self.advance();
                        let index = self.parse_expression(v);
                        self.flush_use(v, index);
                        self.expect(SyntaxKind::CloseBracketToken);
                        result = ExprResult::AssignmentTarget;
                    } else {
                        self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                        result = ExprResult::Other;
                    }
                }
                SyntaxKind::OpenBracketToken => {
                    self.flush_use(v, result);
                    self.advance();
                    let index = self.parse_expression(v);
                    self.flush_use(v, index);
                    if !self.eat(SyntaxKind::CloseBracketToken) {
                        self.report(
                            DiagKind::UnmatchedIndexingBracket,
                            "left_square",
                            self.token_span(),
                        );
                    }
                    result = ExprResult::AssignmentTarget;
                }
                SyntaxKind::OpenParenToken => {
                    self.flush_use(v, result);
                    self.parse_arguments(v);
                    result = ExprResult::Other;
                }
                SyntaxKind::NoSubstitutionTemplateLiteral => {
                    // Tagged template.
                    self.flush_use(v, result);
                    self.advance();
                    result = ExprResult::Other;
                }
                SyntaxKind::TemplateHead => {
                    self.flush_use(v, result);
                    self.parse_template_parts(v);
                    result = ExprResult::Other;
                }
                SyntaxKind::ExclamationToken
                    if self.options.typescript() && !self.scanner.has_preceding_line_break() =>
                {
                    // Non-null assertion; does not change the operand.
                    self.advance();
                }
                _ => break,
            }
        }
        result
    }

    fn parse_primary_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        match self.kind() {
            SyntaxKind::Identifier | SyntaxKind::AwaitKeyword | SyntaxKind::YieldKeyword => {
                // `async` arrow functions and `async function`
                // expressions.
                if self.at_contextual(ContextualKeyword::Async)
                    && !self.peek().has_preceding_line_break()
                {
                    let next = self.peek();
                    if next.kind == SyntaxKind::FunctionKeyword {
                        self.advance();
                        self.parse_function_expression(v, true);
                        return ExprResult::Other;
                    }
                    if next.kind == SyntaxKind::Identifier {
                        // `async x => ...`
                        let cp = self.checkpoint();
                        self.advance();
                        let param = self.cur_identifier();
                        self.advance();
                        if self.kind() == SyntaxKind::EqualsGreaterThanToken {
                            self.advance();
                            v.visit_enter_function_scope();
                            let saved = self.in_async_function;
                            self.in_async_function = true;
                            self.declare(v, param, DeclKind::ArrowParameter, DeclFlags::NONE);
                            self.parse_arrow_function_body(v);
                            self.in_async_function = saved;
                            v.visit_exit_function_scope();
                            return ExprResult::Other;
                        }
                        self.rewind(cp);
                    }
                    if next.kind == SyntaxKind::OpenParenToken {
                        let cp = self.checkpoint();
                        self.advance();
                        if self.at_arrow_function_parameters() {
                            self.parse_paren_arrow_function(v, true);
                            return ExprResult::Other;
                        }
                        self.rewind(cp);
                    }
                }
                let id = self.cur_identifier();
                self.advance();
                ExprResult::Ident(id)
            }
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword => {
                self.advance();
                ExprResult::Other
            }
            SyntaxKind::NoSubstitutionTemplateLiteral => {
                self.advance();
                ExprResult::Other
            }
            SyntaxKind::TemplateHead => {
                self.parse_template_parts(v);
                ExprResult::Other
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                // In a primary position a slash is a regexp.
                self.scanner.rescan_slash_token(&mut self.diags);
                self.advance();
                ExprResult::Other
            }
            SyntaxKind::OpenParenToken => {
                if self.at_arrow_function_parameters() {
                    self.parse_paren_arrow_function(v, false);
                    return ExprResult::Other;
                }
                self.advance();
                let inner = self.parse_expression(v);
                if !self.eat(SyntaxKind::CloseParenToken) {
                    self.report(DiagKind::UnmatchedParenthesis, "left_paren", self.token_span());
                }
                inner
            }
            SyntaxKind::OpenBracketToken => {
                self.advance();
                while self.kind() != SyntaxKind::CloseBracketToken
                    && self.kind() != SyntaxKind::EndOfFileToken
                {
                    if self.eat(SyntaxKind::CommaToken) {
                        continue; // hole
                    }
                    self.eat(SyntaxKind::DotDotDotToken);
                    let element = self.parse_assignment_expression(v);
                    self.flush_use(v, element);
                    if self.kind() != SyntaxKind::CloseBracketToken {
                        if !self.eat(SyntaxKind::CommaToken) {
                            break;
                        }
                    }
                }
                self.expect(SyntaxKind::CloseBracketToken);
                ExprResult::Other
            }
            SyntaxKind::OpenBraceToken => {
                self.parse_object_literal(v);
                ExprResult::Other
            }
            SyntaxKind::FunctionKeyword => {
                self.parse_function_expression(v, false);
                ExprResult::Other
            }
            SyntaxKind::ClassKeyword => {
                self.advance();
                let name = if self.at_binding_name() {
                    let name = self.cur_identifier();
                    self.advance();
                    Some(name)
                } else {
                    None
                };
                self.parse_class_tail(v, name);
                ExprResult::Other
            }
            SyntaxKind::NewKeyword => {
                self.advance();
                if self.eat(SyntaxKind::DotToken) {
                    // `new.target`
                    if self.kind().is_identifier_or_keyword() {
                        self.advance();
                    }
                    return ExprResult::Other;
                }
                let callee = self.parse_postfix_expression(v);
                self.flush_use(v, callee);
                ExprResult::Other
            }
            SyntaxKind::SuperKeyword => {
                self.advance();
                ExprResult::Other
            }
            SyntaxKind::ImportKeyword => {
                self.advance();
                if self.eat(SyntaxKind::DotToken) {
                    // `import.meta`
                    if self.kind().is_identifier_or_keyword() {
                        self.advance();
                    }
                } else if self.kind() == SyntaxKind::OpenParenToken {
                    self.parse_arguments(v);
                }
                ExprResult::Other
            }
            _ => {
                self.report(DiagKind::ExpectedExpression, "where", self.token_span());
                ExprResult::Other
            }
        }
    }

    fn parse_arguments<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::OpenParenToken);
        self.advance();
        while self.kind() != SyntaxKind::CloseParenToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            self.eat(SyntaxKind::DotDotDotToken);
            let argument = self.parse_assignment_expression(v);
            self.flush_use(v, argument);
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        if !self.eat(SyntaxKind::CloseParenToken) {
            self.report(DiagKind::UnmatchedParenthesis, "left_paren", self.token_span());
        }
    }

    fn parse_object_literal<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::OpenBraceToken);
        self.advance();
        while self.kind() != SyntaxKind::CloseBraceToken
            && self.kind() != SyntaxKind::EndOfFileToken
        {
            if self.eat(SyntaxKind::CommaToken) {
                continue;
            }
            if self.eat(SyntaxKind::DotDotDotToken) {
                let spread = self.parse_assignment_expression(v);
                self.flush_use(v, spread);
                continue;
            }
            // Method modifiers.
            let mut is_async = false;
            let mut is_generator = false;
            if self.at_contextual(ContextualKeyword::Async)
                && Self::starts_member_name(&self.peek())
                && !self.peek().has_preceding_line_break()
            {
                is_async = true;
                self.advance();
            }
            if self.kind() == SyntaxKind::AsteriskToken {
                is_generator = true;
                self.advance();
            }
            if (self.at_contextual(ContextualKeyword::Get)
                || self.at_contextual(ContextualKeyword::Set))
                && Self::starts_member_name(&self.peek())
            {
                self.advance();
            }

            match self.kind() {
                kind if kind.is_identifier_or_keyword() => {
                    let name = self.cur_identifier();
                    let is_plain_name = self.kind() == SyntaxKind::Identifier;
                    self.advance();
                    match self.kind() {
                        SyntaxKind::ColonToken => {
                            self.advance();
                            let value = self.parse_assignment_expression(v);
                            self.flush_use(v, value);
                        }
                        SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                            self.parse_function_rest(v, is_async, is_generator, DeclKind::Parameter);
                        }
                        SyntaxKind::EqualsToken => {
                            // Destructuring default inside an object
                            // pattern written as a literal.
                            self.advance();
                            let default = self.parse_assignment_expression(v);
                            self.flush_use(v, default);
                            if is_plain_name {
                                v.visit_variable_use(name);
                            }
                        }
                        _ => {
                            // Shorthand property reads the binding.
                            if is_plain_name {
                                v.visit_variable_use(name);
                            }
                        }
                    }
                }
                SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral => {
                    self.advance();
                    if self.eat(SyntaxKind::ColonToken) {
                        let value = self.parse_assignment_expression(v);
                        self.flush_use(v, value);
                    } else if self.kind() == SyntaxKind::OpenParenToken {
                        self.parse_function_rest(v, is_async, is_generator, DeclKind::Parameter);
                    }
                }
                SyntaxKind::OpenBracketToken => {
                    self.advance();
                    let key = self.parse_assignment_expression(v);
                    self.flush_use(v, key);
                    self.expect(SyntaxKind::CloseBracketToken);
                    if self.eat(SyntaxKind::ColonToken) {
                        let value = self.parse_assignment_expression(v);
                        self.flush_use(v, value);
                    } else if self.kind() == SyntaxKind::OpenParenToken {
                        self.parse_function_rest(v, is_async, is_generator, DeclKind::Parameter);
                    }
                }
                _ => break,
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
    }

    fn parse_function_expression<V: ParseVisitor>(&mut self, v: &mut V, is_async: bool) {
        debug_assert_eq!(self.kind(), SyntaxKind::FunctionKeyword);
        self.advance();
        let is_generator = self.eat(SyntaxKind::AsteriskToken);
        v.visit_enter_function_scope();
        // A named function expression binds its own name inside the
        // function scope only.
        if self.at_binding_name() {
            let name = self.cur_identifier();
            self.advance();
            self.declare(v, name, DeclKind::Function, DeclFlags::NONE);
        }
        let saved_async = self.in_async_function;
        let saved_generator = self.in_generator_function;
        self.in_async_function = is_async;
        self.in_generator_function = is_generator;
        if self.kind() == SyntaxKind::LessThanToken {
            self.parse_type_parameters(v);
        }
        if self.kind() == SyntaxKind::OpenParenToken {
            self.parse_parameter_list(v, DeclKind::Parameter);
        }
        if self.kind() == SyntaxKind::ColonToken {
            self.parse_return_type_annotation(v);
        }
        if self.kind() == SyntaxKind::OpenBraceToken {
            let open_span = self.token_span();
            self.advance();
            v.visit_enter_function_scope_body();
            self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
            if !self.eat(SyntaxKind::CloseBraceToken) {
                self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
            }
        } else {
            self.report_at_prev_end(DiagKind::MissingBodyForFunction, "expected_body");
        }
        self.in_async_function = saved_async;
        self.in_generator_function = saved_generator;
        v.visit_exit_function_scope();
    }

    /// Arrow body: a block (with the body scope marker) or a bare
    /// expression.
    fn parse_arrow_function_body<V: ParseVisitor>(&mut self, v: &mut V) {
        if self.kind() == SyntaxKind::OpenBraceToken {
            let open_span = self.token_span();
            self.advance();
            v.visit_enter_function_scope_body();
            self.parse_statements_until(v, &[SyntaxKind::CloseBraceToken]);
            if !self.eat(SyntaxKind::CloseBraceToken) {
                self.report(DiagKind::UnclosedCodeBlock, "block_open", open_span);
            }
        } else {
            v.visit_enter_function_scope_body();
            let body = self.parse_assignment_expression(v);
            self.flush_use(v, body);
        }
    }

    /// Decide between a parenthesized expression and arrow-function
    /// parameters by scanning tokens to the matching `)` and checking
    /// for `=>`. Pure token-level speculation: no events are emitted
    /// and all tentative diagnostics are rewound.
    fn at_arrow_function_parameters(&mut self) -> bool {
        debug_assert_eq!(self.kind(), SyntaxKind::OpenParenToken);
        let cp = self.checkpoint();
        self.advance();
        let mut depth: u32 = 1;
        let mut result = false;
        loop {
            match self.kind() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken => {
                    depth += 1;
                    self.advance();
                }
                SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                }
                SyntaxKind::CloseParenToken => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        result = self.arrow_follows_close_paren();
                        break;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        self.rewind(cp);
        result
    }

    /// After the `)` of candidate arrow parameters: `=>`, or a
    /// TypeScript return type annotation followed by `=>`.
    fn arrow_follows_close_paren(&mut self) -> bool {
        if self.kind() == SyntaxKind::EqualsGreaterThanToken {
            return true;
        }
        if self.kind() == SyntaxKind::ColonToken && self.options.typescript() {
            // Scan a bounded distance through the candidate return
            // type looking for `=>` at bracket depth zero.
            let mut depth: u32 = 0;
            for _ in 0..64 {
                self.advance();
                match self.kind() {
                    SyntaxKind::EqualsGreaterThanToken if depth == 0 => return true,
                    SyntaxKind::OpenParenToken
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::LessThanToken => depth += 1,
                    SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::GreaterThanToken => {
                        if depth == 0 {
                            return false;
                        }
                        depth -= 1;
                    }
                    SyntaxKind::SemicolonToken | SyntaxKind::EndOfFileToken => return false,
                    _ => {}
                }
            }
        }
        false
    }

    /// Parse `(params) => body` after `at_arrow_function_parameters`
    /// said yes. Current token is `(`.
    fn parse_paren_arrow_function<V: ParseVisitor>(&mut self, v: &mut V, is_async: bool) {
        v.visit_enter_function_scope();
        let saved_async = self.in_async_function;
        self.in_async_function = is_async;
        self.parse_parameter_list(v, DeclKind::ArrowParameter);
        if self.kind() == SyntaxKind::ColonToken {
            self.parse_return_type_annotation(v);
        }
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        self.parse_arrow_function_body(v);
        self.in_async_function = saved_async;
        v.visit_exit_function_scope();
    }

    /// `<T>(x: T) => ...` in TypeScript (non-JSX) mode.
    fn at_generic_arrow_function(&mut self) -> bool {
        debug_assert_eq!(self.kind(), SyntaxKind::LessThanToken);
        let cp = self.checkpoint();
        self.advance();
        let mut depth: u32 = 1;
        let mut result = false;
        for _ in 0..256 {
            match self.kind() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::LessThanToken => {
                    depth += 1;
                    self.advance();
                }
                SyntaxKind::GreaterThanToken => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        result = self.kind() == SyntaxKind::OpenParenToken;
                        break;
                    }
                }
                SyntaxKind::SemicolonToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::CloseBraceToken => break,
                _ => {
                    self.advance();
                }
            }
        }
        self.rewind(cp);
        result
    }

    fn parse_generic_arrow_function<V: ParseVisitor>(&mut self, v: &mut V) {
        v.visit_enter_function_scope();
        self.parse_type_parameters(v);
        if self.kind() == SyntaxKind::OpenParenToken {
            self.parse_parameter_list(v, DeclKind::ArrowParameter);
        }
        if self.kind() == SyntaxKind::ColonToken {
            self.parse_return_type_annotation(v);
        }
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        self.parse_arrow_function_body(v);
        v.visit_exit_function_scope();
    }

    /// Template literal with interpolations; current token is the
    /// head.
    fn parse_template_parts<V: ParseVisitor>(&mut self, v: &mut V) {
        debug_assert_eq!(self.kind(), SyntaxKind::TemplateHead);
        loop {
            self.advance(); // past head/middle, into the expression
            let interpolated = self.parse_expression(v);
            self.flush_use(v, interpolated);
            if self.kind() != SyntaxKind::CloseBraceToken {
                self.report(DiagKind::UnexpectedToken, "token", self.token_span());
                // Resynchronize: treat as finished.
                return;
            }
            match self.scanner.rescan_template_token(&mut self.diags) {
                SyntaxKind::TemplateMiddle => continue,
                _ => {
                    // TemplateTail
                    self.advance();
                    return;
                }
            }
        }
    }

    // ========================================================================
    // JSX
    // ========================================================================

    /// A JSX element or fragment; current token is `<`.
    fn parse_jsx_element<V: ParseVisitor>(&mut self, v: &mut V) {
        let open_span = self.token_span();
        self.advance(); // `<`
        if self.kind() == SyntaxKind::GreaterThanToken {
            // Fragment `<>...</>`.
            self.parse_jsx_children(v, open_span);
            return;
        }
        self.parse_jsx_tag_name(v);
        // Attributes.
        loop {
            match self.kind() {
                kind if kind.is_identifier_or_keyword() => {
                    self.advance();
                    // `name-with-dashes` attributes.
                    while self.kind() == SyntaxKind::MinusToken {
                        self.advance();
                        if self.kind().is_identifier_or_keyword() {
                            self.advance();
                        }
                    }
                    if self.eat(SyntaxKind::EqualsToken) {
                        match self.kind() {
                            SyntaxKind::StringLiteral => {
                                self.advance();
                            }
                            SyntaxKind::OpenBraceToken => {
                                self.advance();
                                let value = self.parse_assignment_expression(v);
                                self.flush_use(v, value);
                                self.expect(SyntaxKind::CloseBraceToken);
                            }
                            _ => {
                                self.report(
                                    DiagKind::UnexpectedToken,
                                    "token",
                                    self.token_span(),
                                );
                            }
                        }
                    }
                }
                SyntaxKind::OpenBraceToken => {
                    // `{...spread}`
                    self.advance();
                    self.eat(SyntaxKind::DotDotDotToken);
                    let spread = self.parse_assignment_expression(v);
                    self.flush_use(v, spread);
                    self.expect(SyntaxKind::CloseBraceToken);
                }
                _ => break,
            }
        }
        if self.eat(SyntaxKind::SlashToken) {
            // Self-closing; the `>` stays current for the caller.
            if self.kind() != SyntaxKind::GreaterThanToken {
                self.report(DiagKind::UnclosedJsxElement, "element_open", open_span);
            }
            return;
        }
        if self.kind() != SyntaxKind::GreaterThanToken {
            self.report(DiagKind::UnclosedJsxElement, "element_open", open_span);
            return;
        }
        self.parse_jsx_children(v, open_span);
    }

    /// The tag name of an element. Component names (capitalized, or
    /// namespaced member expressions) read a variable.
    fn parse_jsx_tag_name<V: ParseVisitor>(&mut self, v: &mut V) {
        if !self.kind().is_identifier_or_keyword() {
            return;
        }
        let name = self.cur_identifier();
        let text_is_component = self
            .scanner
            .interner()
            .resolve(name.name)
            .starts_with(|c: char| c.is_ascii_uppercase());
        self.advance();
        if self.kind() == SyntaxKind::DotToken {
            // `<module.Component />` reads `module`.
            v.visit_variable_use(name);
            while self.eat(SyntaxKind::DotToken) {
                if self.kind().is_identifier_or_keyword() {
                    self.advance();
                } else {
                    break;
                }
            }
        } else if text_is_component {
            v.visit_variable_use(name);
        }
    }

    /// Children after `>` up to the matching closing tag. Current
    /// token on entry (and at each loop head) is a delimiter whose end
    /// is where raw JSX text starts; the final `>` of the closing tag
    /// is left current for the caller.
    fn parse_jsx_children<V: ParseVisitor>(&mut self, v: &mut V, open_span: TextSpan) {
        loop {
            // Raw text until `<` or `{`, starting after the current
            // delimiter token.
            self.scanner.rescan_jsx_text();
            self.advance();
            match self.kind() {
                SyntaxKind::OpenBraceToken => {
                    self.advance();
                    if self.kind() != SyntaxKind::CloseBraceToken {
                        let child = self.parse_assignment_expression(v);
                        self.flush_use(v, child);
                    }
                    if self.kind() != SyntaxKind::CloseBraceToken {
                        self.report(DiagKind::UnclosedJsxElement, "element_open", open_span);
                        return;
                    }
                    // Leave `}` current; the next iteration re-lexes
                    // the text after it.
                    continue;
                }
                SyntaxKind::LessThanToken => {
                    if self.peek().kind == SyntaxKind::SlashToken {
                        // Closing tag.
                        self.advance();
                        self.advance();
                        while self.kind().is_identifier_or_keyword()
                            || self.kind() == SyntaxKind::DotToken
                        {
                            self.advance();
                        }
                        if self.kind() != SyntaxKind::GreaterThanToken {
                            self.report(
                                DiagKind::UnclosedJsxElement,
                                "element_open",
                                open_span,
                            );
                        }
                        return;
                    }
                    self.parse_jsx_element(v);
                    if self.kind() != SyntaxKind::GreaterThanToken {
                        return;
                    }
                    continue;
                }
                _ => {
                    self.report(DiagKind::UnclosedJsxElement, "element_open", open_span);
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Left-hand sides and helpers
    // ========================================================================

    /// Used for `extends` clauses: a member-access chain or call.
    fn parse_left_hand_side_expression<V: ParseVisitor>(&mut self, v: &mut V) -> ExprResult {
        self.parse_postfix_expression(v)
    }

    /// Turn a held-back identifier into a use event; no-op otherwise.
    fn flush_use<V: ParseVisitor>(&mut self, v: &mut V, result: ExprResult) {
        if let ExprResult::Ident(id) = result {
            v.visit_variable_use(id);
        }
    }
}
