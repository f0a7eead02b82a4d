use crate::diagnostics::EditError;
use crate::lexer;
use crate::span::{Span, Spanned};

use super::ast::{ClassDecl, Expr, Program, Stmt};
use super::Parser;

/// The parsing facility the editors depend on. Handed in explicitly at
/// editor construction; pure and re-entrant, so one instance serves any
/// number of editors.
#[derive(Debug, Default)]
pub struct FragmentParser;

impl FragmentParser {
    pub fn new() -> Self {
        Self
    }

    /// Lex and parse a complete source text.
    pub fn parse(&self, source: &str) -> Result<Program, EditError> {
        let tokens = lexer::lex(source)?;
        let mut parser = Parser::new(&tokens, source);
        parser.parse_program()
    }

    /// Parse a snippet expected to contain exactly one class declaration
    /// and nothing else. Any failure surfaces as a fragment error carrying
    /// the snippet verbatim.
    pub fn class_fragment(&self, snippet: &str) -> Result<ClassDecl, EditError> {
        let mut program = self
            .parse(snippet)
            .map_err(|e| EditError::fragment(snippet, e))?;

        if program.classes.len() != 1 || !program.functions.is_empty() {
            return Err(EditError::fragment(
                snippet,
                EditError::syntax("fragment must contain exactly one class", Span::dummy()),
            ));
        }
        Ok(program.classes.remove(0).node)
    }

    /// Parse a lone expression by wrapping it in a scratch function body.
    /// The resulting spans point into the wrapper and are only meaningful
    /// as relative offsets.
    pub fn expr_fragment(&self, snippet: &str) -> Result<Spanned<Expr>, EditError> {
        let wrapped = format!("function __f() {{ return {snippet}; }}");
        let mut program = self
            .parse(&wrapped)
            .map_err(|e| EditError::fragment(snippet, e))?;

        let func = match program.functions.pop() {
            Some(func) if program.classes.is_empty() => func,
            _ => {
                return Err(EditError::fragment(
                    snippet,
                    EditError::syntax("fragment must contain exactly one expression", Span::dummy()),
                ));
            }
        };

        let mut stmts = func.node.body.node.stmts;
        if stmts.len() != 1 {
            return Err(EditError::fragment(
                snippet,
                EditError::syntax("fragment must contain exactly one expression", Span::dummy()),
            ));
        }
        match stmts.remove(0).node {
            Stmt::Return(Some(expr)) => Ok(expr),
            _ => Err(EditError::fragment(
                snippet,
                EditError::syntax("fragment must contain exactly one expression", Span::dummy()),
            )),
        }
    }
}
