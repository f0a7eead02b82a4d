pub mod span;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod filter;
pub mod serialize;
pub mod pretty;
pub mod editor;

pub use diagnostics::{render_error, EditError};
pub use editor::{ClassEditor, MethodEditor, PropertyEditor};
pub use filter::{filter, NodeKind, NodeRef};
pub use parser::fragment::FragmentParser;
pub use pretty::{pretty_print, pretty_print_class};
pub use serialize::{serialize, Value};

use parser::ast::Program;

/// Lex and parse a complete source text into a tree the editors can work
/// on. The caller owns the result and its lifetime.
pub fn parse_source(source: &str) -> Result<Program, EditError> {
    let tokens = lexer::lex(source)?;
    let mut parser = parser::Parser::new(&tokens, source);
    parser.parse_program()
}
