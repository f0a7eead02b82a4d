use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Syntax error: {msg}")]
    Syntax { msg: String, span: Span },

    #[error("Failed to parse fragment `{snippet}`")]
    Fragment {
        snippet: String,
        #[source]
        source: Box<EditError>,
    },

    #[error("Unsupported construct: {what}")]
    Unsupported { what: String, span: Span },
}

impl EditError {
    pub fn syntax(msg: impl Into<String>, span: Span) -> Self {
        Self::Syntax { msg: msg.into(), span }
    }

    pub fn fragment(snippet: impl Into<String>, source: EditError) -> Self {
        Self::Fragment { snippet: snippet.into(), source: Box::new(source) }
    }

    pub fn unsupported(what: impl Into<String>, span: Span) -> Self {
        Self::Unsupported { what: what.into(), span }
    }
}

/// Render an EditError with ariadne for nice terminal output.
pub fn render_error(source: &str, err: &EditError) {
    use ariadne::{Label, Report, ReportKind, Source};

    match err {
        EditError::Syntax { msg, span } | EditError::Unsupported { what: msg, span } => {
            let kind_str = match err {
                EditError::Syntax { .. } => "syntax",
                EditError::Unsupported { .. } => "unsupported",
                _ => unreachable!(),
            };
            Report::build(ReportKind::Error, (), span.start)
                .with_message(format!("{kind_str} error"))
                .with_label(
                    Label::new(span.start..span.end)
                        .with_message(msg),
                )
                .finish()
                .eprint(Source::from(source))
                .unwrap();
        }
        EditError::Fragment { snippet, source: cause } => {
            eprintln!("error: failed to parse fragment `{snippet}`");
            // The inner error's spans point into the fragment, not the caller's source.
            render_error(snippet, cause);
        }
    }
}
