use crate::diagnostics::EditError;
use crate::parser::ast::{Member, MethodDecl};
use crate::parser::fragment::FragmentParser;
use crate::span::{Span, Spanned};

/// Mutable editor over one method declaration in a class body.
pub struct MethodEditor<'a> {
    method: &'a mut MethodDecl,
    fragments: &'a FragmentParser,
}

impl<'a> MethodEditor<'a> {
    /// Locate a method by name within a class body. Absent is `None`,
    /// never an error.
    pub fn locate(
        body: &'a mut [Spanned<Member>],
        name: &str,
        fragments: &'a FragmentParser,
    ) -> Option<MethodEditor<'a>> {
        body.iter_mut()
            .find_map(|member| match &mut member.node {
                Member::Method(m) if m.name.node == name => Some(m),
                _ => None,
            })
            .map(|method| MethodEditor { method, fragments })
    }

    pub fn decl(&self) -> &MethodDecl {
        self.method
    }

    /// Replace the flag set with a freshly parsed one.
    pub fn set_flags(&mut self, flags: &str) -> Result<&mut Self, EditError> {
        let snippet = format!("class a {{ {flags} function __m() {{}} }}");
        let parsed = self.extract_method(&snippet)?;
        self.method.flags = parsed.flags;
        Ok(self)
    }

    /// Replace the parameter list; the empty string clears it.
    pub fn set_args(&mut self, args: &str) -> Result<&mut Self, EditError> {
        let snippet = format!("class a {{ function __m({args}) {{}} }}");
        let parsed = self.extract_method(&snippet)?;
        self.method.params = parsed.params;
        Ok(self)
    }

    /// Replace the method body with freshly parsed statements.
    pub fn set_code(&mut self, code: &str) -> Result<&mut Self, EditError> {
        let snippet = format!("class a {{ function __m() {{ {code} }} }}");
        let parsed = self.extract_method(&snippet)?;
        self.method.body = parsed.body;
        Ok(self)
    }

    fn extract_method(&self, snippet: &str) -> Result<MethodDecl, EditError> {
        let mut class = self.fragments.class_fragment(snippet)?;
        match class.body.pop().map(|m| m.node) {
            Some(Member::Method(parsed)) => Ok(parsed),
            _ => Err(EditError::fragment(
                snippet,
                EditError::syntax("expected a method declaration", Span::dummy()),
            )),
        }
    }
}
