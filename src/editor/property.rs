use crate::diagnostics::EditError;
use crate::parser::ast::{Member, PropertyDecl};
use crate::parser::fragment::FragmentParser;
use crate::span::{Span, Spanned};

/// Mutable editor over one property declaration in a class body.
pub struct PropertyEditor<'a> {
    prop: &'a mut PropertyDecl,
    fragments: &'a FragmentParser,
}

impl<'a> PropertyEditor<'a> {
    /// Locate a property by name within a class body. Absent is `None`,
    /// never an error.
    pub fn locate(
        body: &'a mut [Spanned<Member>],
        name: &str,
        fragments: &'a FragmentParser,
    ) -> Option<PropertyEditor<'a>> {
        body.iter_mut()
            .find_map(|member| match &mut member.node {
                Member::Property(p) if p.name.node == name => Some(p),
                _ => None,
            })
            .map(|prop| PropertyEditor { prop, fragments })
    }

    pub fn decl(&self) -> &PropertyDecl {
        self.prop
    }

    /// Replace the flag set with a freshly parsed one.
    pub fn set_flags(&mut self, flags: &str) -> Result<&mut Self, EditError> {
        let snippet = format!("class a {{ {flags} $__p; }}");
        let mut class = self.fragments.class_fragment(&snippet)?;
        match class.body.pop().map(|m| m.node) {
            Some(Member::Property(parsed)) => {
                self.prop.flags = parsed.flags;
                Ok(self)
            }
            _ => Err(EditError::fragment(
                snippet,
                EditError::syntax("expected a property declaration", Span::dummy()),
            )),
        }
    }

    /// Parse and install a new default value. The text is raw source for an
    /// expression, pre-rendered by the caller.
    pub fn set_value(&mut self, value: &str) -> Result<&mut Self, EditError> {
        let expr = self.fragments.expr_fragment(value)?;
        self.prop.default = Some(expr);
        Ok(self)
    }
}
