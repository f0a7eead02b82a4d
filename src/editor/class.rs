use crate::diagnostics::EditError;
use crate::parser::ast::*;
use crate::parser::fragment::FragmentParser;
use crate::serialize::{serialize, Value};
use crate::span::{Span, Spanned};

use super::{MethodEditor, PropertyEditor};

/// Mutable editor wrapped around one class declaration inside a
/// caller-owned tree. Every mutation edits the node in place; sibling
/// order, flags, and metadata wrappers survive untouched. Mutators return
/// the editor for chaining.
pub struct ClassEditor<'a> {
    class: &'a mut ClassDecl,
    fragments: &'a FragmentParser,
}

impl<'a> ClassEditor<'a> {
    /// Wrap an already-located class node.
    pub fn new(class: &'a mut ClassDecl, fragments: &'a FragmentParser) -> Self {
        Self { class, fragments }
    }

    /// Locate a class by name in a parsed tree and wrap it for editing.
    /// Absent is `None`, never an error. Anonymous classes never match.
    pub fn locate(
        program: &'a mut Program,
        name: &str,
        fragments: &'a FragmentParser,
    ) -> Option<ClassEditor<'a>> {
        let idx = program
            .classes
            .iter()
            .position(|c| c.node.name.as_ref().is_some_and(|n| n.node == name))?;
        Some(Self::new(&mut program.classes[idx].node, fragments))
    }

    /// Read access to the wrapped declaration.
    pub fn decl(&self) -> &ClassDecl {
        self.class
    }

    pub fn name(&self) -> Option<&str> {
        self.class.name.as_ref().map(|n| n.node.as_str())
    }

    /// Set the class name. No identifier validation happens here.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        match &mut self.class.name {
            Some(existing) => existing.node = name.to_string(),
            None => self.class.name = Some(Spanned::dummy(name.to_string())),
        }
        self
    }

    /// Point `extends` at the given class, or clear it with `None`. The
    /// name goes through the fragment grammar instead of hand-rolled
    /// qualified-name parsing, so any reference the parser accepts works
    /// here, and anything else fails with a fragment error.
    pub fn set_extends(&mut self, name: Option<&str>) -> Result<&mut Self, EditError> {
        match name {
            Some(name) => {
                let class = self
                    .fragments
                    .class_fragment(&format!("class a extends {name} {{}}"))?;
                self.class.extends = class.extends;
            }
            None => self.class.extends = None,
        }
        Ok(self)
    }

    pub fn extends(&self) -> Option<&NameRef> {
        self.class.extends.as_ref()
    }

    /// Replace the implements list; an empty slice clears it to the absent
    /// state.
    pub fn set_implements(&mut self, names: &[&str]) -> Result<&mut Self, EditError> {
        if names.is_empty() {
            self.class.implements = None;
            return Ok(self);
        }
        let list = names.join(", ");
        let class = self
            .fragments
            .class_fragment(&format!("class a implements {list} {{}}"))?;
        self.class.implements = class.implements;
        Ok(self)
    }

    /// Implemented interface names in declaration order. Always a
    /// sequence: an absent list reads as empty. Namespace-relative
    /// references keep their `namespace\` marker.
    pub fn get_implements(&self) -> Vec<String> {
        self.class
            .implements
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|r| r.rendered())
            .collect()
    }

    /// Add an interface unless an entry with the exact same spelling is
    /// already present. Spelling-based: distinct qualifications of one
    /// interface count as different entries.
    pub fn add_implements(&mut self, name: &str) -> Result<&mut Self, EditError> {
        let mut list = self.get_implements();
        if !list.iter().any(|n| n == name) {
            list.push(name.to_string());
            let refs: Vec<&str> = list.iter().map(String::as_str).collect();
            self.set_implements(&refs)?;
        }
        Ok(self)
    }

    /// Used trait names across every trait-use entry, in body order.
    pub fn get_traits(&self) -> Vec<String> {
        self.class
            .body
            .iter()
            .filter_map(|m| match &m.node {
                Member::TraitUse(u) => Some(u),
                _ => None,
            })
            .flat_map(|u| u.traits.iter().map(|r| r.rendered()))
            .collect()
    }

    /// Replace every trait-use entry with a single fresh one; an empty
    /// slice removes them all. The new entry lands where the first old one
    /// sat, or at the front of the body for a class that had none.
    pub fn set_traits(&mut self, names: &[&str]) -> Result<&mut Self, EditError> {
        let member = if names.is_empty() {
            None
        } else {
            let list = names.join(", ");
            let snippet = format!("class a {{ use {list}; }}");
            let mut class = self.fragments.class_fragment(&snippet)?;
            match class.body.pop() {
                Some(member @ Spanned { node: Member::TraitUse(_), .. }) => Some(member),
                _ => {
                    return Err(EditError::fragment(
                        snippet,
                        EditError::syntax("expected a trait use declaration", Span::dummy()),
                    ));
                }
            }
        };

        let at = self
            .class
            .body
            .iter()
            .position(|m| matches!(m.node, Member::TraitUse(_)))
            .unwrap_or(0);
        self.class.body.retain(|m| !matches!(m.node, Member::TraitUse(_)));
        if let Some(member) = member {
            let at = at.min(self.class.body.len());
            self.class.body.insert(at, member);
        }
        Ok(self)
    }

    /// Add a trait unless an entry with the exact same spelling is already
    /// present.
    pub fn add_trait(&mut self, name: &str) -> Result<&mut Self, EditError> {
        let mut list = self.get_traits();
        if !list.iter().any(|n| n == name) {
            list.push(name.to_string());
            let refs: Vec<&str> = list.iter().map(String::as_str).collect();
            self.set_traits(&refs)?;
        }
        Ok(self)
    }

    /// Look up a property editor by name.
    pub fn get_property(&mut self, name: &str) -> Option<PropertyEditor<'_>> {
        PropertyEditor::locate(&mut self.class.body, name, self.fragments)
    }

    /// Create or update a property. A new one is spliced at the front of
    /// the body. An existing one is updated in place, only for the
    /// arguments actually supplied. `value` is raw initializer source,
    /// embedded as-is: the caller pre-renders it.
    pub fn set_property(
        &mut self,
        name: &str,
        value: Option<&str>,
        flags: Option<&str>,
    ) -> Result<&mut Self, EditError> {
        if let Some(mut property) = PropertyEditor::locate(&mut self.class.body, name, self.fragments) {
            if let Some(flags) = flags {
                property.set_flags(flags)?;
            }
            if let Some(value) = value {
                property.set_value(value)?;
            }
            return Ok(self);
        }

        let flags = flags.unwrap_or("public");
        let snippet = match value {
            Some(value) => format!("class a {{ {flags} ${name} = {value}; }}"),
            None => format!("class a {{ {flags} ${name}; }}"),
        };
        let mut class = self.fragments.class_fragment(&snippet)?;
        match class.body.pop() {
            Some(member @ Spanned { node: Member::Property(_), .. }) => {
                self.class.body.insert(0, member);
                Ok(self)
            }
            _ => Err(EditError::fragment(
                snippet,
                EditError::syntax("expected a property declaration", Span::dummy()),
            )),
        }
    }

    /// Look up a method editor by name.
    pub fn get_method(&mut self, name: &str) -> Option<MethodEditor<'_>> {
        MethodEditor::locate(&mut self.class.body, name, self.fragments)
    }

    /// Create or update a method. A new one is appended at the back of the
    /// body — the mirror of property insertion, and deliberately so. An
    /// existing one is updated in place, only for the arguments actually
    /// supplied.
    pub fn set_method(
        &mut self,
        name: &str,
        args: Option<&str>,
        body: Option<&str>,
        flags: Option<&str>,
    ) -> Result<&mut Self, EditError> {
        if let Some(mut method) = MethodEditor::locate(&mut self.class.body, name, self.fragments) {
            if let Some(flags) = flags {
                method.set_flags(flags)?;
            }
            if let Some(args) = args {
                method.set_args(args)?;
            }
            if let Some(body) = body {
                method.set_code(body)?;
            }
            return Ok(self);
        }

        let flags = flags.unwrap_or("public");
        let args = args.unwrap_or("");
        let body = body.unwrap_or("");
        let snippet = format!("class a {{ {flags} function {name}({args}) {{ {body} }} }}");
        let mut class = self.fragments.class_fragment(&snippet)?;
        match class.body.pop() {
            Some(member @ Spanned { node: Member::Method(_), .. }) => {
                self.class.body.push(member);
                Ok(self)
            }
            _ => Err(EditError::fragment(
                snippet,
                EditError::syntax("expected a method declaration", Span::dummy()),
            )),
        }
    }

    /// Deserialized value of a class constant; `None` when no such
    /// constant exists (or its stored text is not a literal).
    pub fn get_constant(&self, name: &str) -> Option<Value> {
        let decl = self
            .class
            .constants
            .iter()
            .map(ConstEntry::decl)
            .find(|d| d.name == name)?;
        let expr = self.fragments.expr_fragment(&decl.value).ok()?;
        Value::from_expr(&expr.node)
    }

    /// Write a class constant: when the name exists, the canonical value
    /// slot is overwritten in place and any metadata wrappers stay as they
    /// were; otherwise a bare entry is appended.
    pub fn set_constant(&mut self, name: &str, value: &Value) -> &mut Self {
        for entry in &mut self.class.constants {
            let decl = entry.decl_mut();
            if decl.name == name {
                decl.value = serialize(value);
                return self;
            }
        }
        self.class.constants.push(ConstEntry::Bare(ConstDecl {
            name: name.to_string(),
            value: serialize(value),
        }));
        self
    }
}
