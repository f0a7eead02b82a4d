use crate::span::{Span, Spanned};

#[derive(Debug, Default)]
pub struct Program {
    pub classes: Vec<Spanned<ClassDecl>>,
    pub functions: Vec<Spanned<FunctionDecl>>,
}

/// One class declaration. The editor mutates these in place; the caller
/// owns the surrounding tree and its lifetime.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    /// Absent name = anonymous class.
    pub name: Option<Spanned<String>>,
    pub modifiers: ClassModifiers,
    /// Absent is `None`, never an empty reference.
    pub extends: Option<NameRef>,
    /// Absent is `None`, never `Some(vec![])`, at the storage layer.
    /// `ClassEditor::get_implements` normalizes on the way out.
    pub implements: Option<Vec<NameRef>>,
    /// Declaration order, preserved except for explicit inserts.
    pub body: Vec<Spanned<Member>>,
    pub constants: Vec<ConstEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassModifiers {
    pub is_abstract: bool,
    pub is_final: bool,
}

/// A class/interface/trait reference as written in source. Names pass
/// through literally; no namespace resolution happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRef {
    pub name: String,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `Foo`
    Unqualified,
    /// `Foo\Bar`
    Qualified,
    /// `\Foo\Bar`
    FullyQualified,
    /// `namespace\Foo`
    NamespaceRelative,
}

impl NameRef {
    /// The name as the implements/traits getters report it: namespace-relative
    /// references carry their `namespace\` marker, everything else is the
    /// literal stored name.
    pub fn rendered(&self) -> String {
        match self.resolution {
            Resolution::NamespaceRelative => format!("namespace\\{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// The name as it is written back to source, qualification markers
    /// included.
    pub fn source_form(&self) -> String {
        match self.resolution {
            Resolution::FullyQualified => format!("\\{}", self.name),
            Resolution::NamespaceRelative => format!("namespace\\{}", self.name),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Member {
    Property(PropertyDecl),
    Method(MethodDecl),
    TraitUse(TraitUseDecl),
}

#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub flags: MemberFlags,
    pub name: Spanned<String>,
    pub default: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub flags: MemberFlags,
    pub name: Spanned<String>,
    pub params: Vec<Param>,
    /// Absent body = abstract declaration.
    pub body: Option<Spanned<Block>>,
}

#[derive(Debug, Clone)]
pub struct TraitUseDecl {
    pub traits: Vec<NameRef>,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: Spanned<String>,
    pub by_ref: bool,
    pub default: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberFlags {
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// A class constant entry. The canonical declaration may be wrapped by up
/// to two metadata layers kept for re-serialization: a position wrapper
/// (outer) and a doc-comment wrapper (inner). Entries appended by the
/// editor are always `Bare`.
#[derive(Debug, Clone)]
pub enum ConstEntry {
    Bare(ConstDecl),
    WithPosition { span: Span, entry: Box<ConstEntry> },
    WithDoc { doc: String, entry: Box<ConstEntry> },
}

/// Canonical constant declaration: a name and its value as literal source
/// text (the serializer's output, or the original source slice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    pub name: String,
    pub value: String,
}

impl ConstEntry {
    /// Unwrap metadata layers down to the canonical declaration.
    pub fn decl(&self) -> &ConstDecl {
        match self {
            ConstEntry::Bare(decl) => decl,
            ConstEntry::WithPosition { entry, .. } | ConstEntry::WithDoc { entry, .. } => entry.decl(),
        }
    }

    pub fn decl_mut(&mut self) -> &mut ConstDecl {
        match self {
            ConstEntry::Bare(decl) => decl,
            ConstEntry::WithPosition { entry, .. } | ConstEntry::WithDoc { entry, .. } => entry.decl_mut(),
        }
    }

    /// The innermost doc comment wrapper, if any layer carries one.
    pub fn doc(&self) -> Option<&str> {
        match self {
            ConstEntry::Bare(_) => None,
            ConstEntry::WithPosition { entry, .. } => entry.doc(),
            ConstEntry::WithDoc { doc, .. } => Some(doc),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: Spanned<String>,
    pub params: Vec<Param>,
    pub body: Spanned<Block>,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Spanned<Stmt>>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expr(Spanned<Expr>),
    Return(Option<Spanned<Expr>>),
    Echo(Vec<Spanned<Expr>>),
    If {
        condition: Spanned<Expr>,
        then_block: Spanned<Block>,
        else_block: Option<Spanned<Block>>,
    },
    While {
        condition: Spanned<Expr>,
        body: Spanned<Block>,
    },
}

#[derive(Debug, Clone)]
pub enum Expr {
    NullLit,
    BoolLit(bool),
    IntLit(i64),
    FloatLit(f64),
    StringLit(String),
    Variable(String),
    /// Bare name in expression position (constant fetch, callee).
    Name(NameRef),
    ArrayLit {
        entries: Vec<ArrayEntry>,
    },
    Assign {
        target: Box<Spanned<Expr>>,
        value: Box<Spanned<Expr>>,
    },
    BinOp {
        op: BinOp,
        lhs: Box<Spanned<Expr>>,
        rhs: Box<Spanned<Expr>>,
    },
    UnaryOp {
        op: UnaryOp,
        operand: Box<Spanned<Expr>>,
    },
    Call {
        callee: Box<Spanned<Expr>>,
        args: Vec<Spanned<Expr>>,
    },
    MethodCall {
        object: Box<Spanned<Expr>>,
        method: Spanned<String>,
        args: Vec<Spanned<Expr>>,
    },
    PropFetch {
        object: Box<Spanned<Expr>>,
        prop: Spanned<String>,
    },
    ClassConstFetch {
        class: NameRef,
        constant: Spanned<String>,
    },
    Index {
        object: Box<Spanned<Expr>>,
        index: Box<Spanned<Expr>>,
    },
    New {
        class: NameRef,
        args: Vec<Spanned<Expr>>,
    },
    /// `new class(...) { ... }`
    AnonClass {
        args: Vec<Spanned<Expr>>,
        class: Box<Spanned<ClassDecl>>,
    },
}

#[derive(Debug, Clone)]
pub struct ArrayEntry {
    pub key: Option<Spanned<Expr>>,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Concat,
    Eq,
    Neq,
    Identical,
    NotIdentical,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Neg,
    Not,
}
