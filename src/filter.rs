use crate::parser::ast::*;

/// The node kinds the generic locator can visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Class,
    Property,
    Method,
    Constant,
    TraitUse,
}

/// Borrowed view of one visited node.
#[derive(Debug)]
pub enum NodeRef<'a> {
    Class(&'a ClassDecl),
    Property(&'a PropertyDecl),
    Method(&'a MethodDecl),
    Constant(&'a ConstDecl),
    TraitUse(&'a TraitUseDecl),
}

/// Visit every node of `kind` in the tree, invoke the predicate on each,
/// and collect the non-absent results in encounter order. No stronger
/// ordering is guaranteed. Read-only: the same call serves "find a class
/// by name" and "find a member by name" alike.
pub fn filter<'a, T, F>(program: &'a Program, kind: NodeKind, mut predicate: F) -> Vec<T>
where
    F: FnMut(NodeRef<'a>) -> Option<T>,
{
    let mut results = Vec::new();
    for class in &program.classes {
        visit_class(&class.node, kind, &mut predicate, &mut results);
    }
    for func in &program.functions {
        visit_block(&func.node.body.node, kind, &mut predicate, &mut results);
    }
    results
}

fn visit_class<'a, T, F>(class: &'a ClassDecl, kind: NodeKind, predicate: &mut F, results: &mut Vec<T>)
where
    F: FnMut(NodeRef<'a>) -> Option<T>,
{
    if kind == NodeKind::Class {
        if let Some(hit) = predicate(NodeRef::Class(class)) {
            results.push(hit);
        }
    }

    if kind == NodeKind::Constant {
        for entry in &class.constants {
            if let Some(hit) = predicate(NodeRef::Constant(entry.decl())) {
                results.push(hit);
            }
        }
    }

    for member in &class.body {
        match &member.node {
            Member::Property(p) => {
                if kind == NodeKind::Property {
                    if let Some(hit) = predicate(NodeRef::Property(p)) {
                        results.push(hit);
                    }
                }
            }
            Member::Method(m) => {
                if kind == NodeKind::Method {
                    if let Some(hit) = predicate(NodeRef::Method(m)) {
                        results.push(hit);
                    }
                }
                if let Some(body) = &m.body {
                    visit_block(&body.node, kind, predicate, results);
                }
            }
            Member::TraitUse(u) => {
                if kind == NodeKind::TraitUse {
                    if let Some(hit) = predicate(NodeRef::TraitUse(u)) {
                        results.push(hit);
                    }
                }
            }
        }
    }
}

fn visit_block<'a, T, F>(block: &'a Block, kind: NodeKind, predicate: &mut F, results: &mut Vec<T>)
where
    F: FnMut(NodeRef<'a>) -> Option<T>,
{
    for stmt in &block.stmts {
        visit_stmt(&stmt.node, kind, predicate, results);
    }
}

fn visit_stmt<'a, T, F>(stmt: &'a Stmt, kind: NodeKind, predicate: &mut F, results: &mut Vec<T>)
where
    F: FnMut(NodeRef<'a>) -> Option<T>,
{
    match stmt {
        Stmt::Expr(e) => visit_expr(&e.node, kind, predicate, results),
        Stmt::Return(Some(e)) => visit_expr(&e.node, kind, predicate, results),
        Stmt::Return(None) => {}
        Stmt::Echo(exprs) => {
            for e in exprs {
                visit_expr(&e.node, kind, predicate, results);
            }
        }
        Stmt::If { condition, then_block, else_block } => {
            visit_expr(&condition.node, kind, predicate, results);
            visit_block(&then_block.node, kind, predicate, results);
            if let Some(eb) = else_block {
                visit_block(&eb.node, kind, predicate, results);
            }
        }
        Stmt::While { condition, body } => {
            visit_expr(&condition.node, kind, predicate, results);
            visit_block(&body.node, kind, predicate, results);
        }
    }
}

fn visit_expr<'a, T, F>(expr: &'a Expr, kind: NodeKind, predicate: &mut F, results: &mut Vec<T>)
where
    F: FnMut(NodeRef<'a>) -> Option<T>,
{
    match expr {
        Expr::ArrayLit { entries } => {
            for entry in entries {
                if let Some(key) = &entry.key {
                    visit_expr(&key.node, kind, predicate, results);
                }
                visit_expr(&entry.value.node, kind, predicate, results);
            }
        }
        Expr::Assign { target, value } => {
            visit_expr(&target.node, kind, predicate, results);
            visit_expr(&value.node, kind, predicate, results);
        }
        Expr::BinOp { lhs, rhs, .. } => {
            visit_expr(&lhs.node, kind, predicate, results);
            visit_expr(&rhs.node, kind, predicate, results);
        }
        Expr::UnaryOp { operand, .. } => {
            visit_expr(&operand.node, kind, predicate, results);
        }
        Expr::Call { callee, args } => {
            visit_expr(&callee.node, kind, predicate, results);
            for arg in args {
                visit_expr(&arg.node, kind, predicate, results);
            }
        }
        Expr::MethodCall { object, args, .. } => {
            visit_expr(&object.node, kind, predicate, results);
            for arg in args {
                visit_expr(&arg.node, kind, predicate, results);
            }
        }
        Expr::PropFetch { object, .. } => {
            visit_expr(&object.node, kind, predicate, results);
        }
        Expr::Index { object, index } => {
            visit_expr(&object.node, kind, predicate, results);
            visit_expr(&index.node, kind, predicate, results);
        }
        Expr::New { args, .. } => {
            for arg in args {
                visit_expr(&arg.node, kind, predicate, results);
            }
        }
        Expr::AnonClass { args, class } => {
            for arg in args {
                visit_expr(&arg.node, kind, predicate, results);
            }
            visit_class(&class.node, kind, predicate, results);
        }
        // Leaf expressions
        _ => {}
    }
}
