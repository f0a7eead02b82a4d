use crate::parser::ast::*;
use crate::span::Spanned;

/// Pretty-print a `Program` AST back into source text.
pub fn pretty_print(program: &Program) -> String {
    let mut pp = PrettyPrinter::new();
    pp.emit_program(program);
    pp.buf
}

/// Pretty-print a single class declaration.
pub fn pretty_print_class(class: &ClassDecl) -> String {
    let mut pp = PrettyPrinter::new();
    pp.emit_class(class);
    pp.buf
}

struct PrettyPrinter {
    buf: String,
    indent: usize,
}

impl PrettyPrinter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
        }
    }

    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.buf.push_str("    ");
        }
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn dedent(&mut self) {
        self.indent -= 1;
    }

    // ── Program ──────────────────────────────────────────────────────

    fn emit_program(&mut self, program: &Program) {
        let mut first = true;

        for class in &program.classes {
            if !first {
                self.newline();
            }
            first = false;
            self.emit_class(&class.node);
            self.newline();
        }

        for func in &program.functions {
            if !first {
                self.newline();
            }
            first = false;
            self.emit_function(&func.node);
            self.newline();
        }
    }

    fn emit_class(&mut self, class: &ClassDecl) {
        if class.modifiers.is_abstract {
            self.write("abstract ");
        }
        if class.modifiers.is_final {
            self.write("final ");
        }
        self.write("class");
        if let Some(name) = &class.name {
            self.write(" ");
            self.write(&name.node);
        }
        self.emit_class_tail(class);
    }

    /// Everything after the class name: heritage clauses and braced body.
    /// Shared with anonymous class expressions.
    fn emit_class_tail(&mut self, class: &ClassDecl) {
        if let Some(base) = &class.extends {
            self.write(" extends ");
            self.write(&base.source_form());
        }
        if let Some(refs) = &class.implements {
            self.write(" implements ");
            let joined: Vec<String> = refs.iter().map(|r| r.source_form()).collect();
            self.write(&joined.join(", "));
        }

        self.write(" {");
        self.newline();
        self.indent();

        for entry in &class.constants {
            if let Some(doc) = entry.doc() {
                self.write_indent();
                self.write(doc);
                self.newline();
            }
            let decl = entry.decl();
            self.write_indent();
            self.write("const ");
            self.write(&decl.name);
            self.write(" = ");
            self.write(&decl.value);
            self.write(";");
            self.newline();
        }

        for member in &class.body {
            self.emit_member(&member.node);
        }

        self.dedent();
        self.write_indent();
        self.write("}");
    }

    fn emit_member(&mut self, member: &Member) {
        match member {
            Member::Property(p) => {
                self.write_indent();
                let flags = flags_words(&p.flags);
                if flags.is_empty() {
                    self.write("var ");
                } else {
                    self.write(&flags.join(" "));
                    self.write(" ");
                }
                self.write("$");
                self.write(&p.name.node);
                if let Some(default) = &p.default {
                    self.write(" = ");
                    self.emit_expr(&default.node);
                }
                self.write(";");
                self.newline();
            }
            Member::Method(m) => {
                self.write_indent();
                let flags = flags_words(&m.flags);
                if !flags.is_empty() {
                    self.write(&flags.join(" "));
                    self.write(" ");
                }
                self.write("function ");
                self.write(&m.name.node);
                self.write("(");
                self.emit_params(&m.params);
                self.write(")");
                match &m.body {
                    Some(body) => {
                        self.write(" ");
                        self.emit_block(&body.node);
                    }
                    None => self.write(";"),
                }
                self.newline();
            }
            Member::TraitUse(u) => {
                self.write_indent();
                self.write("use ");
                let joined: Vec<String> = u.traits.iter().map(|r| r.source_form()).collect();
                self.write(&joined.join(", "));
                self.write(";");
                self.newline();
            }
        }
    }

    fn emit_function(&mut self, func: &FunctionDecl) {
        self.write("function ");
        self.write(&func.name.node);
        self.write("(");
        self.emit_params(&func.params);
        self.write(") ");
        self.emit_block(&func.body.node);
    }

    fn emit_params(&mut self, params: &[Param]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if param.by_ref {
                self.write("&");
            }
            self.write("$");
            self.write(&param.name.node);
            if let Some(default) = &param.default {
                self.write(" = ");
                self.emit_expr(&default.node);
            }
        }
    }

    // ── Statements ───────────────────────────────────────────────────

    fn emit_block(&mut self, block: &Block) {
        self.write("{");
        self.newline();
        self.indent();
        for stmt in &block.stmts {
            self.write_indent();
            self.emit_stmt(&stmt.node);
            self.newline();
        }
        self.dedent();
        self.write_indent();
        self.write("}");
    }

    fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(e) => {
                self.emit_expr(&e.node);
                self.write(";");
            }
            Stmt::Return(value) => {
                self.write("return");
                if let Some(value) = value {
                    self.write(" ");
                    self.emit_expr(&value.node);
                }
                self.write(";");
            }
            Stmt::Echo(exprs) => {
                self.write("echo ");
                for (i, e) in exprs.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expr(&e.node);
                }
                self.write(";");
            }
            Stmt::If { condition, then_block, else_block } => {
                self.write("if (");
                self.emit_expr(&condition.node);
                self.write(") ");
                self.emit_block(&then_block.node);
                if let Some(eb) = else_block {
                    self.write(" else ");
                    self.emit_block(&eb.node);
                }
            }
            Stmt::While { condition, body } => {
                self.write("while (");
                self.emit_expr(&condition.node);
                self.write(") ");
                self.emit_block(&body.node);
            }
        }
    }

    // ── Expressions ──────────────────────────────────────────────────

    fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::NullLit => self.write("null"),
            Expr::BoolLit(true) => self.write("true"),
            Expr::BoolLit(false) => self.write("false"),
            Expr::IntLit(n) => self.write(&n.to_string()),
            Expr::FloatLit(x) => {
                if x.fract() == 0.0 && x.is_finite() {
                    self.write(&format!("{x:.1}"));
                } else {
                    self.write(&format!("{x}"));
                }
            }
            Expr::StringLit(s) => {
                self.write(&format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")));
            }
            Expr::Variable(name) => {
                self.write("$");
                self.write(name);
            }
            Expr::Name(name_ref) => self.write(&name_ref.source_form()),
            Expr::ArrayLit { entries } => {
                self.write("[");
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(key) = &entry.key {
                        self.emit_expr(&key.node);
                        self.write(" => ");
                    }
                    self.emit_expr(&entry.value.node);
                }
                self.write("]");
            }
            Expr::Assign { target, value } => {
                self.emit_expr(&target.node);
                self.write(" = ");
                self.emit_expr(&value.node);
            }
            Expr::BinOp { op, lhs, rhs } => {
                let prec = binop_prec(*op);
                self.emit_operand(&lhs.node, prec);
                self.write(&format!(" {} ", binop_str(*op)));
                // Right operand at the same precedence re-parenthesizes to
                // keep left associativity on re-parse.
                self.emit_operand_right(&rhs.node, prec);
            }
            Expr::UnaryOp { op, operand } => {
                self.write(match op {
                    UnaryOp::Neg => "-",
                    UnaryOp::Not => "!",
                });
                self.emit_operand(&operand.node, 15);
            }
            Expr::Call { callee, args } => {
                self.emit_operand(&callee.node, 17);
                self.write("(");
                self.emit_args(args);
                self.write(")");
            }
            Expr::MethodCall { object, method, args } => {
                self.emit_operand(&object.node, 17);
                self.write("->");
                self.write(&method.node);
                self.write("(");
                self.emit_args(args);
                self.write(")");
            }
            Expr::PropFetch { object, prop } => {
                self.emit_operand(&object.node, 17);
                self.write("->");
                self.write(&prop.node);
            }
            Expr::ClassConstFetch { class, constant } => {
                self.write(&class.source_form());
                self.write("::");
                self.write(&constant.node);
            }
            Expr::Index { object, index } => {
                self.emit_operand(&object.node, 17);
                self.write("[");
                self.emit_expr(&index.node);
                self.write("]");
            }
            Expr::New { class, args } => {
                self.write("new ");
                self.write(&class.source_form());
                self.write("(");
                self.emit_args(args);
                self.write(")");
            }
            Expr::AnonClass { args, class } => {
                self.write("new class");
                if !args.is_empty() {
                    self.write("(");
                    self.emit_args(args);
                    self.write(")");
                }
                self.emit_class_tail(&class.node);
            }
        }
    }

    fn emit_args(&mut self, args: &[Spanned<Expr>]) {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expr(&arg.node);
        }
    }

    fn emit_operand(&mut self, expr: &Expr, parent_prec: u8) {
        if expr_prec(expr) < parent_prec {
            self.write("(");
            self.emit_expr(expr);
            self.write(")");
        } else {
            self.emit_expr(expr);
        }
    }

    fn emit_operand_right(&mut self, expr: &Expr, parent_prec: u8) {
        if expr_prec(expr) <= parent_prec {
            self.write("(");
            self.emit_expr(expr);
            self.write(")");
        } else {
            self.emit_expr(expr);
        }
    }
}

fn flags_words(flags: &MemberFlags) -> Vec<&'static str> {
    let mut words = Vec::new();
    if flags.is_abstract {
        words.push("abstract");
    }
    if flags.is_final {
        words.push("final");
    }
    match flags.visibility {
        Some(Visibility::Public) => words.push("public"),
        Some(Visibility::Protected) => words.push("protected"),
        Some(Visibility::Private) => words.push("private"),
        None => {}
    }
    if flags.is_static {
        words.push("static");
    }
    words
}

fn binop_str(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
        BinOp::Concat => ".",
        BinOp::Eq => "==",
        BinOp::Neq => "!=",
        BinOp::Identical => "===",
        BinOp::NotIdentical => "!==",
        BinOp::Lt => "<",
        BinOp::Gt => ">",
        BinOp::LtEq => "<=",
        BinOp::GtEq => ">=",
        BinOp::And => "&&",
        BinOp::Or => "||",
    }
}

fn binop_prec(op: BinOp) -> u8 {
    match op {
        BinOp::Or => 3,
        BinOp::And => 5,
        BinOp::Eq | BinOp::Neq | BinOp::Identical | BinOp::NotIdentical => 7,
        BinOp::Lt | BinOp::Gt | BinOp::LtEq | BinOp::GtEq => 9,
        BinOp::Add | BinOp::Sub | BinOp::Concat => 11,
        BinOp::Mul | BinOp::Div | BinOp::Mod => 13,
    }
}

fn expr_prec(expr: &Expr) -> u8 {
    match expr {
        Expr::Assign { .. } => 2,
        Expr::BinOp { op, .. } => binop_prec(*op),
        Expr::UnaryOp { .. } => 15,
        Expr::New { .. } | Expr::AnonClass { .. } => 16,
        _ => 20,
    }
}
