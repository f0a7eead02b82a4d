pub mod ast;
pub mod fragment;

use crate::diagnostics::EditError;
use crate::lexer::token::Token;
use crate::span::{Span, Spanned};
use ast::*;

pub struct Parser<'a> {
    tokens: &'a [Spanned<Token>],
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Spanned<Token>], source: &'a str) -> Self {
        Self { tokens, source, pos: 0 }
    }

    fn peek(&self) -> Option<&Spanned<Token>> {
        self.tokens.get(self.pos)
    }

    fn peek_is(&self, expected: &Token) -> bool {
        self.peek().is_some_and(|t| {
            std::mem::discriminant(&t.node) == std::mem::discriminant(expected)
        })
    }

    fn advance(&mut self) -> Option<&Spanned<Token>> {
        if self.pos < self.tokens.len() {
            let tok = &self.tokens[self.pos];
            self.pos += 1;
            Some(tok)
        } else {
            None
        }
    }

    /// Consume the next token if it matches, returning whether it did.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek_is(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<&Spanned<Token>, EditError> {
        match self.tokens.get(self.pos) {
            Some(tok) if std::mem::discriminant(&tok.node) == std::mem::discriminant(expected) => {
                self.pos += 1;
                Ok(&self.tokens[self.pos - 1])
            }
            Some(tok) => Err(EditError::syntax(
                format!("expected {expected}, found {}", tok.node),
                tok.span,
            )),
            None => Err(EditError::syntax(
                format!("expected {expected}, found end of input"),
                self.eof_span(),
            )),
        }
    }

    fn expect_ident(&mut self) -> Result<Spanned<String>, EditError> {
        match self.tokens.get(self.pos) {
            Some(tok) if matches!(tok.node, Token::Ident) => {
                let name = self.source[tok.span.start..tok.span.end].to_string();
                self.pos += 1;
                Ok(Spanned::new(name, tok.span))
            }
            Some(tok) => Err(EditError::syntax(
                format!("expected identifier, found {}", tok.node),
                tok.span,
            )),
            None => Err(EditError::syntax(
                "expected identifier, found end of input",
                self.eof_span(),
            )),
        }
    }

    fn expect_variable(&mut self) -> Result<Spanned<String>, EditError> {
        match self.tokens.get(self.pos) {
            Some(tok) => {
                if let Token::Variable(name) = &tok.node {
                    let name = name.clone();
                    let span = tok.span;
                    self.pos += 1;
                    Ok(Spanned::new(name, span))
                } else {
                    Err(EditError::syntax(
                        format!("expected variable, found {}", tok.node),
                        tok.span,
                    ))
                }
            }
            None => Err(EditError::syntax(
                "expected variable, found end of input",
                self.eof_span(),
            )),
        }
    }

    fn eof_span(&self) -> Span {
        if let Some(last) = self.tokens.last() {
            Span::new(last.span.end, last.span.end)
        } else {
            Span::dummy()
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, EditError> {
        let mut classes = Vec::new();
        let mut functions = Vec::new();

        while let Some(tok) = self.peek() {
            match &tok.node {
                Token::Abstract | Token::Final | Token::Class => {
                    classes.push(self.parse_class_decl()?);
                }
                Token::Function => {
                    functions.push(self.parse_function()?);
                }
                // Declaration-level doc comments are not modeled; only the
                // ones on class constants are kept.
                Token::DocComment(_) => {
                    self.advance();
                }
                _ => {
                    return Err(EditError::syntax(
                        format!("expected 'class' or 'function', found {}", tok.node),
                        tok.span,
                    ));
                }
            }
        }

        Ok(Program { classes, functions })
    }

    fn parse_class_decl(&mut self) -> Result<Spanned<ClassDecl>, EditError> {
        let start = self.peek().map(|t| t.span.start).unwrap_or(0);
        let mut modifiers = ClassModifiers::default();
        loop {
            if self.eat(&Token::Abstract) {
                modifiers.is_abstract = true;
            } else if self.eat(&Token::Final) {
                modifiers.is_final = true;
            } else {
                break;
            }
        }
        self.expect(&Token::Class)?;
        self.parse_class_rest(start, modifiers)
    }

    /// Parse everything after the `class` keyword: optional name, extends,
    /// implements, and the braced body. Shared with anonymous class
    /// expressions, where the name is absent.
    fn parse_class_rest(
        &mut self,
        start: usize,
        modifiers: ClassModifiers,
    ) -> Result<Spanned<ClassDecl>, EditError> {
        let name = if self.peek_is(&Token::Ident) {
            Some(self.expect_ident()?)
        } else {
            None
        };

        let extends = if self.eat(&Token::Extends) {
            Some(self.parse_name_ref()?)
        } else {
            None
        };

        let implements = if self.eat(&Token::Implements) {
            let mut refs = vec![self.parse_name_ref()?];
            while self.eat(&Token::Comma) {
                refs.push(self.parse_name_ref()?);
            }
            Some(refs)
        } else {
            None
        };

        self.expect(&Token::LBrace)?;
        let (body, constants) = self.parse_class_body()?;
        let close = self.expect(&Token::RBrace)?;
        let end = close.span.end;

        Ok(Spanned::new(
            ClassDecl { name, modifiers, extends, implements, body, constants },
            Span::new(start, end),
        ))
    }

    fn parse_class_body(&mut self) -> Result<(Vec<Spanned<Member>>, Vec<ConstEntry>), EditError> {
        let mut body = Vec::new();
        let mut constants = Vec::new();
        let mut pending_doc: Option<String> = None;

        while let Some(tok) = self.peek() {
            match &tok.node {
                Token::RBrace => break,
                Token::DocComment(text) => {
                    pending_doc = Some(text.clone());
                    self.advance();
                }
                Token::Use => {
                    body.push(self.parse_trait_use()?);
                    pending_doc = None;
                }
                Token::Const => {
                    self.parse_const_group(&mut constants, pending_doc.take())?;
                }
                _ => {
                    let start = tok.span.start;
                    let flags = self.parse_member_flags();

                    let tok = self.peek().ok_or_else(|| {
                        EditError::syntax("unexpected end of input in class body", self.eof_span())
                    })?;
                    match &tok.node {
                        Token::Const => {
                            return Err(EditError::unsupported(
                                "class constant visibility",
                                tok.span,
                            ));
                        }
                        Token::Function => {
                            body.push(self.parse_method(start, flags)?);
                        }
                        Token::Variable(_) => {
                            self.parse_property_group(start, flags, &mut body)?;
                        }
                        _ => {
                            return Err(EditError::syntax(
                                format!(
                                    "expected property, method, constant, or trait use in class body, found {}",
                                    tok.node
                                ),
                                tok.span,
                            ));
                        }
                    }
                    pending_doc = None;
                }
            }
        }

        Ok((body, constants))
    }

    fn parse_trait_use(&mut self) -> Result<Spanned<Member>, EditError> {
        let use_tok = self.expect(&Token::Use)?;
        let start = use_tok.span.start;

        let mut traits = vec![self.parse_name_ref()?];
        while self.eat(&Token::Comma) {
            traits.push(self.parse_name_ref()?);
        }

        // Conflict-resolution/alias blocks are deliberately out of scope.
        if let Some(tok) = self.peek() {
            if matches!(tok.node, Token::LBrace) {
                return Err(EditError::unsupported("trait adaptation block", tok.span));
            }
        }

        let close = self.expect(&Token::Semi)?;
        let end = close.span.end;
        Ok(Spanned::new(
            Member::TraitUse(TraitUseDecl { traits }),
            Span::new(start, end),
        ))
    }

    /// Parse `const A = expr, B = expr;`. Each entry is wrapped with its
    /// source position; a preceding doc comment wraps the first entry.
    fn parse_const_group(
        &mut self,
        constants: &mut Vec<ConstEntry>,
        mut pending_doc: Option<String>,
    ) -> Result<(), EditError> {
        self.expect(&Token::Const)?;

        loop {
            let name = self.expect_ident()?;
            self.expect(&Token::Eq)?;
            let value = self.parse_expr(0)?;
            let value_text = self.source[value.span.start..value.span.end].to_string();

            let decl = ConstDecl { name: name.node, value: value_text };
            let inner = match pending_doc.take() {
                Some(doc) => ConstEntry::WithDoc { doc, entry: Box::new(ConstEntry::Bare(decl)) },
                None => ConstEntry::Bare(decl),
            };
            constants.push(ConstEntry::WithPosition {
                span: Span::new(name.span.start, value.span.end),
                entry: Box::new(inner),
            });

            if !self.eat(&Token::Comma) {
                break;
            }
        }

        self.expect(&Token::Semi)?;
        Ok(())
    }

    fn parse_member_flags(&mut self) -> MemberFlags {
        let mut flags = MemberFlags::default();
        loop {
            let Some(tok) = self.peek() else { break };
            match tok.node {
                Token::Public => flags.visibility = Some(Visibility::Public),
                Token::Protected => flags.visibility = Some(Visibility::Protected),
                Token::Private => flags.visibility = Some(Visibility::Private),
                Token::Static => flags.is_static = true,
                Token::Abstract => flags.is_abstract = true,
                Token::Final => flags.is_final = true,
                // Legacy declaration keyword; carries no visibility of its own.
                Token::Var => {}
                _ => break,
            }
            self.advance();
        }
        flags
    }

    fn parse_method(&mut self, start: usize, flags: MemberFlags) -> Result<Spanned<Member>, EditError> {
        self.expect(&Token::Function)?;
        let name = self.expect_ident()?;
        let params = self.parse_param_list()?;

        let (body, end) = if self.peek_is(&Token::Semi) {
            let close = self.expect(&Token::Semi)?;
            (None, close.span.end)
        } else {
            let block = self.parse_block()?;
            let end = block.span.end;
            (Some(block), end)
        };

        Ok(Spanned::new(
            Member::Method(MethodDecl { flags, name, params, body }),
            Span::new(start, end),
        ))
    }

    /// Parse `$a = 1, $b;` after the flags of a property declaration,
    /// appending one member per declared name.
    fn parse_property_group(
        &mut self,
        start: usize,
        flags: MemberFlags,
        body: &mut Vec<Spanned<Member>>,
    ) -> Result<(), EditError> {
        loop {
            let name = self.expect_variable()?;
            let default = if self.eat(&Token::Eq) {
                Some(self.parse_expr(0)?)
            } else {
                None
            };
            let end = default.as_ref().map_or(name.span.end, |d| d.span.end);
            body.push(Spanned::new(
                Member::Property(PropertyDecl { flags, name, default }),
                Span::new(start, end),
            ));

            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(&Token::Semi)?;
        Ok(())
    }

    fn parse_function(&mut self) -> Result<Spanned<FunctionDecl>, EditError> {
        let fn_tok = self.expect(&Token::Function)?;
        let start = fn_tok.span.start;
        let name = self.expect_ident()?;
        let params = self.parse_param_list()?;
        let body = self.parse_block()?;
        let end = body.span.end;

        Ok(Spanned::new(
            FunctionDecl { name, params, body },
            Span::new(start, end),
        ))
    }

    fn parse_param_list(&mut self) -> Result<Vec<Param>, EditError> {
        self.expect(&Token::LParen)?;
        let mut params = Vec::new();
        while self.peek().is_some() && !self.peek_is(&Token::RParen) {
            if !params.is_empty() {
                self.expect(&Token::Comma)?;
            }
            let by_ref = self.eat(&Token::Amp);
            let name = self.expect_variable()?;
            let default = if self.eat(&Token::Eq) {
                Some(self.parse_expr(0)?)
            } else {
                None
            };
            params.push(Param { name, by_ref, default });
        }
        self.expect(&Token::RParen)?;
        Ok(params)
    }

    /// Parse a reference as written: `Foo`, `Foo\Bar`, `\Foo\Bar`, or
    /// `namespace\Foo`. The spelling passes through literally.
    fn parse_name_ref(&mut self) -> Result<NameRef, EditError> {
        let Some(tok) = self.peek() else {
            return Err(EditError::syntax("expected name, found end of input", self.eof_span()));
        };

        let resolution = match tok.node {
            Token::Backslash => {
                self.advance();
                Resolution::FullyQualified
            }
            Token::Namespace => {
                self.advance();
                self.expect(&Token::Backslash)?;
                Resolution::NamespaceRelative
            }
            _ => Resolution::Unqualified,
        };

        let mut segments = vec![self.expect_ident()?.node];
        while self.eat(&Token::Backslash) {
            segments.push(self.expect_ident()?.node);
        }

        let resolution = if segments.len() > 1 && resolution == Resolution::Unqualified {
            Resolution::Qualified
        } else {
            resolution
        };

        Ok(NameRef { name: segments.join("\\"), resolution })
    }

    fn parse_block(&mut self) -> Result<Spanned<Block>, EditError> {
        let open = self.expect(&Token::LBrace)?;
        let start = open.span.start;
        let mut stmts = Vec::new();

        while let Some(tok) = self.peek() {
            match tok.node {
                Token::RBrace => break,
                Token::DocComment(_) => {
                    self.advance();
                }
                _ => stmts.push(self.parse_stmt()?),
            }
        }

        let close = self.expect(&Token::RBrace)?;
        let end = close.span.end;
        Ok(Spanned::new(Block { stmts }, Span::new(start, end)))
    }

    fn parse_stmt(&mut self) -> Result<Spanned<Stmt>, EditError> {
        let tok = self.peek().ok_or_else(|| {
            EditError::syntax("unexpected end of input", self.eof_span())
        })?;

        match &tok.node {
            Token::Return => {
                let start = tok.span.start;
                self.advance();
                let value = if self.peek_is(&Token::Semi) {
                    None
                } else {
                    Some(self.parse_expr(0)?)
                };
                let close = self.expect(&Token::Semi)?;
                Ok(Spanned::new(Stmt::Return(value), Span::new(start, close.span.end)))
            }
            Token::Echo => {
                let start = tok.span.start;
                self.advance();
                let mut exprs = vec![self.parse_expr(0)?];
                while self.eat(&Token::Comma) {
                    exprs.push(self.parse_expr(0)?);
                }
                let close = self.expect(&Token::Semi)?;
                Ok(Spanned::new(Stmt::Echo(exprs), Span::new(start, close.span.end)))
            }
            Token::If => {
                let start = tok.span.start;
                self.advance();
                self.expect(&Token::LParen)?;
                let condition = self.parse_expr(0)?;
                self.expect(&Token::RParen)?;
                let then_block = self.parse_block()?;
                let mut end = then_block.span.end;

                let else_block = if self.eat(&Token::Else) {
                    if self.peek_is(&Token::If) {
                        // `else if` chains nest as a single-statement block
                        let nested = self.parse_stmt()?;
                        let span = nested.span;
                        end = span.end;
                        Some(Spanned::new(Block { stmts: vec![nested] }, span))
                    } else {
                        let block = self.parse_block()?;
                        end = block.span.end;
                        Some(block)
                    }
                } else {
                    None
                };

                Ok(Spanned::new(
                    Stmt::If { condition, then_block, else_block },
                    Span::new(start, end),
                ))
            }
            Token::While => {
                let start = tok.span.start;
                self.advance();
                self.expect(&Token::LParen)?;
                let condition = self.parse_expr(0)?;
                self.expect(&Token::RParen)?;
                let body = self.parse_block()?;
                let end = body.span.end;
                Ok(Spanned::new(Stmt::While { condition, body }, Span::new(start, end)))
            }
            _ => {
                let start = tok.span.start;
                let expr = self.parse_expr(0)?;
                let close = self.expect(&Token::Semi)?;
                Ok(Spanned::new(Stmt::Expr(expr), Span::new(start, close.span.end)))
            }
        }
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<Spanned<Expr>, EditError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some(tok) = self.peek() else { break };

            // Postfix — highest precedence
            match tok.node {
                Token::Arrow => {
                    self.advance();
                    let name = self.expect_ident()?;
                    if self.peek_is(&Token::LParen) {
                        let (args, end) = self.parse_arg_list()?;
                        let span = Span::new(lhs.span.start, end);
                        lhs = Spanned::new(
                            Expr::MethodCall { object: Box::new(lhs), method: name, args },
                            span,
                        );
                    } else {
                        let span = Span::new(lhs.span.start, name.span.end);
                        lhs = Spanned::new(
                            Expr::PropFetch { object: Box::new(lhs), prop: name },
                            span,
                        );
                    }
                    continue;
                }
                Token::LParen => {
                    let (args, end) = self.parse_arg_list()?;
                    let span = Span::new(lhs.span.start, end);
                    lhs = Spanned::new(Expr::Call { callee: Box::new(lhs), args }, span);
                    continue;
                }
                Token::LBracket => {
                    self.advance();
                    let index = self.parse_expr(0)?;
                    let close = self.expect(&Token::RBracket)?;
                    let span = Span::new(lhs.span.start, close.span.end);
                    lhs = Spanned::new(
                        Expr::Index { object: Box::new(lhs), index: Box::new(index) },
                        span,
                    );
                    continue;
                }
                _ => {}
            }

            // Assignment — lowest precedence, right-associative
            if matches!(tok.node, Token::Eq) {
                if 2 < min_bp {
                    break;
                }
                self.advance();
                let value = self.parse_expr(1)?;
                let span = Span::new(lhs.span.start, value.span.end);
                lhs = Spanned::new(
                    Expr::Assign { target: Box::new(lhs), value: Box::new(value) },
                    span,
                );
                continue;
            }

            let Some(op) = binop_for_token(&tok.node) else { break };
            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(r_bp)?;
            let span = Span::new(lhs.span.start, rhs.span.end);
            lhs = Spanned::new(
                Expr::BinOp { op, lhs: Box::new(lhs), rhs: Box::new(rhs) },
                span,
            );
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Spanned<Expr>, EditError> {
        let tok = self.peek().ok_or_else(|| {
            EditError::syntax("unexpected end of input in expression", self.eof_span())
        })?;

        match &tok.node {
            Token::IntLit(_) => {
                let tok = self.advance().unwrap();
                let Token::IntLit(n) = &tok.node else { unreachable!() };
                Ok(Spanned::new(Expr::IntLit(*n), tok.span))
            }
            Token::FloatLit(_) => {
                let tok = self.advance().unwrap();
                let Token::FloatLit(n) = &tok.node else { unreachable!() };
                Ok(Spanned::new(Expr::FloatLit(*n), tok.span))
            }
            Token::StringLit(_) => {
                let tok = self.advance().unwrap();
                let Token::StringLit(s) = &tok.node else { unreachable!() };
                let s = s.clone();
                Ok(Spanned::new(Expr::StringLit(s), tok.span))
            }
            Token::True => {
                let tok = self.advance().unwrap();
                Ok(Spanned::new(Expr::BoolLit(true), tok.span))
            }
            Token::False => {
                let tok = self.advance().unwrap();
                Ok(Spanned::new(Expr::BoolLit(false), tok.span))
            }
            Token::Null => {
                let tok = self.advance().unwrap();
                Ok(Spanned::new(Expr::NullLit, tok.span))
            }
            Token::Variable(_) => {
                let tok = self.advance().unwrap();
                let Token::Variable(name) = &tok.node else { unreachable!() };
                let name = name.clone();
                Ok(Spanned::new(Expr::Variable(name), tok.span))
            }
            Token::Ident | Token::Backslash | Token::Namespace => {
                let start = tok.span.start;
                let name_ref = self.parse_name_ref()?;
                let end = self.tokens[self.pos - 1].span.end;

                if self.eat(&Token::DoubleColon) {
                    let constant = self.expect_ident()?;
                    let span = Span::new(start, constant.span.end);
                    Ok(Spanned::new(
                        Expr::ClassConstFetch { class: name_ref, constant },
                        span,
                    ))
                } else {
                    Ok(Spanned::new(Expr::Name(name_ref), Span::new(start, end)))
                }
            }
            Token::Minus => {
                let tok = self.advance().unwrap();
                let start = tok.span.start;
                let operand = self.parse_prefix()?;
                let end = operand.span.end;
                Ok(Spanned::new(
                    Expr::UnaryOp { op: UnaryOp::Neg, operand: Box::new(operand) },
                    Span::new(start, end),
                ))
            }
            Token::Bang => {
                let tok = self.advance().unwrap();
                let start = tok.span.start;
                let operand = self.parse_prefix()?;
                let end = operand.span.end;
                Ok(Spanned::new(
                    Expr::UnaryOp { op: UnaryOp::Not, operand: Box::new(operand) },
                    Span::new(start, end),
                ))
            }
            Token::LParen => {
                self.advance();
                let expr = self.parse_expr(0)?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            }
            Token::LBracket => self.parse_array_lit(),
            Token::New => {
                let start = tok.span.start;
                self.advance();

                if self.eat(&Token::Class) {
                    let args = if self.peek_is(&Token::LParen) {
                        self.parse_arg_list()?.0
                    } else {
                        Vec::new()
                    };
                    let class = self.parse_class_rest(start, ClassModifiers::default())?;
                    let span = Span::new(start, class.span.end);
                    Ok(Spanned::new(
                        Expr::AnonClass { args, class: Box::new(class) },
                        span,
                    ))
                } else {
                    let class = self.parse_name_ref()?;
                    let mut end = self.tokens[self.pos - 1].span.end;
                    let args = if self.peek_is(&Token::LParen) {
                        let (args, close) = self.parse_arg_list()?;
                        end = close;
                        args
                    } else {
                        Vec::new()
                    };
                    Ok(Spanned::new(Expr::New { class, args }, Span::new(start, end)))
                }
            }
            _ => Err(EditError::syntax(
                format!("unexpected token {} in expression", tok.node),
                tok.span,
            )),
        }
    }

    fn parse_array_lit(&mut self) -> Result<Spanned<Expr>, EditError> {
        let open = self.expect(&Token::LBracket)?;
        let start = open.span.start;
        let mut entries = Vec::new();

        while self.peek().is_some() && !self.peek_is(&Token::RBracket) {
            if !entries.is_empty() {
                self.expect(&Token::Comma)?;
                // Trailing comma
                if self.peek_is(&Token::RBracket) {
                    break;
                }
            }
            let first = self.parse_expr(0)?;
            if self.eat(&Token::FatArrow) {
                let value = self.parse_expr(0)?;
                entries.push(ArrayEntry { key: Some(first), value });
            } else {
                entries.push(ArrayEntry { key: None, value: first });
            }
        }

        let close = self.expect(&Token::RBracket)?;
        let end = close.span.end;
        Ok(Spanned::new(Expr::ArrayLit { entries }, Span::new(start, end)))
    }

    fn parse_arg_list(&mut self) -> Result<(Vec<Spanned<Expr>>, usize), EditError> {
        self.expect(&Token::LParen)?;
        let mut args = Vec::new();
        while self.peek().is_some() && !self.peek_is(&Token::RParen) {
            if !args.is_empty() {
                self.expect(&Token::Comma)?;
            }
            args.push(self.parse_expr(0)?);
        }
        let close = self.expect(&Token::RParen)?;
        Ok((args, close.span.end))
    }
}

fn binop_for_token(tok: &Token) -> Option<BinOp> {
    match tok {
        Token::PipePipe => Some(BinOp::Or),
        Token::AmpAmp => Some(BinOp::And),
        Token::EqEq => Some(BinOp::Eq),
        Token::BangEq => Some(BinOp::Neq),
        Token::EqEqEq => Some(BinOp::Identical),
        Token::BangEqEq => Some(BinOp::NotIdentical),
        Token::Lt => Some(BinOp::Lt),
        Token::Gt => Some(BinOp::Gt),
        Token::LtEq => Some(BinOp::LtEq),
        Token::GtEq => Some(BinOp::GtEq),
        Token::Plus => Some(BinOp::Add),
        Token::Minus => Some(BinOp::Sub),
        Token::Dot => Some(BinOp::Concat),
        Token::Star => Some(BinOp::Mul),
        Token::Slash => Some(BinOp::Div),
        Token::Percent => Some(BinOp::Mod),
        _ => None,
    }
}

fn infix_binding_power(op: BinOp) -> (u8, u8) {
    match op {
        BinOp::Or => (3, 4),
        BinOp::And => (5, 6),
        BinOp::Eq | BinOp::Neq | BinOp::Identical | BinOp::NotIdentical => (7, 8),
        BinOp::Lt | BinOp::Gt | BinOp::LtEq | BinOp::GtEq => (9, 10),
        BinOp::Add | BinOp::Sub | BinOp::Concat => (11, 12),
        BinOp::Mul | BinOp::Div | BinOp::Mod => (13, 14),
    }
}
