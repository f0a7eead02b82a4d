use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Keywords
    #[token("class")]
    Class,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("use")]
    Use,
    #[token("function")]
    Function,
    #[token("const")]
    Const,
    #[token("var")]
    Var,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("static")]
    Static,
    #[token("abstract")]
    Abstract,
    #[token("final")]
    Final,
    #[token("namespace")]
    Namespace,
    #[token("new")]
    New,
    #[token("return")]
    Return,
    #[token("echo")]
    Echo,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Literals
    #[regex(r"0[xX][0-9a-fA-F_]+|[0-9][0-9_]*", |lex| {
        let s = lex.slice();
        if s.starts_with("0x") || s.starts_with("0X") {
            let cleaned = s[2..].replace('_', "");
            if cleaned.is_empty() {
                return None;
            }
            i64::from_str_radix(&cleaned, 16).ok()
        } else {
            s.replace('_', "").parse::<i64>().ok()
        }
    })]
    IntLit(i64),

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*", |lex| lex.slice().replace('_', "").parse::<f64>().ok())]
    FloatLit(f64),

    // Double-quoted: the usual escape set. Interpolation is not modeled.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        let raw = &s[1..s.len()-1];
        let mut result = String::with_capacity(raw.len());
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('\\') => result.push('\\'),
                    Some('"') => result.push('"'),
                    Some('$') => result.push('$'),
                    Some(other) => { result.push('\\'); result.push(other); }
                    None => result.push('\\'),
                }
            } else {
                result.push(c);
            }
        }
        Some(result)
    })]
    // Single-quoted: only \' and \\ are escapes, everything else is literal.
    #[regex(r"'([^'\\]|\\.)*'", |lex| {
        let s = lex.slice();
        let raw = &s[1..s.len()-1];
        let mut result = String::with_capacity(raw.len());
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('\'') => result.push('\''),
                    Some('\\') => result.push('\\'),
                    Some(other) => { result.push('\\'); result.push(other); }
                    None => result.push('\\'),
                }
            } else {
                result.push(c);
            }
        }
        Some(result)
    })]
    StringLit(String),

    // $name, stored without the sigil
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Variable(String),

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // Doc comments are kept: the parser attaches them to the member they precede.
    // Stored verbatim, delimiters included.
    #[regex(r"/\*\*([^*]|\*+[^*/])*\*+/", |lex| lex.slice().to_string(), priority = 20)]
    DocComment(String),

    // Operators
    #[token("===")]
    EqEqEq,
    #[token("==")]
    EqEq,
    #[token("!==")]
    BangEqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token(".")]
    Dot,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("?")]
    Question,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,
    #[token("\\")]
    Backslash,

    // Comments and tags (skip)
    #[regex(r"//[^\n]*")]
    #[regex(r"#[^\n]*")]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    #[regex(r"<\?php|<\?|\?>")]
    Comment,
}

/// Returns true if the given string is a reserved keyword of the class grammar.
pub fn is_keyword(s: &str) -> bool {
    matches!(s, "class" | "extends" | "implements" | "use" | "function" | "const"
        | "var" | "public" | "protected" | "private" | "static" | "abstract"
        | "final" | "namespace" | "new" | "return" | "echo" | "if" | "else"
        | "while" | "true" | "false" | "null")
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Class => write!(f, "class"),
            Token::Extends => write!(f, "extends"),
            Token::Implements => write!(f, "implements"),
            Token::Use => write!(f, "use"),
            Token::Function => write!(f, "function"),
            Token::Const => write!(f, "const"),
            Token::Var => write!(f, "var"),
            Token::Public => write!(f, "public"),
            Token::Protected => write!(f, "protected"),
            Token::Private => write!(f, "private"),
            Token::Static => write!(f, "static"),
            Token::Abstract => write!(f, "abstract"),
            Token::Final => write!(f, "final"),
            Token::Namespace => write!(f, "namespace"),
            Token::New => write!(f, "new"),
            Token::Return => write!(f, "return"),
            Token::Echo => write!(f, "echo"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::While => write!(f, "while"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Null => write!(f, "null"),
            Token::IntLit(n) => write!(f, "{n}"),
            Token::FloatLit(n) => write!(f, "{n}"),
            Token::StringLit(s) => write!(f, "'{s}'"),
            Token::Variable(name) => write!(f, "${name}"),
            Token::Ident => write!(f, "identifier"),
            Token::DocComment(_) => write!(f, "doc comment"),
            Token::EqEqEq => write!(f, "==="),
            Token::EqEq => write!(f, "=="),
            Token::BangEqEq => write!(f, "!=="),
            Token::BangEq => write!(f, "!="),
            Token::LtEq => write!(f, "<="),
            Token::GtEq => write!(f, ">="),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::AmpAmp => write!(f, "&&"),
            Token::PipePipe => write!(f, "||"),
            Token::FatArrow => write!(f, "=>"),
            Token::Eq => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Dot => write!(f, "."),
            Token::Bang => write!(f, "!"),
            Token::Amp => write!(f, "&"),
            Token::Question => write!(f, "?"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Semi => write!(f, ";"),
            Token::Colon => write!(f, ":"),
            Token::DoubleColon => write!(f, "::"),
            Token::Arrow => write!(f, "->"),
            Token::Backslash => write!(f, "\\"),
            Token::Comment => write!(f, "comment"),
        }
    }
}
