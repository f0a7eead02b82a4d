use serde::{Serialize, Deserialize};

use crate::parser::ast::{Expr, UnaryOp};

/// A host value renderable as a source literal. Covers scalars, sequences,
/// and mappings; mapping entries keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(v)
    }
}

/// Render a value as source literal text.
pub fn serialize(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(x) => {
            // Keep the decimal point so the literal reads back as a float.
            if x.fract() == 0.0 && x.is_finite() {
                format!("{x:.1}")
            } else {
                format!("{x}")
            }
        }
        Value::Str(s) => quote_single(s),
        Value::Seq(items) => {
            let rendered: Vec<String> = items.iter().map(serialize).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Map(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{} => {}", serialize(k), serialize(v)))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
    }
}

fn quote_single(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

impl Value {
    /// Fold a parsed literal expression back into a value. Anything that is
    /// not a literal shape (calls, fetches, names) yields None.
    pub fn from_expr(expr: &Expr) -> Option<Value> {
        match expr {
            Expr::NullLit => Some(Value::Null),
            Expr::BoolLit(b) => Some(Value::Bool(*b)),
            Expr::IntLit(n) => Some(Value::Int(*n)),
            Expr::FloatLit(x) => Some(Value::Float(*x)),
            Expr::StringLit(s) => Some(Value::Str(s.clone())),
            Expr::UnaryOp { op: UnaryOp::Neg, operand } => {
                match Value::from_expr(&operand.node)? {
                    Value::Int(n) => Some(Value::Int(-n)),
                    Value::Float(x) => Some(Value::Float(-x)),
                    _ => None,
                }
            }
            Expr::ArrayLit { entries } => {
                if entries.iter().all(|e| e.key.is_none()) {
                    let items: Option<Vec<Value>> = entries
                        .iter()
                        .map(|e| Value::from_expr(&e.value.node))
                        .collect();
                    Some(Value::Seq(items?))
                } else if entries.iter().all(|e| e.key.is_some()) {
                    let pairs: Option<Vec<(Value, Value)>> = entries
                        .iter()
                        .map(|e| {
                            let key = Value::from_expr(&e.key.as_ref().unwrap().node)?;
                            let value = Value::from_expr(&e.value.node)?;
                            Some((key, value))
                        })
                        .collect();
                    Some(Value::Map(pairs?))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
