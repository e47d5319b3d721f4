use indexmap::IndexMap;
use std::fmt;

pub type FilterMap = IndexMap<String, Vec<FilterExpr>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    In,
    Eq,
    New,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Op {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "in" => Some(Op::In),
            "eq" => Some(Op::Eq),
            "new" => Some(Op::New),
            "gt" => Some(Op::Gt),
            "gte" => Some(Op::Gte),
            "lt" => Some(Op::Lt),
            "lte" => Some(Op::Lte),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Op::In => "in",
            Op::Eq => "eq",
            Op::New => "new",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub op: Op,
    pub value: String,
}

impl FilterExpr {
    pub fn new(op: Op, value: impl Into<String>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }
}
