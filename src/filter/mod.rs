pub mod codec;
pub mod expr;

pub use codec::{decode, encode};
pub use expr::{FilterExpr, FilterMap, Op};
