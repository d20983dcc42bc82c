//! Rule-based building blocks for statement figure extraction.

pub mod classifier;
pub mod gross_profit;
pub mod labels;
pub mod normalize;
pub mod patterns;
pub mod scorer;
pub mod tokens;

pub use classifier::{is_money_like, is_unmarked_amount, money_like};
pub use gross_profit::{format_decimal, gross_profit, parse_decimal};
pub use labels::{Label, LabelAnchor};
pub use normalize::normalize;
pub use patterns::*;
pub use scorer::{pick_best, score};
pub use tokens::{tokenize, tokenize_from, NumericToken, Tokens};
