pub mod dates;
pub mod money;
pub mod pii;

pub use dates::{format_long_date, return_date};
pub use money::format_usd;
pub use pii::Masked;
