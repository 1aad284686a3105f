//! string utilities

mod search;
#[doc(inline)]
pub use search::{contains, submatch, submatch_all, submatch_any};
