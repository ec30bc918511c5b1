//! Transaction store owned by the presentation layer.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::Ledger;
