mod expense;
mod ledger;
mod money;
mod period;
mod summary;

pub use expense::*;
pub use ledger::*;
pub use money::*;
pub use period::*;
pub use summary::*;
