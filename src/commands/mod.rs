//! Command implementations

mod evaluate;
mod run;

pub use evaluate::evaluate;
pub use run::run;
