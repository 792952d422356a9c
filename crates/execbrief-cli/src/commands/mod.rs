//! Command implementations

pub mod compare;
pub mod load;
pub mod query;
pub mod serve;
pub mod status;
