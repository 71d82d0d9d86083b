pub mod ledger;
pub mod statistics;
pub mod transaction;
