//! Database layer.
//!
//! Repositories wrap SeaORM inserts and lookups for one table each and work on any
//! connection, so the same code runs on the pool and inside a transaction. Next to each
//! repository sit the persistence operations (`TxOp`) services hand to the
//! `TransactionExecutor`.

pub mod absence;
pub mod class;
pub mod grade;
pub mod link;
pub mod note;
pub mod period;
pub mod report;
pub mod room;
pub mod school;
pub mod subject;
pub mod timetable;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
