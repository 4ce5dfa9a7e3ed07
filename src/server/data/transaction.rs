//! Transactional executor.
//!
//! Runs an ordered list of persistence operations inside one database transaction. The
//! transaction commits only after every operation succeeded; the first failure rolls
//! everything back and is returned unchanged. Dropping the executor's future before it
//! finishes, e.g. because the client disconnected, drops the open transaction, which
//! SeaORM rolls back.

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, OnceLock},
};

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::{Instrument, Span};

/// Future returned by a persistence operation, borrowing the transaction for `'t`.
pub type TxFuture<'t> = Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 't>>;

type TxFn = Box<dyn for<'t> FnOnce(&'t DatabaseTransaction) -> TxFuture<'t> + Send>;

/// One step of a multi-row write.
///
/// Closes over already validated values, and over `Generated` slots when it produces
/// or consumes a key shared with another step of the same list.
///
/// ```rust,ignore
/// TxOp::new("insert school", move |txn| {
///     Box::pin(async move {
///         let school = SchoolRepository::new(txn).create(params).await?;
///         school_id.set(school.id)
///     })
/// })
/// ```
pub struct TxOp {
    label: &'static str,
    run: TxFn,
}

impl TxOp {
    pub fn new<F>(label: &'static str, run: F) -> Self
    where
        F: for<'t> FnOnce(&'t DatabaseTransaction) -> TxFuture<'t> + Send + 'static,
    {
        Self {
            label,
            run: Box::new(run),
        }
    }
}

/// Write-once slot carrying a generated key from one operation to a later one.
///
/// Order-sensitivity is explicit: the producing operation must come first in the list,
/// otherwise the consumer fails with `DbErr::Custom` and the transaction rolls back.
#[derive(Debug)]
pub struct Generated<T>(Arc<OnceLock<T>>);

impl<T> Clone for Generated<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Generated<T> {
    fn default() -> Self {
        Self(Arc::new(OnceLock::new()))
    }
}

impl<T: Clone> Generated<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the generated value. Fails if a value was already recorded.
    pub fn set(&self, value: T) -> Result<(), DbErr> {
        self.0
            .set(value)
            .map_err(|_| DbErr::Custom("generated value was already set".to_string()))
    }

    /// Reads the generated value. Fails if the producing operation has not run yet.
    pub fn get(&self) -> Result<T, DbErr> {
        self.0.get().cloned().ok_or_else(|| {
            DbErr::Custom("generated value read before the operation producing it ran".to_string())
        })
    }
}

/// Runs persistence operations atomically against a connection pool.
pub struct TransactionExecutor<'a> {
    db: &'a DatabaseConnection,
    span: Span,
}

impl<'a> TransactionExecutor<'a> {
    /// Creates an executor logging under a `transaction` span nested in the current one.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_span(db, tracing::info_span!("transaction"))
    }

    /// Creates an executor logging under the provided span.
    pub fn with_span(db: &'a DatabaseConnection, span: Span) -> Self {
        Self { db, span }
    }

    /// Runs `ops` in order inside a single transaction.
    ///
    /// # Arguments
    /// - `ops` - Operations to run, in execution order
    ///
    /// # Returns
    /// - `Ok(())` - Every operation succeeded and the transaction committed
    /// - `Err(DbErr)` - The first operation error, verbatim, after rolling back; or the
    ///   error of `begin` / `commit` itself
    pub async fn execute(&self, ops: Vec<TxOp>) -> Result<(), DbErr> {
        self.run(ops).instrument(self.span.clone()).await
    }

    async fn run(&self, ops: Vec<TxOp>) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let total = ops.len();

        for (index, op) in ops.into_iter().enumerate() {
            let TxOp { label, run } = op;

            if let Err(err) = run(&txn).await {
                tracing::debug!(op = label, index, "Operation failed, rolling back: {}", err);

                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back transaction: {}", rollback_err);
                }

                return Err(err);
            }

            tracing::trace!(op = label, index, "Operation succeeded");
        }

        txn.commit().await?;
        tracing::debug!(operations = total, "Transaction committed");

        Ok(())
    }
}
