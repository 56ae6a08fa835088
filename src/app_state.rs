//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, transaction::TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions for this session.
    ///
    /// Handlers get their own handle to the store through `FromRef`
    /// implementations on their state types.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that owns `transaction_store`.
    pub fn new(transaction_store: TransactionStore) -> Self {
        Self {
            transaction_store: Arc::new(Mutex::new(transaction_store)),
        }
    }
}

/// Lock `store`, logging and converting a poisoned lock into [Error::StoreLockError].
pub(crate) fn lock_store(
    store: &Mutex<TransactionStore>,
) -> Result<MutexGuard<'_, TransactionStore>, Error> {
    store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
}
