use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints,
    transaction::{core::TransactionId, store::TransactionStore},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store holding the transaction to delete.
    transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for deleting a transaction once the user has confirmed it.
///
/// Redirects to the transactions view on success, or responds with an alert
/// if the transaction does not exist.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut store = match lock_store(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match store.remove(transaction_id) {
        Some(transaction) => {
            tracing::info!("Deleted transaction {transaction:?}");

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        None => {
            tracing::warn!("Could not delete transaction {transaction_id}: it does not exist");
            Error::DeleteMissingTransaction.into_alert_response()
        }
    }
}
