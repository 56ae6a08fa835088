use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints,
    transaction::{core::TransactionId, form::TransactionForm, store::TransactionStore},
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The store holding the transaction to replace.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler that replaces a transaction with the submitted form,
/// redirects to the transactions view on success.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = match form.validate() {
        Ok(candidate) => candidate.with_id(transaction_id),
        Err(error) => {
            tracing::warn!("Rejected edit of transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match lock_store(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match store.update(transaction) {
        Ok(()) => {
            tracing::info!("Updated transaction {transaction_id}");
        }
        Err(Error::UpdateMissingTransaction) => {
            tracing::warn!("Could not update transaction {transaction_id}: it does not exist");
            return Error::UpdateMissingTransaction.into_alert_response();
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        endpoints,
        test_utils::assert_hx_redirect,
        transaction::{
            Category, NewTransaction, Transaction, TransactionStore, TransactionType,
            edit_endpoint::{EditTransactionState, edit_transaction_endpoint},
            form::TransactionForm,
        },
    };

    fn nike_expense() -> Transaction {
        Transaction {
            id: 1,
            date: date!(2024 - 03 - 01),
            amount: 150.0,
            type_: TransactionType::Expense,
            category: Category::Nike,
        }
    }

    fn get_test_state() -> EditTransactionState {
        let mut store = TransactionStore::with_transactions(vec![nike_expense()]);
        store.add(NewTransaction {
            date: date!(2024 - 03 - 02),
            amount: 50.0,
            type_: TransactionType::Income,
            category: Category::Adidas,
        });

        EditTransactionState {
            transaction_store: Arc::new(Mutex::new(store)),
        }
    }

    fn form_with_amount(amount: &str) -> TransactionForm {
        TransactionForm {
            date: Some("2024-03-01".to_owned()),
            amount: Some(amount.to_owned()),
            type_: Some("expense".to_owned()),
            category: Some("Nike".to_owned()),
        }
    }

    #[tokio::test]
    async fn can_update_transaction() {
        let state = get_test_state();
        let before = state.transaction_store.lock().unwrap().clone();

        let response =
            edit_transaction_endpoint(State(state.clone()), Path(1), Form(form_with_amount("175")))
                .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::TRANSACTIONS_VIEW);

        let store = state.transaction_store.lock().unwrap();
        assert_eq!(store.len(), before.len());
        assert_eq!(
            store.transactions()[0],
            Transaction {
                amount: 175.0,
                ..nike_expense()
            }
        );
        assert_eq!(store.transactions()[1], before.transactions()[1]);
    }

    #[tokio::test]
    async fn updating_missing_transaction_changes_nothing() {
        let state = get_test_state();
        let before = state.transaction_store.lock().unwrap().clone();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(404),
            Form(form_with_amount("175")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(*state.transaction_store.lock().unwrap(), before);
    }

    #[tokio::test]
    async fn invalid_form_changes_nothing() {
        let state = get_test_state();
        let before = state.transaction_store.lock().unwrap().clone();

        let response =
            edit_transaction_endpoint(State(state.clone()), Path(1), Form(form_with_amount("")))
                .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(*state.transaction_store.lock().unwrap(), before);
    }
}
