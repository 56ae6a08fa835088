//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    app_state::lock_store,
    endpoints,
    transaction::{form::TransactionForm, store::TransactionStore},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store that new transactions are added to.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let candidate = match form.validate() {
        Ok(candidate) => candidate,
        Err(error) => {
            tracing::warn!("Rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match lock_store(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    let transaction = store.add(candidate);
    tracing::info!("Added transaction {transaction:?}");

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        endpoints,
        test_utils::assert_hx_redirect,
        transaction::{
            Category, TransactionStore, TransactionType,
            create_endpoint::{CreateTransactionState, create_transaction_endpoint},
            form::TransactionForm,
        },
    };

    fn get_test_state(store: TransactionStore) -> CreateTransactionState {
        CreateTransactionState {
            transaction_store: Arc::new(Mutex::new(store)),
        }
    }

    fn adidas_income_form() -> TransactionForm {
        TransactionForm {
            date: Some("2024-03-02".to_owned()),
            amount: Some("50".to_owned()),
            type_: Some("income".to_owned()),
            category: Some("Adidas".to_owned()),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state(TransactionStore::with_sample_data());

        let response =
            create_transaction_endpoint(State(state.clone()), Form(adidas_income_form())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::TRANSACTIONS_VIEW);

        let store = state.transaction_store.lock().unwrap();
        assert_eq!(store.len(), 4);
        let added = store.transactions().last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.date, date!(2024 - 03 - 02));
        assert_eq!(added.amount, 50.0);
        assert_eq!(added.type_, TransactionType::Income);
        assert_eq!(added.category, Category::Adidas);
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let state = get_test_state(TransactionStore::with_sample_data());
        let form = TransactionForm {
            category: None,
            ..adidas_income_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.transaction_store.lock().unwrap().len(), 3);
    }
}
