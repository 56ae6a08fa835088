//! Defines the route handler for the dialog for editing a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CLOSE_DIALOG_SCRIPT, loading_spinner,
        modal_dialog,
    },
    transaction::{
        core::{Transaction, TransactionId},
        form::{TransactionFormDefaults, transaction_form_fields},
        store::TransactionStore,
    },
};

/// The state needed for the edit transaction dialog.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Renders the dialog for editing a transaction, pre-filled with a copy of the transaction.
///
/// Responds with an alert if the transaction does not exist, e.g. when it was
/// deleted in another tab.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let transaction = match find_transaction(&state.transaction_store, transaction_id) {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(),
    };

    edit_transaction_view(&transaction).into_response()
}

fn find_transaction(
    transaction_store: &Mutex<TransactionStore>,
    transaction_id: TransactionId,
) -> Result<Transaction, Error> {
    let store = lock_store(transaction_store)?;

    store.get(transaction_id).cloned().ok_or_else(|| {
        tracing::warn!("Tried to edit missing transaction {transaction_id}");
        Error::NotFound
    })
}

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let update_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
    let spinner = loading_spinner();

    let form = html! {
        form
            hx-put=(update_url)
            hx-target-error="#alert-container"
            hx-indicator="#edit-indicator"
            class="w-full space-y-4"
        {
            (transaction_form_fields(&TransactionFormDefaults::from(transaction), "edit-"))

            button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="edit-indicator" class="inline htmx-indicator" { (spinner) }
                " Update Transaction"
            }

            button type="button" onclick=(CLOSE_DIALOG_SCRIPT) class=(BUTTON_SECONDARY_STYLE)
            {
                "Cancel"
            }
        }
    };

    html! {
        div class="fixed inset-0 z-40 flex items-center justify-center bg-black/50"
        {
            (modal_dialog("edit-transaction-dialog", "Edit Transaction", true, &form))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{
            assert_form_input_with_value, assert_hx_endpoint, assert_not_found_alert,
            assert_status_ok, assert_valid_html, must_get_form, parse_html_fragment,
        },
        transaction::{
            TransactionStore,
            edit_page::{EditTransactionPageState, get_edit_transaction_page},
        },
    };

    fn get_test_state() -> EditTransactionPageState {
        EditTransactionPageState {
            transaction_store: Arc::new(Mutex::new(TransactionStore::with_sample_data())),
        }
    }

    #[tokio::test]
    async fn edit_dialog_is_prefilled() {
        let state = get_test_state();

        let response = get_edit_transaction_page(State(state), Path(2)).await;

        assert_status_ok(&response);
        let document = parse_html_fragment(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, &format_endpoint(endpoints::TRANSACTION, 2), "hx-put");
        assert_form_input_with_value(&form, "date", "date", "2024-03-05");
        assert_form_input_with_value(&form, "amount", "number", "200");
    }

    #[tokio::test]
    async fn missing_transaction_shows_alert() {
        let state = get_test_state();

        let response = get_edit_transaction_page(State(state), Path(99)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let document = parse_html_fragment(response).await;
        assert_valid_html(&document);
        assert_not_found_alert(&document);
    }
}
