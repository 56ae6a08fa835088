//! The confirmation prompt shown before a transaction is deleted.
//!
//! Fetching the prompt never touches the store. Only the prompt's confirm
//! button sends the delete request, and cancel just closes the prompt.

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
    html::{BUTTON_DANGER_STYLE, BUTTON_SECONDARY_STYLE, CLOSE_DIALOG_SCRIPT, modal_dialog},
    transaction::{core::TransactionId, store::TransactionStore},
};

/// The state needed for the delete confirmation dialog.
#[derive(Debug, Clone)]
pub struct DeleteTransactionPageState {
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Renders the dialog asking the user to confirm deleting a transaction.
///
/// Responds with an alert if the transaction does not exist.
pub async fn get_delete_transaction_page(
    State(state): State<DeleteTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    if let Err(error) = check_exists(&state.transaction_store, transaction_id) {
        return error.into_alert_response();
    }

    confirm_delete_view(transaction_id).into_response()
}

fn check_exists(
    transaction_store: &Mutex<TransactionStore>,
    transaction_id: TransactionId,
) -> Result<(), Error> {
    let store = lock_store(transaction_store)?;

    if store.get(transaction_id).is_none() {
        tracing::warn!("Tried to confirm deleting missing transaction {transaction_id}");
        return Err(Error::NotFound);
    }

    Ok(())
}

fn confirm_delete_view(transaction_id: TransactionId) -> Markup {
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction_id);

    let content = html! {
        p id="delete-transaction-description" class="mb-6 text-sm text-gray-600 dark:text-gray-300"
        {
            "This action cannot be undone. This will permanently delete the transaction."
        }

        div class="flex gap-4"
        {
            button
                type="button"
                id="cancel-delete-button"
                onclick=(CLOSE_DIALOG_SCRIPT)
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Cancel"
            }

            button
                type="button"
                id="confirm-delete-button"
                hx-delete=(delete_url)
                hx-target-error="#alert-container"
                class=(BUTTON_DANGER_STYLE)
            {
                "Delete"
            }
        }
    };

    html! {
        div class="fixed inset-0 z-40 flex items-center justify-center bg-black/50"
        {
            (modal_dialog("delete-transaction-dialog", "Are you sure?", true, &content))
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
    use scraper::Selector;

    use crate::{
        test_utils::{
            assert_hx_endpoint, assert_not_found_alert, assert_status_ok, assert_valid_html,
            parse_html_fragment,
        },
        transaction::{
            TransactionStore,
            delete_page::{DeleteTransactionPageState, get_delete_transaction_page},
        },
    };

    fn get_test_state() -> DeleteTransactionPageState {
        DeleteTransactionPageState {
            transaction_store: Arc::new(Mutex::new(TransactionStore::with_sample_data())),
        }
    }

    #[tokio::test]
    async fn prompt_warns_and_targets_transaction() {
        let state = get_test_state();

        let response = get_delete_transaction_page(State(state.clone()), Path(3)).await;

        assert_status_ok(&response);
        let document = parse_html_fragment(response).await;
        assert_valid_html(&document);

        let text = document.root_element().text().collect::<String>();
        assert!(text.contains("Are you sure?"));
        assert!(text.contains("This action cannot be undone."));

        let confirm = document
            .select(&Selector::parse("#confirm-delete-button").unwrap())
            .next()
            .expect("want a confirm button");
        assert_hx_endpoint(&confirm, "/api/transactions/3", "hx-delete");

        let cancel = document
            .select(&Selector::parse("#cancel-delete-button").unwrap())
            .next()
            .expect("want a cancel button");
        assert!(
            cancel.value().attrs().all(|(name, _)| !name.starts_with("hx-")),
            "cancel must not send any request"
        );
    }

    #[tokio::test]
    async fn showing_prompt_does_not_change_store() {
        let state = get_test_state();

        get_delete_transaction_page(State(state.clone()), Path(1)).await;

        assert_eq!(
            *state.transaction_store.lock().unwrap(),
            TransactionStore::with_sample_data()
        );
    }

    #[tokio::test]
    async fn prompt_for_missing_transaction_shows_alert() {
        let response = get_delete_transaction_page(State(get_test_state()), Path(12)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let document = parse_html_fragment(response).await;
        assert_valid_html(&document);
        assert_not_found_alert(&document);
    }
}
