//! The page that lists every transaction, with the dialog for adding new ones.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        dollar_input_styles, format_currency, loading_spinner, modal_dialog,
    },
    transaction::{
        core::{Category, Transaction, TransactionId, TransactionType},
        form::{TransactionFormDefaults, transaction_form_fields},
        store::TransactionStore,
    },
};

const ADD_DIALOG_ID: &str = "add-transaction-dialog";

/// The state needed for the [get_transactions_page] route handler.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The transaction data to display in the table.
#[derive(Debug, PartialEq)]
struct TransactionTableRow {
    id: TransactionId,
    date: String,
    amount: String,
    type_: TransactionType,
    category: Category,
    edit_url: String,
    delete_url: String,
}

impl From<&Transaction> for TransactionTableRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            date: transaction.date.to_string(),
            amount: format_currency(transaction.amount),
            type_: transaction.type_,
            category: transaction.category,
            edit_url: format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id),
            delete_url: format_endpoint(endpoints::DELETE_TRANSACTION_VIEW, transaction.id),
        }
    }
}

/// Route handler for the transactions page.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let rows = {
        let store = lock_store(&state.transaction_store)?;

        store
            .transactions()
            .iter()
            .map(TransactionTableRow::from)
            .collect::<Vec<_>>()
    };

    Ok(transactions_view(&rows).into_response())
}

fn transactions_view(rows: &[TransactionTableRow]) -> Markup {
    let open_add_dialog = format!("document.getElementById('{ADD_DIALOG_ID}').showModal()");

    let table_row = |row: &TransactionTableRow| {
        html!(
            tr class=(TABLE_ROW_STYLE) data-transaction-id=(row.id)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    time datetime=(row.date) { (row.date) }
                }

                td class="px-6 py-4 text-right tabular-nums" { (row.amount) }

                td class=(TABLE_CELL_STYLE) { (row.type_) }

                td class=(TABLE_CELL_STYLE) { (row.category) }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        button
                            type="button"
                            hx-get=(row.edit_url)
                            hx-target="#dialog-container"
                            hx-target-error="#alert-container"
                            class=(LINK_STYLE)
                        {
                            "Edit"
                        }

                        button
                            type="button"
                            hx-get=(row.delete_url)
                            hx-target="#dialog-container"
                            hx-target-error="#alert-container"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        )
    };

    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-3xl font-bold" { "Sneaker Side-Hustle Accounting" }

                    div class="w-48"
                    {
                        button
                            type="button"
                            id="add-transaction-button"
                            onclick=(open_add_dialog)
                            class=(BUTTON_PRIMARY_STYLE)
                        {
                            "Add Transaction"
                        }
                    }
                }

                section class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (table_row(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No transactions yet. Use \"Add Transaction\" to record one."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        (add_transaction_dialog())
    );

    base("Transactions", &[dollar_input_styles()], &content)
}

/// The create form. It starts closed and with every field empty.
fn add_transaction_dialog() -> Markup {
    let close_dialog = format!("document.getElementById('{ADD_DIALOG_ID}').close()");
    let spinner = loading_spinner();

    let form = html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full space-y-4"
        {
            (transaction_form_fields(&TransactionFormDefaults::default(), "add-"))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                " Add Transaction"
            }

            button type="button" onclick=(close_dialog) class=(BUTTON_SECONDARY_STYLE)
            {
                "Cancel"
            }
        }
    };

    modal_dialog(ADD_DIALOG_ID, "Add New Transaction", false, &form)
}
