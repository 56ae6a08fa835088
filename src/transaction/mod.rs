//! Bookkeeping for sneaker sales and purchases.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its closed sets of types and categories
//! - The in-memory `TransactionStore`
//! - View handlers for the transactions table and its dialogs
//! - Endpoints for adding, editing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod delete_page;
mod edit_endpoint;
mod edit_page;
mod form;
mod store;
mod transactions_page;

pub use core::{
    Category, MAX_AMOUNT, NewTransaction, Transaction, TransactionId, TransactionType,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use delete_page::get_delete_transaction_page;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use form::TransactionForm;
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;
