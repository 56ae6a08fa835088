//! The in-memory store that owns the list of transactions.

use time::macros::date;

use crate::{
    Error,
    transaction::core::{Category, NewTransaction, Transaction, TransactionId, TransactionType},
};

/// The authoritative, ordered collection of transactions for the session.
///
/// Transactions are kept in insertion order. Updates replace a transaction
/// in place and removals take out exactly one transaction, so the relative
/// order of the remaining transactions never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store. The first transaction added gets the ID 1.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store that starts with `transactions`.
    ///
    /// IDs handed out afterwards start after the largest ID in `transactions`.
    /// If two transactions share an ID, only the first is kept. Transactions
    /// with the ID `i64::MAX` are skipped since no ID could follow them.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let mut store = Self::new();

        for transaction in transactions {
            if store.get(transaction.id).is_some() {
                tracing::warn!(
                    "Skipping transaction with duplicate ID {} when seeding the store",
                    transaction.id
                );
                continue;
            }

            let Some(following_id) = transaction.id.checked_add(1) else {
                tracing::warn!(
                    "Skipping transaction with ID {} when seeding the store: no IDs are left after it",
                    transaction.id
                );
                continue;
            };

            store.next_id = store.next_id.max(following_id);
            store.transactions.push(transaction);
        }

        store
    }

    /// Create a store with the sample transactions shown on first launch.
    pub fn with_sample_data() -> Self {
        Self::with_transactions(vec![
            Transaction {
                id: 1,
                date: date!(2024 - 03 - 01),
                amount: 150.0,
                type_: TransactionType::Expense,
                category: Category::Nike,
            },
            Transaction {
                id: 2,
                date: date!(2024 - 03 - 05),
                amount: 200.0,
                type_: TransactionType::Income,
                category: Category::Adidas,
            },
            Transaction {
                id: 3,
                date: date!(2024 - 03 - 10),
                amount: 180.0,
                type_: TransactionType::Expense,
                category: Category::Jordan,
            },
        ])
    }

    /// Assign a fresh ID to `candidate` and append it to the end of the list.
    pub fn add(&mut self, candidate: NewTransaction) -> Transaction {
        let id = self.next_id;
        self.next_id += 1;

        let transaction = candidate.with_id(id);
        self.transactions.push(transaction.clone());

        transaction
    }

    /// Replace the transaction with the same ID as `transaction`, keeping its position.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if no transaction has the ID
    /// `transaction.id`. The store is not modified in that case.
    pub fn update(&mut self, transaction: Transaction) -> Result<(), Error> {
        let existing = self
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id)
            .ok_or(Error::UpdateMissingTransaction)?;

        *existing = transaction;

        Ok(())
    }

    /// Remove the transaction with `id`, returning it.
    ///
    /// Returns `None` and leaves the store untouched if there is no such transaction.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        Some(self.transactions.remove(index))
    }

    /// The transaction with `id`, if there is one.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// The transactions in display order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
