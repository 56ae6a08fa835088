//! The transaction model and the closed sets of values its fields can take.

use std::{fmt::Display, str::FromStr};

use time::Date;

use crate::Error;

/// Identifier the store assigns to a transaction when it is added.
pub type TransactionId = i64;

/// Amounts must be strictly smaller than this in magnitude, one trillion dollars.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Money earned, e.g. from reselling a pair.
    Income,
    /// Money spent, e.g. on stock.
    Expense,
}

impl TransactionType {
    /// Every transaction type, in the order they are offered in forms.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The value used for this type in HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The human readable label for form options.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The brand a transaction is filed under.
///
/// `Other` is a plain label and does not carry any free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Nike, not counting Jordan.
    Nike,
    /// Adidas and its sub-brands.
    Adidas,
    /// Air Jordan.
    Jordan,
    /// Anything that is not one of the named brands.
    Other,
}

impl Category {
    /// Every category, in the order they are offered in forms.
    pub const ALL: [Category; 4] = [
        Category::Nike,
        Category::Adidas,
        Category::Jordan,
        Category::Other,
    ];

    /// The label shown to the user, also used as the form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nike => "Nike",
            Category::Adidas => "Adidas",
            Category::Jordan => "Jordan",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense or income recorded in the ledger.
///
/// Transactions are only created by [TransactionStore::add](crate::transaction::TransactionStore::add),
/// which assigns the ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, unique within the store.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether this was income or an expense.
    pub type_: TransactionType,
    /// The brand the transaction is filed under.
    pub category: Category,
}

/// The fields of a transaction that has not been added to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether this was income or an expense.
    pub type_: TransactionType,
    /// The brand the transaction is filed under.
    pub category: Category,
}

impl NewTransaction {
    /// Attach `id` to the candidate, producing a full record.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            type_: self.type_,
            category: self.category,
        }
    }
}

impl From<Transaction> for NewTransaction {
    fn from(transaction: Transaction) -> Self {
        Self {
            date: transaction.date,
            amount: transaction.amount,
            type_: transaction.type_,
            category: transaction.category,
        }
    }
}
