//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required form field was missing or blank.
    ///
    /// The browser should stop this from happening via the `required`
    /// attribute, but the server checks again since it cannot trust the client.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// The date could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The amount could not be parsed as a finite number, or its magnitude
    /// is not below [MAX_AMOUNT](crate::transaction::MAX_AMOUNT).
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The transaction type was not one of the known types.
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// The category was not one of the known categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Could not acquire the lock on the transaction store.
    ///
    /// This happens if a thread panicked while holding the lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// A request or response body could not be read in full.
    #[error("could not read the message body")]
    BodyReadError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing field".to_owned(),
                    details: format!("Fill in the {field} field and try again."),
                },
            ),
            Error::InvalidDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction date".to_owned(),
                    details: format!("\"{date}\" is not a date. Use the format YYYY-MM-DD."),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{amount}\" is not a number between -1,000,000,000,000 and 1,000,000,000,000."
                    ),
                },
            ),
            Error::InvalidTransactionType(type_) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction type".to_owned(),
                    details: format!("\"{type_}\" is not a transaction type. Pick income or expense."),
                },
            ),
            Error::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: format!("\"{category}\" is not a category. Pick one from the list."),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Transaction not found".to_owned(),
                    details: "It may have been deleted already. \
                    Refresh the page to see the latest transactions."
                        .to_owned(),
                },
            ),
            Error::UpdateMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update transaction".to_owned(),
                    details: "The transaction could not be found.".to_owned(),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
