//! The form fields shared by the create and edit dialogs, and validation of submitted forms.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::{Category, MAX_AMOUNT, NewTransaction, Transaction, TransactionType},
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw form data for creating or editing a transaction.
///
/// Every field is optional so that a missing field produces
/// [Error::MissingField] instead of a generic deserialization rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The date the transaction happened, as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: Option<String>,
    /// Either "income" or "expense".
    #[serde(default)]
    pub type_: Option<String>,
    /// The category label, e.g. "Nike".
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionForm {
    /// Check that every field is present and convert the form into a candidate transaction.
    ///
    /// # Errors
    /// Returns [Error::MissingField] for the first blank field, or the parse
    /// error for the first field that does not hold a valid value.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let date = required(self.date, "date")?;
        let amount = required(self.amount, "amount")?;
        let type_ = required(self.type_, "type")?;
        let category = required(self.category, "category")?;

        Ok(NewTransaction {
            date: parse_date(&date)?,
            amount: parse_amount(&amount)?,
            type_: type_.parse()?,
            category: category.parse()?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(Error::MissingField(field)),
    }
}

fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && amount.abs() < MAX_AMOUNT)
        .ok_or_else(|| Error::InvalidAmount(text.to_owned()))
}

/// The values to pre-fill the form fields with.
///
/// The create dialog starts with every field empty, the edit dialog starts
/// with the values of the transaction being edited.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionFormDefaults {
    pub date: Option<Date>,
    pub amount: Option<f64>,
    pub type_: Option<TransactionType>,
    pub category: Option<Category>,
}

impl From<&Transaction> for TransactionFormDefaults {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: Some(transaction.date),
            amount: Some(transaction.amount),
            type_: Some(transaction.type_),
            category: Some(transaction.category),
        }
    }
}

/// Render the date, amount, type and category fields.
///
/// `id_prefix` is prepended to every element ID so that the create and edit
/// forms can be on the same page at once.
pub fn transaction_form_fields(defaults: &TransactionFormDefaults, id_prefix: &str) -> Markup {
    let date_id = format!("{id_prefix}date");
    let amount_id = format!("{id_prefix}amount");
    let category_id = format!("{id_prefix}category");
    let date_value = defaults.date.map(|date| date.to_string());
    let amount_value = defaults.amount.map(|amount| amount.to_string());

    html! {
        div
        {
            label
                for=(date_id)
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id=(date_id)
                type="date"
                value=[date_value]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for=(amount_id)
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id=(amount_id)
                    type="number"
                    step="any"
                    placeholder="0.00"
                    value=[amount_value]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for transaction_type in TransactionType::ALL {
                    @let radio_id = format!("{id_prefix}type-{}", transaction_type.as_str());

                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id=(radio_id)
                            type="radio"
                            value=(transaction_type.as_str())
                            checked[defaults.type_ == Some(transaction_type)]
                            required
                            tabindex="0"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for=(radio_id)
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            (transaction_type.label())
                        }
                    }
                }
            }
        }

        div
        {
            label
                for=(category_id)
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id=(category_id)
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" disabled selected[defaults.category.is_none()] { "Select category" }

                @for category in Category::ALL {
                    option
                        value=(category.as_str())
                        selected[defaults.category == Some(category)]
                    {
                        (category.as_str())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod validate_tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{
            core::{Category, NewTransaction, TransactionType},
            form::TransactionForm,
        },
    };

    fn complete_form() -> TransactionForm {
        TransactionForm {
            date: Some("2024-03-02".to_owned()),
            amount: Some("50".to_owned()),
            type_: Some("income".to_owned()),
            category: Some("Adidas".to_owned()),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        let got = complete_form().validate();

        assert_eq!(
            got,
            Ok(NewTransaction {
                date: date!(2024 - 03 - 02),
                amount: 50.0,
                type_: TransactionType::Income,
                category: Category::Adidas,
            })
        );
    }

    #[test]
    fn every_field_is_required() {
        let cases: [(fn(&mut TransactionForm), &str); 4] = [
            (|form| form.date = None, "date"),
            (|form| form.amount = None, "amount"),
            (|form| form.type_ = None, "type"),
            (|form| form.category = None, "category"),
        ];

        for (clear_field, field) in cases {
            let mut form = complete_form();
            clear_field(&mut form);

            assert_eq!(form.validate(), Err(Error::MissingField(field)));
        }
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let form = TransactionForm {
            amount: Some("   ".to_owned()),
            ..complete_form()
        };

        assert_eq!(form.validate(), Err(Error::MissingField("amount")));
    }

    #[test]
    fn amount_has_no_sign_rules() {
        let form = TransactionForm {
            amount: Some("-12.5".to_owned()),
            ..complete_form()
        };

        assert_eq!(form.validate().map(|candidate| candidate.amount), Ok(-12.5));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let form = TransactionForm {
            amount: Some("lots".to_owned()),
            ..complete_form()
        };

        assert_eq!(
            form.validate(),
            Err(Error::InvalidAmount("lots".to_owned()))
        );
    }

    #[test]
    fn rejects_infinite_amount() {
        let form = TransactionForm {
            amount: Some("inf".to_owned()),
            ..complete_form()
        };

        assert_eq!(form.validate(), Err(Error::InvalidAmount("inf".to_owned())));
    }

    #[test]
    fn rejects_amount_too_large_to_display() {
        let form = TransactionForm {
            amount: Some("1e15".to_owned()),
            ..complete_form()
        };

        assert_eq!(form.validate(), Err(Error::InvalidAmount("1e15".to_owned())));
    }

    #[test]
    fn accepts_amount_just_under_limit() {
        let form = TransactionForm {
            amount: Some("-999999999999.99".to_owned()),
            ..complete_form()
        };

        assert_eq!(
            form.validate().map(|candidate| candidate.amount),
            Ok(-999999999999.99)
        );
    }

    #[test]
    fn rejects_malformed_date() {
        let form = TransactionForm {
            date: Some("03/02/2024".to_owned()),
            ..complete_form()
        };

        assert_eq!(
            form.validate(),
            Err(Error::InvalidDate("03/02/2024".to_owned()))
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let form = TransactionForm {
            category: Some("Puma".to_owned()),
            ..complete_form()
        };

        assert_eq!(
            form.validate(),
            Err(Error::InvalidCategory("Puma".to_owned()))
        );
    }
}
