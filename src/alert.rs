//! Alert system for displaying error messages to users.
//!
//! Alerts are HTML fragments that htmx swaps into the `#alert-container`
//! element of the base page, usually via `hx-target-error`.

use axum::response::Html;
use maud::{Markup, html};

/// An alert message to show the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The operation failed. `details` should tell the user how to fix it.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    fn into_markup(self) -> Markup {
        let (kind, style, message, details) = match self {
            Alert::Error { message, details } => (
                "error",
                "flex items-start gap-3 p-4 rounded shadow-lg border \
                text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div role="alert" data-alert-kind=(kind) class=(style)
                {
                    div class="flex-1"
                    {
                        p class="font-semibold" { (message) }

                        @if !details.is_empty() {
                            p class="text-sm" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="text-sm font-medium underline"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        "Dismiss"
                    }
                }
            }
        }
    }
}
