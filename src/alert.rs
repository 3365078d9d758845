//! Alert fragments for displaying success and error messages to the user.
//!
//! Alerts are rendered as htmx out-of-band swaps targeting the
//! `#alert-container` element in the page shell.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A dismissible message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A confirmation that an action succeeded.
    Success {
        /// The headline of the alert.
        message: String,
    },
    /// A recoverable failure with a suggested fix.
    Error {
        /// The headline of the alert.
        message: String,
        /// What went wrong and how to recover.
        details: String,
    },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message } => (
                "p-4 rounded border text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                String::new(),
            ),
            Alert::Error { message, details } => (
                "p-4 rounded border text-red-800 bg-red-50 border-red-300 \
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
                div class=(container_style) role="alert"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }

                    button
                        type="button"
                        class="mt-2 text-sm underline cursor-pointer"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        "Dismiss"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
