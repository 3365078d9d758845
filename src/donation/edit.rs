//! Donation editing page and endpoints.
//!
//! Opening the edit page begins an edit session; submitting the form commits
//! it; the cancel button (or endpoint) discards it. A failed commit keeps the
//! session active so the form can be corrected and resubmitted.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, LINK_STYLE, base},
    navigation::NavBar,
};

use super::{
    domain::{DonationForm, DonationId},
    edit_session::EditSessionController,
    form::{DonationFormValues, donation_form_fields},
    store::DonationStore,
};

/// The state needed for the edit donation page and the update endpoint.
#[derive(Debug, Clone)]
pub struct EditDonationState {
    /// The shared donation store.
    pub donations: Arc<Mutex<DonationStore>>,
    /// The shared edit session controller.
    pub edit_session: Arc<Mutex<EditSessionController>>,
}

impl FromRef<AppState> for EditDonationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            donations: state.donations.clone(),
            edit_session: state.edit_session.clone(),
        }
    }
}

/// The state needed for cancelling an edit.
#[derive(Debug, Clone)]
pub struct CancelEditState {
    /// The shared edit session controller.
    pub edit_session: Arc<Mutex<EditSessionController>>,
}

impl FromRef<AppState> for CancelEditState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            edit_session: state.edit_session.clone(),
        }
    }
}

/// Render the donation editing page, beginning an edit session for the
/// donation with `donation_id`.
pub async fn get_edit_donation_page(
    Path(donation_id): Path<DonationId>,
    State(state): State<EditDonationState>,
) -> Result<Response, Error> {
    let donations = state
        .donations
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;
    let mut edit_session = state
        .edit_session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire edit session lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let update_endpoint = endpoints::format_endpoint(endpoints::PUT_DONATION, donation_id);

    match edit_session.begin_edit(&donations, donation_id) {
        Ok(draft) => Ok(edit_donation_view(
            &update_endpoint,
            &DonationFormValues::from(&draft),
            "",
        )
        .into_response()),
        Err(Error::DonationNotFound) => Ok(edit_donation_view(
            &update_endpoint,
            &DonationFormValues::default(),
            "Donation not found",
        )
        .into_response()),
        Err(error) => {
            tracing::error!("Failed to begin editing donation {donation_id}: {error}");
            Err(error)
        }
    }
}

/// Handle donation update form submission by committing the active edit
/// session.
pub async fn update_donation_endpoint(
    Path(donation_id): Path<DonationId>,
    State(state): State<EditDonationState>,
    Form(form): Form<DonationForm>,
) -> Response {
    let mut donations = match state.donations.lock() {
        Ok(donations) => donations,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };
    let mut edit_session = match state.edit_session.lock() {
        Ok(edit_session) => edit_session,
        Err(error) => {
            tracing::error!("could not acquire edit session lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let update_endpoint = endpoints::format_endpoint(endpoints::PUT_DONATION, donation_id);

    match edit_session.commit_edit(&mut donations, &form) {
        Ok(donation) => {
            tracing::info!("updated donation {}", donation.id);

            (
                HxRedirect(endpoints::DONATIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        // The session stays active, so re-render the form for another try.
        Err(error) if error.is_validation_error() => edit_donation_form_view(
            &update_endpoint,
            &DonationFormValues::from(&form),
            &format!("Error: {error}"),
        )
        .into_response(),
        Err(Error::NoActiveEditSession) => Error::NoActiveEditSession.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating donation {donation_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

/// Cancel the active edit session and redirect back to the donations page.
pub async fn cancel_edit_endpoint(State(state): State<CancelEditState>) -> Response {
    let mut edit_session = match state.edit_session.lock() {
        Ok(edit_session) => edit_session,
        Err(error) => {
            tracing::error!("could not acquire edit session lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match edit_session.cancel_edit() {
        Ok(()) => (
            HxRedirect(endpoints::DONATIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn edit_donation_view(
    update_endpoint: &str,
    values: &DonationFormValues,
    error_message: &str,
) -> Markup {
    let nav_bar = NavBar::new("").into_html();
    let form = edit_donation_form_view(update_endpoint, values, error_message);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold py-4" { "Edit Donation" }
            (form)
        }
    };

    base("Edit Donation", &content)
}

fn edit_donation_form_view(
    update_endpoint: &str,
    values: &DonationFormValues,
    error_message: &str,
) -> Markup {
    html! {
        form
            hx-put=(update_endpoint)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (donation_form_fields(values))

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Donation" }

            button
                type="button"
                hx-post=(endpoints::CANCEL_EDIT)
                class=(LINK_STYLE)
            {
                "Cancel"
            }
        }
    }
}
