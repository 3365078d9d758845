//! Donation creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// axum_extra's Form is more lenient with missing and repeated fields than
// axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::{
    domain::DonationForm,
    form::{DonationFormValues, donation_form_fields},
    store::DonationStore,
};

/// The state needed for creating a donation.
#[derive(Debug, Clone)]
pub struct CreateDonationState {
    /// The shared donation store.
    pub donations: Arc<Mutex<DonationStore>>,
}

impl FromRef<AppState> for CreateDonationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            donations: state.donations.clone(),
        }
    }
}

/// Render the donation creation page.
pub async fn get_new_donation_page() -> Response {
    new_donation_view().into_response()
}

/// Handle donation creation form submission.
///
/// Redirects to the donations page on success. Validation failures re-render
/// the form with an inline error message and the user's input preserved.
pub async fn create_donation_endpoint(
    State(state): State<CreateDonationState>,
    Form(form): Form<DonationForm>,
) -> Response {
    let mut donations = match state.donations.lock() {
        Ok(donations) => donations,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match donations.add(&form) {
        Ok(donation) => {
            tracing::info!("recorded donation {} from {}", donation.id, donation.donor_name);

            (
                HxRedirect(endpoints::DONATIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) if error.is_validation_error() => {
            new_donation_form_view(&DonationFormValues::from(&form), &format!("Error: {error}"))
                .into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a donation: {error}");

            error.into_alert_response()
        }
    }
}

fn new_donation_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_DONATION_VIEW).into_html();
    let form = new_donation_form_view(&DonationFormValues::default(), "");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold py-4" { "Record a New Donation" }
            (form)
        }
    };

    base("Record Donation", &content)
}

fn new_donation_form_view(values: &DonationFormValues, error_message: &str) -> Markup {
    let create_donation_endpoint = endpoints::POST_DONATION;

    html! {
        form
            hx-post=(create_donation_endpoint)
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

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Donation" }
        }
    }
}


#[cfg(test)]
mod create_donation_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        DonationStore,
        donation::{DonationForm, create::CreateDonationState, create_donation_endpoint},
        endpoints,
        test_utils::{
            assert_form_error_message, assert_hx_redirect, assert_valid_html, must_get_form,
            parse_html_fragment,
        },
    };

    fn get_donation_state() -> CreateDonationState {
        CreateDonationState {
            donations: Arc::new(Mutex::new(DonationStore::new())),
        }
    }

    fn alice_form() -> DonationForm {
        DonationForm {
            donor_name: "Alice".to_string(),
            donation_type: "money".to_string(),
            amount: 50.0,
            date: date!(2024 - 01 - 10),
        }
    }

    #[tokio::test]
    async fn can_create_donation() {
        let state = get_donation_state();

        let response = create_donation_endpoint(State(state.clone()), Form(alice_form()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::DONATIONS_VIEW);

        let donations = state.donations.lock().unwrap();
        let donation = donations.get(1).expect("expected donation with ID 1");
        assert_eq!(donation.donor_name.as_ref(), "Alice");
        assert_eq!(donation.amount, 50.0);
    }

    #[tokio::test]
    async fn create_donation_fails_on_empty_donor_name() {
        let state = get_donation_state();
        let mut form = alice_form();
        form.donor_name = "".to_string();

        let response = create_donation_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Error: Donor name cannot be empty");

        assert!(
            state.donations.lock().unwrap().list(None).is_empty(),
            "store should be unchanged after a validation failure"
        );
    }

    #[tokio::test]
    async fn create_donation_fails_on_negative_amount() {
        let state = get_donation_state();
        let mut form = alice_form();
        form.amount = -5.0;

        let response = create_donation_endpoint(State(state), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Error: -5 is a negative amount, which is not allowed");
    }
}
