//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, post, put},
};
use maud::html;

use crate::{
    AppState, endpoints,
    donation::{
        cancel_edit_endpoint, create_donation_endpoint, delete_donation_endpoint,
        get_donations_page, get_edit_donation_page, get_new_donation_page,
        update_donation_endpoint,
    },
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DONATIONS_VIEW, get(get_donations_page))
        .route(endpoints::NEW_DONATION_VIEW, get(get_new_donation_page))
        .route(endpoints::EDIT_DONATION_VIEW, get(get_edit_donation_page));

    // The POST/PUT/DELETE routes respond with HX-Redirect headers or alert
    // fragments, and are only called through htmx.
    let api_routes = Router::new()
        .route(endpoints::POST_DONATION, post(create_donation_endpoint))
        .route(endpoints::PUT_DONATION, put(update_donation_endpoint))
        .route(endpoints::DELETE_DONATION, delete(delete_donation_endpoint))
        .route(endpoints::CANCEL_EDIT, post(cancel_edit_endpoint));

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the donations page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DONATIONS_VIEW)
}

/// Render the 404 page.
async fn get_404_not_found() -> Response {
    let nav_bar = NavBar::new("").into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Page not found" }

            p
            {
                "The page you were looking for does not exist. "
                a href=(endpoints::DONATIONS_VIEW) class=(LINK_STYLE) { "Back to donations" }
            }
        }
    };

    (StatusCode::NOT_FOUND, base("Not Found", &content)).into_response()
}
