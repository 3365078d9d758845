//! The app's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/donations/{donation_id}/edit',
//! use [format_endpoint].

/// The root route which redirects to the donations page.
pub const ROOT: &str = "/";
/// The page listing all donations with filter controls and statistics.
pub const DONATIONS_VIEW: &str = "/donations";
/// The page for recording a new donation.
pub const NEW_DONATION_VIEW: &str = "/donations/new";
/// The page for editing an existing donation.
pub const EDIT_DONATION_VIEW: &str = "/donations/{donation_id}/edit";

/// The route to create a donation.
pub const POST_DONATION: &str = "/api/donations";
/// The route to update a donation.
pub const PUT_DONATION: &str = "/api/donations/{donation_id}";
/// The route to delete a donation.
pub const DELETE_DONATION: &str = "/api/donations/{donation_id}";
/// The route to cancel the active edit session.
pub const CANCEL_EDIT: &str = "/api/donations/edit/cancel";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/donations/{donation_id}/edit',
/// '{donation_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
