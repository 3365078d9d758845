//! The donations listing page: filter controls, the donation table and the
//! statistics card.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_SELECT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        TYPE_BADGE_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

use super::{
    domain::{Donation, DonationType},
    store::{DonationStore, DonationTotals},
};

/// The state needed for the donations listing page.
#[derive(Debug, Clone)]
pub struct DonationsPageState {
    /// The shared donation store.
    pub donations: Arc<Mutex<DonationStore>>,
}

impl FromRef<AppState> for DonationsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            donations: state.donations.clone(),
        }
    }
}

/// The query parameters for the donations page.
#[derive(Debug, Default, Deserialize)]
pub struct DonationsQuery {
    /// The donation type to filter by. Absent, empty, or the literal "all"
    /// means no filter.
    #[serde(default, rename = "type")]
    donation_type: Option<String>,
}

impl DonationsQuery {
    fn filter(&self) -> Option<DonationType> {
        match self.donation_type.as_deref() {
            None | Some("") | Some("all") => None,
            Some(value) => DonationType::new(value).ok(),
        }
    }
}

/// A donation with its formatted URLs for template rendering.
#[derive(Debug, Clone)]
struct DonationRow {
    donation: Donation,
    edit_url: String,
    delete_url: String,
}

/// Render the donations listing page.
///
/// The same filter restricts both the table and the statistics card, so the
/// totals always describe what is on screen.
pub async fn get_donations_page(
    Query(query): Query<DonationsQuery>,
    State(state): State<DonationsPageState>,
) -> Result<Response, Error> {
    let donations = state
        .donations
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let filter = query.filter();
    let rows = donations
        .list(filter.as_ref())
        .into_iter()
        .map(|donation| DonationRow {
            edit_url: endpoints::format_endpoint(endpoints::EDIT_DONATION_VIEW, donation.id),
            delete_url: endpoints::format_endpoint(endpoints::DELETE_DONATION, donation.id),
            donation,
        })
        .collect::<Vec<_>>();
    let totals = donations.stats(filter.as_ref());
    let available_types = donations.types();

    Ok(donations_view(&rows, totals, filter.as_ref(), &available_types).into_response())
}

fn donations_view(
    rows: &[DonationRow],
    totals: DonationTotals,
    filter: Option<&DonationType>,
    available_types: &[DonationType],
) -> Markup {
    let new_donation_route = endpoints::NEW_DONATION_VIEW;
    let nav_bar = NavBar::new(endpoints::DONATIONS_VIEW).into_html();

    let table_row = |row: &DonationRow| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    (row.donation.donor_name)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(TYPE_BADGE_STYLE)
                    {
                        (row.donation.donation_type)
                    }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (format_currency(row.donation.amount))
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (row.donation.date)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        a href=(row.edit_url) class=(LINK_STYLE)
                        {
                            "Edit"
                        }

                        button
                            hx-delete=(row.delete_url)
                            hx-confirm={
                                "Are you sure you want to delete the donation from '"
                                (row.donation.donor_name) "'?"
                            }
                            hx-target="closest tr"
                            hx-target-error="#alert-container"
                            hx-swap="delete"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        )
    };

    let empty_message = if filter.is_some() {
        "No donations of this type."
    } else {
        "No donations recorded yet."
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full lg:max-w-5xl space-y-4"
            {
                div class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Donations" }

                    a href=(new_donation_route) class=(LINK_STYLE)
                    {
                        "Record Donation"
                    }
                }

                (filter_controls(filter, available_types))

                (statistics_card(totals, filter))

                div class="rounded overflow-hidden dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Donor" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @if rows.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td colspan="5" class=(TABLE_CELL_STYLE)
                                    {
                                        (empty_message) " "
                                        a href=(new_donation_route) class=(LINK_STYLE)
                                        {
                                            "Record a donation"
                                        }
                                    }
                                }
                            }

                            @for row in rows {
                                (table_row(row))
                            }
                        }
                    }
                }
            }
        }
    );

    base("Donations", &content)
}

fn filter_controls(filter: Option<&DonationType>, available_types: &[DonationType]) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::DONATIONS_VIEW)
            class="flex items-end gap-4"
        {
            div class="grow"
            {
                label
                    for="type"
                    class="block mb-2 text-sm font-medium"
                {
                    "Filter by type"
                }

                select id="type" name="type" class=(FORM_SELECT_STYLE)
                {
                    option value="all" selected[filter.is_none()] { "All" }

                    @for donation_type in available_types {
                        option
                            value=(donation_type)
                            selected[filter == Some(donation_type)]
                        {
                            (donation_type)
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) style="width: auto"
            {
                "Apply"
            }
        }
    )
}

fn statistics_card(totals: DonationTotals, filter: Option<&DonationType>) -> Markup {
    let filter_label = filter
        .map(|donation_type| donation_type.to_string())
        .unwrap_or_else(|| "all".to_string());

    html!(
        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-bold" { "Donation Statistics" }

            p
            {
                strong { "Total of Type (" (filter_label) "): " }
                span id="filtered-total" { (format_currency(totals.total)) }
            }

            p
            {
                strong { "Number of Donations: " }
                span id="filtered-count" { (totals.count) }
            }
        }
    )
}

#[cfg(test)]
mod donations_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        DonationStore,
        donation::{DonationForm, get_donations_page, list::DonationsPageState},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::DonationsQuery;

    fn get_page_state(store: DonationStore) -> DonationsPageState {
        DonationsPageState {
            donations: Arc::new(Mutex::new(store)),
        }
    }

    fn store_with_alice_and_bob() -> DonationStore {
        let mut store = DonationStore::new();
        store
            .add(&DonationForm {
                donor_name: "Alice".to_string(),
                donation_type: "money".to_string(),
                amount: 50.0,
                date: date!(2024 - 01 - 10),
            })
            .unwrap();
        store
            .add(&DonationForm {
                donor_name: "Bob".to_string(),
                donation_type: "food".to_string(),
                amount: 20.0,
                date: date!(2024 - 01 - 11),
            })
            .unwrap();

        store
    }

    fn query(donation_type: Option<&str>) -> Query<DonationsQuery> {
        Query(DonationsQuery {
            donation_type: donation_type.map(|value| value.to_string()),
        })
    }

    fn table_body_rows(html: &Html) -> Vec<String> {
        let row_selector = Selector::parse("tbody tr").unwrap();
        html.select(&row_selector)
            .map(|row| row.text().collect::<Vec<_>>().join(" "))
            .collect()
    }

    #[tokio::test]
    async fn empty_store_renders_empty_state() {
        let state = get_page_state(DonationStore::new());

        let response = get_donations_page(query(None), State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows = table_body_rows(&html);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("No donations recorded yet."));
    }

    #[tokio::test]
    async fn lists_donations_in_insertion_order() {
        let state = get_page_state(store_with_alice_and_bob());

        let response = get_donations_page(query(None), State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows = table_body_rows(&html);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Alice") && rows[0].contains("$50.00"));
        assert!(rows[1].contains("Bob") && rows[1].contains("$20.00"));
    }

    #[tokio::test]
    async fn filter_restricts_rows_and_statistics() {
        let state = get_page_state(store_with_alice_and_bob());

        let response = get_donations_page(query(Some("money")), State(state))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows = table_body_rows(&html);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("Alice"));

        assert_statistic(&html, "#filtered-total", "$50.00");
        assert_statistic(&html, "#filtered-count", "1");
    }

    #[tokio::test]
    async fn all_filter_shows_everything() {
        let state = get_page_state(store_with_alice_and_bob());

        let response = get_donations_page(query(Some("all")), State(state))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let rows = table_body_rows(&html);
        assert_eq!(rows.len(), 2);

        assert_statistic(&html, "#filtered-total", "$70.00");
        assert_statistic(&html, "#filtered-count", "2");
    }

    #[tokio::test]
    async fn filter_menu_offers_types_present_in_store() {
        let state = get_page_state(store_with_alice_and_bob());

        let response = get_donations_page(query(None), State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        let option_selector = Selector::parse("select[name='type'] option").unwrap();
        let options: Vec<String> = html
            .select(&option_selector)
            .map(|option| option.text().collect::<Vec<_>>().join(""))
            .collect();

        assert_eq!(options, vec!["All", "money", "food"]);
    }

    #[track_caller]
    fn assert_statistic(html: &Html, selector: &str, want: &str) {
        let selector = Selector::parse(selector).unwrap();
        let got: String = html
            .select(&selector)
            .next()
            .unwrap_or_else(|| panic!("No element found for {selector:?}"))
            .text()
            .collect();

        assert_eq!(want, got.trim());
    }
}
