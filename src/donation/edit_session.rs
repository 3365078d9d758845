//! Tracks which donation, if any, is currently being edited.

use crate::Error;

use super::{
    domain::{Donation, DonationForm, DonationId},
    store::DonationStore,
};

/// The ephemeral state of an in-progress edit: the target donation's ID and a
/// copy of its field values at the time the edit began.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// The ID of the donation being edited.
    pub donation_id: DonationId,
    /// A copy of the donation's values when the edit began, used to pre-fill
    /// the edit form.
    pub draft: Donation,
}

/// Mediates the edit lifecycle: begin, commit, cancel.
///
/// At most one donation may be edited at a time. Beginning a new edit while
/// one is active replaces the prior, uncommitted draft. The controller goes
/// back to idle on cancel or on a successful commit; a failed commit keeps
/// the session active so the user can correct their input and resubmit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSessionController {
    session: Option<EditSession>,
}

impl EditSessionController {
    /// Create a controller with no active edit session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing the donation with `id`, replacing any active session.
    ///
    /// Returns a copy of the donation to pre-fill the edit form with.
    ///
    /// # Errors
    /// This function will return an [Error::DonationNotFound] if `id` does
    /// not exist in `store`. The active session is left as it was.
    pub fn begin_edit(
        &mut self,
        store: &DonationStore,
        id: DonationId,
    ) -> Result<Donation, Error> {
        let draft = store.get(id)?;

        self.session = Some(EditSession {
            donation_id: id,
            draft: draft.clone(),
        });

        Ok(draft)
    }

    /// Discard the active draft and return to idle. The store is untouched.
    ///
    /// # Errors
    /// This function will return an [Error::NoActiveEditSession] if no
    /// donation is being edited.
    pub fn cancel_edit(&mut self) -> Result<(), Error> {
        match self.session.take() {
            Some(_) => Ok(()),
            None => Err(Error::NoActiveEditSession),
        }
    }

    /// Apply `input` to the session's target donation via
    /// [DonationStore::update].
    ///
    /// On success the session is cleared. On failure the session stays
    /// active, so the caller can re-render the form and try again.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::NoActiveEditSession] if no donation is being edited,
    /// - or any error returned by [DonationStore::update].
    pub fn commit_edit(
        &mut self,
        store: &mut DonationStore,
        input: &DonationForm,
    ) -> Result<Donation, Error> {
        let id = self
            .session
            .as_ref()
            .ok_or(Error::NoActiveEditSession)?
            .donation_id;

        let updated = store.update(id, input)?;
        self.session = None;

        Ok(updated)
    }

    /// The active edit session, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }
}
