//! Edit dialogs for single console records.

use crate::error::ValidationError;

/// Records that can be checked before a dialog saves them.
pub trait Validate {
    /// Returns every failing field, or `Ok` if the record may be saved.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A create or edit dialog holding a draft of one record.
///
/// The draft is edited in place; [`submit`](EditDialog::submit) only hands
/// it to the save callback once it validates, and closes the dialog.
/// Failures come back as a [`ValidationError`] to show the user; the dialog
/// stays open with the draft intact.
///
/// # Example
///
/// ```
/// use marquee_lib::console::{fixtures, EditDialog};
///
/// let theatre = fixtures::theatres().remove(0);
/// let mut dialog = EditDialog::edit(&theatre);
/// dialog.draft_mut().name.clear();
///
/// let mut saved = None;
/// assert!(dialog.submit(|t| saved = Some(t)).is_err());
/// assert!(dialog.is_open());
/// assert!(saved.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EditDialog<T> {
    original: Option<T>,
    draft: T,
    open: bool,
}

impl<T: Validate + Clone + PartialEq> EditDialog<T> {
    /// Opens a dialog creating a new record from `draft`.
    pub fn create(draft: T) -> Self {
        Self {
            original: None,
            draft,
            open: true,
        }
    }

    /// Opens a dialog editing a copy of `record`.
    pub fn edit(record: &T) -> Self {
        Self {
            original: Some(record.clone()),
            draft: record.clone(),
            open: true,
        }
    }

    /// Returns `true` until the dialog is submitted or cancelled.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` when creating rather than editing.
    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    /// Returns `true` if the draft differs from the record being edited.
    pub fn is_dirty(&self) -> bool {
        self.original.as_ref() != Some(&self.draft)
    }

    /// The current draft.
    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Mutable access to the draft.
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Discards changes and closes the dialog.
    pub fn cancel(&mut self) {
        if let Some(original) = &self.original {
            self.draft = original.clone();
        }
        self.open = false;
    }

    /// Validates the draft and, if it passes, saves it and closes.
    pub fn submit(&mut self, save: impl FnOnce(T)) -> Result<(), ValidationError> {
        self.draft.validate()?;
        save(self.draft.clone());
        self.open = false;
        Ok(())
    }
}
