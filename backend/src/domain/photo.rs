//! Photo records and the create-payload rules.
//!
//! A [`PhotoDraft`] is whatever the client sent. The image URL is the only
//! required field. [`PhotoDraft::validate`] turns a draft into a [`NewPhoto`]
//! whose caption has been recomputed from the title and image URL; the
//! client's own caption is always discarded.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Error, User, UserId};

/// Stable numeric photo identifier assigned by the photo store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(i32);

impl PhotoId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored photo record, serialised exactly as clients receive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub title: String,
    pub caption: String,
    pub image_url: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A photo together with its owner, for single-record reads.
///
/// `owner` is `None` only if the owning user has since disappeared from the
/// user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoWithOwner {
    #[serde(flatten)]
    pub photo: Photo,
    pub owner: Option<User>,
}

/// Validated, normalised insert request for the photo store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub title: String,
    pub caption: String,
    pub image_url: String,
    pub owner_id: UserId,
}

/// Raw create payload before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDraft {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: Option<UserId>,
}

const IMAGE_URL_EMPTY: &str = "Image URL cannot be empty";

/// Every rule a [`PhotoDraft`] violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("photo payload rejected: {}", messages.join("; "))]
pub struct PhotoValidationError {
    messages: Vec<String>,
}

impl PhotoValidationError {
    /// The violated-rule messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl From<PhotoValidationError> for Error {
    fn from(error: PhotoValidationError) -> Self {
        Error::validation(error.messages)
    }
}

/// Derive the stored caption: the upper-cased title, one space, then the
/// image URL verbatim.
///
/// # Examples
/// ```
/// use photos_backend::domain::photo::derive_caption;
///
/// assert_eq!(
///     derive_caption("Title Testing", "http://percobaan.com"),
///     "TITLE TESTING http://percobaan.com"
/// );
/// ```
#[must_use]
pub fn derive_caption(title: &str, image_url: &str) -> String {
    format!("{} {image_url}", title.to_uppercase())
}

impl PhotoDraft {
    /// Require an image URL and normalise the caption.
    ///
    /// The title is stored as sent; an absent title is stored empty.
    /// `principal` supplies the owner when the draft names none.
    ///
    /// # Errors
    /// Returns [`PhotoValidationError`] listing every violated rule.
    pub fn validate(self, principal: UserId) -> Result<NewPhoto, PhotoValidationError> {
        let Self {
            title,
            caption: _,
            image_url,
            owner_id,
        } = self;

        let Some(image_url) = image_url.filter(|url| !url.trim().is_empty()) else {
            return Err(PhotoValidationError {
                messages: vec![IMAGE_URL_EMPTY.to_owned()],
            });
        };
        let title = title.unwrap_or_default();

        Ok(NewPhoto {
            caption: derive_caption(&title, &image_url),
            title,
            image_url,
            owner_id: owner_id.unwrap_or(principal),
        })
    }
}
