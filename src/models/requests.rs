//! Request DTOs for the album server API
//!
//! Defines the structure of incoming HTTP request bodies and the validation
//! rules applied before anything reaches the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::Album;

/// Lowest accepted price (inclusive)
pub const MIN_PRICE: i64 = 0;

/// Upper price bound (exclusive)
pub const MAX_PRICE: i64 = 100_000;

/// Request body for creating an album (POST /albums)
///
/// Every field may be absent or `null` on the wire. Such strings decode as
/// empty and such a price as zero, so that validation can report every missing
/// field at once instead of failing on the first one during decoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateAlbumRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
}

/// Decodes an explicit `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateAlbumRequest {
    /// Validates the request and turns it into an [`Album`].
    ///
    /// Violations are accumulated, not short-circuited.
    pub fn validate(self) -> Result<Album, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.id.is_empty() {
            errors.add("id", FieldIssue::required());
        }
        if self.title.is_empty() {
            errors.add("title", FieldIssue::required());
        }
        if self.artist.is_empty() {
            errors.add("artist", FieldIssue::required());
        }
        if !(MIN_PRICE..MAX_PRICE).contains(&self.price) {
            errors.add(
                "price",
                FieldIssue::out_of_range(format!(
                    "price must be between 0 and ${}",
                    MAX_PRICE / 100
                )),
            );
        }

        if errors.is_empty() {
            Ok(Album {
                id: self.id,
                title: self.title,
                artist: self.artist,
                price: self.price,
            })
        } else {
            Err(errors)
        }
    }
}

// == Validation Issues ==
/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Required,
    OutOfRange,
}

/// A single field violation, serialized as `{"error": kind, "message"?: ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub error: IssueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldIssue {
    pub fn required() -> Self {
        Self {
            error: IssueKind::Required,
            message: None,
        }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self {
            error: IssueKind::OutOfRange,
            message: Some(message.into()),
        }
    }
}

/// Field name to issue map collected while validating a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, FieldIssue>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, issue: FieldIssue) {
        self.0.insert(field, issue);
    }

    pub fn get(&self, field: &str) -> Option<&FieldIssue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the offending fields, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}
