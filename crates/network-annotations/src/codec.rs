//! Shared annotation codec
//!
//! Every annotation schema is an ordered list of records stored as one JSON
//! string under a single metadata key. The list itself has three states:
//!
//! - nil: encoded as `null`
//! - empty: encoded as `[]`
//! - populated: encoded as an array of objects, in the order supplied
//!
//! Records declare their wire keys statically through serde attributes. Field
//! declaration order is the wire order, and optional fields are `Option`s that
//! are skipped entirely when unset.

use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A record type that can be stored as an element of an annotation list
pub trait AnnotationRecord: Serialize + DeserializeOwned {
    /// Human-readable schema name used in errors and logs
    const SCHEMA_NAME: &'static str;

    /// Object metadata key the list is stored under
    const ANNOTATION_KEY: &'static str;
}

/// An ordered list of annotation records that distinguishes nil from empty
///
/// `AnnotationList::nil()` encodes as `null`, `AnnotationList::empty()`
/// encodes as `[]`, and parsing either gives back the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnnotationList<T>(Option<Vec<T>>);

impl<T> AnnotationList<T> {
    /// The nil list
    pub const fn nil() -> Self {
        Self(None)
    }

    /// The empty, non-nil list
    pub const fn empty() -> Self {
        Self(Some(Vec::new()))
    }

    /// True if this is the nil list (as opposed to an empty one)
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Records in order. Nil yields an empty slice.
    pub fn records(&self) -> &[T] {
        self.0.as_deref().unwrap_or(&[])
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// True if there are no records (nil or empty)
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Iterate over records in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records().iter()
    }

    /// Append a record, turning a nil list into a populated one
    pub fn push(&mut self, record: T) {
        self.0.get_or_insert_with(Vec::new).push(record);
    }

    /// Unwrap into the underlying optional vector
    pub fn into_inner(self) -> Option<Vec<T>> {
        self.0
    }
}

impl<T: AnnotationRecord> AnnotationList<T> {
    /// Encode this list as annotation text
    pub fn marshal(&self) -> Result<String, AnnotationError> {
        marshal_annotation(self)
    }

    /// Decode annotation text into a list
    pub fn parse(text: &str) -> Result<Self, AnnotationError> {
        parse_annotation(text)
    }
}

impl<T> Default for AnnotationList<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Vec<T>> for AnnotationList<T> {
    fn from(records: Vec<T>) -> Self {
        Self(Some(records))
    }
}

impl<T> From<Option<Vec<T>>> for AnnotationList<T> {
    fn from(records: Option<Vec<T>>) -> Self {
        Self(records)
    }
}

impl<T> FromIterator<T> for AnnotationList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Some(iter.into_iter().collect()))
    }
}

impl<T> IntoIterator for AnnotationList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.unwrap_or_default().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a AnnotationList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Encode an annotation list as its canonical text
///
/// Total over well-formed values; an error is only returned if the JSON
/// encoder itself rejects a value.
pub fn marshal_annotation<T: AnnotationRecord>(
    value: &AnnotationList<T>,
) -> Result<String, AnnotationError> {
    serde_json::to_string(value).map_err(|source| {
        debug!(schema = T::SCHEMA_NAME, error = %source, "Failed to encode annotation");
        AnnotationError::Encode {
            schema: T::SCHEMA_NAME,
            source,
        }
    })
}

/// Decode annotation text into a list of `T`
///
/// `null` yields the nil list and `[]` the empty list. Anything that is not a
/// valid encoding of the schema fails with [`AnnotationError::Decode`]; no
/// partial value is ever returned.
pub fn parse_annotation<T: AnnotationRecord>(
    text: &str,
) -> Result<AnnotationList<T>, AnnotationError> {
    serde_json::from_str(text).map_err(|source| {
        debug!(
            schema = T::SCHEMA_NAME,
            input_len = text.len(),
            error = %source,
            "Failed to decode annotation"
        );
        AnnotationError::Decode {
            schema: T::SCHEMA_NAME,
            input: text.to_string(),
            source,
        }
    })
}

/// Deserialize a required list field, reading `null` as an empty list
///
/// Writers that model lists as nullable emit `null` for an unset list. The
/// field is still required and always encodes as an array.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
