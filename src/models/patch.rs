//! Tri-state patch fields
//!
//! Partial updates must distinguish a field that was omitted from one that
//! was explicitly set to null. A plain `Option<T>` collapses both into
//! `None`, so patch DTOs use `PatchField<T>` instead: `Missing` (key absent,
//! leave the stored value untouched), `Null` (key present as JSON null) and
//! `Value` (key present with a value).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatchField<T> {
    /// Field was not part of the patch at all.
    #[default]
    Missing,
    /// Field was supplied as an explicit null.
    Null,
    /// Field was supplied with a value.
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, PatchField::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    /// Borrow the supplied value, if one was supplied.
    pub fn value(&self) -> Option<&T> {
        match self {
            PatchField::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Deserializes from the *presence* of a key: the surrounding struct must
/// mark the field `#[serde(default)]` so an absent key stays `Missing`.
impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => PatchField::Value(value),
            None => PatchField::Null,
        })
    }
}

/// `Missing` fields are expected to be skipped by the surrounding struct via
/// `#[serde(skip_serializing_if = "PatchField::is_missing")]`; if one is
/// serialized anyway it degrades to null.
impl<T> Serialize for PatchField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatchField::Missing | PatchField::Null => serializer.serialize_none(),
            PatchField::Value(value) => serializer.serialize_some(value),
        }
    }
}
