//! Field deserializers for partial updates.
//!
//! In a partial update an absent key leaves a field untouched. For a
//! non-nullable column an explicit `null` is an error; for a nullable column
//! it clears the value. Both helpers are meant to be paired with
//! `#[serde(default)]` so that absent keys still deserialize to `None`.

use serde::{Deserialize, Deserializer};

/// Present keys must carry a value: `null` fails to deserialize.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Present keys yield `Some`, so `null` becomes `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
