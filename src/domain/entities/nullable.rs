use serde::{Deserialize, Deserializer};

/// GROQ projections emit `null` for absent fields. Treat those the same as a
/// missing key so one incomplete document cannot fail a whole collection.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
