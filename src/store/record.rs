//! Pokemon record types and their JSON representation
//!
//! Wire shape:
//! `{"id", "pokeName", "pokeElement", "trainer": {"firstName", "lastName"} | null}`

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the zero value instead of failing
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The owner of a Pokemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trainer {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
}

impl Trainer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A stored Pokemon record
///
/// Missing or `null` fields decode to their zero values, so `{}` is a valid
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "pokeName", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "pokeElement", deserialize_with = "null_as_default")]
    pub element: String,

    pub trainer: Option<Trainer>,
}

impl Pokemon {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        element: impl Into<String>,
        trainer: Option<Trainer>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            element: element.into(),
            trainer,
        }
    }
}

/// Client-supplied record payload for create and replace
///
/// Carries no identifier: an `id` key in the request body is ignored and the
/// store decides the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonBody {
    #[serde(rename = "pokeName", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "pokeElement", deserialize_with = "null_as_default")]
    pub element: String,

    pub trainer: Option<Trainer>,
}

impl PokemonBody {
    /// Build the stored record under the given identifier
    pub fn into_pokemon(self, id: impl Into<String>) -> Pokemon {
        Pokemon {
            id: id.into(),
            name: self.name,
            element: self.element,
            trainer: self.trainer,
        }
    }
}
