//! Food idea model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A unique identifier for a food idea.
///
/// Ids are coarse millisecond-clock values assigned by the server at
/// creation time. Serialized as a JSON number, but hand-edited data files
/// sometimes hold numeric strings, so deserialization accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdeaId(i64);

impl IdeaId {
    /// Create an id from the current wall clock (Unix ms)
    #[must_use]
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// The raw integer value of this id
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for IdeaId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IdeaId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl Serialize for IdeaId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for IdeaId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = IdeaId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer id, or a string holding one")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<IdeaId, E> {
                Ok(IdeaId(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<IdeaId, E> {
                i64::try_from(value)
                    .map(IdeaId)
                    .map_err(|_| E::custom("id out of range"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<IdeaId, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A food idea record.
///
/// Every field but `id` is optional on the wire and defaults to empty; the
/// store enforces no schema beyond "a list of objects shaped like this".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodIdea {
    /// Unique identifier, assigned by the server and never reassigned
    pub id: IdeaId,
    /// Meal category, conventionally breakfast/lunch/dinner (not enforced)
    #[serde(rename = "type", default)]
    pub meal: String,
    /// Name of the dish
    #[serde(default)]
    pub food: String,
    /// Source platform
    #[serde(rename = "socialMedia", default)]
    pub social_media: String,
    /// Who cooked it
    #[serde(rename = "doneBy", default)]
    pub done_by: String,
    /// Source URL (not validated)
    #[serde(default)]
    pub link: String,
    /// Ordered recipe steps
    #[serde(default, deserialize_with = "lenient_recipe")]
    pub recipe: Vec<String>,
}

/// Creation payload: a [`FoodIdea`] without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDraft {
    #[serde(rename = "type", default)]
    pub meal: String,
    #[serde(default)]
    pub food: String,
    #[serde(rename = "socialMedia", default)]
    pub social_media: String,
    #[serde(rename = "doneBy", default)]
    pub done_by: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_recipe")]
    pub recipe: Vec<String>,
}

impl IdeaDraft {
    /// Build the stored record once the server has assigned an id
    #[must_use]
    pub fn into_idea(self, id: IdeaId) -> FoodIdea {
        FoodIdea {
            id,
            meal: self.meal,
            food: self.food,
            social_media: self.social_media,
            done_by: self.done_by,
            link: self.link,
            recipe: self.recipe,
        }
    }
}

/// Update payload: any subset of fields to replace on an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    #[serde(rename = "socialMedia", default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<String>,
    #[serde(rename = "doneBy", default, skip_serializing_if = "Option::is_none")]
    pub done_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_recipe_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub recipe: Option<Vec<String>>,
}

impl IdeaPatch {
    /// Replace only the supplied fields, leaving the rest untouched
    pub fn apply_to(self, idea: &mut FoodIdea) {
        if let Some(meal) = self.meal {
            idea.meal = meal;
        }
        if let Some(food) = self.food {
            idea.food = food;
        }
        if let Some(social_media) = self.social_media {
            idea.social_media = social_media;
        }
        if let Some(done_by) = self.done_by {
            idea.done_by = done_by;
        }
        if let Some(link) = self.link {
            idea.link = link;
        }
        if let Some(recipe) = self.recipe {
            idea.recipe = recipe;
        }
    }
}

/// Split free text into recipe steps: one trimmed, non-blank line each
#[must_use]
pub fn normalize_recipe(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Wire representation of a recipe: either a proper step list or a single
/// newline-delimited blob, which gets normalized on the way in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeRepr {
    Steps(Vec<String>),
    Text(String),
}

impl RecipeRepr {
    fn into_steps(self) -> Vec<String> {
        match self {
            Self::Steps(steps) => steps,
            Self::Text(text) => normalize_recipe(&text),
        }
    }
}

fn lenient_recipe<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    RecipeRepr::deserialize(deserializer).map(RecipeRepr::into_steps)
}

fn lenient_recipe_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Option::<RecipeRepr>::deserialize(deserializer).map(|repr| repr.map(RecipeRepr::into_steps))
}
