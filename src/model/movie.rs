use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A movie as exchanged with the remote API.
///
/// Servers are allowed to omit any field but `id`; missing or `null` text
/// fields come back as empty strings and a missing budget as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actors: Vec<String>,
    #[serde(default, serialize_with = "serialize_budget")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// 2^53: past this f64 no longer holds every integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole budgets go out as JSON integers (`160000000`, not `160000000.0`).
fn serialize_budget<S>(budget: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *budget {
        Some(b) if b.fract() == 0.0 && b.abs() <= MAX_EXACT_INTEGER => {
            serializer.serialize_i64(b as i64)
        }
        Some(b) => serializer.serialize_f64(b),
        None => serializer.serialize_none(),
    }
}

impl MovieRecord {
    pub fn actors_display(&self) -> String {
        self.actors.join(", ")
    }
}
