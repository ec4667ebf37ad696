use crate::utils::random::{Score, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body for submitting a score
///
/// # Structure
///
/// ```
/// { "user_id": 42, "score": 5000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitScore {
    pub user_id: UserId,
    pub score: Score,
}

/// Envelope wrapping every response from the leaderboard API
///
/// # Structure
///
/// ```
/// { "success": true, "data": [...] }
/// { "success": false, "error": "player not found" }
/// ```
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Missing or null success flags are treated as unsuccessful
    #[serde(default, deserialize_with = "deserialize_success")]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Deserializes an optional success flag, null is unsuccessful
fn deserialize_success<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<bool> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(false))
}

impl<T> ApiResponse<T> {
    /// Returns the data of the response only if the response
    /// reported success
    pub fn into_success(self) -> Result<Option<T>, Option<String>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error)
        }
    }
}

/// Response for the top players endpoint, entries are kept opaque
pub type TopPlayersResponse = ApiResponse<Vec<Value>>;

/// Response for the user rank endpoint, the rank is kept opaque
pub type UserRankResponse = ApiResponse<Value>;
