use super::ids::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self { id: id.into(), username: None, name: None, avatar: None, extra: Map::new() }
    }
}

/// Entry of a following/followers list.
///
/// Backend rows may carry `following_id`/`user_id` next to their own `id`;
/// the followed user's id wins, in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FollowRow")]
pub struct FollowEntry {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FollowEntry {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self { id: id.into(), name: None }
    }
}

#[derive(Deserialize)]
struct FollowRow {
    #[serde(default)]
    id: Option<EntityId>,
    #[serde(default)]
    following_id: Option<EntityId>,
    #[serde(default)]
    user_id: Option<EntityId>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<FollowRow> for FollowEntry {
    type Error = &'static str;

    fn try_from(row: FollowRow) -> Result<Self, Self::Error> {
        let id = row
            .following_id
            .or(row.user_id)
            .or(row.id)
            .ok_or("follow entry needs one of `following_id`, `user_id`, `id`")?;
        Ok(Self { id, name: row.name })
    }
}
