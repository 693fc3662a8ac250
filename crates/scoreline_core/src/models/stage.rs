//! Multi-branch stage container and the traversal shared by every view
//! that walks fixtures.
//!
//! ## Traversal order
//! 1. stages in sequence order
//! 2. inside a stage: `league_stage`, then `group_stage`, then `knockout_stage`
//! 3. inside the knockout stage: [`KnockoutRound::ALL`] order
//!
//! Lookup, filtering and counting all go through [`Stage::branches`], so they
//! agree on the branch set and on ordering.

use super::ids::EntityId;
use super::match_data::Match;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Named single-elimination round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KnockoutRound {
    #[serde(rename = "final")]
    Final,
    #[serde(rename = "semifinal")]
    Semifinal,
    #[serde(rename = "quaterfinal")]
    Quarterfinal,
    #[serde(rename = "round_16")]
    Round16,
    #[serde(rename = "round_32")]
    Round32,
    #[serde(rename = "round_64")]
    Round64,
    #[serde(rename = "round_128")]
    Round128,
}

impl KnockoutRound {
    pub const ALL: [KnockoutRound; 7] = [
        KnockoutRound::Final,
        KnockoutRound::Semifinal,
        KnockoutRound::Quarterfinal,
        KnockoutRound::Round16,
        KnockoutRound::Round32,
        KnockoutRound::Round64,
        KnockoutRound::Round128,
    ];

    /// Wire key (note the backend spells it `quaterfinal`)
    pub fn as_str(self) -> &'static str {
        match self {
            KnockoutRound::Final => "final",
            KnockoutRound::Semifinal => "semifinal",
            KnockoutRound::Quarterfinal => "quaterfinal",
            KnockoutRound::Round16 => "round_16",
            KnockoutRound::Round32 => "round_32",
            KnockoutRound::Round64 => "round_64",
            KnockoutRound::Round128 => "round_128",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|round| round.as_str() == key)
    }
}

/// Which branch of a stage a match was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    League,
    Group,
    Knockout(KnockoutRound),
}

impl Branch {
    /// `league`, `group`, or a knockout round key such as `semifinal`
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "league" | "league_stage" => Some(Branch::League),
            "group" | "group_stage" => Some(Branch::Group),
            round => KnockoutRound::parse(round).map(Branch::Knockout),
        }
    }
}

/// Knockout bracket, one match list per round.
///
/// A round key that is missing, `null`, or not an array reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnockoutStage {
    #[serde(
        rename = "final",
        default,
        deserialize_with = "lenient_round",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub final_round: Vec<Arc<Match>>,
    #[serde(default, deserialize_with = "lenient_round", skip_serializing_if = "Vec::is_empty")]
    pub semifinal: Vec<Arc<Match>>,
    #[serde(
        rename = "quaterfinal",
        default,
        deserialize_with = "lenient_round",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub quarterfinal: Vec<Arc<Match>>,
    #[serde(default, deserialize_with = "lenient_round", skip_serializing_if = "Vec::is_empty")]
    pub round_16: Vec<Arc<Match>>,
    #[serde(default, deserialize_with = "lenient_round", skip_serializing_if = "Vec::is_empty")]
    pub round_32: Vec<Arc<Match>>,
    #[serde(default, deserialize_with = "lenient_round", skip_serializing_if = "Vec::is_empty")]
    pub round_64: Vec<Arc<Match>>,
    #[serde(default, deserialize_with = "lenient_round", skip_serializing_if = "Vec::is_empty")]
    pub round_128: Vec<Arc<Match>>,
}

impl KnockoutStage {
    pub fn round(&self, round: KnockoutRound) -> &[Arc<Match>] {
        match round {
            KnockoutRound::Final => &self.final_round,
            KnockoutRound::Semifinal => &self.semifinal,
            KnockoutRound::Quarterfinal => &self.quarterfinal,
            KnockoutRound::Round16 => &self.round_16,
            KnockoutRound::Round32 => &self.round_32,
            KnockoutRound::Round64 => &self.round_64,
            KnockoutRound::Round128 => &self.round_128,
        }
    }

    pub fn round_mut(&mut self, round: KnockoutRound) -> &mut Vec<Arc<Match>> {
        match round {
            KnockoutRound::Final => &mut self.final_round,
            KnockoutRound::Semifinal => &mut self.semifinal,
            KnockoutRound::Quarterfinal => &mut self.quarterfinal,
            KnockoutRound::Round16 => &mut self.round_16,
            KnockoutRound::Round32 => &mut self.round_32,
            KnockoutRound::Round64 => &mut self.round_64,
            KnockoutRound::Round128 => &mut self.round_128,
        }
    }

    /// Rounds in traversal order
    fn rounds_mut(&mut self) -> impl Iterator<Item = &mut Vec<Arc<Match>>> + '_ {
        [
            &mut self.final_round,
            &mut self.semifinal,
            &mut self.quarterfinal,
            &mut self.round_16,
            &mut self.round_32,
            &mut self.round_64,
            &mut self.round_128,
        ]
        .into_iter()
    }
}

/// One tournament round container with up to three match branches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub league_stage: Vec<Arc<Match>>,
    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub group_stage: Vec<Arc<Match>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knockout_stage: Option<KnockoutStage>,
}

impl Stage {
    pub fn league(matches: Vec<Match>) -> Self {
        Self { league_stage: matches.into_iter().map(Arc::new).collect(), ..Self::default() }
    }

    pub fn group(matches: Vec<Match>) -> Self {
        Self { group_stage: matches.into_iter().map(Arc::new).collect(), ..Self::default() }
    }

    pub fn knockout_round(&self, round: KnockoutRound) -> &[Arc<Match>] {
        match &self.knockout_stage {
            Some(knockout) => knockout.round(round),
            None => &[],
        }
    }

    /// Every branch of this stage in traversal order, empty ones included
    pub fn branches(&self) -> impl Iterator<Item = (Branch, &[Arc<Match>])> + '_ {
        let league = std::iter::once((Branch::League, self.league_stage.as_slice()));
        let group = std::iter::once((Branch::Group, self.group_stage.as_slice()));
        let knockout = KnockoutRound::ALL
            .into_iter()
            .map(move |round| (Branch::Knockout(round), self.knockout_round(round)));
        league.chain(group).chain(knockout)
    }

    pub fn len(&self) -> usize {
        self.branches().map(|(_, matches)| matches.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mutable slot of the first match with `id`, same order as [`find_match`]
    pub fn match_slot_mut(&mut self, id: &EntityId) -> Option<&mut Arc<Match>> {
        let knockout = self
            .knockout_stage
            .iter_mut()
            .flat_map(|knockout| knockout.rounds_mut())
            .flat_map(|round| round.iter_mut());
        self.league_stage
            .iter_mut()
            .chain(self.group_stage.iter_mut())
            .chain(knockout)
            .find(|m| m.id == *id)
    }
}

/// All matches across `stages` in traversal order
pub fn iter_matches(stages: &[Stage]) -> impl Iterator<Item = &Arc<Match>> + '_ {
    stages.iter().flat_map(|stage| stage.branches()).flat_map(|(_, matches)| matches.iter())
}

/// Matches of one branch across all stages, in stage order
pub fn in_branch(stages: &[Stage], branch: Branch) -> Vec<Arc<Match>> {
    stages
        .iter()
        .flat_map(|stage| stage.branches())
        .filter(|(found, _)| *found == branch)
        .flat_map(|(_, matches)| matches.iter().cloned())
        .collect()
}

/// First match with `id`, or `None`
pub fn find_match<'a>(stages: &'a [Stage], id: &EntityId) -> Option<&'a Arc<Match>> {
    iter_matches(stages).find(|m| m.id == *id)
}

/// Matches whose status equals `status`, in traversal order.
///
/// No deduplication: a fixture listed in two branches is returned twice.
pub fn collect_by_status(stages: &[Stage], status: &str) -> Vec<Arc<Match>> {
    iter_matches(stages).filter(|m| m.status_code.is(status)).cloned().collect()
}

pub fn count_matches(stages: &[Stage]) -> usize {
    stages.iter().map(Stage::len).sum()
}

fn nullable_seq<'de, D>(deserializer: D) -> Result<Vec<Arc<Match>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Arc<Match>>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_round<'de, D>(deserializer: D) -> Result<Vec<Arc<Match>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value::<Match>(item).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()
            .map_err(de::Error::custom),
        Value::Null => Ok(Vec::new()),
        other => {
            warn!(value = %other, "knockout round is not an array, treating it as empty");
            Ok(Vec::new())
        }
    }
}
