//! Entity types of the normalized store

pub mod cricket;
pub mod football;
pub mod ids;
pub mod match_data;
pub mod people;
pub mod player_stats;
pub mod stage;
pub mod tournament;

pub use cricket::{Innings, Toss};
pub use football::{Incident, LineupEntry, Lineups, TeamSide};
pub use ids::EntityId;
pub use match_data::{Match, MatchStatus, TeamRef};
pub use people::{FollowEntry, UserProfile};
pub use player_stats::PlayerScore;
pub use stage::{
    collect_by_status, count_matches, find_match, in_branch, iter_matches, Branch, KnockoutRound,
    KnockoutStage, Stage,
};
pub use tournament::{Group, StandingRow, Tournament, TournamentCategory};
