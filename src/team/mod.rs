//! Per-user Pokemon teams
//!
//! A team is an ordered, duplicate-free selection of at most
//! [`MAX_TEAM_SIZE`] catalog entries. Membership is changed only by toggling:
//! toggling an absent entry appends it (if there is room), toggling a present
//! entry removes it.
//!
//! [`TeamService`] owns every user's team and also proxies catalog retrieval
//! so callers have a single entry point.

mod service;

pub use service::TeamService;

/// Maximum number of Pokemon in one team
pub const MAX_TEAM_SIZE: usize = 6;

/// What a toggle did to a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The entry was appended to the team
    Added,
    /// The entry was already a member and has been removed
    Removed,
    /// The entry was absent and the team had no room; nothing changed
    TeamFull,
}

impl ToggleOutcome {
    /// Whether the toggle changed the team.
    pub fn is_applied(self) -> bool {
        !matches!(self, ToggleOutcome::TeamFull)
    }
}
