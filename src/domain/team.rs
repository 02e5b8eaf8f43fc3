// Team association carried by each player.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TeamId {
    Home,
    Away,
}

impl TeamId {
    pub fn opponent(self) -> TeamId {
        match self {
            TeamId::Home => TeamId::Away,
            TeamId::Away => TeamId::Home,
        }
    }
}

/// Endzone a team attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoringEndzone {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub scoring_endzone: ScoringEndzone,
}

impl Team {
    pub const HOME: Team = Team {
        id: TeamId::Home,
        scoring_endzone: ScoringEndzone::Bottom,
    };
    pub const AWAY: Team = Team {
        id: TeamId::Away,
        scoring_endzone: ScoringEndzone::Top,
    };

    pub fn for_id(id: TeamId) -> Team {
        match id {
            TeamId::Home => Team::HOME,
            TeamId::Away => Team::AWAY,
        }
    }
}

/// Running score for both teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn award(&mut self, team: TeamId) -> u32 {
        let slot = match team {
            TeamId::Home => &mut self.home,
            TeamId::Away => &mut self.away,
        };
        *slot += 1;
        *slot
    }

    pub fn of(&self, team: TeamId) -> u32 {
        match team {
            TeamId::Home => self.home,
            TeamId::Away => self.away,
        }
    }
}
