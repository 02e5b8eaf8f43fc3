/// Match-level rules that are not tied to a single entity.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulesTuning {
    /// First team to reach this score wins (0 disables the score limit).
    pub points_to_win: u32,

    /// Cap on players per team.
    pub max_team_size: usize,
}

impl Default for RulesTuning {
    fn default() -> Self {
        Self {
            points_to_win: 7,
            max_team_size: 7,
        }
    }
}
