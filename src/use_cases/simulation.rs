// Authoritative match state and the per-tick rule pipeline.

use super::types::{MatchEvent, WorldUpdate};
use crate::domain::systems::{possession, spacing, spawn};
use crate::domain::{
    Disc, DiscSnapshot, GameConfig, MatchError, Player, PlayerId, PlayerInput, PlayerSnapshot,
    Score, Team, TeamId,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

pub struct Match {
    config: GameConfig,
    players: Vec<Player>,
    // Latest input per player; a throw target is consumed by the tick that sees it.
    inputs: BTreeMap<PlayerId, PlayerInput>,
    // Line-up slot per player, unique within a team.
    slots: BTreeMap<PlayerId, usize>,
    discs: Vec<Disc>,
    score: Score,
    clock: f64,
    winner: Option<TeamId>,
}

impl Match {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            inputs: BTreeMap::new(),
            slots: BTreeMap::new(),
            discs: Vec::new(),
            score: Score::default(),
            clock: 0.0,
            winner: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Direct access for the rules collaborator (possession, respawn).
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    fn team_size(&self, team: TeamId) -> usize {
        self.players.iter().filter(|p| p.team.id == team).count()
    }

    /// Lowest line-up slot no current teammate occupies.
    fn free_slot(&self, team: TeamId) -> usize {
        let taken: BTreeSet<usize> = self
            .players
            .iter()
            .filter(|p| p.team.id == team)
            .filter_map(|p| self.slots.get(&p.id()).copied())
            .collect();
        (0..).find(|slot| !taken.contains(slot)).unwrap_or_default()
    }

    /// Adds a player to the smaller team (home on a tie) and lines them up.
    pub fn join(
        &mut self,
        player_id: PlayerId,
        name: impl Into<String>,
        socket_id: impl Into<String>,
    ) -> Result<TeamId, MatchError> {
        if self.player(player_id).is_some() {
            return Err(MatchError::AlreadyJoined(player_id));
        }

        let home = self.team_size(TeamId::Home);
        let away = self.team_size(TeamId::Away);
        let (team_id, size) = if home <= away {
            (TeamId::Home, home)
        } else {
            (TeamId::Away, away)
        };
        if size >= self.config.rules.max_team_size {
            return Err(MatchError::TeamFull);
        }
        let slot = self.free_slot(team_id);

        let team = Team::for_id(team_id);
        let mut player = Player::create(player_id, name, socket_id, team, &self.config);
        player.set_start_position(spawn::spawn_point(
            team,
            slot,
            self.config.rules.max_team_size,
            &self.config.field,
        ));
        player.set_in_field();

        info!(player_id, team = ?team_id, slot, "player joined");
        self.players.push(player);
        self.inputs.insert(player_id, PlayerInput::default());
        self.slots.insert(player_id, slot);
        Ok(team_id)
    }

    /// Removes a player. A disc they hold is left at rest where they stood;
    /// discs they threw keep flying.
    pub fn leave(&mut self, player_id: PlayerId) -> Result<(), MatchError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or(MatchError::UnknownPlayer(player_id))?;

        let mut player = self.players.remove(index);
        if player.has_disc {
            self.discs.push(possession::drop_disc(&mut player, &self.config));
        }
        self.inputs.remove(&player_id);
        self.slots.remove(&player_id);

        info!(player_id, "player left");
        Ok(())
    }

    pub fn set_input(
        &mut self,
        player_id: PlayerId,
        input: PlayerInput,
    ) -> Result<(), MatchError> {
        match self.inputs.get_mut(&player_id) {
            Some(slot) => {
                *slot = input;
                Ok(())
            }
            None => Err(MatchError::UnknownPlayer(player_id)),
        }
    }

    /// Advances the match by `delta_time` milliseconds.
    pub fn tick(&mut self, delta_time: f32) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        if self.winner.is_some() {
            return events;
        }

        // Every input lands before anything integrates.
        for p in &mut self.players {
            let slot = self.inputs.entry(p.id()).or_default();
            let command = *slot;
            slot.mouse_down = None;

            p.update_on_input(&command);
            if !p.has_disc {
                continue;
            }
            p.stop_movement();
            match possession::release_throw(p, &command, &self.config) {
                Ok(Some(disc)) => {
                    events.push(MatchEvent::Thrown { player_id: p.id() });
                    self.discs.push(disc);
                }
                Ok(None) => {}
                Err(error) => warn!(player_id = p.id(), ?error, "throw rejected"),
            }
        }

        self.clock += f64::from(delta_time);
        for p in &mut self.players {
            p.update(self.clock, delta_time);
        }
        for d in &mut self.discs {
            d.update(self.clock, delta_time);
        }

        spacing::enforce_disc_space(&mut self.players);

        let caught = possession::resolve_catches(&mut self.players, &mut self.discs);
        for (player_id, thrower_id) in caught {
            events.push(MatchEvent::Caught {
                player_id,
                thrower_id,
            });
        }

        for p in &mut self.players {
            p.recompute_derived_flags();
        }

        if let Some(h) = possession::holder_index(&self.players) {
            let holder = &mut self.players[h];
            if holder.has_scored() {
                let (player_id, team) = (holder.id(), holder.team.id);
                let points = self.score.award(team);
                info!(player_id, team = ?team, points, "point scored");
                events.push(MatchEvent::Scored {
                    player_id,
                    team,
                    score: self.score,
                });

                let target = self.config.rules.points_to_win;
                if target > 0 && points >= target {
                    let (home, away) = (self.score.home, self.score.away);
                    info!(team = ?team, home, away, "match won");
                    self.winner = Some(team);
                    events.push(MatchEvent::Won { team });
                }
                self.reset_point();
                return events;
            }

            if holder.stalled_out() {
                debug!(player_id = holder.id(), "stalled out");
                events.push(MatchEvent::StalledOut { player_id: holder.id() });
                let disc = possession::drop_disc(holder, &self.config);
                self.discs.push(disc);
            }
        }

        self.ensure_disc();
        events
    }

    /// Lines everyone back up and puts a fresh disc at centre.
    fn reset_point(&mut self) {
        for p in &mut self.players {
            let slot = self.slots.get(&p.id()).copied().unwrap_or_default();
            p.set_start_position(spawn::spawn_point(
                p.team,
                slot,
                self.config.rules.max_team_size,
                &self.config.field,
            ));
            p.lose_possession();
            p.stop_movement();
            p.set_has_scored();
            p.set_in_field();
        }
        for input in self.inputs.values_mut() {
            *input = PlayerInput::default();
        }
        self.discs.clear();
        self.ensure_disc();
    }

    fn ensure_disc(&mut self) {
        if self.players.is_empty()
            || !self.discs.is_empty()
            || possession::holder_index(&self.players).is_some()
        {
            return;
        }
        let centre = self.config.field.center();
        self.discs.push(Disc::create_new_disc(centre.to_array(), &self.config));
        debug!(x = centre.x, y = centre.y, "disc placed at centre");
    }

    pub fn snapshot(&self, tick: u64) -> WorldUpdate {
        WorldUpdate {
            tick,
            clock: self.clock,
            score: self.score,
            players: self.players.iter().map(PlayerSnapshot::from).collect(),
            discs: self.discs.iter().map(DiscSnapshot::from).collect(),
            events: Vec::new(),
        }
    }
}
