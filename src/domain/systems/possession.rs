use crate::domain::{Disc, GameConfig, Player, PlayerId, PlayerInput, ThrowError};
use tracing::debug;

/// Index of the player currently holding the disc, if any.
pub fn holder_index(players: &[Player]) -> Option<usize> {
    players.iter().position(|p| p.has_disc)
}

/// Releases a new disc from the holder toward `input.mouse_down`.
///
/// On a rejected throw the holder keeps possession and no disc is created.
pub fn release_throw(
    holder: &mut Player,
    input: &PlayerInput,
    config: &GameConfig,
) -> Result<Option<Disc>, ThrowError> {
    if input.mouse_down.is_none() {
        return Ok(None);
    }

    let mut disc =
        Disc::create_new_disc(holder.position.to_array(), config).with_source(holder.id());
    disc.update_on_input(input)?;

    holder.lose_possession();
    debug!(
        player_id = holder.id(),
        target_x = disc.throw_destination().x,
        target_y = disc.throw_destination().y,
        "disc thrown"
    );
    Ok(Some(disc))
}

/// Player who takes this disc: anyone touching it except whoever released
/// it. Ties go to the lowest id.
pub fn find_catcher(players: &[Player], disc: &Disc) -> Option<usize> {
    players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.has_disc && Some(p.id()) != disc.source)
        .filter(|(_, p)| p.position.distance_to(disc.position) <= p.hitbox_size())
        .min_by_key(|(_, p)| p.id())
        .map(|(i, _)| i)
}

/// Hands every touchable disc to its catcher; caught discs are removed.
/// Returns `(catcher, thrower)` pairs.
pub fn resolve_catches(
    players: &mut [Player],
    discs: &mut Vec<Disc>,
) -> Vec<(PlayerId, Option<PlayerId>)> {
    let mut caught = Vec::new();

    discs.retain(|disc| {
        if holder_index(players).is_some() {
            return true;
        }
        let Some(i) = find_catcher(players, disc) else {
            return true;
        };

        let catcher = &mut players[i];
        catcher.has_disc = true;
        catcher.stop_movement();
        debug!(player_id = catcher.id(), thrower_id = ?disc.source, "disc caught");
        caught.push((catcher.id(), disc.source));
        false
    });

    caught
}

/// Takes the disc away from a holder and leaves it at rest at their feet.
/// The former holder becomes its source so they cannot pick it straight up.
pub fn drop_disc(holder: &mut Player, config: &GameConfig) -> Disc {
    holder.lose_possession();
    Disc::create_new_disc(holder.position.to_array(), config).with_source(holder.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Team, Vector2};

    fn player_at(id: PlayerId, x: f32, y: f32) -> Player {
        let config = GameConfig::default();
        let mut p = Player::create(id, format!("p{id}"), format!("s{id}"), Team::HOME, &config);
        p.set_start_position([x, y]);
        p
    }

    #[test]
    fn when_holder_throws_then_disc_leaves_with_source_and_possession_ends() {
        let config = GameConfig::default();
        let mut holder = player_at(3, 100.0, 100.0);
        holder.has_disc = true;
        let input = PlayerInput {
            mouse_down: Some(Vector2::new(100.0, 200.0)),
            ..PlayerInput::default()
        };

        let disc = release_throw(&mut holder, &input, &config)
            .expect("valid throw")
            .expect("disc released");

        assert!(!holder.has_disc);
        assert_eq!(disc.source, Some(3));
        assert_eq!(disc.position, Vector2::new(100.0, 100.0));
        assert!(disc.is_in_flight());
    }

    #[test]
    fn when_throw_target_is_the_holder_then_possession_is_kept() {
        let config = GameConfig::default();
        let mut holder = player_at(3, 100.0, 100.0);
        holder.has_disc = true;
        let input = PlayerInput {
            mouse_down: Some(Vector2::new(100.0, 100.0)),
            ..PlayerInput::default()
        };

        let result = release_throw(&mut holder, &input, &config);

        assert!(matches!(result, Err(ThrowError::ZeroLengthThrow)));
        assert!(holder.has_disc);
    }

    #[test]
    fn when_two_players_touch_the_disc_then_lowest_id_catches_it() {
        let config = GameConfig::default();
        let mut players = vec![
            player_at(7, 203.0, 200.0),
            player_at(4, 197.0, 200.0),
            player_at(9, 400.0, 400.0),
        ];
        let mut discs = vec![Disc::create_new_disc([200.0, 200.0], &config)];

        let caught = resolve_catches(&mut players, &mut discs);

        assert_eq!(caught, vec![(4, None)]);
        assert!(discs.is_empty());
        assert!(players[1].has_disc);
        assert!(!players[0].has_disc);
    }

    #[test]
    fn when_only_the_thrower_touches_the_disc_then_it_stays_loose() {
        let config = GameConfig::default();
        let mut players = vec![player_at(1, 200.0, 200.0)];
        let mut discs = vec![Disc::create_new_disc([200.0, 200.0], &config).with_source(1)];

        let caught = resolve_catches(&mut players, &mut discs);

        assert!(caught.is_empty());
        assert_eq!(discs.len(), 1);
        assert!(!players[0].has_disc);
    }

    #[test]
    fn when_stall_drops_the_disc_then_former_holder_is_its_source() {
        let config = GameConfig::default();
        let mut holder = player_at(5, 50.0, 60.0);
        holder.has_disc = true;

        let disc = drop_disc(&mut holder, &config);

        assert!(!holder.has_disc);
        assert_eq!(disc.source, Some(5));
        assert_eq!(disc.position, Vector2::new(50.0, 60.0));
        assert!(!disc.is_in_flight());
    }
}
