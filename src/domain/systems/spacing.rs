use crate::domain::Entity;
use crate::domain::Player;
use crate::domain::systems::possession::holder_index;

/// Keeps every non-holder outside the holder's disc-space radius.
///
/// Must run after position integration. Pushed players are clamped back
/// into the world and their field membership is re-evaluated.
pub fn enforce_disc_space(players: &mut [Player]) {
    let Some(h) = holder_index(players) else {
        return;
    };
    let holder = players[h].clone();

    for (i, p) in players.iter_mut().enumerate() {
        if i == h {
            continue;
        }
        p.bound_player_disc_space(Some(&holder));
        p.clamp_to_world_bounds();
        p.set_in_field();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameConfig, Team, Vector2};

    #[test]
    fn when_marker_crowds_the_holder_then_only_the_marker_moves() {
        let config = GameConfig::default();
        let radius = config.player.disc_space_radius;

        let mut holder = Player::create(1, "holder", "s1", Team::HOME, &config);
        holder.set_start_position([300.0, 500.0]);
        holder.has_disc = true;
        let mut marker = Player::create(2, "marker", "s2", Team::AWAY, &config);
        marker.set_start_position([310.0, 500.0]);
        let mut far = Player::create(3, "far", "s3", Team::AWAY, &config);
        far.set_start_position([100.0, 100.0]);

        let mut players = vec![marker, holder, far];
        enforce_disc_space(&mut players);

        assert_eq!(players[1].position, Vector2::new(300.0, 500.0));
        assert!((players[0].position.x - (300.0 + radius)).abs() < 1e-3);
        assert!((players[0].position.y - 500.0).abs() < 1e-3);
        assert_eq!(players[2].position, Vector2::new(100.0, 100.0));
    }

    #[test]
    fn when_push_would_leave_the_world_then_marker_is_clamped() {
        let config = GameConfig::default();

        let mut holder = Player::create(1, "holder", "s1", Team::HOME, &config);
        holder.set_start_position([5.0, 500.0]);
        holder.has_disc = true;
        let mut marker = Player::create(2, "marker", "s2", Team::AWAY, &config);
        marker.set_start_position([1.0, 500.0]);

        let mut players = vec![holder, marker];
        enforce_disc_space(&mut players);

        assert_eq!(players[1].position.x, 0.0);
        assert!((players[1].position.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn when_marker_is_pushed_over_the_field_line_then_it_is_no_longer_in_field() {
        let config = GameConfig::default();

        let mut holder = Player::create(1, "holder", "s1", Team::HOME, &config);
        holder.set_start_position([300.0, 25.0]);
        holder.has_disc = true;
        let mut marker = Player::create(2, "marker", "s2", Team::AWAY, &config);
        marker.set_start_position([300.0, 22.0]);
        marker.set_in_field();
        assert!(marker.in_field());

        let mut players = vec![holder, marker];
        enforce_disc_space(&mut players);

        assert!((players[1].position.x - 300.0).abs() < 1e-3);
        assert_eq!(players[1].position.y, 0.0);
        assert!(!players[1].in_field());
    }
}
