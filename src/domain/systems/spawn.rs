use crate::domain::tuning::FieldTuning;
use crate::domain::{ScoringEndzone, Team};

/// Line-up spot for the `slot`-th player of a team.
///
/// Teams line up on the goal line of the endzone they defend, spread evenly
/// across the field width.
pub fn spawn_point(team: Team, slot: usize, team_size: usize, field: &FieldTuning) -> [f32; 2] {
    let lanes = team_size.max(1) as f32;
    let width = field.field_max_x - field.field_min_x;
    let x = field.field_min_x + width * (slot as f32 + 0.5) / lanes;

    let y = match team.scoring_endzone {
        // Attacks the bottom, so defends the top.
        ScoringEndzone::Bottom => field.field_height_offset + field.endzone_height,
        ScoringEndzone::Top => {
            field.canvas_height - field.field_height_offset - field.endzone_height
        }
    };

    [x, y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_teams_line_up_then_they_face_each_other_inside_the_field() {
        let field = FieldTuning::default();

        let home = spawn_point(Team::HOME, 0, 2, &field);
        let away = spawn_point(Team::AWAY, 1, 2, &field);

        assert!(home[1] < away[1]);
        assert!(home[0] > field.field_min_x && home[0] < away[0]);
        assert!(away[0] < field.field_max_x);
    }
}
