use crate::domain::player::{PersonalInfo, Player, Rank};
use crate::entities::players;

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            identifier: model.identifier,
            info: PersonalInfo {
                first_name: model.first_name,
                last_name: model.last_name,
                birth_date: model.birth_date,
            },
            rank: Rank {
                position: model.rank,
                points: model.points,
            },
        }
    }
}
