use crate::domain::tournament::Tournament;
use crate::entities::tournaments;

impl From<tournaments::Model> for Tournament {
    fn from(model: tournaments::Model) -> Self {
        Self {
            identifier: model.identifier,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            prize_money: model.prize_money,
            capacity: model.capacity,
        }
    }
}
