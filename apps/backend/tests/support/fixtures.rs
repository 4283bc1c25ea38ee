//! Stored-entity fixtures mirroring a small real ranking.

use tennis::domain::name_key;
use tennis::entities::{players, tournaments};
use time::macros::date;
use uuid::{uuid, Uuid};

pub const NADAL_ID: Uuid = uuid!("b466c6f7-52c6-4f25-b00d-c562be41311e");
pub const DJOKOVIC_ID: Uuid = uuid!("d27aef45-51cd-401b-a04a-b78a1327b793");
pub const FEDERER_ID: Uuid = uuid!("79d52b6a-7b4f-4111-8aaa-d6a48717f5a3");
pub const MURRAY_ID: Uuid = uuid!("d461b0db-e4d2-4bdf-9dd3-fd23f9914838");

pub const UNKNOWN_ID: Uuid = uuid!("aaaaaaaa-1111-2222-3333-bbbbbbbbbbbb");

pub fn rafael_nadal() -> players::Model {
    players::Model {
        id: 1,
        identifier: NADAL_ID,
        name_key: name_key("Rafael", "Nadal"),
        first_name: "Rafael".into(),
        last_name: "Nadal".into(),
        birth_date: date!(1986 - 06 - 03),
        points: 5000,
        rank: 1,
    }
}

pub fn novak_djokovic() -> players::Model {
    players::Model {
        id: 2,
        identifier: DJOKOVIC_ID,
        name_key: name_key("Novak", "Djokovic"),
        first_name: "Novak".into(),
        last_name: "Djokovic".into(),
        birth_date: date!(1987 - 05 - 22),
        points: 4000,
        rank: 2,
    }
}

pub fn roger_federer() -> players::Model {
    players::Model {
        id: 3,
        identifier: FEDERER_ID,
        name_key: name_key("Roger", "Federer"),
        first_name: "Roger".into(),
        last_name: "Federer".into(),
        birth_date: date!(1981 - 08 - 08),
        points: 3000,
        rank: 3,
    }
}

pub fn andy_murray() -> players::Model {
    players::Model {
        id: 4,
        identifier: MURRAY_ID,
        name_key: name_key("Andy", "Murray"),
        first_name: "Andy".into(),
        last_name: "Murray".into(),
        birth_date: date!(1987 - 05 - 15),
        points: 2000,
        rank: 4,
    }
}

pub fn all_players() -> Vec<players::Model> {
    vec![
        rafael_nadal(),
        novak_djokovic(),
        roger_federer(),
        andy_murray(),
    ]
}

pub fn wimbledon() -> tournaments::Model {
    tournaments::Model {
        id: 1,
        identifier: uuid!("0b7c1a3e-2f7d-4c1e-9d55-6a1d2b3c4d5e"),
        name: "Wimbledon".into(),
        start_date: date!(2025 - 06 - 30),
        end_date: date!(2025 - 07 - 13),
        prize_money: Some(3_000_000),
        capacity: 128,
    }
}

pub fn roland_garros() -> tournaments::Model {
    tournaments::Model {
        id: 2,
        identifier: uuid!("5f2e8c44-8a1b-4c2d-b3e4-f5a6b7c8d9e0"),
        name: "Roland Garros".into(),
        start_date: date!(2025 - 05 - 25),
        end_date: date!(2025 - 06 - 08),
        prize_money: Some(2_500_000),
        capacity: 128,
    }
}
