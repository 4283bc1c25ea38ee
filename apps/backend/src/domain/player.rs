//! Player domain records.

use serde::{Deserialize, Serialize};
use time::Date;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::domain::validation::{Validate, ValidationErrors};

/// Position in the ranking (1 is best) and accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub position: i32,
    pub points: i32,
}

/// Personal details of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
}

/// A registered player as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub identifier: Uuid,
    pub info: PersonalInfo,
    pub rank: Rank,
}

/// Registration input; the identifier is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerToCreate {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub points: i32,
}

/// Update input for an existing player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerToUpdate {
    pub identifier: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub points: i32,
}

fn fold_name(name: &str) -> String {
    name.trim().nfkc().collect::<String>().to_lowercase()
}

/// Case-folded identity of a player's full name.
///
/// Two registrations with the same key and birth date are the same person.
/// Folding is NFKC then Unicode lowercase, so "Ćorić" and "ćorić" collide.
pub fn name_key(first_name: &str, last_name: &str) -> String {
    // Unit separator keeps ("Ann", "a Lee") apart from ("Anna", "Lee")
    format!("{}\u{1f}{}", fold_name(first_name), fold_name(last_name))
}

fn check_player_fields(
    errors: &mut ValidationErrors,
    first_name: &str,
    last_name: &str,
    birth_date: Date,
    points: i32,
    today: Date,
) {
    errors.require_not_blank("first_name", first_name, "First name is mandatory");
    errors.require_not_blank("last_name", last_name, "Last name is mandatory");
    errors.require_past_or_present(
        "birth_date",
        birth_date,
        today,
        "Birth date must be past or present",
    );
    errors.require_positive_or_zero("points", points, "Points must be more than zero");
}

impl Validate for PlayerToCreate {
    fn validate_at(&self, today: Date) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_player_fields(
            &mut errors,
            &self.first_name,
            &self.last_name,
            self.birth_date,
            self.points,
            today,
        );
        errors.into_result()
    }
}

impl Validate for PlayerToUpdate {
    fn validate_at(&self, today: Date) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_identifier(self.identifier);
        check_player_fields(
            &mut errors,
            &self.first_name,
            &self.last_name,
            self.birth_date,
            self.points,
            today,
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    const TODAY: Date = date!(2024 - 06 - 01);

    fn valid_create() -> PlayerToCreate {
        PlayerToCreate {
            first_name: "Carlos".into(),
            last_name: "Alcaraz".into(),
            birth_date: date!(2003 - 05 - 05),
            points: 4000,
        }
    }

    #[test]
    fn name_key_folds_non_ascii_case() {
        assert_eq!(name_key("Borna", "Ćorić"), name_key("borna", "ćorić"));
        assert_eq!(name_key("ÉMILE", "Ruusuvuori"), name_key("émile", "RUUSUVUORI"));
        assert_eq!(name_key(" Rafael ", "Nadal"), name_key("Rafael", "Nadal"));
    }

    #[test]
    fn name_key_keeps_first_and_last_apart() {
        assert_ne!(name_key("Ann", "a Lee"), name_key("Anna", " Lee"));
        assert_ne!(name_key("Borna", "Coric"), name_key("Borna", "Ćorić"));
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(valid_create().validate_at(TODAY).is_ok());
    }

    #[test]
    fn zero_points_and_birth_today_are_allowed() {
        let p = PlayerToCreate {
            birth_date: TODAY,
            points: 0,
            ..valid_create()
        };
        assert!(p.validate_at(TODAY).is_ok());
    }

    #[test]
    fn collects_every_failing_field() {
        let p = PlayerToCreate {
            first_name: "   ".into(),
            last_name: String::new(),
            birth_date: date!(2030 - 01 - 01),
            points: -1,
        };
        let errors = p.validate_at(TODAY).unwrap_err();
        assert_eq!(errors.errors().len(), 4);
        assert_eq!(
            errors.message_for("first_name"),
            Some("First name is mandatory")
        );
        assert_eq!(errors.message_for("last_name"), Some("Last name is mandatory"));
        assert_eq!(
            errors.message_for("birth_date"),
            Some("Birth date must be past or present")
        );
        assert_eq!(
            errors.message_for("points"),
            Some("Points must be more than zero")
        );
    }

    #[test]
    fn update_requires_identifier() {
        let p = PlayerToUpdate {
            identifier: Uuid::nil(),
            first_name: "Carlos".into(),
            last_name: "Alcaraz".into(),
            birth_date: date!(2003 - 05 - 05),
            points: 10,
        };
        let errors = p.validate_at(TODAY).unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.message_for("identifier"), Some("Identifier is mandatory"));
    }
}
