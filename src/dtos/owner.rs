//! Owner DTOs - Data Transfer Objects per gli owner

use crate::entities::Owner;
use serde::{Deserialize, Serialize};
use super::{not_blank, trimmed};
use validator::Validate;

/// Struct per gestire io col client
/// (il paese non è esposto qui: si ottiene da GET /countries/owner/{owner_id})
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct OwnerDTO {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 100, message = "Gym must be between 1 and 100 characters"), custom(function = "not_blank"))]
    pub gym: String,
}

impl From<Owner> for OwnerDTO {
    fn from(value: Owner) -> Self {
        Self {
            id: Some(value.id),
            first_name: value.first_name,
            last_name: value.last_name,
            gym: value.gym,
        }
    }
}

/// DTO per creare un nuovo owner (senza id, con il paese di appartenenza)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateOwnerDTO {
    pub country_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
}

impl CreateOwnerDTO {
    pub fn new(country_id: i32, dto: OwnerDTO) -> Self {
        Self {
            country_id,
            first_name: trimmed(dto.first_name),
            last_name: trimmed(dto.last_name),
            gym: trimmed(dto.gym),
        }
    }
}

/// DTO per aggiornare un owner (il paese resta invariato)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateOwnerDTO {
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
}

impl From<OwnerDTO> for UpdateOwnerDTO {
    fn from(value: OwnerDTO) -> Self {
        Self {
            first_name: trimmed(value.first_name),
            last_name: trimmed(value.last_name),
            gym: trimmed(value.gym),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_dto_hides_country() {
        let owner = Owner {
            id: 3,
            first_name: "fn0".to_string(),
            last_name: "ln0".to_string(),
            gym: "g0".to_string(),
            country_id: 9,
        };

        let json = serde_json::to_value(OwnerDTO::from(owner)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["gym"], "g0");
        assert!(json.get("country_id").is_none());
    }

    #[test]
    fn test_create_owner_dto_takes_country_from_caller() {
        let dto = OwnerDTO {
            id: Some(100),
            first_name: "Brock".to_string(),
            last_name: "Harrison".to_string(),
            gym: "Pewter Gym".to_string(),
        };

        let create = CreateOwnerDTO::new(2, dto);
        assert_eq!(create.country_id, 2);
        assert_eq!(create.first_name, "Brock");
        assert_eq!(create.gym, "Pewter Gym");
    }

    #[test]
    fn test_owner_write_models_trim_fields() {
        let dto = OwnerDTO {
            id: None,
            first_name: " Misty\n".to_string(),
            last_name: "Waterflower ".to_string(),
            gym: "\tCerulean Gym".to_string(),
        };

        let create = CreateOwnerDTO::new(1, dto.clone());
        assert_eq!(create.first_name, "Misty");
        assert_eq!(create.last_name, "Waterflower");
        assert_eq!(create.gym, "Cerulean Gym");

        let update = UpdateOwnerDTO::from(dto);
        assert_eq!(update.gym, "Cerulean Gym");
    }

    #[test]
    fn test_owner_dto_rejects_blank_gym() {
        let dto = OwnerDTO {
            id: None,
            first_name: "Brock".to_string(),
            last_name: "Harrison".to_string(),
            gym: " \t ".to_string(),
        };

        assert!(dto.validate().is_err());
    }
}
