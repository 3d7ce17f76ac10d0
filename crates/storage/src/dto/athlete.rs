use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::category::CategoryRef;
use crate::dto::training_center::TrainingCenterRef;
use crate::models::{Athlete, AthleteWithRelations};

/// Request payload for creating a new athlete. Categoria and centro de
/// treinamento are referenced by nome and resolved before the insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 50, message = "Nome must be between 1 and 50 characters"))]
    pub nome: String,

    #[validate(length(min = 1, max = 11, message = "CPF must be at most 11 characters"))]
    pub cpf: String,

    pub idade: i32,

    #[validate(range(exclusive_min = 0.0, message = "Peso must be positive"))]
    pub peso: f64,

    #[validate(range(exclusive_min = 0.0, message = "Altura must be positive"))]
    pub altura: f64,

    #[validate(length(min = 1, max = 1, message = "Sexo must be a single character"))]
    pub sexo: String,

    #[validate(nested)]
    pub categoria: CategoryRef,

    #[validate(nested)]
    pub centro_treinamento: TrainingCenterRef,
}

/// Request payload for a partial update. Only the fields present are merged;
/// cpf and the categoria/centro links cannot be changed after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub nome: Option<String>,

    pub idade: Option<i32>,

    #[validate(range(exclusive_min = 0.0))]
    pub peso: Option<f64>,

    #[validate(range(exclusive_min = 0.0))]
    pub altura: Option<f64>,

    #[validate(length(min = 1, max = 1))]
    pub sexo: Option<String>,
}

/// Full athlete record as returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub categoria: CategoryRef,
    pub centro_treinamento: TrainingCenterRef,
}

/// Projection for the `/nomes/` listing: only the athlete's name and the
/// names of its categoria and centro de treinamento.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteNamesResponse {
    pub nome: String,
    pub categoria: CategoryRef,
    pub centro_treinamento: TrainingCenterRef,
}

impl AthleteResponse {
    pub fn from_row(
        athlete: Athlete,
        categoria_nome: String,
        centro_treinamento_nome: String,
    ) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            nome: athlete.nome,
            cpf: athlete.cpf,
            idade: athlete.idade,
            peso: athlete.peso,
            altura: athlete.altura,
            sexo: athlete.sexo,
            categoria: CategoryRef {
                nome: categoria_nome,
            },
            centro_treinamento: TrainingCenterRef {
                nome: centro_treinamento_nome,
            },
        }
    }
}

impl From<AthleteWithRelations> for AthleteResponse {
    fn from(athlete: AthleteWithRelations) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            nome: athlete.nome,
            cpf: athlete.cpf,
            idade: athlete.idade,
            peso: athlete.peso,
            altura: athlete.altura,
            sexo: athlete.sexo,
            categoria: CategoryRef {
                nome: athlete.categoria_nome,
            },
            centro_treinamento: TrainingCenterRef {
                nome: athlete.centro_treinamento_nome,
            },
        }
    }
}

impl From<AthleteWithRelations> for AthleteNamesResponse {
    fn from(athlete: AthleteWithRelations) -> Self {
        Self {
            nome: athlete.nome,
            categoria: CategoryRef {
                nome: athlete.categoria_nome,
            },
            centro_treinamento: TrainingCenterRef {
                nome: athlete.centro_treinamento_nome,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            nome: "Ana Silva".to_string(),
            cpf: "12345678901".to_string(),
            idade: 25,
            peso: 64.5,
            altura: 1.70,
            sexo: "F".to_string(),
            categoria: CategoryRef {
                nome: "Scale".to_string(),
            },
            centro_treinamento: TrainingCenterRef {
                nome: "CT King".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_nome_too_long_rejected() {
        let mut req = valid_request();
        req.nome = "a".repeat(51);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_cpf_too_long_rejected() {
        let mut req = valid_request();
        req.cpf = "123456789012".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_peso_must_be_positive() {
        let mut req = valid_request();
        req.peso = 0.0;
        assert!(req.validate().is_err());

        req.peso = -1.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_sexo_must_be_single_character() {
        let mut req = valid_request();
        req.sexo = "MF".to_string();
        assert!(req.validate().is_err());

        req.sexo = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nested_categoria_nome_validated() {
        let mut req = valid_request();
        req.categoria.nome = "a".repeat(11);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_update_is_valid() {
        let req = UpdateAthleteRequest {
            nome: None,
            idade: None,
            peso: None,
            altura: None,
            sexo: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_non_positive_altura() {
        let req = UpdateAthleteRequest {
            nome: None,
            idade: None,
            peso: None,
            altura: Some(0.0),
            sexo: None,
        };
        assert!(req.validate().is_err());
    }
}
