use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

/// Reference to a centro de treinamento by nome, as embedded in athlete
/// payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingCenterRef {
    #[validate(length(min = 1, max = 20, message = "Nome must be between 1 and 20 characters"))]
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(min = 1, max = 20, message = "Nome must be between 1 and 20 characters"))]
    pub nome: String,

    #[validate(length(min = 1, max = 60, message = "Endereco must be between 1 and 60 characters"))]
    pub endereco: String,

    #[validate(length(min = 1, max = 30, message = "Proprietario must be between 1 and 30 characters"))]
    pub proprietario: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.id,
            nome: center.nome,
            endereco: center.endereco,
            proprietario: center.proprietario,
        }
    }
}
