use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingCenter {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}
