use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError, is_unique_violation};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            ORDER BY nome OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, nome, endereco, proprietario FROM centros_treinamento WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(center)
    }

    /// Exact-nome lookup, used to resolve the centro reference when an
    /// athlete is created.
    pub async fn find_by_name(&self, nome: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, nome, endereco, proprietario FROM centros_treinamento WHERE nome = $1",
        )
        .bind(nome)
        .fetch_optional(self.pool)
        .await?;

        Ok(center)
    }

    pub async fn create(&self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = TrainingCenter {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
            endereco: req.endereco.clone(),
            proprietario: req.proprietario.clone(),
        };

        sqlx::query(
            r#"
            INSERT INTO centros_treinamento (id, nome, endereco, proprietario)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(center.id)
        .bind(&center.nome)
        .bind(&center.endereco)
        .bind(&center.proprietario)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::ConstraintViolation(format!(
                    "Já existe um centro de treinamento cadastrado com o nome: {}",
                    req.nome
                ))
            } else {
                e.into()
            }
        })?;

        Ok(center)
    }
}
