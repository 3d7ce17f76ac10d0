use sqlx::PgPool;
use storage::{
    dto::training_center::CreateTrainingCenterRequest,
    error::StorageError,
    models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn create_training_center(
    pool: &PgPool,
    req: &CreateTrainingCenterRequest,
) -> WebResult<TrainingCenter> {
    let center = TrainingCenterRepository::new(pool).create(req).await?;
    Ok(center)
}

pub async fn list_training_centers(
    pool: &PgPool,
    offset: i64,
    limit: i64,
) -> WebResult<Vec<TrainingCenter>> {
    let centers = TrainingCenterRepository::new(pool).list(offset, limit).await?;
    Ok(centers)
}

pub async fn get_training_center(pool: &PgPool, id: Uuid) -> WebResult<TrainingCenter> {
    TrainingCenterRepository::new(pool)
        .find_by_id(id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::NotFound(format!(
                "Centro de treinamento não encontrado para id: {id}"
            )),
            e => WebError::Storage(e),
        })
}
