use sqlx::PgPool;
use storage::{
    dto::category::CreateCategoryRequest,
    error::StorageError,
    models::Category,
    repository::category::CategoryRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn create_category(pool: &PgPool, req: &CreateCategoryRequest) -> WebResult<Category> {
    let category = CategoryRepository::new(pool).create(req).await?;
    Ok(category)
}

pub async fn list_categories(pool: &PgPool, offset: i64, limit: i64) -> WebResult<Vec<Category>> {
    let categories = CategoryRepository::new(pool).list(offset, limit).await?;
    Ok(categories)
}

pub async fn get_category(pool: &PgPool, id: Uuid) -> WebResult<Category> {
    CategoryRepository::new(pool)
        .find_by_id(id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                WebError::NotFound(format!("Categoria não encontrada para id: {id}"))
            }
            e => WebError::Storage(e),
        })
}
