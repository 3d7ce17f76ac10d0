use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::category::CreateCategoryRequest;
use crate::error::{Result, StorageError, is_unique_violation};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, nome FROM categorias ORDER BY nome OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, nome FROM categorias WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    /// Exact-nome lookup, used to resolve the categoria reference when an
    /// athlete is created.
    pub async fn find_by_name(&self, nome: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, nome FROM categorias WHERE nome = $1")
                .bind(nome)
                .fetch_optional(self.pool)
                .await?;

        Ok(category)
    }

    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = Category {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
        };

        sqlx::query("INSERT INTO categorias (id, nome) VALUES ($1, $2)")
            .bind(category.id)
            .bind(&category.nome)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::ConstraintViolation(format!(
                        "Já existe uma categoria cadastrada com o nome: {}",
                        req.nome
                    ))
                } else {
                    e.into()
                }
            })?;

        Ok(category)
    }
}
