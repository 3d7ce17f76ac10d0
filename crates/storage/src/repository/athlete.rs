use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::CreateAthleteRequest;
use crate::error::{Result, StorageError, is_unique_violation};
use crate::models::{Athlete, AthleteWithRelations};

const SELECT_WITH_RELATIONS: &str = r#"
    SELECT a.id, a.created_at, a.nome, a.cpf, a.idade, a.peso, a.altura, a.sexo,
           c.nome AS categoria_nome, ct.nome AS centro_treinamento_nome
    FROM atletas a
    JOIN categorias c ON a.categoria_id = c.id
    JOIN centros_treinamento ct ON a.centro_treinamento_id = ct.id
"#;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of athletes with their categoria and centro names.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<AthleteWithRelations>> {
        let athletes = sqlx::query_as::<_, AthleteWithRelations>(&format!(
            "{SELECT_WITH_RELATIONS} ORDER BY a.nome OFFSET $1 LIMIT $2"
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find one athlete with its categoria and centro names.
    pub async fn find_by_id(&self, id: Uuid) -> Result<AthleteWithRelations> {
        let athlete = sqlx::query_as::<_, AthleteWithRelations>(&format!(
            "{SELECT_WITH_RELATIONS} WHERE a.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Find the bare athlete row, as the update path merges into it.
    pub async fn find_row_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, created_at, nome, cpf, idade, peso, altura, sexo,
                   categoria_id, centro_treinamento_id
            FROM atletas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Insert a new athlete inside a transaction. The id and created_at are
    /// assigned here; a unique violation on cpf rolls back and surfaces as
    /// `ConstraintViolation`, anything else as a database error.
    pub async fn create(
        &self,
        req: &CreateAthleteRequest,
        categoria_id: Uuid,
        centro_treinamento_id: Uuid,
    ) -> Result<Athlete> {
        let athlete = Athlete {
            id: Uuid::new_v4(),
            created_at: Utc::now().naive_utc(),
            nome: req.nome.clone(),
            cpf: req.cpf.clone(),
            idade: req.idade,
            peso: req.peso,
            altura: req.altura,
            sexo: req.sexo.clone(),
            categoria_id,
            centro_treinamento_id,
        };

        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO atletas (id, created_at, nome, cpf, idade, peso, altura, sexo,
                                 categoria_id, centro_treinamento_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(athlete.id)
        .bind(athlete.created_at)
        .bind(&athlete.nome)
        .bind(&athlete.cpf)
        .bind(athlete.idade)
        .bind(athlete.peso)
        .bind(athlete.altura)
        .bind(&athlete.sexo)
        .bind(athlete.categoria_id)
        .bind(athlete.centro_treinamento_id)
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {
                tx.commit().await?;
                Ok(athlete)
            }
            Err(e) => {
                tx.rollback().await?;
                if is_unique_violation(&e) {
                    Err(StorageError::ConstraintViolation(format!(
                        "Já existe um atleta cadastrado com o cpf: {}",
                        req.cpf
                    )))
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Persist a merged athlete row. Only the mutable columns are written.
    pub async fn update(&self, athlete: &Athlete) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE atletas
            SET nome = $2, idade = $3, peso = $4, altura = $5, sexo = $6
            WHERE id = $1
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.nome)
        .bind(athlete.idade)
        .bind(athlete.peso)
        .bind(athlete.altura)
        .bind(&athlete.sexo)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Delete an athlete by id.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
