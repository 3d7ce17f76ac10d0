use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
    error::StorageError,
    models::AthleteWithRelations,
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Create a new athlete. The categoria and centro de treinamento references
/// are resolved by exact nome before anything is written; an unresolved
/// reference is the client's fault and maps to a 400.
pub async fn create_athlete(
    pool: &PgPool,
    req: &CreateAthleteRequest,
) -> WebResult<AthleteResponse> {
    let categoria = CategoryRepository::new(pool)
        .find_by_name(&req.categoria.nome)
        .await?
        .ok_or_else(|| {
            WebError::BadRequest(format!("Categoria não encontrada: {}", req.categoria.nome))
        })?;

    let centro_treinamento = TrainingCenterRepository::new(pool)
        .find_by_name(&req.centro_treinamento.nome)
        .await?
        .ok_or_else(|| {
            WebError::BadRequest(format!(
                "Centro de treinamento não encontrado: {}",
                req.centro_treinamento.nome
            ))
        })?;

    let athlete = AthleteRepository::new(pool)
        .create(req, categoria.id, centro_treinamento.id)
        .await?;

    Ok(AthleteResponse::from_row(
        athlete,
        categoria.nome,
        centro_treinamento.nome,
    ))
}

/// List one page of athletes, then apply the optional nome/cpf filters to the
/// fetched page. A nome filter wins over a cpf filter when both are given.
pub async fn list_athletes(
    pool: &PgPool,
    offset: i64,
    limit: i64,
    nome: Option<&str>,
    cpf: Option<&str>,
) -> WebResult<Vec<AthleteWithRelations>> {
    let athletes = AthleteRepository::new(pool).list(offset, limit).await?;

    Ok(filter_athletes(athletes, nome, cpf))
}

pub async fn get_athlete(pool: &PgPool, id: Uuid) -> WebResult<AthleteWithRelations> {
    AthleteRepository::new(pool)
        .find_by_id(id)
        .await
        .map_err(|e| athlete_not_found(e, id))
}

/// Merge the supplied fields into the stored record and persist the copy.
pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateAthleteRequest,
) -> WebResult<AthleteWithRelations> {
    let repo = AthleteRepository::new(pool);

    let mut athlete = repo
        .find_row_by_id(id)
        .await
        .map_err(|e| athlete_not_found(e, id))?;

    athlete.apply_update(req);
    repo.update(&athlete).await?;

    repo.find_by_id(id)
        .await
        .map_err(|e| athlete_not_found(e, id))
}

pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> WebResult<()> {
    AthleteRepository::new(pool)
        .delete(id)
        .await
        .map_err(|e| athlete_not_found(e, id))
}

fn athlete_not_found(err: StorageError, id: Uuid) -> WebError {
    match err {
        StorageError::NotFound => {
            WebError::NotFound(format!("Atleta não encontrada para id: {id}"))
        }
        e => WebError::Storage(e),
    }
}

fn filter_athletes(
    athletes: Vec<AthleteWithRelations>,
    nome: Option<&str>,
    cpf: Option<&str>,
) -> Vec<AthleteWithRelations> {
    match (nome, cpf) {
        (Some(nome), _) => {
            let needle = nome.to_lowercase();
            athletes
                .into_iter()
                .filter(|a| a.nome.to_lowercase().contains(&needle))
                .collect()
        }
        (None, Some(cpf)) => athletes.into_iter().filter(|a| a.cpf == cpf).collect(),
        (None, None) => athletes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(nome: &str, cpf: &str) -> AthleteWithRelations {
        AthleteWithRelations {
            id: Uuid::new_v4(),
            created_at: chrono::NaiveDateTime::default(),
            nome: nome.to_string(),
            cpf: cpf.to_string(),
            idade: 25,
            peso: 70.0,
            altura: 1.75,
            sexo: "F".to_string(),
            categoria_nome: "Scale".to_string(),
            centro_treinamento_nome: "CT King".to_string(),
        }
    }

    fn sample_page() -> Vec<AthleteWithRelations> {
        vec![
            athlete("Ana Silva", "11111111111"),
            athlete("MARIANA", "22222222222"),
            athlete("Carlos", "33333333333"),
        ]
    }

    #[test]
    fn test_filter_by_nome_is_case_insensitive_substring() {
        let result = filter_athletes(sample_page(), Some("ana"), None);

        let names: Vec<&str> = result.iter().map(|a| a.nome.as_str()).collect();
        assert_eq!(names, vec!["Ana Silva", "MARIANA"]);
    }

    #[test]
    fn test_filter_by_cpf_is_exact() {
        let result = filter_athletes(sample_page(), None, Some("22222222222"));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].nome, "MARIANA");

        let none = filter_athletes(sample_page(), None, Some("2222222222"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_nome_filter_wins_over_cpf() {
        let result = filter_athletes(sample_page(), Some("carlos"), Some("11111111111"));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].nome, "Carlos");
    }

    #[test]
    fn test_no_filters_returns_page_unchanged() {
        let result = filter_athletes(sample_page(), None, None);
        assert_eq!(result.len(), 3);
    }
}
