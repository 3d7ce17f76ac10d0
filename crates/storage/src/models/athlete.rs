use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::athlete::UpdateAthleteRequest;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub categoria_id: Uuid,
    pub centro_treinamento_id: Uuid,
}

/// Athlete row joined with the names of its categoria and centro de
/// treinamento, as every read path returns them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteWithRelations {
    pub id: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub categoria_nome: String,
    pub centro_treinamento_nome: String,
}

impl Athlete {
    /// Merge only the fields present in the request. `id`, `created_at`,
    /// `cpf` and the categoria/centro links are never touched here.
    pub fn apply_update(&mut self, req: &UpdateAthleteRequest) {
        if let Some(nome) = &req.nome {
            self.nome = nome.clone();
        }
        if let Some(idade) = req.idade {
            self.idade = idade;
        }
        if let Some(peso) = req.peso {
            self.peso = peso;
        }
        if let Some(altura) = req.altura {
            self.altura = altura;
        }
        if let Some(sexo) = &req.sexo {
            self.sexo = sexo.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_athlete() -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            created_at: chrono::NaiveDateTime::default(),
            nome: "Ana Silva".to_string(),
            cpf: "12345678901".to_string(),
            idade: 25,
            peso: 64.5,
            altura: 1.70,
            sexo: "F".to_string(),
            categoria_id: Uuid::new_v4(),
            centro_treinamento_id: Uuid::new_v4(),
        }
    }

    fn empty_update() -> UpdateAthleteRequest {
        UpdateAthleteRequest {
            nome: None,
            idade: None,
            peso: None,
            altura: None,
            sexo: None,
        }
    }

    #[test]
    fn test_apply_update_single_field() {
        let mut athlete = sample_athlete();
        let original = athlete.clone();

        athlete.apply_update(&UpdateAthleteRequest {
            idade: Some(30),
            ..empty_update()
        });

        assert_eq!(athlete.idade, 30);
        assert_eq!(athlete.id, original.id);
        assert_eq!(athlete.created_at, original.created_at);
        assert_eq!(athlete.nome, original.nome);
        assert_eq!(athlete.cpf, original.cpf);
        assert_eq!(athlete.peso, original.peso);
        assert_eq!(athlete.altura, original.altura);
        assert_eq!(athlete.sexo, original.sexo);
        assert_eq!(athlete.categoria_id, original.categoria_id);
        assert_eq!(athlete.centro_treinamento_id, original.centro_treinamento_id);
    }

    #[test]
    fn test_apply_update_multiple_fields() {
        let mut athlete = sample_athlete();

        athlete.apply_update(&UpdateAthleteRequest {
            nome: Some("Mariana".to_string()),
            peso: Some(70.0),
            ..empty_update()
        });

        assert_eq!(athlete.nome, "Mariana");
        assert_eq!(athlete.peso, 70.0);
        assert_eq!(athlete.idade, 25);
    }

    #[test]
    fn test_apply_update_empty_request_changes_nothing() {
        let mut athlete = sample_athlete();
        let original = athlete.clone();

        athlete.apply_update(&empty_update());

        assert_eq!(athlete.nome, original.nome);
        assert_eq!(athlete.idade, original.idade);
        assert_eq!(athlete.peso, original.peso);
        assert_eq!(athlete.altura, original.altura);
        assert_eq!(athlete.sexo, original.sexo);
    }
}
