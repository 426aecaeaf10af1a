use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: i32,
    #[sqlx(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
    pub cpf: Option<String>,
    #[sqlx(rename = "endereco")]
    pub address: Option<String>,
    #[sqlx(rename = "cidade")]
    pub city: Option<String>,
    #[sqlx(rename = "estado")]
    pub state: Option<String>,
    pub cep: Option<String>,
    #[sqlx(rename = "data_nascimento")]
    pub birth_date: Option<NaiveDateTime>,
    #[sqlx(rename = "observacoes")]
    pub notes: Option<String>,
    #[sqlx(rename = "ativo")]
    pub active: bool,
    #[sqlx(rename = "data_cadastro")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "data_atualizacao")]
    pub updated_at: NaiveDateTime,
}
