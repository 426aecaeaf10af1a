use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[sqlx(rename = "senha")]
    pub password: String,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "ativo")]
    pub active: bool,
}
