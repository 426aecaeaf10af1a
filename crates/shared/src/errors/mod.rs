mod http;
mod repository;
mod service;

pub use self::http::{ErrorResponse, HttpError};
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
