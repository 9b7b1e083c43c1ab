use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Chips;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, пустое имя).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Ставку нужно запросить заново.
    #[error("Недопустимая ставка {wager}: доступно {available} фишек")]
    InvalidWager { wager: Chips, available: Chips },

    /// Ошибка движка (действие не в той фазе и т.п.).
    #[error("Ошибка движка: {0}")]
    EngineError(String),

    /// Внутренняя ошибка.
    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidWager { wager, available } => {
                ApiError::InvalidWager { wager, available }
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
