use crate::domain::errors::DomainError;

/// Wrap a driver error with the operation that produced it.
///
/// `RowNotFound` is translated to the domain's not-found condition; every
/// other failure stays opaque to callers and only matters for logs.
pub fn map_sqlx(operation: impl Into<String>, err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::ArticleNotFound,
        sqlx::Error::Database(db_err) => {
            let operation = operation.into();
            let code = db_err.code().map(std::borrow::Cow::into_owned);
            let operation = match code {
                Some(code) => format!("{operation} (sqlstate {code})"),
                None => operation,
            };
            DomainError::persistence(operation, sqlx::Error::Database(db_err))
        }
        other => DomainError::persistence(operation, other),
    }
}
