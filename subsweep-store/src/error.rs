#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Store returned unexpected status code {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("A requested record was not found")]
    NotFound,

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

pub type StoreResult<T> = Result<T, StoreError>;
