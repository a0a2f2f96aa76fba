use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(
        "COURTLISTENER_API_TOKEN environment variable not set. \
         Get your token at https://www.courtlistener.com/profile/api/"
    )]
    MissingToken,

    #[error("API token is not a valid header value")]
    InvalidToken,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CourtListener returned {status} for {url}")]
    Api { status: u16, url: String },

    #[error("Failed to save PDF: {0}")]
    Io(#[from] std::io::Error),
}
