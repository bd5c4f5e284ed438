use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("failed to reach the server: {_0}")]
    Transport(String),
    #[error("server responded with status {_0}")]
    Status(u16),
    #[error("server reported an error: {_0}")]
    Server(String),
    #[error("failed to decode server response: {_0}")]
    Decode(String),
}
