/// Errors raised by the remote catalog gateway.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("gateway.decode")]
    Decode,
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn unexpected_status(status: u16) -> Self {
        GatewayError::UnexpectedStatus(status)
    }
    pub fn decode() -> Self {
        GatewayError::Decode
    }
}
