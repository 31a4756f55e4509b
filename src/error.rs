//! Crate error type and its gRPC status mapping

use derive_more::{Display, Error, From};
use tonic::Status;

use crate::matchmaker::Rejection;

#[derive(Debug, Display, Error, From)]
pub enum MatchError {
    /// Malformed rule JSON, reported verbatim.
    #[display("{_0}")]
    #[from]
    Decode(serde_json::Error),

    #[display("{_0}")]
    #[from]
    Rejected(Rejection),

    #[display("missing required field: {_0}")]
    MissingField(#[error(not(source))] &'static str),

    #[display("{_0}")]
    NotImplemented(#[error(not(source))] &'static str),
}

impl From<MatchError> for Status {
    fn from(err: MatchError) -> Self {
        let message = err.to_string();
        match err {
            MatchError::Decode(_) => Status::unknown(message),
            MatchError::Rejected(_) | MatchError::MissingField(_) => {
                Status::invalid_argument(message)
            }
            MatchError::NotImplemented(_) => Status::unimplemented(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_codes() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode_message = decode.to_string();
        let status = Status::from(MatchError::from(decode));
        assert_eq!(status.code(), Code::Unknown);
        assert_eq!(status.message(), decode_message);

        let rejected = MatchError::from(Rejection::MissingStatMapping { player_id: "p9".into() });
        let status = Status::from(rejected);
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "player p9 missing required stat mapping");

        let status = Status::from(MatchError::MissingField("rules"));
        assert_eq!(status.code(), Code::InvalidArgument);

        let status = Status::from(MatchError::NotImplemented("MakeMatches not implemented"));
        assert_eq!(status.code(), Code::Unimplemented);
        assert_eq!(status.message(), "MakeMatches not implemented");
    }
}
