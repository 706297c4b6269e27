use thiserror::Error;

/// Everything that can go wrong while decomposing a signature.
///
/// Errors own the offending text so they can outlive the input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The input was empty or contained only whitespace
    #[error("signature is empty")]
    EmptyInput,

    /// The input could not be split into return type, method name and argument list
    #[error("malformed signature `{signature}`: {reason}")]
    MalformedSignature {
        signature: String,
        reason: &'static str,
    },

    /// One argument did not split into exactly `<type> <name>`
    #[error("malformed argument #{position} `{argument}`: expected `<type> <name>`")]
    MalformedArgument { position: usize, argument: String },

    #[error("unknown access modifier `{0}`")]
    UnknownModifier(String),
}

impl SignatureError {
    pub(crate) fn malformed(signature: &str, reason: &'static str) -> Self {
        SignatureError::MalformedSignature {
            signature: signature.to_string(),
            reason,
        }
    }

    pub(crate) fn malformed_argument(position: usize, argument: &str) -> Self {
        SignatureError::MalformedArgument {
            position,
            argument: argument.to_string(),
        }
    }
}
