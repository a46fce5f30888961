//! Errors raised while encoding or decoding calldata.

/// Error returned by the calldata encoder and the batch preparer.
#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    #[error("could not parse function signature `{signature}`: {message}")]
    Signature { signature: String, message: String },
    #[error("`{signature}` expects {expected} argument(s), got {got}")]
    ArgCount { signature: String, expected: usize, got: usize },
    #[error("could not coerce argument #{index} (`{arg}`) to `{ty}`")]
    Coerce {
        index: usize,
        arg: String,
        ty: String,
        #[source]
        source: alloy_dyn_abi::Error,
    },
    #[error("failed to ABI-encode `{signature}`")]
    Encode {
        signature: String,
        #[source]
        source: alloy_dyn_abi::Error,
    },
    #[error("failed to ABI-decode calldata for `{signature}`")]
    Decode {
        signature: String,
        #[source]
        source: alloy_dyn_abi::Error,
    },
    #[error("calldata selector {found} does not match `{signature}` ({expected})")]
    SelectorMismatch { signature: String, expected: String, found: String },
    #[error("calldata is {0} byte(s) long, shorter than a selector")]
    CalldataTooShort(usize),
    #[error("got {signatures} signature(s) but {args} argument list(s)")]
    LengthMismatch { signatures: usize, args: usize },
    #[error("call #{index} failed")]
    Batch {
        index: usize,
        #[source]
        source: Box<Self>,
    },
}
