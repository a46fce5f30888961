//! Encodes several calls at once, keeping the input order.

use crate::{abi::encode_call, errors::AbiError};
use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

/// A function signature together with the arguments to encode against it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSpec {
    /// e.g. `transfer(address,uint256)`
    pub signature: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Contract the call is made on, when it differs from the default target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Address>,
}

impl CallSpec {
    pub fn new(signature: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            signature: signature.into(),
            args: args.into_iter().map(Into::into).collect(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: Address) -> Self {
        self.target = Some(target);
        self
    }

    /// Encodes this call into full calldata.
    pub fn encode(&self) -> Result<Bytes, AbiError> {
        encode_call(&self.signature, &self.args)
    }
}

/// Encodes each `(signature, args)` pair, returning calldata index-aligned with the inputs.
///
/// Both lists must have the same length; a mismatch is rejected before anything is encoded.
pub fn prepare_calls<S, A, T>(signatures: &[S], args_list: &[A]) -> Result<Vec<Bytes>, AbiError>
where
    S: AsRef<str>,
    A: AsRef<[T]>,
    T: AsRef<str>,
{
    if signatures.len() != args_list.len() {
        return Err(AbiError::LengthMismatch {
            signatures: signatures.len(),
            args: args_list.len(),
        });
    }

    std::iter::zip(signatures, args_list)
        .enumerate()
        .map(|(index, (sig, args))| {
            encode_call(sig.as_ref(), args.as_ref())
                .map_err(|err| AbiError::Batch { index, source: Box::new(err) })
        })
        .collect()
}

/// Same as [`prepare_calls`] for already paired call specs.
pub fn prepare_specs(specs: &[CallSpec]) -> Result<Vec<Bytes>, AbiError> {
    debug!(target: "batch", calls = specs.len(), "preparing calldata");
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            spec.encode().map_err(|err| AbiError::Batch { index, source: Box::new(err) })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    const MINT: &str = "mint(address,uint256)";
    const TRANSFER: &str = "transfer(address,uint256)";

    #[test]
    fn keeps_input_order() {
        let sigs = [MINT, TRANSFER];
        let args = [
            vec!["0xA00F1d7c90BaA48650a79859C0950016469F01B1", "10000000000000000000"],
            vec!["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E", "1000000000000000000"],
        ];

        let calldatas = prepare_calls(&sigs, &args).unwrap();
        assert_eq!(calldatas.len(), 2);
        assert_eq!(calldatas[0], encode_call(MINT, &args[0]).unwrap());
        assert_eq!(calldatas[1], encode_call(TRANSFER, &args[1]).unwrap());
        assert_eq!(&calldatas[0][..4], hex!("40c10f19"));
        assert_eq!(&calldatas[1][..4], hex!("a9059cbb"));
    }

    #[test]
    fn rejects_length_mismatch() {
        let args: [Vec<&str>; 1] = [vec!["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E", "1"]];
        let err = prepare_calls(&[MINT, TRANSFER], &args).unwrap_err();
        assert!(matches!(err, AbiError::LengthMismatch { signatures: 2, args: 1 }), "{err:?}");
    }

    #[test]
    fn reports_failing_index() {
        let specs = [
            CallSpec::new(TRANSFER, ["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E", "1"]),
            CallSpec::new(TRANSFER, ["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E"]),
        ];
        let err = prepare_specs(&specs).unwrap_err();
        match err {
            AbiError::Batch { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, AbiError::ArgCount { expected: 2, got: 1, .. }));
            }
            err => panic!("unexpected error: {err:?}"),
        }
    }

    #[test]
    fn deserializes_from_toml() {
        let spec: CallSpec = toml::from_str(
            r#"
            signature = "transfer(address,uint256)"
            args = ["0x5144EDF6a2E7677433BBbD04618702c1c9DF3C25", "1000000000000000000"]
            "#,
        )
        .unwrap();
        assert_eq!(spec.args.len(), 2);
        assert_eq!(spec.target, None);
        assert_eq!(prepare_specs(&[spec]).unwrap().len(), 1);
    }
}
