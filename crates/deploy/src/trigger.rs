//! Constructor arguments of `ZkMinterModTriggerV1`.
//!
//! The trigger stores, for each call it performs after minting, the target, the 4-byte selector
//! and the ABI-encoded arguments without the selector.

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::Constructor;
use alloy_primitives::{Address, B256, Bytes, Selector};
use minter_common::{AbiError, encode_args, selector};

/// Constructor of the single-call trigger, used when no artifact ABI is at hand.
pub const SINGLE_CALL_CONSTRUCTOR: &str = "constructor(address admin, address token, address target, bytes4 functionSignature, bytes callData)";

/// Constructor of the multi-call trigger.
pub const BATCH_CALL_CONSTRUCTOR: &str = "constructor(address admin, address token, address[] targets, bytes4[] functionSignatures, bytes[] callDatas)";

#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error(transparent)]
    Abi(#[from] AbiError),
    #[error("the trigger needs at least one call")]
    NoCalls,
    #[error("the single-call constructor takes exactly one call, got {0}")]
    TooManyCalls(usize),
    #[error("unsupported trigger constructor `constructor({0})`")]
    LayoutMismatch(String),
    #[error("calldata is {0} byte(s) long, shorter than a selector")]
    CalldataTooShort(usize),
    #[error("could not parse constructor `{0}`")]
    Constructor(String),
    #[error("failed to encode constructor arguments")]
    Encode(#[source] alloy_dyn_abi::Error),
}

/// One call performed by the trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerCall {
    pub target: Address,
    pub selector: Selector,
    /// Encoded arguments, without the selector.
    pub call_data: Bytes,
}

impl TriggerCall {
    /// Encodes `args` against `signature` for a call on `target`.
    pub fn new<I, S>(target: Address, signature: &str, args: I) -> Result<Self, TriggerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { target, selector: selector(signature)?, call_data: encode_args(signature, args)? })
    }

    /// Splits already encoded calldata into selector and arguments.
    pub fn from_calldata(target: Address, calldata: &[u8]) -> Result<Self, TriggerError> {
        if calldata.len() < 4 {
            return Err(TriggerError::CalldataTooShort(calldata.len()));
        }
        let (selector, data) = calldata.split_at(4);
        Ok(Self {
            target,
            selector: Selector::from_slice(selector),
            call_data: Bytes::copy_from_slice(data),
        })
    }

    fn selector_value(&self) -> DynSolValue {
        let mut word = B256::ZERO;
        word[..4].copy_from_slice(self.selector.as_slice());
        DynSolValue::FixedBytes(word, 4)
    }
}

/// Shape of the trigger constructor found in an ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructorLayout {
    /// `(address,address,address,bytes4,bytes)`
    Single,
    /// `(address,address,address[],bytes4[],bytes[])`
    Batch,
}

impl ConstructorLayout {
    pub fn detect(constructor: &Constructor) -> Result<Self, TriggerError> {
        let types: Vec<_> = constructor.inputs.iter().map(|input| input.selector_type()).collect();
        let types: Vec<&str> = types.iter().map(|ty| &**ty).collect();
        match types.as_slice() {
            ["address", "address", "address", "bytes4", "bytes"] => Ok(Self::Single),
            ["address", "address", "address[]", "bytes4[]", "bytes[]"] => Ok(Self::Batch),
            _ => Err(TriggerError::LayoutMismatch(types.join(","))),
        }
    }
}

/// Parses one of the known trigger constructors.
pub fn parse_constructor(signature: &str) -> Result<Constructor, TriggerError> {
    Constructor::parse(signature).map_err(|_| TriggerError::Constructor(signature.to_string()))
}

/// Everything the trigger constructor receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerArgs {
    pub admin: Address,
    pub token: Address,
    pub calls: Vec<TriggerCall>,
}

impl TriggerArgs {
    pub fn new(admin: Address, token: Address, calls: Vec<TriggerCall>) -> Self {
        Self { admin, token, calls }
    }

    /// Orders the arguments positionally for `constructor`.
    pub fn constructor_values(
        &self,
        constructor: &Constructor,
    ) -> Result<Vec<DynSolValue>, TriggerError> {
        if self.calls.is_empty() {
            return Err(TriggerError::NoCalls);
        }

        let layout = ConstructorLayout::detect(constructor)?;
        debug!(target: "trigger", ?layout, calls = self.calls.len(), "building constructor args");

        let mut values = vec![DynSolValue::Address(self.admin), DynSolValue::Address(self.token)];
        match layout {
            ConstructorLayout::Single => {
                let [call] = self.calls.as_slice() else {
                    return Err(TriggerError::TooManyCalls(self.calls.len()));
                };
                values.extend([
                    DynSolValue::Address(call.target),
                    call.selector_value(),
                    DynSolValue::Bytes(call.call_data.to_vec()),
                ]);
            }
            ConstructorLayout::Batch => {
                values.extend([
                    DynSolValue::Array(
                        self.calls.iter().map(|call| DynSolValue::Address(call.target)).collect(),
                    ),
                    DynSolValue::Array(self.calls.iter().map(TriggerCall::selector_value).collect()),
                    DynSolValue::Array(
                        self.calls
                            .iter()
                            .map(|call| DynSolValue::Bytes(call.call_data.to_vec()))
                            .collect(),
                    ),
                ]);
            }
        }
        Ok(values)
    }

    /// ABI-encodes the constructor arguments, as appended to the bytecode on deployment.
    pub fn encode_deploy(&self, constructor: &Constructor) -> Result<Bytes, TriggerError> {
        let values = self.constructor_values(constructor)?;
        constructor.abi_encode_input(&values).map(Into::into).map_err(TriggerError::Encode)
    }
}
