//! ABI calldata encoding and decoding from human-readable function signatures.
//!
//! Everything in this module is pure: no network, wallet or filesystem access.

use crate::errors::AbiError;
use alloy_dyn_abi::{DynSolType, DynSolValue, JsonAbiExt};
use alloy_json_abi::{Function, Param};
use alloy_primitives::{Bytes, Selector, hex};

/// Parses a function signature such as `transfer(address,uint256)`.
///
/// Parameter names are allowed, e.g. `addMerkleTree(bytes32 merkleRoot, bytes32 ipfsHash)`.
pub fn get_func(signature: &str) -> Result<Function, AbiError> {
    let sig = signature.trim();
    let sig = sig.strip_prefix("function ").unwrap_or(sig);
    Function::parse(sig).map_err(|err| AbiError::Signature {
        signature: signature.to_string(),
        message: err.to_string(),
    })
}

/// Returns the 4-byte selector of the given signature.
pub fn selector(signature: &str) -> Result<Selector, AbiError> {
    Ok(get_func(signature)?.selector())
}

/// Coerces a single string argument into a value of the given Solidity type.
pub fn coerce_value(ty: &str, arg: &str) -> Result<DynSolValue, alloy_dyn_abi::Error> {
    let ty = DynSolType::parse(ty)?;
    ty.coerce_str(arg)
}

/// Coerces `args` into values matching the parameters of `func`.
///
/// The argument count is checked before any coercion happens.
pub fn coerce_args<I, S>(func: &Function, args: I) -> Result<Vec<DynSolValue>, AbiError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() != func.inputs.len() {
        return Err(AbiError::ArgCount {
            signature: func.signature(),
            expected: func.inputs.len(),
            got: args.len(),
        });
    }

    std::iter::zip(&func.inputs, &args)
        .enumerate()
        .map(|(index, (input, arg))| coerce_param(index, input, arg.as_ref()))
        .collect()
}

fn coerce_param(index: usize, input: &Param, arg: &str) -> Result<DynSolValue, AbiError> {
    let ty = input.selector_type();
    coerce_value(&ty, arg).map_err(|source| AbiError::Coerce {
        index,
        arg: arg.to_string(),
        ty: ty.into_owned(),
        source,
    })
}

/// Encodes `args` as a call to `func`: selector followed by the encoded arguments.
pub fn encode_function_args<I, S>(func: &Function, args: I) -> Result<Vec<u8>, AbiError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values = coerce_args(func, args)?;
    func.abi_encode_input(&values)
        .map_err(|source| AbiError::Encode { signature: func.signature(), source })
}

/// Encodes a call to `signature` with `args`, returning the full calldata.
pub fn encode_call<I, S>(signature: &str, args: I) -> Result<Bytes, AbiError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let func = get_func(signature)?;
    let calldata = encode_function_args(&func, args)?;
    trace!(target: "abi", sig = %func.signature(), calldata = %hex::encode_prefixed(&calldata), "encoded call");
    Ok(calldata.into())
}

/// Encodes `args` against the parameters of `signature`, without the selector.
pub fn encode_args<I, S>(signature: &str, args: I) -> Result<Bytes, AbiError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let func = get_func(signature)?;
    let values = coerce_args(&func, args)?;
    Ok(DynSolValue::Tuple(values).abi_encode_params().into())
}

/// Decodes full calldata produced for `signature` back into its argument values.
pub fn decode_calldata(signature: &str, calldata: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
    let func = get_func(signature)?;
    if calldata.len() < 4 {
        return Err(AbiError::CalldataTooShort(calldata.len()));
    }

    let (found, data) = calldata.split_at(4);
    let expected = func.selector();
    if found != expected.as_slice() {
        return Err(AbiError::SelectorMismatch {
            signature: func.signature(),
            expected: expected.to_string(),
            found: hex::encode_prefixed(found),
        });
    }

    func.abi_decode_input(data)
        .map_err(|source| AbiError::Decode { signature: func.signature(), source })
}
