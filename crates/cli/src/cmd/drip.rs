use alloy_primitives::{
    Address, U256, address,
    utils::{ParseUnits, parse_units},
};
use clap::Parser;
use eyre::Result;
use minter_common::{encode_call, selector, shell};
use serde_json::json;

/// ERC-20 transfer, the call that hands minted tokens over to a Drips list.
pub const TRANSFER_SIG: &str = "transfer(address,uint256)";

/// Placeholder list address, to be replaced with the one shown in the Drips UI.
pub const DEFAULT_DRIP_LIST: Address = address!("0x1234567890123456789012345678901234567890");

/// CLI arguments for `minter drip`.
#[derive(Clone, Debug, Parser)]
pub struct DripArgs {
    /// The Drip List address, as shown in the Drips UI.
    #[arg(long, value_name = "ADDRESS", default_value_t = DEFAULT_DRIP_LIST)]
    pub drip_list: Address,

    /// Amount of tokens sent to the list on every trigger, in whole tokens.
    #[arg(long, default_value = "1.0")]
    pub amount: String,

    /// Decimals of the token.
    #[arg(long, default_value_t = 18)]
    pub decimals: u8,

    /// Token contract the trigger calls `transfer` on.
    #[arg(long, value_name = "ADDRESS")]
    pub token: Option<Address>,
}

impl DripArgs {
    /// Returns the raw token amount.
    pub fn raw_amount(&self) -> Result<U256> {
        match parse_units(&self.amount, self.decimals)? {
            ParseUnits::U256(amount) => Ok(amount),
            ParseUnits::I256(_) => eyre::bail!("amount must not be negative: {}", self.amount),
        }
    }

    pub fn run(self) -> Result<()> {
        let amount = self.raw_amount()?;
        let calldata = encode_call(TRANSFER_SIG, [self.drip_list.to_string(), amount.to_string()])?;
        let selector = selector(TRANSFER_SIG)?;

        if shell::is_json() {
            let output = json!({
                "dripList": self.drip_list,
                "amount": amount.to_string(),
                "functionSignature": TRANSFER_SIG,
                "selector": selector,
                "callData": calldata,
                "target": self.token,
            });
            sh_println!("{}", serde_json::to_string_pretty(&output)?)?;
            return Ok(());
        }

        let target = match self.token {
            Some(token) => token.to_string(),
            None => "[YOUR_TOKEN_CONTRACT_ADDRESS]".to_string(),
        };

        sh_println!("=== DRIPS INTEGRATION CALLDATA ===")?;
        sh_println!()?;
        sh_println!("Drip List Address: {}", self.drip_list)?;
        sh_println!("Amount: {} tokens", self.amount)?;
        sh_println!()?;
        sh_println!("Function Signature: {TRANSFER_SIG}")?;
        sh_println!("Call Data: {calldata}")?;
        sh_println!()?;
        sh_println!("=== DEPLOYMENT CONFIG ===")?;
        sh_println!()?;
        sh_println!("For your ZkMinterModTriggerV1 contract:")?;
        sh_println!("targets[0]: {target}")?;
        sh_println!("functionSignatures[0]: {selector}")?;
        sh_println!("callDatas[0]: {calldata}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amount_with_decimals() {
        let args = DripArgs::parse_from(["drip"]);
        assert_eq!(args.drip_list, DEFAULT_DRIP_LIST);
        assert_eq!(args.raw_amount().unwrap(), U256::from(1_000_000_000_000_000_000u64));

        let args = DripArgs::parse_from(["drip", "--amount", "2.5", "--decimals", "6"]);
        assert_eq!(args.raw_amount().unwrap(), U256::from(2_500_000u64));
    }

    #[test]
    fn rejects_negative_or_malformed_amounts() {
        let args = DripArgs::parse_from(["drip", "--amount=-1"]);
        assert!(args.raw_amount().is_err());

        let args = DripArgs::parse_from(["drip", "--amount", "one"]);
        assert!(args.raw_amount().is_err());
    }
}
