//! Integration tests for the `minter` binary.

use snapbox::cmd::Command;
use std::path::Path;

const TRANSFER_CALLDATA: &str = "0xa9059cbb0000000000000000000000007a860e9c0986b5f7b1ab6ae7f0017d793dfcea2e0000000000000000000000000000000000000000000000000de0b6b3a7640000";

/// `minter` running in `dir`, with no deployer key and no colors.
fn minter(dir: &Path) -> Command {
    Command::new(env!("CARGO_BIN_EXE_minter"))
        .current_dir(dir)
        .env_remove("DEPLOYER_PRIVATE_KEY")
        .env_remove("MINTER_DEPLOYER_PRIVATE_KEY")
        .env_remove("ETH_RPC_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
}

#[test]
fn sig() {
    let dir = tempfile::tempdir().unwrap();
    minter(dir.path())
        .args(["sig", "transfer(address,uint256)"])
        .assert()
        .success()
        .stdout_eq(r#"0xa9059cbb
"#);
}

#[test]
fn default_calldata_batch() {
    let dir = tempfile::tempdir().unwrap();
    minter(dir.path()).arg("calldata").assert().success().stdout_eq(r#"callDatas:
1: 0x40c10f19000000000000000000000000a00f1d7c90baa48650a79859c0950016469f01b10000000000000000000000000000000000000000000000008ac7230489e80000
2: 0xa9059cbb0000000000000000000000007a860e9c0986b5f7b1ab6ae7f0017d793dfcea2e0000000000000000000000000000000000000000000000000de0b6b3a7640000
3: 0xa9059cbb0000000000000000000000005144edf6a2e7677433bbbd04618702c1c9df3c250000000000000000000000000000000000000000000000000de0b6b3a7640000
"#);
}

#[test]
fn calldata_from_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("calls.toml"),
        r#"
[[calls]]
signature = "transfer(address,uint256)"
args = ["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E", "1000000000000000000"]
"#,
    )
    .unwrap();

    minter(dir.path())
        .args(["calldata", "--calls", "calls.toml"])
        .assert()
        .success()
        .stdout_eq(format!("callDatas:\n1: {TRANSFER_CALLDATA}\n"));
}

#[test]
fn calldata_rejects_bad_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let output = minter(dir.path())
        .args(["calldata", "transfer(address,uint256)", "0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E"])
        .assert()
        .code(1)
        .get_output()
        .clone();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to encode calldata"), "{stderr}");
}

#[test]
fn drip_calldata() {
    let dir = tempfile::tempdir().unwrap();
    let output = minter(dir.path()).arg("drip").assert().success().get_output().clone();
    let calldata = "0xa9059cbb00000000000000000000000012345678901234567890123456789012345678900000000000000000000000000000000000000000000000000de0b6b3a7640000";
    let expected = format!(
        "=== DRIPS INTEGRATION CALLDATA ===

Drip List Address: 0x1234567890123456789012345678901234567890
Amount: 1.0 tokens

Function Signature: transfer(address,uint256)
Call Data: {calldata}

=== DEPLOYMENT CONFIG ===

For your ZkMinterModTriggerV1 contract:
targets[0]: [YOUR_TOKEN_CONTRACT_ADDRESS]
functionSignatures[0]: 0xa9059cbb
callDatas[0]: {calldata}
"
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn decode_transfer() {
    let dir = tempfile::tempdir().unwrap();
    minter(dir.path())
        .args(["decode", "transfer(address,uint256)", TRANSFER_CALLDATA])
        .assert()
        .success()
        .stdout_eq(r#"0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E
1000000000000000000
"#);
}

#[test]
fn decode_rejects_other_selector() {
    let dir = tempfile::tempdir().unwrap();
    minter(dir.path())
        .args(["decode", "approve(address,uint256)", TRANSFER_CALLDATA])
        .assert()
        .code(1);
}

#[test]
fn deploy_requires_private_key() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens on port 1; the command must fail before reaching it.
    let output = minter(dir.path())
        .args(["deploy", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .code(1)
        .get_output()
        .clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("please set DEPLOYER_PRIVATE_KEY in your environment or .env file"),
        "{stderr}"
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Deploying"));
}

#[test]
fn deploy_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    minter(dir.path()).args(["deploy", "--dry-run"]).assert().success().stdout_eq(r#"Deploying ZkMinterModTriggerV1...
constructor args: 0x000000000000000000000000deadbeef00000000000000000000000000000000[..]
"#);
}

#[test]
fn deploy_dry_run_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = minter(dir.path())
        .args(["--json", "deploy", "--dry-run"])
        .assert()
        .success()
        .get_output()
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["contract"], "ZkMinterModTriggerV1");
    assert!(json["constructorArgs"].as_str().unwrap().starts_with("0x"));
}

#[test]
fn deploy_dry_run_numeric_mint_amount() {
    let dir = tempfile::tempdir().unwrap();
    let output = minter(dir.path())
        .env("MINT_AMOUNT", "2500")
        .args(["--json", "deploy", "--dry-run"])
        .assert()
        .success()
        .get_output()
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let args = json["constructorArgs"].as_str().unwrap();
    // the amount is the last word of the `addMerkleTree` arguments
    assert!(args.ends_with(&format!("{:0>64}", "9c4")), "{args}");
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("minter.toml"),
        r#"admin_account = "0x36615Cf349d7F6344891B1e7CA7C72883F5dc049""#,
    )
    .unwrap();

    minter(dir.path()).args(["deploy", "--dry-run"]).assert().success().stdout_eq(r#"Deploying ZkMinterModTriggerV1...
constructor args: 0x00000000000000000000000036615cf349d7f6344891b1e7ca7c72883f5dc049[..]
"#);
}
