//! hardhat-zksync build artifacts.

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::Deserialize;
use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    path::{Path, PathBuf},
};

/// `_format` written by hardhat-zksync for zksolc output.
pub const ZKSOLC_ARTIFACT_FORMAT: &str = "hh-zksolc-artifact-1";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} is a `{format}` artifact, expected `{ZKSOLC_ARTIFACT_FORMAT}`", path.display())]
    Format { path: PathBuf, format: String },
    #[error("artifact of {0} has no bytecode; is the contract abstract?")]
    EmptyBytecode(String),
    #[error("invalid factory dependency `{0}`, expected `<source>:<name>`")]
    InvalidDependency(String),
}

/// A compiled contract as written by hardhat-zksync.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZkArtifact {
    #[serde(rename = "_format", default)]
    pub format: String,
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
    /// Bytecode hash to `<source>:<name>` of every contract this one may deploy.
    #[serde(default)]
    pub factory_deps: BTreeMap<String, String>,
}

impl ZkArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ArtifactError::Read { path: path.to_path_buf(), source })?;
        let artifact: Self = serde_json::from_str(&content)
            .map_err(|source| ArtifactError::Parse { path: path.to_path_buf(), source })?;

        if artifact.format != ZKSOLC_ARTIFACT_FORMAT {
            return Err(ArtifactError::Format {
                path: path.to_path_buf(),
                format: artifact.format,
            });
        }
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(artifact.contract_name));
        }

        debug!(
            target: "artifact",
            name = %artifact.contract_name,
            bytecode_len = artifact.bytecode.len(),
            deps = artifact.factory_deps.len(),
            "loaded artifact"
        );
        Ok(artifact)
    }

    /// Returns the artifacts directory `path` was loaded from, i.e. `path` without its
    /// `<sourceName>/<contractName>.json` suffix.
    pub fn artifacts_root(&self, path: &Path) -> Option<PathBuf> {
        let dir = path.parent()?;
        let source = Path::new(&self.source_name);
        if !dir.ends_with(source) {
            return None;
        }
        dir.ancestors().nth(source.components().count()).map(Path::to_path_buf)
    }

    /// Collects the bytecode of every transitive factory dependency.
    ///
    /// Dependencies are read from `<artifacts_root>/<source>/<name>.json`. The contract's own
    /// bytecode is not part of the result.
    pub fn factory_deps(&self, artifacts_root: &Path) -> Result<Vec<Vec<u8>>, ArtifactError> {
        let mut visited_paths = HashSet::new();
        let mut visited_bytecodes = HashSet::new();
        let mut deps = Vec::new();
        let mut queue: VecDeque<String> = self.factory_deps.values().cloned().collect();

        while let Some(dep_info) = queue.pop_front() {
            if !visited_paths.insert(dep_info.clone()) {
                continue;
            }

            let Some((contract_path, contract_name)) = dep_info.split_once(':') else {
                return Err(ArtifactError::InvalidDependency(dep_info));
            };
            let path = artifacts_root.join(contract_path).join(format!("{contract_name}.json"));
            trace!(target: "artifact", dep = %dep_info, path = %path.display(), "loading factory dependency");

            let dep = Self::load(&path)?;
            queue.extend(dep.factory_deps.into_values());

            let bytecode = dep.bytecode.to_vec();
            if bytecode != self.bytecode.as_ref() && visited_bytecodes.insert(bytecode.clone()) {
                deps.push(bytecode);
            }
        }

        Ok(deps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_artifact(
        root: &Path,
        source: &str,
        name: &str,
        bytecode: &str,
        deps: serde_json::Value,
    ) -> PathBuf {
        let dir = root.join(source);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.json"));
        let artifact = json!({
            "_format": ZKSOLC_ARTIFACT_FORMAT,
            "contractName": name,
            "sourceName": source,
            "abi": [{
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [{ "name": "admin", "type": "address", "internalType": "address" }]
            }],
            "bytecode": bytecode,
            "deployedBytecode": bytecode,
            "linkReferences": {},
            "deployedLinkReferences": {},
            "factoryDeps": deps,
        });
        std::fs::write(&path, serde_json::to_string_pretty(&artifact).unwrap()).unwrap();
        path
    }

    #[test]
    fn loads_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            dir.path(),
            "contracts/Trigger.sol",
            "Trigger",
            "0x00000001",
            json!({}),
        );

        let artifact = ZkArtifact::load(&path).unwrap();
        assert_eq!(artifact.contract_name, "Trigger");
        assert_eq!(artifact.bytecode.as_ref(), [0, 0, 0, 1]);
        assert_eq!(artifact.abi.constructor().unwrap().inputs.len(), 1);
        assert!(artifact.factory_deps(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn walks_factory_deps_once() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_artifact(
            root,
            "contracts/Leaf.sol",
            "Leaf",
            "0x0000000c",
            json!({}),
        );
        write_artifact(
            root,
            "contracts/Child.sol",
            "Child",
            "0x0000000b",
            json!({ "0x01": "contracts/Leaf.sol:Leaf" }),
        );
        let path = write_artifact(
            root,
            "contracts/Trigger.sol",
            "Trigger",
            "0x0000000a",
            json!({
                "0x02": "contracts/Child.sol:Child",
                "0x03": "contracts/Leaf.sol:Leaf",
            }),
        );

        let artifact = ZkArtifact::load(&path).unwrap();
        let deps = artifact.factory_deps(root).unwrap();
        assert_eq!(deps, vec![vec![0, 0, 0, 0x0b], vec![0, 0, 0, 0x0c]]);
    }

    #[test]
    fn root_from_artifact_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("build");
        write_artifact(&root, "contracts/Leaf.sol", "Leaf", "0x0000000c", json!({}));
        let path = write_artifact(
            &root,
            "contracts/Trigger.sol",
            "Trigger",
            "0x0000000a",
            json!({ "0x01": "contracts/Leaf.sol:Leaf" }),
        );

        let artifact = ZkArtifact::load(&path).unwrap();
        let found = artifact.artifacts_root(&path).unwrap();
        assert_eq!(found, root);
        assert_eq!(artifact.factory_deps(&found).unwrap(), vec![vec![0, 0, 0, 0x0c]]);

        // copied out of its build tree
        let moved = dir.path().join("Trigger.json");
        std::fs::copy(&path, &moved).unwrap();
        assert_eq!(artifact.artifacts_root(&moved), None);
    }

    #[test]
    fn rejects_bad_artifacts() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_artifact(dir.path(), "contracts/A.sol", "A", "0x", json!({}));
        assert!(matches!(ZkArtifact::load(&path), Err(ArtifactError::EmptyBytecode(name)) if name == "A"));

        let path = dir.path().join("evm.json");
        std::fs::write(
            &path,
            json!({
                "_format": "hh-sol-artifact-1",
                "contractName": "A",
                "sourceName": "contracts/A.sol",
                "abi": [],
                "bytecode": "0x6080",
            })
            .to_string(),
        )
        .unwrap();
        assert!(matches!(ZkArtifact::load(&path), Err(ArtifactError::Format { .. })));

        assert!(matches!(
            ZkArtifact::load(&dir.path().join("missing.json")),
            Err(ArtifactError::Read { .. })
        ));
    }

    #[test]
    fn missing_or_malformed_dependency() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            dir.path(),
            "contracts/A.sol",
            "A",
            "0x01",
            json!({ "0x01": "contracts/B.sol:B" }),
        );
        let artifact = ZkArtifact::load(&path).unwrap();
        assert!(matches!(artifact.factory_deps(dir.path()), Err(ArtifactError::Read { .. })));

        let path = write_artifact(dir.path(), "contracts/C.sol", "C", "0x01", json!({ "0x01": "B" }));
        let artifact = ZkArtifact::load(&path).unwrap();
        assert!(matches!(
            artifact.factory_deps(dir.path()),
            Err(ArtifactError::InvalidDependency(dep)) if dep == "B"
        ));
    }
}
