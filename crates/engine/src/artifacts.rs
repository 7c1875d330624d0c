//! Loading of compiled contract artifacts.
//!
//! The FarmDao contracts are compiled by a Hardhat project; the engine only
//! needs the creation bytecode from each artifact.

use {
    alloy::primitives::Bytes,
    anyhow::{Context, Result, anyhow},
    serde::Deserialize,
    std::{collections::HashMap, fs, path::Path},
};

/// The subset of a Hardhat artifact the engine consumes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: String,
    bytecode: Bytes,
}

/// Creation bytecode of every compiled contract, indexed by contract name.
#[derive(Debug, Default)]
pub struct Artifacts(HashMap<String, Bytes>);

impl Artifacts {
    /// Reads every artifact below `dir`.
    ///
    /// Hardhat nests artifacts in one directory per source file, so the scan
    /// is recursive. Debug files (`*.dbg.json`) and the `build-info`
    /// directory are not artifacts and get skipped.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut bytecode = HashMap::new();
        Self::scan(dir, &mut bytecode)?;
        Ok(Self(bytecode))
    }

    fn scan(dir: &Path, bytecode: &mut HashMap<String, Bytes>) -> Result<()> {
        let entries =
            fs::read_dir(dir).with_context(|| format!("failed to read directory {dir:?}"))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                if path.file_name().is_some_and(|name| name == "build-info") {
                    continue;
                }
                Self::scan(&path, bytecode)?;
            } else if path.extension().is_some_and(|extension| extension == "json")
                && !path.to_string_lossy().ends_with(".dbg.json")
            {
                let content =
                    fs::read(&path).with_context(|| format!("failed to read {path:?}"))?;
                let artifact: Artifact = serde_json::from_slice(&content)
                    .with_context(|| format!("malformed artifact {path:?}"))?;
                bytecode.insert(artifact.contract_name, artifact.bytecode);
            }
        }
        Ok(())
    }

    /// Creation code of `contract`.
    pub fn bytecode(&self, contract: &str) -> Result<&Bytes> {
        self.0
            .get(contract)
            .ok_or_else(|| anyhow!("no artifact for contract {contract}"))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex, std::fs};

    fn write_artifact(dir: &Path, name: &str, bytecode: &str) {
        let artifact = serde_json::json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": format!("contracts/{name}.sol"),
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": bytecode,
            "linkReferences": {},
        });
        fs::write(
            dir.join(format!("{name}.json")),
            serde_json::to_vec(&artifact).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn indexes_artifacts_by_contract_name() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("contracts").join("FUSD.sol");
        fs::create_dir_all(&nested).unwrap();
        write_artifact(&nested, "FUSD", "0x60806040");
        write_artifact(dir.path(), "ReceiptNFT", "0xdeadbeef");

        let artifacts = Artifacts::load(dir.path()).unwrap();
        assert_eq!(
            artifacts.bytecode("FUSD").unwrap().as_ref(),
            hex!("60806040")
        );
        assert_eq!(
            artifacts.bytecode("ReceiptNFT").unwrap().as_ref(),
            hex!("deadbeef")
        );
    }

    #[test]
    fn unknown_contract_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts::load(dir.path()).unwrap();
        let err = artifacts.bytecode("FUSD").unwrap_err();
        assert_eq!(err.to_string(), "no artifact for contract FUSD");
    }

    #[test]
    fn skips_debug_files() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "FUSD", "0x6080");
        fs::write(
            dir.path().join("FUSD.dbg.json"),
            br#"{"_format": "hh-sol-dbg-1", "buildInfo": "../build-info/x.json"}"#,
        )
        .unwrap();

        let artifacts = Artifacts::load(dir.path()).unwrap();
        assert_eq!(artifacts.bytecode("FUSD").unwrap().as_ref(), hex!("6080"));
    }

    #[test]
    fn malformed_artifact_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("FUSD.json"), br#"{"bytecode": 42}"#).unwrap();
        assert!(Artifacts::load(dir.path()).is_err());
    }
}
