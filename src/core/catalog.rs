//! Statutory grounds knowledge base.
//!
//! The catalog is loaded once from the embedded `knowledge/grounds.toml` and
//! never mutated afterwards, so a `&GroundCatalog` can be shared freely.
//! Lookups of unknown codes fail loudly: a requested ground is never dropped
//! from a filing without the caller hearing about it.

use crate::core::assets;
use crate::core::error::VacaturError;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// One statutory ground and the argument text drafted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundRecord {
    /// Stable key, e.g. `10a2`. Never printed in the motion.
    pub code: String,
    pub title: String,
    /// Statutory citation, e.g. `9 U.S.C. § 10(a)(2)`.
    pub section: String,
    pub argument_header: String,
    pub case_cite: String,
    /// Prose statement of the governing legal test.
    pub standard: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    ground: Vec<GroundRecord>,
}

#[derive(Debug, Clone)]
pub struct GroundCatalog {
    grounds: Vec<GroundRecord>,
    index: FxHashMap<String, usize>,
    fingerprint: String,
}

impl GroundCatalog {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, VacaturError> {
        let file: CatalogFile =
            toml::from_str(raw).map_err(|e| VacaturError::Catalog(e.to_string()))?;

        if file.ground.is_empty() {
            return Err(VacaturError::Catalog(
                "knowledge base defines no grounds".to_string(),
            ));
        }

        let mut index = FxHashMap::default();
        for (pos, record) in file.ground.iter().enumerate() {
            validate_record(record)?;
            if index.insert(record.code.clone(), pos).is_some() {
                return Err(VacaturError::Catalog(format!(
                    "duplicate ground code '{}'",
                    record.code
                )));
            }
        }

        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());

        Ok(Self {
            grounds: file.ground,
            index,
            fingerprint: format!("{:x}", hasher.finalize()),
        })
    }

    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, VacaturError> {
        let raw = assets::get_embedded_doc("grounds.toml").ok_or_else(|| {
            VacaturError::Catalog("embedded grounds.toml is missing".to_string())
        })?;
        let catalog = Self::from_toml_str(raw)?;
        tracing::debug!(
            grounds = catalog.grounds.len(),
            fingerprint = %catalog.fingerprint,
            "loaded embedded knowledge base"
        );
        Ok(catalog)
    }

    pub fn lookup(&self, code: &str) -> Result<&GroundRecord, VacaturError> {
        self.index
            .get(code)
            .map(|&pos| &self.grounds[pos])
            .ok_or_else(|| VacaturError::GroundNotFound(code.to_string()))
    }

    /// Look up user input that may be spelled as a citation (`§ 10(a)(2)`).
    pub fn resolve(&self, input: &str) -> Result<&GroundRecord, VacaturError> {
        self.lookup(&normalize_code(input))
    }

    /// Codes in catalog order.
    pub fn all_codes(&self) -> Vec<&str> {
        self.grounds.iter().map(|g| g.code.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroundRecord> {
        self.grounds.iter()
    }

    /// SHA-256 of the knowledge-base text this catalog was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn validate_record(record: &GroundRecord) -> Result<(), VacaturError> {
    let fields = [
        ("code", &record.code),
        ("title", &record.title),
        ("section", &record.section),
        ("argument_header", &record.argument_header),
        ("case_cite", &record.case_cite),
        ("standard", &record.standard),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(VacaturError::Catalog(format!(
                "ground '{}' has an empty {}",
                record.code, name
            )));
        }
    }
    Ok(())
}

/// Process-wide catalog, loaded on first use.
pub fn global() -> Result<&'static GroundCatalog, VacaturError> {
    static CATALOG: OnceLock<GroundCatalog> = OnceLock::new();
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let loaded = GroundCatalog::embedded()?;
    Ok(CATALOG.get_or_init(|| loaded))
}

/// Map citation spellings onto catalog codes.
///
/// `10a2`, `10(a)(2)`, `§ 10(a)(2)` and `9 U.S.C. § 10(a)(2)` all become
/// `10a2`. Anything else is returned trimmed and lowercased, so the lookup
/// that follows reports it as not found.
pub fn normalize_code(input: &str) -> String {
    static CITATION: OnceLock<Regex> = OnceLock::new();
    let re = CITATION.get_or_init(|| {
        Regex::new(r"(?i)^(?:9\s*u\.?\s*s\.?\s*c\.?\s*)?(?:§+\s*)?10\s*\(?\s*a\s*\)?\s*\(?\s*(\d+)\s*\)?$")
            .expect("ground citation pattern is valid")
    });

    let trimmed = input.trim();
    match re.captures(trimmed) {
        Some(caps) => format!("10a{}", &caps[1]),
        None => trimmed.to_lowercase(),
    }
}
