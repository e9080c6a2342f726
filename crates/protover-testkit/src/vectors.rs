//! Golden test vectors for protocol list handling.
//!
//! These vectors are the source of truth for canonical encoding. Any
//! implementation that parses protocol lists MUST reproduce the canonical
//! string and digest for every vector here.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use protover_core::{canonicalize, ProtocolSet};

/// A golden vector: an input list and its expected canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,
    pub input: String,
    pub canonical: String,
    /// blake3 of `canonical`, hex. Empty means "not pinned".
    #[serde(default)]
    pub digest: String,
}

/// A vector file as written to disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorFile {
    pub version: String,
    pub vectors: Vec<GoldenVector>,
}

fn vector(name: &str, description: &str, input: &str, canonical: &str) -> GoldenVector {
    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        input: input.to_string(),
        canonical: canonical.to_string(),
        digest: String::new(),
    }
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        vector("empty", "Empty list", "", ""),
        vector("whitespace_only", "Whitespace is an empty list", "  \t ", ""),
        vector("single", "One version", "Link=1", "Link=1"),
        vector("singleton_range", "v-v collapses to v", "Link=3-3", "Link=3"),
        vector("leading_zeros", "Leading zeros are dropped", "Link=01-004", "Link=1-4"),
        vector(
            "sorted_names",
            "Entries sort by name bytes",
            "Relay=2 LinkAuth=1 Link=1 HSDir=2 Cons=1",
            "Cons=1 HSDir=2 Link=1 LinkAuth=1 Relay=2",
        ),
        vector("merge_adjacent", "Adjacent tokens merge", "Link=1,2,3", "Link=1-3"),
        vector("keep_gaps", "Gaps are preserved", "LinkAuth=3,1", "LinkAuth=1,3"),
        vector(
            "repeated_names",
            "Repeated names merge",
            "Link=1-2 Cons=1 Link=4 Link=3",
            "Cons=1 Link=1-4",
        ),
        vector(
            "multiple_spaces",
            "Runs of whitespace separate entries",
            "Link=1   Relay=2\tCons=1",
            "Cons=1 Link=1 Relay=2",
        ),
        vector("unknown_name", "Unknown names survive", "Zzz=7 Link=1", "Link=1 Zzz=7"),
        vector(
            "version_space_top",
            "The largest version is representable",
            "Link=4294967295,4294967294",
            "Link=4294967294-4294967295",
        ),
    ]
}

/// Check one vector. On success returns the computed digest.
pub fn verify_vector(vector: &GoldenVector) -> anyhow::Result<String> {
    let canonical = canonicalize(&vector.input)
        .with_context(|| format!("vector {}: input does not parse", vector.name))?;
    if canonical != vector.canonical {
        bail!(
            "vector {}: expected {:?}, got {:?}",
            vector.name,
            vector.canonical,
            canonical
        );
    }

    let set: ProtocolSet = canonical
        .parse()
        .with_context(|| format!("vector {}: canonical form does not parse", vector.name))?;
    let digest = set.digest_hex();
    if !vector.digest.is_empty() && digest != vector.digest {
        bail!("vector {}: digest mismatch", vector.name);
    }
    Ok(digest)
}

/// Verify all vectors. Returns (name, passed, detail) for each.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match verify_vector(v) {
            Ok(digest) => (v.name.clone(), true, digest),
            Err(e) => (v.name.clone(), false, format!("{:#}", e)),
        })
        .collect()
}

/// Vectors with their digests pinned, as pretty JSON.
pub fn vectors_to_json() -> anyhow::Result<String> {
    let vectors = all_vectors()
        .into_iter()
        .map(|mut v| {
            v.digest = verify_vector(&v)?;
            Ok(v)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let file = VectorFile {
        version: env!("CARGO_PKG_VERSION").to_string(),
        vectors,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Load vectors from JSON and verify every one.
pub fn verify_json(json: &str) -> anyhow::Result<usize> {
    let file: VectorFile = serde_json::from_str(json).context("invalid vector file")?;
    for v in &file.vectors {
        verify_vector(v)?;
    }
    Ok(file.vectors.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, passed, detail) in verify_all_vectors() {
            assert!(passed, "vector {} failed: {}", name, detail);
        }
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_equivalent_inputs_share_digest() {
        let a = verify_vector(&vector("a", "", "Link=1,2,3", "Link=1-3")).unwrap();
        let b = verify_vector(&vector("b", "", "Link=3 Link=1-2", "Link=1-3")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_wrong_expectation_reported() {
        let bad = vector("bad", "", "Link=2,1", "Link=2,1");
        let err = verify_vector(&bad).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_unparseable_input_reported() {
        let bad = vector("inverted", "", "Link=3-1", "");
        assert!(verify_vector(&bad).is_err());
    }

    #[test]
    fn test_pinned_digest_checked() {
        let mut v = vector("pinned", "", "Link=1", "Link=1");
        v.digest = "00".repeat(32);
        assert!(verify_vector(&v).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = vectors_to_json().unwrap();
        assert_eq!(verify_json(&json).unwrap(), all_vectors().len());
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(verify_json("{").is_err());
    }
}
