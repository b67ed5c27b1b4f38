//! File sizes and streaming content digests.
//!
//! Hashing streams the file through the accumulator in fixed-size chunks so
//! large archives never sit in memory whole; the digest is identical to a
//! single-pass hash of the full content.
use sha2::{Digest, Sha256, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Algorithm tag the registry format expects in front of checksum values.
/// Fixed by contract with the consuming index format.
pub const CHECKSUM_PREFIX: &str = "SHA-256:";

const CHUNK_SIZE: usize = 4096;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Byte length of the file at `path`.
pub fn file_size(path: &Path) -> Result<u64, DigestError> {
    let metadata = std::fs::metadata(path).map_err(|err| io_error(path, err))?;
    Ok(metadata.len())
}

/// Lowercase hex digest of the file content under the named algorithm.
///
/// Only `sha256` and `sha512` are recognized; the CLIs only ever request
/// `sha256`.
pub fn file_digest(path: &Path, algorithm: &str) -> Result<String, DigestError> {
    match algorithm.to_ascii_lowercase().as_str() {
        "sha256" => hash_file::<Sha256>(path),
        "sha512" => hash_file::<Sha512>(path),
        other => Err(DigestError::UnsupportedAlgorithm(other.to_string())),
    }
}

/// SHA-256 digest of the file, in the `SHA-256:<hex>` form the manifest stores.
pub fn formatted_digest(path: &Path) -> Result<String, DigestError> {
    let digest = file_digest(path, "sha256")?;
    Ok(format!("{CHECKSUM_PREFIX}{digest}"))
}

/// Prefix a caller-supplied checksum with the SHA-256 tag unless it already
/// carries one.
pub fn tag_checksum(raw: &str) -> String {
    if raw.starts_with(CHECKSUM_PREFIX) {
        raw.to_string()
    } else {
        format!("{CHECKSUM_PREFIX}{raw}")
    }
}

fn hash_file<D: Digest>(path: &Path) -> Result<String, DigestError> {
    let mut file = File::open(path).map_err(|err| io_error(path, err))?;
    let mut hasher = D::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut chunk).map_err(|err| io_error(path, err))?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }
    Ok(to_hex(hasher.finalize().as_slice()))
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

fn io_error(path: &Path, err: io::Error) -> DigestError {
    match err.kind() {
        io::ErrorKind::NotFound => DigestError::NotFound(path.to_path_buf()),
        _ => DigestError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn write_fixture(content: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("archive.bin");
        fs::write(&path, content).expect("write fixture");
        (dir, path)
    }

    #[test]
    fn size_of_empty_file_is_zero() {
        let (_dir, path) = write_fixture(b"");
        assert_eq!(file_size(&path).expect("size"), 0);
    }

    #[test]
    fn size_matches_byte_length() {
        let (_dir, path) = write_fixture(b"12345");
        assert_eq!(file_size(&path).expect("size"), 5);
    }

    #[test]
    fn sha256_matches_known_vectors() {
        let (_dir, path) = write_fixture(b"");
        assert_eq!(file_digest(&path, "sha256").expect("digest"), EMPTY_SHA256);

        let (_dir, path) = write_fixture(b"abc");
        assert_eq!(file_digest(&path, "sha256").expect("digest"), ABC_SHA256);
    }

    #[test]
    fn streaming_matches_single_pass_hash() {
        // Spans multiple chunks so the streaming loop actually iterates.
        let content: Vec<u8> = (0..20_000u32).map(|n| (n % 251) as u8).collect();
        let (_dir, path) = write_fixture(&content);

        let streamed = file_digest(&path, "sha256").expect("digest");
        let single_pass = format!("{:x}", Sha256::digest(&content));
        assert_eq!(streamed, single_pass);
    }

    #[test]
    fn digest_is_deterministic() {
        let (_dir, path) = write_fixture(b"stable content");
        let first = formatted_digest(&path).expect("digest");
        let second = formatted_digest(&path).expect("digest");
        assert_eq!(first, second);
        assert!(first.starts_with(CHECKSUM_PREFIX));
    }

    #[test]
    fn algorithm_name_is_case_insensitive() {
        let (_dir, path) = write_fixture(b"abc");
        assert_eq!(file_digest(&path, "SHA256").expect("digest"), ABC_SHA256);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let (_dir, path) = write_fixture(b"abc");
        let err = file_digest(&path, "md5").expect_err("should reject");
        assert!(matches!(err, DigestError::UnsupportedAlgorithm(name) if name == "md5"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.bin");
        assert!(matches!(
            file_size(&path),
            Err(DigestError::NotFound(_))
        ));
        assert!(matches!(
            file_digest(&path, "sha256"),
            Err(DigestError::NotFound(_))
        ));
    }

    #[test]
    fn tag_checksum_adds_prefix_once() {
        assert_eq!(tag_checksum("abc123"), "SHA-256:abc123");
        assert_eq!(tag_checksum("SHA-256:abc123"), "SHA-256:abc123");
    }
}
