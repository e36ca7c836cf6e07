//! Payload synthesis for matched repository requests.

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::models::{ArtifactRequest, ChecksumKind};

mod payload;

pub use payload::{render_pom, EMPTY_JAR};

pub const CONTENT_TYPE_JAR: &str = "application/java-archive";
pub const CONTENT_TYPE_POM: &str = "text/xml";
pub const CONTENT_TYPE_CHECKSUM: &str = "text/plain";

/// Response body and content type for a matched request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl Payload {
    fn new(bytes: impl Into<Vec<u8>>, content_type: &'static str) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }
}

/// Produce the payload for a classified request.
///
/// Returns `None` for `Unmatched`; the caller answers those with the
/// not-found page.
pub fn resolve(request: &ArtifactRequest) -> Option<Payload> {
    let (raw, checksum) = match request {
        ArtifactRequest::Jar(_, checksum) => {
            (Payload::new(EMPTY_JAR.as_slice(), CONTENT_TYPE_JAR), *checksum)
        }
        ArtifactRequest::Pom(coordinate, checksum) => {
            (Payload::new(render_pom(coordinate), CONTENT_TYPE_POM), *checksum)
        }
        ArtifactRequest::Unmatched(_) => return None,
    };

    Some(reduce(raw, checksum))
}

/// Replace a payload with its hex digest when a checksum was requested
fn reduce(payload: Payload, kind: ChecksumKind) -> Payload {
    match checksum(&payload.bytes, kind) {
        Some(hex) => Payload::new(hex, CONTENT_TYPE_CHECKSUM),
        None => payload,
    }
}

/// Lowercase hex digest of `data`, or `None` for [`ChecksumKind::None`]
pub fn checksum(data: &[u8], kind: ChecksumKind) -> Option<String> {
    match kind {
        ChecksumKind::None => None,
        ChecksumKind::Sha1 => Some(hex_digest::<Sha1>(data)),
        ChecksumKind::Md5 => Some(hex_digest::<Md5>(data)),
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}
