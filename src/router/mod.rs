//! Path classification for the virtual repository.
//!
//! A request path is matched against the Maven 2 layout for the reserved
//! version. The artifact name appears twice in that layout (directory and
//! file name); the `regex` crate has no back-references, so both slots are
//! captured independently and compared before the match is accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{ArtifactKind, ArtifactRequest, ChecksumKind, Coordinate};

/// Prefix under which the repository is mounted
pub const REPOSITORY_PREFIX: &str = "/mvn2/";

static ARTIFACT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^/mvn2/(?P<group>.+)/(?P<artifact>[^/]+)/99\.0-does-not-exist/(?P<name>[^/]+)-99\.0-does-not-exist\.(?P<ext>jar|pom)(?:\.(?P<checksum>sha1|md5))?$",
    )
    .unwrap()
});

/// Classify a request path into an [`ArtifactRequest`].
///
/// Jar and pom share one pattern, distinguished by the extension capture.
/// Anything that does not fit, including a file name whose artifact differs
/// from the directory name, is `Unmatched`.
pub fn classify(path: &str) -> ArtifactRequest {
    match match_artifact(path) {
        Some(request) => request,
        None => ArtifactRequest::Unmatched(path.to_string()),
    }
}

fn match_artifact(path: &str) -> Option<ArtifactRequest> {
    if !path.starts_with(REPOSITORY_PREFIX) {
        return None;
    }

    let caps = ARTIFACT_PATTERN.captures(path)?;

    let group = caps.name("group")?.as_str();
    let artifact = caps.name("artifact")?.as_str();
    let name = caps.name("name")?.as_str();

    // artifactId != file name -> no match
    if artifact != name {
        debug!(artifact, name, "artifact name mismatch in {}", path);
        return None;
    }

    // every group segment must be non-empty (`a//b` is not a group)
    if group.split('/').any(str::is_empty) {
        debug!(group, "empty group segment in {}", path);
        return None;
    }

    let kind: ArtifactKind = caps.name("ext")?.as_str().parse().ok()?;
    let checksum = ChecksumKind::from_suffix(caps.name("checksum").map(|m| m.as_str()))?;

    Some(ArtifactRequest::new(
        kind,
        Coordinate::new(group, artifact),
        checksum,
    ))
}
