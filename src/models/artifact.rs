/// Reserved version for which every artifact is fabricated
pub const RESERVED_VERSION: &str = "99.0-does-not-exist";

/// Page linked from generated poms and the HTML pages
pub const INFO_URL: &str =
    "http://day-to-day-stuff.blogspot.com/2007/10/announcement-version-99-does-not-exist.html";

/// Group and artifact identifying a package family, independent of version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// Group as captured from the path, segments separated by `/`
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Group id in Maven notation (`org/apache/commons` -> `org.apache.commons`)
    pub fn group_id(&self) -> String {
        self.group.replace('/', ".")
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id(), self.artifact)
    }
}

/// Digest requested in place of the raw payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumKind {
    #[default]
    None,
    Sha1,
    Md5,
}

impl ChecksumKind {
    /// Maps a path suffix (without the leading dot) to a checksum kind.
    /// Only the two suffixes Maven clients request are recognized.
    pub fn from_suffix(suffix: Option<&str>) -> Option<Self> {
        match suffix {
            None => Some(ChecksumKind::None),
            Some("sha1") => Some(ChecksumKind::Sha1),
            Some("md5") => Some(ChecksumKind::Md5),
            Some(_) => None,
        }
    }
}

impl std::fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecksumKind::None => write!(f, "none"),
            ChecksumKind::Sha1 => write!(f, "sha1"),
            ChecksumKind::Md5 => write!(f, "md5"),
        }
    }
}

/// Artifact file type addressed by the path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Jar,
    Pom,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Jar => write!(f, "jar"),
            ArtifactKind::Pom => write!(f, "pom"),
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jar" => Ok(ArtifactKind::Jar),
            "pom" => Ok(ArtifactKind::Pom),
            _ => Err(format!("Invalid artifact extension: {}", s)),
        }
    }
}

/// Classified request, created per request and dropped once answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactRequest {
    Jar(Coordinate, ChecksumKind),
    Pom(Coordinate, ChecksumKind),
    Unmatched(String),
}

impl ArtifactRequest {
    pub fn new(kind: ArtifactKind, coordinate: Coordinate, checksum: ChecksumKind) -> Self {
        match kind {
            ArtifactKind::Jar => ArtifactRequest::Jar(coordinate, checksum),
            ArtifactKind::Pom => ArtifactRequest::Pom(coordinate, checksum),
        }
    }
}
