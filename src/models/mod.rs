pub mod artifact;
pub mod config;

pub use artifact::{
    ArtifactKind, ArtifactRequest, ChecksumKind, Coordinate, INFO_URL, RESERVED_VERSION,
};
pub use config::ServerConfig;
