use crate::models::{Coordinate, INFO_URL, RESERVED_VERSION};

/// A stored (uncompressed) jar whose only member is `META-INF/MANIFEST.MF`
/// containing `Manifest-Version: 1.0`. Some tools reject a jar with no
/// entries at all, so the manifest stays.
pub static EMPTY_JAR: [u8; 171] = [
    // local file header
    0x50, 0x4b, 0x03, 0x04, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc1, 0x3e,
    0x48, 0x38, 0xb2, 0x7f, 0x02, 0xee, 0x19, 0x00, 0x00, 0x00, 0x19, 0x00,
    0x00, 0x00, 0x14, 0x00, 0x04, 0x00,
    // name + extra
    0x4d, 0x45, 0x54, 0x41, 0x2d, 0x49, 0x4e, 0x46, 0x2f, 0x4d, 0x41, 0x4e,
    0x49, 0x46, 0x45, 0x53, 0x54, 0x2e, 0x4d, 0x46, 0xfe, 0xca, 0x00, 0x00,
    // MANIFEST.MF contents
    0x4d, 0x61, 0x6e, 0x69, 0x66, 0x65, 0x73, 0x74, 0x2d, 0x56, 0x65, 0x72,
    0x73, 0x69, 0x6f, 0x6e, 0x3a, 0x20, 0x31, 0x2e, 0x30, 0x0d, 0x0a, 0x0d,
    0x0a,
    // central directory entry
    0x50, 0x4b, 0x01, 0x02, 0x0a, 0x00, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xc1, 0x3e, 0x48, 0x38, 0xb2, 0x7f, 0x02, 0xee, 0x19, 0x00, 0x00, 0x00,
    0x19, 0x00, 0x00, 0x00, 0x14, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // name + extra
    0x4d, 0x45, 0x54, 0x41, 0x2d, 0x49, 0x4e, 0x46, 0x2f, 0x4d, 0x41, 0x4e,
    0x49, 0x46, 0x45, 0x53, 0x54, 0x2e, 0x4d, 0x46, 0xfe, 0xca, 0x00, 0x00,
    // end of central directory
    0x50, 0x4b, 0x05, 0x06, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x46, 0x00, 0x00, 0x00, 0x4f, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Render the pom for a coordinate.
///
/// The layout is kept on a single line so checksums stay identical to the
/// ones served by earlier deployments.
pub fn render_pom(coordinate: &Coordinate) -> String {
    let group_id = coordinate.group_id();
    let artifact_id = &coordinate.artifact;

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="iso-8859-1"?>"#,
            "<project>",
            "<modelVersion>4.0.0</modelVersion>",
            "<groupId>{group_id}</groupId>",
            "<artifactId>{artifact_id}</artifactId>",
            "<name>{artifact_id}</name>",
            "<version>{version}</version>",
            "<description>This is a generated pom. Version {version} is a dummy implementation ",
            "with actually does nothing and has no dependencies. ",
            "VERSION {version} IS NOT IN ANY WAY AFFILIATED WITH THE ORIGINAL DEVELOPERS of {group_id}.",
            "</description>",
            "<url>{info_url}</url>",
            "</project>"
        ),
        group_id = group_id,
        artifact_id = artifact_id,
        version = RESERVED_VERSION,
        info_url = INFO_URL,
    )
}
