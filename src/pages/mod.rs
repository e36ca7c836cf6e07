//! Static HTML served outside the repository layout.

use crate::models::{INFO_URL, RESERVED_VERSION};

pub const CONTENT_TYPE_HTML: &str = "text/html";

pub const INDEX_HTML: &str = r#"<html>
<head>
<title>Version 99 Does Not Exist</title>
</head>
<body>
<h1>Version 99 Does Not Exist</h1>
<p>Please see <a href="http://day-to-day-stuff.blogspot.com/2007/10/announcement-version-99-does-not-exist.html">my blog</a> to read why Version 99 Does Not Exist was created, together with its predecessor no-commons-logging.</p>
<p>Version 99 Does Not Exist emulates a Maven 2 repository and serves empty jars for any valid package that has version number <i>99.0-does-not-exist</i>. It also generates poms and the matching SHA-1 and MD5 hashes. Metadata files are no longer generated since version 2.0.</p>
<p>For example <a href="/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.jar">/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.jar</a> gives an empty jar and <a href="/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.pom">/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.pom</a> its pom.</p>
</body>
</html>
"#;

/// 404 page naming the path that was not found
pub fn not_found_html(path: &str) -> String {
    format!(
        "<html>\n<body>\n<h1>Version 99 Does Not Exist (Error 404)</h1>\n\
         <h2>Not Found: {path}</h2>\n\
         <p>\n<a href=\"{INFO_URL}\">Version 99 Does Not Exist</a> is a virtual Maven2 repository.\n\
         It generates jars and poms for any artifact with version '{RESERVED_VERSION}'.\n</p>\n\
         </body>\n</html>\n",
        path = escape_html(path),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
