//! Sample record documents
//!
//! One complete, valid document per built-in template plus a few broken
//! ones. Tests write them into a temporary directory with
//! [`write_fixture`].

use std::path::{Path, PathBuf};

/// Valid blog post with Markdown description and mixed sections
pub const BLOG: &str = r#"title = "How to Improve Website SEO"
thumbnail = "/images/blog/seo.avif"
category = "SEO"
date = "2024-03-05"
timeToRead = 6
author = "Jane Smith"
shortDescription = "Five quick wins for better rankings"
description = { markdown = "Search engines reward **fast** pages.\n\nStart with the basics." }

[[content]]
type = "text"
title = "Why speed matters"
body = "<p>Users leave slow sites.</p>"

[[content]]
type = "image"
title = "Lighthouse report"
srcUrl = "/images/blog/lighthouse.png"
description = "<p>Before and after.</p>"
"#;

/// Valid customer story with an HTML body
pub const CUSTOMER_STORY: &str = r#"id = "acme-growth"
title = "Acme doubled its pipeline"
thumbnail = "/images/stories/acme.avif"
category = "Saas"
date = "12 Jan 2024"
timeToRead = "4"
author = "John Smith"
shortDescription = "How Acme grew with content marketing"
content = """
<p class="lead">Acme needed leads.</p>
<p>We delivered&nbsp;them.</p>
"""

[client]
name = "Acme"
industry = "Manufacturing"
logo = "/images/clients/acme.svg"
"#;

/// Valid portfolio entry; `about.year` is left to fall back on `meta.year`
pub const WORKS: &str = r#"title = "Acme Rebrand"
thumbnail = "/images/works/acme.avif"

[meta]
year = 2023
industry = "Retail"
client = "Acme"
services = "Branding, Web Design"

[about]
title = "A new face for Acme"
description = "Full visual identity refresh."
image = "/images/works/acme-about.avif"

[[sections]]
type = "text"
content = "We started from the logo."

[[sections]]
type = "image-grid"
images = ["/images/works/1.png", "/images/works/2.png"]
"#;

/// Portfolio entry missing its services and an image grid's images
pub const WORKS_INVALID: &str = r#"title = "Half done"
thumbnail = "/images/works/half.avif"

[meta]
year = "2023"
industry = "Retail"
client = "Acme"
services = []

[about]
title = "About"
description = "Text"
image = "/images/works/about.avif"

[[sections]]
type = "image-grid"
images = []
"#;

/// Two blog entries in one document
pub const BLOG_ENTRIES: &str = r#"[[entries]]
title = "First Post"
thumbnail = "/images/blog/first.avif"
category = "SEO"
date = "2024-01-01"
timeToRead = 3
author = "John Doe"
shortDescription = "First"
description = "<p>One</p>"

[[entries]]
title = "Second Post"
thumbnail = ""
category = "SEO"
date = "2024-01-02"
timeToRead = 4
author = "John Doe"
shortDescription = "Second"
description = "<p>Two</p>"
"#;

/// Two customer stories whose titles map to the same constant name
pub const STORY_ENTRIES_COLLIDING: &str = r#"[[entries]]
title = "Hello World"
thumbnail = "/images/stories/hello.avif"
category = "Saas"
date = "2024-01-12"
timeToRead = 4
author = "Jane Doe"
shortDescription = "First"
content = "<p>One</p>"

[entries.client]
name = "Acme"
industry = "Retail"
logo = "/images/clients/acme.svg"

[[entries]]
title = "Hello World!"
thumbnail = "/images/stories/hello-again.avif"
category = "Saas"
date = "2024-02-12"
timeToRead = 5
author = "Jane Doe"
shortDescription = "Second"
content = "<p>Two</p>"

[entries.client]
name = "Globex"
industry = "Energy"
logo = "/images/clients/globex.svg"
"#;

/// Write a fixture document into `dir`
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    crate::write_file(dir, name, content)
}
