//! YAML front matter.

use serde_yaml::Mapping;

/// Split a leading `---` YAML block off `raw`.
///
/// Returns the parsed metadata and the remaining body. The block must start on
/// the first line and end with a `---` or `...` line. When the block is
/// missing, unterminated or not a YAML mapping, the whole input is the body.
pub fn split_front_matter(raw: &str) -> (Option<Mapping>, &str) {
    let input = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(rest) = input
        .strip_prefix("---\n")
        .or_else(|| input.strip_prefix("---\r\n"))
    else {
        return (None, raw);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let end = offset + line.len();
        if matches!(line.trim_end(), "---" | "...") {
            let yaml = &rest[..offset];
            let body = &rest[end..];
            return match parse(yaml) {
                Some(meta) => (Some(meta), body),
                None => (None, raw),
            };
        }
        offset = end;
    }

    tracing::debug!("Unterminated front matter, treating input as body");
    (None, raw)
}

fn parse(yaml: &str) -> Option<Mapping> {
    if yaml.trim().is_empty() {
        return Some(Mapping::new());
    }
    match serde_yaml::from_str::<Mapping>(yaml) {
        Ok(meta) => Some(meta),
        Err(e) => {
            tracing::debug!(error = %e, "Invalid front matter, treating input as body");
            None
        }
    }
}
