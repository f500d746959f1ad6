use std::{collections::HashMap, fs, io, path::Path};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::Result;

/// `$$`, `$name` or `${name}`.
pub static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:(\$)|([_a-zA-Z][_a-zA-Z0-9]*)|\{([_a-zA-Z][_a-zA-Z0-9]*)\})").unwrap()
});

/// Reads the template at `path`. A missing template is not fatal, the notes
/// are then rendered from an empty one.
pub fn load_template(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(template) => Ok(template),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("template {:?} not found, using an empty template", path);
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Replaces every known placeholder in `template`. Placeholders without a
/// value are left untouched.
pub fn substitute(template: &str, values: &HashMap<&str, &str>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            let name = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            match values.get(name) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
