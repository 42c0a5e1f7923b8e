//! Display names for rendered nodes.

/// Language qualifier stripped from fully-qualified type names.
pub const LANGUAGE_QUALIFIER: &str = "global::";

/// Separator between name segments.
pub const NAME_SEPARATOR: char = '.';

/// Shortens raw project and type names for display.
///
/// A name loses, in order: the [`LANGUAGE_QUALIFIER`] prefix, the common name
/// prefix, and (for types) its owning project's display name when that is
/// followed by [`NAME_SEPARATOR`]. A type `Outer.Inner` under project `Outer`
/// displays as `Inner`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayNamer<'a> {
    common_prefix: &'a str,
}

impl<'a> DisplayNamer<'a> {
    /// Create a namer stripping `common_prefix` (may be empty).
    pub fn new(common_prefix: &'a str) -> Self {
        Self { common_prefix }
    }

    /// Display name of `name`, optionally shortened relative to `owner`.
    pub fn display_name(&self, name: &str, owner: Option<&str>) -> String {
        let mut name = name.strip_prefix(LANGUAGE_QUALIFIER).unwrap_or(name);
        if !self.common_prefix.is_empty() {
            name = name.strip_prefix(self.common_prefix).unwrap_or(name);
        }

        if let Some(owner) = owner {
            let owner = self.display_name(owner, None);
            if !owner.is_empty() {
                if let Some(rest) = name
                    .strip_prefix(owner.as_str())
                    .and_then(|rest| rest.strip_prefix(NAME_SEPARATOR))
                {
                    name = rest;
                }
            }
        }

        name.to_string()
    }
}
