//! Feed paths
//!
//! Slash-separated addresses into the document tree, e.g. `pedidos/3/-Nx1...`.

use std::fmt;

use shared::{AppError, AppResult};

/// Maximum nesting depth of a stored value, counted from the root
pub const MAX_DEPTH: usize = 32;

const FORBIDDEN_KEY_CHARS: [char; 6] = ['.', '#', '$', '[', ']', '/'];

/// Validated feed path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FeedPath {
    segments: Vec<String>,
}

impl FeedPath {
    /// The root of the tree
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash-separated path. Leading and trailing slashes are ignored,
    /// `""` and `"/"` are the root.
    pub fn parse(path: &str) -> AppResult<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            validate_key(segment).map_err(|e| e.with_detail("path", path))?;
            segments.push(segment.to_string());
        }
        if segments.len() > MAX_DEPTH {
            return Err(AppError::feed_write(format!(
                "Path is too deep ({} segments, max {MAX_DEPTH})",
                segments.len()
            )));
        }
        Ok(Self { segments })
    }

    /// Append one key
    pub fn child(&self, key: &str) -> AppResult<Self> {
        validate_key(key)?;
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        if segments.len() > MAX_DEPTH {
            return Err(AppError::feed_write(format!(
                "Path is too deep ({} segments, max {MAX_DEPTH})",
                segments.len()
            )));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment ("menu", "pedidos", ...)
    pub fn resource(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Whether `self` is `other` or one of its ancestors
    pub fn contains(&self, other: &FeedPath) -> bool {
        other.segments.len() >= self.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a == b)
    }

    /// Whether a write at one path can change the snapshot at the other
    pub fn overlaps(&self, other: &FeedPath) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl fmt::Display for FeedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Validate a single key (path segment or object key)
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.is_empty() {
        return Err(AppError::feed_write("Keys must not be empty"));
    }
    if let Some(c) = key.chars().find(|c| FORBIDDEN_KEY_CHARS.contains(c) || c.is_control()) {
        return Err(AppError::feed_write(format!(
            "Key '{key}' contains forbidden character {c:?}"
        )));
    }
    Ok(())
}
