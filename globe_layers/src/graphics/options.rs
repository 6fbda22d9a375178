/// Shared plumbing for graphic options: batch option sets, id assignment,
/// height reference and feature properties.

use uuid::Uuid;
use crate::error::{Error, Result};

/// Feature attributes attached to created objects
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// How a graphic's height is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightReference {
    /// Absolute height above the ellipsoid
    #[default]
    None,
    /// Clamped to terrain
    ClampToGround,
}

impl HeightReference {
    /// `on_ground` flag to height reference
    pub fn from_on_ground(on_ground: bool) -> Self {
        if on_ground {
            HeightReference::ClampToGround
        } else {
            HeightReference::None
        }
    }

    pub fn is_clamped(&self) -> bool {
        matches!(self, HeightReference::ClampToGround)
    }
}

/// Generate a random object id (UUID v4, hyphenated)
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}

/// Options that carry an explicit id and an optional per-item id list
pub trait BatchOptions {
    /// Explicit id for a single item
    fn id(&self) -> Option<&str>;

    /// Ids for each item when one option set is shared by a batch
    fn ids(&self) -> &[String];
}

/// Either one option set shared by every item of a batch, or one per item
#[derive(Debug, Clone)]
pub enum OptionSet<T> {
    Shared(T),
    PerItem(Vec<T>),
}

impl<T: Default> Default for OptionSet<T> {
    fn default() -> Self {
        OptionSet::Shared(T::default())
    }
}

impl<T> From<T> for OptionSet<T> {
    fn from(options: T) -> Self {
        OptionSet::Shared(options)
    }
}

impl<T> From<Vec<T>> for OptionSet<T> {
    fn from(options: Vec<T>) -> Self {
        OptionSet::PerItem(options)
    }
}

impl<T: BatchOptions> OptionSet<T> {
    /// Options and id for the item at `index`
    ///
    /// Per-item options use their own id or a random one. A shared set uses
    /// `ids[index]` when present, otherwise a random id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` if a per-item set has no entry for `index`.
    pub fn item(&self, index: usize) -> Result<(&T, String)> {
        match self {
            OptionSet::PerItem(options) => {
                let options = options.get(index).ok_or_else(|| {
                    Error::InvalidOptions(format!("no options for item {}", index))
                })?;
                let id = options.id().map(str::to_string).unwrap_or_else(random_id);
                Ok((options, id))
            }
            OptionSet::Shared(options) => {
                let id = options.ids().get(index).cloned().unwrap_or_else(random_id);
                Ok((options, id))
            }
        }
    }

    /// Options of the first item (batch-level flags such as `on_ground` come from here)
    pub fn first(&self) -> Option<&T> {
        match self {
            OptionSet::Shared(options) => Some(options),
            OptionSet::PerItem(options) => options.first(),
        }
    }

    /// Check that a per-item set covers exactly `count` items
    pub fn check_len(&self, count: usize) -> Result<()> {
        if let OptionSet::PerItem(options) = self {
            if options.len() != count {
                return Err(Error::InvalidOptions(format!(
                    "expected {} option sets, got {}", count, options.len()
                )));
            }
        }
        Ok(())
    }

    /// Apply `f` to every option set, keeping the shape
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> OptionSet<U> {
        match self {
            OptionSet::Shared(options) => OptionSet::Shared(f(options)),
            OptionSet::PerItem(options) => OptionSet::PerItem(options.iter().map(f).collect()),
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
