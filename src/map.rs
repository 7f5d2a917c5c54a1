//! Image map areas and the scene description that associates them with an image.
//!
//! A scene file stands in for the page markup: it declares the image size, the
//! `usemap` reference and the maps with their areas, using the same attribute
//! strings a browser would hand over (`shape = "poly"`, `coords = "0,0,10,0,…"`).

use crate::draw::AreaShape;
use crate::util::parse_int_prefix;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while resolving a scene into areas to highlight.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HighlightError {
    #[error("The \"use_map\" attribute for this image has not been set")]
    NotConfigured,

    #[error("The requested map \"{0}\" could not be found")]
    NotFound(String),

    #[error("Invalid coordinate '{token}' at position {index}")]
    InvalidCoordinate { index: usize, token: String },
}

/// Splits a comma-separated coordinate attribute into integers.
///
/// Each entry is read by its leading integer, so `" 10"` and `"10px"` both give
/// 10. An empty or all-whitespace attribute yields an empty list.
///
/// # Errors
/// Returns [`HighlightError::InvalidCoordinate`] for the first entry that does
/// not start with an integer.
pub fn parse_coords(text: &str) -> Result<Vec<i32>, HighlightError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(index, token)| {
            parse_int_prefix(token, 10)
                .map(|value| value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
                .ok_or_else(|| HighlightError::InvalidCoordinate {
                    index,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// A single highlightable region: a shape and its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub shape: AreaShape,
    pub coords: Vec<i32>,
}

impl Area {
    pub fn new(shape: AreaShape, coords: Vec<i32>) -> Self {
        Self { shape, coords }
    }

    /// Builds an area from its raw `shape` and `coords` attribute values.
    pub fn parse(shape: &str, coords: &str) -> Result<Self, HighlightError> {
        Ok(Self {
            shape: AreaShape::from_identifier(shape),
            coords: parse_coords(coords)?,
        })
    }
}

/// Raw `<area>` attributes as declared in a scene.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaSpec {
    pub shape: String,
    #[serde(default)]
    pub coords: String,
}

/// A named collection of areas.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageMap {
    pub name: String,
    #[serde(default, rename = "area")]
    pub areas: Vec<AreaSpec>,
}

impl ImageMap {
    /// Number of declared areas, including ones that fail to parse.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Parses the area at `index`, or returns `None` if there is no such area.
    pub fn area(&self, index: usize) -> Option<Result<Area, HighlightError>> {
        self.areas
            .get(index)
            .map(|spec| Area::parse(&spec.shape, &spec.coords))
    }

    /// Parses every declared area in order.
    pub fn areas(&self) -> impl Iterator<Item = Result<Area, HighlightError>> + '_ {
        self.areas
            .iter()
            .map(|spec| Area::parse(&spec.shape, &spec.coords))
    }
}

/// The image a highlight overlay is laid over.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSpec {
    /// Overlay width in pixels
    pub width: u32,
    /// Overlay height in pixels
    pub height: u32,
    /// Map reference, e.g. `"#planets"`
    #[serde(default)]
    pub use_map: Option<String>,
    /// Optional PNG drawn under the overlay, relative to the scene file
    #[serde(default)]
    pub src: Option<PathBuf>,
}

/// An image together with the maps declared alongside it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub image: ImageSpec,
    #[serde(default, rename = "map")]
    pub maps: Vec<ImageMap>,
}

impl Scene {
    /// Parses a scene from TOML text.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Failed to parse scene")
    }

    /// Reads and parses a scene file.
    ///
    /// A relative `image.src` is rebased onto the scene file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene from {}", path.display()))?;
        let mut scene = Self::from_toml(&text)
            .with_context(|| format!("Invalid scene in {}", path.display()))?;

        if let (Some(src), Some(dir)) = (scene.image.src.as_mut(), path.parent()) {
            if src.is_relative() {
                *src = dir.join(&*src);
            }
        }

        log::debug!(
            "Loaded scene {} with {} map(s)",
            path.display(),
            scene.maps.len()
        );
        Ok(scene)
    }

    /// Finds the map the image refers to.
    ///
    /// # Errors
    /// - [`HighlightError::NotConfigured`] if the image has no (or an empty) map reference
    /// - [`HighlightError::NotFound`] if no map carries the referenced name
    pub fn resolve_map(&self) -> Result<&ImageMap, HighlightError> {
        let reference = self
            .image
            .use_map
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
            .ok_or(HighlightError::NotConfigured)?;

        let name = reference.strip_prefix('#').unwrap_or(reference);
        self.maps
            .iter()
            .find(|map| map.name == name)
            .ok_or_else(|| HighlightError::NotFound(reference.to_string()))
    }
}
