#![warn(missing_docs)]
//! Beam documents
//!
//! A [`BeamDocument`] is a YAML file describing a list of named [`BeamSource`]s. Lengths are given in meters and angles
//! in radians. Placement, wavelength and label may be omitted and then take their default values.
//!
//! ```yaml
//! sources:
//! - name: pilot
//!   source:
//!     distribution:
//!       type: CartesianGrid
//!       side_length: [0.002, 0.001]
//!       nr_of_points: [3, 1]
//!     origin: [0.0, 0.0, -0.01]
//!     label: pilot
//! ```
use std::{fs, path::Path};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    distributions::BeamDistType,
    error::{SourceError, SourceResult},
    rays::Rays,
    source::BeamSource,
};

/// A named [`BeamSource`] inside a [`BeamDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSource {
    /// name of the source
    pub name: String,
    /// the source description
    pub source: BeamSource,
}

/// Collection of ray sources as read from or written to a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeamDocument {
    #[serde(default)]
    sources: Vec<NamedSource>,
}
impl BeamDocument {
    /// Creates a new, empty [`BeamDocument`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a source with the given name to this [`BeamDocument`].
    pub fn add_source(&mut self, name: &str, source: BeamSource) {
        self.sources.push(NamedSource {
            name: name.to_owned(),
            source,
        });
    }
    /// Returns the sources of this [`BeamDocument`].
    #[must_use]
    pub fn sources(&self) -> &[NamedSource] {
        &self.sources
    }
    /// Create a new [`BeamDocument`] from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> SourceResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SourceError::Document(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Create a new [`BeamDocument`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(yaml: &str) -> SourceResult<Self> {
        let document: Self = serde_yaml::from_str(yaml)
            .map_err(|e| SourceError::Document(format!("parsing of beam document failed: {e}")))?;
        info!("read beam document with {} sources", document.sources.len());
        Ok(document)
    }
    /// Return the YAML representation of this [`BeamDocument`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization failed.
    pub fn to_yaml_string(&self) -> SourceResult<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SourceError::Document(format!("serialization of beam document failed: {e}"))
        })
    }
    /// Override the seed of all random distributions in this [`BeamDocument`].
    pub fn set_random_seed(&mut self, seed: u64) {
        for named in &mut self.sources {
            if let BeamDistType::AngularRandom(dist) = named.source.distribution_mut() {
                dist.set_seed(Some(seed));
            }
        }
    }
    /// Generate the rays of all sources of this [`BeamDocument`].
    ///
    /// The result contains the name of each source together with its rays, in document order.
    ///
    /// # Errors
    ///
    /// This function will return the error of the first source that cannot be generated. The name of this source is
    /// logged as a warning.
    pub fn generate_all(&self) -> SourceResult<Vec<(String, Rays)>> {
        self.sources
            .iter()
            .map(|named| {
                let rays = named.source.generate().inspect_err(|e| {
                    warn!("source '{}' failed: {e}", named.name);
                })?;
                Ok((named.name.clone(), rays))
            })
            .collect()
    }
}
