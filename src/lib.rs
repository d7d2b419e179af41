//! This is the documentation for the **raysource** package. It generates ray bundles for geometric optics simulations.
//!
//! A ray source samples a beam distribution (e.g. a rectangular or polar grid of positions, a grid of tilt angles
//! or a hexagonal close-packed grid) in its local frame and places the resulting rays into an arbitrary target frame.
//! The generated [`Rays`](rays::Rays) are the input of downstream propagation and intersection stages.
//!
//! ## Example
//!
//! ```rust
//! use raysource::{degree, millimeter, source_helper::parallel_beam_c, source::default_wavelength};
//!
//! let rays = parallel_beam_c(
//!     millimeter!(0.0, 0.0, 0.0),
//!     degree!(0.0, 0.0, 0.0),
//!     (millimeter!(2.0), millimeter!(1.0)),
//!     (3, 1),
//!     default_wavelength(),
//!     "pilot",
//! )
//! .unwrap();
//! assert_eq!(rays.nr_of_rays(), 3);
//! ```
pub mod beam_document;
pub mod console;
pub mod distributions;
pub mod error;
pub mod output;
pub mod ray;
pub mod rays;
pub mod source;
pub mod source_helper;
pub mod utils;

pub use beam_document::BeamDocument;
pub use source::BeamSource;
