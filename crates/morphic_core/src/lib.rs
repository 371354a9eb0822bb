//! Morphic Core
//!
//! Leaf primitives shared by the style engine and its projections:
//!
//! - **Color**: 24-bit RGB values, per-channel lighten/darken and the packed
//!   integer lightness test used to pick readable foregrounds
//! - **Geometry**: pointer-to-angle conversion and the four edge phase terms
//!   derived from a light angle
//!
//! # Example
//!
//! ```rust
//! use morphic_core::{readable_foreground, Rgb};
//!
//! let color: Rgb = "#59a680".parse().unwrap();
//! assert!(!color.is_light());
//! assert_eq!(readable_foreground(color), color.adjust_lightness(0.8));
//! ```

pub mod color;
pub mod error;
pub mod geometry;

pub use color::{readable_foreground, Rgb, FOREGROUND_MODULATOR};
pub use error::{MorphicError, Result};
pub use geometry::{
    angle_between, light_angle_from_pointer, normalize_degrees, unit_vector, Edge, EdgePhases,
    Point, Rect,
};
