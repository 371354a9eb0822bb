//! Morphic Style Engine
//!
//! Maps a small vector of physical parameters (color, size, corner radius,
//! light angle, elevation, intensity, diffusion, bevel, blur, translucency)
//! to the derived visual quantities that simulate directional lighting,
//! elevation and material translucency on a rectangular surface.
//!
//! - [`ParameterVector`]: the only input state
//! - [`compute_derived_style`]: the pure mapping
//! - [`DerivedStyle`]: displacements, edge phases, shadow stack, surface fill
//! - [`ParameterController`]: edits, color linking, randomize, light dragging
//!
//! # Example
//!
//! ```rust
//! use morphic_style::{compute_derived_style, ParameterVector};
//!
//! let params = ParameterVector::default();
//! let style = compute_derived_style(&params);
//! assert_eq!(style.shadows.len(), 6);
//! assert_eq!(style, compute_derived_style(&params));
//! ```

pub mod bounds;
pub mod controller;
pub mod derived;
pub mod drag;
pub mod engine;
pub mod error;
pub mod params;
pub mod random;

pub use bounds::{ParameterBounds, Range, MAX_DECIMALS};
pub use controller::ParameterController;
pub use derived::{
    BlendMode, DerivedStyle, GradientStop, LayerColor, LinearGradient, ShadowLayer, ShadowRole,
    ShadowStack, SurfaceFill,
};
pub use drag::{DragSession, PointerEvent};
pub use engine::compute_derived_style;
pub use error::{Result, StyleError};
pub use params::{Field, GlassSettings, Material, ParameterVector, DEFAULT_COLOR};
pub use random::random_parameters;
