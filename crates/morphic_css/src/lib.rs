//! Morphic CSS projections
//!
//! Two views of the same derived style:
//!
//! - [`PreviewStyle`]: every property resolved to concrete values, for a live
//!   element
//! - [`emit_stylesheet`]: portable stylesheet text where derived quantities
//!   stay formulas over the raw custom properties
//!
//! Both format numbers through [`format`], so a value never renders two
//! ways. [`import_stylesheet`] reads emitted text back into parameters.
//!
//! # Example
//!
//! ```rust
//! use morphic_css::{emit_stylesheet, import_stylesheet, EmitOptions};
//! use morphic_style::ParameterVector;
//!
//! let params = ParameterVector::default();
//! let css = emit_stylesheet(&params, &EmitOptions::default());
//! assert!(css.contains("--primary-color: #59a680;"));
//!
//! let imported = import_stylesheet(&css).unwrap();
//! assert_eq!(imported.params, params);
//! ```

pub mod emitter;
pub mod format;
pub mod import;
pub mod preview;

pub use emitter::{emit_stylesheet, field_var, phase_var, EmitOptions};
pub use import::{import_stylesheet, ImportError, ImportedStylesheet};
pub use preview::{Declaration, PreviewStyle};
