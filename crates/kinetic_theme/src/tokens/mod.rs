//! Design tokens for theming
//!
//! Only the tokens the widget state machines read are modelled here; style
//! objects themselves belong to the external style resolver.

mod color;
mod opacity;

pub use color::*;
pub use opacity::*;
