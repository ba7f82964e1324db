pub mod buffer;
pub mod colour;
pub mod renderer;

pub use buffer::{RenderBuffer, Rgb};
pub use colour::{bounded_colour, colour_for, escape_colour};
pub use renderer::{coordinate_readout, render, MandelbrotRenderer, RenderResult};
