//! A software 2D raster and compositing engine.
//!
//! Everything renders into an [`Image`]: an owned, row-major RGBA pixel
//! buffer with alpha-composited blitting, line/rectangle/bitmap-text
//! drawing and geometric transforms. Images travel to and from disk as
//! uncompressed 24/32-bit TGA files, and an [`ImageCache`] hands out sprite
//! sheets loaded at most once per path.
//!
//! The engine is synchronous and single-threaded: the host's render loop
//! calls into it once per frame against whatever framebuffer [`Image`] it
//! owns, and file I/O happens only on explicit load and save calls.

pub mod color;
mod draw;
pub mod image;
pub mod logging;
pub mod registry;
pub mod tga;

pub use color::Color;
pub use image::{Area, Image};
pub use registry::ImageCache;
pub use tga::TgaError;
