use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use zerocopy::byteorder::little_endian::U16;
use zerocopy::{FromBytes, IntoBytes};
use zerocopy_derive::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::color::Color;
use crate::image::Image;
use crate::{dlog, log};

/// The fixed 12-byte prefix of an uncompressed true-color TGA file with no
/// image id and no color map (image type 2)
const TGA_SIGNATURE: [u8; 12] = [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// The dimensions part of the header, located right after the signature
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, Unaligned, KnownLayout)]
#[repr(C, packed)]
struct TgaInfo {
    width: U16,
    height: U16,
    bpp: u8,
    descriptor: u8,
}

const _: () = assert!(size_of::<TgaInfo>() == 6);

/// An error produced while loading or saving a TGA image
#[derive(Debug, Error)]
pub enum TgaError {
    #[error("failed to access the file: {0}")]
    Io(#[from] io::Error),
    #[error("not an uncompressed true-color TGA")]
    BadSignature,
    #[error("unsupported bits per pixel: {0}, only 24 and 32 are supported")]
    UnsupportedBpp(u8),
    #[error("image has no pixels")]
    ZeroSize,
    #[error("file ends before the pixel data does")]
    Truncated,
}

impl Image {
    /// Decodes an uncompressed 24 or 32-bit TGA from raw bytes
    pub fn from_tga_bytes(bytes: &[u8]) -> Result<Image, TgaError> {
        let Some((signature, rest)) = bytes.split_at_checked(TGA_SIGNATURE.len()) else {
            return Err(TgaError::Truncated);
        };
        if signature != TGA_SIGNATURE {
            return Err(TgaError::BadSignature);
        }

        let Some((info, data)) = rest.split_at_checked(size_of::<TgaInfo>()) else {
            return Err(TgaError::Truncated);
        };
        let info = TgaInfo::read_from_bytes(info)
            .expect("reading an exact-sized header should never fail");

        let width = info.width.get() as u32;
        let height = info.height.get() as u32;
        if width == 0 || height == 0 {
            return Err(TgaError::ZeroSize);
        }
        if info.bpp != 24 && info.bpp != 32 {
            return Err(TgaError::UnsupportedBpp(info.bpp));
        }
        dlog!("TGA header: {width}x{height} at {} bpp", info.bpp);

        let bytes_per_pixel = (info.bpp / 8) as usize;
        let image_size = width as usize * height as usize * bytes_per_pixel;
        if data.len() < image_size {
            return Err(TgaError::Truncated);
        }

        let mut pixels = vec![Color::TRANSPARENT; width as usize * height as usize];
        /* rows are stored bottom to top, pixels as BGR(A) */
        for y in 0..height as usize {
            for x in 0..width as usize {
                let pos = (y * width as usize + x) * bytes_per_pixel;
                let alpha = if bytes_per_pixel == 4 { data[pos + 3] } else { 255 };
                let row = height as usize - y - 1;
                pixels[row * width as usize + x] =
                    Color::rgba(data[pos + 2], data[pos + 1], data[pos], alpha);
            }
        }

        Ok(Image::from_pixels(width, height, pixels))
    }

    /// Encodes the image as a 24-bit TGA; the alpha channel is not persisted
    pub fn to_tga_bytes(&self) -> Result<Vec<u8>, TgaError> {
        if self.width == 0 || self.height == 0 {
            return Err(TgaError::ZeroSize);
        }

        let info = TgaInfo {
            width: U16::new(self.width as u16),
            height: U16::new(self.height as u16),
            bpp: 24,
            descriptor: 0,
        };

        let mut out =
            Vec::with_capacity(TGA_SIGNATURE.len() + size_of::<TgaInfo>() + self.pixels.len() * 3);
        out.extend_from_slice(&TGA_SIGNATURE);
        out.extend_from_slice(info.as_bytes());
        /* rows go out bottom to top, pixels as BGR */
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let c = self.get(x, y);
                out.extend_from_slice(&[c.b, c.g, c.r]);
            }
        }

        Ok(out)
    }

    /// Loads an uncompressed TGA file, replacing this image's dimensions
    /// and content. On failure the image is left untouched.
    pub fn load_tga(&mut self, path: impl AsRef<Path>) -> Result<(), TgaError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let image = Image::from_tga_bytes(&bytes)?;
        self.width = image.width;
        self.height = image.height;
        self.pixels = image.pixels;
        log!("image loaded: {}", path.display());
        Ok(())
    }

    /// Saves the image as an uncompressed 24-bit TGA file
    pub fn save_tga(&self, path: impl AsRef<Path>) -> Result<(), TgaError> {
        let bytes = self.to_tga_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
