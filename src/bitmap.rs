//! Decoded images.
//!
//! A [`Bitmap`] owns its pixel buffer on the heap. Dropping it gives the
//! memory back, so a bitmap created inside a frame is released when the
//! frame ends, whichever way it ends.

use alloc::vec::Vec;

use embedded_graphics::{
    image::ImageRaw,
    pixelcolor::Rgb888,
    prelude::Size,
};
use zune_jpeg::{
    JpegDecoder,
    zune_core::{
        colorspace::ColorSpace,
        options::DecoderOptions,
    },
};

use crate::Error;

/// Bytes per RGB888 pixel.
const BPP: usize = 3;

/// Decoder scratch per image column (MCU rows for three components plus
/// upsampling), on top of the output frame.
const SCRATCH_PER_COLUMN: usize = 80;

/// Fixed decoder state: Huffman and quantisation tables, component info.
const SCRATCH_FIXED: usize = 2048;

/// Decoded image, packed RGB888, row-major.
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wrap an already decoded RGB888 buffer.
    ///
    /// Returns None if the buffer length does not match the dimensions.
    #[must_use]
    pub fn from_rgb888(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(BPP)?;
        (pixels.len() == expected).then_some(Self { width, height, pixels })
    }

    /// Peak heap a decode of a `width` × `height` JPEG takes: the RGB888
    /// output plus the decoder's working buffers. None on overflow.
    #[must_use]
    pub fn heap_needed(width: usize, height: usize) -> Option<usize> {
        let output = width.checked_mul(height)?.checked_mul(BPP)?;
        let scratch = width.checked_mul(SCRATCH_PER_COLUMN)?.checked_add(SCRATCH_FIXED)?;
        output.checked_add(scratch)
    }

    /// Decode a JPEG stream.
    ///
    /// Headers are parsed first. If the decode would need more than
    /// `heap_free` bytes it is abandoned before any pixel buffer is
    /// allocated. Pass the largest free block, not the total, since the
    /// output frame is one allocation.
    pub fn decode_jpeg(data: &[u8], heap_free: usize) -> Result<Self, Error> {
        let options = DecoderOptions::default().jpeg_set_out_colorspace(ColorSpace::RGB);
        let mut decoder = JpegDecoder::new_with_options(data, options);
        decoder.decode_headers().map_err(|_| Error::Decode)?;

        let (width, height) = decoder.dimensions().ok_or(Error::Decode)?;
        let needed = Self::heap_needed(width, height).ok_or(Error::Decode)?;
        if needed > heap_free {
            return Err(Error::OutOfMemory { needed, available: heap_free });
        }

        let pixels = decoder.decode().map_err(|_| Error::Decode)?;
        let width = u32::try_from(width).map_err(|_| Error::Decode)?;
        let height = u32::try_from(height).map_err(|_| Error::Decode)?;
        Self::from_rgb888(width, height, pixels).ok_or(Error::Decode)
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size of the pixel buffer in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// Borrow the pixels as an `embedded-graphics` image.
    #[must_use]
    pub fn as_raw(&self) -> ImageRaw<'_, Rgb888> {
        ImageRaw::new(&self.pixels, self.width)
    }
}
