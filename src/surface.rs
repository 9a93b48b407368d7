//! Full-screen drawing surface.
//!
//! An in-RAM RGB565 frame the size of the panel. Frames are composed here
//! and pushed to the display in one [`Surface::flush`], so the panel never
//! shows a half-drawn frame.

use core::convert::Infallible;

use embedded_graphics::{
    image::{
        Image,
        ImageDrawableExt as _,
    },
    mono_font::MonoTextStyle,
    pixelcolor::{
        Rgb565,
        raw::RawData,
    },
    prelude::*,
    primitives::Rectangle,
    text::{
        Baseline,
        Text,
    },
};

use crate::Bitmap;

/// Colour a cleared surface is filled with.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Colour depth of the surface and of the panel link.
pub const BITS_PER_PIXEL: usize = <<Rgb565 as PixelColor>::Raw as RawData>::BITS_PER_PIXEL;

pub struct Surface<'a> {
    pixels: &'a mut [Rgb565],
    size: Size,
}

impl<'a> Surface<'a> {
    /// Bind a pixel buffer to a surface of `size`.
    ///
    /// # Panics
    ///
    /// If the buffer does not hold exactly `size.width * size.height` pixels.
    pub fn new(pixels: &'a mut [Rgb565], size: Size) -> Self {
        assert_eq!(
            pixels.len(),
            (size.width * size.height) as usize,
            "surface buffer does not match its size"
        );
        Self { pixels, size }
    }

    /// Fill the whole surface with [`BACKGROUND`].
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Copy `src` (in bitmap coordinates) of `bitmap` to `dest`.
    ///
    /// Anything that lands outside the surface is dropped.
    pub fn draw_image(&mut self, dest: Point, bitmap: &Bitmap, src: &Rectangle) {
        let raw = bitmap.as_raw();
        let area = raw.sub_image(src);
        let Ok(()) = Image::new(&area, dest).draw(&mut self.color_converted());
    }

    /// Draw `text` with its top-left corner at `pos`.
    pub fn draw_text(&mut self, text: &str, style: MonoTextStyle<'_, Rgb565>, pos: Point) {
        let Ok(_) = Text::with_baseline(text, pos, style, Baseline::Top).draw(self);
    }

    /// Push the whole frame to `target` in a single `fill_contiguous` call.
    pub fn flush<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::new(Point::zero(), self.size);
        target.fill_contiguous(&area, self.pixels.iter().copied())
    }

    /// Colour at `p`, or None outside the surface.
    #[must_use]
    pub fn pixel(&self, p: Point) -> Option<Rgb565> {
        self.index(p).map(|i| self.pixels[i])
    }

    fn index(&self, p: Point) -> Option<usize> {
        let x = u32::try_from(p.x).ok()?;
        let y = u32::try_from(p.y).ok()?;
        (x < self.size.width && y < self.size.height)
            .then(|| (y * self.size.width + x) as usize)
    }
}

impl OriginDimensions for Surface<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Surface<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index(p) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
