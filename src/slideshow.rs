//! Frame sequencing and composition.
//!
//! [`Slideshow`] decides what each frame shows; [`compose`] paints it onto
//! a [`Surface`]. Neither touches hardware.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use heapless::String;

use crate::{
    Bitmap,
    Orientation,
    OrientationCycle,
    Slide,
    Surface,
    clock::UtcTimestamp,
    config::{
        COUNTER_POS,
        ROTATE_EVERY,
        TIMESTAMP_POS,
    },
    resources::FONT,
};

/// Plan for a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Orientation to request before drawing, if this frame rotates.
    pub rotate_to: Option<Orientation>,
    pub slide: Slide,
    /// Counter value shown in the overlay.
    pub count: u32,
}

pub struct Slideshow {
    count: u32,
    orientation: OrientationCycle,
}

impl Slideshow {
    /// Counter starts at 1, panel in its initial orientation.
    #[must_use]
    pub const fn new(start: Orientation) -> Self {
        Self { count: 1, orientation: OrientationCycle::new(start) }
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation.current()
    }

    /// Plan the next frame and advance the counter.
    ///
    /// Rotation and slide are picked from the counter before it is
    /// incremented; the overlay shows the incremented value.
    pub fn next_frame(&mut self) -> Frame {
        let rotate_to = (self.count % ROTATE_EVERY == 0).then(|| self.orientation.advance());
        let slide = Slide::for_count(self.count);
        self.count = self.count.wrapping_add(1);
        Frame { rotate_to, slide, count: self.count }
    }
}

/// Part of `image` drawn at the surface origin: full width, height clamped
/// to the surface. Width is left alone; the surface clips what overhangs.
#[must_use]
pub fn source_area(image: Size, surface: Size) -> Rectangle {
    let height = if image.height > surface.height { surface.height } else { image.height };
    Rectangle::new(Point::zero(), Size::new(image.width, height))
}

/// Paint `frame` onto `surface`: background, bitmap, timestamp and counter.
pub fn compose(surface: &mut Surface<'_>, bitmap: &Bitmap, frame: &Frame, now: UtcTimestamp) {
    surface.clear();
    let src = source_area(bitmap.size(), surface.size());
    surface.draw_image(Point::zero(), bitmap, &src);

    let style = MonoTextStyle::new(FONT, Rgb565::WHITE);
    let mut line: String<32> = String::new();
    // Both lines fit in 32 bytes
    let _ = write!(line, "{now}");
    surface.draw_text(&line, style, TIMESTAMP_POS);

    line.clear();
    let _ = write!(line, "Count: {}", frame.count);
    surface.draw_text(&line, style, COUNTER_POS);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn rotates_only_on_multiples_of_ten() {
        let mut show = Slideshow::new(Orientation::Portrait);
        let rotations: Vec<(u32, Orientation)> = (0..45)
            .filter_map(|_| {
                let before = show.count();
                show.next_frame().rotate_to.map(|o| (before, o))
            })
            .collect();
        assert_eq!(
            rotations,
            [
                (10, Orientation::Landscape),
                (20, Orientation::Portrait180),
                (30, Orientation::Landscape180),
                (40, Orientation::Portrait),
            ]
        );
    }

    #[test]
    fn slides_follow_the_counter_before_increment() {
        let mut show = Slideshow::new(Orientation::Portrait);
        let frames: Vec<Frame> = (0..4).map(|_| show.next_frame()).collect();
        assert_eq!(frames[0].slide, Slide::WaterfallCostaRica);
        assert_eq!(frames[0].count, 2);
        assert_eq!(frames[1].slide, Slide::Wallpaper);
        assert_eq!(frames[1].count, 3);
        assert_eq!(frames[2].slide, Slide::WaterfallCostaRica);
        assert_eq!(frames[3].slide, Slide::Wallpaper);
    }

    #[test]
    fn clamps_height_but_never_width() {
        let screen = Size::new(240, 240);
        assert_eq!(source_area(Size::new(200, 280), screen).size, Size::new(200, 240));
        assert_eq!(source_area(Size::new(240, 100), screen).size, Size::new(240, 100));
        assert_eq!(source_area(Size::new(320, 240), screen).size, Size::new(320, 240));
        assert_eq!(source_area(Size::new(400, 500), screen).size, Size::new(400, 240));
        assert_eq!(source_area(Size::new(1, 1), screen).top_left, Point::zero());
    }
}
