//! Compile-time tunables for the slideshow.
//!
//! Pin numbers live next to the other pin assignments in the crate root.

use embedded_graphics::prelude::{
    Point,
    Size,
};

/// Panel resolution as configured at init. The surface keeps this size in
/// every orientation.
pub const SCREEN_W: u32 = 240;
pub const SCREEN_H: u32 = 240;
pub const SCREEN_SIZE: Size = Size::new(SCREEN_W, SCREEN_H);

/// Top-left corner of the panel's visible window.
pub const SCREEN_ORIGIN: Point = Point::zero();

/// Pixels in one full-screen frame.
pub const PIXELS: usize = (SCREEN_W * SCREEN_H) as usize;

/// SPI clock for the ST7789V. The controller is rated for 62.5 MHz writes.
pub const SPI_FREQUENCY_MHZ: u32 = 40;

/// Pause between two frames.
pub const FRAME_INTERVAL_MS: u64 = 100;

/// An orientation change is requested whenever the frame counter is a
/// multiple of this.
pub const ROTATE_EVERY: u32 = 10;

/// Overlay anchors (top-left of the text box). Tuned for 240×240 and not
/// re-derived after a rotation.
pub const TIMESTAMP_POS: Point = Point::new(2, 200);
pub const COUNTER_POS: Point = Point::new(2, 220);

/// Heap handed to `esp-alloc`. Decoded bitmaps live here.
pub const HEAP_SIZE: usize = 200 * 1024;

/// Unix time the on-screen clock starts from at boot.
///
/// Taken from `SLIDESHOW_EPOCH` at build time; the build script fills it in
/// with the build host's clock when it is not set explicitly.
pub const BOOT_EPOCH: u64 = match option_env!("SLIDESHOW_EPOCH") {
    Some(s) => match parse_decimal(s) {
        Some(v) => v,
        None => 0,
    },
    None => 0,
};

/// Parse an unsigned decimal string at const time.
/// Returns None on an empty string, a non-digit or overflow.
const fn parse_decimal(s: &str) -> Option<u64> {
    let b = s.as_bytes();
    if b.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    let mut i = 0;
    while i < b.len() {
        let c = b[i];
        if !c.is_ascii_digit() {
            return None;
        }
        let Some(shifted) = value.checked_mul(10) else { return None };
        let Some(next) = shifted.checked_add((c - b'0') as u64) else { return None };
        value = next;
        i += 1;
    }
    Some(value)
}
