//! # st7789v-slideshow
//!
//! JPEG slideshow for a 240×240 ST7789V panel on an ESP32-S3.
//!
//! - **Panel**: ST7789V LCD over SPI with DMA, driven through `mipidsi`
//! - **Surface**: in-RAM RGB565 frame, composed off-screen and flushed whole
//! - **Bitmaps**: JPEG images embedded at build time, decoded per frame
//! - **Overlay**: UTC timestamp and frame counter in a monospace font
//! - **Memory**: heap statistics from `esp-alloc`
//!
//! The hardware side sits behind the `board` feature. Without it the crate
//! is the frame sequencer, surface and decoder, which build and test on the
//! host.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = st7789v_slideshow::init();
//! let resources = st7789v_slideshow::split_resources!(peripherals);
//!
//! let mut panel = st7789v_slideshow::Panel::new(resources.display, resources.backlight)?;
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bitmap;
pub mod clock;
pub mod config;
mod error;
pub mod memory;
mod orientation;
pub mod resources;
pub mod slideshow;
pub mod surface;

#[cfg(feature = "board")]
mod display;

pub use bitmap::Bitmap;
#[cfg(feature = "board")]
pub use display::{
    Display,
    Panel,
};
pub use error::Error;
pub use orientation::{
    Orientation,
    OrientationCycle,
};
pub use resources::Slide;
pub use slideshow::{
    Frame,
    Slideshow,
};
pub use surface::Surface;

/// Place a value in a `static` exactly once and hand out `&'static mut`.
#[cfg(feature = "board")]
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────
//
// SPI2 on its IO_MUX pins (CLK 12, MOSI 11, MISO 13, CS 10); DC, RST and
// backlight on free GPIOs.

#[cfg(feature = "board")]
esp_hal::assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            sck: GPIO12,
            mosi: GPIO11,
            miso: GPIO13,
            cs: GPIO10,
            dc: GPIO9,
            rst: GPIO14,
            spi: SPI2,
            dma: DMA_CH0,
        },
        backlight: BacklightResources<'d> {
            led: GPIO21,
        }
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the chip at full CPU clock and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[cfg(feature = "board")]
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(esp_hal::clock::CpuClock::max());
    esp_hal::init(config)
}
