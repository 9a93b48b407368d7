//! Font and images compiled into the firmware.

use embedded_graphics::mono_font::{
    MonoFont,
    iso_8859_1::FONT_9X15,
};

/// Monospace font for the overlay text.
pub const FONT: &MonoFont<'static> = &FONT_9X15;

const WALLPAPER: &[u8] = include_bytes!("../assets/wallpaper.jpg");
const WATERFALL_COSTA_RICA: &[u8] = include_bytes!("../assets/waterfall_costa_rica.jpg");

/// One of the two embedded JPEG images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "board", derive(defmt::Format))]
pub enum Slide {
    Wallpaper,
    WaterfallCostaRica,
}

impl Slide {
    /// Even counters show the wallpaper, odd ones the waterfall.
    #[must_use]
    pub const fn for_count(count: u32) -> Self {
        if count % 2 == 0 {
            Self::Wallpaper
        } else {
            Self::WaterfallCostaRica
        }
    }

    /// Raw JPEG bytes.
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::Wallpaper => WALLPAPER,
            Self::WaterfallCostaRica => WATERFALL_COSTA_RICA,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wallpaper => "wallpaper",
            Self::WaterfallCostaRica => "waterfall_costa_rica",
        }
    }
}
