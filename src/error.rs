//! Fault categories surfaced by the slideshow.

use core::fmt;

/// Every way a frame (or startup) can fail. There is no retry: the caller
/// logs the fault and stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "board", derive(defmt::Format))]
pub enum Error {
    /// The SPI bus or its DMA buffers rejected the configuration.
    Config,
    /// A command or pixel transfer to the panel failed.
    Transport,
    /// The JPEG stream is malformed or uses a layout the decoder rejects.
    Decode,
    /// The decoded image would not fit in the free heap.
    OutOfMemory { needed: usize, available: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("bus configuration rejected"),
            Self::Transport => f.write_str("display transfer failed"),
            Self::Decode => f.write_str("malformed JPEG"),
            Self::OutOfMemory { needed, available } => {
                write!(f, "bitmap needs {needed} bytes, {available} free")
            }
        }
    }
}

impl core::error::Error for Error {}
