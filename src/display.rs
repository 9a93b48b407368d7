//! ST7789V panel: 240×240 LCD over SPI with DMA, plus its backlight.

use embedded_graphics::prelude::Size;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::{
    BacklightResources,
    DisplayResources,
    Error,
    Orientation,
    Surface,
    config::{
        SCREEN_H,
        SCREEN_ORIGIN,
        SCREEN_SIZE,
        SCREEN_W,
        SPI_FREQUENCY_MHZ,
    },
    surface::BITS_PER_PIXEL,
};

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The ST7789V controller as driven by `mipidsi`.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

/// Bytes staged per SPI transfer. Each DMA direction gets the same amount.
const TRANSFER_BUF: usize = 4096;

/// The physical display: controller handle, backlight and the orientation
/// last requested.
pub struct Panel {
    display: Display<'static>,
    /// Backlight LED on a plain GPIO, high = lit.
    backlight: Output<'static>,
    orientation: Orientation,
}

impl Panel {
    /// Bring up the SPI bus, reset and initialise the controller, then turn
    /// the backlight on.
    pub fn new(
        res: DisplayResources<'static>,
        backlight: BacklightResources<'static>,
    ) -> Result<Self, Error> {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(TRANSFER_BUF);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).map_err(|_| Error::Config)?;
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).map_err(|_| Error::Config)?;

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let rst = Output::new(res.rst, Level::High, OutputConfig::default());

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default()
                .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ)),
        )
        .map_err(|_| Error::Config)?
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).map_err(|_| Error::Config)?;

        let buffer = crate::mk_static!([u8; TRANSFER_BUF], [0_u8; TRANSFER_BUF]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        let orientation = Orientation::default();
        let display = mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(SCREEN_W as u16, SCREEN_H as u16)
            .display_offset(SCREEN_ORIGIN.x as u16, SCREEN_ORIGIN.y as u16)
            .invert_colors(mipidsi::options::ColorInversion::Inverted)
            .orientation(orientation.into())
            .init(&mut delay)
            .map_err(|_| Error::Transport)?;

        let backlight = Output::new(backlight.led, Level::High, OutputConfig::default());

        Ok(Self { display, backlight, orientation })
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Re-address the panel. The surface keeps its size; only the mapping
    /// of surface pixels onto the glass changes.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error> {
        self.display
            .set_orientation(orientation.into())
            .map_err(|_| Error::Transport)?;
        self.orientation = orientation;
        Ok(())
    }

    /// Configured resolution, independent of orientation.
    #[must_use]
    pub const fn size(&self) -> Size {
        SCREEN_SIZE
    }

    #[must_use]
    pub const fn bits_per_pixel(&self) -> usize {
        BITS_PER_PIXEL
    }

    #[must_use]
    pub fn backlight_on(&self) -> bool {
        self.backlight.is_set_high()
    }

    /// Transmit the whole surface to the glass.
    pub fn flush(&mut self, surface: &Surface<'_>) -> Result<(), Error> {
        surface.flush(&mut self.display).map_err(|_| Error::Transport)
    }
}
