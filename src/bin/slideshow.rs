//! Cycles two embedded JPEGs on the ST7789V panel with a clock overlay.
//!
//! Every 100 ms a frame is decoded, composed off-screen and flushed:
//! the image at the origin, the UTC time at (2,200) and the frame counter
//! at (2,220). Every tenth frame the panel rotates a quarter turn.
//!
//! Set the start time of the clock with `SLIDESHOW_EPOCH` (Unix seconds);
//! it defaults to the time of the build.
//!
//! ```sh
//! cargo run --release --features board
//! SLIDESHOW_EPOCH=1792108800 cargo run --release --features board
//! ```

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use embedded_graphics::pixelcolor::Rgb565;
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use static_cell::ConstStaticCell;
#[allow(clippy::wildcard_imports)]
use st7789v_slideshow::*;
use st7789v_slideshow::{
    clock::UtcTimestamp,
    config::{
        FRAME_INTERVAL_MS,
        HEAP_SIZE,
        PIXELS,
        SCREEN_SIZE,
    },
    memory::{
        self,
        MemoryKind,
    },
    slideshow::compose,
    surface::BACKGROUND,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

/// Backing store for the full-screen surface. Zero-initialised, so it lands
/// in `.bss` rather than on the stack.
static FRAME_BUFFER: ConstStaticCell<[Rgb565; PIXELS]> =
    ConstStaticCell::new([BACKGROUND; PIXELS]);

/// Decode, compose and show one frame.
fn render(panel: &mut Panel, surface: &mut Surface<'_>, frame: &Frame) -> Result<(), Error> {
    if let Some(orientation) = frame.rotate_to {
        panel.set_orientation(orientation)?;
        info!("Orientation {}", orientation);
    }

    // Released at the end of this function on every path
    let largest = memory::query(MemoryKind::Internal).largest;
    let bitmap = Bitmap::decode_jpeg(frame.slide.bytes(), largest)?;
    info!(
        "Create Bitmap Count {} ({}: {}x{}, {} bytes)",
        frame.count,
        frame.slide.name(),
        bitmap.width(),
        bitmap.height(),
        bitmap.byte_len()
    );
    memory::report("Memory");

    compose(surface, &bitmap, frame, UtcTimestamp::now());
    panel.flush(surface)
}

#[embassy_executor::task]
async fn slideshow_task(panel: &'static mut Panel, surface: &'static mut Surface<'static>) {
    info!("Slideshow task started");

    let mut show = Slideshow::new(panel.orientation());
    loop {
        let frame = show.next_frame();
        if let Err(err) = render(panel, surface, &frame) {
            // Leave the last good frame on the glass
            error!("Frame {} failed: {}", frame.count, err);
            break;
        }
        Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
    }

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = st7789v_slideshow::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: HEAP_SIZE);
    memory::report("Start");

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let panel = match Panel::new(resources.display, resources.backlight) {
        Ok(panel) => mk_static!(Panel, panel),
        Err(err) => panic!("Display init failed: {}", err),
    };
    info!("Orientation {}", panel.orientation());
    info!(
        "Display Init Size: {}x{} Pixel Size: {} Backlight: {}",
        panel.size().width,
        panel.size().height,
        panel.bits_per_pixel(),
        panel.backlight_on()
    );

    let surface = mk_static!(Surface<'static>, Surface::new(FRAME_BUFFER.take(), SCREEN_SIZE));
    surface.clear();
    if let Err(err) = panel.flush(surface) {
        panic!("Initial clear failed: {}", err);
    }

    spawner.must_spawn(slideshow_task(panel, surface));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
