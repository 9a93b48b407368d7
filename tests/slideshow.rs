//! Runs the frame loop on the host: sequencing, decoding and composition
//! against an in-memory surface.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};
use st7789v_slideshow::{
    Bitmap,
    Orientation,
    Slide,
    Slideshow,
    Surface,
    clock::UtcTimestamp,
    config::{
        COUNTER_POS,
        PIXELS,
        SCREEN_SIZE,
        TIMESTAMP_POS,
    },
    slideshow::compose,
    surface::BACKGROUND,
};

const NOW: u64 = 1_792_108_800;

fn white_in_band(surface: &Surface<'_>, top: Point, height: i32) -> usize {
    (top.y..top.y + height)
        .flat_map(|y| (0..SCREEN_SIZE.width as i32).map(move |x| Point::new(x, y)))
        .filter(|&p| surface.pixel(p) == Some(Rgb565::WHITE))
        .count()
}

#[test]
fn ten_frames_rotate_once_to_landscape() {
    let mut buf = vec![BACKGROUND; PIXELS];
    let mut surface = Surface::new(&mut buf, SCREEN_SIZE);
    let mut show = Slideshow::new(Orientation::Portrait);

    let mut requests = Vec::new();
    let mut slides = Vec::new();
    for _ in 0..10 {
        let frame = show.next_frame();
        requests.extend(frame.rotate_to);
        slides.push(frame.slide);

        let bitmap = Bitmap::decode_jpeg(frame.slide.bytes(), usize::MAX).unwrap();
        compose(&mut surface, &bitmap, &frame, UtcTimestamp::from_unix(NOW));
    }

    assert_eq!(requests, [Orientation::Landscape]);
    assert_eq!(show.orientation(), Orientation::Landscape);
    assert_eq!(show.count(), 11);
    let expected: Vec<Slide> = (1..=10).map(Slide::for_count).collect();
    assert_eq!(slides, expected);
    assert_eq!(slides[0], Slide::WaterfallCostaRica);
}

#[test]
fn tall_image_is_clamped_and_overlay_drawn() {
    let mut buf = vec![Rgb565::RED; PIXELS];
    let mut surface = Surface::new(&mut buf, SCREEN_SIZE);
    let mut show = Slideshow::new(Orientation::Portrait);

    // Counter 1 selects the 200×280 waterfall
    let frame = show.next_frame();
    let bitmap = Bitmap::decode_jpeg(frame.slide.bytes(), usize::MAX).unwrap();
    assert!(bitmap.height() > SCREEN_SIZE.height);
    compose(&mut surface, &bitmap, &frame, UtcTimestamp::from_unix(NOW));

    // Image covers the left 200 columns down to the last row
    let sky = surface.pixel(Point::new(10, 10)).unwrap();
    assert!(sky.b() > sky.r(), "{sky:?}");
    assert_ne!(surface.pixel(Point::new(10, 239)), Some(BACKGROUND));
    // Columns past the image were cleared, not left over
    assert_eq!(surface.pixel(Point::new(220, 10)), Some(BACKGROUND));
    assert_eq!(surface.pixel(Point::new(239, 100)), Some(BACKGROUND));

    assert!(white_in_band(&surface, TIMESTAMP_POS, 15) > 0);
    assert!(white_in_band(&surface, COUNTER_POS, 15) > 0);
}

#[test]
fn overlay_stays_put_after_rotation() {
    let mut show = Slideshow::new(Orientation::Portrait);
    let mut rotated = None;
    for _ in 0..10 {
        let frame = show.next_frame();
        if frame.rotate_to.is_some() {
            rotated = Some(frame);
        }
    }
    let rotated = rotated.unwrap();
    let plain = Slideshow::new(Orientation::Portrait).next_frame();

    let bitmap = Bitmap::decode_jpeg(Slide::Wallpaper.bytes(), usize::MAX).unwrap();
    let render = |frame| {
        let mut buf = vec![BACKGROUND; PIXELS];
        let mut surface = Surface::new(&mut buf, SCREEN_SIZE);
        compose(&mut surface, &bitmap, &frame, UtcTimestamp::from_unix(NOW));
        drop(surface);
        buf
    };

    // Same counter text width, so the timestamp band must match exactly
    let a = render(rotated);
    let b = render(plain);
    let band = |buf: &[Rgb565]| {
        let start = TIMESTAMP_POS.y as usize * SCREEN_SIZE.width as usize;
        buf[start..start + 15 * SCREEN_SIZE.width as usize].to_vec()
    };
    assert_eq!(band(&a), band(&b));
}
