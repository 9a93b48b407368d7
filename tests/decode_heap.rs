//! Peak heap use of a JPEG decode stays inside the budget checked before
//! decoding. Kept in its own test binary: the counting allocator is global.

use std::{
    alloc::{
        GlobalAlloc,
        Layout,
        System,
    },
    sync::atomic::{
        AtomicUsize,
        Ordering,
    },
};

use st7789v_slideshow::{
    Bitmap,
    Slide,
};

struct Counting;

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

fn grow(by: usize) {
    let now = CURRENT.fetch_add(by, Ordering::SeqCst) + by;
    PEAK.fetch_max(now, Ordering::SeqCst);
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        grow(layout.size());
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        CURRENT.fetch_sub(layout.size(), Ordering::SeqCst);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if new_size > layout.size() {
            grow(new_size - layout.size());
        } else {
            CURRENT.fetch_sub(layout.size() - new_size, Ordering::SeqCst);
        }
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

#[test]
fn decode_peak_fits_the_checked_budget() {
    for slide in [Slide::Wallpaper, Slide::WaterfallCostaRica] {
        let base = CURRENT.load(Ordering::SeqCst);
        PEAK.store(base, Ordering::SeqCst);

        let bitmap = Bitmap::decode_jpeg(slide.bytes(), usize::MAX).unwrap();
        let peak = PEAK.load(Ordering::SeqCst) - base;
        let budget = Bitmap::heap_needed(bitmap.width() as usize, bitmap.height() as usize).unwrap();
        drop(bitmap);

        assert!(
            peak <= budget,
            "{}: decode peaked at {peak} bytes, budget {budget}",
            slide.name()
        );
    }
}
