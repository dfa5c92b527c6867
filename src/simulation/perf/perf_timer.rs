//! Millisecond stopwatch for perf stats: `js_sys::Date` in the browser,
//! `std::time::Instant` everywhere else.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[derive(Clone, Copy)]
pub(super) struct PerfTimer {
    start: Stamp,
}

impl PerfTimer {
    #[inline]
    pub(super) fn start() -> Self {
        PerfTimer { start: now() }
    }

    #[inline]
    pub(super) fn elapsed_ms(&self) -> f64 {
        since_ms(self.start)
    }
}

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(target_arch = "wasm32")]
fn since_ms(start: Stamp) -> f64 {
    js_sys::Date::now() - start
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn since_ms(start: Stamp) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
