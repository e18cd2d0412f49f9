//! Millisecond stopwatch: `Date.now()` in the browser, `Instant` natively.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[inline]
fn mark() -> Mark {
    #[cfg(target_arch = "wasm32")]
    return js_sys::Date::now();
    #[cfg(not(target_arch = "wasm32"))]
    return std::time::Instant::now();
}

#[inline]
fn ms_since(mark: Mark) -> f64 {
    #[cfg(target_arch = "wasm32")]
    return js_sys::Date::now() - mark;
    #[cfg(not(target_arch = "wasm32"))]
    return mark.elapsed().as_secs_f64() * 1000.0;
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer(Mark);

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer(mark())
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_since(self.0)
    }

    /// Run `f`, timing it only when `enabled`; the time is 0 otherwise.
    pub(crate) fn measure<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
        if !enabled {
            return (f(), 0.0);
        }
        let timer = Self::start();
        let out = f();
        (out, timer.elapsed_ms())
    }
}
