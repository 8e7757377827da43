//! Wall-clock timing for the opt-in step/paint metrics

/// Host clock in ms: `Date.now()` in the browser, monotonic time since first
/// use natively.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `f`; when `enabled`, also report how long it took in ms (0 otherwise).
pub(crate) fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let start = now_ms();
    let out = f();
    (out, (now_ms() - start).max(0.0))
}
