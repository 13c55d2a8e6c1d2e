pub mod analytics;
pub mod files;
pub mod seed;

pub use analytics::Analytics;
pub use files::FileStore;

/// Cosmetic pacing so the UI behaves like it is talking to a network.
/// Compiled out off-wasm, which keeps the test suite instant.
pub(crate) async fn simulate_latency(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}
