use std::time::Duration;

/// Sleep on whichever timer the platform provides.
pub async fn sleep_ms(ms: u32) {
    let duration = Duration::from_millis(ms as u64);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
