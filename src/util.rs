static INIT_ONCE: std::sync::Once = std::sync::Once::new();

/// Initialize the tracing subscriber once, honoring `RUST_LOG`.
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
    });
}
