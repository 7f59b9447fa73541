//! Initialization that needs to be done on startup

/// Performs any global state initialization that needs to be done before decoding images.
/// Safe to call more than once.
pub fn init() {
    // diagnostics only; user-facing progress goes to stdout regardless of the filter
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .try_init();

    #[cfg(feature = "jxl")]
    jxl_oxide::integration::register_image_decoding_hook();
}
