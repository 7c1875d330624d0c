use {
    std::panic::PanicHookInfo,
    tracing_subscriber::{EnvFilter, prelude::*, util::SubscriberInitExt},
};

/// Initializes the tracing subscriber shared by the binary and tests.
/// `env_filter` has similar syntax to env_logger.
pub fn initialize(env_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::new(env_filter)))
        .init();
    std::panic::set_hook(Box::new(tracing_panic_hook));
}

/// Panic hook that prints roughly the same message as the default panic hook
/// but uses tracing::error instead of stderr, so panics end up in the log
/// stream with everything else.
fn tracing_panic_hook(panic: &PanicHookInfo) {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!("thread '{name}' {panic}\nstack backtrace:\n{backtrace}");
}
