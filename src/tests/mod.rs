mod resolver_tests;
mod search_tests;
mod builtin_catalog_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(super) fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}
