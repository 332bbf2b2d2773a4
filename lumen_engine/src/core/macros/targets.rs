//! Log target definitions for the [`tracing`] crate, used in macros like [`tracing::debug`]
//!
//! Each target is prefixed with the crate name, so `SCENE = "scene"` expands to `"lumen_engine::scene"`,
//! which makes filtering with `RUST_LOG=lumen_engine::scene=trace` possible

#[macro_export]
macro_rules! tracing_targets {
    {$( $name:ident = $val:expr ),* $(,)?} => {
        $( pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val); )*
    };
}
