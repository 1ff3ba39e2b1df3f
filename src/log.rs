// Diagnostics are compiled in only with the `tracing` feature. The wrappers
// keep the feature gate out of the algorithm code.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    }};
}
