/// Log a warning through `tracing` when the feature is enabled, discard it otherwise
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(not(feature = "tracing"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}

/// Log a debug event through `tracing` when the feature is enabled, discard it otherwise
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(not(feature = "tracing"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($actual:expr, $expected:expr, $epsilon:expr) => {
        let eps = $epsilon as f64;
        let act = $actual as f64;
        let exp = $expected as f64;
        let diff = (act - exp).abs();
        if diff > eps {
            panic!(
                "Actual {} Expected {} diff {} Epsilon {}",
                $actual, $expected, diff, eps
            );
        }
    };
}
