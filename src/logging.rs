//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled these expand to nothing, so callers
//! never need their own `cfg` guards.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    };
}

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($arg)*);
        }
    };
}
