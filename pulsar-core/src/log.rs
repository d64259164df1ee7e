// Forward to defmt when enabled; otherwise only borrow-check the arguments.

macro_rules! debug {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
        #[cfg(not(feature = "defmt"))]
        let _ = ($($arg)+);
    }};
}

macro_rules! info {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
        #[cfg(not(feature = "defmt"))]
        let _ = ($($arg)+);
    }};
}

macro_rules! warning {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
        #[cfg(not(feature = "defmt"))]
        let _ = ($($arg)+);
    }};
}

pub(crate) use {debug, info, warning};
