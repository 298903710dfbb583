//! Logging-Makros für den Core
//!
//! Leiten an defmt weiter, wenn das `defmt` Feature aktiv ist.
//! Ohne Feature (z.B. Host-Tests) werden sie zu nichts kompiliert.
#![allow(unused_macros)]

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}
