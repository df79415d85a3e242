//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-bounds drawing is never an error: pixels and rectangles outside the
//! panel are clipped or skipped silently.
//!
//! ## Example
//!
//! ```
//! use hx8357::{BuilderError, Builder, Dimensions};
//!
//! // Larger than the controller's 320x480 outputs
//! let result = Dimensions::new(480, 480);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // A zero SPI clock cannot be used to open the bus
//! let result = Builder::new().spi_clock_hz(0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidSpiClock(0))));
//! ```

use crate::interface::DisplayInterface;

/// Number of source outputs driven by the HX8357 (short side of the panel)
pub const MAX_SOURCE_OUTPUTS: u16 = 320;

/// Number of gate outputs driven by the HX8357 (long side of the panel)
pub const MAX_GATE_OUTPUTS: u16 = 480;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// Initialization failures are reported separately from steady-state drawing
/// failures so the caller can decide whether setup has to be re-run.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO) during a drawing or rotation operation
    ///
    /// The controller may be left with a partially written window. Re-issue
    /// the operation to restore a known picture.
    Interface(I::Error),
    /// Interface error (SPI/GPIO) while running the power-on sequence
    ///
    /// The driver is not ready afterwards; call
    /// [`Display::init`](crate::display::Display::init) again or treat the
    /// display as unavailable.
    Init(I::Error),
    /// The driver has not been successfully initialized
    ///
    /// Returned without touching the bus by every drawing and rotation
    /// operation until [`Display::init`](crate::display::Display::init)
    /// completes.
    NotInitialized,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Init(e) => write!(f, "Initialization failed: {e:?}"),
            Self::NotInitialized => write!(f, "Display not initialized"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Native width in pixels requested
        width: u16,
        /// Native height in pixels requested
        height: u16,
    },
    /// SPI clock of 0 Hz
    InvalidSpiClock(u32),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (panel must fit {MAX_SOURCE_OUTPUTS}x{MAX_GATE_OUTPUTS} in either orientation)"
            ),
            Self::InvalidSpiClock(hz) => write!(f, "Invalid SPI clock: {hz} Hz"),
        }
    }
}

impl core::error::Error for BuilderError {}
