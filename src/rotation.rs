//! Orientation mapping
//!
//! The HX8357 rotates its frame memory in hardware through the MADCTL register
//! (`0x36`). Each [`Rotation`] selects one fixed combination of the row/column
//! mirror and exchange bits, and either keeps or transposes the logical
//! width/height the driver clips against.
//!
//! | Rotation    | MADCTL            | Geometry   |
//! |-------------|-------------------|------------|
//! | `Rotate0`   | `MX \| MY` (0xC0) | native     |
//! | `Rotate90`  | `MV \| MY` (0xA0) | transposed |
//! | `Rotate180` | none (0x00)       | native     |
//! | `Rotate270` | `MX \| MV` (0x60) | transposed |
//!
//! ## Example
//!
//! ```
//! use hx8357::{Dimensions, Rotation};
//!
//! // Out-of-range values wrap around
//! assert_eq!(Rotation::from(5), Rotation::Rotate90);
//!
//! let native = Dimensions::new(320, 480).unwrap_or_default();
//! assert_eq!(Rotation::Rotate90.apply(native), native.transposed());
//! assert_eq!(Rotation::Rotate180.madctl(), 0x00);
//! ```

use crate::command::{MADCTL_MV, MADCTL_MX, MADCTL_MY, MADCTL_RGB};
use crate::config::{Dimensions, Rotation};

impl Rotation {
    /// MADCTL byte selecting this rotation
    pub fn madctl(self) -> u8 {
        match self {
            Rotation::Rotate0 => MADCTL_MX | MADCTL_MY | MADCTL_RGB,
            Rotation::Rotate90 => MADCTL_MV | MADCTL_MY | MADCTL_RGB,
            Rotation::Rotate180 => MADCTL_RGB,
            Rotation::Rotate270 => MADCTL_MX | MADCTL_MV | MADCTL_RGB,
        }
    }

    /// Whether this rotation exchanges rows and columns
    pub fn is_transposed(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }

    /// Logical dimensions of a panel with `native` dimensions in this rotation
    pub fn apply(self, native: Dimensions) -> Dimensions {
        if self.is_transposed() {
            native.transposed()
        } else {
            native
        }
    }

    /// Rotation index in `0..4`
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Rotation {
    fn from(value: u8) -> Self {
        match value % 4 {
            0 => Rotation::Rotate0,
            1 => Rotation::Rotate90,
            2 => Rotation::Rotate180,
            _ => Rotation::Rotate270,
        }
    }
}
