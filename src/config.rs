//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Native width of the common HX8357 panel in portrait orientation
pub const HX8357_TFTWIDTH: u16 = 320;

/// Native height of the common HX8357 panel in portrait orientation
pub const HX8357_TFTHEIGHT: u16 = 480;

/// Default SPI clock used when opening the bus (16 MHz)
pub const DEFAULT_SPI_CLOCK_HZ: u32 = 16_000_000;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// Both portrait (320x480) and landscape (480x320) panel variants are
    /// accepted, as are smaller glass cut from the same controller.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width or height is 0
    /// - the short side exceeds MAX_SOURCE_OUTPUTS (320)
    /// - the long side exceeds MAX_GATE_OUTPUTS (480)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if width.min(height) > MAX_SOURCE_OUTPUTS || width.max(height) > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width and height swapped
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Number of pixels covered by the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(x, y)` lies on the panel
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: HX8357_TFTWIDTH,
            height: HX8357_TFTHEIGHT,
        }
    }
}

/// Display rotation relative to native orientation
///
/// Any `u8` maps onto a rotation through `value % 4` with `Rotation::from`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Native panel dimensions (rotation 0)
    pub dimensions: Dimensions,
    /// Rotation applied at the end of initialization
    pub rotation: Rotation,
    /// SPI clock the host should open the bus with
    ///
    /// The driver does not program the clock itself; embedded-hal
    /// `SpiDevice` implementations fix it at construction.
    pub spi_clock_hz: u32,
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        self.rotation.apply(self.dimensions)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use hx8357::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(480, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .rotation(Rotation::Rotate90)
///     .spi_clock_hz(30_000_000)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Native panel dimensions
    dimensions: Dimensions,
    /// Rotation applied after initialization
    rotation: Rotation,
    /// SPI clock in Hz
    spi_clock_hz: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // 320x480 portrait panel
            dimensions: Dimensions::default(),
            rotation: Rotation::Rotate0,
            spi_clock_hz: DEFAULT_SPI_CLOCK_HZ,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set native panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the rotation applied after initialization
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the SPI clock in Hz
    pub fn spi_clock_hz(mut self, hz: u32) -> Self {
        self.spi_clock_hz = hz;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidSpiClock` if the SPI clock is zero
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.spi_clock_hz == 0 {
            return Err(BuilderError::InvalidSpiClock(self.spi_clock_hz));
        }
        Ok(Config {
            dimensions: self.dimensions,
            rotation: self.rotation,
            spi_clock_hz: self.spi_clock_hz,
        })
    }
}
