//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{CASET, INIT_SCRIPT, INVOFF, INVON, MADCTL, PASET, RAMWR, ScriptStep};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::{DisplayInterface, FILL_CHUNK_BYTES};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the HX8357
///
/// Owns its interface, so every operation runs to completion before the next
/// one can start. Drawing and rotation are rejected with
/// [`Error::NotInitialized`] until [`init`](Self::init) has succeeded.
///
/// Coordinates are in the current (rotated) orientation. Drawing outside the
/// panel is clipped silently.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Active rotation
    rotation: Rotation,
    /// Active (rotated) dimensions
    size: Dimensions,
    /// Whether the power-on script has completed
    is_ready: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            size: config.dimensions,
            rotation: Rotation::Rotate0,
            config,
            is_ready: false,
        }
    }

    /// Perform hardware reset (if wired) and run the power-on sequence
    ///
    /// Blocks for at least 500ms in total; the settle delays are hardware
    /// minimums and cannot be shortened. On success the rotation from
    /// [`Config::rotation`] is active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if any bus write fails. The driver is then not
    /// ready and the whole sequence must be re-run.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.is_ready = false;
        log::debug!(
            "hx8357: init {}x{}",
            self.config.dimensions.width,
            self.config.dimensions.height
        );

        if let Err(e) = self.power_on(delay) {
            log::warn!("hx8357: init failed: {e:?}");
            return Err(Error::Init(e));
        }

        self.rotation = Rotation::Rotate0;
        self.size = self.config.dimensions;
        self.is_ready = true;

        let rotation = self.config.rotation;
        if rotation != Rotation::Rotate0 {
            if let Err(e) = self.apply_rotation(rotation) {
                self.is_ready = false;
                log::warn!("hx8357: init failed: {e:?}");
                return Err(Error::Init(e));
            }
        }

        log::debug!("hx8357: ready");
        Ok(())
    }

    fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I::Error> {
        self.interface.reset(delay)?;
        self.run_script(INIT_SCRIPT, delay)
    }

    /// Send each step's command and data, then wait its settle time
    fn run_script<D: DelayNs>(
        &mut self,
        script: &[ScriptStep],
        delay: &mut D,
    ) -> Result<(), I::Error> {
        for step in script {
            log::trace!("hx8357: cmd {:#04x} ({} bytes)", step.command, step.data.len());
            self.interface.send_command(step.command)?;
            if !step.data.is_empty() {
                self.interface.send_data(step.data)?;
            }
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms);
            }
        }
        Ok(())
    }

    /// Whether [`init`](Self::init) has completed successfully
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    /// Send a command to the display controller
    ///
    /// Raw access; does not check readiness.
    pub fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    ///
    /// Raw access; does not check readiness.
    pub fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Set the address window for the next pixel burst and start a memory write
    ///
    /// Coordinates are inclusive. The caller guarantees `x0 <= x1 < width`
    /// and `y0 <= y1 < height`; the drawing methods clip before calling this.
    /// After it returns, every data byte pair is written as one pixel,
    /// left-to-right, top-to-bottom, starting at `(x0, y0)`.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        log::trace!("hx8357: window ({x0},{y0})-({x1},{y1})");
        let [x0_hi, x0_lo] = x0.to_be_bytes();
        let [x1_hi, x1_lo] = x1.to_be_bytes();
        let [y0_hi, y0_lo] = y0.to_be_bytes();
        let [y1_hi, y1_lo] = y1.to_be_bytes();

        self.send_command(CASET)?;
        self.send_data(&[x0_hi, x0_lo, x1_hi, x1_lo])?;

        self.send_command(PASET)?;
        self.send_data(&[y0_hi, y0_lo, y1_hi, y1_lo])?;

        self.send_command(RAMWR)
    }

    /// Draw a single pixel
    ///
    /// Pixels outside the panel are skipped without touching the bus.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        self.ensure_ready()?;
        if !self.size.contains(x, y) {
            return Ok(());
        }
        self.set_window(x, y, x, y)?;
        self.send_data(&color.to_be_bytes())
    }

    /// Fill a rectangle with a solid color
    ///
    /// Nothing is drawn if `(x, y)` is off the panel or the rectangle is
    /// empty. A rectangle that runs past the right or bottom edge is clamped
    /// to the panel.
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> DisplayResult<I> {
        self.ensure_ready()?;
        if !self.size.contains(x, y) || w == 0 || h == 0 {
            return Ok(());
        }

        let w = w.min(self.size.width - x);
        let h = h.min(self.size.height - y);

        self.set_window(x, y, x + w - 1, y + h - 1)?;
        self.interface
            .send_data_repeated(&color.to_be_bytes(), w as usize * h as usize)
            .map_err(Error::Interface)
    }

    /// Fill the whole panel with a solid color
    ///
    /// Uses the current rotated dimensions.
    pub fn fill_screen(&mut self, color: Color) -> DisplayResult<I> {
        self.fill_rect(0, 0, self.size.width, self.size.height, color)
    }

    /// Write a solid color to every pixel of the panel
    ///
    /// Always addresses the full panel first, so the result does not depend
    /// on whatever window a previous operation left behind. Same bus traffic
    /// as [`fill_screen`](Self::fill_screen).
    pub fn draw_color(&mut self, color: Color) -> DisplayResult<I> {
        self.ensure_ready()?;
        if self.size.pixel_count() == 0 {
            return Ok(());
        }
        let (width, height) = (self.size.width, self.size.height);
        self.set_window(0, 0, width - 1, height - 1)?;
        self.interface
            .send_data_repeated(&color.to_be_bytes(), self.size.pixel_count())
            .map_err(Error::Interface)
    }

    /// Draw a horizontal line `w` pixels long starting at `(x, y)`
    pub fn draw_hline(&mut self, x: u16, y: u16, w: u16, color: Color) -> DisplayResult<I> {
        self.fill_rect(x, y, w, 1, color)
    }

    /// Draw a vertical line `h` pixels long starting at `(x, y)`
    pub fn draw_vline(&mut self, x: u16, y: u16, h: u16, color: Color) -> DisplayResult<I> {
        self.fill_rect(x, y, 1, h, color)
    }

    /// Stream caller-supplied pixels into the window `(x0, y0)-(x1, y1)`
    ///
    /// Pixels are consumed in row-major order. No clipping is done: the
    /// window must lie on the panel, and the iterator should yield
    /// `(x1 - x0 + 1) * (y1 - y0 + 1)` colors. Extra colors wrap around
    /// inside the window.
    pub fn draw_raw<P>(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, pixels: P) -> DisplayResult<I>
    where
        P: IntoIterator<Item = Color>,
    {
        self.ensure_ready()?;
        self.set_window(x0, y0, x1, y1)?;

        let mut buffer = [0u8; FILL_CHUNK_BYTES];
        let mut len = 0;
        for color in pixels {
            let [hi, lo] = color.to_be_bytes();
            buffer[len] = hi;
            buffer[len + 1] = lo;
            len += 2;
            if len == FILL_CHUNK_BYTES {
                self.send_data(&buffer)?;
                len = 0;
            }
        }
        if len > 0 {
            self.send_data(&buffer[..len])?;
        }
        Ok(())
    }

    /// Turn color inversion on or off
    pub fn invert_display(&mut self, invert: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_command(if invert { INVON } else { INVOFF })
    }

    /// Change the display orientation
    ///
    /// Width and height swap for [`Rotation::Rotate90`] and
    /// [`Rotation::Rotate270`]. If the write fails the previous rotation and
    /// dimensions stay in effect.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.apply_rotation(rotation).map_err(Error::Interface)
    }

    fn apply_rotation(&mut self, rotation: Rotation) -> Result<(), I::Error> {
        self.interface.send_command(MADCTL)?;
        self.interface.send_data(&[rotation.madctl()])?;

        self.rotation = rotation;
        self.size = rotation.apply(self.config.dimensions);
        log::debug!(
            "hx8357: rotation {} ({}x{})",
            rotation.index(),
            self.size.width,
            self.size.height
        );
        Ok(())
    }

    fn ensure_ready(&self) -> DisplayResult<I> {
        if self.is_ready {
            Ok(())
        } else {
            log::warn!("hx8357: display not initialized");
            Err(Error::NotInitialized)
        }
    }

    /// Current width in pixels (rotation-adjusted)
    pub fn width(&self) -> u16 {
        self.size.width
    }

    /// Current height in pixels (rotation-adjusted)
    pub fn height(&self) -> u16 {
        self.size.height
    }

    /// Current (rotation-adjusted) dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.size
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }
}
