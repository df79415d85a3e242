//! HX8357 command definitions
//!
//! This module defines the command bytes used to drive the HX8357 TFT
//! controller and the power-on script. Commands are sent over SPI with the
//! DC pin low for the opcode and high for its parameter bytes.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use hx8357::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin);
//! // Select 16-bit pixels
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(&[command::COLMOD_16BIT]);
//! ```

// System control commands

/// Software reset command (0x01)
pub const SWRESET: u8 = 0x01;

/// Sleep out command (0x11)
///
/// The controller needs 150ms before further commands are accepted.
pub const SLPOUT: u8 = 0x11;

/// Display inversion off command (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on command (0x21)
pub const INVON: u8 = 0x21;

/// Display on command (0x29)
pub const DISPON: u8 = 0x29;

// Memory access commands

/// Column address set command (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Page (row) address set command (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const PASET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Every following data byte pair is one RGB565 pixel, written left-to-right,
/// top-to-bottom within the current address window.
pub const RAMWR: u8 = 0x2C;

/// Tearing effect line on command (0x35)
///
/// Requires 1 byte: 0x00 = V-blank only.
pub const TEON: u8 = 0x35;

/// Memory access control command (0x36)
///
/// Requires 1 byte of MADCTL flags.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte, see [`COLMOD_16BIT`].
pub const COLMOD: u8 = 0x3A;

/// Set tear scanline command (0x44)
///
/// Requires 2 bytes: [line_MSB, line_LSB]
pub const TEARLINE: u8 = 0x44;

// HX8357-D extended commands

/// Oscillator setting command (0xB0)
pub const SETOSC: u8 = 0xB0;

/// Power control command (0xB1)
pub const SETPWR1: u8 = 0xB1;

/// RGB interface setting command (0xB3)
pub const SETRGB: u8 = 0xB3;

/// Display cycle setting command (0xB4)
pub const SETCYC: u8 = 0xB4;

/// VCOM voltage setting command (0xB6)
pub const SETCOM: u8 = 0xB6;

/// Extension command unlock (0xB9)
///
/// Requires the 3-byte key `[0xFF, 0x83, 0x57]`.
pub const SETC: u8 = 0xB9;

/// Source option / STBA setting command (0xC0)
pub const SETSTBA: u8 = 0xC0;

/// Panel characteristics command (0xCC)
pub const SETPANEL: u8 = 0xCC;

/// Gamma curve setting command (0xE0)
pub const SETGAMMA: u8 = 0xE0;

// Parameter values

/// 16 bits per pixel for both RGB and MCU interfaces
pub const COLMOD_16BIT: u8 = 0x55;

/// MADCTL row address order (mirror Y)
pub const MADCTL_MY: u8 = 0x80;
/// MADCTL column address order (mirror X)
pub const MADCTL_MX: u8 = 0x40;
/// MADCTL row/column exchange
pub const MADCTL_MV: u8 = 0x20;
/// MADCTL vertical refresh order
pub const MADCTL_ML: u8 = 0x10;
/// MADCTL RGB subpixel order
pub const MADCTL_RGB: u8 = 0x00;
/// MADCTL BGR subpixel order
pub const MADCTL_BGR: u8 = 0x08;
/// MADCTL horizontal refresh order
pub const MADCTL_MH: u8 = 0x04;

/// One entry of a command script
///
/// The opcode is sent first, then `data` (skipped when empty), then the
/// driver waits `delay_ms` before the next step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    /// Command byte
    pub command: u8,
    /// Parameter bytes
    pub data: &'static [u8],
    /// Settle time after the step in milliseconds
    pub delay_ms: u32,
}

impl ScriptStep {
    const fn new(command: u8, data: &'static [u8]) -> Self {
        Self {
            command,
            data,
            delay_ms: 0,
        }
    }

    const fn with_delay(command: u8, data: &'static [u8], delay_ms: u32) -> Self {
        Self {
            command,
            data,
            delay_ms,
        }
    }
}

/// Power-on sequence for the HX8357-D
///
/// The delays are minimums from the controller's power sequencing; the
/// controller ignores commands until they elapse.
pub const INIT_SCRIPT: &[ScriptStep] = &[
    ScriptStep::new(SWRESET, &[]),
    ScriptStep::with_delay(SETC, &[0xFF, 0x83, 0x57], 300),
    // SDO enabled
    ScriptStep::new(SETRGB, &[0x80, 0x00, 0x06, 0x06]),
    // -1.52V
    ScriptStep::new(SETCOM, &[0x25]),
    // Normal mode 70Hz, idle mode 55Hz
    ScriptStep::new(SETOSC, &[0x68]),
    // BGR, gate direction swapped
    ScriptStep::new(SETPANEL, &[0x05]),
    // Not deep standby, BT, VSPR, VSNR, AP, FS
    ScriptStep::new(SETPWR1, &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA]),
    // OPON normal, OPON idle, STBA x3, GEN
    ScriptStep::new(SETSTBA, &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08]),
    // NW, RTN, DIV, DUM, DUM, GDON, GDOFF
    ScriptStep::new(SETCYC, &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78]),
    ScriptStep::new(
        SETGAMMA,
        &[
            0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08,
            0x09, 0x03, 0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27,
            0x1B, 0x08, 0x09, 0x03, 0x00, 0x01,
        ],
    ),
    ScriptStep::new(COLMOD, &[COLMOD_16BIT]),
    ScriptStep::new(MADCTL, &[MADCTL_MX | MADCTL_MY]),
    // TE off
    ScriptStep::new(TEON, &[0x00]),
    ScriptStep::new(TEARLINE, &[0x00, 0x02]),
    ScriptStep::with_delay(SLPOUT, &[], 150),
    ScriptStep::with_delay(DISPON, &[], 50),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_script_opcode_order() {
        let opcodes: alloc::vec::Vec<u8> = INIT_SCRIPT.iter().map(|step| step.command).collect();
        assert_eq!(
            opcodes,
            [
                0x01, 0xB9, 0xB3, 0xB6, 0xB0, 0xCC, 0xB1, 0xC0, 0xB4, 0xE0, 0x3A, 0x36, 0x35, 0x44,
                0x11, 0x29
            ]
        );
    }

    #[test]
    fn test_init_script_delays() {
        let delays: alloc::vec::Vec<(u8, u32)> = INIT_SCRIPT
            .iter()
            .filter(|step| step.delay_ms > 0)
            .map(|step| (step.command, step.delay_ms))
            .collect();
        assert_eq!(delays, [(SETC, 300), (SLPOUT, 150), (DISPON, 50)]);
    }

    #[test]
    fn test_gamma_table_length() {
        let gamma = INIT_SCRIPT
            .iter()
            .find(|step| step.command == SETGAMMA)
            .unwrap();
        assert_eq!(gamma.data.len(), 34);
    }

    #[test]
    fn test_default_orientation_matches_rotation_zero() {
        let madctl = INIT_SCRIPT
            .iter()
            .find(|step| step.command == MADCTL)
            .unwrap();
        assert_eq!(madctl.data, &[0xC0]);
    }
}
