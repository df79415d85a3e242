//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the HX8357 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The HX8357 in 4-wire SPI mode requires:
//! - SPI bus (MOSI + SCK, CS handled by the [`SpiDevice`])
//! - 1 or 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low, optional)
//!
//! The driver never reads from the controller, so MISO may be left unconnected.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use hx8357::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI and the D/C pin (no reset line wired)
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0x01); // Software reset
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x83, 0x57]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default size of the stack buffer used to stream repeated pixel data
///
/// A full-screen fill on a 320x480 panel is 307,200 bytes; it goes out in
/// chunks of this size, one `SpiDevice::write` each. See
/// [`Interface::with_chunk_size`] for a larger buffer.
pub const FILL_CHUNK_BYTES: usize = 512;

/// Time the reset line is held low, in milliseconds
pub const RESET_LOW_MS: u32 = 10;

/// Time to wait after releasing the reset line, in milliseconds
pub const RESET_SETTLE_MS: u32 = 120;

/// Trait for hardware interface to the HX8357 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus, or a D/C line behind an I/O
/// expander), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// DC must not change until the write has returned.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send `pattern` repeated `count` times as data
    ///
    /// Used for solid fills. The default implementation packs the repetitions
    /// into [`FILL_CHUNK_BYTES`]-sized chunks and hands each one to
    /// [`send_data`](Self::send_data).
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data_repeated(
        &mut self,
        pattern: &[u8],
        count: usize,
    ) -> InterfaceResult<(), Self::Error> {
        for_each_repeated_chunk::<FILL_CHUNK_BYTES, _, _>(pattern, count, |chunk| {
            self.send_data(chunk)
        })
    }

    /// Perform hardware reset
    ///
    /// Implementations with a reset line must:
    /// 1. Set RST pin low
    /// 2. Wait at least 10ms
    /// 3. Set RST pin high
    /// 4. Wait at least 120ms before the first command
    ///
    /// Implementations without a reset line return `Ok(())` immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset pin cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Pack `count` repetitions of `pattern` into `N`-byte chunks and pass each to `write`
///
/// Every chunk holds a whole number of repetitions, so a 2-byte pixel is never
/// split across two writes.
pub(crate) fn for_each_repeated_chunk<const N: usize, E, F>(
    pattern: &[u8],
    count: usize,
    mut write: F,
) -> InterfaceResult<(), E>
where
    F: FnMut(&[u8]) -> InterfaceResult<(), E>,
{
    if pattern.is_empty() || count == 0 {
        return Ok(());
    }

    let per_chunk = N / pattern.len();
    if per_chunk == 0 {
        for _ in 0..count {
            write(pattern)?;
        }
        return Ok(());
    }

    let mut buffer = [0u8; N];
    for (dst, src) in buffer.iter_mut().zip(pattern.iter().cycle()) {
        *dst = *src;
    }

    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(per_chunk);
        write(&buffer[..n * pattern.len()])?;
        remaining -= n;
    }
    Ok(())
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// D/C pin error
    Pin(PinErr),
    /// Reset pin error
    ///
    /// The reset pin may use a different error type than the D/C pin; its
    /// error is logged and dropped.
    ResetPin,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::ResetPin => write!(f, "Reset pin error"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Placeholder for panels whose reset line is not wired to the host
///
/// Used as the `RST` parameter of interfaces built with [`Interface::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoResetPin;

impl embedded_hal::digital::ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation for the HX8357
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`], or [`NoResetPin`]
///
/// * `CHUNK` - Stack buffer size for solid fills, [`FILL_CHUNK_BYTES`] by default
///
/// The SPI clock is chosen when `SPI` is opened; see
/// [`Config::spi_clock_hz`](crate::config::Config::spi_clock_hz).
///
/// Each fill chunk is one `SpiDevice` transaction, so chip select toggles
/// once per chunk. With the default 512 bytes a full-screen fill takes 600
/// transactions; raise `CHUNK` with [`with_chunk_size`](Self::with_chunk_size)
/// if the stack allows.
///
/// ## Example
///
/// ```rust,no_run
/// use hx8357::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::with_reset(
///     MockSpi,  // SpiDevice
///     MockPin,  // D/C OutputPin
///     MockPin,  // RST OutputPin
/// );
///
/// // Use with Display
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, DC, RST = NoResetPin, const CHUNK: usize = FILL_CHUNK_BYTES> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low), if wired
    rst: Option<RST>,
}

impl<SPI, DC> Interface<SPI, DC, NoResetPin>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new Interface for a panel without a reset line
    ///
    /// [`DisplayInterface::reset`] is a no-op; the power-on script's software
    /// reset is the only reset the controller receives.
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc, rst: None }
    }
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface with a hardware reset line
    pub fn with_reset(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
        }
    }
}

impl<SPI, DC, RST, const CHUNK: usize> Interface<SPI, DC, RST, CHUNK>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Use an `N`-byte stack buffer for solid fills
    ///
    /// Fewer, longer SPI transactions at the cost of `N` bytes of stack
    /// during each fill.
    ///
    /// ```rust,ignore
    /// let interface = Interface::new(spi, dc).with_chunk_size::<4096>();
    /// ```
    pub fn with_chunk_size<const N: usize>(self) -> Interface<SPI, DC, RST, N> {
        Interface {
            spi: self.spi,
            dc: self.dc,
            rst: self.rst,
        }
    }

    /// Whether a hardware reset line is wired
    pub fn has_reset(&self) -> bool {
        self.rst.is_some()
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, const CHUNK: usize> DisplayInterface for Interface<SPI, DC, RST, CHUNK>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data_repeated(
        &mut self,
        pattern: &[u8],
        count: usize,
    ) -> InterfaceResult<(), Self::Error> {
        if pattern.is_empty() || count == 0 {
            return Ok(());
        }
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        let spi = &mut self.spi;
        for_each_repeated_chunk::<CHUNK, _, _>(pattern, count, |chunk| {
            spi.write(chunk).map_err(InterfaceError::Spi)
        })
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };

        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 120ms
        rst.set_low().map_err(|e| {
            log::warn!("reset pin low failed: {e:?}");
            InterfaceError::ResetPin
        })?;
        delay.delay_ms(RESET_LOW_MS);
        rst.set_high().map_err(|e| {
            log::warn!("reset pin high failed: {e:?}");
            InterfaceError::ResetPin
        })?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct DcPin {
        log: Log,
    }

    impl ErrorType for DcPin {
        type Error = MockError;
    }

    impl OutputPin for DcPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Dc(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Dc(true));
            Ok(())
        }
    }

    struct RstPin {
        log: Log,
    }

    impl ErrorType for RstPin {
        type Error = Infallible;
    }

    impl OutputPin for RstPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Rst(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Rst(true));
            Ok(())
        }
    }

    struct FailingRstPin;

    impl ErrorType for FailingRstPin {
        type Error = MockError;
    }

    impl OutputPin for FailingRstPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(MockError)
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(MockError)
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn interface(log: &Log) -> Interface<MockSpi, DcPin> {
        Interface::new(
            MockSpi {
                log: log.clone(),
                fail: false,
            },
            DcPin { log: log.clone() },
        )
    }

    #[test]
    fn test_command_drives_dc_low_before_write() {
        let log = Log::default();
        let mut iface = interface(&log);
        iface.send_command(0x2C).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Dc(false), Event::Write(alloc::vec![0x2C])]
        );
    }

    #[test]
    fn test_data_drives_dc_high_before_write() {
        let log = Log::default();
        let mut iface = interface(&log);
        iface.send_data(&[0xFF, 0x83, 0x57]).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Dc(true), Event::Write(alloc::vec![0xFF, 0x83, 0x57])]
        );
    }

    #[test]
    fn test_repeated_data_sets_dc_once_and_streams_whole_pixels() {
        let log = Log::default();
        let mut iface = interface(&log);
        // 300 pixels = 600 bytes, more than one chunk
        iface.send_data_repeated(&[0xF8, 0x00], 300).unwrap();

        let events = log.borrow();
        assert_eq!(events[0], Event::Dc(true));
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Dc(_))).count(),
            1
        );

        let mut bytes = Vec::new();
        for event in events.iter().skip(1) {
            let Event::Write(chunk) = event else {
                panic!("unexpected event {event:?}");
            };
            assert!(chunk.len() <= FILL_CHUNK_BYTES);
            assert_eq!(chunk.len() % 2, 0);
            bytes.extend_from_slice(chunk);
        }
        assert_eq!(bytes.len(), 600);
        assert!(bytes.chunks(2).all(|px| px == [0xF8, 0x00]));
    }

    #[test]
    fn test_larger_chunk_size_means_fewer_writes() {
        let log = Log::default();
        let mut iface = interface(&log).with_chunk_size::<4096>();
        // Full 320x480 screen
        iface.send_data_repeated(&[0x00, 0x1F], 320 * 480).unwrap();

        let events = log.borrow();
        let writes: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                Event::Write(chunk) => Some(chunk.len()),
                _ => None,
            })
            .collect();
        assert_eq!(writes.len(), 75);
        assert!(writes.iter().all(|&len| len == 4096));
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Dc(_))).count(),
            1
        );
    }

    #[test]
    fn test_default_chunk_size_full_screen_write_count() {
        let log = Log::default();
        let mut iface = interface(&log);
        iface.send_data_repeated(&[0x00, 0x1F], 320 * 480).unwrap();
        let writes = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Write(_)))
            .count();
        assert_eq!(writes, 600);
    }

    #[test]
    fn test_repeated_data_zero_count_is_silent() {
        let log = Log::default();
        let mut iface = interface(&log);
        iface.send_data_repeated(&[0x12, 0x34], 0).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_spi_error_is_propagated() {
        let log = Log::default();
        let mut iface = Interface::new(
            MockSpi {
                log: log.clone(),
                fail: true,
            },
            DcPin { log: log.clone() },
        );
        let result = iface.send_command(0x01);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }

    #[test]
    fn test_reset_without_line_is_noop() {
        let log = Log::default();
        let mut iface = interface(&log);
        assert!(!iface.has_reset());
        let mut delay = MockDelay { log: log.clone() };
        iface.reset(&mut delay).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reset_pulses_line_and_waits() {
        let log = Log::default();
        let mut iface = Interface::with_reset(
            MockSpi {
                log: log.clone(),
                fail: false,
            },
            DcPin { log: log.clone() },
            RstPin { log: log.clone() },
        );
        assert!(iface.has_reset());
        let mut delay = MockDelay { log: log.clone() };
        iface.reset(&mut delay).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Rst(false),
                Event::DelayMs(RESET_LOW_MS),
                Event::Rst(true),
                Event::DelayMs(RESET_SETTLE_MS),
            ]
        );
    }

    #[test]
    fn test_reset_pin_error_is_reported() {
        let log = Log::default();
        let mut iface = Interface::with_reset(
            MockSpi {
                log: log.clone(),
                fail: false,
            },
            DcPin { log: log.clone() },
            FailingRstPin,
        );
        let mut delay = MockDelay { log: log.clone() };
        let result = iface.reset(&mut delay);
        assert!(matches!(result, Err(InterfaceError::ResetPin)));
    }

    #[test]
    fn test_chunking_handles_oversized_pattern() {
        let pattern = [0xAAu8; FILL_CHUNK_BYTES + 1];
        let mut writes = 0;
        let result: Result<(), ()> =
            for_each_repeated_chunk::<FILL_CHUNK_BYTES, _, _>(&pattern, 3, |chunk| {
                assert_eq!(chunk.len(), FILL_CHUNK_BYTES + 1);
                writes += 1;
                Ok(())
            });
        assert!(result.is_ok());
        assert_eq!(writes, 3);
    }
}
