//! Core display operations

use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::command::{
    CLEAR_WINDOW, DISPLAY_ALL_OFF, DISPLAY_ALL_ON, DISPLAY_OFF, DISPLAY_ON, DRAW_LINE, DRAW_RECT,
    FILL_ENABLE, INVERT_DISPLAY, NORMAL_DISPLAY,
};
use crate::config::{Config, ErrorPolicy};
use crate::error::Error;
use crate::geometry::{Line, Point, Rect};
use crate::interface::DisplayInterface;
use crate::sequence::{ALERT_MARK, CLEAR_SCREEN, ENABLE_FILL, INIT_SEQUENCE, Step, TICK_MARK};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller lifecycle as seen by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No successful [`Display::init`] yet, or the last one failed
    #[default]
    Uninitialized,
    /// Reset pulse and start-up script in progress
    Initializing,
    /// Ready to accept drawing commands
    Idle,
    /// Alternating inverted and normal display
    Blinking,
}

/// Display mode selected by opcodes 0xA4..=0xA7
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// Show display RAM as written
    #[default]
    Normal = NORMAL_DISPLAY,
    /// Every pixel at full scale
    AllOn = DISPLAY_ALL_ON,
    /// Every pixel off
    AllOff = DISPLAY_ALL_OFF,
    /// Show display RAM with colours inverted
    Inverted = INVERT_DISPLAY,
}

/// Cancellation source polled by the blink loop before every cycle
pub trait StopSignal {
    /// Return `true` to end blinking
    fn should_stop(&mut self) -> bool;
}

impl<F: FnMut() -> bool> StopSignal for F {
    fn should_stop(&mut self) -> bool {
        self()
    }
}

impl StopSignal for &AtomicBool {
    fn should_stop(&mut self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// A [`StopSignal`] that never fires
#[derive(Clone, Copy, Debug, Default)]
pub struct Forever;

impl StopSignal for Forever {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Core display driver for SSD1331
///
/// Owns the hardware interface, so a single `Display` is the only path to
/// the bus and its control lines. Every operation reports the outcome of
/// every byte it sends according to [`Config::error_policy`].
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Driver configuration
    config: Config,
    /// Lifecycle state
    state: State,
    /// First error swallowed under [`ErrorPolicy::Continue`]
    deferred: Option<I::Error>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic is generated until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: State::Uninitialized,
            deferred: None,
        }
    }

    /// Pulse reset and run the start-up script
    ///
    /// Runs, in order: the reset pulse, [`INIT_SEQUENCE`] (ending with
    /// display on), fill enable, and a clear of the full panel. On failure
    /// the state drops back to [`State::Uninitialized`] and `init` may be
    /// called again.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.state = State::Initializing;
        let result = self.initialize(delay);
        self.state = if result.is_ok() {
            State::Idle
        } else {
            State::Uninitialized
        };
        result
    }

    fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface
            .reset(delay, self.config.reset_pulse_ms)
            .map_err(Error::Interface)?;

        self.run(|display| {
            for step in INIT_SEQUENCE {
                display.write_step(step)?;
            }
            display.write_step(&ENABLE_FILL)?;
            display.write_step(&CLEAR_SCREEN)
        })?;

        log::debug!("ssd1331: initialization sequence done");
        Ok(())
    }

    /// Clear the whole panel
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| display.write_step(&CLEAR_SCREEN))
    }

    /// Clear the window between two corners, inclusive
    pub fn clear_window(&mut self, start: Point, end: Point) -> DisplayResult<I> {
        self.ensure_ready()?;
        check_bounds::<I>(start)?;
        check_bounds::<I>(end)?;
        self.run(|display| {
            display.write_byte(CLEAR_WINDOW)?;
            display.write_bytes(&[start.col, start.row, end.col, end.row])
        })
    }

    /// Draw a single line
    pub fn draw_line(&mut self, line: &Line) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| display.encode_line(line))
    }

    /// Draw a single rectangle
    ///
    /// The fill colour only shows while fill is enabled, which
    /// [`init`](Self::init) does.
    pub fn draw_rect(&mut self, rect: &Rect) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| display.encode_rect(rect))
    }

    /// Enable or disable rectangle fill
    pub fn set_fill(&mut self, enabled: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| {
            display.write_byte(FILL_ENABLE)?;
            display.write_byte(u8::from(enabled))
        })
    }

    /// Select normal, inverted, all-on or all-off display
    pub fn set_mode(&mut self, mode: DisplayMode) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| display.write_byte(mode as u8))
    }

    /// Turn the panel on
    pub fn display_on(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| display.write_byte(DISPLAY_ON))
    }

    /// Turn the panel off (sleep)
    pub fn display_off(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| display.write_byte(DISPLAY_OFF))
    }

    /// Clear the panel and draw the green check mark
    pub fn draw_tick_mark(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| {
            display.write_step(&CLEAR_SCREEN)?;
            for line in &TICK_MARK {
                display.encode_line(line)?;
            }
            Ok(())
        })?;

        log::debug!("ssd1331: tick mark drawn");
        Ok(())
    }

    /// Clear the panel and draw the red exclamation mark
    ///
    /// Only draws. Use [`alert`](Self::alert) or
    /// [`alert_forever`](Self::alert_forever) to also blink it.
    pub fn draw_alert_mark(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.run(|display| {
            display.write_step(&CLEAR_SCREEN)?;
            for rect in &ALERT_MARK {
                display.encode_rect(rect)?;
            }
            Ok(())
        })?;

        log::debug!("ssd1331: alert mark drawn");
        Ok(())
    }

    /// Draw the alert mark and blink it until `stop` fires
    ///
    /// Returns the number of completed blink cycles.
    pub fn alert<D: DelayNs, S: StopSignal>(
        &mut self,
        delay: &mut D,
        stop: S,
    ) -> Result<u32, Error<I>> {
        self.draw_alert_mark()?;
        self.blink(delay, stop)
    }

    /// Draw the alert mark and blink it indefinitely
    ///
    /// Only returns if the bus fails under [`ErrorPolicy::Abort`]. Under
    /// [`ErrorPolicy::Continue`] failures are logged and blinking goes on.
    pub fn alert_forever<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, Error<I>> {
        self.draw_alert_mark()?;
        self.state = State::Blinking;
        loop {
            if let Err(e) = self.blink_cycle(delay) {
                if self.config.error_policy == ErrorPolicy::Abort {
                    self.state = State::Idle;
                    return Err(e);
                }
                log::warn!("ssd1331: blink cycle failed, continuing");
            }
        }
    }

    /// Alternate inverted and normal display until `stop` fires
    ///
    /// Each cycle waits [`Config::blink_interval_ms`], inverts, waits again
    /// and returns to normal, so the panel is always left in normal mode
    /// when `stop` is honoured. `stop` is polled before every cycle.
    ///
    /// Returns the number of cycles run. Under [`ErrorPolicy::Abort`] the
    /// first failed cycle ends blinking; under [`ErrorPolicy::Continue`]
    /// blinking runs until `stop` fires and the first failure is returned
    /// then.
    pub fn blink<D: DelayNs, S: StopSignal>(
        &mut self,
        delay: &mut D,
        mut stop: S,
    ) -> Result<u32, Error<I>> {
        self.ensure_ready()?;
        self.state = State::Blinking;

        let mut cycles: u32 = 0;
        let mut first_error = None;
        while !stop.should_stop() {
            let cycle = self.blink_cycle(delay);
            cycles = cycles.saturating_add(1);
            if let Err(e) = cycle {
                let abort = self.config.error_policy == ErrorPolicy::Abort;
                first_error.get_or_insert(e);
                if abort {
                    break;
                }
            }
        }

        self.state = State::Idle;
        log::debug!("ssd1331: blinking stopped after {cycles} cycles");
        match first_error {
            Some(e) => Err(e),
            None => Ok(cycles),
        }
    }

    fn blink_cycle<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let interval = self.config.blink_interval_ms;
        log::trace!("ssd1331: blink");
        self.run(|display| {
            delay.delay_ms(interval);
            display.write_byte(DisplayMode::Inverted as u8)?;
            delay.delay_ms(interval);
            display.write_byte(DisplayMode::Normal as u8)
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and hand back the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn ensure_ready(&self) -> DisplayResult<I> {
        if self.state == State::Idle {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Run one operation, folding in any error deferred by the policy
    fn run<F>(&mut self, encode: F) -> DisplayResult<I>
    where
        F: FnOnce(&mut Self) -> DisplayResult<I>,
    {
        self.deferred = None;
        let result = encode(self);
        let deferred = match self.deferred.take() {
            Some(e) => Err(Error::Interface(e)),
            None => Ok(()),
        };
        result.and(deferred)
    }

    fn encode_line(&mut self, line: &Line) -> DisplayResult<I> {
        check_bounds::<I>(line.start)?;
        check_bounds::<I>(line.end)?;
        self.write_byte(DRAW_LINE)?;
        self.write_bytes(&line.args())
    }

    fn encode_rect(&mut self, rect: &Rect) -> DisplayResult<I> {
        check_bounds::<I>(rect.start)?;
        check_bounds::<I>(rect.end)?;
        self.write_byte(DRAW_RECT)?;
        self.write_bytes(&rect.args())
    }

    fn write_step(&mut self, step: &Step) -> DisplayResult<I> {
        for byte in step.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Send one byte as its own transaction
    fn write_byte(&mut self, byte: u8) -> DisplayResult<I> {
        match self.interface.send_command(byte) {
            Ok(()) => Ok(()),
            Err(e) => match self.config.error_policy {
                ErrorPolicy::Abort => Err(Error::Interface(e)),
                ErrorPolicy::Continue => {
                    self.deferred.get_or_insert(e);
                    Ok(())
                }
            },
        }
    }
}

fn check_bounds<I: DisplayInterface>(point: Point) -> DisplayResult<I> {
    if point.in_bounds() {
        Ok(())
    } else {
        Err(Error::OutOfBounds {
            col: point.col,
            row: point.row,
        })
    }
}
