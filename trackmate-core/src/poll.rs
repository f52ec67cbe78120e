//! Poll loop
//!
//! Once per [`POLL_INTERVAL_MS`] the loop fetches the bus status, drives the
//! LEDs and buzzer, and redraws the display. Everything runs on the caller's
//! thread and blocks: a tick (including a full alert sequence) finishes
//! before the next one is considered.
//!
//! Per tick:
//!
//! 1. Not due yet: nothing happens.
//! 2. Link down: the poll is skipped until the next interval.
//! 3. Transport failure: error view with the code; LEDs, buzzer and the
//!    remembered previous state are left alone.
//! 4. Response: extract status and next stop, drive the LEDs, beep on a
//!    MOVING → STOPPED transition, redraw, remember the state.
//!
//! The tick timestamp advances after every attempt, successful or not.

use trackmate_display::{DisplayBackend, DisplayError};
use trackmate_hal::{Clock, HttpClient, HttpResponse, NetworkLink, TransportError};

use crate::alert::StopAlert;
use crate::config::{DeviceConfig, ServerUrl};
use crate::indicator::StatusIndicator;
use crate::presenter::StatusPresenter;
use crate::state::{PollEvent, PollPhase};
use crate::status::{BusState, BusStatus};

/// Minimum time between two poll attempts, in milliseconds
pub const POLL_INTERVAL_MS: u64 = 1000;

/// Receive buffer for one status payload
pub const PAYLOAD_BUF_LEN: usize = 512;

/// What one call to [`PollLoop::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Interval not yet elapsed
    NotDue,
    /// Link down, poll skipped
    Offline,
    /// No response; error view shown
    FetchFailed(TransportError),
    /// Response applied to outputs and display
    Updated {
        /// Status extracted from the payload
        status: BusStatus,
        /// Whether the stop alert was played
        alerted: bool,
    },
}

/// Errors that prevent the device from starting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The display did not come up; the device has no way to report errors
    Display(DisplayError),
}

/// Peripherals handed to the poll loop at startup
pub struct Devices<H, N, C, D, I, A> {
    pub http: H,
    pub net: N,
    pub clock: C,
    pub display: D,
    pub indicator: I,
    pub alert: A,
}

/// The device's control loop
///
/// Owns every output and all state carried between ticks.
pub struct PollLoop<H, N, C, D, I, A> {
    url: ServerUrl,
    http: H,
    net: N,
    clock: C,
    presenter: StatusPresenter<D>,
    indicator: I,
    alert: A,
    phase: PollPhase,
    /// State of the last tick that received a response
    previous: BusState,
    /// Time of the last poll attempt (ms), `None` before the first
    last_tick_ms: Option<u64>,
    buf: [u8; PAYLOAD_BUF_LEN],
}

impl<H, N, C, D, I, A> PollLoop<H, N, C, D, I, A>
where
    H: HttpClient,
    N: NetworkLink,
    C: Clock,
    D: DisplayBackend,
    I: StatusIndicator,
    A: StopAlert,
{
    /// Bring up the display and build the loop
    ///
    /// Shows the connecting screen. The first tick after this polls right
    /// away.
    pub fn start(
        config: &DeviceConfig,
        devices: Devices<H, N, C, D, I, A>,
    ) -> Result<Self, StartupError> {
        let Devices {
            http,
            net,
            clock,
            display,
            indicator,
            alert,
        } = devices;

        let mut presenter = StatusPresenter::new(display);
        if let Err(e) = presenter.init() {
            error!("Display init failed: {:?}", e);
            return Err(StartupError::Display(e));
        }
        presenter
            .render_connecting()
            .map_err(StartupError::Display)?;

        info!(
            "Poll loop ready: {=str} every {=u64} ms",
            config.server_url.as_str(),
            POLL_INTERVAL_MS
        );

        Ok(Self {
            url: config.server_url.clone(),
            http,
            net,
            clock,
            presenter,
            indicator,
            alert,
            phase: PollPhase::Idle,
            previous: BusState::default(),
            last_tick_ms: None,
            buf: [0; PAYLOAD_BUF_LEN],
        })
    }

    /// Show the link-up screen once bring-up has an address
    pub fn announce_connected(&mut self) {
        let ip = self.net.local_ip();
        info!("Network connected, local IP: {:?}", ip);
        if let Err(e) = self.presenter.render_connected(ip) {
            warn!("Display update failed: {:?}", e);
        }
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Evaluate one loop iteration
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.clock.now_ms();
        if let Some(last) = self.last_tick_ms {
            if self.clock.elapsed_since(last) < POLL_INTERVAL_MS {
                return TickOutcome::NotDue;
            }
        }

        if !self.net.is_connected() {
            debug!("Link down, poll skipped");
            self.last_tick_ms = Some(now);
            return TickOutcome::Offline;
        }

        self.phase = self.phase.transition(PollEvent::IntervalElapsed);
        let fetched = match self.http.get(self.url.as_str(), &mut self.buf) {
            Ok(response) => Ok(decode(&response)),
            Err(e) => Err(e),
        };
        self.phase = self.phase.transition(PollEvent::FetchCompleted);

        let outcome = match fetched {
            Ok(state) => self.apply(state),
            Err(e) => self.report_failure(e),
        };
        self.phase = self.phase.transition(PollEvent::Rendered);

        self.last_tick_ms = Some(self.clock.now_ms());
        outcome
    }

    /// Drive outputs and display from a fresh state
    fn apply(&mut self, state: BusState) -> TickOutcome {
        let mut alerted = false;

        match state.status {
            BusStatus::Moving => {
                self.indicator.show_moving();
                // Never leave the buzzer on from an earlier alert
                self.alert.silence();
            }
            BusStatus::Stopped => {
                self.indicator.show_stopped();
                if state.is_stop_transition_from(&self.previous) {
                    info!("Bus arrived at stop");
                    self.alert.signal_stop_transition();
                    alerted = true;
                }
            }
            BusStatus::Unknown => {
                // LEDs keep whatever the last recognised status set
                debug!("Unrecognised status, indicators unchanged");
            }
        }

        if let Err(e) = self.presenter.render(state.status, &state.next_stop) {
            warn!("Display update failed: {:?}", e);
        }

        let status = state.status;
        self.previous = state;
        TickOutcome::Updated { status, alerted }
    }

    /// Show the error view; previous state and outputs stay as they were
    fn report_failure(&mut self, err: TransportError) -> TickOutcome {
        let code = err.code();
        warn!("HTTP request failed, code: {=i16}", code);
        warn!("Server URL: {=str}", self.url.as_str());
        warn!("Local IP: {:?}", self.net.local_ip());

        if let Err(e) = self.presenter.render_error(code) {
            warn!("Display update failed: {:?}", e);
        }

        TickOutcome::FetchFailed(err)
    }

    /// Current phase
    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    /// State of the last tick that received a response
    pub fn previous(&self) -> &BusState {
        &self.previous
    }

    /// Endpoint being polled
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the display
    pub fn display(&self) -> &D {
        self.presenter.display()
    }

    /// Get the indicator
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Get the alert
    pub fn alert(&self) -> &A {
        &self.alert
    }
}

/// Turn a response into a bus state
///
/// Any status code counts as a response; the server answers unknown buses
/// with a 404 that still carries a status field.
fn decode(response: &HttpResponse<'_>) -> BusState {
    if !response.is_success() {
        warn!("Server answered {=u16}", response.status);
    }

    let text = match core::str::from_utf8(response.body) {
        Ok(text) => text,
        Err(e) => {
            warn!("Payload not UTF-8 past byte {=usize}", e.valid_up_to());
            core::str::from_utf8(&response.body[..e.valid_up_to()]).unwrap_or("")
        }
    };

    debug!("Payload: {=str}", text);
    debug!("Payload (hex): {=[u8]:x}", response.body);

    let state = BusState::from_payload(text);
    debug!("Status {:?}, next stop {=str}", state.status, state.next_stop.as_str());
    state
}
