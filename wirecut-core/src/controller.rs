//! Main controller coordinating the state machine and the cutter hardware
//!
//! The controller is the central brain that:
//! - Renders the screen for the current state
//! - Waits for the operator's key presses and resolves them into events
//! - Runs the feed and cut cycle once the job is confirmed
//!
//! Every state is handled by one call to [`Controller::step`]. Steps
//! suspend only while waiting for a key or for a fixed hardware delay.

use embedded_hal_async::delay::DelayNs;

use crate::config::RigConfig;
use crate::error::ControlError;
use crate::input::{EntryOutcome, Key, NumericEntryBuffer};
use crate::job::Job;
use crate::state::{Event, MachineState};
use crate::traits::{
    CutterActuator, DisplayError, FeedDirection, FeedDrive, KeySource, TextDisplay,
    TextDisplayExt,
};
use crate::ui::screens;

/// Controller state for coordinating subsystems
pub struct Controller<K, D, F, A, T> {
    /// Rig calibration
    rig: RigConfig,
    /// Current machine state
    state: MachineState,
    /// Job being configured or cut
    job: Job,
    /// Digits typed at the current prompt
    entry: NumericEntryBuffer,
    keys: K,
    display: D,
    feed: F,
    valve: A,
    delay: T,
}

impl<K, D, F, A, T> Controller<K, D, F, A, T>
where
    K: KeySource,
    D: TextDisplay,
    F: FeedDrive,
    A: CutterActuator,
    T: DelayNs,
{
    /// Create a controller at the home menu with an empty job
    pub fn new(rig: RigConfig, keys: K, display: D, feed: F, valve: A, delay: T) -> Self {
        Self {
            rig,
            state: MachineState::Home,
            job: Job::default(),
            entry: NumericEntryBuffer::new(),
            keys,
            display,
            feed,
            valve,
            delay,
        }
    }

    /// Get current state
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Get the current job
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Get the rig calibration
    pub fn rig(&self) -> &RigConfig {
        &self.rig
    }

    /// Get the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run controller steps until one fails
    pub async fn run(&mut self) -> ControlError {
        loop {
            if let Err(e) = self.step().await {
                return e;
            }
        }
    }

    /// Handle the current state once and apply the resulting transition
    ///
    /// Returns the state the machine is in afterwards. A hardware failure
    /// while motion is allowed releases the cutter and leaves the machine
    /// in [`MachineState::Invalid`]; the job is never resumed.
    pub async fn step(&mut self) -> Result<MachineState, ControlError> {
        let result = match self.state {
            MachineState::Home => self.home().await,
            MachineState::EnterLength => self.enter_length().await,
            MachineState::EnterAmount => self.enter_amount().await,
            MachineState::Confirm => self.confirm().await,
            MachineState::Cutting => self.cutting().await.map(Some),
            MachineState::Done => self.done().await,
            MachineState::Invalid => self.fault().await,
        };

        let event = match result {
            Ok(event) => event,
            Err(e) => {
                if self.state.motion_allowed() {
                    self.abort_cycle(e).await;
                }
                return Err(e);
            }
        };

        if let Some(event) = event {
            let next = self.state.transition(event);
            #[cfg(feature = "defmt")]
            defmt::debug!("{:?} --{:?}--> {:?}", self.state, event, next);
            self.state = next;
        }

        Ok(self.state)
    }

    /// Give up on the running job after a feed or cutter failure
    async fn abort_cycle(&mut self, _cause: ControlError) {
        #[cfg(feature = "defmt")]
        defmt::error!("Cutting aborted: {:?}", _cause);

        if let Err(_e) = self.valve.open().await {
            #[cfg(feature = "defmt")]
            defmt::error!("Cutter release failed: {:?}", _e);
        }
        self.state = MachineState::Invalid;
    }

    /// Home menu: only `1` starts a job
    async fn home(&mut self) -> Result<Option<Event>, ControlError> {
        screens::render_home(&mut self.display).await?;

        match self.keys.wait_key().await {
            Key::Digit(1) => Ok(Some(Event::Begin)),
            _ => Ok(None),
        }
    }

    async fn enter_length(&mut self) -> Result<Option<Event>, ControlError> {
        screens::render_length_prompt(&mut self.display).await?;
        let outcome = self.read_entry().await?;
        Ok(Some(store_entry(outcome, &mut self.job.length_mm)))
    }

    async fn enter_amount(&mut self) -> Result<Option<Event>, ControlError> {
        screens::render_amount_prompt(&mut self.display).await?;
        let outcome = self.read_entry().await?;
        Ok(Some(store_entry(outcome, &mut self.job.amount)))
    }

    /// Collect digits until `#` or `*`, echoing each stored digit
    async fn read_entry(&mut self) -> Result<EntryOutcome, ControlError> {
        self.entry.reset();

        loop {
            let key = self.keys.wait_key().await;
            if let Some(outcome) = self.entry.resolve(key) {
                return Ok(outcome);
            }
            if let Key::Digit(digit) = key {
                if self.entry.push(digit) {
                    self.display.write_char(key.as_char()).await?;
                }
            }
        }
    }

    /// Summary screen: `*` goes back, `#` starts cutting
    async fn confirm(&mut self) -> Result<Option<Event>, ControlError> {
        screens::render_confirm(&mut self.display, &self.job).await?;

        loop {
            match self.keys.wait_key().await {
                Key::Cancel => return Ok(Some(Event::Back)),
                Key::Confirm if self.job.is_runnable() => return Ok(Some(Event::Advance)),
                Key::Confirm => return Ok(Some(Event::Back)),
                Key::Digit(_) => {}
            }
        }
    }

    /// Feed and cut every piece of the job
    ///
    /// Runs to completion without reading the keypad. Only feed and
    /// cutter failures stop the cycle; a failed screen update leaves the
    /// previous text on the LCD.
    async fn cutting(&mut self) -> Result<Event, ControlError> {
        let steps = self.rig.step_count(self.job.length_mm);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Cutting {} x {}mm ({} steps each)",
            self.job.amount,
            self.job.length_mm,
            steps
        );

        report_display(screens::render_cutting(&mut self.display).await);
        self.feed.set_direction(FeedDirection::Forward)?;

        self.job.progress = 0;
        while !self.job.is_complete() {
            self.job.progress += 1;
            report_display(
                screens::render_progress(&mut self.display, self.job.progress, self.job.amount)
                    .await,
            );
            self.cut_piece(steps).await?;
        }

        let dropped = self.keys.discard_pending();
        if dropped > 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("Dropped {} key presses made while cutting", dropped);
        }

        Ok(Event::CycleFinished)
    }

    /// Feed one piece, let it settle, then cut it off
    ///
    /// The cutter must not close before feeding is finished, and must be
    /// fully open again before the roller moves.
    async fn cut_piece(&mut self, steps: u32) -> Result<(), ControlError> {
        debug_assert!(self.state.motion_allowed());
        self.feed.feed(steps, self.rig.step_half_period_us).await?;
        self.delay.delay_ms(self.rig.settle_ms).await;
        self.valve.close().await?;
        self.valve.open().await?;
        Ok(())
    }

    /// Done screen: wait for `#`, ignore everything else
    async fn done(&mut self) -> Result<Option<Event>, ControlError> {
        screens::render_done(&mut self.display).await?;

        while self.keys.wait_key().await != Key::Confirm {}

        self.job.reset();
        Ok(Some(Event::Acknowledge))
    }

    /// Error screen, then recover to the home menu
    ///
    /// Stays in [`MachineState::Invalid`] until the cutter is open.
    async fn fault(&mut self) -> Result<Option<Event>, ControlError> {
        if self.valve.is_closed() {
            self.valve.open().await?;
        }

        screens::render_error(&mut self.display).await?;
        self.delay.delay_ms(self.rig.error_hold_ms).await;

        self.keys.discard_pending();
        self.job.reset();
        Ok(Some(Event::Recover))
    }
}

/// Log a screen update that failed during the cutting cycle
fn report_display(result: Result<(), DisplayError>) {
    if let Err(_e) = result {
        #[cfg(feature = "defmt")]
        defmt::warn!("Display update failed while cutting: {:?}", _e);
    }
}

/// Store a confirmed entry into a job field
///
/// Zero is rejected so a job can never be started with nothing to cut.
/// Cancel leaves the field untouched.
fn store_entry(outcome: EntryOutcome, field: &mut u16) -> Event {
    match outcome {
        EntryOutcome::Value(0) => Event::EntryRejected,
        EntryOutcome::Value(value) => {
            *field = value;
            Event::EntryAccepted
        }
        EntryOutcome::Retreat => Event::Back,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ActuatorError, DisplayError, MotionError};
    use crate::ui::TextGrid;
    use core::cell::{Cell, RefCell};
    use embassy_futures::block_on;
    use std::collections::VecDeque;

    /// Observable hardware activity, in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Action {
        Direction(FeedDirection),
        /// Steps fed, with the progress line visible at the time
        Feed(u32, String),
        Wait(u32),
        Close,
        Open,
    }

    /// Shared test bench the mocks report into
    #[derive(Default)]
    struct Bench {
        log: RefCell<Vec<Action>>,
        grid: RefCell<TextGrid>,
        /// Keys typed when the controller asks for one
        script: RefCell<VecDeque<Key>>,
        /// Keys already sitting in the queue
        queued: RefCell<VecDeque<Key>>,
        /// Key the operator presses while each piece is fed
        press_while_feeding: Cell<Option<Key>>,
        fail_feed: Cell<bool>,
        /// `set_cursor` calls seen so far
        cursor_calls: Cell<u32>,
        /// `set_cursor` call (1-based) that fails with a bus error
        fail_cursor_call: Cell<Option<u32>>,
        /// Upcoming `open` calls that fail
        failing_opens: Cell<u32>,
    }

    impl Bench {
        fn type_keys(&self, text: &str) {
            let mut script = self.script.borrow_mut();
            for c in text.chars() {
                script.push_back(Key::from_char(c).unwrap());
            }
        }

        fn keys_left(&self) -> usize {
            self.script.borrow().len()
        }

        fn actions(&self) -> Vec<Action> {
            self.log.borrow().clone()
        }

        fn row(&self, row: usize) -> String {
            self.grid.borrow().row(row).to_string()
        }
    }

    struct ScriptedKeys<'a>(&'a Bench);

    impl KeySource for ScriptedKeys<'_> {
        fn poll_key(&mut self) -> Option<Key> {
            self.0.queued.borrow_mut().pop_front()
        }

        async fn wait_key(&mut self) -> Key {
            if let Some(key) = self.poll_key() {
                return key;
            }
            self.0
                .script
                .borrow_mut()
                .pop_front()
                .expect("controller waited for a key the test did not type")
        }
    }

    struct GridDisplay<'a>(&'a Bench);

    impl TextDisplay for GridDisplay<'_> {
        async fn clear(&mut self) -> Result<(), DisplayError> {
            let mut grid = self.0.grid.borrow().clone();
            grid.clear().await?;
            *self.0.grid.borrow_mut() = grid;
            Ok(())
        }

        async fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
            let call = self.0.cursor_calls.get() + 1;
            self.0.cursor_calls.set(call);
            if self.0.fail_cursor_call.get() == Some(call) {
                return Err(DisplayError::Bus);
            }
            let mut grid = self.0.grid.borrow().clone();
            grid.set_cursor(col, row).await?;
            *self.0.grid.borrow_mut() = grid;
            Ok(())
        }

        async fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
            let mut grid = self.0.grid.borrow().clone();
            grid.write_str(text).await?;
            *self.0.grid.borrow_mut() = grid;
            Ok(())
        }
    }

    struct MockFeed<'a>(&'a Bench);

    impl FeedDrive for MockFeed<'_> {
        fn set_direction(&mut self, dir: FeedDirection) -> Result<(), MotionError> {
            self.0.log.borrow_mut().push(Action::Direction(dir));
            Ok(())
        }

        async fn step(&mut self, _half_period_us: u32) -> Result<(), MotionError> {
            Ok(())
        }

        async fn feed(&mut self, steps: u32, half_period_us: u32) -> Result<(), MotionError> {
            assert_eq!(half_period_us, RigConfig::REFERENCE.step_half_period_us);
            if self.0.fail_feed.get() {
                return Err(MotionError::Pin);
            }
            if let Some(key) = self.0.press_while_feeding.get() {
                self.0.queued.borrow_mut().push_back(key);
            }
            let progress = self.0.row(1);
            self.0.log.borrow_mut().push(Action::Feed(steps, progress));
            Ok(())
        }
    }

    struct MockValve<'a> {
        bench: &'a Bench,
        closed: bool,
    }

    impl CutterActuator for MockValve<'_> {
        async fn close(&mut self) -> Result<(), ActuatorError> {
            self.closed = true;
            self.bench.log.borrow_mut().push(Action::Close);
            Ok(())
        }

        async fn open(&mut self) -> Result<(), ActuatorError> {
            let failing = self.bench.failing_opens.get();
            if failing > 0 {
                self.bench.failing_opens.set(failing - 1);
                return Err(ActuatorError::Pin);
            }
            self.closed = false;
            self.bench.log.borrow_mut().push(Action::Open);
            Ok(())
        }

        fn is_closed(&self) -> bool {
            self.closed
        }
    }

    struct MockDelay<'a>(&'a Bench);

    impl DelayNs for MockDelay<'_> {
        async fn delay_ns(&mut self, _ns: u32) {}

        async fn delay_ms(&mut self, ms: u32) {
            self.0.log.borrow_mut().push(Action::Wait(ms));
        }
    }

    type TestController<'a> =
        Controller<ScriptedKeys<'a>, GridDisplay<'a>, MockFeed<'a>, MockValve<'a>, MockDelay<'a>>;

    fn controller(bench: &Bench) -> TestController<'_> {
        Controller::new(
            RigConfig::REFERENCE,
            ScriptedKeys(bench),
            GridDisplay(bench),
            MockFeed(bench),
            MockValve {
                bench,
                closed: false,
            },
            MockDelay(bench),
        )
    }

    fn step(ctrl: &mut TestController<'_>) -> MachineState {
        block_on(ctrl.step()).unwrap()
    }

    /// Drive the controller from home to the summary screen
    fn configure(ctrl: &mut TestController<'_>, bench: &Bench, length: &str, amount: &str) {
        bench.type_keys("1");
        assert_eq!(step(ctrl), MachineState::EnterLength);
        bench.type_keys(length);
        bench.type_keys("#");
        assert_eq!(step(ctrl), MachineState::EnterAmount);
        bench.type_keys(amount);
        bench.type_keys("#");
        assert_eq!(step(ctrl), MachineState::Confirm);
    }

    #[test]
    fn test_full_job_scenario() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "250", "3");
        assert_eq!(bench.row(0), "3x250mm");
        assert_eq!(*ctrl.job(), Job::new(250, 3));

        bench.type_keys("#");
        assert_eq!(step(&mut ctrl), MachineState::Cutting);
        assert!(bench.actions().is_empty());

        assert_eq!(step(&mut ctrl), MachineState::Done);
        assert_eq!(bench.keys_left(), 0);

        let steps = RigConfig::REFERENCE.step_count(250);
        assert_eq!(steps, 1691);

        let mut expected = Vec::from([Action::Direction(FeedDirection::Forward)]);
        for piece in 1..=3 {
            expected.push(Action::Feed(steps, std::format!("{}/3", piece)));
            expected.push(Action::Wait(500));
            expected.push(Action::Close);
            expected.push(Action::Open);
        }
        assert_eq!(bench.actions(), expected);
        assert_eq!(ctrl.job().progress, 3);
        assert_eq!(bench.row(0), "Done! # Continue");

        bench.type_keys("#");
        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert_eq!(*ctrl.job(), Job::default());
        assert_eq!(bench.row(0), "Done! # Continue");
    }

    #[test]
    fn test_home_ignores_other_keys() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        bench.type_keys("9*#0");
        for _ in 0..4 {
            assert_eq!(step(&mut ctrl), MachineState::Home);
        }
        assert_eq!(bench.row(0), "Menu");
        assert_eq!(bench.row(1), "1.Begin");

        bench.type_keys("1");
        assert_eq!(step(&mut ctrl), MachineState::EnterLength);
    }

    #[test]
    fn test_digits_are_echoed_and_truncated() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        bench.type_keys("1");
        step(&mut ctrl);
        bench.type_keys("123456#");
        assert_eq!(step(&mut ctrl), MachineState::EnterAmount);
        assert_eq!(ctrl.job().length_mm, 1234);
    }

    #[test]
    fn test_echo_sits_in_front_of_unit() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        bench.type_keys("1");
        step(&mut ctrl);
        // Cancel resolves the prompt after the digits have been echoed
        bench.type_keys("250*");
        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert_eq!(bench.row(0), "Length:  * Back");
        assert_eq!(bench.row(1), "250   mm # Enter");
    }

    #[test]
    fn test_cancel_from_length_keeps_value() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "120", "2");
        bench.type_keys("*");
        assert_eq!(step(&mut ctrl), MachineState::EnterAmount);
        bench.type_keys("*");
        assert_eq!(step(&mut ctrl), MachineState::EnterLength);
        bench.type_keys("77*");
        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert_eq!(ctrl.job().length_mm, 120);
    }

    #[test]
    fn test_cancel_from_amount_returns_to_length() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        bench.type_keys("1");
        step(&mut ctrl);
        bench.type_keys("300#");
        assert_eq!(step(&mut ctrl), MachineState::EnterAmount);
        bench.type_keys("5*");
        assert_eq!(step(&mut ctrl), MachineState::EnterLength);
        assert_eq!(ctrl.job().length_mm, 300);
        assert_eq!(ctrl.job().amount, 0);
    }

    #[test]
    fn test_cancel_from_confirm_returns_to_amount() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "250", "3");
        bench.type_keys("*");
        assert_eq!(step(&mut ctrl), MachineState::EnterAmount);
        assert_eq!(*ctrl.job(), Job::new(250, 3));
        assert!(bench.actions().is_empty());
    }

    #[test]
    fn test_confirm_ignores_digits() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "10", "1");
        bench.type_keys("42#");
        assert_eq!(step(&mut ctrl), MachineState::Cutting);
        assert_eq!(bench.keys_left(), 0);
    }

    #[test]
    fn test_zero_entries_are_rejected() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        bench.type_keys("1");
        step(&mut ctrl);

        bench.type_keys("#");
        assert_eq!(step(&mut ctrl), MachineState::EnterLength);
        bench.type_keys("000#");
        assert_eq!(step(&mut ctrl), MachineState::EnterLength);
        assert_eq!(ctrl.job().length_mm, 0);
        // Prompt is drawn fresh for the next attempt
        assert_eq!(bench.row(1), "      mm # Enter");

        bench.type_keys("80#");
        assert_eq!(step(&mut ctrl), MachineState::EnterAmount);
        bench.type_keys("0#");
        assert_eq!(step(&mut ctrl), MachineState::EnterAmount);
        assert_eq!(ctrl.job().amount, 0);
    }

    #[test]
    fn test_done_waits_for_confirm_only() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "50", "1");
        bench.type_keys("#");
        step(&mut ctrl);
        assert_eq!(step(&mut ctrl), MachineState::Done);

        bench.type_keys("5*1#");
        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert_eq!(bench.keys_left(), 0);
    }

    #[test]
    fn test_keys_pressed_while_cutting_are_dropped() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "50", "2");
        bench.type_keys("#");
        step(&mut ctrl);

        // Operator hammers `#` during the cycle
        bench.press_while_feeding.set(Some(Key::Confirm));
        assert_eq!(step(&mut ctrl), MachineState::Done);
        assert!(bench.queued.borrow().is_empty());

        // The done screen still needs a fresh press
        bench.type_keys("#");
        assert_eq!(step(&mut ctrl), MachineState::Home);
    }

    #[test]
    fn test_progress_counts_every_piece() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "100", "12");
        bench.type_keys("#");
        step(&mut ctrl);
        step(&mut ctrl);

        let progress: Vec<String> = bench
            .actions()
            .into_iter()
            .filter_map(|a| match a {
                Action::Feed(steps, progress) => {
                    assert_eq!(steps, 676);
                    Some(progress)
                }
                _ => None,
            })
            .collect();
        let expected: Vec<String> = (1..=12).map(|i| std::format!("{}/12", i)).collect();
        assert_eq!(progress, expected);
    }

    #[test]
    fn test_invalid_state_recovers_home() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);
        ctrl.state = MachineState::Invalid;
        ctrl.job = Job::new(10, 10);
        bench.queued.borrow_mut().push_back(Key::Digit(1));

        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert_eq!(bench.row(0), "ERROR");
        assert_eq!(bench.actions(), [Action::Wait(5000)]);
        assert_eq!(*ctrl.job(), Job::default());
        assert!(bench.queued.borrow().is_empty());
    }

    #[test]
    fn test_feed_failure_aborts_job() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "50", "3");
        bench.type_keys("#");
        step(&mut ctrl);

        bench.fail_feed.set(true);
        let result = block_on(ctrl.step());
        assert_eq!(result, Err(ControlError::Motion(MotionError::Pin)));
        assert_eq!(ctrl.state(), MachineState::Invalid);
        assert_eq!(bench.actions().last(), Some(&Action::Open));

        assert_eq!(step(&mut ctrl), MachineState::Home);
    }

    #[test]
    fn test_display_glitch_does_not_stop_cycle() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "100", "5");
        bench.type_keys("#");
        step(&mut ctrl);

        // Bus error while drawing the counter for piece 2
        bench.cursor_calls.set(0);
        bench.fail_cursor_call.set(Some(2));
        assert_eq!(block_on(ctrl.step()), Ok(MachineState::Done));

        let fed = bench
            .actions()
            .iter()
            .filter(|a| matches!(a, Action::Feed(676, _)))
            .count();
        assert_eq!(fed, 5);
        assert_eq!(ctrl.job().progress, 5);
    }

    #[test]
    fn test_failed_release_is_retried_before_home() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);

        configure(&mut ctrl, &bench, "100", "2");
        bench.type_keys("#");
        step(&mut ctrl);

        // Both the regular open and the abort release fail
        bench.failing_opens.set(2);
        let result = block_on(ctrl.step());
        assert_eq!(result, Err(ControlError::Actuator(ActuatorError::Pin)));
        assert_eq!(ctrl.state(), MachineState::Invalid);
        assert!(ctrl.valve.is_closed());

        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert!(!ctrl.valve.is_closed());
        assert_eq!(bench.actions().last(), Some(&Action::Wait(5000)));
        assert!(bench.actions().contains(&Action::Open));
    }

    #[test]
    fn test_stuck_cutter_keeps_machine_invalid() {
        let bench = Bench::default();
        let mut ctrl = controller(&bench);
        ctrl.state = MachineState::Invalid;
        ctrl.valve.closed = true;
        bench.failing_opens.set(1);

        let result = block_on(ctrl.step());
        assert_eq!(result, Err(ControlError::Actuator(ActuatorError::Pin)));
        assert_eq!(ctrl.state(), MachineState::Invalid);
        assert!(bench.actions().is_empty());

        assert_eq!(step(&mut ctrl), MachineState::Home);
        assert_eq!(bench.actions(), [Action::Open, Action::Wait(5000)]);
    }

    #[test]
    fn test_store_entry() {
        let mut field = 7;
        assert_eq!(
            store_entry(EntryOutcome::Value(0), &mut field),
            Event::EntryRejected
        );
        assert_eq!(field, 7);
        assert_eq!(store_entry(EntryOutcome::Retreat, &mut field), Event::Back);
        assert_eq!(field, 7);
        assert_eq!(
            store_entry(EntryOutcome::Value(42), &mut field),
            Event::EntryAccepted
        );
        assert_eq!(field, 42);
    }
}
