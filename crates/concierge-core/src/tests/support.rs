//! Shared test doubles for the dispatch core.
//!
//! The recording doubles are thread-safe so the same instances can observe a
//! server running on a queued transport's worker thread.

use std::sync::{Mutex, PoisonError};
use std::thread::{self, ThreadId};

use crate::{
    Callback, Contract, DispatchError, DispatchReporter, DispatchSide, ResultValue, Transport,
    TransportError,
};

/// Calls observed by [`FixedContract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContractCall {
    RequestFlight { id: i32, num: i32 },
    CheckFlight(i32),
    Deposit(i32),
    Withdraw(i32),
}

#[derive(Debug, Clone, Copy)]
struct Outcomes {
    request_flight: bool,
    check_flight: bool,
    deposit: i32,
    withdraw: i32,
}

/// Contract returning preconfigured results and recording every call.
#[derive(Debug)]
pub(crate) struct FixedContract {
    outcomes: Mutex<Outcomes>,
    calls: Mutex<Vec<ContractCall>>,
}

impl Default for FixedContract {
    fn default() -> Self {
        Self {
            outcomes: Mutex::new(Outcomes {
                request_flight: true,
                check_flight: true,
                deposit: 0,
                withdraw: 0,
            }),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FixedContract {
    pub(crate) fn set_request_flight(&self, booked: bool) {
        lock(&self.outcomes).request_flight = booked;
    }

    pub(crate) fn set_check_flight(&self, available: bool) {
        lock(&self.outcomes).check_flight = available;
    }

    pub(crate) fn set_deposit(&self, balance: i32) {
        lock(&self.outcomes).deposit = balance;
    }

    pub(crate) fn set_withdraw(&self, balance: i32) {
        lock(&self.outcomes).withdraw = balance;
    }

    pub(crate) fn calls(&self) -> Vec<ContractCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: ContractCall) -> Outcomes {
        lock(&self.calls).push(call);
        *lock(&self.outcomes)
    }
}

impl Contract for FixedContract {
    fn request_flight(&self, id: i32, num: i32) -> bool {
        self.record(ContractCall::RequestFlight { id, num })
            .request_flight
    }

    fn check_flight(&self, num: i32) -> bool {
        self.record(ContractCall::CheckFlight(num)).check_flight
    }

    fn deposit(&self, num: i32) -> i32 {
        self.record(ContractCall::Deposit(num)).deposit
    }

    fn withdraw(&self, num: i32) -> i32 {
        self.record(ContractCall::Withdraw(num)).withdraw
    }
}

/// Results observed by [`RecordingCallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallbackEvent {
    RequestFlight(bool),
    CheckFlight(bool),
    Deposit(i32),
    Withdraw(i32),
}

/// Callback recording each delivery and the thread it arrived on.
#[derive(Debug, Default)]
pub(crate) struct RecordingCallback {
    events: Mutex<Vec<(CallbackEvent, ThreadId)>>,
}

impl RecordingCallback {
    pub(crate) fn events(&self) -> Vec<CallbackEvent> {
        lock(&self.events).iter().map(|(event, _)| *event).collect()
    }

    pub(crate) fn threads(&self) -> Vec<ThreadId> {
        lock(&self.events).iter().map(|(_, id)| *id).collect()
    }

    fn record(&self, event: CallbackEvent) {
        lock(&self.events).push((event, thread::current().id()));
    }
}

impl Callback for RecordingCallback {
    fn on_request_flight(&self, booked: bool) {
        self.record(CallbackEvent::RequestFlight(booked));
    }

    fn on_check_flight(&self, available: bool) {
        self.record(CallbackEvent::CheckFlight(available));
    }

    fn on_deposit(&self, balance: i32) {
        self.record(CallbackEvent::Deposit(balance));
    }

    fn on_withdraw(&self, balance: i32) {
        self.record(CallbackEvent::Withdraw(balance));
    }
}

/// Lifecycle transitions observed by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LifecycleEvent {
    Received(DispatchSide),
    Validated(DispatchSide, String),
    Dispatched(DispatchSide, String),
    Completed(DispatchSide, String, ResultValue),
    Rejected(DispatchSide, String),
}

/// Reporter capturing every lifecycle transition in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<LifecycleEvent> {
        lock(&self.events).clone()
    }

    fn record(&self, event: LifecycleEvent) {
        lock(&self.events).push(event);
    }
}

impl DispatchReporter for RecordingReporter {
    fn command_received(&self, side: DispatchSide, _line: &str) {
        self.record(LifecycleEvent::Received(side));
    }

    fn command_validated(&self, side: DispatchSide, command: &str) {
        self.record(LifecycleEvent::Validated(side, command.to_owned()));
    }

    fn command_dispatched(&self, side: DispatchSide, command: &str) {
        self.record(LifecycleEvent::Dispatched(side, command.to_owned()));
    }

    fn command_completed(&self, side: DispatchSide, command: &str, result: ResultValue) {
        self.record(LifecycleEvent::Completed(side, command.to_owned(), result));
    }

    fn command_rejected(&self, side: DispatchSide, error: &DispatchError) {
        self.record(LifecycleEvent::Rejected(side, error.to_string()));
    }
}

/// Transport capturing forwarded lines instead of delivering them.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    lines: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub(crate) fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, line: &str) -> Result<(), TransportError> {
        lock(&self.lines).push(line.to_owned());
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
