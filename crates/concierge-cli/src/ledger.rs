//! In-memory resource manager used by the console.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use concierge_config::Config;
use concierge_core::Contract;
use tracing::debug;

const LEDGER_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::ledger");

/// A single account balance plus per-flight passenger lists.
///
/// Every flight has the same number of seats. Balances saturate at the
/// bounds of `i32` and may go negative.
#[derive(Debug)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
    flight_capacity: usize,
}

#[derive(Debug, Default)]
struct LedgerState {
    balance: i32,
    bookings: HashMap<i32, Vec<i32>>,
}

impl InMemoryLedger {
    /// Creates a ledger starting at `opening_balance` with `flight_capacity`
    /// seats on every flight.
    #[must_use]
    pub fn new(opening_balance: i32, flight_capacity: u32) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                balance: opening_balance,
                bookings: HashMap::new(),
            }),
            flight_capacity: usize::try_from(flight_capacity).unwrap_or(usize::MAX),
        }
    }

    /// Creates a ledger seeded from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.opening_balance(), config.flight_capacity())
    }

    /// Returns the current balance.
    #[must_use]
    pub fn balance(&self) -> i32 {
        self.state().balance
    }

    /// Returns the customers booked on flight `num`, in booking order.
    #[must_use]
    pub fn passengers(&self, num: i32) -> Vec<i32> {
        self.state()
            .bookings
            .get(&num)
            .cloned()
            .unwrap_or_default()
    }

    #[cfg(test)]
    fn tracked_flights(&self) -> usize {
        self.state().bookings.len()
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn has_seat(&self, passengers: usize) -> bool {
        passengers < self.flight_capacity
    }
}

impl Contract for InMemoryLedger {
    fn request_flight(&self, id: i32, num: i32) -> bool {
        let mut state = self.state();
        let passengers = state.bookings.get(&num).map(Vec::as_slice).unwrap_or_default();
        let booked = !passengers.contains(&id) && self.has_seat(passengers.len());
        if booked {
            state.bookings.entry(num).or_default().push(id);
        }
        debug!(target: LEDGER_TARGET, customer = id, flight = num, booked, "flight requested");
        booked
    }

    fn check_flight(&self, num: i32) -> bool {
        let state = self.state();
        let taken = state.bookings.get(&num).map_or(0, Vec::len);
        self.has_seat(taken)
    }

    fn deposit(&self, num: i32) -> i32 {
        let mut state = self.state();
        state.balance = state.balance.saturating_add(num);
        debug!(target: LEDGER_TARGET, amount = num, balance = state.balance, "deposit applied");
        state.balance
    }

    fn withdraw(&self, num: i32) -> i32 {
        let mut state = self.state();
        state.balance = state.balance.saturating_sub(num);
        debug!(target: LEDGER_TARGET, amount = num, balance = state.balance, "withdrawal applied");
        state.balance
    }
}
