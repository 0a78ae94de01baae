//! Capability interfaces connecting the dispatch core to its collaborators.
//!
//! [`Contract`] is implemented by the server's resource manager and carries
//! the business operations. [`Callback`] is implemented by the client and
//! receives each operation's result. Neither trait knows about the other or
//! about the dispatcher; the command registry is the only place that pairs
//! an operation with its result handler.

use std::sync::Arc;

/// Business operations a server executes on behalf of clients.
///
/// Implementations own whatever mutable state the operations need and are
/// responsible for their own synchronisation: the dispatcher may call into a
/// contract from any thread.
pub trait Contract: Send + Sync {
    /// Books customer `id` onto flight `num`, returning whether it succeeded.
    fn request_flight(&self, id: i32, num: i32) -> bool;

    /// Reports whether flight `num` can still take bookings.
    fn check_flight(&self, num: i32) -> bool;

    /// Deposits `num` and returns the resulting balance.
    fn deposit(&self, num: i32) -> i32;

    /// Withdraws `num` and returns the resulting balance.
    fn withdraw(&self, num: i32) -> i32;
}

/// Result handlers a client exposes to receive answers from the server.
///
/// Handlers may run on a different thread from the one that submitted the
/// command.
pub trait Callback: Send + Sync {
    /// Receives the outcome of `requestFlight`.
    fn on_request_flight(&self, booked: bool);

    /// Receives the outcome of `checkFlight`.
    fn on_check_flight(&self, available: bool);

    /// Receives the balance after `deposit`.
    fn on_deposit(&self, balance: i32);

    /// Receives the balance after `withdraw`.
    fn on_withdraw(&self, balance: i32);
}

impl<T> Contract for Arc<T>
where
    T: Contract + ?Sized,
{
    fn request_flight(&self, id: i32, num: i32) -> bool {
        (**self).request_flight(id, num)
    }

    fn check_flight(&self, num: i32) -> bool {
        (**self).check_flight(num)
    }

    fn deposit(&self, num: i32) -> i32 {
        (**self).deposit(num)
    }

    fn withdraw(&self, num: i32) -> i32 {
        (**self).withdraw(num)
    }
}

impl<T> Callback for Arc<T>
where
    T: Callback + ?Sized,
{
    fn on_request_flight(&self, booked: bool) {
        (**self).on_request_flight(booked);
    }

    fn on_check_flight(&self, available: bool) {
        (**self).on_check_flight(available);
    }

    fn on_deposit(&self, balance: i32) {
        (**self).on_deposit(balance);
    }

    fn on_withdraw(&self, balance: i32) {
        (**self).on_withdraw(balance);
    }
}
