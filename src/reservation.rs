//! The reservation/publication engine shared by push and pop.
//!
//! Both operations reduce to the same two steps against a pair of
//! [`SideMeta`] blocks (the caller's own side, and the opposite side it reads
//! capacity from): reserve a contiguous run of `n` slot indices by advancing
//! `head`, then publish them by advancing `tail` once every reservation
//! ordered before this one has already published. The only difference
//! between push and pop is which block plays which role, and push's `bonus`
//! of `mask` (pushing is allowed to run `mask` slots ahead of the consumer,
//! since one slot is always sacrificed to disambiguate full from empty).

use crate::backoff::spin_until_turn;
use crate::config::Behavior;
use crate::layout::SideMeta;
use std::sync::atomic::Ordering;

/// A granted reservation: `n` slots starting at `head` (pre-mask, may exceed
/// the backing array length and must be wrapped by the caller).
pub(crate) struct Reservation {
    pub(crate) head: u32,
    pub(crate) n: u32,
}

/// Computes how many slots are available to reserve on `own`'s side, given
/// the current (already-loaded) value of `own`'s head and an acquire-loaded
/// snapshot of `opposite`'s tail.
#[inline]
fn avail(own_head: u32, opposite_tail: u32, bonus: u32) -> u32 {
    bonus.wrapping_add(opposite_tail).wrapping_sub(own_head)
}

/// Reserves up to `requested` slots on `own`'s side.
///
/// Returns `None` if nothing could be reserved (either `own` is a
/// single-sided fast path with `requested` items already clamped to zero
/// availability, or a [`Behavior::Fixed`] multi-sided request couldn't be
/// satisfied in full).
pub(crate) fn reserve(
    own: &SideMeta,
    opposite: &SideMeta,
    requested: u32,
    bonus: u32,
    behavior: Behavior,
) -> Option<Reservation> {
    if requested == 0 {
        return None;
    }
    if own.single {
        reserve_single(own, opposite, requested, bonus, behavior)
    } else {
        reserve_multi(own, opposite, requested, bonus, behavior)
    }
}

fn clamp(requested: u32, room: u32, behavior: Behavior) -> Option<u32> {
    if room >= requested {
        Some(requested)
    } else if behavior == Behavior::Variable && room > 0 {
        Some(room)
    } else {
        None
    }
}

fn reserve_single(
    own: &SideMeta,
    opposite: &SideMeta,
    requested: u32,
    bonus: u32,
    behavior: Behavior,
) -> Option<Reservation> {
    let head = own.head.load(Ordering::Relaxed);
    let room = avail(head, opposite.tail_acquire(), bonus);
    let n = clamp(requested, room, behavior)?;
    own.head.store(head.wrapping_add(n), Ordering::Relaxed);
    Some(Reservation { head, n })
}

fn reserve_multi(
    own: &SideMeta,
    opposite: &SideMeta,
    requested: u32,
    bonus: u32,
    behavior: Behavior,
) -> Option<Reservation> {
    let mut head = own.head.load(Ordering::Relaxed);
    loop {
        let room = avail(head, opposite.tail_acquire(), bonus);
        let n = clamp(requested, room, behavior)?;
        let next = head.wrapping_add(n);
        match own
            .head
            .compare_exchange_weak(head, next, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return Some(Reservation { head, n }),
            Err(observed) => {
                tracing::trace!(observed, "reservation CAS lost race, retrying");
                head = observed;
                std::hint::spin_loop();
            }
        }
    }
}

/// Publishes a granted reservation: waits for `own.tail` to reach
/// `reservation.head` (every reservation ordered before this one on a
/// multi-sided ring must publish first), then advances it past this one.
///
/// Single-sided rings skip the wait: head already advances strictly in
/// program order, so tail can never be behind.
pub(crate) fn publish(own: &SideMeta, reservation: &Reservation, pause_rep: u32) {
    let next = reservation.head.wrapping_add(reservation.n);
    if own.single {
        own.tail.store(next, Ordering::Release);
    } else {
        spin_until_turn(&own.tail, reservation.head, pause_rep);
        own.tail.store(next, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(single: bool) -> SideMeta {
        SideMeta::new(8, 7, single)
    }

    #[test]
    fn single_side_reserves_full_request_when_room_exists() {
        let producer = meta(true);
        let consumer = meta(true);
        let reservation = reserve(&producer, &consumer, 3, 7, Behavior::Fixed).unwrap();
        assert_eq!(reservation.head, 0);
        assert_eq!(reservation.n, 3);
        assert_eq!(producer.head.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn fixed_behavior_rejects_when_not_enough_room() {
        let producer = meta(true);
        let consumer = meta(true);
        // bonus (mask) = 0 means zero room available regardless of requested.
        assert!(reserve(&producer, &consumer, 1, 0, Behavior::Fixed).is_none());
    }

    #[test]
    fn variable_behavior_clamps_to_available_room() {
        let producer = meta(true);
        let consumer = meta(true);
        let reservation = reserve(&producer, &consumer, 10, 4, Behavior::Variable).unwrap();
        assert_eq!(reservation.n, 4);
    }

    #[test]
    fn multi_side_reservation_advances_head_via_cas() {
        let producer = meta(false);
        let consumer = meta(false);
        let reservation = reserve(&producer, &consumer, 2, 8, Behavior::Fixed).unwrap();
        assert_eq!(reservation.head, 0);
        assert_eq!(producer.head.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn publish_advances_tail_to_reservation_end() {
        let own = meta(true);
        let reservation = Reservation { head: 0, n: 5 };
        publish(&own, &reservation, 0);
        assert_eq!(own.tail.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn publish_waits_for_turn_on_multi_side() {
        let own = meta(false);
        own.tail.store(2, Ordering::Relaxed);
        let reservation = Reservation { head: 2, n: 3 };
        publish(&own, &reservation, 0);
        assert_eq!(own.tail.load(Ordering::Relaxed), 5);
    }
}
