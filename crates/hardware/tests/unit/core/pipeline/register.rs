//! Clocked Register Tests.
//!
//! Verifies the two-buffer cell every latch is built from: writes stay
//! pending until the clock edge, priority writes hold the cell for the
//! rest of the cycle, stall-sensitive cells freeze, and zero cells always
//! read zero.

use proptest::prelude::*;

use rv32pipe_core::core::pipeline::register::ClockedRegister;

#[test]
fn write_is_invisible_until_commit() {
    let mut reg = ClockedRegister::<u32>::new();
    assert!(reg.write(7));
    assert_eq!(reg.read(), 0);
    assert_eq!(reg.read_pending(), 7);

    reg.commit(false);
    assert_eq!(reg.read(), 7);
}

#[test]
fn priority_write_drops_later_ordinary_write() {
    let mut reg = ClockedRegister::<u32>::new();
    assert!(reg.write_sel(0x100));
    assert!(reg.is_held());
    assert!(!reg.write(0x200), "ordinary write after a priority write is dropped");
    assert_eq!(reg.read_pending(), 0x100);

    reg.commit(false);
    assert_eq!(reg.read(), 0x100);
    assert!(!reg.is_held(), "commit releases the hold");
}

#[test]
fn only_first_priority_write_lands() {
    let mut reg = ClockedRegister::<u32>::new();
    assert!(reg.write_sel(1));
    assert!(!reg.write_sel(2));
    reg.commit(false);
    assert_eq!(reg.read(), 1);
}

#[test]
fn ordinary_write_before_priority_write_is_overridden() {
    let mut reg = ClockedRegister::<u32>::new();
    assert!(reg.write(5));
    assert!(reg.write_sel(9));
    reg.commit(false);
    assert_eq!(reg.read(), 9);
}

#[test]
fn hold_lasts_one_cycle() {
    let mut reg = ClockedRegister::<u32>::new();
    let _ = reg.write_sel(1);
    reg.commit(false);
    assert!(reg.write(2));
    reg.commit(false);
    assert_eq!(reg.read(), 2);
}

#[test]
fn stall_sensitive_cell_freezes_during_stall() {
    let mut reg = ClockedRegister::<u32>::stall_sensitive();
    let _ = reg.write(4);
    reg.commit(false);

    let _ = reg.write(8);
    reg.commit(true);
    assert_eq!(reg.read(), 4, "stalled edge keeps the committed value");

    reg.commit(false);
    assert_eq!(reg.read(), 8, "pending value survives the stall");
}

#[test]
fn stall_releases_hold_even_when_frozen() {
    let mut reg = ClockedRegister::<u32>::stall_sensitive();
    let _ = reg.write_sel(3);
    reg.commit(true);
    assert!(!reg.is_held());
    assert_eq!(reg.read(), 0);
}

#[test]
fn ordinary_cell_ignores_stall() {
    let mut reg = ClockedRegister::<u32>::new();
    let _ = reg.write(4);
    reg.commit(true);
    assert_eq!(reg.read(), 4);
}

proptest! {
    #[test]
    fn zero_cell_always_reads_zero(values in proptest::collection::vec(any::<u32>(), 1..16)) {
        let mut reg = ClockedRegister::<u32>::zero();
        for v in values {
            let _ = reg.write(v);
            reg.commit(false);
            prop_assert_eq!(reg.read(), 0);
            let _ = reg.write_sel(v);
            reg.commit(false);
            prop_assert_eq!(reg.read(), 0);
        }
    }
}
