//! Statistics Tests.

use pretty_assertions::assert_eq;

use rv32pipe_core::stats::SimStats;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TestContext, exit_sequence};

#[test]
fn straight_line_program_counts() {
    let mut program = vec![
        inst().addi(1, 0, 5).build(),
        inst().addi(2, 0, 7).build(),
        inst().add(10, 1, 2).build(),
    ];
    program.extend(exit_sequence());
    let mut tc = TestContext::new().load_program(0, &program);

    let _ = tc.run_to_exit();
    let stats = tc.sim.stats();

    // Exit store executes in cycle 7, then two drain cycles.
    assert_eq!(stats.cycles, 9);
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.load_use_stalls, 0);
    assert_eq!(stats.flushes(), 0);
    assert!((stats.cpi() - 1.8).abs() < 1e-9);
    assert!((stats.ipc() - 5.0 / 9.0).abs() < 1e-9);
}

#[test]
fn stall_adds_one_cycle() {
    let mut program = vec![
        inst().lw(1, 0, 0x100).build(),
        inst().addi(10, 1, 0).build(),
    ];
    program.extend(exit_sequence());
    let mut tc = TestContext::new().load_program(0, &program);

    let _ = tc.run_to_exit();
    let stats = tc.sim.stats();
    assert_eq!(stats.load_use_stalls, 1);
    assert_eq!(stats.cycles, 9);
    assert_eq!(stats.instructions_retired, 4);
}

#[test]
fn empty_stats_have_zero_ratios() {
    let stats = SimStats::default();
    assert_eq!(stats.cpi(), 0.0);
    assert_eq!(stats.ipc(), 0.0);
    assert_eq!(stats.flushes(), 0);
}
