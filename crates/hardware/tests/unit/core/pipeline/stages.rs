//! Pipeline Stage Tests.
//!
//! Follows single instructions through Fetch, Execute, Memory, and
//! Writeback and checks what each stage leaves in its latch.

use pretty_assertions::assert_eq;

use rv32pipe_core::core::pipeline::signals::AluOp;
use rv32pipe_core::isa::Instruction;

use crate::common::builder::instruction::inst;
use crate::common::harness::{NOP, TestContext};

#[test]
fn reset_pipeline_is_empty() {
    let tc = TestContext::new();
    assert!(tc.cpu().pipeline_empty());
    assert_eq!(tc.cpu().pc.read(), 0);
}

#[test]
fn fetch_latches_pc_and_fall_through_prediction() {
    let mut tc = TestContext::new().load_program(0, &[inst().addi(1, 0, 1).build()]);

    let _ = tc.step();
    assert_eq!(tc.cpu().if_id.pc.read_pending(), 0);
    assert_eq!(tc.cpu().if_id.predict.read_pending(), 4);
    assert_eq!(tc.cpu().pc.read_pending(), 4);

    let _ = tc.step();
    assert!(!tc.cpu().pipeline_empty());
    assert_eq!(
        tc.cpu().if_id.inst.read(),
        Instruction::Imm { op: AluOp::Add, rd: 1, rs1: 0, imm: 1 }
    );
}

#[test]
fn jal_prediction_still_records_fall_through() {
    let mut tc = TestContext::new().load_program(0, &[inst().jal(0, 64).build()]);

    let _ = tc.step();
    assert_eq!(tc.cpu().pc.read_pending(), 64);
    assert_eq!(tc.cpu().if_id.predict.read_pending(), 4);
}

#[test]
fn execute_uses_instruction_pc_for_auipc() {
    let mut tc = TestContext::new().load_program(0, &[NOP, inst().auipc(1, 1).build()]);

    let _ = tc.run(7);
    assert_eq!(tc.get_reg(1), 0x1004);
}

#[test]
fn halfword_store_preserves_neighbouring_bytes() {
    let mut tc = TestContext::new().load_program(
        0,
        &[
            inst().addi(1, 0, 0x100).build(),
            inst().addi(2, 0, 0x123).build(),
            inst().sh(1, 2, 1).build(),
            inst().lw(3, 1, 0).build(),
        ],
    );
    tc.write_word(0x100, 0xAABB_CCDD);

    let _ = tc.run(9);
    assert_eq!(tc.get_reg(3), 0xAA01_23DD);
}

#[test]
fn byte_loads_extend_by_signedness() {
    let mut tc = TestContext::new().load_program(
        0,
        &[
            inst().addi(1, 0, 0x100).build(),
            inst().lb(2, 1, 0).build(),
            inst().lbu(3, 1, 0).build(),
            inst().lh(4, 1, 0).build(),
            inst().lhu(5, 1, 0).build(),
        ],
    );
    tc.write_word(0x100, 0x0000_8080);

    let _ = tc.run(10);
    assert_eq!(tc.get_reg(2), 0xFFFF_FF80);
    assert_eq!(tc.get_reg(3), 0x80);
    assert_eq!(tc.get_reg(4), 0xFFFF_8080);
    assert_eq!(tc.get_reg(5), 0x8080);
}

#[test]
fn writeback_to_zero_register_is_discarded() {
    let mut tc = TestContext::new().load_program(0, &[inst().addi(0, 0, 5).build()]);

    let _ = tc.run(6);
    assert_eq!(tc.get_reg(0), 0);
    assert_eq!(tc.cpu().stats.instructions_retired, 2, "addi and one padding nop");
}

#[test]
fn bubbles_do_not_count_as_retired() {
    let mut tc = TestContext::new().load_program(0, &[inst().addi(1, 0, 1).build()]);

    let _ = tc.run(4);
    assert_eq!(tc.cpu().stats.instructions_retired, 0);

    let _ = tc.step();
    assert_eq!(tc.cpu().stats.instructions_retired, 1);
    assert_eq!(tc.get_reg(1), 1);
}
