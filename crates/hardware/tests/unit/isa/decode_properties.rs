//! Instruction Decode Properties: Full RV32I Subset Coverage.
//!
//! Verifies that `decode()` selects the right variant and extracts register
//! fields and sign-extended immediates for every supported format, and that
//! encodings outside the supported set fail with `DecodeError`.
//!
//! # Coverage Matrix
//!
//! - R-type:  OP_REG (add, sub, sll, slt, sltu, xor, srl, sra, or, and)
//! - I-type:  OP_IMM (incl. shifts), OP_LOAD, OP_JALR
//! - S-type:  OP_STORE
//! - B-type:  OP_BRANCH
//! - U-type:  OP_LUI, OP_AUIPC
//! - J-type:  OP_JAL

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rv32pipe_core::common::DecodeError;
use rv32pipe_core::core::pipeline::signals::{AluOp, BranchCond, LoadOp, StoreOp};
use rv32pipe_core::isa::decode::decode;
use rv32pipe_core::isa::instruction::{Instruction, InstructionBits};
use rv32pipe_core::isa::rv32i::opcodes::{OP_BRANCH, OP_IMM, OP_JAL, OP_LUI};

use crate::common::builder::instruction::inst;

// ──────────────────────────────────────────────────────────
// Hand-assembled words
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::addi_positive(0x0050_0093, Instruction::Imm { op: AluOp::Add, rd: 1, rs1: 0, imm: 5 })]
#[case::addi_negative(0xFFF0_0093, Instruction::Imm { op: AluOp::Add, rd: 1, rs1: 0, imm: -1 })]
#[case::add(0x0020_81B3, Instruction::Reg { op: AluOp::Add, rd: 3, rs1: 1, rs2: 2 })]
#[case::sub(0x4020_81B3, Instruction::Reg { op: AluOp::Sub, rd: 3, rs1: 1, rs2: 2 })]
#[case::lw(0xFFC1_2283, Instruction::Load { op: LoadOp::Lw, rd: 5, rs1: 2, imm: -4 })]
#[case::sw(0x00A1_2423, Instruction::Store { op: StoreOp::Sw, rs1: 2, rs2: 10, imm: 8 })]
#[case::lui(0x0003_02B7, Instruction::Lui { rd: 5, imm: 0x0003_0000 })]
#[case::jal_back(0xFF9F_F0EF, Instruction::Jal { rd: 1, imm: -8 })]
fn decodes_hand_assembled_words(#[case] word: u32, #[case] expected: Instruction) {
    assert_eq!(decode(word).unwrap(), expected);
}

// ──────────────────────────────────────────────────────────
// Every supported operation, built with the encoder
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::add(inst().add(3, 1, 2).build(), AluOp::Add)]
#[case::sub(inst().sub(3, 1, 2).build(), AluOp::Sub)]
#[case::sll(inst().sll(3, 1, 2).build(), AluOp::Sll)]
#[case::slt(inst().slt(3, 1, 2).build(), AluOp::Slt)]
#[case::sltu(inst().sltu(3, 1, 2).build(), AluOp::Sltu)]
#[case::xor(inst().xor(3, 1, 2).build(), AluOp::Xor)]
#[case::srl(inst().srl(3, 1, 2).build(), AluOp::Srl)]
#[case::sra(inst().sra(3, 1, 2).build(), AluOp::Sra)]
#[case::or(inst().or(3, 1, 2).build(), AluOp::Or)]
#[case::and(inst().and(3, 1, 2).build(), AluOp::And)]
fn r_type_selects_alu_op(#[case] word: u32, #[case] op: AluOp) {
    assert_eq!(
        decode(word).unwrap(),
        Instruction::Reg { op, rd: 3, rs1: 1, rs2: 2 }
    );
}

#[rstest]
#[case::addi(inst().addi(7, 8, -100).build(), AluOp::Add, -100)]
#[case::slti(inst().slti(7, 8, -1).build(), AluOp::Slt, -1)]
#[case::sltiu(inst().sltiu(7, 8, 1).build(), AluOp::Sltu, 1)]
#[case::xori(inst().xori(7, 8, 0x7FF).build(), AluOp::Xor, 0x7FF)]
#[case::ori(inst().ori(7, 8, -2048).build(), AluOp::Or, -2048)]
#[case::andi(inst().andi(7, 8, 0xF0).build(), AluOp::And, 0xF0)]
#[case::slli(inst().slli(7, 8, 31).build(), AluOp::Sll, 31)]
#[case::srli(inst().srli(7, 8, 4).build(), AluOp::Srl, 4)]
#[case::srai(inst().srai(7, 8, 4).build(), AluOp::Sra, 4)]
fn i_type_selects_alu_op_and_immediate(#[case] word: u32, #[case] op: AluOp, #[case] imm: i32) {
    assert_eq!(
        decode(word).unwrap(),
        Instruction::Imm { op, rd: 7, rs1: 8, imm }
    );
}

#[rstest]
#[case::lb(inst().lb(9, 2, -1).build(), LoadOp::Lb)]
#[case::lh(inst().lh(9, 2, -1).build(), LoadOp::Lh)]
#[case::lw(inst().lw(9, 2, -1).build(), LoadOp::Lw)]
#[case::lbu(inst().lbu(9, 2, -1).build(), LoadOp::Lbu)]
#[case::lhu(inst().lhu(9, 2, -1).build(), LoadOp::Lhu)]
fn loads_select_width_and_extension(#[case] word: u32, #[case] op: LoadOp) {
    assert_eq!(
        decode(word).unwrap(),
        Instruction::Load { op, rd: 9, rs1: 2, imm: -1 }
    );
}

#[rstest]
#[case::sb(inst().sb(2, 11, -3).build(), StoreOp::Sb)]
#[case::sh(inst().sh(2, 11, -3).build(), StoreOp::Sh)]
#[case::sw(inst().sw(2, 11, -3).build(), StoreOp::Sw)]
fn stores_select_width(#[case] word: u32, #[case] op: StoreOp) {
    assert_eq!(
        decode(word).unwrap(),
        Instruction::Store { op, rs1: 2, rs2: 11, imm: -3 }
    );
}

#[rstest]
#[case::beq(inst().beq(4, 5, -16).build(), BranchCond::Eq)]
#[case::bne(inst().bne(4, 5, -16).build(), BranchCond::Ne)]
#[case::blt(inst().blt(4, 5, -16).build(), BranchCond::Lt)]
#[case::bge(inst().bge(4, 5, -16).build(), BranchCond::Ge)]
#[case::bltu(inst().bltu(4, 5, -16).build(), BranchCond::Ltu)]
#[case::bgeu(inst().bgeu(4, 5, -16).build(), BranchCond::Geu)]
fn branches_select_predicate(#[case] word: u32, #[case] cond: BranchCond) {
    assert_eq!(
        decode(word).unwrap(),
        Instruction::Branch { cond, rs1: 4, rs2: 5, imm: -16 }
    );
}

#[test]
fn jumps_and_upper_immediates() {
    assert_eq!(
        decode(inst().jalr(1, 6, 12).build()).unwrap(),
        Instruction::Jalr { rd: 1, rs1: 6, imm: 12 }
    );
    assert_eq!(
        decode(inst().jal(0, 2048).build()).unwrap(),
        Instruction::Jal { rd: 0, imm: 2048 }
    );
    assert_eq!(
        decode(inst().auipc(12, 0xFFFFF).build()).unwrap(),
        Instruction::Auipc { rd: 12, imm: 0xFFFF_F000_u32 as i32 }
    );
    assert_eq!(
        decode(inst().lui(12, 0x12345).build()).unwrap(),
        Instruction::Lui { rd: 12, imm: 0x1234_5000 }
    );
}

// ──────────────────────────────────────────────────────────
// Unsupported encodings
// ──────────────────────────────────────────────────────────

#[test]
fn all_zero_word_is_unknown_opcode() {
    assert_eq!(
        decode(0),
        Err(DecodeError::UnknownOpcode { word: 0, opcode: 0 })
    );
}

#[rstest]
#[case::system_ecall(0x0000_0073)]
#[case::fence(0x0000_000F)]
#[case::op_imm_32(0x0000_001B)]
#[case::amo(0x0000_002F)]
fn unsupported_opcodes_are_rejected(#[case] word: u32) {
    assert!(matches!(
        decode(word),
        Err(DecodeError::UnknownOpcode { .. })
    ));
}

#[rstest]
// mul x3, x1, x2 (M extension)
#[case::mul(inst().add(3, 1, 2).funct7(0b0000001).build())]
#[case::load_funct3_3(inst().lw(1, 2, 0).funct3(0b011).build())]
#[case::store_funct3_4(inst().sw(1, 2, 0).funct3(0b100).build())]
#[case::branch_funct3_2(inst().beq(1, 2, 8).funct3(0b010).build())]
#[case::jalr_funct3_1(inst().jalr(1, 2, 0).funct3(0b001).build())]
fn unsupported_functions_are_rejected(#[case] word: u32) {
    let err = decode(word).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownFunction { .. }));
    assert_eq!(err.word(), word);
}

#[test]
fn shift_immediate_with_bad_funct7_is_rejected() {
    // slli with bit 30 set is not a valid encoding.
    let word = inst().slli(1, 1, 3).build() | 0x4000_0000;
    assert!(matches!(
        decode(word),
        Err(DecodeError::UnknownFunction { funct3: 0b001, funct7: 0b0100000, .. })
    ));
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn r_type_fields_round_trip(rd in 0u32..32, rs1 in 0u32..32, rs2 in 0u32..32) {
        let word = inst().xor(rd, rs1, rs2).build();
        prop_assert_eq!(word.rd(), rd as usize);
        prop_assert_eq!(word.rs1(), rs1 as usize);
        prop_assert_eq!(word.rs2(), rs2 as usize);
        prop_assert_eq!(
            decode(word).unwrap(),
            Instruction::Reg { op: AluOp::Xor, rd: rd as usize, rs1: rs1 as usize, rs2: rs2 as usize }
        );
    }

    #[test]
    fn i_immediate_sign_extends_from_bit_11(field in 0u32..0x1000) {
        let word = field << 20 | OP_IMM;
        let Instruction::Imm { imm, .. } = decode(word).unwrap() else {
            panic!("addi decodes to Imm");
        };
        if field & 0x800 != 0 {
            prop_assert_eq!(imm as u32 & 0xFFFF_F000, 0xFFFF_F000);
        } else {
            prop_assert_eq!(imm as u32 & 0xFFFF_F000, 0);
        }
        prop_assert_eq!(imm as u32 & 0xFFF, field);
    }

    #[test]
    fn s_immediate_reassembles_split_fields(imm in -2048i32..2048) {
        let Instruction::Store { imm: got, .. } = decode(inst().sh(3, 4, imm).build()).unwrap() else {
            panic!("sh decodes to Store");
        };
        prop_assert_eq!(got, imm);
    }

    #[test]
    fn b_immediate_sign_extends_from_bit_12(half in -2048i32..2048) {
        let imm = half * 2;
        let word = inst().bge(1, 2, imm).build();
        prop_assert_eq!(word & 0x7F, OP_BRANCH);
        let Instruction::Branch { imm: got, .. } = decode(word).unwrap() else {
            panic!("bge decodes to Branch");
        };
        prop_assert_eq!(got, imm);
        prop_assert_eq!(got < 0, word >> 31 == 1);
    }

    #[test]
    fn j_immediate_sign_extends_from_bit_20(half in -(1i32 << 19)..(1i32 << 19)) {
        let imm = half * 2;
        let word = inst().jal(1, imm).build();
        prop_assert_eq!(word & 0x7F, OP_JAL);
        let Instruction::Jal { imm: got, .. } = decode(word).unwrap() else {
            panic!("jal decodes to Jal");
        };
        prop_assert_eq!(got, imm);
    }

    #[test]
    fn u_immediate_keeps_low_bits_clear(upper in 0u32..0x10_0000) {
        let word = inst().lui(1, upper).build();
        prop_assert_eq!(word & 0x7F, OP_LUI);
        let Instruction::Lui { imm, .. } = decode(word).unwrap() else {
            panic!("lui decodes to Lui");
        };
        prop_assert_eq!(imm as u32, upper << 12);
    }
}
