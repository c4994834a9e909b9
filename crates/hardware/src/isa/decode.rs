//! RISC-V Instruction Decoder.
//!
//! This module turns 32-bit RV32I instruction encodings into [`Instruction`]
//! values. It dispatches on the major opcode to one decoder per format, each
//! of which selects the concrete operation from the function-code fields,
//! extracts register indices, and reassembles the sign-extended immediate
//! from its scattered fields (R, I, S, B, U, J).

use crate::common::error::DecodeError;
use crate::core::pipeline::signals::{AluOp, BranchCond, LoadOp, StoreOp};
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// The immediate occupies the upper 12 bits and is sign-extended.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// The immediate is split across two non-contiguous fields.
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// Bit shift for extracting B-Type immediate bit 11 (bit 7 of instruction).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// The immediate represents a signed offset in multiples of 2 (even addresses only).
const B_IMM_11_SHIFT: u32 = 7;

/// Bit mask for B-Type immediate bit 11.
const B_IMM_11_MASK: u32 = 1;

/// Bit shift for extracting B-Type immediate bits 4-1 (bits 8-11 of instruction).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-Type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for extracting B-Type immediate bits 10-5 (bits 25-30 of instruction).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-Type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift for extracting B-Type immediate bit 12 (bit 31 of instruction).
const B_IMM_12_SHIFT: u32 = 31;

/// Bit mask for B-Type immediate bit 12 (sign bit).
const B_IMM_12_MASK: u32 = 1;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Bit position of bit 12 in the reconstructed B-Type immediate.
const B_IMM_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed B-Type immediate.
const B_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-5 in the reconstructed B-Type immediate.
const B_IMM_10_5_POS: u32 = 5;

/// Bit position of bits 4-1 in the reconstructed B-Type immediate.
const B_IMM_4_1_POS: u32 = 1;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// The immediate keeps its position; the low 12 bits are zero.
const U_IMM_MASK: u32 = 0xFFFFF000;

/// Bit shift for extracting J-Type immediate bits 19-12 (bits 12-19 of instruction).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// The immediate represents a signed offset in multiples of 2 (even addresses only).
const J_IMM_19_12_SHIFT: u32 = 12;

/// Bit mask for J-Type immediate bits 19-12 (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;

/// Bit shift for extracting J-Type immediate bit 11 (bit 20 of instruction).
const J_IMM_11_SHIFT: u32 = 20;

/// Bit mask for J-Type immediate bit 11.
const J_IMM_11_MASK: u32 = 1;

/// Bit shift for extracting J-Type immediate bits 10-1 (bits 21-30 of instruction).
const J_IMM_10_1_SHIFT: u32 = 21;

/// Bit mask for J-Type immediate bits 10-1 (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;

/// Bit shift for extracting J-Type immediate bit 20 (bit 31 of instruction).
const J_IMM_20_SHIFT: u32 = 31;

/// Bit mask for J-Type immediate bit 20 (sign bit).
const J_IMM_20_MASK: u32 = 1;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Bit position of bit 20 in the reconstructed J-Type immediate.
const J_IMM_20_POS: u32 = 20;

/// Bit position of bits 19-12 in the reconstructed J-Type immediate.
const J_IMM_19_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed J-Type immediate.
const J_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-1 in the reconstructed J-Type immediate.
const J_IMM_10_1_POS: u32 = 1;

/// Decodes a RISC-V instruction word.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// The decoded [`Instruction`], or a [`DecodeError`] if the opcode or
/// function-code combination is outside the supported set.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::isa::{decode, Instruction};
/// use rv32pipe_core::core::pipeline::signals::AluOp;
///
/// // addi x1, x0, 5
/// let inst = decode(0x0050_0093).unwrap();
/// assert_eq!(inst, Instruction::Imm { op: AluOp::Add, rd: 1, rs1: 0, imm: 5 });
/// ```
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    match word.opcode() {
        opcodes::OP_REG => decode_r_type(word),
        opcodes::OP_IMM => decode_i_type(word),
        opcodes::OP_LOAD => decode_load(word),
        opcodes::OP_JALR => decode_jalr(word),
        opcodes::OP_STORE => decode_s_type(word),
        opcodes::OP_BRANCH => decode_b_type(word),
        opcodes::OP_LUI | opcodes::OP_AUIPC => Ok(decode_u_type(word)),
        opcodes::OP_JAL => Ok(decode_j_type(word)),
        opcode => Err(DecodeError::UnknownOpcode { word, opcode }),
    }
}

/// Builds the error for an unsupported function-code combination.
fn unknown_function(word: u32) -> DecodeError {
    DecodeError::UnknownFunction {
        word,
        opcode: word.opcode(),
        funct3: word.funct3(),
        funct7: word.funct7(),
    }
}

/// Decodes an R-Type register-register ALU instruction.
///
/// R-Type format: `funct7 | rs2 | rs1 | funct3 | rd | opcode`
fn decode_r_type(word: u32) -> Result<Instruction, DecodeError> {
    let op = match (word.funct3(), word.funct7()) {
        (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
        (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
        (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
        (funct3::SLT, funct7::DEFAULT) => AluOp::Slt,
        (funct3::SLTU, funct7::DEFAULT) => AluOp::Sltu,
        (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
        (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
        (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
        (funct3::OR, funct7::DEFAULT) => AluOp::Or,
        (funct3::AND, funct7::DEFAULT) => AluOp::And,
        _ => return Err(unknown_function(word)),
    };

    Ok(Instruction::Reg {
        op,
        rd: word.rd(),
        rs1: word.rs1(),
        rs2: word.rs2(),
    })
}

/// Decodes an I-Type register-immediate ALU instruction.
///
/// Shifts carry their 5-bit amount in the `rs2` position and use `funct7`
/// to separate logical from arithmetic right shifts.
fn decode_i_type(word: u32) -> Result<Instruction, DecodeError> {
    let (op, imm) = match word.funct3() {
        funct3::ADD_SUB => (AluOp::Add, decode_i_type_imm(word)),
        funct3::SLT => (AluOp::Slt, decode_i_type_imm(word)),
        funct3::SLTU => (AluOp::Sltu, decode_i_type_imm(word)),
        funct3::XOR => (AluOp::Xor, decode_i_type_imm(word)),
        funct3::OR => (AluOp::Or, decode_i_type_imm(word)),
        funct3::AND => (AluOp::And, decode_i_type_imm(word)),
        funct3::SLL if word.funct7() == funct7::DEFAULT => (AluOp::Sll, word.rs2() as i32),
        funct3::SRL_SRA if word.funct7() == funct7::DEFAULT => (AluOp::Srl, word.rs2() as i32),
        funct3::SRL_SRA if word.funct7() == funct7::SRA => (AluOp::Sra, word.rs2() as i32),
        _ => return Err(unknown_function(word)),
    };

    Ok(Instruction::Imm {
        op,
        rd: word.rd(),
        rs1: word.rs1(),
        imm,
    })
}

/// Decodes an I-Type load.
fn decode_load(word: u32) -> Result<Instruction, DecodeError> {
    let op = match word.funct3() {
        funct3::LB => LoadOp::Lb,
        funct3::LH => LoadOp::Lh,
        funct3::LW => LoadOp::Lw,
        funct3::LBU => LoadOp::Lbu,
        funct3::LHU => LoadOp::Lhu,
        _ => return Err(unknown_function(word)),
    };

    Ok(Instruction::Load {
        op,
        rd: word.rd(),
        rs1: word.rs1(),
        imm: decode_i_type_imm(word),
    })
}

/// Decodes the I-Type register-indirect jump.
fn decode_jalr(word: u32) -> Result<Instruction, DecodeError> {
    if word.funct3() != funct3::JALR {
        return Err(unknown_function(word));
    }

    Ok(Instruction::Jalr {
        rd: word.rd(),
        rs1: word.rs1(),
        imm: decode_i_type_imm(word),
    })
}

/// Decodes an S-Type store.
fn decode_s_type(word: u32) -> Result<Instruction, DecodeError> {
    let op = match word.funct3() {
        funct3::SB => StoreOp::Sb,
        funct3::SH => StoreOp::Sh,
        funct3::SW => StoreOp::Sw,
        _ => return Err(unknown_function(word)),
    };

    Ok(Instruction::Store {
        op,
        rs1: word.rs1(),
        rs2: word.rs2(),
        imm: decode_s_type_imm(word),
    })
}

/// Decodes a B-Type conditional branch.
fn decode_b_type(word: u32) -> Result<Instruction, DecodeError> {
    let cond = match word.funct3() {
        funct3::BEQ => BranchCond::Eq,
        funct3::BNE => BranchCond::Ne,
        funct3::BLT => BranchCond::Lt,
        funct3::BGE => BranchCond::Ge,
        funct3::BLTU => BranchCond::Ltu,
        funct3::BGEU => BranchCond::Geu,
        _ => return Err(unknown_function(word)),
    };

    Ok(Instruction::Branch {
        cond,
        rs1: word.rs1(),
        rs2: word.rs2(),
        imm: decode_b_type_imm(word),
    })
}

/// Decodes a U-Type instruction (LUI or AUIPC).
///
/// Only called for those two opcodes.
fn decode_u_type(word: u32) -> Instruction {
    let rd = word.rd();
    let imm = decode_u_type_imm(word);
    if word.opcode() == opcodes::OP_LUI {
        Instruction::Lui { rd, imm }
    } else {
        Instruction::Auipc { rd, imm }
    }
}

/// Decodes the J-Type jump and link.
fn decode_j_type(word: u32) -> Instruction {
    Instruction::Jal {
        rd: word.rd(),
        imm: decode_j_type_imm(word),
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load, JALR, and Immediate Arithmetic instructions.
const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// Used for Store instructions.
const fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Used for Conditional Branch instructions. The immediate represents an even offset.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// Used for LUI and AUIPC.
const fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Used for JAL (Unconditional Jump).
const fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val as i32) << shift >> shift
}
