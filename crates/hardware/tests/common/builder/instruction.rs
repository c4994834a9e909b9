use rv32pipe_core::isa::rv32i::opcodes::*;

/// Fluent encoder for RV32I instruction words.
///
/// The helper methods set every field of one instruction; `build` lays the
/// fields out according to the format implied by the opcode.
#[derive(Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    // --- R-type ---

    fn r(mut self, funct3: u32, funct7: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode = OP_REG;
        self.funct3 = funct3;
        self.funct7 = funct7;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b000, 0b0000000, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b000, 0b0100000, rd, rs1, rs2)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b001, 0b0000000, rd, rs1, rs2)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b010, 0b0000000, rd, rs1, rs2)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b011, 0b0000000, rd, rs1, rs2)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b100, 0b0000000, rd, rs1, rs2)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b101, 0b0000000, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b101, 0b0100000, rd, rs1, rs2)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b110, 0b0000000, rd, rs1, rs2)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(0b111, 0b0000000, rd, rs1, rs2)
    }

    // --- I-type ---

    fn i(mut self, opcode: u32, funct3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = opcode;
        self.funct3 = funct3;
        self.rd = rd;
        self.rs1 = rs1;
        self.imm = imm;
        self
    }

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, 0b000, rd, rs1, imm)
    }

    pub fn slti(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, 0b010, rd, rs1, imm)
    }

    pub fn sltiu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, 0b011, rd, rs1, imm)
    }

    pub fn xori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, 0b100, rd, rs1, imm)
    }

    pub fn ori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, 0b110, rd, rs1, imm)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, 0b111, rd, rs1, imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.i(OP_IMM, 0b001, rd, rs1, (shamt & 0x1F) as i32)
    }

    pub fn srli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.i(OP_IMM, 0b101, rd, rs1, (shamt & 0x1F) as i32)
    }

    pub fn srai(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.i(OP_IMM, 0b101, rd, rs1, (0b0100000 << 5 | (shamt & 0x1F)) as i32)
    }

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_LOAD, 0b000, rd, rs1, imm)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_LOAD, 0b001, rd, rs1, imm)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_LOAD, 0b010, rd, rs1, imm)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_LOAD, 0b100, rd, rs1, imm)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_LOAD, 0b101, rd, rs1, imm)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_JALR, 0b000, rd, rs1, imm)
    }

    // --- S-type ---

    fn s(mut self, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_STORE;
        self.funct3 = funct3;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self
    }

    pub fn sb(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.s(0b000, rs1, rs2, imm)
    }

    pub fn sh(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.s(0b001, rs1, rs2, imm)
    }

    pub fn sw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.s(0b010, rs1, rs2, imm)
    }

    // --- B-type ---

    fn b(mut self, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_BRANCH;
        self.funct3 = funct3;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(0b000, rs1, rs2, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(0b001, rs1, rs2, imm)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(0b100, rs1, rs2, imm)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(0b101, rs1, rs2, imm)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(0b110, rs1, rs2, imm)
    }

    pub fn bgeu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(0b111, rs1, rs2, imm)
    }

    // --- U-type and J-type ---

    /// `upper` is the 20-bit value placed in bits 31-12.
    pub fn lui(mut self, rd: u32, upper: u32) -> Self {
        self.opcode = OP_LUI;
        self.rd = rd;
        self.imm = (upper << 12) as i32;
        self
    }

    /// `upper` is the 20-bit value placed in bits 31-12.
    pub fn auipc(mut self, rd: u32, upper: u32) -> Self {
        self.opcode = OP_AUIPC;
        self.rd = rd;
        self.imm = (upper << 12) as i32;
        self
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn build(self) -> u32 {
        let imm = self.imm as u32;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;

        match self.opcode {
            OP_IMM | OP_LOAD | OP_JALR => (imm & 0xFFF) << 20 | rs1 | funct3 | rd | self.opcode,
            OP_STORE => {
                (imm >> 5 & 0x7F) << 25 | rs2 | rs1 | funct3 | (imm & 0x1F) << 7 | self.opcode
            }
            OP_BRANCH => {
                (imm >> 12 & 1) << 31
                    | (imm >> 5 & 0x3F) << 25
                    | rs2
                    | rs1
                    | funct3
                    | (imm >> 1 & 0xF) << 8
                    | (imm >> 11 & 1) << 7
                    | self.opcode
            }
            OP_LUI | OP_AUIPC => (imm & 0xFFFF_F000) | rd | self.opcode,
            OP_JAL => {
                (imm >> 20 & 1) << 31
                    | (imm >> 1 & 0x3FF) << 21
                    | (imm >> 11 & 1) << 20
                    | (imm >> 12 & 0xFF) << 12
                    | rd
                    | self.opcode
            }
            _ => (self.funct7 & 0x7F) << 25 | rs2 | rs1 | funct3 | rd | self.opcode,
        }
    }
}

/// Shorthand for `InstructionBuilder::new()`.
pub fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}
