//! Pipeline control signals and operation types.
//!
//! This module defines the per-instruction operation selectors carried inside
//! decoded instructions. It performs:
//! 1. **Operation Classification:** Selects the ALU function for arithmetic instructions.
//! 2. **Branch Control:** Selects the comparison predicate for conditional branches.
//! 3. **Memory Control:** Specifies access widths and sign-extension requirements.

use crate::common::data::AccessWidth;

/// ALU operation types for integer instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

impl AluOp {
    /// Assembler mnemonic of the register-register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
        }
    }
}

/// Comparison predicate of a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// Taken when the operands are equal.
    Eq,
    /// Taken when the operands differ.
    Ne,
    /// Taken when `rs1 < rs2` as signed values.
    Lt,
    /// Taken when `rs1 >= rs2` as signed values.
    Ge,
    /// Taken when `rs1 < rs2` as unsigned values.
    Ltu,
    /// Taken when `rs1 >= rs2` as unsigned values.
    Geu,
}

impl BranchCond {
    /// Assembler mnemonic of the branch.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "beq",
            Self::Ne => "bne",
            Self::Lt => "blt",
            Self::Ge => "bge",
            Self::Ltu => "bltu",
            Self::Geu => "bgeu",
        }
    }
}

/// Width and extension of a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOp {
    /// Load byte, sign-extended.
    Lb,
    /// Load halfword, sign-extended.
    Lh,
    /// Load word.
    Lw,
    /// Load byte, zero-extended.
    Lbu,
    /// Load halfword, zero-extended.
    Lhu,
}

impl LoadOp {
    /// Memory access width of the load.
    pub const fn width(self) -> AccessWidth {
        match self {
            Self::Lb | Self::Lbu => AccessWidth::Byte,
            Self::Lh | Self::Lhu => AccessWidth::Half,
            Self::Lw => AccessWidth::Word,
        }
    }

    /// Whether the loaded value is sign-extended to 32 bits.
    pub const fn signed(self) -> bool {
        matches!(self, Self::Lb | Self::Lh | Self::Lw)
    }

    /// Assembler mnemonic of the load.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
        }
    }
}

/// Width of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOp {
    /// Store the low byte.
    Sb,
    /// Store the low halfword.
    Sh,
    /// Store the full word.
    Sw,
}

impl StoreOp {
    /// Memory access width of the store.
    pub const fn width(self) -> AccessWidth {
        match self {
            Self::Sb => AccessWidth::Byte,
            Self::Sh => AccessWidth::Half,
            Self::Sw => AccessWidth::Word,
        }
    }

    /// Assembler mnemonic of the store.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }
}
