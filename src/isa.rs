//! The LS-8 opcode catalogue.
//!
//! On the real machine the top two bits of an opcode byte encode the
//! operand count; the decoder here matches whole bytes against the table
//! instead, so the encoding stays opaque.

/// One decoded instruction kind. The set is fixed; an unmatched byte is a
/// fatal decode fault at the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Hlt = 0b0000_0001,
    Ret = 0b0001_0001,
    Push = 0b0100_0101,
    Pop = 0b0100_0110,
    Prn = 0b0100_0111,
    Call = 0b0101_0000,
    Jmp = 0b0101_0100,
    Jeq = 0b0101_0101,
    Jne = 0b0101_0110,
    Ldi = 0b1000_0010,
    Add = 0b1010_0000,
    Sub = 0b1010_0001,
    Mul = 0b1010_0010,
    Div = 0b1010_0011,
    Cmp = 0b1010_0111,
}

impl Opcode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0b0000_0001 => Self::Hlt,
            0b0001_0001 => Self::Ret,
            0b0100_0101 => Self::Push,
            0b0100_0110 => Self::Pop,
            0b0100_0111 => Self::Prn,
            0b0101_0000 => Self::Call,
            0b0101_0100 => Self::Jmp,
            0b0101_0101 => Self::Jeq,
            0b0101_0110 => Self::Jne,
            0b1000_0010 => Self::Ldi,
            0b1010_0000 => Self::Add,
            0b1010_0001 => Self::Sub,
            0b1010_0010 => Self::Mul,
            0b1010_0011 => Self::Div,
            0b1010_0111 => Self::Cmp,
            _ => return None,
        })
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Ldi => "LDI",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Cmp => "CMP",
        }
    }

    /// Instruction width in bytes, opcode included. Control transfers use
    /// it only for the untaken-branch increment and the CALL return
    /// address, never as a blanket post-increment.
    pub const fn width(self) -> usize {
        match self {
            Self::Hlt | Self::Ret => 1,
            Self::Push | Self::Pop | Self::Prn | Self::Call | Self::Jmp | Self::Jeq | Self::Jne => {
                2
            }
            Self::Ldi | Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Cmp => 3,
        }
    }
}
