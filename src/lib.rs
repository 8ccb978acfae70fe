//! An LS-8 virtual machine: an 8-bit computer with 256 bytes of memory,
//! eight byte-wide registers, a downward-growing stack, and a fixed
//! fifteen-opcode instruction set.
//!
//! The machine is pedagogical. It exists to show how a CPU interprets a
//! binary instruction stream: one [`machine::Machine`] value owns all state
//! (memory, registers, flags, program counter) and drives the
//! fetch-decode-execute loop until HLT or a fatal fault.
//!
//! # Modules
//!
//! - [`memory`]: 256-byte addressable memory
//! - [`registers`]: register file and CMP flags
//! - [`isa`]: the opcode catalogue
//! - [`machine`]: dispatch loop, ALU, stack manager, control transfer
//! - [`loader`]: textual program format (binary literals plus comments)

use thiserror::Error;

pub mod isa;
pub mod loader;
pub mod machine;
pub mod memory;
pub mod registers;

pub use isa::Opcode;
pub use machine::Machine;
pub use memory::{Memory, MEMORY_SIZE};
pub use registers::{Flags, RegisterFile, NUM_REGISTERS, STACK_INIT};

pub type Result<T> = std::result::Result<T, VmError>;

/// Every fault is fatal to the running machine; nothing is retried.
#[derive(Debug, Error)]
pub enum VmError {
    /// Fetched byte matches no opcode.
    #[error("unknown instruction 0x{opcode:02X} at address 0x{addr:02X}")]
    UnknownOpcode { opcode: u8, addr: usize },
    /// DIV with a zero divisor.
    #[error("division by zero at address 0x{addr:02X}")]
    DivisionByZero { addr: usize },
    /// Push would take the stack pointer below address 0.
    #[error("stack overflow")]
    StackOverflow,
    /// Pop with the stack pointer at or above the empty-stack baseline.
    #[error("stack underflow")]
    StackUnderflow,
    /// Memory access outside 0..256.
    #[error("address 0x{addr:X} out of range")]
    AddressOutOfRange { addr: usize },
    /// Register index outside 0..8.
    #[error("register index {0} out of range")]
    InvalidRegister(u8),
    /// Program image larger than memory.
    #[error("program of {0} bytes does not fit in memory")]
    ProgramTooLarge(usize),
    /// Non-comment program line that is not a binary byte literal.
    #[error("line {line}: invalid instruction literal {text:?}")]
    InvalidProgramLine { line: usize, text: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
