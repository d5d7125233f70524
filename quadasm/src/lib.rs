use pass_one::FirstPass;
use pass_two::pass_two;

mod constants;
mod encode;
pub mod error;
mod labels;
mod operand;
mod pass_one;
mod pass_two;

pub use error::{AsmError, AssembleError};

/// Assemble a quad program from text into its machine-code bytes.
///
/// # Errors
///
/// If there's an error in the assembly code, with the 0-based line index
/// attached when the failing line is known.
pub fn assemble_program(program_text: &str) -> Result<Vec<u8>, AssembleError> {
    let lines = program_text.lines().collect::<Vec<_>>();
    let pass_one = FirstPass::parse_lines(&lines)?;

    pass_two(pass_one)
}
