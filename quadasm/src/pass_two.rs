use crate::error::{AsmError, AssembleError};
use crate::operand::Value;
use crate::pass_one::PassOne;

/// Replace every label placeholder in the buffer with its recorded offset.
/// References to labels that were never defined only surface here, once all
/// lines have been seen.
pub fn pass_two(pass_one: PassOne) -> Result<Vec<u8>, AssembleError> {
    let PassOne { code, labels } = pass_one;

    code.into_iter()
        .map(|cell| match cell {
            Value::Byte(byte) => Ok(byte),
            Value::Label(name) => {
                let offset = labels
                    .get(&name)
                    .ok_or(AsmError::UndefinedLabel(name))?;
                u8::try_from(offset).map_err(|_| AsmError::OutOfRange("label offset"))
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|kind| AssembleError::Program { kind })
}
