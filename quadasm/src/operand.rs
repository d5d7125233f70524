use std::str::FromStr;

use libquad::reg::Register;

use crate::constants::{label_regex, number_regex};
use crate::error::AsmError;

/// One cell of the output program: a resolved byte, or a label reference
/// standing in for one until every definition has been seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Byte(u8),
    Label(String),
}

/// A classified operand token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Number(Value),
    Address(Value),
    RegisterAddress(Register),
    Bytes(Vec<u8>),
}

impl Operand {
    /// The byte (or placeholder) this operand contributes to the output.
    /// `Bytes` has no single value; `DB` expands it itself.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Operand::Register(register) | Operand::RegisterAddress(register) => {
                Some(Value::Byte(register.index()))
            }
            Operand::Number(value) | Operand::Address(value) => Some(value),
            Operand::Bytes(_) => None,
        }
    }
}

/// Parse a numeric literal. Allowed formats: 200, 200d, 0xA4, 0o17, 101b.
/// No range restriction is applied here; callers check the 0-255 window
/// where the value is actually used.
pub fn parse_number(input: &str) -> Result<i32, AsmError> {
    let parsed = if let Some(hex) = input.strip_prefix("0x") {
        i32::from_str_radix(hex, 16)
    } else if let Some(octal) = input.strip_prefix("0o") {
        i32::from_str_radix(octal, 8)
    } else if let Some(binary) = input.strip_suffix('b') {
        i32::from_str_radix(binary, 2)
    } else if let Some(decimal) = input.strip_suffix('d') {
        decimal.parse()
    } else if number_regex().is_match(input) {
        input.parse()
    } else {
        return Err(AsmError::InvalidNumber(input.to_owned()));
    };

    parsed.map_err(|_| AsmError::InvalidNumber(input.to_owned()))
}

/// Case-insensitive register name lookup.
pub fn parse_register(input: &str) -> Result<Register, AsmError> {
    Register::from_str(input).map_err(|_| AsmError::UnknownRegister(input.to_owned()))
}

fn parse_label(input: &str) -> Option<String> {
    label_regex()
        .is_match(input)
        .then(|| input.to_uppercase())
}

// Note that order is significant here - a token that names a register is
// always a register, then a label, and only then a number.
fn register_or_number(
    input: &str,
    reg: fn(Register) -> Operand,
    num: fn(Value) -> Operand,
    role: &'static str,
) -> Result<Operand, AsmError> {
    if let Ok(register) = parse_register(input) {
        return Ok(reg(register));
    }
    if let Some(label) = parse_label(input) {
        return Ok(num(Value::Label(label)));
    }

    let value = parse_number(input)?;
    if !(0..=255).contains(&value) {
        return Err(AsmError::OutOfRange(role));
    }

    Ok(num(Value::Byte(value as u8)))
}

fn char_code(character: char) -> Result<u8, AsmError> {
    u8::try_from(character as u32).map_err(|_| AsmError::OutOfRange("character"))
}

/// Classify one operand token by shape: `[...]` is a register-indirect or
/// direct address, `"..."` a byte string, `'c'` a single character code, and
/// anything else a bare register, label, or number.
pub fn resolve(token: &str) -> Result<Operand, AsmError> {
    if let Some(interior) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return register_or_number(
            interior,
            Operand::RegisterAddress,
            Operand::Address,
            "address",
        );
    }

    if let Some(text) = token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        let bytes = text.chars().map(char_code).collect::<Result<Vec<_>, _>>()?;
        return Ok(Operand::Bytes(bytes));
    }

    if let Some(text) = token.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        let mut characters = text.chars();
        let (first, rest) = (characters.next(), characters.next());
        return match (first, rest) {
            (Some(character), None) => Ok(Operand::Number(Value::Byte(char_code(character)?))),
            _ => Err(AsmError::InvalidChar(text.to_owned())),
        };
    }

    register_or_number(token, Operand::Register, Operand::Number, "number")
}
