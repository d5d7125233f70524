use libquad::op::OpCode;

use crate::error::AsmError;
use crate::operand::{self, Operand, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Cmp,
    And,
    Or,
    Xor,
    Shl,
    Shr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneRegOp {
    Inc,
    Dec,
    Not,
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOp {
    Jmp,
    Jc,
    Jnc,
    Jz,
    Jnz,
    Ja,
    Jna,
    Call,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneValOp {
    Push,
    Mul,
    Div,
}

/// A recognized mnemonic, grouped by the operand shapes it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Db,
    Mov,
    Alu(AluOp),
    OneReg(OneRegOp),
    Jump(JumpOp),
    OneVal(OneValOp),
    Ret,
}

impl Mnemonic {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DB" => Some(Self::Db),
            "MOV" => Some(Self::Mov),

            "ADD" => Some(Self::Alu(AluOp::Add)),
            "SUB" => Some(Self::Alu(AluOp::Sub)),
            "CMP" => Some(Self::Alu(AluOp::Cmp)),
            "AND" => Some(Self::Alu(AluOp::And)),
            "OR" => Some(Self::Alu(AluOp::Or)),
            "XOR" => Some(Self::Alu(AluOp::Xor)),
            "SHL" | "SAL" => Some(Self::Alu(AluOp::Shl)),
            "SHR" | "SAR" => Some(Self::Alu(AluOp::Shr)),

            "INC" => Some(Self::OneReg(OneRegOp::Inc)),
            "DEC" => Some(Self::OneReg(OneRegOp::Dec)),
            "NOT" => Some(Self::OneReg(OneRegOp::Not)),
            "POP" => Some(Self::OneReg(OneRegOp::Pop)),

            "JMP" => Some(Self::Jump(JumpOp::Jmp)),
            "JC" | "JB" | "JNAE" => Some(Self::Jump(JumpOp::Jc)),
            "JNC" | "JNB" | "JAE" => Some(Self::Jump(JumpOp::Jnc)),
            "JZ" | "JE" => Some(Self::Jump(JumpOp::Jz)),
            "JNZ" | "JNE" => Some(Self::Jump(JumpOp::Jnz)),
            "JA" | "JNBE" => Some(Self::Jump(JumpOp::Ja)),
            "JNA" | "JBE" => Some(Self::Jump(JumpOp::Jna)),
            "CALL" => Some(Self::Jump(JumpOp::Call)),

            "PUSH" => Some(Self::OneVal(OneValOp::Push)),
            "MUL" => Some(Self::OneVal(OneValOp::Mul)),
            "DIV" => Some(Self::OneVal(OneValOp::Div)),

            "RET" => Some(Self::Ret),

            _ => None,
        }
    }
}

fn alu_reg_with_reg(op: AluOp) -> OpCode {
    match op {
        AluOp::Add => OpCode::AddRegToReg,
        AluOp::Sub => OpCode::SubRegFromReg,
        AluOp::Cmp => OpCode::CmpRegWithReg,
        AluOp::And => OpCode::AndRegWithReg,
        AluOp::Or => OpCode::OrRegWithReg,
        AluOp::Xor => OpCode::XorRegWithReg,
        AluOp::Shl => OpCode::ShlRegWithReg,
        AluOp::Shr => OpCode::ShrRegWithReg,
    }
}

fn alu_regaddress_with_reg(op: AluOp) -> OpCode {
    match op {
        AluOp::Add => OpCode::AddRegaddressToReg,
        AluOp::Sub => OpCode::SubRegaddressFromReg,
        AluOp::Cmp => OpCode::CmpRegaddressWithReg,
        AluOp::And => OpCode::AndRegaddressWithReg,
        AluOp::Or => OpCode::OrRegaddressWithReg,
        AluOp::Xor => OpCode::XorRegaddressWithReg,
        AluOp::Shl => OpCode::ShlRegaddressWithReg,
        AluOp::Shr => OpCode::ShrRegaddressWithReg,
    }
}

fn alu_address_with_reg(op: AluOp) -> OpCode {
    match op {
        AluOp::Add => OpCode::AddAddressToReg,
        AluOp::Sub => OpCode::SubAddressFromReg,
        AluOp::Cmp => OpCode::CmpAddressWithReg,
        AluOp::And => OpCode::AndAddressWithReg,
        AluOp::Or => OpCode::OrAddressWithReg,
        AluOp::Xor => OpCode::XorAddressWithReg,
        AluOp::Shl => OpCode::ShlAddressWithReg,
        AluOp::Shr => OpCode::ShrAddressWithReg,
    }
}

fn alu_number_with_reg(op: AluOp) -> OpCode {
    match op {
        AluOp::Add => OpCode::AddNumberToReg,
        AluOp::Sub => OpCode::SubNumberFromReg,
        AluOp::Cmp => OpCode::CmpNumberWithReg,
        AluOp::And => OpCode::AndNumberWithReg,
        AluOp::Or => OpCode::OrNumberWithReg,
        AluOp::Xor => OpCode::XorNumberWithReg,
        AluOp::Shl => OpCode::ShlNumberWithReg,
        AluOp::Shr => OpCode::ShrNumberWithReg,
    }
}

fn one_reg(op: OneRegOp) -> OpCode {
    match op {
        OneRegOp::Inc => OpCode::IncReg,
        OneRegOp::Dec => OpCode::DecReg,
        OneRegOp::Not => OpCode::NotReg,
        OneRegOp::Pop => OpCode::PopReg,
    }
}

fn jump_regaddress(op: JumpOp) -> OpCode {
    match op {
        JumpOp::Jmp => OpCode::JmpRegaddress,
        JumpOp::Jc => OpCode::JcRegaddress,
        JumpOp::Jnc => OpCode::JncRegaddress,
        JumpOp::Jz => OpCode::JzRegaddress,
        JumpOp::Jnz => OpCode::JnzRegaddress,
        JumpOp::Ja => OpCode::JaRegaddress,
        JumpOp::Jna => OpCode::JnaRegaddress,
        JumpOp::Call => OpCode::CallRegaddress,
    }
}

fn jump_address(op: JumpOp) -> OpCode {
    match op {
        JumpOp::Jmp => OpCode::JmpAddress,
        JumpOp::Jc => OpCode::JcAddress,
        JumpOp::Jnc => OpCode::JncAddress,
        JumpOp::Jz => OpCode::JzAddress,
        JumpOp::Jnz => OpCode::JnzAddress,
        JumpOp::Ja => OpCode::JaAddress,
        JumpOp::Jna => OpCode::JnaAddress,
        JumpOp::Call => OpCode::CallAddress,
    }
}

fn one_val_reg(op: OneValOp) -> OpCode {
    match op {
        OneValOp::Push => OpCode::PushReg,
        OneValOp::Mul => OpCode::MulReg,
        OneValOp::Div => OpCode::DivReg,
    }
}

fn one_val_regaddress(op: OneValOp) -> OpCode {
    match op {
        OneValOp::Push => OpCode::PushRegaddress,
        OneValOp::Mul => OpCode::MulRegaddress,
        OneValOp::Div => OpCode::DivRegaddress,
    }
}

fn one_val_address(op: OneValOp) -> OpCode {
    match op {
        OneValOp::Push => OpCode::PushAddress,
        OneValOp::Mul => OpCode::MulAddress,
        OneValOp::Div => OpCode::DivAddress,
    }
}

fn one_val_number(op: OneValOp) -> OpCode {
    match op {
        OneValOp::Push => OpCode::PushNumber,
        OneValOp::Mul => OpCode::MulNumber,
        OneValOp::Div => OpCode::DivNumber,
    }
}

/// Resolve a mnemonic's operand tokens, pick the opcode for their addressing
/// mode, and append the encoding to the output buffer. `instr` is the
/// uppercased mnemonic as written, used for diagnostics.
pub fn encode(
    instr: &str,
    mnemonic: Mnemonic,
    op1: Option<&str>,
    op2: Option<&str>,
    code: &mut Vec<Value>,
) -> Result<(), AsmError> {
    let unsupported = || AsmError::UnsupportedOperands(instr.to_owned());
    let resolve = |token: Option<&str>| {
        token
            .map(operand::resolve)
            .transpose()?
            .ok_or_else(unsupported)
    };

    match mnemonic {
        Mnemonic::Db => match resolve(op1)? {
            Operand::Number(value) => code.push(value),
            Operand::Bytes(bytes) => code.extend(bytes.into_iter().map(Value::Byte)),
            _ => return Err(unsupported()),
        },
        Mnemonic::Mov => {
            let (p1, p2) = (resolve(op1)?, resolve(op2)?);
            let opcode = match (&p1, &p2) {
                (Operand::Register(_), Operand::Register(_)) => OpCode::MovRegToReg,
                (Operand::Register(_), Operand::Address(_)) => OpCode::MovAddressToReg,
                (Operand::Register(_), Operand::RegisterAddress(_)) => OpCode::MovRegaddressToReg,
                (Operand::Address(_), Operand::Register(_)) => OpCode::MovRegToAddress,
                (Operand::RegisterAddress(_), Operand::Register(_)) => OpCode::MovRegToRegaddress,
                (Operand::Register(_), Operand::Number(_)) => OpCode::MovNumberToReg,
                (Operand::Address(_), Operand::Number(_)) => OpCode::MovNumberToAddress,
                (Operand::RegisterAddress(_), Operand::Number(_)) => OpCode::MovNumberToRegaddress,
                _ => return Err(unsupported()),
            };
            push_two(code, opcode, p1, p2, unsupported)?;
        }
        Mnemonic::Alu(op) => {
            let (p1, p2) = (resolve(op1)?, resolve(op2)?);
            let opcode = match (&p1, &p2) {
                (Operand::Register(_), Operand::Register(_)) => alu_reg_with_reg(op),
                (Operand::Register(_), Operand::RegisterAddress(_)) => alu_regaddress_with_reg(op),
                (Operand::Register(_), Operand::Address(_)) => alu_address_with_reg(op),
                (Operand::Register(_), Operand::Number(_)) => alu_number_with_reg(op),
                _ => return Err(unsupported()),
            };
            push_two(code, opcode, p1, p2, unsupported)?;
        }
        Mnemonic::OneReg(op) => {
            let p1 = resolve(op1)?;
            let opcode = match &p1 {
                Operand::Register(_) => one_reg(op),
                _ => return Err(unsupported()),
            };
            push_one(code, opcode, p1, unsupported)?;
        }
        Mnemonic::Jump(op) => {
            let p1 = resolve(op1)?;
            // A bare register names the address held in it.
            let opcode = match &p1 {
                Operand::Register(_) => jump_regaddress(op),
                Operand::Number(_) => jump_address(op),
                _ => return Err(unsupported()),
            };
            push_one(code, opcode, p1, unsupported)?;
        }
        Mnemonic::OneVal(op) => {
            let p1 = resolve(op1)?;
            let opcode = match &p1 {
                Operand::Register(_) => one_val_reg(op),
                Operand::RegisterAddress(_) => one_val_regaddress(op),
                Operand::Address(_) => one_val_address(op),
                Operand::Number(_) => one_val_number(op),
                Operand::Bytes(_) => return Err(unsupported()),
            };
            push_one(code, opcode, p1, unsupported)?;
        }
        Mnemonic::Ret => code.push(Value::Byte(OpCode::Ret.byte())),
    }

    Ok(())
}

fn push_one(
    code: &mut Vec<Value>,
    opcode: OpCode,
    p1: Operand,
    unsupported: impl Fn() -> AsmError,
) -> Result<(), AsmError> {
    let value = p1.into_value().ok_or_else(&unsupported)?;
    code.push(Value::Byte(opcode.byte()));
    code.push(value);
    Ok(())
}

fn push_two(
    code: &mut Vec<Value>,
    opcode: OpCode,
    p1: Operand,
    p2: Operand,
    unsupported: impl Fn() -> AsmError,
) -> Result<(), AsmError> {
    let first = p1.into_value().ok_or_else(&unsupported)?;
    let second = p2.into_value().ok_or_else(&unsupported)?;
    code.push(Value::Byte(opcode.byte()));
    code.push(first);
    code.push(second);
    Ok(())
}
