use num_derive::FromPrimitive;

/// The fixed opcode table. One variant per (mnemonic, addressing mode)
/// combination the machine implements; the discriminant is the byte the
/// assembler emits and the virtual machine decodes.
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    None = 0,

    MovRegToReg = 1,
    MovAddressToReg = 2,
    MovRegaddressToReg = 3,
    MovRegToAddress = 4,
    MovRegToRegaddress = 5,
    MovNumberToReg = 6,
    MovNumberToAddress = 7,
    MovNumberToRegaddress = 8,

    AddRegToReg = 10,
    AddRegaddressToReg = 11,
    AddAddressToReg = 12,
    AddNumberToReg = 13,

    SubRegFromReg = 14,
    SubRegaddressFromReg = 15,
    SubAddressFromReg = 16,
    SubNumberFromReg = 17,

    IncReg = 18,
    DecReg = 19,

    CmpRegWithReg = 20,
    CmpRegaddressWithReg = 21,
    CmpAddressWithReg = 22,
    CmpNumberWithReg = 23,

    JmpRegaddress = 30,
    JmpAddress = 31,
    JcRegaddress = 32,
    JcAddress = 33,
    JncRegaddress = 34,
    JncAddress = 35,
    JzRegaddress = 36,
    JzAddress = 37,
    JnzRegaddress = 38,
    JnzAddress = 39,
    JaRegaddress = 40,
    JaAddress = 41,
    JnaRegaddress = 42,
    JnaAddress = 43,

    PushReg = 50,
    PushRegaddress = 51,
    PushAddress = 52,
    PushNumber = 53,
    PopReg = 54,
    CallRegaddress = 55,
    CallAddress = 56,
    Ret = 57,

    MulReg = 60,
    MulRegaddress = 61,
    MulAddress = 62,
    MulNumber = 63,
    DivReg = 64,
    DivRegaddress = 65,
    DivAddress = 66,
    DivNumber = 67,

    AndRegWithReg = 70,
    AndRegaddressWithReg = 71,
    AndAddressWithReg = 72,
    AndNumberWithReg = 73,
    OrRegWithReg = 74,
    OrRegaddressWithReg = 75,
    OrAddressWithReg = 76,
    OrNumberWithReg = 77,
    XorRegWithReg = 78,
    XorRegaddressWithReg = 79,
    XorAddressWithReg = 80,
    XorNumberWithReg = 81,
    NotReg = 82,

    ShlRegWithReg = 90,
    ShlRegaddressWithReg = 91,
    ShlAddressWithReg = 92,
    ShlNumberWithReg = 93,
    ShrRegWithReg = 94,
    ShrRegaddressWithReg = 95,
    ShrAddressWithReg = 96,
    ShrNumberWithReg = 97,
}

impl OpCode {
    pub fn from_u8(byte: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(byte)
    }

    pub fn byte(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_round_trips() {
        for byte in 0..=u8::MAX {
            if let Some(op) = OpCode::from_u8(byte) {
                assert_eq!(op.byte(), byte);
            }
        }
    }

    #[test]
    fn table_is_complete() {
        let entries = (0..=u8::MAX).filter_map(OpCode::from_u8).count();
        assert_eq!(entries, 74);
    }

    #[test]
    fn addressing_modes_get_distinct_opcodes() {
        assert_eq!(OpCode::from_u8(1), Some(OpCode::MovRegToReg));
        assert_eq!(OpCode::from_u8(6), Some(OpCode::MovNumberToReg));
        assert_eq!(OpCode::from_u8(57), Some(OpCode::Ret));
        assert_eq!(OpCode::from_u8(9), None);
        assert_eq!(OpCode::from_u8(98), None);
    }
}
