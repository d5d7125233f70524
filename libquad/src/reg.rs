use num_derive::FromPrimitive;
use strum_macros::{Display, EnumString};

/// The four general purpose registers, in encoding order.
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Register {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_map_to_indices() {
        assert_eq!(Register::from_str("A").unwrap().index(), 0);
        assert_eq!(Register::from_str("b").unwrap().index(), 1);
        assert_eq!(Register::from_str("C").unwrap().index(), 2);
        assert_eq!(Register::from_str("d").unwrap().index(), 3);
    }

    #[test]
    fn non_register_names_are_rejected() {
        for name in ["E", "AB", "0", "", "A1"] {
            assert!(Register::from_str(name).is_err());
        }
    }

    #[test]
    fn index_round_trips() {
        for index in 0..4 {
            assert_eq!(Register::from_index(index).unwrap().index(), index);
        }
        assert!(Register::from_index(4).is_none());
    }

    #[test]
    fn displays_as_name() {
        assert_eq!(Register::C.to_string(), "C");
    }
}
