use once_cell::sync::OnceCell;
use regex::Regex;

pub static LINE_REGEX: OnceCell<Regex> = OnceCell::new();
// Matches: "label: MNEMONIC operand1, operand2" with every part optional.
// Operands are a bracketed address, a quoted string or character, or a bare
// register/label/number token.
static LINE_REGEX_PATTERN: &str = r#"^[\t ]*(?:(?P<label>[.A-Za-z]\w*):)?(?:[\t ]*(?P<mnemonic>[A-Za-z]{2,4})(?:[\t ]+(?P<op1>\[\w+\]|".+?"|'.+?'|[.A-Za-z0-9]\w*)(?:[\t ]*,[\t ]*(?P<op2>\[\w+\]|".+?"|'.+?'|[.A-Za-z0-9]\w*))?)?)?"#;

pub static NUMBER_REGEX: OnceCell<Regex> = OnceCell::new();
// Matches: "(+|-)INTEGER"
static NUMBER_REGEX_PATTERN: &str = r"^[-+]?[0-9]+$";

pub static LABEL_REGEX: OnceCell<Regex> = OnceCell::new();
// Matches: "(.L)abel"
static LABEL_REGEX_PATTERN: &str = r"^[.A-Za-z]\w*$";

pub fn line_regex() -> &'static Regex {
    LINE_REGEX.get_or_init(|| Regex::new(LINE_REGEX_PATTERN).expect("Invalid line regex"))
}

pub fn number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(NUMBER_REGEX_PATTERN).expect("Invalid number regex"))
}

pub fn label_regex() -> &'static Regex {
    LABEL_REGEX.get_or_init(|| Regex::new(LABEL_REGEX_PATTERN).expect("Invalid label regex"))
}
