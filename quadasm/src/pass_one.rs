use crate::constants::line_regex;
use crate::encode::{encode, Mnemonic};
use crate::error::{AsmError, AssembleError};
use crate::labels::Labels;
use crate::operand::Value;

/// Pass 1 output: the byte-or-placeholder buffer and every label definition.
#[derive(Debug)]
pub struct PassOne {
    pub code: Vec<Value>,
    pub labels: Labels,
}

pub struct FirstPass {
    code: Vec<Value>,
    labels: Labels,
}

impl FirstPass {
    fn new() -> Self {
        Self {
            code: Vec::new(),
            labels: Labels::new(),
        }
    }

    /// Walk the source lines once, collecting label definitions and encoding
    /// instructions. The first failing line aborts the pass.
    pub fn parse_lines(lines: &[&str]) -> Result<PassOne, AssembleError> {
        let mut pass = Self::new();
        for (line_no, line) in lines.iter().enumerate() {
            pass.parse_line(line)
                .map_err(|kind| AssembleError::Line { line: line_no, kind })?;
        }

        Ok(PassOne {
            code: pass.code,
            labels: pass.labels,
        })
    }

    fn parse_line(&mut self, line: &str) -> Result<(), AsmError> {
        let captures = line_regex().captures(line).ok_or(AsmError::Syntax)?;
        let label = captures.name("label").map(|m| m.as_str());
        let mnemonic = captures.name("mnemonic").map(|m| m.as_str());

        if label.is_none() && mnemonic.is_none() {
            // No structure matched: the line must be blank or a comment.
            let rest = line.trim();
            if !rest.is_empty() && !rest.starts_with(';') {
                return Err(AsmError::Syntax);
            }
            return Ok(());
        }

        if let Some(label) = label {
            // The label names the offset the next emitted byte will occupy.
            self.labels.add(label, self.code.len())?;
        }

        if let Some(mnemonic) = mnemonic {
            let instr = mnemonic.to_uppercase();
            let op1 = captures.name("op1").map(|m| m.as_str());
            let op2 = captures.name("op2").map(|m| m.as_str());

            let mnemonic = Mnemonic::from_str(&instr)
                .ok_or_else(|| AsmError::UnknownInstruction(instr.clone()))?;
            encode(&instr, mnemonic, op1, op2, &mut self.code)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(source: &str) -> Result<PassOne, AssembleError> {
        let lines = source.lines().collect::<Vec<_>>();
        FirstPass::parse_lines(&lines)
    }

    #[test]
    fn blank_and_comment_lines_emit_nothing() {
        let result = pass("\n   \n; a comment\n\t ; indented comment\n").unwrap();
        assert!(result.code.is_empty());
    }

    #[test]
    fn labels_record_the_current_offset() {
        let result = pass("start: MOV A, 1\nnext: RET").unwrap();
        assert_eq!(result.labels.get("START"), Some(0));
        assert_eq!(result.labels.get("NEXT"), Some(3));
    }

    #[test]
    fn label_only_lines_are_allowed() {
        let result = pass("here:\nRET").unwrap();
        assert_eq!(result.labels.get("HERE"), Some(0));
        assert_eq!(result.code.len(), 1);
    }

    #[test]
    fn unparseable_lines_are_syntax_errors() {
        assert_eq!(
            pass("!!!").unwrap_err(),
            AssembleError::Line {
                line: 0,
                kind: AsmError::Syntax
            }
        );
    }

    #[test]
    fn failures_carry_the_line_index() {
        let err = pass("RET\nRET\nMOV A, 300").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.kind(), &AsmError::OutOfRange("number"));
    }

    #[test]
    fn unknown_mnemonics_are_rejected() {
        assert_eq!(
            pass("FROB A").unwrap_err().kind(),
            &AsmError::UnknownInstruction("FROB".to_owned())
        );
    }

    #[test]
    fn trailing_comments_are_ignored() {
        let result = pass("MOV A, B ; copy B into A").unwrap();
        assert_eq!(result.code.len(), 3);
    }

    #[test]
    fn mnemonics_are_case_insensitive() {
        let upper = pass("MOV A, B").unwrap();
        let lower = pass("mov a, b").unwrap();
        assert_eq!(upper.code, lower.code);
    }
}
