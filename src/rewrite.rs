use thiserror::Error;
use tracing::debug;

use crate::emit::{field_dump, render_word};
use crate::encoder::{encode, EncodeError};
use crate::instructions::{lookup, ExtSet};
use crate::operand::{parse_operands, ParseError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Per-line classification result. The caller owns the original text and
/// emits it verbatim on both non-`Bytes` paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replacement byte-directive line, annotated with the original
    /// instruction as a trailing comment.
    Bytes(String),
    /// Blank line, comment, label, directive, or a mnemonic outside the
    /// supported set (base ISA included).
    Passthrough,
    /// Recognized mnemonic whose operands failed to parse or encode. The
    /// conservative policy keeps the original line so the downstream
    /// assembler still sees syntactically intact text.
    Fallback {
        mnemonic: &'static str,
        error: RewriteError,
    },
}

/// Stateless line-at-a-time rewriter. The only configuration is which
/// extension groups are eligible for rewriting.
pub struct Rewriter {
    enabled: ExtSet,
}

impl Rewriter {
    pub fn new(enabled: ExtSet) -> Self {
        Self { enabled }
    }

    /// Classify one source line and, when it carries an enabled
    /// bit-manipulation instruction, produce its `.byte` replacement.
    ///
    /// Structure handled here: an optional `#` comment, any number of
    /// leading `name:` labels, and a `.`-prefixed directive token. All of
    /// those short-circuit to pass-through unless an instruction follows
    /// the labels, in which case the label/indentation prefix is preserved
    /// verbatim ahead of the emitted directive.
    pub fn rewrite_line(&self, line: &str) -> Outcome {
        let code = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let mut start = 0usize;
        let tok = loop {
            let rest = &code[start..];
            let trimmed = rest.trim_start();
            let Some(tok) = trimmed.split_whitespace().next() else {
                return Outcome::Passthrough;
            };
            if tok.len() > 1 && tok.ends_with(':') {
                start += (rest.len() - trimmed.len()) + tok.len();
                continue;
            }
            start += rest.len() - trimmed.len();
            break tok;
        };

        if tok.starts_with('.') {
            return Outcome::Passthrough;
        }
        let Some(desc) = lookup(tok) else {
            return Outcome::Passthrough;
        };
        if !desc.ext.intersects(self.enabled) {
            return Outcome::Passthrough;
        }

        let operand_text = &code[start + tok.len()..];
        let encoded = parse_operands(operand_text, desc.shape)
            .map_err(RewriteError::from)
            .and_then(|ops| encode(desc, &ops).map_err(RewriteError::from));
        match encoded {
            Ok(word) => {
                debug!("{} -> {:#010x} [{}]", desc.mnemonic, word, field_dump(word));
                let ops: Vec<&str> = operand_text.split(',').map(str::trim).collect();
                Outcome::Bytes(format!(
                    "{}{} # {} {}",
                    &line[..start],
                    render_word(word),
                    desc.mnemonic,
                    ops.join(",")
                ))
            }
            Err(error) => Outcome::Fallback {
                mnemonic: desc.mnemonic,
                error,
            },
        }
    }

    /// Whole-stream driver: one output line per input line, original order,
    /// non-rewritten lines byte-for-byte identical to the input.
    pub fn rewrite(&self, source: &str) -> String {
        let mut out = String::new();
        for line in source.lines() {
            match self.rewrite_line(line) {
                Outcome::Bytes(repl) => out.push_str(&repl),
                Outcome::Passthrough | Outcome::Fallback { .. } => out.push_str(line),
            }
            out.push('\n');
        }
        out
    }
}
