use thiserror::Error;

/// Problems found while reading path data.
///
/// None of them are fatal: the tokenizer and the interpreter record them and
/// carry on with the rest of the path, unless strict parsing was requested.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ParseError {
    #[error("Column {column}: Expected number, got {src:?}.")]
    Number { src: String, column: usize },
    #[error("Column {column}: Unsupported command {command:?}.")]
    Command { command: char, column: usize },
    #[error(
        "Command {index} ({command:?}): Expected a non-zero multiple of {arity} arguments, got {got}."
    )]
    MissingArguments {
        command: char,
        index: usize,
        arity: usize,
        got: usize,
    },
    #[error("Command {index} ({command:?}): Expected no arguments, got {got}.")]
    UnexpectedArguments {
        command: char,
        index: usize,
        got: usize,
    },
}
