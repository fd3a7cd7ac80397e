//! Splitting path data into commands and their numeric arguments.
//!
//! # Syntax
//!
//! Each command letter starts a new command whose arguments run until the next
//! command letter. Arguments are numbers with an optional sign, integer part,
//! fractional part and exponent. They can be separated by whitespace and commas,
//! or not separated at all when the next number starts with a sign or a second
//! decimal point: `M10-5.5.5` reads as `M 10 -5.5 0.5`.
//!
//! The large-arc and sweep flags of arc commands are single `0` or `1`
//! characters and don't need separators either: `a1 1 0 0110 10` reads as
//! `a 1 1 0 0 1 10 10`.
//!
//! A flag is exactly one character, so a flag written as a decimal number is
//! not read as one value: in `A5 5 0 1.0 0 10 10` the large-arc flag is `1`,
//! `.0` becomes the sweep flag and every following argument shifts by one slot.
//!
//! # Errors
//!
//! By default, malformed numbers are skipped and unsupported command letters
//! are reported without interrupting the iteration. With
//! [`ParserOptions::strict`], the first problem is reported and the iteration
//! stops.

use crate::commands::{is_command_letter, PathCommand, Verb};
use crate::ParseError;

use std::str::Chars;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Stop at the first malformed number or unsupported command instead of
    /// skipping it.
    pub strict: bool,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions { strict: false };

    pub const STRICT: ParserOptions = ParserOptions { strict: true };

    #[inline]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// A buffered iterator of characters keeping track of the column.
struct Source<'l> {
    src: Chars<'l>,
    current: char,
    column: usize,
    finished: bool,
}

impl<'l> Source<'l> {
    fn new(src: &'l str) -> Self {
        let mut src = src.chars();
        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => ('~', true),
        };

        Source {
            src,
            current,
            column: 0,
            finished,
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        self.column += 1;
        match self.src.next() {
            Some(c) => {
                self.current = c;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }

    fn skip_separators(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn at_command(&self) -> bool {
        !self.finished && is_command_letter(self.current)
    }
}

/// An iterator over the commands of path data.
///
/// Yields `Err` for each unsupported command letter (its arguments are skipped),
/// and in strict mode for the first malformed number, after which it stops.
pub struct Tokenizer<'l> {
    src: Source<'l>,
    strict: bool,
    float_buffer: String,
    stopped: bool,
}

impl<'l> Tokenizer<'l> {
    pub fn new(src: &'l str) -> Self {
        Self::with_options(src, &ParserOptions::DEFAULT)
    }

    pub fn with_options(src: &'l str, options: &ParserOptions) -> Self {
        let mut tokenizer = Tokenizer {
            src: Source::new(src),
            strict: options.strict,
            float_buffer: String::new(),
            stopped: false,
        };

        tokenizer.skip_to_first_command();

        tokenizer
    }

    fn skip_to_first_command(&mut self) {
        let mut skipped = String::new();
        while !self.src.finished && !is_command_letter(self.src.current) {
            if !self.src.current.is_whitespace() {
                skipped.push(self.src.current);
            }
            self.src.advance_one();
        }

        if !skipped.is_empty() {
            log::debug!("Ignoring {:?} before the first path command.", skipped);
        }
    }

    fn read_arguments(&mut self, verb: Option<Verb>) -> Result<Vec<f64>, ParseError> {
        let mut arguments = Vec::new();

        loop {
            self.src.skip_separators();
            if self.src.finished || self.src.at_command() {
                return Ok(arguments);
            }

            let is_flag = verb == Some(Verb::ArcTo) && matches!(arguments.len() % 7, 3 | 4);
            if is_flag {
                if let Some(flag) = self.read_flag() {
                    arguments.push(flag);
                    continue;
                }
            }

            match self.read_number() {
                Ok(value) => arguments.push(value),
                Err(err) if self.strict => return Err(err),
                Err(err) => {
                    log::debug!("Skipping malformed number: {}", err);
                }
            }
        }
    }

    fn read_flag(&mut self) -> Option<f64> {
        let value = match self.src.current {
            '0' => 0.0,
            '1' => 1.0,
            _ => return None,
        };
        self.src.advance_one();

        Some(value)
    }

    fn read_number(&mut self) -> Result<f64, ParseError> {
        self.float_buffer.clear();

        let column = self.src.column;
        let mut digits = 0;

        if self.src.current == '-' || self.src.current == '+' {
            self.float_buffer.push(self.src.current);
            self.src.advance_one();
        }

        while self.src.current.is_ascii_digit() {
            self.float_buffer.push(self.src.current);
            self.src.advance_one();
            digits += 1;
        }

        if self.src.current == '.' {
            self.float_buffer.push('.');
            self.src.advance_one();

            while self.src.current.is_ascii_digit() {
                self.float_buffer.push(self.src.current);
                self.src.advance_one();
                digits += 1;
            }
        }

        if digits > 0 && (self.src.current == 'e' || self.src.current == 'E') {
            self.float_buffer.push(self.src.current);
            self.src.advance_one();

            if self.src.current == '-' || self.src.current == '+' {
                self.float_buffer.push(self.src.current);
                self.src.advance_one();
            }

            while self.src.current.is_ascii_digit() {
                self.float_buffer.push(self.src.current);
                self.src.advance_one();
            }
        }

        // Always make progress, even on a character that can't start a number.
        if self.float_buffer.is_empty() {
            self.float_buffer.push(self.src.current);
            self.src.advance_one();
        }

        match self.float_buffer.parse::<f64>() {
            Ok(value) if digits > 0 && value.is_finite() => Ok(value),
            _ => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                column,
            }),
        }
    }
}

impl<'l> Iterator for Tokenizer<'l> {
    type Item = Result<PathCommand, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped || self.src.finished {
            return None;
        }

        let letter = self.src.current;
        let column = self.src.column;
        self.src.advance_one();

        let arguments = match self.read_arguments(Verb::from_letter(letter)) {
            Ok(arguments) => arguments,
            Err(err) => {
                self.stopped = true;
                return Some(Err(err));
            }
        };

        match PathCommand::new(letter, arguments) {
            Some(command) => Some(Ok(command)),
            None => {
                if self.strict {
                    self.stopped = true;
                }
                Some(Err(ParseError::Command {
                    command: letter,
                    column,
                }))
            }
        }
    }
}

#[cfg(test)]
fn tokenize(src: &str) -> Vec<(char, Vec<f64>)> {
    Tokenizer::new(src)
        .filter_map(Result::ok)
        .map(|cmd| (cmd.letter(), cmd.arguments().to_vec()))
        .collect()
}

#[test]
fn empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" ").is_empty());
    assert!(tokenize("12 4,5").is_empty());
}

#[test]
fn simple_square() {
    assert_eq!(
        tokenize("M 0 0 L 1 0 L 1 1 L 0 1 Z"),
        vec![
            ('M', vec![0.0, 0.0]),
            ('L', vec![1.0, 0.0]),
            ('L', vec![1.0, 1.0]),
            ('L', vec![0.0, 1.0]),
            ('Z', vec![]),
        ]
    );
}

#[test]
fn separators() {
    assert_eq!(
        tokenize("M0,0L10,0,10 10\n\tz"),
        vec![
            ('M', vec![0.0, 0.0]),
            ('L', vec![10.0, 0.0, 10.0, 10.0]),
            ('z', vec![]),
        ]
    );
}

#[test]
fn text_before_the_first_command() {
    assert_eq!(tokenize("12 e M1 2"), vec![('M', vec![1.0, 2.0])]);
}

#[test]
fn adjacent_numbers() {
    // Per SVG spec, this is equivalent to "M 0.6 0.5".
    assert_eq!(tokenize("M 0.6.5"), vec![('M', vec![0.6, 0.5])]);
    assert_eq!(
        tokenize("M10.5.3-4-.5+2"),
        vec![('M', vec![10.5, 0.3, -4.0, -0.5, 2.0])]
    );
}

#[test]
fn number_scientific_notation() {
    assert_eq!(tokenize("M 1e-2 -1E3"), vec![('M', vec![0.01, -1000.0])]);
    assert_eq!(tokenize("M1e2-3.5e+1"), vec![('M', vec![100.0, -35.0])]);
    assert_eq!(
        tokenize("M 1.e-9 1.4e-4z"),
        vec![('M', vec![1.0e-9, 1.4e-4]), ('z', vec![])]
    );
}

#[test]
fn bad_numbers_are_skipped() {
    assert_eq!(tokenize("M 0 --1"), vec![('M', vec![0.0, -1.0])]);
    assert_eq!(tokenize("M 0 1ee2"), vec![('M', vec![0.0, 2.0])]);
    assert_eq!(tokenize("M 0 *2"), vec![('M', vec![0.0, 2.0])]);
    assert_eq!(tokenize("M 0 1e 3"), vec![('M', vec![0.0, 3.0])]);
    assert_eq!(tokenize("M 0 . 3"), vec![('M', vec![0.0, 3.0])]);
    assert_eq!(tokenize("M 0 1e999 3"), vec![('M', vec![0.0, 3.0])]);
}

#[test]
fn bad_numbers_strict() {
    let bad_number = |src: &str| {
        let mut tokenizer = Tokenizer::with_options(src, &ParserOptions::STRICT);
        let result = tokenizer.next();
        let stopped = tokenizer.next().is_none();
        match result {
            Some(Err(ParseError::Number { .. })) => stopped,
            _ => false,
        }
    };

    assert!(bad_number("M 0 --1 L 1 1"));
    assert!(bad_number("M 0 1ee2 L 1 1"));
    assert!(bad_number("M 0 *2 L 1 1"));
    assert!(bad_number("M 0 1e L 1 1"));

    let mut tokenizer = Tokenizer::with_options("M 0 --1", &ParserOptions::STRICT);
    assert_eq!(
        tokenizer.next(),
        Some(Err(ParseError::Number {
            src: "-".to_string(),
            column: 4
        }))
    );
}

#[test]
fn unsupported_commands() {
    let tokens: Vec<_> = Tokenizer::new("M0 0 S1 2 3 4 L5 5").collect();
    assert_eq!(
        tokens,
        vec![
            Ok(PathCommand::new('M', vec![0.0, 0.0]).unwrap()),
            Err(ParseError::Command {
                command: 'S',
                column: 5
            }),
            Ok(PathCommand::new('L', vec![5.0, 5.0]).unwrap()),
        ]
    );

    let tokens: Vec<_> =
        Tokenizer::with_options("M0 0 x 1 L5 5", &ParserOptions::DEFAULT.with_strict(true))
            .collect();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[1].is_err());
}

#[test]
fn compact_arc_flags() {
    assert_eq!(
        tokenize("a1 1 0 0110 10"),
        vec![('a', vec![1.0, 1.0, 0.0, 0.0, 1.0, 10.0, 10.0])]
    );
    assert_eq!(
        tokenize("A5,5,30,1,0,3,4 5 5 0 1 1 6 7"),
        vec![(
            'A',
            vec![5.0, 5.0, 30.0, 1.0, 0.0, 3.0, 4.0, 5.0, 5.0, 0.0, 1.0, 1.0, 6.0, 7.0]
        )]
    );
    // Flags are only special in arc commands.
    assert_eq!(tokenize("L0 0 0110 1"), vec![('L', vec![0.0, 0.0, 110.0, 1.0])]);
}

#[test]
fn decimal_arc_flags() {
    assert_eq!(
        tokenize("A5 5 0 1.0 0 10 10"),
        vec![('A', vec![5.0, 5.0, 0.0, 1.0, 0.0, 0.0, 10.0, 10.0])]
    );
    assert_eq!(
        tokenize("A5 5 0 0.5 1 10 10"),
        vec![('A', vec![5.0, 5.0, 0.0, 0.0, 0.5, 1.0, 10.0, 10.0])]
    );
}
