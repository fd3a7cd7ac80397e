//! Path commands as read from SVG path data, before any coordinate is resolved.

use crate::ParseError;

use std::slice::ChunksExact;

/// The drawing operation a command letter stands for, regardless of whether its
/// coordinates are absolute or relative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Verb {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    ArcTo,
    QuadraticTo,
    CubicTo,
    Close,
}

impl Verb {
    /// Returns the verb of a supported command letter.
    pub fn from_letter(letter: char) -> Option<Verb> {
        match letter.to_ascii_uppercase() {
            'M' => Some(Verb::MoveTo),
            'L' => Some(Verb::LineTo),
            'H' => Some(Verb::HorizontalLineTo),
            'V' => Some(Verb::VerticalLineTo),
            'A' => Some(Verb::ArcTo),
            'Q' => Some(Verb::QuadraticTo),
            'C' => Some(Verb::CubicTo),
            'Z' => Some(Verb::Close),
            _ => None,
        }
    }

    /// Number of arguments consumed by each repetition of the command.
    pub fn arity(self) -> usize {
        match self {
            Verb::MoveTo | Verb::LineTo => 2,
            Verb::HorizontalLineTo | Verb::VerticalLineTo => 1,
            Verb::ArcTo => 7,
            Verb::QuadraticTo => 4,
            Verb::CubicTo => 6,
            Verb::Close => 0,
        }
    }

    pub fn letter(self, relative: bool) -> char {
        let upper = match self {
            Verb::MoveTo => 'M',
            Verb::LineTo => 'L',
            Verb::HorizontalLineTo => 'H',
            Verb::VerticalLineTo => 'V',
            Verb::ArcTo => 'A',
            Verb::QuadraticTo => 'Q',
            Verb::CubicTo => 'C',
            Verb::Close => 'Z',
        };

        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }
}

/// Returns true for the characters that start a new command in path data.
///
/// `e` and `E` are exponent markers and never start a command.
#[inline]
pub fn is_command_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && c != 'e' && c != 'E'
}

/// A command letter followed by its raw numeric arguments.
///
/// Arguments are kept exactly as they appear in the path data: relative
/// coordinates are not resolved and implicit repetitions are not split.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathCommand {
    letter: char,
    verb: Verb,
    arguments: Vec<f64>,
}

impl PathCommand {
    /// Returns `None` if the letter isn't one of `M L H V A Q C Z` in either case.
    pub fn new(letter: char, arguments: Vec<f64>) -> Option<Self> {
        let verb = Verb::from_letter(letter)?;
        Some(PathCommand {
            letter,
            verb,
            arguments,
        })
    }

    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Lowercase letters have coordinates relative to the current point.
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }

    #[inline]
    pub fn arguments(&self) -> &[f64] {
        &self.arguments
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.verb.arity()
    }

    /// Iterates over the complete argument groups, one per implicit repetition.
    ///
    /// A trailing incomplete group is not part of the iteration.
    pub fn groups(&self) -> ChunksExact<'_, f64> {
        match self.arity() {
            0 => self.arguments[..0].chunks_exact(1),
            n => self.arguments.chunks_exact(n),
        }
    }

    /// Checks that the arguments form a whole, non-zero number of groups
    /// (or no argument at all for `Z`).
    ///
    /// `index` is the position of the command in its path, used to locate the error.
    pub fn check_arguments(&self, index: usize) -> Result<(), ParseError> {
        let got = self.arguments.len();
        match self.arity() {
            0 if got > 0 => Err(ParseError::UnexpectedArguments {
                command: self.letter,
                index,
                got,
            }),
            0 => Ok(()),
            arity if got == 0 || got % arity != 0 => Err(ParseError::MissingArguments {
                command: self.letter,
                index,
                arity,
                got,
            }),
            _ => Ok(()),
        }
    }
}

#[test]
fn command_letters() {
    for c in "MmLlHhVvAaQqCcZz".chars() {
        assert!(is_command_letter(c));
        let verb = Verb::from_letter(c).unwrap();
        assert_eq!(verb.letter(c.is_ascii_lowercase()), c);
    }

    assert!(is_command_letter('S'));
    assert!(is_command_letter('t'));
    assert!(!is_command_letter('e'));
    assert!(!is_command_letter('E'));
    assert!(!is_command_letter('.'));
    assert!(!is_command_letter('-'));

    assert_eq!(Verb::from_letter('S'), None);
    assert_eq!(Verb::from_letter('t'), None);
    assert!(PathCommand::new('x', vec![1.0]).is_none());
}

#[test]
fn argument_groups() {
    let cmd = PathCommand::new('c', vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
    assert!(cmd.is_relative());
    assert_eq!(cmd.verb(), Verb::CubicTo);

    let groups: Vec<&[f64]> = cmd.groups().collect();
    assert_eq!(groups, vec![&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..]]);
    assert_eq!(
        cmd.check_arguments(3),
        Err(ParseError::MissingArguments {
            command: 'c',
            index: 3,
            arity: 6,
            got: 8
        })
    );

    let close = PathCommand::new('Z', Vec::new()).unwrap();
    assert_eq!(close.groups().count(), 0);
    assert_eq!(close.check_arguments(0), Ok(()));

    let close = PathCommand::new('z', vec![1.0]).unwrap();
    assert_eq!(close.groups().count(), 0);
    assert!(matches!(
        close.check_arguments(1),
        Err(ParseError::UnexpectedArguments { got: 1, .. })
    ));

    let move_to = PathCommand::new('M', Vec::new()).unwrap();
    assert!(move_to.check_arguments(0).is_err());
}
