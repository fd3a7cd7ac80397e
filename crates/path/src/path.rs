//! The parsed form of a path's `d` attribute.

use crate::commands::PathCommand;
use crate::interpreter::{interpret_with, Interpretation};
use crate::math::Vector;
use crate::primitive::Primitive;
use crate::tokenizer::{ParserOptions, Tokenizer};
use crate::ParseError;

use std::str::FromStr;

/// A sequence of path commands, with an optional translation applied to every
/// resolved coordinate.
///
/// Problems found while reading the path data are kept alongside the commands
/// rather than interrupting the parsing, see [`Path::errors`].
///
/// # Example
///
/// ```
/// use pathflat_path::Path;
/// use pathflat_path::math::{point, vector};
///
/// let path = Path::parse("M0,0 L10,0 L10,10 Z").with_offset(vector(5.0, 0.0));
///
/// let primitives = path.interpret().primitives;
/// assert_eq!(primitives.len(), 4);
/// assert_eq!(primitives[1].to(), point(15.0, 0.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Vec<PathCommand>,
    offset: Option<Vector>,
    errors: Vec<ParseError>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Parses path data, skipping what can't be read.
    pub fn parse(src: &str) -> Path {
        let mut path = Path::new();
        for item in Tokenizer::new(src) {
            match item {
                Ok(command) => path.commands.push(command),
                Err(err) => path.errors.push(err),
            }
        }

        path
    }

    /// Parses the value of a `d` attribute. A missing attribute is an empty path.
    pub fn from_attribute(d: Option<&str>) -> Path {
        match d {
            Some(src) => Path::parse(src),
            None => Path::new(),
        }
    }

    /// Parses path data.
    ///
    /// In strict mode, the first malformed number, unsupported command or
    /// command with a wrong number of arguments is returned as an error.
    /// Otherwise this is equivalent to [`Path::parse`].
    pub fn parse_with_options(src: &str, options: &ParserOptions) -> Result<Path, ParseError> {
        if !options.strict {
            return Ok(Path::parse(src));
        }

        let commands = Tokenizer::with_options(src, options).collect::<Result<Vec<_>, _>>()?;
        for (index, command) in commands.iter().enumerate() {
            command.check_arguments(index)?;
        }

        Ok(Path::from_commands(commands))
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Path {
        Path {
            commands,
            offset: None,
            errors: Vec::new(),
        }
    }

    /// Sets the translation added to every resolved coordinate, typically
    /// accumulated from the enclosing groups of the path element.
    pub fn with_offset(mut self, offset: Vector) -> Self {
        self.offset = Some(offset);
        self
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn offset(&self) -> Option<Vector> {
        self.offset
    }

    /// The problems found while reading the path data.
    ///
    /// Argument count problems are found later, while interpreting the commands.
    #[inline]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolves the commands into primitives, handing them to a callback in
    /// path order with the offset applied.
    ///
    /// Returns the diagnostics found while interpreting the commands.
    pub fn for_each_primitive(&self, callback: &mut dyn FnMut(Primitive)) -> Vec<ParseError> {
        match self.offset {
            Some(offset) => interpret_with(&self.commands, &mut |primitive| {
                callback(primitive.translate(offset))
            }),
            None => interpret_with(&self.commands, callback),
        }
    }

    /// Resolves all of the commands into primitives.
    ///
    /// The errors of the result include the ones found while reading the path data.
    pub fn interpret(&self) -> Interpretation {
        let mut primitives = Vec::with_capacity(self.commands.len());
        let mut errors = self.errors.clone();
        errors.extend(self.for_each_primitive(&mut |primitive| primitives.push(primitive)));

        Interpretation { primitives, errors }
    }
}

/// Parses path data strictly.
impl FromStr for Path {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Path, ParseError> {
        Path::parse_with_options(src, &ParserOptions::STRICT)
    }
}

#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn absent_and_empty_data() {
    assert!(Path::from_attribute(None).is_empty());
    assert!(Path::from_attribute(Some("")).is_empty());
    assert!(Path::parse("no commands here 1 2 3").is_empty());
    assert!(Path::parse("").interpret().primitives.is_empty());
}

#[test]
fn diagnostics_are_recorded() {
    let path = Path::parse("M0 0 T5 5 L1 1 2 Z");
    assert_eq!(path.commands().len(), 3);
    assert_eq!(
        path.errors(),
        &[ParseError::Command {
            command: 'T',
            column: 5
        }][..]
    );

    let result = path.interpret();
    assert_eq!(result.errors.len(), 2);
    assert!(matches!(
        result.errors[1],
        ParseError::MissingArguments {
            command: 'L',
            index: 1,
            ..
        }
    ));
    assert_eq!(result.primitives.len(), 3);
}

#[test]
fn strict_parsing() {
    let strict = ParserOptions::DEFAULT.with_strict(true);

    assert!(Path::parse_with_options("M0 0 L1 1", &strict).is_ok());
    assert!(matches!(
        Path::parse_with_options("M0 0 T5 5", &strict),
        Err(ParseError::Command { command: 'T', .. })
    ));
    assert!(matches!(
        Path::parse_with_options("M0 0 L1 1 2", &strict),
        Err(ParseError::MissingArguments { index: 1, .. })
    ));
    assert!(matches!(
        Path::parse_with_options("M0 0 L1 --1", &strict),
        Err(ParseError::Number { .. })
    ));
    assert!(matches!(
        "M0 0 Z 1".parse::<Path>(),
        Err(ParseError::UnexpectedArguments { command: 'Z', .. })
    ));

    let lenient = Path::parse_with_options("M0 0 T5 5", &ParserOptions::DEFAULT);
    assert_eq!(lenient.map(|path| path.errors().len()), Ok(1));
}

#[test]
fn offset_is_applied_to_every_coordinate() {
    let path = Path::parse("M1 1 q1 1 2 0 Z").with_offset(vector(10.0, 20.0));
    assert_eq!(path.offset(), Some(vector(10.0, 20.0)));

    let primitives = path.interpret().primitives;
    assert_eq!(
        primitives,
        vec![
            Primitive::MoveTo {
                to: point(11.0, 21.0)
            },
            Primitive::Quadratic(crate::geom::QuadraticBezierSegment {
                from: point(11.0, 21.0),
                ctrl: point(12.0, 22.0),
                to: point(13.0, 21.0),
            }),
            Primitive::Close {
                from: point(13.0, 21.0),
                to: point(11.0, 21.0)
            },
        ]
    );
}
