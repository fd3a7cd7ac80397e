//! The cursor state machine resolving path commands into primitives.
//!
//! Commands are interpreted one at a time by [`step`], which takes the cursor
//! state before the command and returns the state after it along with the
//! primitives the command produced. Relative coordinates of each argument group
//! are resolved against the cursor at the start of that group, so the groups of
//! `l 5,0 0,5` are chained.

use crate::commands::{PathCommand, Verb};
use crate::geom::{Angle, ArcFlags, CubicBezierSegment, QuadraticBezierSegment, SvgArc};
use crate::math::{point, vector, Point};
use crate::primitive::Primitive;
use crate::ParseError;

use std::marker::PhantomData;

/// The position of the pen while walking a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CursorState {
    /// The current point.
    pub current: Point,
    /// Where the current subpath started, set by move commands and read by
    /// close commands.
    pub subpath_start: Point,
}

impl CursorState {
    /// Both points at the origin, the state at the beginning of every path.
    pub const INITIAL: CursorState = CursorState {
        current: Point {
            x: 0.0,
            y: 0.0,
            _unit: PhantomData,
        },
        subpath_start: Point {
            x: 0.0,
            y: 0.0,
            _unit: PhantomData,
        },
    };
}

impl Default for CursorState {
    fn default() -> Self {
        CursorState::INITIAL
    }
}

/// The outcome of interpreting one command.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CursorState,
    pub primitives: Vec<Primitive>,
    pub error: Option<ParseError>,
}

/// Interprets a single command.
///
/// `index` is the position of the command in its path and only serves to
/// locate the diagnostic, if any.
pub fn step(state: CursorState, command: &PathCommand, index: usize) -> Step {
    let mut primitives = Vec::with_capacity(command.groups().len().max(1));
    let (state, error) = step_with(state, command, index, &mut |primitive| {
        primitives.push(primitive)
    });

    Step {
        state,
        primitives,
        error,
    }
}

/// Interprets a single command, handing each primitive to a callback as soon
/// as it is resolved.
///
/// Commands with a trailing incomplete argument group still produce the
/// primitives of their complete groups, and report a `MissingArguments`
/// diagnostic.
pub fn step_with(
    mut state: CursorState,
    command: &PathCommand,
    index: usize,
    callback: &mut dyn FnMut(Primitive),
) -> (CursorState, Option<ParseError>) {
    let error = command.check_arguments(index).err();
    let verb = command.verb();
    let relative = command.is_relative();

    for (group, args) in command.groups().enumerate() {
        let from = state.current;
        let origin = if relative {
            from.to_vector()
        } else {
            vector(0.0, 0.0)
        };

        let primitive = match verb {
            Verb::MoveTo => {
                let to = point(args[0], args[1]) + origin;
                if group == 0 {
                    state.subpath_start = to;
                    Primitive::MoveTo { to }
                } else {
                    // Extra pairs are implicit line-to commands.
                    Primitive::Line { from, to }
                }
            }
            Verb::LineTo => Primitive::Line {
                from,
                to: point(args[0], args[1]) + origin,
            },
            Verb::HorizontalLineTo => Primitive::HorizontalLine {
                from,
                to: point(args[0] + origin.x, from.y),
            },
            Verb::VerticalLineTo => Primitive::VerticalLine {
                from,
                to: point(from.x, args[0] + origin.y),
            },
            Verb::ArcTo => Primitive::Arc(SvgArc {
                from,
                to: point(args[5], args[6]) + origin,
                radii: vector(args[0], args[1]),
                x_rotation: Angle::degrees(args[2]),
                flags: ArcFlags {
                    large_arc: args[3] != 0.0,
                    sweep: args[4] != 0.0,
                },
            }),
            Verb::QuadraticTo => Primitive::Quadratic(QuadraticBezierSegment {
                from,
                ctrl: point(args[0], args[1]) + origin,
                to: point(args[2], args[3]) + origin,
            }),
            Verb::CubicTo => Primitive::Cubic(CubicBezierSegment {
                from,
                ctrl1: point(args[0], args[1]) + origin,
                ctrl2: point(args[2], args[3]) + origin,
                to: point(args[4], args[5]) + origin,
            }),
            // No argument group.
            Verb::Close => continue,
        };

        state.current = primitive.to();
        callback(primitive);
    }

    if verb == Verb::Close {
        callback(Primitive::Close {
            from: state.current,
            to: state.subpath_start,
        });
        state.current = state.subpath_start;
    }

    (state, error)
}

/// The primitives of a whole path and the diagnostics found along the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interpretation {
    pub primitives: Vec<Primitive>,
    pub errors: Vec<ParseError>,
}

/// Interprets a sequence of commands starting from [`CursorState::INITIAL`].
pub fn interpret(commands: &[PathCommand]) -> Interpretation {
    let mut primitives = Vec::with_capacity(commands.len());
    let errors = interpret_with(commands, &mut |primitive| primitives.push(primitive));

    Interpretation { primitives, errors }
}

/// Interprets a sequence of commands starting from [`CursorState::INITIAL`],
/// handing each primitive to a callback in path order.
///
/// Returns the diagnostics of the commands with a wrong number of arguments.
pub fn interpret_with(
    commands: &[PathCommand],
    callback: &mut dyn FnMut(Primitive),
) -> Vec<ParseError> {
    let mut state = CursorState::INITIAL;
    let mut errors = Vec::new();
    for (index, command) in commands.iter().enumerate() {
        let (next, error) = step_with(state, command, index, callback);
        state = next;
        errors.extend(error);
    }

    errors
}

#[cfg(test)]
use crate::tokenizer::Tokenizer;

#[cfg(test)]
fn commands(src: &str) -> Vec<PathCommand> {
    Tokenizer::new(src).filter_map(Result::ok).collect()
}

#[test]
fn chained_relative_lines() {
    let result = interpret(&commands("m10,10 l5,0 l0,5"));
    assert!(result.errors.is_empty());
    assert_eq!(
        result.primitives,
        vec![
            Primitive::MoveTo {
                to: point(10.0, 10.0)
            },
            Primitive::Line {
                from: point(10.0, 10.0),
                to: point(15.0, 10.0)
            },
            Primitive::Line {
                from: point(15.0, 10.0),
                to: point(15.0, 15.0)
            },
        ]
    );

    // The same with implicit repetition.
    let repeated = interpret(&commands("m10,10 l5,0 0,5"));
    assert_eq!(repeated.primitives, result.primitives);
}

#[test]
fn move_to_with_several_pairs() {
    let result = interpret(&commands("M1 1 2 2 3 1 z"));
    assert_eq!(
        result.primitives,
        vec![
            Primitive::MoveTo { to: point(1.0, 1.0) },
            Primitive::Line {
                from: point(1.0, 1.0),
                to: point(2.0, 2.0)
            },
            Primitive::Line {
                from: point(2.0, 2.0),
                to: point(3.0, 1.0)
            },
            Primitive::Close {
                from: point(3.0, 1.0),
                to: point(1.0, 1.0)
            },
        ]
    );

    let relative = interpret(&commands("m1 1 1 1 1 -1"));
    assert_eq!(relative.primitives[1..], result.primitives[1..3]);
}

#[test]
fn relative_move_after_a_subpath() {
    let state = CursorState {
        current: point(5.0, 5.0),
        subpath_start: point(0.0, 0.0),
    };
    let cmd = PathCommand::new('m', vec![1.0, -2.0]).unwrap();
    let result = step(state, &cmd, 0);

    assert_eq!(
        result.primitives,
        vec![Primitive::MoveTo { to: point(6.0, 3.0) }]
    );
    assert_eq!(result.state.current, point(6.0, 3.0));
    assert_eq!(result.state.subpath_start, point(6.0, 3.0));
    assert_eq!(result.error, None);
}

#[test]
fn horizontal_and_vertical_lines() {
    let result = interpret(&commands("M1 2 H5 h-1 V10 v2 2"));
    let ends: Vec<Point> = result.primitives.iter().map(|p| p.to()).collect();
    assert_eq!(
        ends,
        vec![
            point(1.0, 2.0),
            point(5.0, 2.0),
            point(4.0, 2.0),
            point(4.0, 10.0),
            point(4.0, 12.0),
            point(4.0, 14.0),
        ]
    );
    assert!(matches!(
        result.primitives[1],
        Primitive::HorizontalLine { .. }
    ));
    assert!(matches!(result.primitives[3], Primitive::VerticalLine { .. }));
}

#[test]
fn relative_curve_groups() {
    // Each group is relative to the end of the previous one.
    let result = interpret(&commands("M10 0 q5 10 10 0 5 10 10 0 c0 1 1 1 1 0"));
    assert_eq!(
        result.primitives[1],
        Primitive::Quadratic(QuadraticBezierSegment {
            from: point(10.0, 0.0),
            ctrl: point(15.0, 10.0),
            to: point(20.0, 0.0),
        })
    );
    assert_eq!(
        result.primitives[2],
        Primitive::Quadratic(QuadraticBezierSegment {
            from: point(20.0, 0.0),
            ctrl: point(25.0, 10.0),
            to: point(30.0, 0.0),
        })
    );
    assert_eq!(
        result.primitives[3],
        Primitive::Cubic(CubicBezierSegment {
            from: point(30.0, 0.0),
            ctrl1: point(30.0, 1.0),
            ctrl2: point(31.0, 1.0),
            to: point(31.0, 0.0),
        })
    );
}

#[test]
fn arcs() {
    let result = interpret(&commands("M0 0 a10 10 30 1 0 10 10 A5 4 0 0 1 0 0"));
    assert_eq!(
        result.primitives[1],
        Primitive::Arc(SvgArc {
            from: point(0.0, 0.0),
            to: point(10.0, 10.0),
            radii: vector(10.0, 10.0),
            x_rotation: Angle::degrees(30.0),
            flags: ArcFlags {
                large_arc: true,
                sweep: false,
            },
        })
    );
    assert_eq!(result.primitives[2].from(), Some(point(10.0, 10.0)));
    assert_eq!(result.primitives[2].to(), point(0.0, 0.0));
}

#[test]
fn close_returns_to_the_subpath_start() {
    let result = interpret(&commands(
        "M1 1 C2 2 3 3 4 1 Q5 5 6 1 A2 2 0 0 1 8 1 Z L9 9 M20 20 l1 0 z l2 2",
    ));
    let closes: Vec<&Primitive> = result
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Close { .. }))
        .collect();

    assert_eq!(
        closes,
        vec![
            &Primitive::Close {
                from: point(8.0, 1.0),
                to: point(1.0, 1.0)
            },
            &Primitive::Close {
                from: point(21.0, 20.0),
                to: point(20.0, 20.0)
            },
        ]
    );

    // After a close, the cursor is back at the subpath start.
    assert_eq!(
        result.primitives[5],
        Primitive::Line {
            from: point(1.0, 1.0),
            to: point(9.0, 9.0)
        }
    );
    assert_eq!(result.primitives.last().map(|p| p.to()), Some(point(22.0, 22.0)));
}

#[test]
fn close_before_any_move() {
    let result = interpret(&commands("L3 4 z"));
    assert_eq!(
        result.primitives[1],
        Primitive::Close {
            from: point(3.0, 4.0),
            to: point(0.0, 0.0)
        }
    );
}

#[test]
fn decimal_arc_flags_shift_the_arguments() {
    let result = interpret(&commands("M0 0 A5 5 0 1.0 0 10 10"));

    assert_eq!(result.primitives.len(), 2);
    assert_eq!(
        result.primitives[1],
        Primitive::Arc(SvgArc {
            from: point(0.0, 0.0),
            to: point(0.0, 10.0),
            radii: vector(5.0, 5.0),
            x_rotation: Angle::degrees(0.0),
            flags: ArcFlags {
                large_arc: true,
                sweep: false,
            },
        })
    );
    assert_eq!(
        result.errors,
        vec![ParseError::MissingArguments {
            command: 'A',
            index: 1,
            arity: 7,
            got: 8
        }]
    );
}

#[test]
fn missing_arguments() {
    let result = interpret(&commands("M0 0 L1 1 2 C1 2 3 4 5 6 7 8 L"));
    assert_eq!(
        result.errors,
        vec![
            ParseError::MissingArguments {
                command: 'L',
                index: 1,
                arity: 2,
                got: 3
            },
            ParseError::MissingArguments {
                command: 'C',
                index: 2,
                arity: 6,
                got: 8
            },
            ParseError::MissingArguments {
                command: 'L',
                index: 3,
                arity: 2,
                got: 0
            },
        ]
    );

    // The incomplete groups are dropped, the complete ones are kept.
    assert_eq!(result.primitives.len(), 3);
    assert_eq!(result.primitives[2].to(), point(5.0, 6.0));
}

#[test]
fn close_with_arguments() {
    let cmd = PathCommand::new('Z', vec![1.0, 2.0]).unwrap();
    let state = CursorState {
        current: point(3.0, 3.0),
        subpath_start: point(1.0, 0.0),
    };
    let result = step(state, &cmd, 7);

    assert_eq!(
        result.error,
        Some(ParseError::UnexpectedArguments {
            command: 'Z',
            index: 7,
            got: 2
        })
    );
    assert_eq!(result.primitives.len(), 1);
    assert_eq!(result.state.current, point(1.0, 0.0));
}

#[test]
fn no_commands() {
    assert_eq!(interpret(&[]), Interpretation::default());
    assert_eq!(interpret(&commands("   ")), Interpretation::default());
}
