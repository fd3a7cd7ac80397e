use crate::commands::FlattenCmd;
use pathflat::geom::LineSegment;
use pathflat::path::{ParseError, Path};
use pathflat::{drive_with_options, DriveError};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum FlattenError {
    Io(io::Error),
    Parse(ParseError),
    Drive(DriveError),
    InvalidArgument(String),
}

impl ::std::convert::From<::std::io::Error> for FlattenError {
    fn from(err: io::Error) -> Self { FlattenError::Io(err) }
}

impl ::std::convert::From<ParseError> for FlattenError {
    fn from(err: ParseError) -> Self { FlattenError::Parse(err) }
}

impl ::std::convert::From<DriveError> for FlattenError {
    fn from(err: DriveError) -> Self { FlattenError::Drive(err) }
}

impl fmt::Display for FlattenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlattenError::Io(err) => write!(f, "{}", err),
            FlattenError::Parse(err) => write!(f, "Invalid path: {}", err),
            FlattenError::Drive(err) => write!(f, "{}", err),
            FlattenError::InvalidArgument(arg) => write!(f, "Invalid argument: {}", arg),
        }
    }
}

pub fn flatten(mut cmd: FlattenCmd) -> Result<(), FlattenError> {
    let mut paths = Vec::with_capacity(cmd.input.len());
    for src in &cmd.input {
        let mut path = Path::parse_with_options(src, &cmd.parser)?;
        if let Some(offset) = cmd.offset {
            path = path.with_offset(offset);
        }
        paths.push(path);
    }

    if cmd.count {
        let report = drive_with_options(&paths, &cmd.options, &mut |_: LineSegment<f64>| {})?;

        writeln!(&mut *cmd.output, "paths: {}", report.paths)?;
        writeln!(&mut *cmd.output, "segments: {}", report.segments)?;

        return Ok(());
    }

    let output = &mut *cmd.output;
    let mut result = Ok(());
    let report = drive_with_options(&paths, &cmd.options, &mut |segment: LineSegment<f64>| {
        if result.is_ok() {
            let (x1, y1, x2, y2) = segment.to_tuple();
            result = writeln!(output, "{} {} {} {}", x1, y1, x2, y2);
        }
    })?;
    result?;

    log::info!(
        "Flattened {} paths into {} segments ({} diagnostics).",
        report.paths,
        report.segments,
        report.diagnostics.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathflat::path::ParserOptions;
    use pathflat::FlattenOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run(input: &str, count: bool) -> String {
        let buffer = SharedBuffer::default();
        let cmd = FlattenCmd {
            input: vec![input.to_string()],
            output: Box::new(buffer.clone()),
            options: FlattenOptions::sample_count(3),
            parser: ParserOptions::DEFAULT,
            offset: None,
            count,
        };

        flatten(cmd).unwrap();

        let bytes = buffer.0.borrow().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn one_segment_per_line() {
        assert_eq!(
            run("M0,0 Q5,10 10,0 L10,5", false),
            "0 0 5 5\n5 5 10 0\n10 0 10 5\n"
        );
    }

    #[test]
    fn count_only() {
        assert_eq!(run("M0,0 Q5,10 10,0 L10,5", true), "paths: 1\nsegments: 3\n");
    }
}
