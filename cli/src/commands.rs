use pathflat::math::Vector;
use pathflat::path::ParserOptions;
use pathflat::FlattenOptions;
use std::io;

pub struct FlattenCmd {
    /// One path data string per path.
    pub input: Vec<String>,
    pub output: Box<dyn io::Write>,
    pub options: FlattenOptions,
    pub parser: ParserOptions,
    pub offset: Option<Vector>,
    pub count: bool,
}
