//! Interactive token input.
//!
//! Values may be separated by whitespace or commas, and points may be
//! wrapped in parentheses, so `3 4`, `3,4` and `(3, 4)` all read as the same
//! point. Several values can be typed on one line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use gridstar_core::Point;

use crate::error::VizError;

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .filter(|t| !t.is_empty())
}

/// Parse a point written as `x,y`, `x y` or `(x, y)`.
pub fn parse_point(s: &str) -> Result<Point, VizError> {
    let parts: Vec<&str> = tokens(s).collect();
    let [x, y] = parts.as_slice() else {
        return Err(VizError::Input {
            what: "point",
            token: s.to_string(),
        });
    };
    let coord = |t: &str| {
        t.parse::<i32>().map_err(|_| VizError::Input {
            what: "coordinate",
            token: t.to_string(),
        })
    };
    Ok(Point::new(coord(*x)?, coord(*y)?))
}

/// Asks questions on `output` and reads whitespace/comma separated answers
/// from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print a question line.
    pub fn ask(&mut self, question: &str) -> Result<(), VizError> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read the next token and parse it as `T`.
    pub fn read<T: FromStr>(&mut self, what: &'static str) -> Result<T, VizError> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| VizError::Input { what, token })
    }

    /// Read two integers as a point.
    pub fn read_point(&mut self, what: &'static str) -> Result<Point, VizError> {
        let x = self.read(what)?;
        let y = self.read(what)?;
        Ok(Point::new(x, y))
    }

    /// The output sink, e.g. to inspect what was asked.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn next_token(&mut self, what: &'static str) -> Result<String, VizError> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Ok(t);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(VizError::MissingInput { what });
            }
            self.pending.extend(tokens(&line).map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn point_formats() {
        assert_eq!(parse_point("3,4").unwrap(), Point::new(3, 4));
        assert_eq!(parse_point("(3, 4)").unwrap(), Point::new(3, 4));
        assert_eq!(parse_point(" -1 7 ").unwrap(), Point::new(-1, 7));
        assert!(parse_point("3").is_err());
        assert!(parse_point("3,4,5").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn reads_across_and_within_lines() {
        let input = Cursor::new("10\n(0, 0) 9,9\n\n  25\n");
        let mut p = Prompter::new(input, Vec::new());
        assert_eq!(p.read::<i32>("size").unwrap(), 10);
        assert_eq!(p.read_point("start").unwrap(), Point::new(0, 0));
        assert_eq!(p.read_point("goal").unwrap(), Point::new(9, 9));
        assert_eq!(p.read::<usize>("obstacles").unwrap(), 25);
        assert!(matches!(
            p.read::<i32>("more"),
            Err(VizError::MissingInput { what: "more" })
        ));
    }

    #[test]
    fn ask_writes_question_line() {
        let mut p = Prompter::new(Cursor::new(""), Vec::new());
        p.ask("Enter Grid Size:").unwrap();
        assert_eq!(p.output(), b"Enter Grid Size:\n");
    }

    #[test]
    fn bad_token_is_reported() {
        let mut p = Prompter::new(Cursor::new("ten\n"), Vec::new());
        match p.read::<i32>("grid size") {
            Err(VizError::Input { what, token }) => {
                assert_eq!(what, "grid size");
                assert_eq!(token, "ten");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
