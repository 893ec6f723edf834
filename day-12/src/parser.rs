use nom::{
    character::complete::{line_ending, satisfy},
    combinator::all_consuming,
    multi::{many0, many1, separated_list0},
    IResult,
};
use nom_locate::LocatedSpan;

use crate::error::{FenceError, GridParseError};
use crate::map::Map;

type Span<'a> = LocatedSpan<&'a str>;

fn parse_plot(input: Span) -> IResult<Span, char> {
    satisfy(|c: char| c.is_ascii_graphic())(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<char>>> {
    separated_list0(line_ending, many1(parse_plot))(input)
}

fn parse_trailer(input: Span) -> IResult<Span, Vec<Span>> {
    all_consuming(many0(line_ending))(input)
}

fn failure_offset(input: &str, err: nom::Err<nom::error::Error<Span>>) -> usize {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input.location_offset(),
        nom::Err::Incomplete(_) => input.len(),
    }
}

/// Parses newline-separated rows of plot labels. Rows keep their own length;
/// only line endings may follow the last row, and blank input yields an
/// empty map.
#[tracing::instrument(skip(input))]
pub fn parse_map(input: &str) -> Result<Map, FenceError> {
    let (rest, rows) = parse_rows(Span::new(input))
        .map_err(|e| GridParseError::at(input, failure_offset(input, e)))?;

    if let Err(e) = parse_trailer(rest) {
        let stop = failure_offset(input, e);
        // plots after a blank line: the blank line is what's wrong
        let offset = match input[stop..].chars().next() {
            Some(c) if c.is_ascii_graphic() => rest.location_offset(),
            _ => stop,
        };
        return Err(GridParseError::at(input, offset).into());
    }

    Ok(Map::new(rows))
}
