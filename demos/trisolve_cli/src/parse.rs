use thiserror::Error;
use trisolve::Method;

/// Errors raised while turning command line text into a request.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// An entry is not a valid number.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// No entries were given.
    #[error("Empty input for {0}")]
    Empty(&'static str),
}

pub fn to_method(value: &str) -> Result<Method, String> {
    match value {
        "cholesky" => Ok(Method::Cholesky),
        "doolittle" => Ok(Method::Doolittle),
        "lu" | "pivoted_lu" => Ok(Method::PivotedLu),
        "det" | "determinant" => Ok(Method::Determinant),
        _ => Err(format!(
            "Unsupported method '{value}', expected one of: cholesky, doolittle, lu, det"
        )),
    }
}

/// Parse a list of numbers separated by commas and/or whitespace.
pub fn parse_vector(text: &str) -> Result<Vec<f64>, ParseError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(ParseError::Empty("vector"));
    }
    Ok(values)
}

/// Parse matrix rows separated by `;`.
///
/// Rows are not checked for equal length here, the dispatcher reports a
/// non-square input.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let rows = text
        .split(';')
        .filter(|row| !row.trim().is_empty())
        .map(parse_vector)
        .collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Err(ParseError::Empty("matrix"));
    }
    Ok(rows)
}
