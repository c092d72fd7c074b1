use std::path::PathBuf;

use argh::FromArgs;
use thiserror::Error;
use trisolve::{dispatch, LinalgError, Method, Outcome, Request, SolverParams};

mod parse;

use parse::{parse_matrix, parse_vector, to_method, ParseError};

/// Factor a square matrix and optionally solve A * x = b
#[derive(Debug, FromArgs)]
struct Args {
    /// method to run: cholesky, doolittle, lu or det
    #[argh(positional, from_str_fn(to_method))]
    method: Option<Method>,

    /// matrix rows separated by ';', entries by ',' or spaces
    #[argh(option, short = 'm')]
    matrix: Option<String>,

    /// right-hand side entries separated by ',' or spaces
    #[argh(option, short = 'b')]
    rhs: Option<String>,

    /// path to a JSON request with "method", "matrix" and optional "rhs"
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// tolerance for the symmetry and singularity checks
    #[argh(option, short = 't', default = "0.0")]
    tol: f64,

    /// number of decimals when printing matrices
    #[argh(option, short = 'p', default = "4")]
    precision: usize,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Linalg(#[from] LinalgError),

    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),
}

// A method given on the command line takes precedence over the one in the JSON.
fn request_from_json(json: &str, method: Option<Method>) -> Result<Request<f64>, CliError> {
    let mut request: Request<f64> = serde_json::from_str(json)?;
    if let Some(method) = method {
        request.method = method;
    }
    Ok(request)
}

fn build_request(args: &Args) -> Result<Request<f64>, CliError> {
    if let Some(path) = &args.input {
        log::info!("Reading request from {}", path.display());
        return request_from_json(&std::fs::read_to_string(path)?, args.method);
    }

    let method = args.method.ok_or(CliError::MissingArgument("method"))?;
    let matrix = args
        .matrix
        .as_deref()
        .ok_or(CliError::MissingArgument("--matrix"))?;
    let mut request = Request::new(method, parse_matrix(matrix)?);
    if let Some(rhs) = args.rhs.as_deref() {
        request = request.with_rhs(parse_vector(rhs)?);
    }
    Ok(request)
}

fn print_outcome(outcome: &Outcome<f64>, precision: usize) {
    match outcome {
        Outcome::Determinant(det) => println!("Determinant = {det}"),
        Outcome::Factorized {
            lower,
            upper,
            permutation,
            solution,
        } => {
            if let Some(permutation) = permutation {
                println!("Row permutation (P): {permutation:?}");
            }
            println!("Lower triangular matrix (L):");
            print!("{lower:.precision$}");
            println!("Upper triangular matrix (U):");
            print!("{upper:.precision$}");

            if let Some(solution) = solution {
                println!("Solution for Y (L * Y = B):");
                for (i, y) in solution.y.iter().enumerate() {
                    println!("y{} = {y}", i + 1);
                }
                println!("Solution for X (U * X = Y):");
                for (i, x) in solution.x.iter().enumerate() {
                    println!("x{} = {x}", i + 1);
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let request = build_request(&args)?;
    let params = SolverParams::with_tolerance(args.tol);

    let outcome = dispatch(&request, &params).map_err(CliError::from)?;
    print_outcome(&outcome, args.precision);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "method": "cholesky",
        "matrix": [[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]],
        "rhs": [1.0, 2.0, 3.0]
    }"#;

    fn args(method: Option<Method>, input: Option<PathBuf>) -> Args {
        Args {
            method,
            matrix: Some("2, 1; 1, 3".to_string()),
            rhs: Some("1 2".to_string()),
            input,
            tol: 0.0,
            precision: 4,
        }
    }

    #[test]
    fn test_request_from_json() -> Result<(), CliError> {
        let request = request_from_json(REQUEST, None)?;
        assert_eq!(request.method, Method::Cholesky);
        assert_eq!(request.matrix.len(), 3);
        assert_eq!(request.rhs, Some(vec![1.0, 2.0, 3.0]));

        let request = request_from_json(REQUEST, Some(Method::PivotedLu))?;
        assert_eq!(request.method, Method::PivotedLu);
        assert_eq!(request.matrix[2], vec![-16.0, -43.0, 98.0]);
        Ok(())
    }

    #[test]
    fn test_request_from_json_without_rhs() -> Result<(), CliError> {
        let request = request_from_json(r#"{"method":"determinant","matrix":[[2.0]]}"#, None)?;
        assert_eq!(request.method, Method::Determinant);
        assert_eq!(request.rhs, None);
        Ok(())
    }

    #[test]
    fn test_request_from_json_invalid() {
        assert!(matches!(
            request_from_json(r#"{"method":"qr","matrix":[[1.0]]}"#, None),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_build_request_from_flags() -> Result<(), CliError> {
        let request = build_request(&args(Some(Method::Doolittle), None))?;
        assert_eq!(request.method, Method::Doolittle);
        assert_eq!(request.matrix, vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        assert_eq!(request.rhs, Some(vec![1.0, 2.0]));

        assert!(matches!(
            build_request(&args(None, None)),
            Err(CliError::MissingArgument("method"))
        ));
        Ok(())
    }

    #[test]
    fn test_build_request_missing_file() {
        let missing = PathBuf::from("/nonexistent/trisolve/request.json");
        assert!(matches!(
            build_request(&args(Some(Method::Cholesky), Some(missing))),
            Err(CliError::Io(_))
        ));
    }
}
