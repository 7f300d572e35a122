//! nthroot - Newton-Raphson n-th root calculator
//!
//! Computes the n-th root of a real number by fixed-iteration
//! Newton-Raphson and optionally checks it against the standard power
//! function.
//!
//! # Usage
//!
//! ```bash
//! nthroot 216 --index 3
//! nthroot -216 -n 3 --compare
//! nthroot 1000 -n -3 --iterations 40
//! ```

use clap::Parser;
use newton_root::{
    error::Result,
    CalculatorConfig, RootCalculator, NEWTON_METHOD_ITERATIONS,
};

/// N-th root of a real number by Newton-Raphson iteration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Value whose root is computed
    #[arg(value_name = "RADICAND")]
    radicand: f64,

    /// Root index (negative for the reciprocal root)
    #[arg(short = 'n', long, default_value_t = 2)]
    index: i32,

    /// Number of Newton updates
    #[arg(long, default_value_t = NEWTON_METHOD_ITERATIONS)]
    iterations: usize,

    /// Fail instead of printing an undefined result
    #[arg(long)]
    strict: bool,

    /// Also print root^index recomputed with the standard power function
    #[arg(long)]
    compare: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = CalculatorConfig::new().with_iterations(args.iterations);
    let calculator = RootCalculator::try_with_config(config)?;

    let root = if args.strict {
        calculator.try_nth_root(args.radicand, args.index)?
    } else {
        calculator.nth_root(args.radicand, args.index)
    };

    println!("{}", render(&args, root));
    Ok(())
}

/// Format the result line for the given arguments.
fn render(args: &Args, root: f64) -> String {
    if root.is_nan() {
        return format!("root {} of {} is undefined (NaN)", args.index, args.radicand);
    }
    if !args.compare {
        return root.to_string();
    }
    let check = root.powi(args.index);
    format!("({root})^{} = {check} ≈ {}", args.index, args.radicand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_radicand() {
        let args = Args::try_parse_from(["nthroot", "-216", "-n", "3"]).unwrap();
        assert_eq!(args.radicand, -216.0);
        assert_eq!(args.index, 3);
        assert_eq!(args.iterations, NEWTON_METHOD_ITERATIONS);
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_negative_index() {
        let args = Args::try_parse_from(["nthroot", "1000", "--index", "-3", "--compare"]).unwrap();
        assert_eq!(args.index, -3);
        assert!(args.compare);
    }

    #[test]
    fn test_parse_defaults_to_square_root() {
        let args = Args::try_parse_from(["nthroot", "4"]).unwrap();
        assert_eq!(args.index, 2);
    }

    #[test]
    fn test_render_undefined() {
        let args = Args::try_parse_from(["nthroot", "-216", "-n", "0"]).unwrap();
        let line = render(&args, f64::NAN);
        assert!(line.contains("undefined"));
    }

    #[test]
    fn test_render_compare() {
        let args = Args::try_parse_from(["nthroot", "216", "-n", "3", "--compare"]).unwrap();
        let line = render(&args, 6.0);
        assert_eq!(line, "(6)^3 = 216 ≈ 216");
    }
}
