use {
    bit_reduction::{count_bits_with_observer, BitString, LogObserver, Operation},
    clap::Parser,
    log::*,
    std::{
        io::{self, Write},
        process::exit,
    },
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Binary numbers to reduce, most significant bit first
    #[clap(default_value = "100000")]
    bits: Vec<String>,

    /// Also print the operations in the order they are applied
    #[clap(long)]
    steps: bool,

    /// Reject inputs longer than this many characters
    #[clap(long, env = "BIT_REDUCTION_MAX_BITS")]
    max_bits: Option<usize>,
}

/// Counts every input in `args`, writing results to `out`.
/// Returns the number of rejected inputs.
fn run(args: &Args, out: &mut impl Write) -> io::Result<usize> {
    let mut failed = 0;
    for input in &args.bits {
        if let Some(max_bits) = args.max_bits {
            let len = input.chars().count();
            if len > max_bits {
                error!("{input:?}: {len} bits, longer than {max_bits}");
                failed += 1;
                continue;
            }
        }

        let bits = match BitString::parse(input) {
            Ok(bits) => bits,
            Err(err) => {
                error!("{input:?}: {err}");
                failed += 1;
                continue;
            }
        };

        let count = count_bits_with_observer(&bits, LogObserver);
        writeln!(out, "{bits}: {count}")?;

        if args.steps {
            let steps: Vec<String> = bits.steps().map(|op: Operation| op.to_string()).collect();
            writeln!(out, "  {}", steps.join(" "))?;
        }
    }
    Ok(failed)
}

fn main() {
    env_logger::init();
    let args: Args = Args::parse();

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(0) => {}
        Ok(failed) => {
            warn!("{failed} of {} inputs rejected", args.bits.len());
            exit(1);
        }
        Err(err) => {
            error!("failed to write output: {err}");
            exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(argv: &[&str]) -> (String, usize) {
        let argv = std::iter::once("bit-reduction").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let failed = run(&args, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), failed)
    }

    #[test]
    fn test_default_input() {
        let (out, failed) = run_with(&[]);
        assert_eq!(out, "100000: 6\n");
        assert_eq!(failed, 0);
    }

    #[test]
    fn test_rejected_input_does_not_stop_the_rest() {
        let (out, failed) = run_with(&["11", "000", "10"]);
        assert_eq!(out, "11: 3\n10: 2\n");
        assert_eq!(failed, 1);
    }

    #[test]
    fn test_max_bits() {
        let (out, failed) = run_with(&["--max-bits", "2", "111", "11"]);
        assert_eq!(out, "11: 3\n");
        assert_eq!(failed, 1);
    }

    #[test]
    fn test_steps() {
        let (out, failed) = run_with(&["--steps", "11"]);
        assert_eq!(out, "11: 3\n  decrement halve decrement\n");
        assert_eq!(failed, 0);
    }
}
