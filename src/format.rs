use crate::chain::{decompose, Chain, Step};
use std::io::Write;

/// Name of the routine's only argument, which holds `x^1`.
const INPUT_NAME: &str = "x1";

fn var_name(key: u32) -> String {
    format!("x{}", key)
}

/// Writes the `power_<n>` routine for every exponent in `1..=max`, each followed by an empty
/// line.
pub fn write_all_subroutines(max: u32, output: &mut dyn Write) -> anyhow::Result<()> {
    for n in 1..=max {
        write_subroutine(n, output)?;
        writeln!(output)?;
    }
    Ok(())
}

/// Writes a Fortran function computing `x**n` with the multiplications of `n`'s halving chain.
pub fn write_subroutine(n: u32, output: &mut dyn Write) -> anyhow::Result<()> {
    write_chain(&decompose(n), output)
}

pub fn render_subroutine(n: u32) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    write_subroutine(n, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_chain(chain: &Chain, output: &mut dyn Write) -> anyhow::Result<()> {
    let n = chain.exponent();

    // Classify every step up front so a broken chain panics before anything is written.
    let steps: Vec<(u32, u32, Step)> = chain.steps().collect();

    writeln!(output, "double precision function power_{}({})", n, INPUT_NAME)?;
    writeln!(output, " double precision, intent(in) :: {}", INPUT_NAME)?;
    writeln!(output, " BEGIN_DOC")?;
    writeln!(output, "!  Fast computation of x**{}", n)?;
    writeln!(output, " END_DOC")?;

    if let Some((_input, derived)) = chain.keys().split_first() {
        if !derived.is_empty() {
            let names: Vec<String> = derived.iter().map(|&key| var_name(key)).collect();
            writeln!(output, " double precision :: {}", names.join(", "))?;
        }
    }

    for (prev, cur, step) in steps {
        let rhs = match step {
            Step::Square => var_name(prev),
            Step::MultiplyByInput => INPUT_NAME.to_string(),
        };
        writeln!(output, " {} = {} * {}", var_name(cur), var_name(prev), rhs)?;
    }

    writeln!(output, " power_{} = {}", n, var_name(n))?;
    writeln!(output, "end")?;

    Ok(())
}
