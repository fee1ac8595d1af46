mod cli;

use power_gen::{format, POWER_MAX};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn main() {
    cli::parse_cli_args();

    if let Err(err) = run() {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut output = std::io::BufWriter::new(stdout.lock());

    format::write_all_subroutines(POWER_MAX, &mut output)?;
    output.flush()?;

    Ok(())
}

fn report_error(err: &anyhow::Error) {
    let choice = if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    // Nothing left to report to if stderr is gone too.
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "error");
    let _ = stderr.reset();
    let _ = writeln!(stderr, ": {:#}", err);
}
