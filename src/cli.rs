use clap::{crate_version, App};

/// Handles `--help` and `--version`. The generator takes no other arguments and exits with a
/// usage error if it is given any.
pub fn parse_cli_args() {
    App::new("Power Gen")
        .version(crate_version!())
        .author("Adolph C. <adolphc@outlook.com>")
        .about(
            "Prints Fortran `power_<n>` functions computing x**n by repeated squaring, \
             for every n up to the configured maximum.",
        )
        .get_matches();
}
