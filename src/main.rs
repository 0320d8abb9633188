use clap::Parser;

/// Entry point for the oci-locate diagnostic tool.
///
/// Parses the CLI arguments and runs a single scan. Not finding the
/// container anywhere is a normal, reportable outcome and exits with status
/// 0; only an unusable identifier or a failure to emit the report exits
/// non-zero.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug oci-locate 46cbb73a47bb8869a7447f3939f059f9f28de8bf7991ab28de9eeebf1a290fa3
/// ```
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = oci_locate::cli::Cli::parse();
    oci_locate::run(&cli)?;
    Ok(())
}
