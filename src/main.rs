mod arpa;
mod io;

use anyhow::{Result, ensure};
use colored::Colorize;

use crate::arpa::reverse;
use crate::io::json::{Output, ReverseNameEntry, ReverseNameOutput};
use crate::io::{cli, input};

fn main() -> Result<()> {
    let args = cli::get_parsed_args();

    let mut targets = args.targets.clone();
    if let Some(file_path) = &args.file {
        let file_targets = input::read_from_file(file_path)?;
        if file_targets.is_empty() {
            log_warn!(format!("No addresses found in file: {file_path}"));
        }
        targets.extend(file_targets);
    }
    ensure!(!targets.is_empty(), "No addresses to convert!");

    let mut json_output = args.json.as_ref().map(|_| ReverseNameOutput::new());
    let mut failed_count = 0;

    for target in &targets {
        match reverse::parse_target(target) {
            Ok((address, prefix_len)) => {
                let name = address.ptr_name(prefix_len);

                if !args.quiet {
                    if args.verbose {
                        log_success!(format!(
                            "{} [expanded: {}] [{}]",
                            target.cyan().bold(),
                            address.to_string().blue(),
                            name
                        ));
                    } else {
                        log_success!(format!("{} [{}]", target.cyan().bold(), name));
                    }
                }

                if let Some(output) = json_output.as_mut() {
                    output.add_result(ReverseNameEntry {
                        input: target.clone(),
                        expanded: address.to_string(),
                        prefix_length: prefix_len,
                        reverse_name: name,
                    });
                }
            }
            Err(error) => {
                failed_count += 1;
                if !args.quiet {
                    log_error!(format!("{} [{}]", target.red().bold(), error));
                }
            }
        }
    }

    if let Some((output, path)) = json_output.as_ref().zip(args.json.as_deref()) {
        output.write_to_file(path)?;
    }

    if !args.quiet {
        log_info!(format!(
            "Converted {} of {} addresses",
            targets.len() - failed_count,
            targets.len()
        ));
    }
    ensure!(
        failed_count == 0,
        "{failed_count} address(es) could not be converted"
    );

    Ok(())
}
