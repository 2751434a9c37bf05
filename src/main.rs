// regbits: register bit-field decoder

use std::io::{self, IsTerminal};
use std::path::Path;

use clap::Parser;

use regbits::cli::{width_mode, Cli, Command};
use regbits::dac::dac_to_logic;
use regbits::field::join_field_args;
use regbits::logging::setup_tracing;
use regbits::regfields::run_regfields;
use regbits::ui::{ansi::write_buffer, render_layout, svg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Dac2logic { index, dac_code } => {
            println!("{}", dac_to_logic(dac_code.value, index));
        }
        Command::Regfields {
            fields,
            narrow,
            narrower,
            save,
            value,
        } => {
            let outcome = run_regfields(value.value, &fields);

            // Spec errors are reported, not fatal
            if let Some(line) = outcome.diagnostic_line() {
                println!("{}", line);
            }

            let buffer = render_layout(&outcome.layout, width_mode(narrow, narrower));
            let stdout = io::stdout();
            let colored = stdout.is_terminal();
            write_buffer(&mut stdout.lock(), &buffer, colored)?;

            if save {
                let spec = join_field_args(&fields);
                match svg::save_svg(&buffer, Path::new(svg::SAVE_DIR), &value.text, &spec) {
                    Ok(path) => println!("Saved {}", path.display()),
                    Err(e) => {
                        eprintln!("SAVE ERROR: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
    }

    Ok(())
}
