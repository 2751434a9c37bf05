//! Command-line surface
//!
//! Subcommands can be abbreviated to any unambiguous prefix (`regbits r 0x1`).

use crate::field::FieldSpecError;
use crate::ui::WidthMode;
use crate::value::parse_int;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, infer_subcommands = true)]
pub struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a packed DAC calibration code to RX_LOGIC[13:0]
    Dac2logic {
        /// Index of the VGA gain table
        #[arg(long, default_value_t = 0)]
        index: u32,

        #[arg(value_name = "DAC_CODE_HEX", value_parser = parse_literal)]
        dac_code: Literal,
    },
    /// Show a register as a bit table, optionally overwriting fields
    Regfields {
        /// Field spec: HIGH:LOW[=NEW], BIT[=NEW], comma-separated; repeatable
        #[arg(short = 'f', long = "field", visible_alias = "bits", value_name = "SPEC")]
        fields: Vec<String>,

        /// Drop the gaps between bit columns
        #[arg(long, conflicts_with = "narrower")]
        narrow: bool,

        /// One character per bit column
        #[arg(long)]
        narrower: bool,

        /// Also write the table as SVG
        #[arg(long)]
        save: bool,

        #[arg(value_name = "VALUE", value_parser = parse_literal)]
        value: Literal,
    },
}

/// A numeric argument, keeping the text the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
    pub value: u32,
}

fn parse_literal(text: &str) -> Result<Literal, FieldSpecError> {
    Ok(Literal {
        text: text.trim().to_string(),
        value: parse_int(text)?,
    })
}

pub fn width_mode(narrow: bool, narrower: bool) -> WidthMode {
    if narrower {
        WidthMode::Narrower
    } else if narrow {
        WidthMode::Narrow
    } else {
        WidthMode::Normal
    }
}
