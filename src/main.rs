use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hex32::{group_report, hex_to_base32, parse_base32, Config, Settings, Variant};
use log::{debug, warn};
use std::io::{self, BufRead};

/// Converts between hexadecimal and checksummed base-32 codes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Command {
  #[command(subcommand)]
  command: Commands,

  /// `uppercase` or `lowercase`; defaults to HEX32_ALPHABET.
  #[arg(long, global = true)]
  alphabet: Option<Variant>,

  /// Append CRC-5 check digits; defaults to HEX32_CHECKSUM.
  #[arg(long, global = true)]
  checksum: Option<bool>,

  /// Split into dash-separated groups; defaults to HEX32_GROUPING.
  #[arg(long, global = true)]
  grouping: Option<bool>,
}

#[derive(Subcommand)]
enum Commands {
  /// Hexadecimal to base-32.
  Encode {
    #[arg()]
    values: Vec<String>,
  },
  /// Base-32 to hexadecimal.
  Decode {
    /// Accept either letter case.
    #[arg(long)]
    ignore_case: bool,

    /// Decode every group on its own, printing `?????` for bad ones.
    #[arg(long)]
    report: bool,

    #[arg()]
    values: Vec<String>,
  },
}

impl Command {
  fn config(&self) -> Result<Config> {
    let mut config = Settings::get()
      .context("reading settings from the environment")?
      .config();
    if let Some(variant) = self.alphabet {
      config.variant = variant;
    }
    if let Some(checksum) = self.checksum {
      config.checksum = checksum;
    }
    if let Some(grouping) = self.grouping {
      config.grouping = grouping;
    }
    Ok(config)
  }
}

/// The given values, or lines from stdin up to the first blank one.
fn inputs(values: &[String]) -> Result<Vec<String>> {
  if !values.is_empty() {
    return Ok(values.to_vec());
  }
  let mut lines = vec![];
  for line in io::stdin().lock().lines() {
    let line = line.context("reading stdin")?;
    let line = line.trim();
    if line.is_empty() {
      break;
    }
    lines.push(line.to_string());
  }
  Ok(lines)
}

fn main() -> Result<()> {
  pretty_env_logger::init();
  let command = Command::parse();
  let config = command.config()?;
  debug!("using {:?}", config);

  match &command.command {
    Commands::Encode { values } => {
      for value in inputs(values)? {
        let encoded = hex_to_base32(&value, &config);
        if encoded.is_empty() {
          warn!("`{}' is not a hexadecimal number", value);
        }
        println!("{}", encoded);
      }
    }
    Commands::Decode {
      ignore_case,
      report,
      values,
    } => {
      let mut failures = 0;
      for value in inputs(values)? {
        let value = if *ignore_case {
          config.variant.normalize_case(&value)
        } else {
          value
        };
        if *report {
          let mut line = String::new();
          for group in group_report(&value, &config) {
            match group {
              Ok(hex) => line.push_str(&hex),
              Err(e) => {
                warn!("{}", e);
                failures += 1;
                line.push_str("?????");
              }
            }
          }
          println!("{}", line);
        } else {
          match parse_base32(&value, &config) {
            Ok(hex) => println!("{}", hex),
            Err(e) => {
              failures += 1;
              println!("invalid: {}", e);
            }
          }
        }
      }
      if failures > 0 {
        anyhow::bail!("{} invalid value(s)", failures);
      }
    }
  }
  Ok(())
}
