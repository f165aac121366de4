use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use crate::env_format::{Flags, Layout};
use crate::env_reader::{decode, Reporter};
use crate::env_writer::{encode, EncodeOptions};
use crate::envfile::{read_source, write_target};
use crate::error::{Result, Warning};

#[derive(Parser, Debug)]
#[command(name = "mkenv")]
#[command(about = "Convert a bootloader environment between plaintext and binary image", long_about = None)]
pub struct Cli {
    /// Size of the target image in bytes (decimal or 0x-prefixed hex); the
    /// image is padded with NUL bytes
    #[arg(short = 's', long = "size", value_parser = parse_size)]
    pub size: Option<u64>,

    /// Write a redundant-environment flags byte (0 = obsolete, 1 = active)
    #[arg(short = 'f', long = "flags", value_parser = parse_flags)]
    pub flags: Option<Flags>,

    /// Reverse operation: get the plaintext back from an image
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Don't compute the CRC, leave the field zeroed
    #[arg(short = 'n', long = "no-crc")]
    pub no_crc: bool,

    /// More output, repeat for more (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Source file
    pub source: PathBuf,

    /// Target file
    pub target: PathBuf,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            size: self.size,
            flags: self.flags,
            checksum: !self.no_crc,
        }
    }
}

/// Accepts decimal or `0x` prefixed hexadecimal.
pub fn parse_size(s: &str) -> std::result::Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid size '{}': {}", s, e))
}

pub fn parse_flags(s: &str) -> std::result::Result<Flags, String> {
    let v: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid flags '{}', expected 0 or 1", s))?;
    Flags::try_from(v).map_err(|e| e.to_string())
}

/// Runs one conversion. Warnings go to `reporter`; fatal errors are returned
/// before the target is touched.
pub fn run<Rep: Reporter>(cli: &Cli, mut reporter: Rep) -> Result<()> {
    let src = read_source(&cli.source)?;

    info!("source file:       {}", cli.source.display());
    info!("target file:       {}", cli.target.display());

    let out = if cli.reverse {
        if cli.size.is_some() {
            reporter.warning(Warning::IgnoredOption("-s"));
        }
        if cli.no_crc {
            reporter.warning(Warning::IgnoredOption("-n"));
        }
        let layout = Layout::with_flags(cli.flags.is_some());
        info!("layout:            {:?}", layout);
        let decoded = decode(&src, layout, &mut reporter)?;
        if let Some(raw) = decoded.flags {
            info!("flags:             {}", raw);
        }
        decoded.data
    } else {
        let image = encode(&src, &cli.encode_options())?;
        info!("size:              {}", image.len());
        info!("type:              binary");
        image
    };

    write_target(&cli.target, &out)
}
