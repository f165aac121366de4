pub mod cli;
pub mod crc;
pub mod env_format;
pub mod env_reader;
pub mod env_writer;
pub mod envfile;
pub mod error;

pub use crc::crc32;
pub use env_format::{Flags, Layout};
pub use env_reader::{decode, CollectingReporter, Decoded, LogReporter, Reporter};
pub use env_writer::{encode, EncodeOptions};
pub use error::{Error, Result, Warning};
