use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Args, Parser, ValueHint,
};
use log::Level;
use std::path::PathBuf;

/// Logging options.
#[derive(Args, Clone)]
pub struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Info,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    pub log_level: Level,
}

#[derive(Args, Clone)]
pub struct FileInOpt {
    /// The input file.
    #[arg(value_hint = ValueHint::FilePath)]
    pub in_file: PathBuf,
}

#[derive(Args, Clone)]
pub struct FileOutOpt {
    /// The output file.
    #[arg(value_hint = ValueHint::FilePath)]
    pub out_file: PathBuf,
}

/// Encoding a payload file into a triple-repetition serial frame.
#[derive(Parser, Clone)]
#[command(version)]
pub struct EncodeCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    #[command(flatten)]
    pub file_in: FileInOpt,

    #[command(flatten)]
    pub file_out: FileOutOpt,
}

/// Decoding a received serial frame back into its payload by majority vote.
#[derive(Parser, Clone)]
#[command(version)]
pub struct DecodeCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    #[command(flatten)]
    pub file_in: FileInOpt,

    #[command(flatten)]
    pub file_out: FileOutOpt,
}
