//! Decodes a received triple-repetition frame back into its payload.
//! Useful as a repeatable dry-run of the receive side of a link.

use clap::Parser as _;
use log::info;
use uart_interface::{
    args::DecodeCli,
    file_io::{read_file_bytes, write_file_bytes},
    port::DecoderPort,
};

fn main() -> anyhow::Result<()> {
    // Handle commandline arguments.
    let opt = DecodeCli::parse();
    simple_logger::init_with_level(opt.log_opt.log_level).unwrap();

    let frame = read_file_bytes(&opt.file_in.in_file)?;
    let port = DecoderPort::default();
    port.write(&frame)?;

    let payload = port.read();
    info!("recovered {} bytes by majority vote", payload.len());
    write_file_bytes(&opt.file_out.out_file, &payload)?;
    info!(
        "wrote recovered payload to \"{}\"",
        opt.file_out.out_file.display()
    );
    Ok(())
}
