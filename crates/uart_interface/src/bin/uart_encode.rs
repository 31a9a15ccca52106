//! Encodes a payload file into a triple-repetition frame ready for the wire.

use clap::Parser as _;
use log::info;
use uart_interface::{
    args::EncodeCli,
    file_io::{read_file_bytes, write_file_bytes},
    port::EncoderPort,
};

fn main() -> anyhow::Result<()> {
    // Handle commandline arguments.
    let opt = EncodeCli::parse();
    simple_logger::init_with_level(opt.log_opt.log_level).unwrap();

    let payload = read_file_bytes(&opt.file_in.in_file)?;
    let port = EncoderPort::default();
    let accepted = port.write(&payload)?;
    info!("accepted {accepted} payload bytes");

    let frame = port.read();
    write_file_bytes(&opt.file_out.out_file, &frame)?;
    info!(
        "wrote {} byte frame to \"{}\"",
        frame.len(),
        opt.file_out.out_file.display()
    );
    Ok(())
}
