use std::io::{self, Write};

use anyhow::Result;

use regex_stress::oracle;

fn main() -> Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    oracle::run(&mut out)?;
    out.flush()?;
    Ok(())
}
