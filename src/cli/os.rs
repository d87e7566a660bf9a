//! Os command - print the normalized OS identity
//!
//! cabundle os

use crate::platform;
use anyhow::Result;

pub fn run() -> Result<()> {
    println!("{}", platform::identify_os());
    Ok(())
}
