//! Read the first bytes of a file and print every format whose signature matches.
//!
//! Run: cargo run --example sniff_file -- path/to/file [label ...]
//!
//! With labels, only those formats are tried (e.g. `elf elf-exe elf-lib`).

use std::fs::File;
use std::io::Read;

use binsig::{Format, PREFIX_LEN};

/// Prefix read from the file; large enough for MARC's field-terminator scan to see past the leader.
const READ_LEN: usize = 4 * PREFIX_LEN;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: sniff_file <path> [label ...]")?;
    let formats = args
        .map(|label| label.parse::<Format>())
        .collect::<Result<Vec<_>, _>>()?;
    let formats = if formats.is_empty() {
        Format::ALL.to_vec()
    } else {
        formats
    };

    let file = File::open(&path).map_err(|e| format!("open {}: {}", path, e))?;
    let size = file.metadata()?.len();
    let mut prefix = Vec::with_capacity(READ_LEN);
    file.take(READ_LEN as u64).read_to_end(&mut prefix)?;
    let size_hint = u32::try_from(size).unwrap_or(u32::MAX);

    let mut found = false;
    for format in formats {
        let parent_ok = format
            .parent()
            .map_or(true, |parent| parent.matches(&prefix, size_hint));
        if parent_ok && format.matches(&prefix, size_hint) {
            println!("{}", format);
            found = true;
        }
    }

    if !found {
        eprintln!("{}: no matching signature ({} bytes inspected)", path, prefix.len());
    }
    Ok(())
}
