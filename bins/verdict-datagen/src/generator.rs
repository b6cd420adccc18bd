// Random dataset generation with injected randomness
use anyhow::{ensure, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Characters allowed in generated filenames: letters, digits and the
/// punctuation that is safe on common filesystems (no separators, no
/// reserved characters).
const FILENAME_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&'()+,-.;=@[]^_`{}~";

pub const DEFAULT_ROWS: usize = 16_000;
pub const COLS: usize = 4;

/// A random filename of `length` characters plus a `.txt` suffix.
pub fn generate_filename(length: usize, rng: &mut impl Rng) -> String {
    let mut name: String = (0..length)
        .map(|_| FILENAME_CHARS[rng.gen_range(0..FILENAME_CHARS.len())] as char)
        .collect();
    name.push_str(".txt");
    name
}

/// A random integer with between `min_digits` and `max_digits` digits.
/// Multi-digit numbers never start with zero, so their printed width is
/// predictable.
pub fn generate_number(min_digits: u32, max_digits: u32, rng: &mut impl Rng) -> Result<i64> {
    ensure!(
        min_digits >= 1 && max_digits >= min_digits,
        "digit range {min_digits}..={max_digits} is invalid"
    );

    let num_digits = rng.gen_range(min_digits..=max_digits);
    if num_digits == 1 {
        return Ok(rng.gen_range(0..=9));
    }

    let low = 10i64.pow(num_digits - 1);
    let high = 10i64.pow(num_digits) - 1;
    Ok(rng.gen_range(low..=high))
}

/// One table row: four integers of mixed widths, at least one of them a
/// single-digit value so every row can satisfy the filter's third rule.
pub fn generate_row(rng: &mut impl Rng) -> Result<Vec<i64>> {
    let mut row = Vec::with_capacity(COLS);
    row.push(generate_number(1, 1, rng)?);
    for _ in 1..COLS {
        row.push(generate_number(1, 6, rng)?);
    }
    row.shuffle(rng);
    Ok(row)
}

/// Write `rows` random rows to `path`, space-separated, one row per line.
pub fn write_dataset(path: &Path, rows: usize, rng: &mut impl Rng) -> Result<()> {
    let mut table = String::new();
    for _ in 0..rows {
        let row = generate_row(rng)?;
        let line: Vec<String> = row.iter().map(i64::to_string).collect();
        table.push_str(&line.join(" "));
        table.push('\n');
    }

    fs::write(path, table)?;
    Ok(())
}
