use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

const GO_MAX_SIZE: u8 = 19;
const GO_MAX_AREA: u16 = GO_MAX_SIZE as u16 * GO_MAX_SIZE as u16;

/// Seed for the zobrist tables, changing it changes every hash.
const HASH_SEED: u64 = 0;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let out_dir = Path::new(&out_dir);

    write_file(&out_dir.join("go_consts.rs"), write_go_consts);
    write_file(&out_dir.join("go_hash_code.rs"), write_go_hash_tables);
}

fn write_file(path: &Path, f: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>) {
    let file = File::create(path).unwrap_or_else(|e| panic!("Failed to create {:?}: {}", path, e));
    let mut writer = BufWriter::new(file);
    f(&mut writer)
        .and_then(|()| writer.flush())
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
}

fn write_go_consts(f: &mut impl Write) -> std::io::Result<()> {
    writeln!(f, "pub const GO_MAX_SIZE: u8 = {};", GO_MAX_SIZE)?;
    writeln!(f, "pub const GO_MAX_AREA: u16 = {};", GO_MAX_AREA)?;
    Ok(())
}

/// Zobrist tables: one value per (color, tile), per side to move and per pass state.
fn write_go_hash_tables(f: &mut impl Write) -> std::io::Result<()> {
    let mut rng = Xoroshiro64StarStar::seed_from_u64(HASH_SEED);

    writeln!(f, "type Inner = u64;")?;
    write_table(f, "HASH_DATA_COLOR_TILE", &[2, GO_MAX_AREA as usize], &mut rng)?;
    write_table(f, "HASH_DATA_TURN", &[2], &mut rng)?;
    write_table(f, "HASH_DATA_PASS", &[3], &mut rng)?;
    Ok(())
}

/// Write a const (nested) array of random values with the given shape, outermost dimension first.
fn write_table(f: &mut impl Write, name: &str, shape: &[usize], rng: &mut impl Rng) -> std::io::Result<()> {
    let ty = shape.iter().rev().fold("Inner".to_owned(), |inner, len| format!("[{}; {}]", inner, len));
    write!(f, "const {}: {} = ", name, ty)?;
    write_values(f, shape, rng)?;
    writeln!(f, ";")
}

fn write_values(f: &mut impl Write, shape: &[usize], rng: &mut impl Rng) -> std::io::Result<()> {
    let (&len, rest) = match shape.split_first() {
        Some(split) => split,
        None => return write!(f, "{:#018x}", rng.gen::<u64>()),
    };

    write!(f, "[")?;
    for i in 0..len {
        if i != 0 {
            write!(f, ", ")?;
        }
        write_values(f, rest, rng)?;
    }
    write!(f, "]")
}
