use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// IEC 61966-2-1 decode for a normalized sRGB channel value.
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn write_table(path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "/// sRGB decode table for 8-bit channel values.")?;
    writeln!(file, "/// Index: 8-bit sRGB code, Value: linear light in 0.0..=1.0")?;
    writeln!(file, "pub static SRGB8_TO_LINEAR: [f32; 256] = [")?;
    for i in 0..256 {
        let linear = srgb_to_linear_exact(i as f64 / 255.0);
        if i > 0 && i % 8 == 0 {
            writeln!(file)?;
        }
        write!(file, "    {:.9},", linear as f32)?;
    }
    writeln!(file, "\n];")?;
    Ok(())
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("srgb_lut.rs");
    if let Err(e) = write_table(&dest_path) {
        panic!("failed to write {}: {e}", dest_path.display());
    }

    println!("cargo::rerun-if-changed=build.rs");
}
