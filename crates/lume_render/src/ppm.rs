//! Plain-text PPM (P3) serialization.

use crate::{encode, Encoding, Film};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the film as a P3 PPM file, top scanline first.
pub fn write_ppm(film: &Film, path: impl AsRef<Path>, encoding: Encoding) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P3")?;
    writeln!(out, "{} {}", film.width, film.height)?;
    writeln!(out, "255")?;

    let mut out_of_gamut = 0;
    for &pixel in film.pixels() {
        let (rgb, in_gamut) = encode(pixel, encoding);
        if !in_gamut {
            out_of_gamut += 1;
        }
        writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }
    if out_of_gamut > 0 {
        log::warn!(
            "{} of {} pixels were out of gamut and clamped",
            out_of_gamut,
            film.pixels().len()
        );
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_math::Color;

    #[test]
    fn test_ppm_header_and_rows() {
        let mut film = Film::new(2, 2);
        film.set(0, 0, Color::new(1.0, 0.0, 0.0));
        film.set(1, 1, Color::splat(0.5));

        let dir = std::env::temp_dir();
        let path = dir.join("lume_ppm_test.ppm");
        write_ppm(&film, &path, Encoding::Direct).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "2 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3], "255 0 0");
        assert_eq!(lines[6], "127 127 127");
        assert_eq!(lines.len(), 7);

        std::fs::remove_file(&path).ok();
    }
}
