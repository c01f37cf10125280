#[cfg(feature = "image")]
use image::{GrayImage, Luma};
use std::ops::Deref;

use crate::common::capacity::total_codewords;
use crate::common::error::{QRError, QRResult};
use crate::common::iter::EncRegionIter;
use crate::common::metadata::{Color, Version};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
}

// Module matrix
//------------------------------------------------------------------------------

impl ModuleMatrix {
    pub fn new(ver: Version) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    pub fn is_dark(&self, r: i16, c: i16) -> bool {
        matches!(*self.get(r, c), Color::Dark)
    }

    // Row major; true is a dark module
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        self.grid.chunks(self.w).map(|row| row.iter().map(|m| **m == Color::Dark).collect()).collect()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl ModuleMatrix {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 pattern centred at (r, c) along with its separator
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use super::ModuleMatrix;
    use crate::common::metadata::Version;

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = ModuleMatrix::new(Version::V1);
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl ModuleMatrix {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (6, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                let m =
                    if j & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(r1, j, m);
            }
        } else {
            for i in r1..=r2 {
                let m =
                    if i & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(i, c1, m);
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl ModuleMatrix {
    fn draw_alignment_patterns(&mut self) -> QRResult<()> {
        let poses = self.ver.alignment_pattern()?;
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
        Ok(())
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl ModuleMatrix {
    pub fn draw_all_function_patterns(&mut self) -> QRResult<()> {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns()
    }
}

// Format area
//------------------------------------------------------------------------------

impl ModuleMatrix {
    // Format bits are not encoded. The area is kept light so data placement
    // sees the same free modules as a complete symbol.
    fn reserve_format_area(&mut self) {
        FORMAT_INFO_COORDS_QR_MAIN
            .iter()
            .chain(FORMAT_INFO_COORDS_QR_SIDE.iter())
            .for_each(|&(r, c)| self.set(r, c, Module::Format(Color::Light)));
        self.set(-8, 8, Module::Format(Color::Dark));
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl ModuleMatrix {
    pub fn draw_encoding_region(&mut self, codewords: &[u8]) {
        self.reserve_format_area();

        let mut coords = EncRegionIter::new(self.ver);
        let bits = codewords.iter().flat_map(|&cw| (0..8).rev().map(move |i| (cw >> i) & 1 == 1));
        for bit in bits {
            let Some((r, c)) = coords.by_ref().find(|&(r, c)| self.get(r, c) == Module::Empty)
            else {
                break;
            };
            self.set(r, c, Module::Data(Color::from(bit)));
        }
        self.fill_remainder_bits(coords);

        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module found in debug");
    }

    fn fill_remainder_bits(&mut self, coords: impl Iterator<Item = (i16, i16)>) {
        for (r, c) in coords {
            if matches!(self.get(r, c), Module::Empty) {
                self.set(r, c, Module::Data(Color::Light));
            }
        }
    }

    pub fn count_data_modules(&self) -> usize {
        self.grid.iter().filter(|m| matches!(m, Module::Data(_))).count()
    }
}

pub fn build_module_matrix(codewords: &[u8], version: Version) -> QRResult<ModuleMatrix> {
    let total = total_codewords(version).map_err(|_| QRError::InvalidVersion)?;
    if codewords.len() > total {
        return Err(QRError::DataTooLong);
    }

    let mut qr = ModuleMatrix::new(version);
    qr.draw_all_function_patterns()?;
    qr.draw_encoding_region(codewords);
    Ok(qr)
}


// Render
//------------------------------------------------------------------------------

impl ModuleMatrix {
    #[cfg(feature = "image")]
    pub fn render(&self, module_sz: u32) -> GrayImage {
        let qz_sz = 4 * module_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::new(total_sz, total_sz);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.put_pixel(j, i, Luma([255]));
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;
                let clr = *self.get(r as i16, c as i16);
                canvas.put_pixel(j, i, clr.select(Luma([0]), Luma([255])));
            }
        }

        canvas
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = 4 * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::new();
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push(self.get(r, c).select(' ', '█'));
            }
            canvas.push('\n');
        }

        canvas
    }
}


// Global constants
//------------------------------------------------------------------------------

static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (8, -1),
    (8, -2),
    (8, -3),
    (8, -4),
    (8, -5),
    (8, -6),
    (8, -7),
    (8, -8),
    (-7, 8),
    (-6, 8),
    (-5, 8),
    (-4, 8),
    (-3, 8),
    (-2, 8),
    (-1, 8),
];
