//! Qualitative colormaps (distinct classes).
//!
//! These colormaps suit categorical data, one control point per class index
//! starting at 0. Colors from www.ColorBrewer.org by Cynthia A. Brewer,
//! Geography, Pennsylvania State University.

use once_cell::sync::Lazy;

use super::colormap::Colormap;
use super::from_rgb8;

pub static SET1: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [228, 26, 28]),
        (1.0, [55, 126, 184]),
        (2.0, [77, 175, 74]),
        (3.0, [152, 78, 163]),
        (4.0, [255, 127, 0]),
        (5.0, [255, 255, 51]),
        (6.0, [166, 86, 40]),
        (7.0, [247, 129, 191]),
        (8.0, [153, 153, 153]),
    ])
});

pub static SET2: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [102, 194, 165]),
        (1.0, [252, 141, 98]),
        (2.0, [141, 160, 203]),
        (3.0, [231, 138, 195]),
        (4.0, [166, 216, 84]),
        (5.0, [255, 217, 47]),
        (6.0, [229, 196, 148]),
        (7.0, [179, 179, 179]),
    ])
});

pub static SET3: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [141, 211, 199]),
        (1.0, [255, 255, 179]),
        (2.0, [190, 186, 218]),
        (3.0, [251, 128, 114]),
        (4.0, [128, 177, 211]),
        (5.0, [253, 180, 98]),
        (6.0, [179, 222, 105]),
        (7.0, [252, 205, 229]),
        (8.0, [217, 217, 217]),
        (9.0, [188, 128, 189]),
        (10.0, [204, 235, 197]),
        (11.0, [255, 237, 111]),
    ])
});

pub static PAIRED: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [166, 206, 227]),
        (1.0, [31, 120, 180]),
        (2.0, [178, 223, 138]),
        (3.0, [51, 160, 44]),
        (4.0, [251, 154, 153]),
        (5.0, [227, 26, 28]),
        (6.0, [253, 191, 111]),
        (7.0, [255, 127, 0]),
        (8.0, [202, 178, 214]),
        (9.0, [106, 61, 154]),
        (10.0, [255, 255, 153]),
        (11.0, [177, 89, 40]),
    ])
});

pub static ACCENT: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [127, 201, 127]),
        (1.0, [190, 174, 212]),
        (2.0, [253, 192, 134]),
        (3.0, [255, 255, 153]),
        (4.0, [56, 108, 176]),
        (5.0, [240, 2, 127]),
        (6.0, [191, 91, 23]),
        (7.0, [102, 102, 102]),
    ])
});

pub static DARK2: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [27, 158, 119]),
        (1.0, [217, 95, 2]),
        (2.0, [117, 112, 179]),
        (3.0, [231, 41, 138]),
        (4.0, [102, 166, 30]),
        (5.0, [230, 171, 2]),
        (6.0, [166, 118, 29]),
        (7.0, [102, 102, 102]),
    ])
});

pub static PASTEL1: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [251, 180, 174]),
        (1.0, [179, 205, 227]),
        (2.0, [204, 235, 197]),
        (3.0, [222, 203, 228]),
        (4.0, [254, 217, 166]),
        (5.0, [255, 255, 204]),
        (6.0, [229, 216, 189]),
        (7.0, [253, 218, 236]),
        (8.0, [242, 242, 242]),
    ])
});

pub static PASTEL2: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [179, 226, 205]),
        (1.0, [253, 205, 172]),
        (2.0, [203, 213, 232]),
        (3.0, [244, 202, 228]),
        (4.0, [230, 245, 201]),
        (5.0, [255, 242, 174]),
        (6.0, [241, 226, 204]),
        (7.0, [204, 204, 204]),
    ])
});

/// Named qualitative colormaps
pub(crate) static QUALITATIVE: &[(&str, &Lazy<Colormap>)] = &[
    ("set1", &SET1),
    ("set2", &SET2),
    ("set3", &SET3),
    ("paired", &PAIRED),
    ("accent", &ACCENT),
    ("dark2", &DARK2),
    ("pastel1", &PASTEL1),
    ("pastel2", &PASTEL2),
];
