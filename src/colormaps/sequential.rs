//! Sequential colormaps (light-to-dark progressions).
//!
//! These colormaps suit data that progresses from low to high. Colors from
//! www.ColorBrewer.org by Cynthia A. Brewer, Geography, Pennsylvania State
//! University.

use once_cell::sync::Lazy;

use super::colormap::Colormap;
use super::from_rgb8;

/// Matlab-style jet: dark blue through cyan, yellow and red to dark red
pub static RAINBOW: Lazy<Colormap> = Lazy::new(|| {
    Colormap::from_table(&[
        (0.000, [0.0, 0.0, 0.5]),
        (0.125, [0.0, 0.0, 1.0]),
        (0.250, [0.0, 0.5, 1.0]),
        (0.375, [0.0, 1.0, 1.0]),
        (0.500, [0.5, 1.0, 0.5]),
        (0.625, [1.0, 1.0, 0.0]),
        (0.750, [1.0, 0.5, 0.0]),
        (0.875, [1.0, 0.0, 0.0]),
        (1.000, [0.5, 0.0, 0.0]),
    ])
});

pub static BLUES: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [247, 251, 255]),
        (1.0, [8, 48, 107]),
    ])
});

pub static GREENS: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [247, 252, 245]),
        (1.0, [0, 68, 27]),
    ])
});

pub static GREYS: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 255, 255]),
        (1.0, [0, 0, 0]),
    ])
});

pub static ORANGES: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 245, 235]),
        (1.0, [127, 39, 4]),
    ])
});

pub static PURPLES: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [252, 251, 253]),
        (1.0, [63, 0, 125]),
    ])
});

pub static REDS: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 245, 240]),
        (1.0, [103, 0, 13]),
    ])
});

pub static BUGN: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [247, 252, 253]),
        (1.0, [0, 68, 27]),
    ])
});

pub static BUPU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [247, 252, 253]),
        (1.0, [77, 0, 75]),
    ])
});

pub static GNBU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [247, 252, 240]),
        (1.0, [8, 64, 129]),
    ])
});

pub static ORRD: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 247, 236]),
        (1.0, [127, 0, 0]),
    ])
});

pub static PUBU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 247, 251]),
        (0.5, [116, 169, 207]),
        (1.0, [2, 56, 88]),
    ])
});

pub static PUBUGN: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 247, 251]),
        (0.5, [103, 169, 207]),
        (1.0, [1, 70, 54]),
    ])
});

pub static PURD: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [247, 244, 249]),
        (1.0, [103, 0, 31]),
    ])
});

pub static RDPU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 247, 243]),
        (1.0, [73, 0, 106]),
    ])
});

pub static YLGN: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 255, 229]),
        (1.0, [0, 69, 41]),
    ])
});

pub static YLGNBU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 255, 217]),
        (1.0, [8, 29, 88]),
    ])
});

pub static YLORBR: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 255, 229]),
        (0.5, [254, 153, 41]),
        (1.0, [102, 37, 6]),
    ])
});

pub static YLORRD: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [255, 255, 204]),
        (0.5, [254, 141, 60]),
        (1.0, [128, 0, 38]),
    ])
});

/// Named sequential colormaps
pub(crate) static SEQUENTIAL: &[(&str, &Lazy<Colormap>)] = &[
    ("rainbow", &RAINBOW),
    ("blues", &BLUES),
    ("greens", &GREENS),
    ("greys", &GREYS),
    ("oranges", &ORANGES),
    ("purples", &PURPLES),
    ("reds", &REDS),
    ("bugn", &BUGN),
    ("bupu", &BUPU),
    ("gnbu", &GNBU),
    ("orrd", &ORRD),
    ("pubu", &PUBU),
    ("pubugn", &PUBUGN),
    ("purd", &PURD),
    ("rdpu", &RDPU),
    ("ylgn", &YLGN),
    ("ylgnbu", &YLGNBU),
    ("ylorbr", &YLORBR),
    ("ylorrd", &YLORRD),
];
