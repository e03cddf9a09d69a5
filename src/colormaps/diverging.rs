//! Diverging colormaps (two hues meeting at a neutral center).
//!
//! These colormaps suit data that diverges from a central value. Colors from
//! www.ColorBrewer.org by Cynthia A. Brewer, Geography, Pennsylvania State
//! University.

use once_cell::sync::Lazy;

use super::colormap::Colormap;
use super::from_rgb8;

pub static BRBG: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [84, 48, 5]),
        (0.1, [140, 81, 10]),
        (0.2, [191, 129, 45]),
        (0.3, [223, 129, 125]),
        (0.4, [246, 232, 195]),
        (0.5, [245, 245, 245]),
        (0.6, [199, 234, 229]),
        (0.7, [128, 205, 193]),
        (0.8, [53, 151, 143]),
        (0.9, [1, 102, 94]),
        (1.0, [0, 60, 48]),
    ])
});

pub static PIYG: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [142, 1, 82]),
        (0.1, [197, 27, 125]),
        (0.2, [222, 119, 174]),
        (0.3, [241, 182, 218]),
        (0.4, [253, 224, 239]),
        (0.5, [247, 247, 247]),
        (0.6, [230, 245, 208]),
        (0.7, [184, 225, 134]),
        (0.8, [127, 188, 65]),
        (0.9, [77, 146, 33]),
        (1.0, [39, 100, 25]),
    ])
});

pub static PRGN: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [64, 0, 75]),
        (0.1, [118, 42, 131]),
        (0.2, [153, 112, 171]),
        (0.3, [194, 165, 207]),
        (0.4, [231, 212, 232]),
        (0.5, [247, 247, 247]),
        (0.6, [217, 240, 211]),
        (0.7, [166, 219, 160]),
        (0.8, [90, 174, 97]),
        (0.9, [27, 120, 55]),
        (1.0, [0, 68, 27]),
    ])
});

pub static PUOR: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [127, 59, 8]),
        (0.1, [179, 88, 6]),
        (0.2, [224, 130, 20]),
        (0.3, [253, 184, 99]),
        (0.4, [254, 224, 182]),
        (0.5, [247, 247, 247]),
        (0.6, [216, 218, 235]),
        (0.7, [178, 171, 210]),
        (0.8, [128, 115, 172]),
        (0.9, [84, 39, 136]),
        (1.0, [45, 0, 75]),
    ])
});

pub static RDBU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [103, 0, 31]),
        (0.1, [178, 24, 43]),
        (0.2, [214, 96, 77]),
        (0.3, [244, 165, 130]),
        (0.4, [253, 219, 199]),
        (0.5, [247, 247, 247]),
        (0.6, [209, 229, 240]),
        (0.7, [146, 197, 222]),
        (0.8, [67, 147, 195]),
        (0.9, [33, 102, 172]),
        (1.0, [5, 48, 97]),
    ])
});

pub static RDGY: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [103, 0, 31]),
        (0.1, [178, 24, 43]),
        (0.2, [214, 96, 77]),
        (0.3, [244, 165, 130]),
        (0.4, [253, 219, 199]),
        (0.5, [255, 255, 255]),
        (0.6, [224, 224, 224]),
        (0.7, [186, 186, 186]),
        (0.8, [135, 135, 135]),
        (0.9, [77, 77, 77]),
        (1.0, [26, 26, 26]),
    ])
});

pub static RDYLBU: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [165, 0, 38]),
        (0.1, [215, 48, 39]),
        (0.2, [244, 109, 67]),
        (0.3, [253, 174, 97]),
        (0.4, [254, 224, 144]),
        (0.5, [255, 255, 191]),
        (0.6, [224, 243, 248]),
        (0.7, [171, 217, 233]),
        (0.8, [116, 173, 209]),
        (0.9, [69, 117, 180]),
        (1.0, [49, 54, 149]),
    ])
});

pub static RDYLGN: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [165, 0, 38]),
        (0.1, [215, 48, 39]),
        (0.2, [244, 109, 67]),
        (0.3, [253, 174, 97]),
        (0.4, [254, 224, 139]),
        (0.5, [255, 255, 191]),
        (0.6, [217, 239, 139]),
        (0.7, [166, 217, 106]),
        (0.8, [102, 189, 99]),
        (0.9, [26, 152, 80]),
        (1.0, [0, 104, 55]),
    ])
});

pub static SPECTRAL: Lazy<Colormap> = Lazy::new(|| {
    from_rgb8(&[
        (0.0, [158, 1, 66]),
        (0.1, [213, 62, 79]),
        (0.2, [244, 109, 67]),
        (0.3, [253, 174, 97]),
        (0.4, [254, 224, 139]),
        (0.5, [255, 255, 191]),
        (0.6, [230, 245, 152]),
        (0.7, [171, 221, 164]),
        (0.8, [102, 194, 165]),
        (0.9, [50, 136, 189]),
        (1.0, [94, 79, 162]),
    ])
});

/// Named diverging colormaps
pub(crate) static DIVERGING: &[(&str, &Lazy<Colormap>)] = &[
    ("brbg", &BRBG),
    ("piyg", &PIYG),
    ("prgn", &PRGN),
    ("puor", &PUOR),
    ("rdbu", &RDBU),
    ("rdgy", &RDGY),
    ("rdylbu", &RDYLBU),
    ("rdylgn", &RDYLGN),
    ("spectral", &SPECTRAL),
];
