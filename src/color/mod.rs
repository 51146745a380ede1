mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use utils::{hue_to_rgb, parse_hex, rgb_clamped, rgb_from_u32, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Reserved "no signal" color
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const CYAN: Rgb = Rgb {
    r: 0,
    g: 255,
    b: 255,
};
