use glam::Vec3;

/// Ambient light blending a sky color from above with a ground color from below.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereLight {
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub intensity: f32,
}

impl HemisphereLight {
    #[must_use]
    pub fn new(sky_color: Vec3, ground_color: Vec3, intensity: f32) -> Self {
        Self {
            sky_color,
            ground_color,
            intensity,
        }
    }

    /// Builds the light from `0xRRGGBB` colors.
    #[must_use]
    pub fn from_hex(sky: u32, ground: u32, intensity: f32) -> Self {
        Self::new(hex_to_rgb(sky), hex_to_rgb(ground), intensity)
    }
}

/// Converts a `0xRRGGBB` value into normalized RGB.
#[must_use]
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}
