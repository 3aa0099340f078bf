/// Structured color values
///
/// Entities carry colors as data from creation on; fades mutate the alpha
/// channel directly instead of rewriting color strings.

/// RGBA color, 8-bit channels with a float alpha for smooth fades
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Copy with alpha scaled by `factor`, clamped to [0, 1]
    pub fn faded(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_alpha_only() {
        let c = Rgba::new(200, 100, 50).faded(0.5);
        assert_eq!((c.r, c.g, c.b), (200, 100, 50));
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_faded_clamps() {
        assert_eq!(Rgba::WHITE.faded(2.0).a, 1.0);
        assert_eq!(Rgba::WHITE.faded(-1.0).a, 0.0);
    }
}
