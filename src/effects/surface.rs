/// Render-surface seam
///
/// The engine never owns a renderer; the host passes something implementing
/// `DrawSurface` into `EffectEngine::draw` each frame. The primitive set is
/// deliberately small: filled and stroked circles, lines, rotated ellipses,
/// polygons, a two-stop radial gradient, and outlined text.
use super::color::Rgba;

pub trait DrawSurface {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, width: f32, color: Rgba);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Rgba);

    /// Filled ellipse rotated by `rotation` radians around its center
    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, rotation: f32, color: Rgba);

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba);

    /// Radial gradient disc from `inner` at the center to `outer` at the rim
    fn radial_glow(&mut self, x: f32, y: f32, radius: f32, inner: Rgba, outer: Rgba);

    fn text(&mut self, x: f32, y: f32, text: &str, size: f32, color: Rgba, outline: Option<Rgba>);
}
