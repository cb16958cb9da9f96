use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SceneError};
use crate::math::{hsv_to_rgb, Bounds, Color};
use crate::traits::{DrawContext, SceneNode};

use super::snapshot::NodeSnapshot;
use super::vertex::MovingVertex;

/// Fewest vertices that still enclose an area
pub const MIN_EDGES: usize = 3;

/// Outline color every generated polygon shares
pub const DEFAULT_STROKE_COLOR: Color = Color::rgb(0xee, 0xee, 0xee);

/// Outline width every generated polygon shares
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Alpha applied to randomized fills
pub const FILL_ALPHA: u8 = 0x99;

/// Paint attributes of a polygon
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f32,
}

impl PolygonStyle {
    /// Fixed outline with a semi-transparent fill of random hue
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let rgb = hsv_to_rgb(rng.random::<f32>(), 0.65, 0.95);
        Self {
            stroke_color: DEFAULT_STROKE_COLOR,
            fill_color: Color::from_rgb_f32(rgb, FILL_ALPHA),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR,
            fill_color: Color::rgba(0x4a, 0x9e, 0xff, FILL_ALPHA),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Wire form of a [`Polygon`], validated on the way back in
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolygonData {
    pub vertices: Vec<MovingVertex>,
    pub style: PolygonStyle,
}

/// Closed shape whose vertices bounce independently inside the scene bounds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonData", into = "PolygonData")]
pub struct Polygon {
    vertices: Vec<MovingVertex>,
    style: PolygonStyle,
}

impl Polygon {
    /// Build from explicit vertices; fails with fewer than [`MIN_EDGES`]
    pub fn new(vertices: Vec<MovingVertex>, style: PolygonStyle) -> Result<Self> {
        if vertices.len() < MIN_EDGES {
            return Err(SceneError::InvalidEdgeCount(vertices.len()));
        }
        Ok(Self { vertices, style })
    }

    /// Static polygon through `points` (all velocities zero)
    pub fn from_points<I>(points: I, style: PolygonStyle) -> Result<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let vertices = points
            .into_iter()
            .map(|p| MovingVertex::new(p, Vec2::ZERO))
            .collect();
        Self::new(vertices, style)
    }

    /// `edges` vertices placed uniformly inside `region`, each moving with a
    /// per-axis speed drawn from `[-2, 3)`
    pub fn random<R: Rng>(region: &Bounds, edges: usize, rng: &mut R) -> Result<Self> {
        if edges < MIN_EDGES {
            return Err(SceneError::InvalidEdgeCount(edges));
        }
        if !region.is_valid() {
            return Err(SceneError::InvalidConfig(format!(
                "region min {:?} exceeds max {:?}",
                region.min, region.max
            )));
        }

        let size = region.size();
        let vertices = (0..edges)
            .map(|_| {
                let pos = region.min
                    + Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y);
                let vel = Vec2::new(
                    rng.random::<f32>() * 5.0 - 2.0,
                    rng.random::<f32>() * 5.0 - 2.0,
                );
                MovingVertex::new(pos, vel)
            })
            .collect();

        Ok(Self {
            vertices,
            style: PolygonStyle::random(rng),
        })
    }

    pub fn vertices(&self) -> &[MovingVertex] {
        &self.vertices
    }

    pub fn edges(&self) -> usize {
        self.vertices.len()
    }

    pub fn style(&self) -> &PolygonStyle {
        &self.style
    }

    /// Move every vertex one step against the same bounds
    pub fn advance(&mut self, bounds: &Bounds) {
        for vertex in &mut self.vertices {
            vertex.advance(bounds);
        }
    }
}

impl TryFrom<PolygonData> for Polygon {
    type Error = SceneError;

    fn try_from(data: PolygonData) -> Result<Self> {
        Polygon::new(data.vertices, data.style)
    }
}

impl From<Polygon> for PolygonData {
    fn from(polygon: Polygon) -> Self {
        PolygonData {
            vertices: polygon.vertices,
            style: polygon.style,
        }
    }
}

impl SceneNode for Polygon {
    fn paint(&self, ctx: &mut dyn DrawContext) {
        // Construction guarantees at least MIN_EDGES vertices
        let Some((first, rest)) = self.vertices.split_first() else {
            return;
        };

        ctx.set_fill_color(self.style.fill_color);
        ctx.set_stroke_color(self.style.stroke_color);
        ctx.set_stroke_width(self.style.line_width);

        ctx.move_to(first.pos);
        for vertex in rest {
            ctx.line_to(vertex.pos);
        }
        ctx.close_path();
        ctx.fill_and_stroke();
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| v.pos))
    }

    fn advance(&mut self, bounds: &Bounds) {
        Polygon::advance(self, bounds);
    }

    fn snapshot(&self) -> Option<NodeSnapshot> {
        Some(NodeSnapshot::Polygon(self.clone()))
    }

    fn name(&self) -> &str {
        "Polygon"
    }
}
