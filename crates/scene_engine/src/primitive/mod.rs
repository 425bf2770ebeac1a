//! Renderable primitives and the factory binding placements to behaviors
//!
//! Every primitive owns exactly one [`Behavior`]. The shared contract:
//!
//! - `update(delta_time)` advances the behavior and copies its position into
//!   the transform
//! - `transform()` returns the current position/orientation for the renderer
//! - `set_behavior(behavior)` swaps the behavior immediately, without
//!   interpolation

mod appearance;
mod line;
mod point;

pub use appearance::{Color, Size, SizeSpec};
pub use line::Line;
pub use point::Point;

use std::fmt;

use crate::behavior::Behavior;
use crate::foundation::math::{Transform, Vec3};
use crate::pattern::Placement;

/// Object type as named in scene documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `"point"`
    Point,
    /// `"line"`
    Line,
}

impl ObjectType {
    /// Parse a document type string
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "point" => Some(Self::Point),
            "line" => Some(Self::Line),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => f.write_str("point"),
            Self::Line => f.write_str("line"),
        }
    }
}

/// A point or a line
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Point marker
    Point(Point),
    /// Line segment
    Line(Line),
}

impl Primitive {
    /// Which kind of primitive this is
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Point(_) => ObjectType::Point,
            Self::Line(_) => ObjectType::Line,
        }
    }

    /// Advance the behavior by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        match self {
            Self::Point(point) => point.update(delta_time),
            Self::Line(line) => line.update(delta_time),
        }
    }

    /// Current transform
    pub fn transform(&self) -> &Transform {
        match self {
            Self::Point(point) => point.transform(),
            Self::Line(line) => line.transform(),
        }
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.transform().position
    }

    /// Swap the behavior; takes effect on the next update
    pub fn set_behavior(&mut self, behavior: Behavior) {
        match self {
            Self::Point(point) => point.set_behavior(behavior),
            Self::Line(line) => line.set_behavior(behavior),
        }
    }

    /// Active behavior
    pub fn behavior(&self) -> &Behavior {
        match self {
            Self::Point(point) => point.behavior(),
            Self::Line(line) => line.behavior(),
        }
    }

    /// Color string
    pub fn color(&self) -> &Color {
        match self {
            Self::Point(point) => point.color(),
            Self::Line(line) => line.color(),
        }
    }
}

/// Factory binding one placement to one primitive
pub struct ObjectFactory;

impl ObjectFactory {
    /// Build a primitive of `object_type` at `placement`
    ///
    /// Points take `size.width` as their size. Lines take `size.width` as
    /// their width and the placement's orientation and length. Without a
    /// behavior the primitive is static at the placement position.
    pub fn create(
        object_type: ObjectType,
        placement: &Placement,
        size: Size,
        color: Color,
        behavior: Option<Behavior>,
    ) -> Primitive {
        match object_type {
            ObjectType::Point => {
                let mut point = Point::new(placement.position, size.width, color, behavior);
                point.transform_mut().rotation = placement.orientation;
                Primitive::Point(point)
            }
            ObjectType::Line => Primitive::Line(Line::new(
                placement.position,
                placement.orientation,
                size.width,
                placement.length,
                color,
                behavior,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Motion;
    use crate::foundation::math::quat_from_z_to;
    use approx::assert_relative_eq;

    fn unit_size() -> Size {
        Size { width: 0.1, length: 0.1 }
    }

    #[test]
    fn test_default_behavior_is_static_at_placement() {
        let placement = Placement::point(Vec3::new(1.0, 2.0, 3.0));
        let mut primitive =
            ObjectFactory::create(ObjectType::Point, &placement, unit_size(), Color::default(), None);

        primitive.update(0.016);
        assert_eq!(primitive.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(primitive.behavior().motion, Motion::Static);
        assert_eq!(primitive.object_type(), ObjectType::Point);
    }

    #[test]
    fn test_update_copies_behavior_position() {
        let placement = Placement::point(Vec3::zeros());
        let behavior = Behavior::new(
            Vec3::zeros(),
            Motion::Translation { direction: Vec3::x(), distance: 1.0, speed: 1.0 },
        );
        let mut primitive = ObjectFactory::create(
            ObjectType::Point,
            &placement,
            unit_size(),
            Color::default(),
            Some(behavior),
        );

        primitive.update(0.5);
        assert_relative_eq!(primitive.position(), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_set_behavior_jumps_on_next_update() {
        let placement = Placement::point(Vec3::zeros());
        let mut primitive =
            ObjectFactory::create(ObjectType::Point, &placement, unit_size(), Color::default(), None);

        let far = Vec3::new(10.0, 0.0, 0.0);
        primitive.set_behavior(Behavior::stationary(far));
        assert_eq!(primitive.position(), Vec3::zeros());

        primitive.update(0.016);
        assert_eq!(primitive.position(), far);
    }

    #[test]
    fn test_line_keeps_orientation_and_reports_endpoints() {
        let placement = Placement::segment(Vec3::new(1.0, 0.0, 0.0), quat_from_z_to(&Vec3::y()), 2.0);
        let size = Size { width: 0.02, length: 99.0 };
        let mut primitive =
            ObjectFactory::create(ObjectType::Line, &placement, size, Color::default(), None);
        primitive.update(0.016);

        let Primitive::Line(line) = &primitive else {
            panic!("expected a line");
        };
        assert_eq!(line.length(), 2.0);
        assert_eq!(line.width(), 0.02);
        assert_eq!(line.transform().scale, Vec3::new(0.02, 1.0, 1.0));
        let (start, end) = line.endpoints();
        assert_relative_eq!(start, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(end, Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_object_type_names() {
        assert_eq!(ObjectType::parse("point"), Some(ObjectType::Point));
        assert_eq!(ObjectType::parse("line"), Some(ObjectType::Line));
        assert_eq!(ObjectType::parse("mesh"), None);
        assert_eq!(ObjectType::Line.to_string(), "line");
    }
}
