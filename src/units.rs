use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// A measurement in PDF points, where 72 points make up one inch. All page
/// geometry and text measurements in this crate are expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}
