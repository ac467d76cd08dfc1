/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// An RGB color with components conventionally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Creates a color from its components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Bit pattern of an `f64` with `-0.0` folded onto `0.0`.
#[must_use]
pub(crate) fn f64_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Bit pattern of an `f32` with `-0.0` folded onto `0.0`.
#[must_use]
pub(crate) fn f32_key(value: f32) -> u32 {
    if value == 0.0 {
        0.0_f32.to_bits()
    } else {
        value.to_bits()
    }
}
