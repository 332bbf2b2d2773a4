use crate::core::types::{Number, Point3, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 4x4 affine transform matrix, stored as four columns: the `x`, `y` and `z` axes, and the translation.
///
/// The upper-left 3x3 block holds the rotation and scale, and is stored in the first three columns (with `w = 0`).
/// The translation is stored in the last column (with `w = 1`).
///
/// # Invariants
/// Every constructor (apart from [Matrix::from_cols]) keeps the `w` component of the axis columns at `0`, and of the
/// translation column at `1`. Writing through [IndexMut] can break this, after which [Matrix::transform_point] and
/// [Matrix::transform_vector] are no longer meaningful
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix {
    data: [Vector4; 4],
}

// region Constructors

impl Matrix {
    pub const IDENTITY: Self = Self {
        data: [Vector4::X, Vector4::Y, Vector4::Z, Vector4::W],
    };

    /// Creates a matrix from the three axes and a translation, extending them to homogeneous coordinates
    pub fn new(
        x_axis: impl Into<Vector3>,
        y_axis: impl Into<Vector3>,
        z_axis: impl Into<Vector3>,
        translation: impl Into<Point3>,
    ) -> Self {
        Self::from_cols(
            x_axis.into().extend(0.),
            y_axis.into().extend(0.),
            z_axis.into().extend(0.),
            translation.into().extend(1.),
        )
    }

    /// Creates a matrix from four columns that are already in homogeneous form. No checks are done on the `w` components
    pub const fn from_cols(x_axis: Vector4, y_axis: Vector4, z_axis: Vector4, translation: Vector4) -> Self {
        Self {
            data: [x_axis, y_axis, z_axis, translation],
        }
    }

    pub fn from_translation(translation: impl Into<Vector3>) -> Self {
        Self::new(Vector3::X, Vector3::Y, Vector3::Z, translation.into())
    }

    /// Rotation around the `X` axis (pitch), in radians
    pub fn from_rotation_x(pitch: Number) -> Self {
        let (sin, cos) = pitch.sin_cos();
        Self::new(Vector3::X, (0., cos, sin), (0., -sin, cos), Point3::ZERO)
    }

    /// Rotation around the `Y` axis (yaw), in radians
    pub fn from_rotation_y(yaw: Number) -> Self {
        let (sin, cos) = yaw.sin_cos();
        Self::new((cos, 0., -sin), Vector3::Y, (sin, 0., cos), Point3::ZERO)
    }

    /// Rotation around the `Z` axis (roll), in radians
    pub fn from_rotation_z(roll: Number) -> Self {
        let (sin, cos) = roll.sin_cos();
        Self::new((cos, sin, 0.), (-sin, cos, 0.), Vector3::Z, Point3::ZERO)
    }

    /// Creates a rotation from euler angles `(pitch, yaw, roll)`, in radians.
    ///
    /// The result is `Rz * Ry * Rx`, so when transforming, the `X` rotation is applied first, then `Y`, then `Z`
    pub fn from_euler(angles: impl Into<Vector3>) -> Self {
        let angles = angles.into();
        Self::from_rotation_z(angles.z) * Self::from_rotation_y(angles.y) * Self::from_rotation_x(angles.x)
    }

    /// See [Self::from_euler]
    pub fn from_rotation_xyz(pitch: Number, yaw: Number, roll: Number) -> Self {
        Self::from_euler((pitch, yaw, roll))
    }

    /// Creates a rotation of `angle` radians around an arbitrary axis, using Rodrigues' rotation formula
    ///
    /// # Requirements
    /// `axis` must be normalised
    pub fn from_axis_angle(angle: Number, axis: impl Into<Vector3>) -> Self {
        let Vector3 { x, y, z } = axis.into();
        let (sin, cos) = angle.sin_cos();
        let k = 1. - cos;

        Self::new(
            (x * x * k + cos, x * y * k + z * sin, x * z * k - y * sin),
            (x * y * k - z * sin, y * y * k + cos, y * z * k + x * sin),
            (x * z * k + y * sin, y * z * k - x * sin, z * z * k + cos),
            Point3::ZERO,
        )
    }

    pub fn from_scale(scale: impl Into<Vector3>) -> Self {
        let Vector3 { x, y, z } = scale.into();
        Self::new((x, 0., 0.), (0., y, 0.), (0., 0., z), Point3::ZERO)
    }
}

impl Default for Matrix {
    fn default() -> Self { Self::IDENTITY }
}

// endregion Constructors

// region Accessors

impl Matrix {
    pub fn axis_x(&self) -> Vector3 { self.data[0].truncate() }
    pub fn axis_y(&self) -> Vector3 { self.data[1].truncate() }
    pub fn axis_z(&self) -> Vector3 { self.data[2].truncate() }
    pub fn translation(&self) -> Vector3 { self.data[3].truncate() }

    /// Non-panicking version of indexing, returns [None] if `index` is not a valid column
    pub fn get(&self, index: usize) -> Option<&Vector4> { self.data.get(index) }

    /// The four columns of the matrix, in order `[x_axis, y_axis, z_axis, translation]`
    pub fn cols(&self) -> &[Vector4; 4] { &self.data }
}

impl Index<usize> for Matrix {
    type Output = Vector4;

    /// # Panics
    /// If `index` is not in the range `0..=3`
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index <= 3, "matrix column index out of range: {index} (must be 0..=3)");
        &self.data[index]
    }
}

impl IndexMut<usize> for Matrix {
    /// # Panics
    /// If `index` is not in the range `0..=3`
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index <= 3, "matrix column index out of range: {index} (must be 0..=3)");
        &mut self.data[index]
    }
}

// endregion Accessors

// region Transformations

impl Matrix {
    /// Transforms a direction-like vector, applying the rotation and scale but ignoring the translation.
    ///
    /// # Note
    /// Normals are transformed with the same matrix, which is only correct for orthogonal transforms
    /// (rotations, uniform scales). There is no inverse-transpose variant
    pub fn transform_vector(&self, v: impl Into<Vector3>) -> Vector3 {
        let Vector3 { x, y, z } = v.into();
        let [cx, cy, cz, _] = &self.data;
        Vector3::new(
            cx.x * x + cy.x * y + cz.x * z,
            cx.y * x + cy.y * y + cz.y * z,
            cx.z * x + cy.z * y + cz.z * z,
        )
    }

    /// Transforms a position-like vector, applying the rotation, scale and translation
    pub fn transform_point(&self, p: impl Into<Point3>) -> Point3 {
        self.transform_vector(p) + self.translation()
    }

    /// Transposes the matrix in-place
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Returns the transpose of the matrix, leaving `self` untouched
    pub fn transposed(&self) -> Self {
        let mut output = Self::from_cols(Vector4::ZERO, Vector4::ZERO, Vector4::ZERO, Vector4::ZERO);
        for row in 0..4 {
            for col in 0..4 {
                output.data[row][col] = self.data[col][row];
            }
        }
        output
    }
}

// endregion Transformations

// region Operators

impl Mul for Matrix {
    type Output = Matrix;

    /// Composes two transforms; the result applies `rhs` first, then `self`.
    ///
    /// Element `(row, col)` of the product is the dot product of row `row` of `self` with column `col` of `rhs`.
    /// Since we store columns, transposing `self` turns its rows into columns we can dot directly
    fn mul(self, rhs: Matrix) -> Matrix {
        let rows = self.transposed();
        let mut output = rows;
        for col in 0..4 {
            for row in 0..4 {
                output.data[col][row] = Vector4::dot(rows.data[row], rhs.data[col]);
            }
        }
        output
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) { *self = *self * rhs; }
}

// endregion Operators

// region Approx

impl AbsDiffEq for Matrix {
    type Epsilon = Number;

    fn default_epsilon() -> Self::Epsilon { Number::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon { Number::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

// endregion Approx

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, col) in self.data.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {}, {}, {})", col.x, col.y, col.z, col.w)?;
        }
        write!(f, ")")
    }
}
