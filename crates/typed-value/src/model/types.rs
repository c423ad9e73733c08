//! Fixed-length composite types: colors, vectors and matrices.
//!
//! Each type is a newtype over `[f32; N]`. Matrices are stored row-major and
//! are treated as a flat list of components for text conversion.

use std::ops::{Index, IndexMut};

/// A composite with a compile-time component count.
pub trait FixedVector: Copy + Default {
    /// Number of components.
    const LENGTH: usize;

    /// Returns the components as a slice of length [`Self::LENGTH`].
    fn components(&self) -> &[f32];

    /// Returns the components as a mutable slice of length [`Self::LENGTH`].
    fn components_mut(&mut self) -> &mut [f32];

    /// Returns the number of components.
    fn length(&self) -> usize {
        Self::LENGTH
    }
}

macro_rules! fixed_vector {
    ($(#[$meta:meta])* $name:ident, $len:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name(pub [f32; $len]);

        impl $name {
            /// Creates a value from its components.
            pub const fn new(components: [f32; $len]) -> Self {
                Self(components)
            }
        }

        impl FixedVector for $name {
            const LENGTH: usize = $len;

            fn components(&self) -> &[f32] {
                &self.0
            }

            fn components_mut(&mut self) -> &mut [f32] {
                &mut self.0
            }
        }

        impl From<[f32; $len]> for $name {
            fn from(components: [f32; $len]) -> Self {
                Self(components)
            }
        }

        impl From<$name> for [f32; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Index<usize> for $name {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                &self.0[index]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.0[index]
            }
        }
    };
}

fixed_vector!(
    /// Two-channel color.
    Color2, 2
);
fixed_vector!(
    /// RGB color.
    Color3, 3
);
fixed_vector!(
    /// RGBA color.
    Color4, 4
);
fixed_vector!(
    /// Two-component vector.
    Vector2, 2
);
fixed_vector!(
    /// Three-component vector.
    Vector3, 3
);
fixed_vector!(
    /// Four-component vector.
    Vector4, 4
);
fixed_vector!(
    /// 3x3 matrix, row-major.
    Matrix33, 9
);
fixed_vector!(
    /// 4x4 matrix, row-major.
    Matrix44, 16
);

impl Matrix33 {
    pub const IDENTITY: Matrix33 = Matrix33([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    /// Returns the element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 3 + col]
    }
}

impl Matrix44 {
    pub const IDENTITY: Matrix44 = Matrix44([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Returns the element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 4 + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(Color2::LENGTH, 2);
        assert_eq!(Color3::LENGTH, 3);
        assert_eq!(Color4::LENGTH, 4);
        assert_eq!(Vector4::default().length(), 4);
        assert_eq!(Matrix33::LENGTH, 9);
        assert_eq!(Matrix44::LENGTH, 16);
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector3::new([1.0, 2.0, 3.0]);
        assert_eq!(v[1], 2.0);
        v[1] = 5.0;
        assert_eq!(v.components(), &[1.0, 5.0, 3.0]);
    }

    #[test]
    fn test_matrix_identity() {
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(Matrix44::IDENTITY.get(i, j), expected);
            }
        }
        assert_eq!(Matrix33::IDENTITY.get(2, 2), 1.0);
        assert_eq!(Matrix33::IDENTITY.get(0, 2), 0.0);
    }
}
