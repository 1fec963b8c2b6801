//! Dimension descriptors for array-like arguments.
//!
//! Rust slices are always flat and zero-based; `ArrayShape` describes arrays
//! coming from elsewhere (foreign buffers, n-dimensional grids) so the same
//! flat-sequence check applies to both.

use smallvec::SmallVec;

use crate::error::CollectionResult;
use crate::errors;

pub trait Shaped {
    fn rank(&self) -> usize;

    /// Lower bound of dimension `dim`; 0 for dimensions past the rank.
    fn lower_bound(&self, dim: usize) -> isize;

    /// Length of dimension `dim`; 0 for dimensions past the rank.
    fn dim_len(&self, dim: usize) -> usize;
}

impl<T> Shaped for [T] {
    fn rank(&self) -> usize {
        1
    }

    fn lower_bound(&self, _dim: usize) -> isize {
        0
    }

    fn dim_len(&self, dim: usize) -> usize {
        if dim == 0 { self.len() } else { 0 }
    }
}

impl<T> Shaped for Vec<T> {
    fn rank(&self) -> usize {
        1
    }

    fn lower_bound(&self, _dim: usize) -> isize {
        0
    }

    fn dim_len(&self, dim: usize) -> usize {
        self.as_slice().dim_len(dim)
    }
}

impl<T, const N: usize> Shaped for [T; N] {
    fn rank(&self) -> usize {
        1
    }

    fn lower_bound(&self, _dim: usize) -> isize {
        0
    }

    fn dim_len(&self, dim: usize) -> usize {
        if dim == 0 { N } else { 0 }
    }
}

/// Explicit shape of an n-dimensional array with arbitrary lower bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayShape {
    lengths: SmallVec<[usize; 4]>,
    lower_bounds: SmallVec<[isize; 4]>,
}

impl ArrayShape {
    /// Zero-based shape with the given dimension lengths.
    pub fn new(lengths: &[usize]) -> Self {
        Self {
            lengths: SmallVec::from_slice(lengths),
            lower_bounds: SmallVec::from_elem(0, lengths.len()),
        }
    }

    pub fn with_lower_bounds(lengths: &[usize], lower_bounds: &[isize]) -> CollectionResult<Self> {
        if lengths.len() != lower_bounds.len() {
            return Err(errors::argument_out_of_range("lower_bounds"));
        }
        Ok(Self {
            lengths: SmallVec::from_slice(lengths),
            lower_bounds: SmallVec::from_slice(lower_bounds),
        })
    }

    /// Number of elements across all dimensions.
    pub fn total_len(&self) -> usize {
        if self.lengths.is_empty() {
            return 0;
        }
        self.lengths.iter().product()
    }
}

impl Shaped for ArrayShape {
    fn rank(&self) -> usize {
        self.lengths.len()
    }

    fn lower_bound(&self, dim: usize) -> isize {
        self.lower_bounds.get(dim).copied().unwrap_or(0)
    }

    fn dim_len(&self, dim: usize) -> usize {
        self.lengths.get(dim).copied().unwrap_or(0)
    }
}
