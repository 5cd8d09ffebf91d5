//! Observation values.
use crate::{error::GymDoomError, DType};
use ndarray::{ArrayD, Axis, Slice};
use num_traits::cast::AsPrimitive;
use std::collections::BTreeMap;

/// A typed n-dimensional array.
///
/// Raw frames emitted by a Doom backend are `u8` pixels in `(height, width, channel)`
/// layout. Wrappers that rescale values produce `f32` arrays.
#[derive(Clone, Debug, PartialEq)]
pub enum Array {
    /// Array of `u8` values.
    U8(ArrayD<u8>),

    /// Array of `f32` values.
    F32(ArrayD<f32>),
}

impl Array {
    /// Returns the shape of the array.
    pub fn shape(&self) -> &[usize] {
        match self {
            Array::U8(a) => a.shape(),
            Array::F32(a) => a.shape(),
        }
    }

    /// Returns the number of axes.
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Returns the dtype of the elements.
    pub fn dtype(&self) -> DType {
        match self {
            Array::U8(_) => DType::U8,
            Array::F32(_) => DType::F32,
        }
    }

    /// Returns the elements in row-major order, cast to `T`.
    pub fn to_flat_vec<T>(&self) -> Vec<T>
    where
        T: 'static + Copy,
        u8: AsPrimitive<T>,
        f32: AsPrimitive<T>,
    {
        match self {
            Array::U8(a) => a.iter().map(|x| x.as_()).collect(),
            Array::F32(a) => a.iter().map(|x| x.as_()).collect(),
        }
    }

    /// Extracts rows `y1..y1 + height` and columns `x1..x1 + width`, keeping all other axes.
    ///
    /// The first axis is the row and the second axis is the column, as in an image of
    /// shape `(height, width, channel)`.
    pub fn crop(
        &self,
        x1: usize,
        y1: usize,
        width: usize,
        height: usize,
    ) -> Result<Array, GymDoomError> {
        let shape = self.shape();
        let fits = |start: usize, len: usize, dim: usize| {
            start.checked_add(len).map_or(false, |end| end <= dim)
        };
        if shape.len() < 2 || !fits(y1, height, shape[0]) || !fits(x1, width, shape[1]) {
            return Err(GymDoomError::CropOutOfBounds {
                x1,
                y1,
                width,
                height,
                shape: shape.to_vec(),
            });
        }

        Ok(match self {
            Array::U8(a) => Array::U8(crop_region(a, x1, y1, width, height)),
            Array::F32(a) => Array::F32(crop_region(a, x1, y1, width, height)),
        })
    }

    /// Moves the last axis to the front, e.g., `(H, W, C)` to `(C, H, W)`.
    ///
    /// The returned array is in standard (row-major) layout.
    pub fn move_last_axis_to_front(self) -> Array {
        match self {
            Array::U8(a) => Array::U8(move_last_axis(a)),
            Array::F32(a) => Array::F32(move_last_axis(a)),
        }
    }
}

fn crop_region<A: Clone>(
    a: &ArrayD<A>,
    x1: usize,
    y1: usize,
    width: usize,
    height: usize,
) -> ArrayD<A> {
    let mut view = a.view();
    view.slice_axis_inplace(Axis(0), Slice::from(y1..y1 + height));
    view.slice_axis_inplace(Axis(1), Slice::from(x1..x1 + width));
    view.to_owned()
}

fn move_last_axis<A: Clone>(a: ArrayD<A>) -> ArrayD<A> {
    let n = a.ndim();
    if n < 2 {
        return a;
    }
    let mut axes = Vec::with_capacity(n);
    axes.push(n - 1);
    axes.extend(0..n - 1);
    a.permuted_axes(axes).as_standard_layout().into_owned()
}

impl From<ArrayD<u8>> for Array {
    fn from(a: ArrayD<u8>) -> Self {
        Array::U8(a)
    }
}

impl From<ArrayD<f32>> for Array {
    fn from(a: ArrayD<f32>) -> Self {
        Array::F32(a)
    }
}

/// An observation emitted by an environment at every step.
#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    /// A single array, e.g., an image frame or a flattened vector.
    Array(Array),

    /// Named arrays. Keys are kept in sorted order.
    Dict(BTreeMap<String, Array>),
}

impl Observation {
    /// Returns the array if this is an array observation.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Observation::Array(a) => Some(a),
            Observation::Dict(_) => None,
        }
    }

    /// Returns the named arrays if this is a dict observation.
    pub fn as_dict(&self) -> Option<&BTreeMap<String, Array>> {
        match self {
            Observation::Array(_) => None,
            Observation::Dict(d) => Some(d),
        }
    }

    /// Takes the array out of an array observation.
    pub fn into_array(self) -> Result<Array, GymDoomError> {
        match self {
            Observation::Array(a) => Ok(a),
            Observation::Dict(d) => Err(GymDoomError::ObservationMismatch(format!(
                "expected an array, got a dict with keys {:?}",
                d.keys().collect::<Vec<_>>()
            ))),
        }
    }
}

impl From<Array> for Observation {
    fn from(a: Array) -> Self {
        Observation::Array(a)
    }
}

impl From<ArrayD<u8>> for Observation {
    fn from(a: ArrayD<u8>) -> Self {
        Observation::Array(a.into())
    }
}

impl From<ArrayD<f32>> for Observation {
    fn from(a: ArrayD<f32>) -> Self {
        Observation::Array(a.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, IxDyn};

    fn frame(h: usize, w: usize) -> Array {
        Array3::from_shape_fn((h, w, 3), |(y, x, c)| (y * 10 + x * 3 + c) as u8)
            .into_dyn()
            .into()
    }

    #[test]
    fn test_crop_takes_sub_region() {
        let a = frame(6, 8);
        let cropped = a.crop(2, 1, 4, 3).unwrap();
        assert_eq!(cropped.shape(), &[3, 4, 3]);

        match (&a, &cropped) {
            (Array::U8(src), Array::U8(dst)) => {
                for y in 0..3 {
                    for x in 0..4 {
                        for c in 0..3 {
                            assert_eq!(dst[[y, x, c]], src[[y + 1, x + 2, c]]);
                        }
                    }
                }
            }
            _ => panic!("dtype changed"),
        }
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let a = frame(6, 8);
        assert!(matches!(
            a.crop(5, 0, 4, 2),
            Err(GymDoomError::CropOutOfBounds { .. })
        ));
        assert!(a.crop(0, 0, 8, 6).is_ok());
        assert!(a.crop(0, 6, 1, 1).is_err());
    }

    #[test]
    fn test_move_last_axis_to_front() {
        let a = frame(2, 3).move_last_axis_to_front();
        assert_eq!(a.shape(), &[3, 2, 3]);

        // Channel-major order: all of channel 0, then channel 1, ...
        let flat = a.to_flat_vec::<f32>();
        let expected = (0..3)
            .flat_map(|c| (0..2).flat_map(move |y| (0..3).map(move |x| (y * 10 + x * 3 + c) as f32)))
            .collect::<Vec<_>>();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_into_array_of_dict_fails() {
        let obs = Observation::Dict(BTreeMap::from([(
            "image".to_string(),
            Array::F32(ArrayD::zeros(IxDyn(&[2]))),
        )]));
        assert!(obs.as_dict().is_some());
        assert!(obs.into_array().is_err());
    }
}
