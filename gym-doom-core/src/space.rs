//! Observation spaces.
//!
//! An [`ObservationSpace`] declares what an environment emits: the shape, bounds and
//! dtype of an array observation ([`BoxSpace`]), or a set of named boxes for a dict
//! observation. Wrappers derive their own space from the space of the wrapped
//! environment, e.g., through [`ObservationSpace::flatdim`].
use crate::{error::GymDoomError, Array, Observation};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Element type of an array observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DType {
    /// Unsigned 8-bit integer, used for raw pixels.
    U8,

    /// 32-bit float.
    F32,
}

/// An n-dimensional box with the same bounds `[low, high]` on every element.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: f32,
    high: f32,
    shape: Vec<usize>,
    dtype: DType,
}

impl BoxSpace {
    /// Creates a box space.
    pub fn new(low: f32, high: f32, shape: impl Into<Vec<usize>>, dtype: DType) -> Self {
        Self {
            low,
            high,
            shape: shape.into(),
            dtype,
        }
    }

    /// RGB image of shape `(height, width, 3)` with pixel values in `[0, 255]`.
    pub fn image(height: usize, width: usize) -> Self {
        Self::new(0.0, 255.0, [height, width, 3], DType::U8)
    }

    /// Vector of shape `(dim,)` with values in `[0, 1]`.
    pub fn unit(dim: usize) -> Self {
        Self::new(0.0, 1.0, [dim], DType::F32)
    }

    /// Lower bound.
    pub fn low(&self) -> f32 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f32 {
        self.high
    }

    /// Shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Element type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// The number of elements of an observation in this space.
    pub fn flatdim(&self) -> usize {
        self.shape.iter().product()
    }

    /// Returns `true` if `a` has the shape and dtype of this space and all of its
    /// elements are in the bounds.
    pub fn contains(&self, a: &Array) -> bool {
        a.shape() == &self.shape[..]
            && a.dtype() == self.dtype
            && a
                .to_flat_vec::<f32>()
                .iter()
                .all(|&x| self.low <= x && x <= self.high)
    }
}

/// Declarative descriptor of the observations emitted by an environment.
#[derive(Clone, Debug, PartialEq)]
pub enum ObservationSpace {
    /// Array observations.
    Box(BoxSpace),

    /// Dict observations. Keys are kept in sorted order.
    Dict(BTreeMap<String, BoxSpace>),
}

impl ObservationSpace {
    /// The number of elements of a flattened observation in this space.
    pub fn flatdim(&self) -> usize {
        match self {
            ObservationSpace::Box(b) => b.flatdim(),
            ObservationSpace::Dict(d) => d.values().map(BoxSpace::flatdim).sum(),
        }
    }

    /// Flattens an observation of this space into a vector.
    ///
    /// Elements of an array are taken in row-major order. The shape of the array is not
    /// checked against the space, so that an array with permuted axes can be flattened
    /// with the space of the original array. For a dict, the flattened arrays are
    /// concatenated in the order of the keys.
    pub fn flatten(&self, obs: &Observation) -> Result<Array1<f32>, GymDoomError> {
        match (self, obs) {
            (ObservationSpace::Box(_), Observation::Array(a)) => Ok(a.to_flat_vec::<f32>().into()),
            (ObservationSpace::Dict(spaces), Observation::Dict(arrays)) => {
                let mut v = Vec::with_capacity(self.flatdim());
                for key in spaces.keys() {
                    let a = arrays.get(key).ok_or_else(|| {
                        GymDoomError::ObservationMismatch(format!("missing key {:?}", key))
                    })?;
                    v.extend(a.to_flat_vec::<f32>());
                }
                Ok(v.into())
            }
            (ObservationSpace::Box(_), Observation::Dict(_)) => Err(
                GymDoomError::ObservationMismatch("dict observation in a box space".to_string()),
            ),
            (ObservationSpace::Dict(_), Observation::Array(_)) => Err(
                GymDoomError::ObservationMismatch("array observation in a dict space".to_string()),
            ),
        }
    }

    /// Returns `true` if `obs` is described by this space.
    ///
    /// A dict observation must have exactly the keys of the space.
    pub fn contains(&self, obs: &Observation) -> bool {
        match (self, obs) {
            (ObservationSpace::Box(b), Observation::Array(a)) => b.contains(a),
            (ObservationSpace::Dict(spaces), Observation::Dict(arrays)) => {
                spaces.len() == arrays.len()
                    && spaces
                        .iter()
                        .all(|(k, b)| arrays.get(k).map_or(false, |a| b.contains(a)))
            }
            _ => false,
        }
    }

    /// Returns the box if this is a box space.
    pub fn as_box(&self) -> Option<&BoxSpace> {
        match self {
            ObservationSpace::Box(b) => Some(b),
            ObservationSpace::Dict(_) => None,
        }
    }

    /// Returns the named boxes if this is a dict space.
    pub fn as_dict(&self) -> Option<&BTreeMap<String, BoxSpace>> {
        match self {
            ObservationSpace::Box(_) => None,
            ObservationSpace::Dict(d) => Some(d),
        }
    }
}

impl From<BoxSpace> for ObservationSpace {
    fn from(b: BoxSpace) -> Self {
        ObservationSpace::Box(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn test_flatdim() {
        assert_eq!(BoxSpace::image(480, 640).flatdim(), 480 * 640 * 3);

        let dict = ObservationSpace::Dict(BTreeMap::from([
            ("image".to_string(), BoxSpace::unit(12)),
            ("state".to_string(), BoxSpace::unit(4)),
        ]));
        assert_eq!(dict.flatdim(), 16);
    }

    #[test]
    fn test_image_space_contains_frame() {
        let space = ObservationSpace::from(BoxSpace::image(2, 3));
        let frame: Observation = ArrayD::<u8>::from_elem(IxDyn(&[2, 3, 3]), 255).into();
        assert!(space.contains(&frame));

        let wrong_shape: Observation = ArrayD::<u8>::zeros(IxDyn(&[3, 2, 3])).into();
        assert!(!space.contains(&wrong_shape));

        let wrong_dtype: Observation = ArrayD::<f32>::zeros(IxDyn(&[2, 3, 3])).into();
        assert!(!space.contains(&wrong_dtype));
    }

    #[test]
    fn test_unit_space_bounds() {
        let space = BoxSpace::unit(2);
        let inside = Array::F32(ArrayD::from_shape_vec(IxDyn(&[2]), vec![0.0, 1.0]).unwrap());
        let outside = Array::F32(ArrayD::from_shape_vec(IxDyn(&[2]), vec![0.0, 1.5]).unwrap());
        assert!(space.contains(&inside));
        assert!(!space.contains(&outside));
    }

    #[test]
    fn test_flatten_dict_in_key_order() {
        let space = ObservationSpace::Dict(BTreeMap::from([
            ("b".to_string(), BoxSpace::unit(1)),
            ("a".to_string(), BoxSpace::unit(2)),
        ]));
        let obs = Observation::Dict(BTreeMap::from([
            ("b".to_string(), Array::F32(ArrayD::from_elem(IxDyn(&[1]), 3.0))),
            ("a".to_string(), Array::F32(ArrayD::from_elem(IxDyn(&[2]), 1.0))),
        ]));
        assert_eq!(space.flatten(&obs).unwrap().to_vec(), vec![1.0, 1.0, 3.0]);

        let missing = Observation::Dict(BTreeMap::from([(
            "a".to_string(),
            Array::F32(ArrayD::from_elem(IxDyn(&[2]), 1.0)),
        )]));
        assert!(space.flatten(&missing).is_err());
        assert!(!space.contains(&missing));
    }

    #[test]
    fn test_flatten_ignores_declared_shape() {
        let space = ObservationSpace::from(BoxSpace::image(2, 2));
        let transposed: Observation = ArrayD::<u8>::from_elem(IxDyn(&[3, 2, 2]), 7).into();
        let flat = space.flatten(&transposed).unwrap();
        assert_eq!(flat.len(), space.flatdim());
    }
}
