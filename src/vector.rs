use std::fmt;
use std::slice;

use rand::Rng;

use errors::*;

/// An ordered, fixed-length sequence of `f64` values.
///
/// The length is set at construction and never changes. `set` overwrites an
/// element in place; every other operation (`scale`, `map`, `add`, ...)
/// leaves the receiver untouched and returns a new vector. Equality is
/// exact, with no tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub(crate) elements: Vec<f64>,
}

impl Vector {
    pub fn new(elements: Vec<f64>) -> Vector {
        Vector { elements: elements }
    }
    pub fn zeros(n: usize) -> Vector {
        Vector { elements: vec![0.0; n] }
    }
    pub fn ones(n: usize) -> Vector {
        Vector { elements: vec![1.0; n] }
    }
    /// Vector of `n` values drawn uniformly from `[0, 1)`.
    pub fn rand(n: usize) -> Vector {
        let mut rng = rand::thread_rng();
        Vector { elements: (0..n).map(|_| rng.gen()).collect() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, i: usize) -> Result<f64> {
        self.elements.get(i).map(|&e| e)
            .ok_or_else(|| Error::from_kind(
                ErrorKind::IndexOutOfRange("vector index out of bounds")))
    }
    pub fn set(&mut self, i: usize, value: f64) -> Result<&mut Vector> {
        if i >= self.elements.len() {
            return Err(Error::from_kind(
                ErrorKind::IndexOutOfRange("vector index out of bounds")));
        }
        self.elements[i] = value;
        Ok(self)
    }

    pub fn scale(&self, k: f64) -> Vector {
        Vector { elements: self.elements.iter().map(|e| e * k).collect() }
    }

    /// Calls `f(value, index)` for every element in ascending index order.
    pub fn each<F>(&self, mut f: F) where F: FnMut(f64, usize) {
        for (i, &e) in self.elements.iter().enumerate() {
            f(e, i);
        }
    }
    /// New vector where element `i` is `f(self[i], i)`.
    pub fn map<F>(&self, mut f: F) -> Vector where F: FnMut(f64, usize) -> f64 {
        Vector {
            elements: self.elements.iter().enumerate().map(|(i, &e)| f(e, i)).collect(),
        }
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "vector add requires equal lengths ({} vs {})",
                self.len(), other.len()))));
        }
        Ok(Vector {
            elements: self.elements.iter().zip(&other.elements)
                .map(|(l, r)| l + r).collect(),
        })
    }
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "vector subtract requires equal lengths ({} vs {})",
                self.len(), other.len()))));
        }
        Ok(Vector {
            elements: self.elements.iter().zip(&other.elements)
                .map(|(l, r)| l - r).collect(),
        })
    }
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "dot product requires equal lengths ({} vs {})",
                self.len(), other.len()))));
        }
        Ok(self.elements.iter().zip(&other.elements)
            .map(|(l, r)| l * r).fold(0.0, |acc, e| acc + e))
    }

    pub fn iter(&self) -> slice::Iter<f64> {
        self.elements.iter()
    }
    pub fn to_vec(&self) -> Vec<f64> {
        self.elements.clone()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(elements: Vec<f64>) -> Vector {
        Vector::new(elements)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}
