/// Tank state variables.
///
/// State that evolves during simulation:
/// - `storage`: water held at the end of the day [L]
/// - `capacity`: largest end-of-day storage seen so far [L]
/// - `overflow`: cumulative volume spilled above capacity [L]
use serde::{Deserialize, Serialize};

/// Number of elements in the flat state representation.
pub const STATE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TankState {
    pub storage: f64,
    pub capacity: f64,
    pub overflow: f64,
}

impl TankState {
    /// An empty tank with no capacity sized yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flat `[storage, capacity, overflow]` representation.
    pub fn to_array(&self) -> [f64; STATE_SIZE] {
        [self.storage, self.capacity, self.overflow]
    }

    /// Rebuild from a flat slice, failing on the wrong length.
    pub fn from_slice(arr: &[f64]) -> Result<Self, String> {
        match *arr {
            [storage, capacity, overflow] => Ok(Self {
                storage,
                capacity,
                overflow,
            }),
            _ => Err(format!(
                "expected {} state elements, got {}",
                STATE_SIZE,
                arr.len()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tank_is_zeroed() {
        let s = TankState::empty();
        assert_eq!(s.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn from_slice_wrong_length() {
        assert!(TankState::from_slice(&[1.0]).is_err());
        assert!(TankState::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn from_slice_reads_in_order() {
        let s = TankState::from_slice(&[4.0, 9.0, 0.5]).unwrap();
        assert_eq!(s.storage, 4.0);
        assert_eq!(s.capacity, 9.0);
        assert_eq!(s.overflow, 0.5);
    }
}
