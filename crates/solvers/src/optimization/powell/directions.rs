use std::{array, slice};

/// The working set of `N` search directions.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSet<const N: usize> {
    directions: [[f64; N]; N],
}

impl<const N: usize> DirectionSet<N> {
    /// Creates the set of coordinate axes.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            directions: array::from_fn(|i| array::from_fn(|j| if i == j { 1.0 } else { 0.0 })),
        }
    }

    /// Restores the coordinate axes.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Drops the oldest direction and appends `direction` as the newest.
    pub fn rotate(&mut self, direction: [f64; N]) {
        if N == 0 {
            return;
        }
        self.directions.rotate_left(1);
        self.directions[N - 1] = direction;
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[f64; N]> {
        self.directions.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, [f64; N]> {
        self.directions.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for DirectionSet<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a, const N: usize> IntoIterator for &'a DirectionSet<N> {
    type Item = &'a [f64; N];
    type IntoIter = slice::Iter<'a, [f64; N]>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_identity() {
        let set = DirectionSet::<3>::identity();

        assert_eq!(set.get(0), Some(&[1.0, 0.0, 0.0]));
        assert_eq!(set.get(1), Some(&[0.0, 1.0, 0.0]));
        assert_eq!(set.get(2), Some(&[0.0, 0.0, 1.0]));
        assert_eq!(set.get(3), None);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn rotate_is_first_in_first_out() {
        let mut set = DirectionSet::<2>::identity();

        set.rotate([0.6, 0.8]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![[0.0, 1.0], [0.6, 0.8]]);

        set.rotate([0.8, -0.6]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![[0.6, 0.8], [0.8, -0.6]]);

        set.reset();
        assert_eq!(set, DirectionSet::identity());
    }

    #[test]
    fn empty_set_ignores_rotation() {
        let mut set = DirectionSet::<0>::identity();
        set.rotate([]);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
