// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Ship and salvo allocation tables.
use std::{
    collections::BTreeMap,
    iter::FromIterator,
};

/// Multiset of ship sizes that every board must contain before the battle can start.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShipAllocation(Vec<usize>);

impl ShipAllocation {
    /// Construct an allocation from a list of ship sizes. Repeated sizes require that
    /// many ships of that size.
    pub fn new(sizes: Vec<usize>) -> Self {
        ShipAllocation(sizes)
    }

    /// The allocated sizes, in the order they were given.
    pub fn sizes(&self) -> &[usize] {
        &self.0
    }

    /// Total number of ships in the allocation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no ships are allocated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`remaining_ships`].
    pub fn remaining<I: IntoIterator<Item = usize>>(&self, placed: I) -> BTreeMap<usize, isize> {
        remaining_ships(&self.0, placed)
    }

    /// Returns true if another ship of `size` may still be placed given the sizes of the
    /// ships already placed.
    pub fn can_place<I: IntoIterator<Item = usize>>(&self, size: usize, placed: I) -> bool {
        self.remaining(placed).get(&size).map_or(false, |&left| left > 0)
    }

    /// Returns true if the placed sizes match the allocation exactly: every allocated size
    /// is placed as many times as it is allocated, and nothing else is placed.
    pub fn is_complete<I: IntoIterator<Item = usize>>(&self, placed: I) -> bool {
        self.remaining(placed).values().all(|&left| left == 0)
    }
}

impl Default for ShipAllocation {
    /// The classic fleet: one each of sizes 2, 4 and 5 and two of size 3.
    fn default() -> Self {
        ShipAllocation(vec![2, 3, 3, 4, 5])
    }
}

impl From<Vec<usize>> for ShipAllocation {
    fn from(sizes: Vec<usize>) -> Self {
        ShipAllocation(sizes)
    }
}

impl FromIterator<usize> for ShipAllocation {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        ShipAllocation(iter.into_iter().collect())
    }
}

/// Count how many ships of each size are still owed: for every size, the number of
/// times it appears in `allocation` minus the number of `placed` ships of that size.
/// Sizes that were placed but never allocated show up with a negative count.
pub fn remaining_ships<I>(allocation: &[usize], placed: I) -> BTreeMap<usize, isize>
where
    I: IntoIterator<Item = usize>,
{
    let mut remaining = BTreeMap::new();
    for &size in allocation {
        *remaining.entry(size).or_insert(0) += 1;
    }
    for size in placed {
        *remaining.entry(size).or_insert(0) -= 1;
    }
    remaining
}

/// Number of shots each living ship contributes to its owner's salvo, keyed by ship size.
/// Sizes missing from the table contribute no shots.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SalvoAllocation(BTreeMap<usize, u32>);

impl SalvoAllocation {
    /// Construct an allocation from a size to shots table.
    pub fn new(shots: BTreeMap<usize, u32>) -> Self {
        SalvoAllocation(shots)
    }

    /// Shots granted by a living ship of `size`.
    pub fn shots(&self, size: usize) -> u32 {
        self.0.get(&size).copied().unwrap_or(0)
    }
}

impl Default for SalvoAllocation {
    /// One shot per living ship of size 1 through 5.
    fn default() -> Self {
        (1..=5).map(|size| (size, 1)).collect()
    }
}

impl FromIterator<(usize, u32)> for SalvoAllocation {
    fn from_iter<I: IntoIterator<Item = (usize, u32)>>(iter: I) -> Self {
        SalvoAllocation(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_multiset() {
        let remaining = remaining_ships(&[2, 3, 3, 4, 5], vec![3, 5]);
        assert_eq!(remaining.get(&2), Some(&1));
        assert_eq!(remaining.get(&3), Some(&1));
        assert_eq!(remaining.get(&4), Some(&1));
        assert_eq!(remaining.get(&5), Some(&0));
        assert_eq!(remaining.get(&6), None);
    }

    #[test]
    fn can_place_only_owed_sizes() {
        let allocation = ShipAllocation::default();
        assert!(allocation.can_place(3, vec![3]));
        assert!(!allocation.can_place(3, vec![3, 3]));
        assert!(!allocation.can_place(6, Vec::<usize>::new()));
        assert!(!allocation.can_place(0, Vec::<usize>::new()));
    }

    #[test]
    fn completion_is_exact() {
        let allocation = ShipAllocation::new(vec![1, 2]);
        assert!(!allocation.is_complete(Vec::<usize>::new()));
        assert!(!allocation.is_complete(vec![1]));
        assert!(allocation.is_complete(vec![2, 1]));
        assert!(!allocation.is_complete(vec![2, 1, 1]));
        assert!(!allocation.is_complete(vec![2, 1, 7]));
    }

    #[test]
    fn salvo_defaults() {
        let salvo = SalvoAllocation::default();
        assert_eq!(salvo.shots(1), 1);
        assert_eq!(salvo.shots(5), 1);
        assert_eq!(salvo.shots(6), 0);
        assert_eq!(salvo.shots(0), 0);
    }
}
