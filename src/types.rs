/**
 * Likewise
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use serde_derive::{Deserialize, Serialize};

/// Dense binary user-item interaction matrix. We store the matrix item-major,
/// so that the interaction column of an item is a single contiguous slice and
/// column comparisons become plain slice scans.
pub struct InteractionMatrix {
    num_users: usize,
    num_items: usize,
    cells: Vec<u8>,
}

impl InteractionMatrix {

    pub fn new(num_users: usize, num_items: usize) -> Self {
        InteractionMatrix {
            num_users,
            num_items,
            cells: vec![0; num_users * num_items],
        }
    }

    pub fn num_users(&self) -> usize {
        self.num_users
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Marks an observed interaction. Observing the same pair twice is idempotent.
    pub fn observe(&mut self, user: u32, item: u32) {
        self.cells[item as usize * self.num_users + user as usize] = 1;
    }

    /// The interaction column of an item, one cell per user.
    pub fn item_column(&self, item: u32) -> &[u8] {
        let start = item as usize * self.num_users;
        &self.cells[start..start + self.num_users]
    }
}

/// Dense symmetric matrix of item-to-item distances, backed by a single
/// contiguous buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    num_items: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {

    /// Assembles a matrix from per-item rows. All rows must have length `num_items`.
    pub fn from_rows(num_items: usize, rows: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(rows.len(), num_items);

        let mut distances = Vec::with_capacity(num_items * num_items);
        for row in rows {
            debug_assert_eq!(row.len(), num_items);
            distances.extend(row);
        }

        DistanceMatrix { num_items, distances }
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn get(&self, item_a: u32, item_b: u32) -> f64 {
        self.distances[item_a as usize * self.num_items + item_b as usize]
    }

    /// The distances from an item to all items (including itself).
    pub fn row(&self, item: u32) -> &[f64] {
        let start = item as usize * self.num_items;
        &self.distances[start..start + self.num_items]
    }
}

#[cfg(test)]
mod tests {

    use super::{DistanceMatrix, InteractionMatrix};

    #[test]
    fn interaction_columns() {
        let mut interactions = InteractionMatrix::new(3, 2);

        interactions.observe(0, 0);
        interactions.observe(2, 0);
        interactions.observe(1, 1);
        // Observing a pair twice must not change the matrix
        interactions.observe(1, 1);

        assert_eq!(interactions.item_column(0), &[1, 0, 1]);
        assert_eq!(interactions.item_column(1), &[0, 1, 0]);
    }

    #[test]
    fn row_assembly() {
        let matrix = DistanceMatrix::from_rows(2, vec![vec![0.0, 0.25], vec![0.25, 0.0]]);

        assert_eq!(matrix.num_items(), 2);
        assert_eq!(matrix.get(0, 1), 0.25);
        assert_eq!(matrix.get(1, 0), 0.25);
        assert_eq!(matrix.row(1), &[0.25, 0.0]);
    }
}
