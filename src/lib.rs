use std::sync::Mutex;
use std::time::Instant;

use fnv::FnvHashMap;
use scoped_pool::Pool;
use serde_derive::{Deserialize, Serialize};

pub mod distance;
pub mod errors;
pub mod io;
pub mod recommend;
pub mod stats;
pub mod types;
pub mod utils;


use crate::errors::LikewiseError;
use crate::stats::DataDictionary;
use crate::types::{DistanceMatrix, InteractionMatrix};

/// The artifact produced by the model build: the user and item position
/// mappings, the inverse item mapping and the dense item distance matrix.
/// Immutable once built (no mutating operation is exposed), so a server can
/// share it between concurrent query callers without locking.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityModel {
    user_indices: FnvHashMap<String, u32>,
    item_indices: FnvHashMap<String, u32>,
    item_names: Vec<String>,
    distances: DistanceMatrix,
}

impl SimilarityModel {

    fn new(data_dict: DataDictionary, distances: DistanceMatrix) -> Self {

        let (user_indices, item_indices) = data_dict.into_dicts();

        let mut item_names = vec![String::new(); item_indices.len()];
        for (name, index) in item_indices.iter() {
            item_names[*index as usize] = name.clone();
        }

        SimilarityModel { user_indices, item_indices, item_names, distances }
    }

    pub fn num_users(&self) -> usize {
        self.user_indices.len()
    }

    pub fn num_items(&self) -> usize {
        self.item_indices.len()
    }

    pub fn item_position(&self, name: &str) -> Option<u32> {
        self.item_indices.get(name).cloned()
    }

    pub fn item_name(&self, position: u32) -> &str {
        &self.item_names[position as usize]
    }

    /// The distances from an item to all items in the model.
    pub fn distance_row(&self, item: u32) -> &[f64] {
        self.distances.row(item)
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// All item identifiers known to the model, in sorted order.
    pub fn items(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self.item_names.iter().map(|name| name.as_str()).collect();
        items.sort_unstable();
        items
    }
}

/// Builds a similarity model from raw user-item interactions: assigns dense
/// positions to the distinct users and items, materializes the binary
/// interaction matrix and computes the item distance matrix with the supplied
/// distance function (`distance::jaccard` is the default choice).
///
/// Duplicate interactions are idempotent, an interaction either holds or it
/// does not. Fails with `EmptyDataset` if the interactions contain no users
/// or no items.
pub fn distance_data<F>(
    interactions: &[(String, String)],
    pool_size: usize,
    distance: F,
) -> Result<SimilarityModel, LikewiseError>
    where F: Fn(&[u8], &[u8]) -> f64 + Sync {

    let data_dict = DataDictionary::from(interactions.iter());

    if data_dict.num_users() == 0 || data_dict.num_items() == 0 {
        return Err(LikewiseError::EmptyDataset);
    }

    let mut observed = InteractionMatrix::new(data_dict.num_users(), data_dict.num_items());

    for (user, item) in interactions.iter() {
        observed.observe(*data_dict.user_index(user), *data_dict.item_index(item));
    }

    let distances = distance_matrix(&observed, pool_size, distance);

    Ok(SimilarityModel::new(data_dict, distances))
}

/// Computes the dense symmetric item distance matrix from the binary
/// interaction matrix. The item pairs are scored in parallel, as every pair
/// is independent of all others. Each unordered pair of item columns is
/// scored exactly once and the result is mirrored into both cells, so the
/// output is symmetric by construction.
pub fn distance_matrix<F>(
    interactions: &InteractionMatrix,
    pool_size: usize,
    distance: F,
) -> DistanceMatrix
    where F: Fn(&[u8], &[u8]) -> f64 + Sync {

    let num_items = interactions.num_items();

    let pool = Pool::new(pool_size);

    let mut rows: Vec<Mutex<Vec<f64>>> = Vec::with_capacity(num_items);
    for _ in 0..num_items {
        rows.push(Mutex::new(vec![0.0; num_items]));
    }

    let batch_start = Instant::now();

    pool.scoped(|scope| {
        for item in 0..num_items {

            let reference_to_rows = &rows;
            let reference_to_interactions = interactions;
            let reference_to_distance = &distance;

            scope.execute(move || {
                score_item_pairs(
                    item,
                    reference_to_interactions,
                    reference_to_rows,
                    reference_to_distance,
                )
            });
        }
    });

    let duration_for_batch = utils::to_millis(batch_start.elapsed());
    println!(
        "{} item pairs scored, {}ms training time",
        (num_items * (num_items + 1)) / 2,
        duration_for_batch,
    );

    let row_values = rows.into_iter().map(|row| row.into_inner().unwrap()).collect();

    DistanceMatrix::from_rows(num_items, row_values)
}

/// Scores the pairs (item, other) for all other >= item and mirrors the
/// results into the rows of the other items.
fn score_item_pairs<F>(
    item: usize,
    interactions: &InteractionMatrix,
    rows: &[Mutex<Vec<f64>>],
    distance: &F,
) where F: Fn(&[u8], &[u8]) -> f64 {

    let num_items = interactions.num_items();
    let column = interactions.item_column(item as u32);

    let mut mirrored: Vec<(usize, f64)> = Vec::with_capacity(num_items - item);

    {
        let mut own_row = rows[item].lock().unwrap();

        for other_item in item..num_items {
            let computed_distance = distance(column, interactions.item_column(other_item as u32));

            own_row[other_item] = computed_distance;

            if other_item != item {
                mirrored.push((other_item, computed_distance));
            }
        }
    }

    for (other_item, computed_distance) in mirrored {
        rows[other_item].lock().unwrap()[item] = computed_distance;
    }
}
