use std::cmp::Ordering;

use fnv::FnvHashSet;

use crate::errors::LikewiseError;
use crate::SimilarityModel;

/// Recommends up to `how_many` items similar to the given seed items,
/// lowest-distance first.
///
/// Seed items unknown to the model are silently dropped; a query without any
/// known seed item returns an empty list rather than failing. The seeds
/// themselves are never recommended and no item is recommended twice, even
/// when it scores against several seeds. A candidate scored against several
/// seeds keeps one entry per seed and the globally closest entry decides its
/// rank. Fails with `InvalidQuery` if `how_many` is zero.
pub fn recommend(
    model: &SimilarityModel,
    seed_items: &[String],
    how_many: usize,
) -> Result<Vec<String>, LikewiseError> {

    if how_many == 0 {
        return Err(LikewiseError::InvalidQuery(
            String::from("the number of recommendations must be positive"),
        ));
    }

    let mut seed_positions: Vec<u32> = Vec::with_capacity(seed_items.len());
    let mut known_seed_items: Vec<&str> = Vec::with_capacity(seed_items.len());

    for seed_item in seed_items {
        if let Some(position) = model.item_position(seed_item) {
            seed_positions.push(position);
            known_seed_items.push(seed_item);
        }
    }

    println!(
        "{} of {} seed items found in the model: {:?}",
        known_seed_items.len(),
        seed_items.len(),
        known_seed_items,
    );

    if seed_positions.is_empty() {
        return Ok(Vec::new());
    }

    let seed_set: FnvHashSet<u32> = seed_positions.iter().cloned().collect();

    let mut candidates: Vec<(u32, f64)> =
        Vec::with_capacity(seed_positions.len() * model.num_items());

    for &seed_position in seed_positions.iter() {
        for (position, &distance) in model.distance_row(seed_position).iter().enumerate() {

            let position = position as u32;

            if !seed_set.contains(&position) {
                candidates.push((position, distance));
            }
        }
    }

    // Stable sort, ties keep their enumeration order
    candidates.sort_by(|(_, distance_a), (_, distance_b)| {
        distance_a.partial_cmp(distance_b).unwrap_or(Ordering::Equal)
    });

    let mut recommended_items: Vec<String> = Vec::with_capacity(how_many.min(candidates.len()));
    let mut already_recommended: FnvHashSet<u32> =
        FnvHashSet::with_capacity_and_hasher(how_many, Default::default());

    for (position, _) in candidates {

        if recommended_items.len() == how_many {
            break;
        }

        if already_recommended.insert(position) {
            recommended_items.push(model.item_name(position).to_string());
        }
    }

    Ok(recommended_items)
}
