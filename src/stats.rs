use fnv::FnvHashMap;

/// Maps the user and item identifiers found in the interaction data to dense,
/// zero-based integer positions. Positions are assigned in the order in which
/// identifiers are first encountered.
pub struct DataDictionary {
    user_dict: FnvHashMap<String, u32>,
    item_dict: FnvHashMap<String, u32>,
    num_interactions: u64,
}

impl DataDictionary {

    pub fn num_users(&self) -> usize {
        self.user_dict.len()
    }

    pub fn num_items(&self) -> usize {
        self.item_dict.len()
    }

    pub fn num_interactions(&self) -> u64 {
        self.num_interactions
    }

    pub fn user_index(&self, name: &str) -> &u32 {
        self.user_dict.get(name).unwrap()
    }

    pub fn item_index(&self, name: &str) -> &u32 {
        self.item_dict.get(name).unwrap()
    }

    pub(crate) fn into_dicts(self) -> (FnvHashMap<String, u32>, FnvHashMap<String, u32>) {
        (self.user_dict, self.item_dict)
    }
}

impl<'a, T> From<T> for DataDictionary where T: Iterator<Item = &'a (String, String)> {

    fn from(interactions: T) -> Self {

        let mut user_index: u32 = 0;
        let mut user_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut item_index: u32 = 0;
        let mut item_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut num_interactions: u64 = 0;

        for (user, item) in interactions {

            if !user_dict.contains_key(user) {
                user_dict.insert(user.clone(), user_index);
                user_index += 1;
            }

            if !item_dict.contains_key(item) {
                item_dict.insert(item.clone(), item_index);
                item_index += 1;
            }

            num_interactions += 1;
        }

        DataDictionary { user_dict, item_dict, num_interactions }
    }
}

#[cfg(test)]
mod tests {

    use super::DataDictionary;

    #[test]
    fn positions_assigned_in_first_encounter_order() {

        let interactions = vec![
            (String::from("alice"), String::from("apple")),
            (String::from("bob"), String::from("pony")),
            (String::from("alice"), String::from("pony")),
            (String::from("charles"), String::from("apple")),
        ];

        let data_dict = DataDictionary::from(interactions.iter());

        assert_eq!(data_dict.num_users(), 3);
        assert_eq!(data_dict.num_items(), 2);
        assert_eq!(data_dict.num_interactions(), 4);

        assert_eq!(*data_dict.user_index("alice"), 0);
        assert_eq!(*data_dict.user_index("bob"), 1);
        assert_eq!(*data_dict.user_index("charles"), 2);

        assert_eq!(*data_dict.item_index("apple"), 0);
        assert_eq!(*data_dict.item_index("pony"), 1);
    }
}
