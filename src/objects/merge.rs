use crate::traits::Mapping;

/// Copies every entry of each source into `target`, from left to right. Later sources overwrite
/// earlier ones, and any source overwrites what `target` already had.
pub fn extend<'t, 's, M, S, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    S: Mapping<Key = M::Key, Value = M::Value> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        for (key, value) in source.iter() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Like [`extend`], but never overwrites a key that is already present in `target`.
///
/// Presence is checked before each assignment, so the first source to provide a key wins over
/// later ones.
pub fn defaults<'t, 's, M, S, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    S: Mapping<Key = M::Key, Value = M::Value> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        for (key, value) in source.iter() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}
