//! Order-preserving grouping of report rows.

/// Group `items` by `key`, keeping buckets in first-seen order and members
/// in input order.
///
/// # Examples
/// ```
/// use personnel::domain::reports::group_in_order;
///
/// let buckets = group_in_order(["b1", "a1", "b2"], |item| item.chars().next());
/// assert_eq!(buckets, vec![(Some('b'), vec!["b1", "b2"]), (Some('a'), vec!["a1"])]);
/// ```
pub fn group_in_order<T, K, I, F>(items: I, key: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut buckets: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let item_key = key(&item);
        match buckets.iter_mut().find(|(bucket, _)| *bucket == item_key) {
            Some((_, members)) => members.push(item),
            None => buckets.push((item_key, vec![item])),
        }
    }
    buckets
}
