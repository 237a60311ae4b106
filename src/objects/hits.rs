//! Lenient traversal of search responses

use serde_json::Value;

/// Follow `path` through nested objects.
///
/// Returns `None` as soon as a key is absent or the value found is `null`,
/// so callers can treat both the same way.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(*key))
        .filter(|found| !found.is_null())
}

/// Take the `hits.hits` array out of a search response.
///
/// Anything other than an array at that position, including a missing or
/// null `hits`, gives an empty list.
pub fn take_hits(mut response: Value) -> Vec<Value> {
    match response.pointer_mut("/hits/hits").map(Value::take) {
        Some(Value::Array(hits)) => hits,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let value = json!({"a": {"b": {"c": 1}, "n": null}});
        assert_eq!(lookup(&value, &["a", "b", "c"]), Some(&json!(1)));
        assert_eq!(lookup(&value, &["a", "x", "c"]), None);
        assert_eq!(lookup(&value, &["a", "n"]), None);
        assert_eq!(lookup(&value, &["a", "n", "deeper"]), None);
        assert_eq!(lookup(&value, &[]), Some(&value));
    }

    #[test]
    fn test_take_hits() {
        let response = json!({"hits": {"hits": [{"_id": "A"}, {"_id": "B"}], "total": 2}});
        let hits = take_hits(response);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1]["_id"], "B");
    }

    #[test]
    fn test_take_hits_degrades_to_empty() {
        assert!(take_hits(json!({})).is_empty());
        assert!(take_hits(json!({"hits": null})).is_empty());
        assert!(take_hits(json!({"hits": {}})).is_empty());
        assert!(take_hits(json!({"hits": {"hits": null}})).is_empty());
        assert!(take_hits(json!({"hits": {"hits": {}}})).is_empty());
        assert!(take_hits(json!([])).is_empty());
    }
}
