use crate::domain::{IdSet, Post};

pub fn id_set(posts: &[Post]) -> IdSet {
    posts.iter().map(Post::identity).collect()
}

/// Posts whose identity was not present in the previous run's set, keeping the
/// order they appeared in `current`. An empty `current` yields an empty result.
pub fn detect_new(current: &[Post], previous_ids: &IdSet) -> Vec<Post> {
    current
        .iter()
        .filter(|post| !previous_ids.contains(&post.identity()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str) -> Post {
        Post {
            text: text.to_string(),
            author: String::new(),
            posted_at: String::new(),
            link: String::new(),
        }
    }

    #[test]
    fn returns_only_unseen_posts() {
        let seen = post("seen");
        let fresh = post("fresh");
        let previous: IdSet = [seen.identity()].into_iter().collect();

        let new_posts = detect_new(&[seen, fresh.clone()], &previous);
        assert_eq!(new_posts, vec![fresh]);
    }

    #[test]
    fn empty_current_yields_empty() {
        let previous: IdSet = [post("old").identity()].into_iter().collect();
        assert!(detect_new(&[], &previous).is_empty());
    }

    #[test]
    fn all_new_when_previous_is_empty() {
        let current = vec![post("a"), post("b")];
        assert_eq!(detect_new(&current, &IdSet::new()), current);
    }

    #[test]
    fn preserves_document_order() {
        let current = vec![post("c"), post("a"), post("b")];
        let new_posts = detect_new(&current, &IdSet::new());
        let texts: Vec<&str> = new_posts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    // The stored set for a keyword is rebuilt from the current fetch, never
    // merged with history.
    #[test]
    fn id_set_reflects_only_current_posts() {
        let previous: IdSet = [post("a").identity(), post("b").identity()]
            .into_iter()
            .collect();
        let current = vec![post("c")];

        let next = id_set(&current);
        assert_eq!(next.len(), 1);
        assert!(next.contains(&post("c").identity()));
        assert!(previous.iter().all(|id| !next.contains(id)));
    }
}
