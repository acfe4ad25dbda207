use sha2::{Digest, Sha256};

/// Stable identity of a post, derived from its display fields.
pub type PostId = u64;

/// One extracted search result. Lives only for the duration of a single run;
/// only its identity is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub text: String,
    pub author: String,
    pub posted_at: String,
    pub link: String,
}

impl Post {
    /// SHA-256 over `text + author + posted_at`, truncated to the first
    /// 8 bytes. Posts with identical fields collide on purpose: that is how a
    /// post seen on a previous run is recognized again.
    pub fn identity(&self) -> PostId {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        hasher.update(self.author.as_bytes());
        hasher.update(self.posted_at.as_bytes());
        let digest = hasher.finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str, author: &str, posted_at: &str) -> Post {
        Post {
            text: text.to_string(),
            author: author.to_string(),
            posted_at: posted_at.to_string(),
            link: String::new(),
        }
    }

    #[test]
    fn identity_is_deterministic() {
        let a = post("hello", "alice", "10:00");
        let b = post("hello", "alice", "10:00");
        assert_eq!(a.identity(), b.identity());
    }

    // Pinned value guards against the identity drifting between builds, which
    // would make every run report all posts as new.
    #[test]
    fn identity_is_stable_across_invocations() {
        assert_eq!(post("hello", "alice", "10:00").identity(), 377787027766172305);
        assert_eq!(post("hello", "", "").identity(), 3238736544897475342);
    }

    #[test]
    fn identity_depends_on_every_field() {
        let base = post("hello", "alice", "10:00");
        assert_ne!(base.identity(), post("hello!", "alice", "10:00").identity());
        assert_ne!(base.identity(), post("hello", "bob", "10:00").identity());
        assert_ne!(base.identity(), post("hello", "alice", "10:01").identity());
    }

    #[test]
    fn identity_ignores_link() {
        let mut other = post("hello", "alice", "10:00");
        other.link = "https://example.com/x".to_string();
        assert_eq!(post("hello", "alice", "10:00").identity(), other.identity());
    }
}
