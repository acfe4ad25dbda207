use std::collections::{BTreeMap, BTreeSet};

use super::post::PostId;

/// Identities observed for one keyword. Ordered so the serialized form is stable.
pub type IdSet = BTreeSet<PostId>;

/// Keyword to observed identities, as persisted between runs.
pub type KeywordSnapshot = BTreeMap<String, IdSet>;
