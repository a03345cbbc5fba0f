use std::collections::HashMap;

/// Sentinel returned for any class index the table does not cover.
pub const UNKNOWN_CLASS: &str = "Unknown Class";

/// Fixed class-index → label mapping for the ten known conditions. Built once
/// at startup, immutable for the life of the process. Its domain must cover
/// every index the classifier can produce; anything outside falls back to
/// [`UNKNOWN_CLASS`] rather than erroring.
pub struct LabelTable {
    labels: HashMap<usize, &'static str>,
}

impl Default for LabelTable {
    fn default() -> Self {
        let labels = HashMap::from([
            (0, "cataract"),
            (1, "healthy"),
            (2, "pterygium"),
            (3, "glaucoma"),
            (4, "keratoconus"),
            (5, "strabismus"),
            (6, "pink_eye"),
            (7, "stye"),
            (8, "trachoma"),
            (9, "uveitis"),
        ]);
        Self { labels }
    }
}

impl LabelTable {
    pub fn label_for(&self, class_id: usize) -> &'static str {
        self.labels.get(&class_id).copied().unwrap_or(UNKNOWN_CLASS)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
