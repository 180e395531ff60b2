use crate::painting::Painting;
use crate::types::{DotColor, DotId};
use indexmap::IndexMap;

/// All dots sharing one exact colour
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLayer {
    pub color: DotColor,
    /// Member ids in ascending order
    pub dots: Vec<DotId>,
}

impl ColorLayer {
    pub fn contains(&self, id: DotId) -> bool {
        self.dots.binary_search(&id).is_ok()
    }
}

/// Group dots by colour in first-seen order.
///
/// A white layer is always present: it keeps its first-seen slot when white
/// dots exist, otherwise an empty one is appended last.
pub fn partition(painting: &Painting) -> Vec<ColorLayer> {
    let mut groups: IndexMap<DotColor, Vec<DotId>> = IndexMap::new();
    for (id, dot) in painting.iter() {
        groups.entry(dot.color).or_default().push(id);
    }
    groups.entry(DotColor::WHITE).or_default();

    groups
        .into_iter()
        .map(|(color, dots)| ColorLayer { color, dots })
        .collect()
}
