use crate::math::polygon_2d::triple_cross;
use crate::math::Point2;

/// Classification of a consecutive vertex triple by the sign of the cross
/// product of its two edge vectors.
///
/// The sign convention is tied to the ring's winding order: for the winding
/// assumed throughout (the one produced by upstream readers), a negative
/// cross is a convex corner and a positive cross a concave one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Convex,
    Concave,
    Collinear,
}

/// Classifies the triple `(p1, p2, p3)`.
///
/// The zero comparison is exact, not epsilon-based: near-collinear triples
/// classify by sign, and only a cross product of exactly zero is Collinear.
#[must_use]
pub fn classify(p1: &Point2, p2: &Point2, p3: &Point2) -> Section {
    let cross = triple_cross(p1, p2, p3);
    if cross < 0.0 {
        Section::Convex
    } else if cross > 0.0 {
        Section::Concave
    } else {
        Section::Collinear
    }
}

/// What a pass remembers about a processed triple.
///
/// Convex and collinear triples are both recorded `NotConcave`, as are
/// triples skipped by the lookahead (recorded without re-deriving).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Concave,
    NotConcave,
}

impl From<Section> for SectionKind {
    fn from(section: Section) -> Self {
        match section {
            Section::Concave => SectionKind::Concave,
            Section::Convex | Section::Collinear => SectionKind::NotConcave,
        }
    }
}

/// Per-pass record of triple classifications, keyed by triple index.
///
/// Entries are pushed in walk order, so the index of an entry is the triple
/// index it was recorded for; the previous triple's kind is an O(1) lookup.
#[derive(Debug, Default)]
pub struct SectionRecord {
    kinds: Vec<SectionKind>,
}

impl SectionRecord {
    /// Creates an empty record sized for a ring of `ring_len` points.
    #[must_use]
    pub fn with_capacity(ring_len: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(ring_len),
        }
    }

    /// Records the kind for the next triple index.
    pub fn push(&mut self, kind: SectionKind) {
        self.kinds.push(kind);
    }

    /// Kind recorded at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SectionKind> {
        self.kinds.get(index).copied()
    }

    /// Kind of the first recorded triple.
    #[must_use]
    pub fn first(&self) -> Option<SectionKind> {
        self.kinds.first().copied()
    }

    /// Kind of the most recently recorded triple.
    #[must_use]
    pub fn last(&self) -> Option<SectionKind> {
        self.kinds.last().copied()
    }
}
