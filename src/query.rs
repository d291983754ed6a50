//! Grouped query value (§4.E): an immutable value carrying a combinator
//! kind and a list of literal patterns. Replaces the source's
//! operator-overload DSL (`P1 & P2`, `P1 | P2`) with explicit
//! constructors, per the design note in §9.

use crate::alphabet::CodeUnit;

/// How a [`Group`]'s patterns are combined by the proximity combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    And,
    Or,
}

/// An immutable, same-kind group of literal patterns.
///
/// `k = 0` patterns is valid and denotes "every position in `T`"
/// (§3, §4.F).
#[derive(Debug, Clone)]
pub struct Group {
    kind: Kind,
    patterns: Vec<Vec<CodeUnit>>,
}

impl Group {
    /// The empty group of the given kind; matches every text position.
    pub fn empty(kind: Kind) -> Self {
        Group { kind, patterns: Vec::new() }
    }

    /// A one-pattern group. The kind is immaterial for a single
    /// pattern (the combinator only folds from the second pattern
    /// onward), so this defaults to `Or`.
    pub fn singleton<P: Into<Vec<CodeUnit>>>(pat: P) -> Self {
        Group { kind: Kind::Or, patterns: vec![pat.into()] }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn patterns(&self) -> &[Vec<CodeUnit>] {
        &self.patterns
    }

    /// Extend this group with another pattern of the same kind.
    ///
    /// AND absorbs into AND, OR absorbs into OR (§4.E). Mixing kinds at
    /// this layer is not supported by the core combinator (§9) and is a
    /// programmer error, not a runtime condition.
    pub fn extend<P: Into<Vec<CodeUnit>>>(&mut self, kind: Kind, pat: P) {
        assert_eq!(
            self.kind, kind,
            "cannot extend a {:?} group with a {:?} pattern; mixed AND/OR groups \
             are not supported by the core combinator",
            self.kind, kind
        );
        self.patterns.push(pat.into());
    }
}

/// Build an AND group from the given patterns.
pub fn and_of<P, I>(patterns: I) -> Group
where
    P: Into<Vec<CodeUnit>>,
    I: IntoIterator<Item = P>,
{
    Group {
        kind: Kind::And,
        patterns: patterns.into_iter().map(Into::into).collect(),
    }
}

/// Build an OR group from the given patterns.
pub fn or_of<P, I>(patterns: I) -> Group
where
    P: Into<Vec<CodeUnit>>,
    I: IntoIterator<Item = P>,
{
    Group {
        kind: Kind::Or,
        patterns: patterns.into_iter().map(Into::into).collect(),
    }
}
