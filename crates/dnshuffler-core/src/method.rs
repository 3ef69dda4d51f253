// Mutation methods and the set of methods enabled for a run.

use std::fmt;
use std::str::FromStr;

/// One class of single-edit mutation applied to a domain label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    /// Replace a character with an adjacent QWERTY key.
    Neighbor,
    /// Replace a character with its visually or phonetically similar twin.
    Similar,
    /// Remove a character.
    Omit,
    /// Type a character twice.
    Duplicate,
    /// Exchange two adjacent characters.
    Swap,
    /// Keep a character and insert an adjacent key right after it.
    NeighborDuplicate,
    /// Replace a Latin letter with a look-alike Cyrillic or Greek letter.
    Homoglyph,
}

impl Method {
    /// Number of distinct methods.
    pub const COUNT: usize = 7;

    /// Every method, in the order generators run.
    pub const ALL: [Method; Self::COUNT] = [
        Method::Neighbor,
        Method::Similar,
        Method::Omit,
        Method::Duplicate,
        Method::NeighborDuplicate,
        Method::Homoglyph,
        Method::Swap,
    ];

    /// The name used on the command line and in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Neighbor => "neighbor",
            Method::Similar => "similar",
            Method::Omit => "omit",
            Method::Duplicate => "duplicate",
            Method::Swap => "swap",
            Method::NeighborDuplicate => "neighbor_duplicate",
            Method::Homoglyph => "homoglyph",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method `{0}` (expected one of: neighbor, similar, omit, duplicate, swap, neighbor_duplicate, homoglyph)")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Accepts the names from [`Method::name`]; `-` may stand in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let normalized = name.replace('-', "_");
        Method::ALL
            .into_iter()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| UnknownMethod(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MethodSet
// ---------------------------------------------------------------------------

/// A set of enabled [`Method`]s, stored as a bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodSet(u8);

impl MethodSet {
    /// No methods enabled.
    pub const EMPTY: MethodSet = MethodSet(0);

    /// Every method, homoglyphs included.
    pub const ALL: MethodSet = MethodSet(0b0111_1111);

    /// Every method except [`Method::Homoglyph`].
    ///
    /// Homoglyph candidates always need punycode and are far more numerous
    /// for long labels, so they are opt-in.
    pub const DEFAULT: MethodSet = MethodSet(Self::ALL.0 & !Method::Homoglyph.bit());

    /// Build a set from the given methods.
    pub fn from_methods<I: IntoIterator<Item = Method>>(methods: I) -> Self {
        methods.into_iter().fold(Self::EMPTY, MethodSet::with)
    }

    /// Return a copy of the set with `method` enabled.
    #[must_use]
    pub const fn with(self, method: Method) -> Self {
        MethodSet(self.0 | method.bit())
    }

    pub const fn contains(self, method: Method) -> bool {
        self.0 & method.bit() != 0
    }

    /// Iterate over enabled methods in generator order ([`Method::ALL`]).
    pub fn iter(self) -> impl Iterator<Item = Method> {
        Method::ALL.into_iter().filter(move |&m| self.contains(m))
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for method in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(method.name())?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        Self::from_methods(iter)
    }
}
