/// Which sides of an interval are open (boundary excluded) vs. closed
/// (boundary included).
///
/// Each variant corresponds to one bracket pair of the textual notation:
///
/// | Variant     | Brackets | Left open | Right open |
/// |-------------|----------|-----------|------------|
/// | `Open`      | `( )`    | yes       | yes        |
/// | `Closed`    | `[ ]`    | no        | no         |
/// | `LeftOpen`  | `( ]`    | yes       | no         |
/// | `RightOpen` | `[ )`    | no        | yes        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    Open,
    Closed,
    LeftOpen,
    RightOpen,
}

impl Notation {
    /// Builds a notation from its opening and closing brackets.
    ///
    /// # Panics
    /// On any pair other than `( )`, `[ ]`, `( ]`, `[ )`. The interval
    /// grammar only ever produces valid pairs, so this is a programming
    /// error, not a recoverable parse failure.
    pub fn from_brackets(opening: &str, closing: &str) -> Self {
        match (opening, closing) {
            ("(", ")") => Self::Open,
            ("[", "]") => Self::Closed,
            ("(", "]") => Self::LeftOpen,
            ("[", ")") => Self::RightOpen,
            (opening, closing) => panic!("invalid interval brackets: {opening}{closing}"),
        }
    }

    /// Returns `true` if the left boundary is excluded from the interval.
    #[inline]
    pub fn is_left_open(&self) -> bool {
        matches!(self, Self::Open | Self::LeftOpen)
    }

    /// Returns `true` if the right boundary is excluded from the interval.
    #[inline]
    pub fn is_right_open(&self) -> bool {
        matches!(self, Self::Open | Self::RightOpen)
    }

    /// The opening bracket: `(` if left-open, `[` otherwise.
    #[inline]
    pub fn opening_symbol(&self) -> char {
        if self.is_left_open() {
            '('
        } else {
            '['
        }
    }

    /// The closing bracket: `)` if right-open, `]` otherwise.
    #[inline]
    pub fn closing_symbol(&self) -> char {
        if self.is_right_open() {
            ')'
        } else {
            ']'
        }
    }
}
