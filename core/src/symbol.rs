use rand::{
    Rng,
    distributions::{Distribution, Standard},
};
use std::fmt;

/// A gameplay symbol, one of the seven keys a challenge is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Q,
    W,
    E,
    R,
    A,
    S,
    D,
}

impl Symbol {
    /// The full alphabet, in keyboard order.
    pub const ALL: [Symbol; 7] = [
        Symbol::Q,
        Symbol::W,
        Symbol::E,
        Symbol::R,
        Symbol::A,
        Symbol::S,
        Symbol::D,
    ];

    /// Map a typed character to a symbol, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'Q' => Some(Symbol::Q),
            'W' => Some(Symbol::W),
            'E' => Some(Symbol::E),
            'R' => Some(Symbol::R),
            'A' => Some(Symbol::A),
            'S' => Some(Symbol::S),
            'D' => Some(Symbol::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Q => 'Q',
            Symbol::W => 'W',
            Symbol::E => 'E',
            Symbol::R => 'R',
            Symbol::A => 'A',
            Symbol::S => 'S',
            Symbol::D => 'D',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Uniform sampling over [`Symbol::ALL`].
impl Distribution<Symbol> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())]
    }
}

/// A key reported by the input source during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// One of the gameplay keys.
    Symbol(Symbol),
    /// The restart key (Enter).
    Confirm,
    /// Anything else.
    Other,
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Key::Symbol(symbol)
    }
}
