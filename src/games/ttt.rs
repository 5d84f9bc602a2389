//! A definition of the game Tic-Tac-Toe, for use in tests.
//!
//! For example, playing a correct strategy against itself should always
//! result in a draw; and playing such a strategy against one that picks
//! actions randomly should always result in a win or draw.

use crate::interface::{self, Payoffs, Value};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Square {
    Empty,
    X,
    O,
}

impl Square {
    pub fn invert(&self) -> Self {
        match *self {
            Square::Empty => Square::Empty,
            Square::X => Square::O,
            Square::O => Square::X,
        }
    }
}

impl Default for Square {
    fn default() -> Square {
        Square::Empty
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'X',
                Square::O => 'O',
            }
        )
    }
}

const LINES: [[usize; 3]; 8] =
    [[0, 1, 2], [3, 4, 5], [6, 7, 8], [0, 3, 6], [1, 4, 7], [2, 5, 8], [0, 4, 8], [2, 4, 6]];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; 9],
    to_move: Square,
}

impl Board {
    /// Parse a board from 9 characters, row by row: `X`, `O`, and `.` for
    /// empty squares. Whitespace is ignored. X moves first, so the player to
    /// move is derived from the piece counts.
    pub fn parse(s: &str) -> Option<Board> {
        let mut squares = [Square::Empty; 9];
        let mut n = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if n == 9 {
                return None;
            }
            squares[n] = match c {
                'X' | 'x' => Square::X,
                'O' | 'o' => Square::O,
                '.' => Square::Empty,
                _ => return None,
            };
            n += 1;
        }
        if n != 9 {
            return None;
        }
        let xs = squares.iter().filter(|&&s| s == Square::X).count();
        let os = squares.iter().filter(|&&s| s == Square::O).count();
        let to_move = match xs.checked_sub(os) {
            Some(0) => Square::X,
            Some(1) => Square::O,
            _ => return None,
        };
        Some(Board { squares, to_move })
    }

    pub fn square(&self, i: usize) -> Square {
        self.squares[i]
    }

    pub fn to_move(&self) -> Square {
        self.to_move
    }

    /// The player who completed a line, if any.
    pub fn winner(&self) -> Option<Square> {
        LINES.iter().find_map(|&[a, b, c]| {
            let s = self.squares[a];
            if s != Square::Empty && s == self.squares[b] && s == self.squares[c] {
                Some(s)
            } else {
                None
            }
        })
    }

    fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board { squares: [Square::default(); 9], to_move: Square::X }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.squares[0], self.squares[1], self.squares[2])?;
        writeln!(f, "{} | {} | {}", self.squares[3], self.squares[4], self.squares[5])?;
        writeln!(f, "{} | {} | {}", self.squares[6], self.squares[7], self.squares[8])?;
        Ok(())
    }
}

impl interface::State for Board {
    type Player = Square;

    fn player_to_move(&self) -> Square {
        self.to_move
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Place {
    i: u8,
}

impl Place {
    pub fn new(i: u8) -> Place {
        Place { i }
    }

    pub fn index(&self) -> usize {
        self.i as usize
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "@{}", self.i)
    }
}

/// Tic-Tac-Toe starting from `start`, the empty board by default.
#[derive(Default)]
pub struct Game {
    start: Board,
}

impl Game {
    pub fn from_board(start: Board) -> Game {
        Game { start }
    }
}

impl interface::Game for Game {
    type S = Board;
    type A = Place;

    fn start_state(&self) -> Board {
        self.start
    }

    fn generate_actions(&self, b: &Board, actions: &mut Vec<Place>) {
        for i in 0..b.squares.len() {
            if b.squares[i] == Square::Empty {
                actions.push(Place { i: i as u8 });
            }
        }
    }

    fn transition(&self, b: &Board, m: &Place) -> Board {
        let mut next = *b;
        next.squares[m.index()] = b.to_move;
        next.to_move = b.to_move.invert();
        next
    }

    fn is_terminal(&self, b: &Board) -> bool {
        b.winner().is_some() || b.is_full()
    }

    fn evaluate_terminal(&self, b: &Board) -> Payoffs<Square> {
        match b.winner() {
            Some(winner) => Payoffs::zero_sum(winner, winner.invert(), 1.0),
            None => Payoffs::zero_sum(Square::X, Square::O, 0.0),
        }
    }
}

/// Scores open pairs and the center square for `player`.
///
/// Adapted from http://www.cs.olemiss.edu/~dwilkins/CSCI531/tic.c
pub fn heuristic(b: &Board, player: Square) -> Value {
    let mut score = 0.0;
    for &[a, m, c] in LINES.iter() {
        for (i, j) in [(a, m), (m, c)] {
            if b.squares[i] == b.squares[j] {
                if b.squares[i] == Square::X {
                    score += 0.05;
                } else if b.squares[i] == Square::O {
                    score -= 0.05;
                }
            }
        }
    }
    if b.squares[4] == Square::X {
        score += 0.05;
    } else if b.squares[4] == Square::O {
        score -= 0.05;
    }
    if player == Square::X {
        score
    } else {
        -score
    }
}
