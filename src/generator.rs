//! Lazy enumeration of free polyominoes.

use hashbrown::HashSet;

use crate::polyomino::Polyomino;

/// Enumerate the free polyominoes of `order`.
///
/// The returned iterator is lazy and finite. Every yielded shape has
/// exactly `order` cells and no two yielded shapes are related by any
/// D4 transformation, so each free polyomino appears exactly once.
/// `order == 1` yields the single monomino; `order == 0` is the empty
/// sequence.
pub fn free_polyominoes(order: usize) -> FreePolyominoes {
    FreePolyominoes::new(order)
}

/// Iterator returned by [`free_polyominoes`].
///
/// Shapes of order N are produced by growing every shape of order N - 1
/// at every free orthogonal neighbor of every cell. A candidate is kept
/// only if neither it nor any of its seven non-identity D4 images has
/// been yielded before; the candidate itself, in the orientation the
/// growth happened to produce, is what enters the seen-set. That makes
/// the choice of orientation irrelevant for uniqueness.
pub struct FreePolyominoes {
    order: usize,
    state: State,
}

enum State {
    Empty,
    /// One-shot monomino source; `true` once it has been yielded.
    Base(bool),
    Grown {
        previous: Box<FreePolyominoes>,
        pending: std::vec::IntoIter<Polyomino>,
        seen: HashSet<Polyomino>,
    },
}

impl FreePolyominoes {
    fn new(order: usize) -> Self {
        let state = match order {
            0 => State::Empty,
            1 => State::Base(false),
            _ => State::Grown {
                previous: Box::new(FreePolyominoes::new(order - 1)),
                pending: Vec::new().into_iter(),
                seen: HashSet::new(),
            },
        };

        Self { order, state }
    }

    /// The order of the shapes this iterator produces.
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Iterator for FreePolyominoes {
    type Item = Polyomino;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Empty => None,
            State::Base(yielded) => {
                if *yielded {
                    None
                } else {
                    *yielded = true;
                    Some(Polyomino::monomino())
                }
            }
            State::Grown {
                previous,
                pending,
                seen,
            } => loop {
                if let Some(candidate) = pending.next() {
                    let already_seen = seen.contains(&candidate)
                        || seen.contains(&candidate.rotate_cw())
                        || seen.contains(&candidate.rotate_ccw())
                        || seen.contains(&candidate.rotate_180())
                        || seen.contains(&candidate.reflect_vertical())
                        || seen.contains(&candidate.reflect_horizontal())
                        || seen.contains(&candidate.reflect_main_diagonal())
                        || seen.contains(&candidate.reflect_anti_diagonal());

                    if already_seen {
                        continue;
                    }

                    seen.insert(candidate.clone());
                    return Some(candidate);
                }

                let seed = previous.next()?;
                *pending = seed.expansions().collect::<Vec<_>>().into_iter();
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Empty | State::Base(true) => (0, Some(0)),
            State::Base(false) => (1, Some(1)),
            // The count for an order is unknown until exhaustion.
            State::Grown { .. } => (0, None),
        }
    }
}
