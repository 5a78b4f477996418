//! The subgroup lattice of D4, the symmetry group of the square.

use core::fmt;

/// One of the 10 subgroups of D4.
///
/// Reflection variants are named after their mirror line:
/// [`ReflectVertical`](D4Subgroup::ReflectVertical) is invariance under
/// `x -> width - 1 - x` (a vertical mirror line), and
/// [`ReflectHorizontal`](D4Subgroup::ReflectHorizontal) is invariance
/// under `y -> height - 1 - y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum D4Subgroup {
    /// The trivial subgroup.
    Identity,
    /// Reflection across a vertical mirror line.
    ReflectVertical,
    /// Reflection across a horizontal mirror line.
    ReflectHorizontal,
    /// Reflection across the main diagonal.
    ReflectMainDiagonal,
    /// Reflection across the anti-diagonal.
    ReflectAntiDiagonal,
    /// 2-fold (180 degree) rotation.
    Rotate2,
    /// 180 degree rotation plus both axis mirrors.
    DihedralOrthogonal,
    /// 180 degree rotation plus both diagonal mirrors.
    DihedralDiagonal,
    /// 4-fold (90 degree) rotation.
    Rotate4,
    /// The full symmetry group of the square.
    DihedralFull,
}

impl D4Subgroup {
    /// All 10 subgroups, for exhaustive iteration.
    pub const ALL: [D4Subgroup; 10] = [
        D4Subgroup::Identity,
        D4Subgroup::ReflectVertical,
        D4Subgroup::ReflectHorizontal,
        D4Subgroup::ReflectMainDiagonal,
        D4Subgroup::ReflectAntiDiagonal,
        D4Subgroup::Rotate2,
        D4Subgroup::DihedralOrthogonal,
        D4Subgroup::DihedralDiagonal,
        D4Subgroup::Rotate4,
        D4Subgroup::DihedralFull,
    ];

    /// Returns `true` iff `self` is contained in `other`.
    ///
    /// The relation is the fixed containment lattice of the subgroups of
    /// D4, written out by hand rather than derived from the group
    /// elements. The full 10x10 relation is pinned down by an exhaustive
    /// test below.
    pub fn is_subgroup_of(self, other: D4Subgroup) -> bool {
        use D4Subgroup::*;

        self == Identity
            || other == DihedralFull
            || self == other
            || (self == ReflectVertical || self == ReflectHorizontal) && other == DihedralOrthogonal
            || (self == ReflectMainDiagonal || self == ReflectAntiDiagonal)
                && other == DihedralDiagonal
            || self == Rotate2
                && (other == DihedralOrthogonal || other == DihedralDiagonal || other == Rotate4)
    }

    /// The number of elements of the subgroup.
    pub fn order(self) -> usize {
        use D4Subgroup::*;

        match self {
            Identity => 1,
            ReflectVertical | ReflectHorizontal | ReflectMainDiagonal | ReflectAntiDiagonal
            | Rotate2 => 2,
            DihedralOrthogonal | DihedralDiagonal | Rotate4 => 4,
            DihedralFull => 8,
        }
    }
}

impl fmt::Display for D4Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            D4Subgroup::Identity => "identity",
            D4Subgroup::ReflectVertical => "mirror (vertical line)",
            D4Subgroup::ReflectHorizontal => "mirror (horizontal line)",
            D4Subgroup::ReflectMainDiagonal => "mirror (main diagonal)",
            D4Subgroup::ReflectAntiDiagonal => "mirror (anti-diagonal)",
            D4Subgroup::Rotate2 => "2-fold rotation",
            D4Subgroup::DihedralOrthogonal => "orthogonal dihedral",
            D4Subgroup::DihedralDiagonal => "diagonal dihedral",
            D4Subgroup::Rotate4 => "4-fold rotation",
            D4Subgroup::DihedralFull => "full square symmetry",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::D4Subgroup;
    use crate::text::trim_common_indentation;

    /// Every pair of the 10x10 relation, checked against a literal
    /// matrix. Rows are the candidate subgroup, columns the candidate
    /// supergroup, in the order of [`D4Subgroup::ALL`]; `#` marks a
    /// correct relation.
    #[test]
    fn subgroup_relation_is_exactly_the_lattice() {
        let matrix = trim_common_indentation(
            "
            ##########
            .#....#..#
            ..#...#..#
            ...#...#.#
            ....#..#.#
            .....#####
            ......#..#
            .......#.#
            ........##
            .........#
            ",
            true,
        );
        let matrix: Vec<&str> = matrix.lines().collect();

        for (i, a) in D4Subgroup::ALL.into_iter().enumerate() {
            for (j, b) in D4Subgroup::ALL.into_iter().enumerate() {
                let expected = matrix[i].as_bytes()[j] == b'#';

                assert_eq!(
                    a.is_subgroup_of(b),
                    expected,
                    "expected {a:?} {}to be a subgroup of {b:?}",
                    if expected { "" } else { "not " },
                );
            }
        }
    }

    #[test]
    fn containment_respects_group_order() {
        for a in D4Subgroup::ALL {
            for b in D4Subgroup::ALL {
                if a.is_subgroup_of(b) {
                    // Lagrange: the order of a subgroup divides the
                    // order of the group.
                    assert_eq!(b.order() % a.order(), 0, "{a:?} in {b:?}");
                }
            }
        }
    }

    #[test]
    fn containment_is_transitive() {
        for a in D4Subgroup::ALL {
            for b in D4Subgroup::ALL {
                for c in D4Subgroup::ALL {
                    if a.is_subgroup_of(b) && b.is_subgroup_of(c) {
                        assert!(a.is_subgroup_of(c), "{a:?} <= {b:?} <= {c:?}");
                    }
                }
            }
        }
    }
}
