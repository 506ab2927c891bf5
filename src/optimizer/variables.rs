//! Decision-variable layout for the roster model.
//!
//! Each candidate player owns three boolean columns: `selected` (in the
//! 15-man squad), `starting` (in the XI), and `captain`. The layout maps a
//! player's pool index to its three column indices so the constraint builder,
//! objective builder, and decoder all agree on the column order.

/// Column layout: all `selected` columns, then all `starting`, then all
/// `captain`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VariableLayout {
    players: usize,
}

impl VariableLayout {
    /// Layout for a pool of `players` candidates.
    pub(crate) fn new(players: usize) -> Self {
        Self { players }
    }

    /// Number of candidates covered.
    pub(crate) fn players(&self) -> usize {
        self.players
    }

    /// Total number of decision variables.
    pub(crate) fn num_vars(&self) -> usize {
        self.players * 3
    }

    /// Column of player `i`'s `selected` variable.
    pub(crate) fn selected(&self, i: usize) -> usize {
        i
    }

    /// Column of player `i`'s `starting` variable.
    pub(crate) fn starting(&self, i: usize) -> usize {
        self.players + i
    }

    /// Column of player `i`'s `captain` variable.
    pub(crate) fn captain(&self, i: usize) -> usize {
        2 * self.players + i
    }
}
