//! Random piece placement

use rand::seq::index;
use rand::Rng;

use crate::core::error::{NeoPawnError, Result};
use crate::core::types::Position;
use crate::spatial::lattice::Lattice;

/// Build a `size`×`size` lattice with `pieces` pieces at distinct random cells
///
/// Flat indices are drawn uniformly without replacement from the N² cells.
pub fn scatter_pieces<R: Rng + ?Sized>(
    size: usize,
    pieces: usize,
    rng: &mut R,
) -> Result<Lattice> {
    let mut lattice = Lattice::new(size)?;
    let cells = lattice.cell_count();
    if pieces > cells {
        return Err(NeoPawnError::TooManyPieces { pieces, cells });
    }

    for flat in index::sample(rng, cells, pieces).iter() {
        lattice.place(Position::from_index(flat, size));
    }

    Ok(lattice)
}
