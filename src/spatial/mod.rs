pub mod lattice;
pub mod placement;

pub use lattice::Lattice;
pub use placement::scatter_pieces;
