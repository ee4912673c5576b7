pub mod degree;
pub mod density;
pub mod square_clustering;
pub mod summary;
