pub mod errors;
pub mod graph;
pub mod io;

pub mod prelude {
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::io::*;
}

#[cfg(test)]
mod testing;
