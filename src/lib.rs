pub mod core {
    pub use chroma_core::*;
}

pub mod palette {
    pub use chroma_palette::*;
}
