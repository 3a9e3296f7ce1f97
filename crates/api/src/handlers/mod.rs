pub mod packs;
pub mod sections;
pub mod studios;
pub mod tags;
