mod game;
pub(crate) mod storage;

pub use game::{absolute_url, slug_of, title_from_slug, Candidate, GameRecord, NO_IMAGE};
