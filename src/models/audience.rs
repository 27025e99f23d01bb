/// Upper age accepted from the presentation layer
pub const MAX_AGE: u32 = 120;

/// Age bracket used to restrict genres in demographic recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// Under 13
    Child,
    /// 13 to 17
    Teen,
    /// 18 and over
    Adult,
}

const CHILD_GENRES: &[&str] = &["Animation", "Family"];
const TEEN_GENRES: &[&str] = &["Comedy", "Adventure", "Action"];

impl AgeBand {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeBand::Child,
            13..=17 => AgeBand::Teen,
            _ => AgeBand::Adult,
        }
    }

    /// Genres this band may be shown; `None` means no restriction
    pub fn allowed_genres(self) -> Option<&'static [&'static str]> {
        match self {
            AgeBand::Child => Some(CHILD_GENRES),
            AgeBand::Teen => Some(TEEN_GENRES),
            AgeBand::Adult => None,
        }
    }

    pub fn permits(self, genre: &str) -> bool {
        match self.allowed_genres() {
            Some(genres) => genres.contains(&genre),
            None => true,
        }
    }
}
