//! Well-known property names.
//!
//! Pure constants mapping domain concepts to property-bag keys. Items may
//! carry any names; these are the ones the built-in rules know about.

pub const TITLE: &str = "Title";
pub const ARTIST: &str = "Artist";
pub const ALBUM: &str = "Album";
pub const GENRE: &str = "Genre";
pub const YEAR: &str = "Year";
pub const DISC: &str = "Disc";
pub const TRACK: &str = "Track";
pub const DURATION: &str = "Duration";
