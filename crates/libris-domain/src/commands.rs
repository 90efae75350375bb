//! Domain commands
//!
//! One command per aggregate. Required text fields are plain `String`s;
//! every optional field is an `Option` and is only validated when present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::*;

/// Fields shared by every media aggregate (book, movie, music)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaCommand {
    pub title: String,
    pub subtitle: Option<String>,
    pub details: Option<String>,
    pub genre_id: Option<GenreId>,
    pub media_type_id: Option<MediaTypeId>,
    pub language_id: Option<LanguageId>,
    pub year_published: Option<i32>,
    pub image: Option<Vec<u8>>,
    pub internet_link: Option<String>,
}

impl MediaCommand {
    /// Media with only its title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Register or update a book
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookCommand {
    #[serde(flatten)]
    pub media: MediaCommand,
    /// International Standard Book Number
    pub isbn: Option<String>,
    pub author_ids: Option<Vec<MediaPersonalityId>>,
}

/// Register or update a movie
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieCommand {
    #[serde(flatten)]
    pub media: MediaCommand,
    /// Running time in minutes
    pub length: Option<i32>,
    pub director_ids: Option<Vec<MediaPersonalityId>>,
    pub actor_ids: Option<Vec<MediaPersonalityId>>,
}

/// Register or update a music release
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicCommand {
    #[serde(flatten)]
    pub media: MediaCommand,
    /// Running time in minutes
    pub length: Option<i32>,
    pub number_of_tracks: Option<i32>,
    pub artist_ids: Option<Vec<MediaPersonalityId>>,
}

/// Register or update an author, director, actor or artist
///
/// Only the surname is required; bands and single-name artists carry no
/// given name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaPersonalityCommand {
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub surname: String,
    pub description: Option<String>,
    pub nationality_id: Option<NationalityId>,
    pub birth_date: Option<DateTime<Utc>>,
    pub date_of_dead: Option<DateTime<Utc>>,
    pub image: Option<Vec<u8>>,
    pub internet_link: Option<String>,
}

/// Register or update a borrower
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorrowerCommand {
    pub full_name: String,
    pub phone_number: Option<String>,
    pub mail_address: Option<String>,
    pub description: Option<String>,
    /// Days a lending may run before recall
    pub lending_limit: i32,
}

/// Lend a media item to a borrower, or record its return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingCommand {
    pub borrower_id: BorrowerId,
    pub media_id: MediaId,
    pub lending_date: DateTime<Utc>,
    pub recall_date: DateTime<Utc>,
    #[serde(default)]
    pub returned_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl LendingCommand {
    /// Open lending without a return date
    pub fn new(
        borrower_id: BorrowerId,
        media_id: MediaId,
        lending_date: DateTime<Utc>,
        recall_date: DateTime<Utc>,
    ) -> Self {
        Self {
            borrower_id,
            media_id,
            lending_date,
            recall_date,
            returned_date: None,
            description: None,
        }
    }
}

/// Any command the engine knows how to validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Command {
    Media(MediaCommand),
    Book(BookCommand),
    Movie(MovieCommand),
    Music(MusicCommand),
    MediaPersonality(MediaPersonalityCommand),
    Borrower(BorrowerCommand),
    Lending(LendingCommand),
}

impl Command {
    /// Aggregate name used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Media(_) => "media",
            Command::Book(_) => "book",
            Command::Movie(_) => "movie",
            Command::Music(_) => "music",
            Command::MediaPersonality(_) => "media-personality",
            Command::Borrower(_) => "borrower",
            Command::Lending(_) => "lending",
        }
    }
}
