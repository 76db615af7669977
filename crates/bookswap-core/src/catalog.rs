//! # Book Catalog
//!
//! The static set of books, genres and neighbours the pages browse.
//!
//! Listings and requests reference books by `book_id`; this module resolves
//! those ids to titles. The store only uses it to word notifications, so an
//! unknown id is never an error for a mutation.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Name and avatar of the neighbour holding a catalog copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookOwner {
    pub name: String,
    pub avatar: String,
}

/// A book title in the community catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub genre: String,
    pub rating: f64,
    pub distance: String,
    pub owner: BookOwner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub image: String,
    pub book_count: u32,
}

/// A neighbour shown on the community map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub distance: String,
    pub books_listed: u32,
}

// (id, title, author, cover, genre, rating, distance, owner, owner avatar, available)
type BookRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    &'static str,
    &'static str,
    &'static str,
    bool,
);

const FEATURED_DESCRIPTION: &str = "Between life and death there is a library. \
Every book is another life you could have lived. A warm, hopeful novel about \
regret, possibility, and second chances.";

const BOOKS: &[BookRow] = &[
    ("1", "The Midnight Library", "Matt Haig", "/featured_book.jpg", "Fiction", 4.8, "12 min away", "Priya", "/avatar_priya.jpg", true),
    ("2", "The Whispering Leaves", "Isabel Chen", "/book1.jpg", "Literary Fiction", 4.5, "0.8 mi", "Maya", "/avatar_maya.jpg", true),
    ("3", "The Silent Sanctuary", "Eleanor Vance", "/book2.jpg", "Mystery", 4.7, "1.2 mi", "Jonas", "/avatar_jonas.jpg", false),
    ("4", "Neo-Orbital Frontires", "Kai Lin", "/book3.jpg", "Sci-Fi", 4.3, "0.5 mi", "Priya", "/avatar_priya.jpg", true),
    ("5", "Whispers of the Heart", "Amelia Rose", "/book4.jpg", "Romance", 4.6, "1.5 mi", "Ava", "/testimonial_ava.jpg", false),
    ("6", "The Maritime Chronicles", "Eleanor Vance", "/book5.jpg", "Historical Fiction", 4.4, "0.9 mi", "Nora", "/testimonial_nora.jpg", true),
    ("7", "The Whispers of Avalon", "Elara Vance", "/book6.jpg", "Fantasy", 4.8, "1.1 mi", "Raj", "/testimonial_raj.jpg", true),
    ("8", "The Unfolding Path", "Marcus Chen", "/book7.jpg", "Self-Help", 4.2, "0.7 mi", "Maya", "/avatar_maya.jpg", true),
    ("9", "Wuthering Heights", "Emily Brontë", "/book8.jpg", "Classic", 4.9, "1.3 mi", "Jonas", "/avatar_jonas.jpg", true),
];

/// Id of the book featured on the homepage.
pub const FEATURED_BOOK_ID: &str = "1";

fn build_books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(
            |&(id, title, author, cover, genre, rating, distance, owner, avatar, available)| Book {
                id: id.to_string(),
                title: title.to_string(),
                author: author.to_string(),
                cover: cover.to_string(),
                genre: genre.to_string(),
                rating,
                distance: distance.to_string(),
                owner: BookOwner {
                    name: owner.to_string(),
                    avatar: avatar.to_string(),
                },
                description: (id == FEATURED_BOOK_ID).then(|| FEATURED_DESCRIPTION.to_string()),
                is_available: available,
            },
        )
        .collect()
}

/// Every catalog book, featured book first.
pub fn all_books() -> &'static [Book] {
    static CATALOG: OnceLock<Vec<Book>> = OnceLock::new();
    CATALOG.get_or_init(build_books)
}

/// The homepage's featured book.
pub fn featured_book() -> &'static Book {
    &all_books()[0]
}

pub fn find_book(id: &str) -> Option<&'static Book> {
    all_books().iter().find(|b| b.id == id)
}

/// Like [`find_book`], but a miss is a `CoreError::BookNotFound`.
pub fn require_book(id: &str) -> CoreResult<&'static Book> {
    find_book(id).ok_or_else(|| CoreError::BookNotFound(id.to_string()))
}

/// Genres shown on the explorer strip.
pub fn genres() -> Vec<Genre> {
    [
        ("1", "Fiction", "/genre_fiction.jpg", 24),
        ("2", "Mystery", "/genre_mystery.jpg", 18),
        ("3", "Sci-Fi", "/genre_scifi.jpg", 15),
        ("4", "Romance", "/genre_romance.jpg", 21),
        ("5", "Biography", "/genre_biography.jpg", 12),
    ]
    .into_iter()
    .map(|(id, name, image, book_count)| Genre {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        book_count,
    })
    .collect()
}

/// Neighbours shown on the community map.
pub fn nearby_members() -> Vec<CommunityMember> {
    [
        ("1", "Priya", "/avatar_priya.jpg", "0.8 mi", 12),
        ("2", "Jonas", "/avatar_jonas.jpg", "1.2 mi", 8),
        ("3", "Maya", "/avatar_maya.jpg", "0.5 mi", 15),
    ]
    .into_iter()
    .map(|(id, name, avatar, distance, books_listed)| CommunityMember {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        distance: distance.to_string(),
        books_listed,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let books = all_books();
        assert_eq!(books.len(), 9);
        for (i, book) in books.iter().enumerate() {
            assert!(books[i + 1..].iter().all(|other| other.id != book.id));
        }
    }

    #[test]
    fn test_featured_book_has_description() {
        let featured = featured_book();
        assert_eq!(featured.id, FEATURED_BOOK_ID);
        assert_eq!(featured.owner.name, "Priya");
        assert!(featured.description.is_some());
        assert!(find_book("2").unwrap().description.is_none());
    }

    #[test]
    fn test_require_book_miss() {
        assert_eq!(require_book("7").unwrap().title, "The Whispers of Avalon");
        let err = require_book("404").unwrap_err();
        assert!(matches!(err, CoreError::BookNotFound(id) if id == "404"));
    }

    #[test]
    fn test_genres_and_members() {
        assert_eq!(genres().len(), 5);
        let members = nearby_members();
        assert_eq!(members[2].name, "Maya");
        assert_eq!(members[2].books_listed, 15);
    }
}
