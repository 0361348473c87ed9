use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Book is the only entity of the store. The id is zero until the repository
// assigns one on creation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: i64,
    pub name_book: String,
    pub author: String,
}

impl Book {
    pub fn new(name_book: &str, author: &str) -> Self {
        Self {
            id: 0,
            name_book: name_book.to_string(),
            author: author.to_string(),
        }
    }

    pub(crate) fn with_id(&self, id: i64) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

impl Identifiable for Book {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::Book;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = Book::new("Into Deep...", "ayu");
        assert_eq!(0, book.id());
        assert_eq!("Into Deep...", book.name_book.as_str());
        assert_eq!("ayu", book.author.as_str());
        assert_eq!(7, book.with_id(7).id());
    }

    #[tokio::test]
    async fn test_should_default_to_zero_value() {
        let book = Book::default();
        assert_eq!(0, book.id);
        assert!(book.name_book.is_empty());
        assert!(book.author.is_empty());
    }

    #[tokio::test]
    async fn test_should_read_book_without_id() {
        let book: Book = serde_json::from_value(json!({"name_book": "Into Deep...", "author": "ayu"}))
            .expect("should parse book");
        assert_eq!(Book::new("Into Deep...", "ayu"), book);

        let val = serde_json::to_value(book.with_id(3)).expect("should serialize book");
        assert_eq!(json!({"id": 3, "name_book": "Into Deep...", "author": "ayu"}), val);
    }
}
