use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn is_borrowed(&self) -> bool;

    fn status(&self) -> BookStatus {
        BookStatus::from_borrowed(self.is_borrowed())
    }
}
